//! Ranking pipeline: score, deduplicate, order.
//!
//! [`Ranker::rank`] is the crate's entry point. One pass is a pure,
//! synchronous batch operation over an immutable input list: listings are
//! scored (semantic similarity, price, availability, heuristics under
//! query-dependent weights), near-duplicates are collapsed to their best
//! variant, and the survivors are returned in descending score order with
//! all transient scores stripped. Concurrent passes over the same shared
//! encoder need no locking.

pub mod config;
pub mod dedup;
pub mod error;


pub use config::{DEFAULT_STOPLIST, RankerConfig};
pub use dedup::canonical_key;
pub use error::RankingError;

use std::cmp::Ordering;
use std::sync::Arc;

use tracing::debug;

use crate::embedding::TextEncoder;
use crate::listing::{Listing, ScoredListing};
use crate::scoring::{HeuristicScorer, SemanticScorer, WeightTriple, price_score};

/// Ranks and deduplicates scraped listings for one query.
pub struct Ranker {
    semantic: SemanticScorer,
    heuristics: HeuristicScorer,
    config: RankerConfig,
}

impl std::fmt::Debug for Ranker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ranker")
            .field("semantic", &self.semantic)
            .field("stoplist_len", &self.config.stoplist.len())
            .finish()
    }
}

impl Ranker {
    /// Creates a ranker with the production vocabulary and stoplist.
    pub fn new(encoder: Arc<TextEncoder>) -> Self {
        Self::with_config(encoder, RankerConfig::default())
    }

    /// Creates a ranker with an injected configuration.
    pub fn with_config(encoder: Arc<TextEncoder>, config: RankerConfig) -> Self {
        Self {
            semantic: SemanticScorer::new(encoder),
            heuristics: HeuristicScorer::with_config(config.heuristics.clone()),
            config,
        }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    /// Ranks `listings` against `query`.
    ///
    /// Returns at most one listing per canonical key, ordered by final
    /// score descending with ties kept in input order. An empty input
    /// short-circuits to an empty result without touching the embedding
    /// backend; a backend failure aborts the pass with
    /// [`RankingError::ModelUnavailable`].
    pub fn rank(&self, listings: Vec<Listing>, query: &str) -> Result<Vec<Listing>, RankingError> {
        if listings.is_empty() {
            debug!(query, "No listings to rank");
            return Ok(Vec::new());
        }

        let weights = WeightTriple::for_query(query);
        debug!(
            query,
            num_listings = listings.len(),
            relevance_weight = weights.relevance,
            price_weight = weights.price,
            availability_weight = weights.availability,
            "Starting ranking pass"
        );

        let scored = self.score(listings, query, weights)?;
        let mut survivors = dedup::collapse(scored, &self.config.stoplist);

        // Stable sort: equal scores keep first-encounter (input) order.
        survivors.sort_by(|a, b| {
            b.final_score
                .partial_cmp(&a.final_score)
                .unwrap_or(Ordering::Equal)
        });

        if let Some(top) = survivors.first() {
            debug!(
                name = %top.listing.name,
                final_score = top.final_score,
                semantic_score = top.semantic_score,
                price_score = top.price_score,
                availability_score = top.availability_score,
                "Top listing after dedup"
            );
        }

        debug!(survivors = survivors.len(), "Ranking pass complete");

        Ok(survivors.into_iter().map(|s| s.listing).collect())
    }

    /// Scores every listing: one semantic batch call plus the per-listing
    /// total functions.
    fn score(
        &self,
        listings: Vec<Listing>,
        query: &str,
        weights: WeightTriple,
    ) -> Result<Vec<ScoredListing>, RankingError> {
        let texts: Vec<String> = listings.iter().map(Listing::embedding_text).collect();
        let text_refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let semantic_scores = self.semantic.score_batch(query, &text_refs)?;

        let scored = listings
            .into_iter()
            .zip(semantic_scores)
            .map(|(listing, semantic_score)| {
                let price_score = price_score(&listing.price);
                let availability_score = listing.availability.score();
                let adjustment = self.heuristics.adjustment(&listing.name, query);

                let final_score = weights.relevance * semantic_score
                    + weights.price * price_score
                    + weights.availability * availability_score
                    + adjustment;

                debug!(
                    name = %listing.name,
                    semantic_score,
                    price_score,
                    availability_score,
                    adjustment,
                    final_score,
                    "Scored listing"
                );

                ScoredListing {
                    listing,
                    semantic_score,
                    price_score,
                    availability_score,
                    final_score,
                }
            })
            .collect();

        Ok(scored)
    }
}
