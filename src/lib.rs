//! Shelfrank: semantic ranking and deduplication for scraped product listings.
//!
//! Given the listings collected from multiple catalog sources for one search
//! query, [`Ranker::rank`] produces a single ordered list: each listing is
//! scored by a weighted combination of embedding cosine similarity, an
//! inverse-price signal, availability, and rule-based heuristics, then
//! near-duplicates are collapsed to their best-scoring variant.
//!
//! # Public API Surface
//!
//! ## Ranking
//! - [`Ranker`], [`RankerConfig`], [`RankingError`] - the pipeline
//! - [`canonical_key`] - near-duplicate grouping key
//!
//! ## Data Model
//! - [`Listing`], [`Availability`] - input and output record shape
//!
//! ## Scoring Signals
//! - [`SemanticScorer`], [`cosine_similarity`] - embedding similarity
//! - [`HeuristicScorer`], [`HeuristicConfig`] - rule-based adjustments
//! - [`price_score`] - inverse-price desirability
//! - [`WeightTriple`] - query-dependent signal weighting
//!
//! ## Embedding Backend
//! - [`TextEncoder`], [`EncoderConfig`] - sentence encoder; use
//!   [`EncoderConfig::stub`] for tests without model files
//!
//! The encoder is expensive to initialize: create it once per process and
//! share it (`Arc<TextEncoder>`) across rankers. Ranking passes are pure
//! and synchronous; concurrent passes need no locking.

pub mod constants;
pub mod embedding;
pub mod listing;
pub mod ranking;
pub mod scoring;
pub mod text;

pub use embedding::{
    ENCODER_EMBEDDING_DIM, ENCODER_MAX_SEQ_LEN, EmbeddingError, EncoderConfig, TextEncoder,
};
pub use listing::{Availability, Listing};
pub use ranking::{DEFAULT_STOPLIST, Ranker, RankerConfig, RankingError, canonical_key};
pub use scoring::{
    HeuristicConfig, HeuristicScorer, LONG_QUERY_MIN_TOKENS, LONG_QUERY_WEIGHTS, ScoringError,
    SHORT_QUERY_WEIGHTS, SemanticScorer, WeightTriple, cosine_similarity, price_score,
};
