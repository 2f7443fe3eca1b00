//! Per-listing scoring signals.
//!
//! Four independent signals feed the aggregation in [`crate::ranking`]:
//!
//! - [`SemanticScorer`] — query/listing embedding cosine similarity.
//! - [`price_score`] — inverse-price desirability.
//! - [`HeuristicScorer`] — rule-based bonuses and penalties under an
//!   injected vocabulary.
//! - [`WeightTriple`] — query-shape-dependent weighting of the above.
//!
//! Only the semantic signal can fail; everything else is total.

pub mod config;
pub mod error;
pub mod heuristics;
pub mod price;
pub mod semantic;
pub mod weights;


pub use config::HeuristicConfig;
pub use error::ScoringError;
pub use heuristics::HeuristicScorer;
pub use price::price_score;
pub use semantic::{SemanticScorer, cosine_similarity};
pub use weights::{
    LONG_QUERY_MIN_TOKENS, LONG_QUERY_WEIGHTS, SHORT_QUERY_WEIGHTS, WeightTriple,
};
