//! Query-dependent signal weighting.

use crate::text;

/// Token count at which a query counts as descriptive.
pub const LONG_QUERY_MIN_TOKENS: usize = 3;

/// Weights for descriptive queries: relevance dominates, price and
/// availability matter less as disambiguators.
pub const LONG_QUERY_WEIGHTS: WeightTriple = WeightTriple {
    relevance: 0.50,
    price: 0.35,
    availability: 0.15,
};

/// Weights for terse queries.
pub const SHORT_QUERY_WEIGHTS: WeightTriple = WeightTriple {
    relevance: 0.50,
    price: 0.30,
    availability: 0.20,
};

/// Relevance/price/availability weighting for one ranking pass.
///
/// Not required to sum to 1; read-only once derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightTriple {
    pub relevance: f32,
    pub price: f32,
    pub availability: f32,
}

impl WeightTriple {
    /// Derives the weight triple from query shape.
    ///
    /// Total for any input; an empty query has zero tokens and takes the
    /// terse branch.
    pub fn for_query(query: &str) -> Self {
        if text::tokenize(query).len() >= LONG_QUERY_MIN_TOKENS {
            LONG_QUERY_WEIGHTS
        } else {
            SHORT_QUERY_WEIGHTS
        }
    }
}
