//! Listing data model.
//!
//! [`Listing`] is the record handed over by the acquisition collaborators
//! (one scraped product per record) and the shape returned to callers after
//! ranking. The engine never mutates a listing; scoring happens on the
//! crate-internal [`ScoredListing`] wrapper, which is stripped back to a
//! plain [`Listing`] before results leave the crate.

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

/// Stock status as reported by a catalog source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Availability {
    /// In stock.
    Yes,
    /// Reported out of stock.
    No,
    /// The source did not report a status.
    #[default]
    Unknown,
}

impl Availability {
    /// Availability contribution to the final score.
    ///
    /// Out-of-stock listings are only mildly penalized rather than
    /// disqualified; alert-worthy unavailable items must still rank visibly.
    pub fn score(self) -> f32 {
        match self {
            Availability::Yes => 1.0,
            Availability::No | Availability::Unknown => 0.8,
        }
    }
}

/// One scraped product record for a given query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Product title as scraped.
    pub name: String,
    /// Free-form price string (currency symbol prefixed or suffixed).
    pub price: String,
    /// Stock status. Defaults to [`Availability::Unknown`] when absent.
    #[serde(default)]
    pub availability: Availability,
    /// Catalog source the record came from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Product image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Product page URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Listing {
    /// Creates a listing with only the required fields set.
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            availability: Availability::Unknown,
            source: None,
            image_url: None,
            link: None,
        }
    }

    /// Text fed to the embedding backend for this listing.
    pub fn embedding_text(&self) -> String {
        format!("{} {}", self.name, self.price)
    }
}

/// A listing annotated with the transient per-pass scores.
///
/// Lives only within one ranking pass; results are stripped back to
/// [`Listing`] before they are returned.
#[derive(Debug, Clone)]
pub(crate) struct ScoredListing {
    pub listing: Listing,
    pub semantic_score: f32,
    pub price_score: f32,
    pub availability_score: f32,
    pub final_score: f32,
}
