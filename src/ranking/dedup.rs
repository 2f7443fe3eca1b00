//! Canonical-key construction and near-duplicate collapse.

use std::collections::HashMap;

use crate::listing::ScoredListing;
use crate::text;

/// Builds the canonical grouping key for a listing name.
///
/// Lower-cases, strips non-alphanumerics, removes stoplist fillers as
/// substrings, and collapses whitespace. Listings sharing a key represent
/// the same underlying product.
pub fn canonical_key(name: &str, stoplist: &[String]) -> String {
    let mut key = text::clean(name);
    for filler in stoplist {
        key = key.replace(filler.as_str(), "");
    }
    key.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Collapses each canonical-key group to its single best-scoring listing.
///
/// Groups are keyed on first encounter and survivors keep that order; on
/// equal scores the first-encountered listing wins, so the operation is
/// deterministic for a fixed input order.
pub(crate) fn collapse(scored: Vec<ScoredListing>, stoplist: &[String]) -> Vec<ScoredListing> {
    let mut survivors: Vec<ScoredListing> = Vec::new();
    let mut slot_by_key: HashMap<String, usize> = HashMap::new();

    for candidate in scored {
        let key = canonical_key(&candidate.listing.name, stoplist);
        match slot_by_key.get(&key) {
            Some(&slot) => {
                if candidate.final_score > survivors[slot].final_score {
                    survivors[slot] = candidate;
                }
            }
            None => {
                slot_by_key.insert(key, survivors.len());
                survivors.push(candidate);
            }
        }
    }

    survivors
}
