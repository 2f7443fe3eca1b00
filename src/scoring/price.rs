//! Free-form price string to desirability score.

use tracing::debug;

use crate::constants::MIN_PRICE_SCORE;

/// Currency symbols emitted by the catalog scrapers.
const CURRENCY_SYMBOLS: [char; 4] = ['₹', '$', '€', '£'];

/// Converts a raw price string into an inverse-price desirability score.
///
/// Thousands separators and currency symbols are stripped before parsing.
/// Malformed or non-positive prices degrade to `0.0` (no price signal);
/// valid prices map to `max(1/price, MIN_PRICE_SCORE)` so extremely
/// expensive items keep a strictly positive score. Never panics.
pub fn price_score(raw: &str) -> f32 {
    let cleaned: String = raw
        .chars()
        .filter(|c| !CURRENCY_SYMBOLS.contains(c) && *c != ',')
        .collect();

    match cleaned.trim().parse::<f32>() {
        Ok(price) if price > 0.0 => (1.0 / price).max(MIN_PRICE_SCORE),
        Ok(price) => {
            debug!(raw, price, "Non-positive price, no price signal");
            0.0
        }
        Err(_) => {
            debug!(raw, "Malformed price string, no price signal");
            0.0
        }
    }
}
