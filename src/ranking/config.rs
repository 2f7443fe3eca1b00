use crate::scoring::HeuristicConfig;

/// Descriptive filler words stripped from names during canonicalization.
pub const DEFAULT_STOPLIST: [&str; 9] = [
    "official",
    "model",
    "computer",
    "motherboard",
    "ram",
    "single",
    "plus",
    "sbc",
    "desktop",
];

/// Configuration for [`Ranker`](super::Ranker).
#[derive(Debug, Clone)]
pub struct RankerConfig {
    /// Vocabulary for the rule-based heuristics.
    pub heuristics: HeuristicConfig,
    /// Filler words removed when building canonical dedup keys.
    pub stoplist: Vec<String>,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            heuristics: HeuristicConfig::default(),
            stoplist: DEFAULT_STOPLIST.iter().map(|w| w.to_string()).collect(),
        }
    }
}
