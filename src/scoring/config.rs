/// Vocabulary and weights for the rule-based heuristics.
///
/// All terms are matched against cleaned text (see [`crate::text::clean`])
/// with substring semantics, so keep entries lower-case and alphanumeric.
/// [`Default`] carries the production vocabulary; tests inject alternates.
#[derive(Debug, Clone)]
pub struct HeuristicConfig {
    /// Terms marking a listing as a peripheral accessory.
    pub accessory_terms: Vec<String>,
    /// Penalty applied when the name looks like an accessory but the query
    /// does not ask for one.
    pub accessory_penalty: f32,

    /// Phrases marking a listing as the core product.
    pub core_phrases: Vec<String>,
    /// Token prefixes that combine with a designation into a core-product
    /// mention ("model 4", "pi 5").
    pub core_prefixes: Vec<String>,
    /// Model designations accepted after a core prefix.
    pub core_designations: Vec<String>,
    /// Bonus for core-product listings.
    pub board_bonus: f32,

    /// Kit/bundle/educational terms.
    pub kit_terms: Vec<String>,
    /// Penalty for kit-like listings.
    pub kit_penalty: f32,
    /// Bare-component terms.
    pub component_terms: Vec<String>,
    /// Bonus for bare-component listings.
    pub component_bonus: f32,

    /// Term marking an official listing.
    pub official_term: String,
    /// Bonus for official listings.
    pub official_bonus: f32,

    /// Bonus per query token present verbatim in the name.
    pub token_hit_bonus: f32,
    /// Penalty per query token absent from the name.
    pub token_miss_penalty: f32,
}

fn terms(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            accessory_terms: terms(&[
                "case",
                "cover",
                "cable",
                "wire",
                "screw",
                "holder",
                "mount",
                "bracket",
                "connector",
                "clip",
            ]),
            accessory_penalty: 0.6,
            core_phrases: terms(&["single board computer", "compute module"]),
            core_prefixes: terms(&["model", "pi"]),
            core_designations: terms(&["3", "4", "5"]),
            board_bonus: 0.5,
            kit_terms: terms(&[
                "kit", "starter", "guide", "book", "tutorial", "project", "bundle",
            ]),
            kit_penalty: 0.2,
            component_terms: terms(&["board", "module", "sensor"]),
            component_bonus: 0.1,
            official_term: "official".to_string(),
            official_bonus: 0.05,
            token_hit_bonus: 0.1,
            token_miss_penalty: 0.05,
        }
    }
}
