//! Rule-based score adjustments.
//!
//! Every sub-rule is a pure, total function of its string inputs, evaluated
//! on cleaned text with substring semantics. The vocabulary is injected via
//! [`HeuristicConfig`].

use crate::text;

use super::config::HeuristicConfig;

/// Computes the signed heuristic adjustment for a listing name.
#[derive(Debug, Clone, Default)]
pub struct HeuristicScorer {
    config: HeuristicConfig,
}

impl HeuristicScorer {
    /// Creates a scorer with the production vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scorer with an injected vocabulary.
    pub fn with_config(config: HeuristicConfig) -> Self {
        Self { config }
    }

    /// Returns the active vocabulary.
    pub fn config(&self) -> &HeuristicConfig {
        &self.config
    }

    /// Signed adjustment (bonuses minus penalties) for `name` under `query`.
    pub fn adjustment(&self, name: &str, query: &str) -> f32 {
        let name = text::clean(name);
        let query = text::clean(query);

        self.board_bonus(&name) + self.simplicity_adjustment(&name) + self.official_bias(&name)
            + self.token_match_bonus(&name, &query)
            - self.accessory_penalty(&name, &query)
    }

    /// Penalizes accessory-like names unless the query itself requests an
    /// accessory.
    fn accessory_penalty(&self, name: &str, query: &str) -> f32 {
        let is_accessory = |t: &String| name.contains(t.as_str());
        let query_wants_accessory = |t: &String| query.contains(t.as_str());

        if self.config.accessory_terms.iter().any(query_wants_accessory) {
            return 0.0;
        }
        if self.config.accessory_terms.iter().any(is_accessory) {
            self.config.accessory_penalty
        } else {
            0.0
        }
    }

    /// Boosts names that mention the core product rather than a peripheral:
    /// either a core phrase or an adjacent prefix/designation token pair.
    fn board_bonus(&self, name: &str) -> f32 {
        if self
            .config
            .core_phrases
            .iter()
            .any(|p| name.contains(p.as_str()))
        {
            return self.config.board_bonus;
        }

        let tokens: Vec<&str> = name.split_whitespace().collect();
        for pair in tokens.windows(2) {
            let prefix_hit = self.config.core_prefixes.iter().any(|p| p == pair[0]);
            let designation_hit = self.config.core_designations.iter().any(|d| d == pair[1]);
            if prefix_hit && designation_hit {
                return self.config.board_bonus;
            }
        }

        0.0
    }

    /// Kit-like names get penalized, bare components get a small boost.
    fn simplicity_adjustment(&self, name: &str) -> f32 {
        if self
            .config
            .kit_terms
            .iter()
            .any(|t| name.contains(t.as_str()))
        {
            return -self.config.kit_penalty;
        }
        if self
            .config
            .component_terms
            .iter()
            .any(|t| name.contains(t.as_str()))
        {
            return self.config.component_bonus;
        }
        0.0
    }

    fn official_bias(&self, name: &str) -> f32 {
        if name.contains(self.config.official_term.as_str()) {
            self.config.official_bonus
        } else {
            0.0
        }
    }

    /// Rewards literal keyword overlap independent of the semantic signal.
    fn token_match_bonus(&self, name: &str, query: &str) -> f32 {
        let mut bonus = 0.0;
        for token in query.split_whitespace() {
            if name.contains(token) {
                bonus += self.config.token_hit_bonus;
            } else {
                bonus -= self.config.token_miss_penalty;
            }
        }
        bonus
    }
}
