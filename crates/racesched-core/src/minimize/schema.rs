use serde::{Deserialize, Serialize};

/// A literal, case-insensitive find/replace pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacementRule {
    pub original: String,
    /// Empty to delete the matched text.
    #[serde(default)]
    pub replacement: String,
}

/// Replacement rules for the display strings of a schedule, applied in list order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub track_names: Vec<ReplacementRule>,
    #[serde(default)]
    pub track_configs: Vec<ReplacementRule>,
    #[serde(default)]
    pub cars: Vec<ReplacementRule>,
}

impl RuleSet {
    /// Append the rules of `other` after this set's rules.
    pub fn extend(&mut self, other: RuleSet) {
        self.track_names.extend(other.track_names);
        self.track_configs.extend(other.track_configs);
        self.cars.extend(other.cars);
    }

    pub fn rule_count(&self) -> usize {
        self.track_names.len() + self.track_configs.len() + self.cars.len()
    }
}
