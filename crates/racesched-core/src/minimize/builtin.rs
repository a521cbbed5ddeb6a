use crate::error::ScheduleError;
use crate::minimize::schema::RuleSet;

const DEFAULT_JSON: &str = include_str!("../../../../rules/default.json");

/// Available predefined rule sets.
pub const PRESETS: &[&str] = &["default"];

/// Load a predefined rule set by name.
pub fn load_preset(name: &str) -> Result<RuleSet, ScheduleError> {
    match name {
        "default" => {
            let rules: RuleSet = serde_json::from_str(DEFAULT_JSON)?;
            Ok(rules)
        }
        _ => Err(ScheduleError::RulesInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}
