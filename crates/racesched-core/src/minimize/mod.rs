pub mod builtin;
pub mod schema;

use crate::error::ScheduleError;
use regex::{NoExpand, Regex, RegexBuilder};
use schema::{ReplacementRule, RuleSet};
use std::path::Path;
use std::sync::LazyLock;

static CAR_LIST_SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s+vs\s+|\s*/\s*|\s*,\s*").expect("valid car list separator regex")
});

/// Load a rule set from a JSON file.
pub fn load_rules(path: &Path) -> Result<RuleSet, ScheduleError> {
    let content = std::fs::read_to_string(path).map_err(|e| ScheduleError::RulesLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_rules(&content, path)
}

/// Parse a rule set from a JSON string.
pub fn parse_rules(json: &str, source: &Path) -> Result<RuleSet, ScheduleError> {
    let rules: RuleSet = serde_json::from_str(json).map_err(|e| ScheduleError::RulesLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_rules(&rules)?;
    Ok(rules)
}

/// Validate that a rule set is well-formed.
pub fn validate_rules(rules: &RuleSet) -> Result<(), ScheduleError> {
    if rules.name.trim().is_empty() {
        return Err(ScheduleError::RulesInvalid("name must not be empty".into()));
    }

    let groups = [
        ("track_names", &rules.track_names),
        ("track_configs", &rules.track_configs),
        ("cars", &rules.cars),
    ];
    for (group, list) in groups {
        if let Some(pos) = list.iter().position(|r| r.original.is_empty()) {
            return Err(ScheduleError::RulesInvalid(format!(
                "{} rule #{} has an empty 'original'",
                group,
                pos + 1
            )));
        }
    }

    Ok(())
}

/// Compiled replacement rules for display strings.
///
/// A disabled minimizer returns every string unchanged.
#[derive(Debug, Clone, Default)]
pub struct Minimizer {
    track_names: Vec<CompiledRule>,
    track_configs: Vec<CompiledRule>,
    cars: Vec<CompiledRule>,
    enabled: bool,
}

#[derive(Debug, Clone)]
struct CompiledRule {
    pattern: Regex,
    replacement: String,
}

impl Minimizer {
    pub fn new(rules: &RuleSet) -> Result<Self, ScheduleError> {
        Ok(Self {
            track_names: compile(&rules.track_names)?,
            track_configs: compile(&rules.track_configs)?,
            cars: compile(&rules.cars)?,
            enabled: true,
        })
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn track_name(&self, text: &str) -> String {
        self.apply(text, &self.track_names)
    }

    pub fn track_config(&self, text: &str) -> String {
        self.apply(text, &self.track_configs)
    }

    pub fn car(&self, text: &str) -> String {
        self.apply(text, &self.cars)
    }

    /// Minimize each car of a "Car A vs Car B" / "A / B" / "A, B" list and
    /// rejoin with " / ".
    pub fn car_list(&self, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        CAR_LIST_SEPARATOR_RE
            .split(text)
            .map(|part| self.car(part.trim()))
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" / ")
    }

    fn apply(&self, text: &str, rules: &[CompiledRule]) -> String {
        if !self.enabled {
            return text.to_string();
        }
        rules.iter().fold(text.to_string(), |acc, rule| {
            rule.pattern
                .replace_all(&acc, NoExpand(&rule.replacement))
                .into_owned()
        })
    }
}

fn compile(rules: &[ReplacementRule]) -> Result<Vec<CompiledRule>, ScheduleError> {
    rules
        .iter()
        .map(|rule| {
            let pattern = RegexBuilder::new(&regex::escape(&rule.original))
                .case_insensitive(true)
                .build()
                .map_err(|e| {
                    ScheduleError::RulesInvalid(format!("rule '{}': {}", rule.original, e))
                })?;
            Ok(CompiledRule {
                pattern,
                replacement: rule.replacement.clone(),
            })
        })
        .collect()
}
