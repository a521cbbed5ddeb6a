use crate::error::ScheduleError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunables for the schedule parser. The defaults reproduce the layout of
/// the official season schedule PDFs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParseOptions {
    /// Fragments whose baselines differ by less than this share a line.
    pub y_tolerance: f32,
    /// Series with more week entries than this are treated as misparsed.
    pub max_weeks: usize,
    /// Sort fragments of a line by `x` instead of trusting extraction order.
    pub order_by_x: bool,
    pub draft_master_marker: String,
    pub ring_meister_marker: String,
    /// Track name used when a Ring Meister week line carries no track text.
    pub ring_meister_fallback_track: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            y_tolerance: 5.0,
            max_weeks: 12,
            order_by_x: false,
            draft_master_marker: "Draft Master".into(),
            ring_meister_marker: "Ring Meister".into(),
            ring_meister_fallback_track: "Nürburgring Combined".into(),
        }
    }
}

impl ParseOptions {
    /// Load options from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ScheduleError> {
        let content = std::fs::read_to_string(path).map_err(|e| ScheduleError::OptionsLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let options: ParseOptions =
            serde_json::from_str(&content).map_err(|e| ScheduleError::OptionsLoad {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        options.validate().map_err(|reason| ScheduleError::OptionsLoad {
            path: path.to_path_buf(),
            reason,
        })?;
        Ok(options)
    }

    fn validate(&self) -> Result<(), String> {
        if self.y_tolerance.is_nan() || self.y_tolerance <= 0.0 {
            return Err(format!("y_tolerance must be positive, got {}", self.y_tolerance));
        }
        if self.max_weeks == 0 {
            return Err("max_weeks must be at least 1".into());
        }
        if self.draft_master_marker.trim().is_empty() || self.ring_meister_marker.trim().is_empty()
        {
            return Err("series kind markers must not be empty".into());
        }
        Ok(())
    }
}
