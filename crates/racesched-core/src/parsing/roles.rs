//! Line classification.
//!
//! Every reconstructed line is assigned exactly one [`LineRole`] by running
//! the rules in [`LINE_RULES`] in order; the first rule that matches wins and
//! unmatched lines are plain [`LineRole::Text`].

use crate::model::LicenseGroup;
use regex::Regex;
use std::sync::LazyLock;

static SERIES_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.*?)(?:\s*-)?\s*\d{4}\s+Season\s+\d(?:\s*-\s*Fixed)?$")
        .expect("valid series header regex")
});

static ORDINAL_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*").expect("valid ordinal prefix regex"));

static FIXED_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bfixed\b").expect("valid fixed word regex"));

static WEEK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Week\s+(\d+)\s+\((\d{4}-\d{2}-\d{2})\)").expect("valid week regex")
});

static LICENSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(Rookie|Class\s+[A-D])\s+\((\d+)(?:\.\d+)?\)\s*(?:-->|->|→)")
        .expect("valid license regex")
});

static FREQUENCY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^Races\s+(?:every|at)\b").expect("valid frequency regex"));

/// What a single line of the schedule document is.
#[derive(Debug, Clone, PartialEq)]
pub enum LineRole<'a> {
    Empty,
    /// "12. Advanced Series - 2025 Season 2"; carries the cleaned season name.
    SeriesHeader { season_name: String },
    /// "2025 Season 2" with no series name, e.g. a page running header.
    SeasonBanner,
    Week(WeekLine<'a>),
    /// "Class C (4.0) -->"; carries the stored (promoted) tier.
    License(LicenseGroup),
    /// "Races every 2 hours at :15 past".
    Frequency,
    /// Entry-count and penalty notes.
    Boilerplate,
    /// Other informational notes that never carry roster data.
    Notice,
    Text,
}

impl LineRole<'_> {
    /// Lines that can never continue a preceding week line.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            LineRole::SeriesHeader { .. }
                | LineRole::SeasonBanner
                | LineRole::Week(_)
                | LineRole::License(_)
                | LineRole::Frequency
                | LineRole::Boilerplate
        )
    }
}

/// The fixed prefix of a week line plus the unparsed remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekLine<'a> {
    /// One-based week number as printed.
    pub week: u32,
    pub start_date: &'a str,
    pub rest: &'a str,
}

type LineRule = for<'a> fn(&'a str) -> Option<LineRole<'a>>;

/// Classification rules, highest precedence first.
const LINE_RULES: &[LineRule] = &[
    empty_rule,
    series_header_rule,
    week_rule,
    license_rule,
    frequency_rule,
    boilerplate_rule,
    notice_rule,
];

pub fn classify_line(line: &str) -> LineRole<'_> {
    let line = line.trim();
    LINE_RULES
        .iter()
        .find_map(|rule| rule(line))
        .unwrap_or(LineRole::Text)
}

fn empty_rule(line: &str) -> Option<LineRole<'_>> {
    line.is_empty().then_some(LineRole::Empty)
}

fn series_header_rule(line: &str) -> Option<LineRole<'_>> {
    let caps = SERIES_HEADER_RE.captures(line)?;
    let raw_name = caps.get(1)?.as_str().trim();
    let mut season_name = ORDINAL_PREFIX_RE.replace(raw_name, "").trim().to_string();
    if season_name.is_empty() {
        return Some(LineRole::SeasonBanner);
    }
    if FIXED_WORD_RE.is_match(line) && !FIXED_WORD_RE.is_match(&season_name) {
        season_name.push_str(" - Fixed");
    }
    Some(LineRole::SeriesHeader { season_name })
}

fn week_rule(line: &str) -> Option<LineRole<'_>> {
    let caps = WEEK_RE.captures(line)?;
    let prefix = caps.get(0)?;
    // All digits, so parsing only fails on overflow.
    let week = caps.get(1)?.as_str().parse().unwrap_or(u32::MAX);
    let start_date = caps.get(2)?.as_str();
    Some(LineRole::Week(WeekLine {
        week,
        start_date,
        rest: line[prefix.end()..].trim(),
    }))
}

fn license_rule(line: &str) -> Option<LineRole<'_>> {
    let caps = LICENSE_RE.captures(line)?;
    let tier = caps.get(1)?.as_str();
    let strength = caps.get(2)?.as_str();
    promoted_license(tier, strength).map(LineRole::License)
}

/// Map a license line to the stored tier.
///
/// The printed tier is the one a driver is promoted out of, so the series
/// is stored one level up. The exception is a Rookie line at strength 1,
/// which denotes a true Rookie series.
fn promoted_license(tier: &str, strength: &str) -> Option<LicenseGroup> {
    let displayed = LicenseGroup::from_str_loose(tier)?;
    if displayed == LicenseGroup::Rookie && strength == "1" {
        return Some(LicenseGroup::Rookie);
    }
    Some(displayed.promoted())
}

fn frequency_rule(line: &str) -> Option<LineRole<'_>> {
    FREQUENCY_RE.is_match(line).then_some(LineRole::Frequency)
}

fn boilerplate_rule(line: &str) -> Option<LineRole<'_>> {
    (line.starts_with("Min entries") || line.starts_with("Penalty"))
        .then_some(LineRole::Boilerplate)
}

fn notice_rule(line: &str) -> Option<LineRole<'_>> {
    (line.contains("See race week") || line.starts_with("Races")).then_some(LineRole::Notice)
}
