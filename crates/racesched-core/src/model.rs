use serde::{Deserialize, Serialize};
use std::fmt;

/// A piece of positioned text as emitted by an extraction backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFragment {
    pub text: String,
    /// Left edge of the fragment. Only consulted when `order_by_x` is enabled.
    #[serde(default)]
    pub x: f32,
    /// Baseline in page coordinates; larger values are higher on the page.
    pub baseline_y: f32,
}

impl TextFragment {
    pub fn new(text: impl Into<String>, baseline_y: f32) -> Self {
        Self {
            text: text.into(),
            x: 0.0,
            baseline_y,
        }
    }
}

/// One reconstructed visual row of a page.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub y: f32,
    pub text: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum LicenseGroup {
    #[default]
    Unknown,
    Rookie,
    D,
    C,
    B,
    A,
}

impl LicenseGroup {
    pub const ALL: [LicenseGroup; 6] = [
        LicenseGroup::Unknown,
        LicenseGroup::Rookie,
        LicenseGroup::D,
        LicenseGroup::C,
        LicenseGroup::B,
        LicenseGroup::A,
    ];

    /// The next tier up, capped at A.
    pub fn promoted(self) -> LicenseGroup {
        match self {
            LicenseGroup::Unknown => LicenseGroup::Unknown,
            LicenseGroup::Rookie => LicenseGroup::D,
            LicenseGroup::D => LicenseGroup::C,
            LicenseGroup::C => LicenseGroup::B,
            LicenseGroup::B | LicenseGroup::A => LicenseGroup::A,
        }
    }

    pub fn from_str_loose(s: &str) -> Option<LicenseGroup> {
        let s = s.trim();
        let s = s
            .strip_prefix("Class ")
            .or_else(|| s.strip_prefix("class "))
            .unwrap_or(s)
            .trim();
        LicenseGroup::ALL
            .into_iter()
            .find(|g| g.to_string().eq_ignore_ascii_case(s))
    }
}

impl From<LicenseGroup> for u8 {
    fn from(group: LicenseGroup) -> u8 {
        group as u8
    }
}

impl TryFrom<u8> for LicenseGroup {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        LicenseGroup::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| format!("license group {value} out of range 0..=5"))
    }
}

impl fmt::Display for LicenseGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LicenseGroup::Unknown => write!(f, "Unknown"),
            LicenseGroup::Rookie => write!(f, "Rookie"),
            LicenseGroup::D => write!(f, "D"),
            LicenseGroup::C => write!(f, "C"),
            LicenseGroup::B => write!(f, "B"),
            LicenseGroup::A => write!(f, "A"),
        }
    }
}

/// How week lines of a series carry their track and car.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    /// Track on the week line, cars from the series roster.
    #[default]
    Default,
    /// "Track - Car" on the week line, car sometimes on the following line.
    DraftMaster,
    /// Track on the week line, car always on the following line.
    RingMeister,
}

impl SeriesKind {
    pub fn has_weekly_cars(self) -> bool {
        !matches!(self, SeriesKind::Default)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarType {
    pub car_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Zero-based week index.
    pub race_week_num: u32,
    /// ISO date (YYYY-MM-DD) as printed in the document.
    pub start_date: String,
    pub track_name: String,
    /// Layout name when the source keeps it apart from the track name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_config: Option<String>,
    pub weekly_cars: Option<String>,
    /// Percentage, 0..=100.
    pub rain_chance: u8,
    /// "20 laps", "45 mins" or empty.
    pub laps: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesRecord {
    pub season_name: String,
    #[serde(default)]
    pub kind: SeriesKind,
    #[serde(default)]
    pub license_group: LicenseGroup,
    pub schedules: Vec<ScheduleEntry>,
    #[serde(default)]
    pub car_types: Vec<CarType>,
    #[serde(default)]
    pub race_frequency: String,
    /// Track style such as "road" or "oval", when the source provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_type: Option<String>,
}

impl SeriesRecord {
    pub fn new(season_name: impl Into<String>, kind: SeriesKind) -> Self {
        Self {
            season_name: season_name.into(),
            kind,
            license_group: LicenseGroup::Unknown,
            schedules: Vec::new(),
            car_types: Vec::new(),
            race_frequency: String::new(),
            track_type: None,
        }
    }

    pub fn same_track_every_week(&self) -> bool {
        match self.schedules.split_first() {
            Some((first, rest)) => rest.iter().all(|s| s.track_name == first.track_name),
            None => false,
        }
    }

    /// Entry for a zero-based week, if the series races that week.
    pub fn week(&self, race_week_num: u32) -> Option<&ScheduleEntry> {
        self.schedules
            .iter()
            .find(|s| s.race_week_num == race_week_num)
    }
}

/// A series that was recognized but discarded by the validity filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroppedSeries {
    pub season_name: String,
    pub week_count: usize,
}

/// Output of one parser run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSchedule {
    pub series: Vec<SeriesRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dropped: Vec<DroppedSeries>,
}
