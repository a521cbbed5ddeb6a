use crate::model::{ScheduleEntry, SeriesKind};
use crate::options::ParseOptions;
use crate::parsing::roles::WeekLine;
use regex::Regex;
use std::sync::LazyLock;

static LAPS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+\s+(?:laps|mins))$").expect("valid laps regex"));

// Also accepts the UTF-8-read-as-Latin-1 form of the degree sign.
static WEATHER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\$?\d+\s?Â?°[FC].+$").expect("valid weather regex"));

static RAIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Rain chance\s*(\d+)\s*%").expect("valid rain regex"));

/// A parsed week line, and whether its car must come from the next line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedWeek {
    pub entry: ScheduleEntry,
    pub awaits_car: bool,
}

pub fn parse_week(week: &WeekLine<'_>, kind: SeriesKind, options: &ParseOptions) -> ParsedWeek {
    let mut rest = week.rest.trim();

    let mut laps = String::new();
    if let Some(m) = LAPS_RE.captures(rest).and_then(|c| c.get(1)) {
        laps = m.as_str().to_string();
        rest = rest[..m.start()].trim();
    }

    let mut rain_chance = 0;
    if let Some(m) = WEATHER_RE.find(rest) {
        rain_chance = rain_chance_of(m.as_str());
        rest = rest[..m.start()].trim();
    }

    let (track_name, weekly_cars, awaits_car) = match kind {
        SeriesKind::Default => (default_track(rest), None, false),
        SeriesKind::DraftMaster => split_track_and_car(rest),
        SeriesKind::RingMeister => {
            let track = if rest.is_empty() {
                options.ring_meister_fallback_track.clone()
            } else {
                rest.to_string()
            };
            (track, None, true)
        }
    };

    let track_name = if track_name.is_empty() {
        "N/A".to_string()
    } else {
        track_name
    };

    ParsedWeek {
        entry: ScheduleEntry {
            race_week_num: week.week.saturating_sub(1),
            start_date: week.start_date.to_string(),
            track_name,
            track_config: None,
            weekly_cars,
            rain_chance,
            laps,
        },
        awaits_car,
    }
}

/// Track name without the configuration or qualifier in parentheses.
fn default_track(rest: &str) -> String {
    rest.split(" (").next().unwrap_or_default().trim().to_string()
}

/// "Track - Config - Car": the last dash segment is the car.
fn split_track_and_car(rest: &str) -> (String, Option<String>, bool) {
    let segments: Vec<&str> = rest.split(" - ").collect();
    match segments.split_last() {
        Some((car, track)) if !track.is_empty() && !car.trim().is_empty() => {
            (track.join(" - ").trim().to_string(), Some(car.trim().to_string()), false)
        }
        _ => (rest.to_string(), None, true),
    }
}

fn rain_chance_of(weather: &str) -> u8 {
    RAIN_RE
        .captures(weather)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .map(|pct| pct.min(100) as u8)
        .unwrap_or(0)
}
