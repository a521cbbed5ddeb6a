use crate::minimize::Minimizer;
use crate::model::{ScheduleEntry, SeriesKind, SeriesRecord};

/// Split "Track - Config" on the last separator. Without a separator the
/// whole name is the track and the config is empty.
pub fn split_track_config(track_name: &str) -> (&str, &str) {
    match track_name.rfind(" - ") {
        Some(idx) => (&track_name[..idx], &track_name[idx + 3..]),
        None => (track_name, ""),
    }
}

/// Track and layout of an entry, preferring a separately stored layout.
pub fn track_parts(entry: &ScheduleEntry) -> (&str, &str) {
    match entry.track_config.as_deref() {
        Some(config) => (entry.track_name.as_str(), config),
        None => split_track_config(&entry.track_name),
    }
}

/// Cars raced in a given week: the per-week car if known, else the series roster.
pub fn cars_for_week(series: &SeriesRecord, entry: &ScheduleEntry) -> String {
    if let Some(cars) = entry.weekly_cars.as_deref().filter(|c| !c.is_empty()) {
        return cars.to_string();
    }
    let roster: Vec<&str> = series
        .car_types
        .iter()
        .map(|c| c.car_type.as_str())
        .filter(|c| !c.is_empty() && !c.starts_with("Car ID:"))
        .collect();
    if roster.is_empty() {
        "N/A".to_string()
    } else {
        roster.join(", ")
    }
}

/// "Track - Config", dropping configs that add nothing.
pub fn track_display(entry: &ScheduleEntry, minimizer: &Minimizer) -> String {
    let (track, config) = track_parts(entry);
    let track = minimizer.track_name(track);
    let config = minimizer.track_config(config);
    let config = config.trim();
    if config.is_empty()
        || config.eq_ignore_ascii_case("oval")
        || config.eq_ignore_ascii_case("n/a")
    {
        track
    } else {
        format!("{} - {}", track, config)
    }
}

/// Rendered content of one week of one series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekDisplay {
    pub title: String,
    pub subtext: String,
    pub rain_chance: u8,
}

pub fn week_display(
    series: &SeriesRecord,
    entry: &ScheduleEntry,
    minimizer: &Minimizer,
) -> WeekDisplay {
    let weekly_cars = minimizer.car_list(entry.weekly_cars.as_deref().unwrap_or_default());
    let (title, subtext) = match series.kind {
        SeriesKind::Default => (track_display(entry, minimizer), entry.laps.clone()),
        SeriesKind::DraftMaster => (track_display(entry, minimizer), weekly_cars),
        SeriesKind::RingMeister => (weekly_cars, String::new()),
    };
    WeekDisplay {
        title: if title.is_empty() { "N/A".into() } else { title },
        subtext,
        rain_chance: entry.rain_chance,
    }
}

/// Single-string form of a week used for CSV cells.
pub fn week_cell(series: &SeriesRecord, entry: &ScheduleEntry, minimizer: &Minimizer) -> String {
    let weekly_cars = minimizer.car_list(entry.weekly_cars.as_deref().unwrap_or_default());
    match series.kind {
        SeriesKind::Default => track_display(entry, minimizer),
        SeriesKind::DraftMaster if weekly_cars.is_empty() => track_display(entry, minimizer),
        SeriesKind::DraftMaster => format!("{} - {}", track_display(entry, minimizer), weekly_cars),
        SeriesKind::RingMeister => weekly_cars,
    }
}
