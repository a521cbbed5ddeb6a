//! Reader for the season-series JSON published by the iRacing data API.
//!
//! Records are mapped onto the same [`SeriesRecord`] shape the PDF parser
//! produces, so the CSV and calendar projections work on either source.

use crate::error::ScheduleError;
use crate::model::{CarType, LicenseGroup, ParsedSchedule, ScheduleEntry, SeriesRecord};
use crate::options::ParseOptions;
use crate::parsing::header::classify_kind;
use serde::Deserialize;

/// Cars the data API lists by id only.
const KNOWN_CARS: &[(u32, &str)] = &[(67, "Mazda MX-5 Cup")];

#[derive(Debug, Deserialize)]
struct SeasonSeries {
    season_name: String,
    #[serde(default)]
    license_group: u8,
    #[serde(default)]
    schedule_description: Option<String>,
    #[serde(default)]
    track_types: Vec<TrackType>,
    #[serde(default)]
    car_types: Vec<CarType>,
    #[serde(default)]
    schedules: Vec<SeasonSchedule>,
}

#[derive(Debug, Deserialize)]
struct TrackType {
    track_type: String,
}

#[derive(Debug, Deserialize)]
struct SeasonSchedule {
    race_week_num: u32,
    start_date: String,
    track: Track,
    #[serde(default)]
    race_week_cars: Vec<CarRef>,
    #[serde(default)]
    car_restrictions: Vec<CarRef>,
    #[serde(default)]
    race_lap_limit: Option<u32>,
    #[serde(default)]
    race_time_limit: Option<u32>,
    #[serde(default)]
    rain_chance: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct Track {
    track_name: String,
    #[serde(default)]
    config_name: Option<String>,
    #[serde(default)]
    rain_chance: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct CarRef {
    #[serde(default)]
    car_id: Option<u32>,
    #[serde(default)]
    car_name: Option<String>,
}

/// Parse a season-series JSON array into series records.
///
/// Every record is kept; the week-count filter only applies to parsed PDFs.
pub fn parse_season_series(
    json: &[u8],
    options: &ParseOptions,
) -> Result<ParsedSchedule, ScheduleError> {
    let seasons: Vec<SeasonSeries> = serde_json::from_slice(json)?;
    let series: Vec<SeriesRecord> = seasons
        .into_iter()
        .map(|season| to_series_record(season, options))
        .collect();
    tracing::info!(series = series.len(), "season-series JSON loaded");
    Ok(ParsedSchedule {
        series,
        dropped: Vec::new(),
    })
}

fn to_series_record(season: SeasonSeries, options: &ParseOptions) -> SeriesRecord {
    let kind = classify_kind(&season.season_name, options);
    let mut record = SeriesRecord::new(season.season_name, kind);
    record.license_group = LicenseGroup::try_from(season.license_group).unwrap_or_else(|e| {
        tracing::debug!(series = %record.season_name, error = %e, "unknown license group");
        LicenseGroup::Unknown
    });
    record.race_frequency = season.schedule_description.unwrap_or_default();
    record.track_type = season.track_types.into_iter().next().map(|t| t.track_type);
    record.car_types = season.car_types;
    record.schedules = season.schedules.into_iter().map(to_schedule_entry).collect();
    record
}

fn to_schedule_entry(schedule: SeasonSchedule) -> ScheduleEntry {
    let cars = week_car_names(&schedule);
    let laps = match (schedule.race_lap_limit, schedule.race_time_limit) {
        (Some(laps), _) => format!("{laps} laps"),
        (None, Some(mins)) => format!("{mins} mins"),
        (None, None) => String::new(),
    };
    let rain_chance = schedule
        .rain_chance
        .or(schedule.track.rain_chance)
        .unwrap_or(0)
        .min(100) as u8;

    ScheduleEntry {
        race_week_num: schedule.race_week_num,
        start_date: schedule.start_date,
        track_name: schedule.track.track_name,
        track_config: Some(schedule.track.config_name.unwrap_or_default()),
        weekly_cars: (!cars.is_empty()).then(|| cars.join(", ")),
        rain_chance,
        laps,
    }
}

/// Distinct car names of a week, in listing order. Unresolvable ids are skipped.
fn week_car_names(schedule: &SeasonSchedule) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for car in schedule.race_week_cars.iter().chain(&schedule.car_restrictions) {
        let name = car.car_name.clone().or_else(|| {
            car.car_id.and_then(|id| {
                KNOWN_CARS
                    .iter()
                    .find(|(known, _)| *known == id)
                    .map(|(_, name)| name.to_string())
            })
        });
        if let Some(name) = name {
            if !name.is_empty() && !name.starts_with("Car ID:") && !names.contains(&name) {
                names.push(name);
            }
        }
    }
    names
}
