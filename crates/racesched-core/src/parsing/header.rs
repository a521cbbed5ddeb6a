use crate::model::{CarType, LicenseGroup, SeriesKind, SeriesRecord};
use crate::options::ParseOptions;
use crate::parsing::roles::LineRole;

/// Decide once, from the season name, how the week lines of a series are laid out.
pub fn classify_kind(season_name: &str, options: &ParseOptions) -> SeriesKind {
    if season_name.contains(&options.draft_master_marker) {
        SeriesKind::DraftMaster
    } else if season_name.contains(&options.ring_meister_marker) {
        SeriesKind::RingMeister
    } else {
        SeriesKind::Default
    }
}

/// Apply a line from the header section of a series, i.e. before its first week line.
///
/// Returns false if the line carried nothing for the series.
pub fn apply_header_line(series: &mut SeriesRecord, role: &LineRole<'_>, line: &str) -> bool {
    match role {
        LineRole::License(group) => {
            // The first license line is authoritative.
            if series.license_group == LicenseGroup::Unknown {
                series.license_group = *group;
            }
            true
        }
        LineRole::Frequency => {
            series.race_frequency = line.trim().to_string();
            true
        }
        LineRole::Text => {
            append_roster(series, line);
            true
        }
        _ => false,
    }
}

/// Roster text can wrap over several lines; it is kept as one space-joined entry.
fn append_roster(series: &mut SeriesRecord, line: &str) {
    match series.car_types.first_mut() {
        Some(existing) => {
            existing.car_type = format!("{} {}", existing.car_type, line.trim())
                .trim()
                .to_string();
        }
        None => series.car_types.push(CarType {
            car_type: line.trim().to_string(),
        }),
    }
}
