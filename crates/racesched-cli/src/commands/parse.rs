use racesched_core::error::ScheduleError;
use std::path::PathBuf;

use crate::commands::load_schedule;
use crate::output;
use crate::InputArgs;

pub fn run(
    input: &InputArgs,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), ScheduleError> {
    let parsed = load_schedule(input)?;
    if parsed.series.is_empty() {
        return Err(ScheduleError::NoSeries);
    }

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&parsed)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Parsed {} series, written to {}",
                parsed.series.len(),
                path.display()
            );
            for dropped in &parsed.dropped {
                eprintln!(
                    "  dropped: {} ({} week entries)",
                    dropped.season_name, dropped.week_count
                );
            }
        }
        None => match output_format {
            "json" => output::json::print(&parsed)?,
            _ => println!("{}", output::table::format_parsed(&parsed)),
        },
    }

    Ok(())
}
