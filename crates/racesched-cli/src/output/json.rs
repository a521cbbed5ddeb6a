use racesched_core::error::ScheduleError;
use racesched_core::model::ParsedSchedule;

pub fn print(parsed: &ParsedSchedule) -> Result<(), ScheduleError> {
    let json = serde_json::to_string_pretty(parsed)?;
    println!("{json}");
    Ok(())
}
