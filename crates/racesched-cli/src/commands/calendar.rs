use racesched_core::error::ScheduleError;
use racesched_core::export::calendar::build_calendar;

use crate::commands::{build_minimizer, load_schedule, select};
use crate::output;
use crate::{InputArgs, MinimizeArgs, SelectArgs};

pub fn run(
    input: &InputArgs,
    select_args: &SelectArgs,
    minimize_args: &MinimizeArgs,
) -> Result<(), ScheduleError> {
    let parsed = load_schedule(input)?;
    let selected = select(&parsed, select_args)?;
    if selected.is_empty() {
        return Err(ScheduleError::InvalidSelection(
            "no series match the given selection".into(),
        ));
    }

    let minimizer = build_minimizer(minimize_args)?;
    let weeks = build_calendar(&selected, &minimizer)?;
    if weeks.is_empty() {
        println!("No schedules found for selected series.");
        return Ok(());
    }

    let names: Vec<&str> = selected.iter().map(|s| s.season_name.as_str()).collect();
    println!("{}", output::table::format_calendar(&names, &weeks));
    Ok(())
}
