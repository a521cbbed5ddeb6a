use racesched_core::error::ScheduleError;
use racesched_core::export::csv::pivot_csv;
use racesched_core::options::ParseOptions;
use std::path::PathBuf;

use crate::commands::{build_minimizer, load_schedule, select};
use crate::{InputArgs, MinimizeArgs, SelectArgs};

pub fn run(
    input: &InputArgs,
    select_args: &SelectArgs,
    minimize_args: &MinimizeArgs,
    output_file: Option<PathBuf>,
) -> Result<(), ScheduleError> {
    let parsed = load_schedule(input)?;
    let selected = select(&parsed, select_args)?;
    if selected.is_empty() {
        return Err(ScheduleError::InvalidSelection(
            "no series match the given selection".into(),
        ));
    }

    let minimizer = build_minimizer(minimize_args)?;
    let weeks = match &input.options {
        Some(path) => ParseOptions::load(path)?.max_weeks,
        None => ParseOptions::default().max_weeks,
    };
    let csv = pivot_csv(&selected, weeks, &minimizer);

    match output_file {
        Some(path) => {
            std::fs::write(&path, format!("{csv}\n"))?;
            eprintln!(
                "Wrote {} series to {}",
                selected.len(),
                path.display()
            );
        }
        None => println!("{csv}"),
    }

    Ok(())
}
