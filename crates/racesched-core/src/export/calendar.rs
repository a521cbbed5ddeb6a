use crate::error::ScheduleError;
use crate::export::display::{week_display, WeekDisplay};
use crate::minimize::Minimizer;
use crate::model::SeriesRecord;
use chrono::{Datelike, Days, NaiveDate};

/// One Sunday-to-Saturday row of the calendar, with a cell per series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarWeek {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub cells: Vec<Option<WeekDisplay>>,
}

/// Lay the selected series out on a shared weekly calendar spanning the
/// earliest to the latest start date.
pub fn build_calendar(
    series: &[&SeriesRecord],
    minimizer: &Minimizer,
) -> Result<Vec<CalendarWeek>, ScheduleError> {
    let dated: Vec<Vec<NaiveDate>> = series
        .iter()
        .map(|s| {
            s.schedules
                .iter()
                .map(|e| parse_date(&e.start_date))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<_, _>>()?;

    let all_dates = dated.iter().flatten();
    let (Some(first), Some(last)) = (all_dates.clone().min(), all_dates.max()) else {
        return Ok(Vec::new());
    };

    let mut weeks = Vec::new();
    let mut start = week_start(*first);
    while start <= *last {
        let end = start + Days::new(6);
        let cells = series
            .iter()
            .zip(&dated)
            .map(|(s, dates)| {
                s.schedules
                    .iter()
                    .zip(dates)
                    .find(|(_, d)| **d >= start && **d <= end)
                    .map(|(entry, _)| week_display(s, entry, minimizer))
            })
            .collect();
        weeks.push(CalendarWeek { start, end, cells });
        start = end + Days::new(1);
    }

    Ok(weeks)
}

fn parse_date(s: &str) -> Result<NaiveDate, ScheduleError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| ScheduleError::InvalidDate(s.to_string()))
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_sunday()))
}
