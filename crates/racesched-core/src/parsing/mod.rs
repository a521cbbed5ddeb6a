pub mod header;
pub mod lines;
pub mod lookahead;
pub mod roles;
pub mod week;

use crate::extraction::PageFragments;
use crate::model::{DroppedSeries, ParsedSchedule, SeriesRecord};
use crate::options::ParseOptions;
use header::{apply_header_line, classify_kind};
use lines::reconstruct_lines;
use lookahead::{continuation, Continuation, Lookahead};
use roles::{classify_line, LineRole};
use week::parse_week;

/// Parse the pages of one schedule document into series records.
///
/// Pages must be in document order: a series and a pending car lookup
/// both carry over page boundaries.
pub fn parse_pages(pages: &[PageFragments], options: &ParseOptions) -> ParsedSchedule {
    let mut parser = ScheduleParser::new(options);
    for page in pages {
        parser.feed_page(page);
    }
    parser.finish()
}

/// Line-driven parser state for a single document.
///
/// Lines are fed top to bottom; [`ScheduleParser::finish`] flushes the last
/// series and applies the validity filter.
#[derive(Debug)]
pub struct ScheduleParser<'o> {
    options: &'o ParseOptions,
    completed: Vec<SeriesRecord>,
    current: Option<SeriesRecord>,
    lookahead: Lookahead,
    unmatched_lines: usize,
}

impl<'o> ScheduleParser<'o> {
    pub fn new(options: &'o ParseOptions) -> Self {
        Self {
            options,
            completed: Vec::new(),
            current: None,
            lookahead: Lookahead::Idle,
            unmatched_lines: 0,
        }
    }

    pub fn feed_page(&mut self, page: &PageFragments) {
        let lines = reconstruct_lines(&page.fragments, self.options);
        tracing::trace!(page = page.page_number, lines = lines.len(), "feeding page");
        for line in &lines {
            self.feed_line(&line.text);
        }
    }

    pub fn feed_line(&mut self, line: &str) {
        let role = classify_line(line);

        if let Lookahead::AwaitingCar { entry_index } = self.lookahead {
            self.lookahead = Lookahead::Idle;
            match continuation(line, &role) {
                Continuation::Car(car) => {
                    self.set_weekly_cars(entry_index, car);
                    return;
                }
                Continuation::Blank => {
                    tracing::debug!(entry_index, line, "continuation line has no car name");
                    return;
                }
                Continuation::Rejected => {
                    tracing::debug!(
                        entry_index,
                        line,
                        "no car continuation, leaving weekly cars unset"
                    );
                }
            }
        }

        if let LineRole::SeriesHeader { season_name } = role {
            self.start_series(season_name);
            return;
        }

        let Some(series) = self.current.as_mut() else {
            self.unmatched_lines += 1;
            tracing::trace!(line, "line outside any series");
            return;
        };

        match role {
            LineRole::Week(week) => {
                let parsed = parse_week(&week, series.kind, self.options);
                series.schedules.push(parsed.entry);
                if parsed.awaits_car {
                    let entry_index = series.schedules.len() - 1;
                    self.lookahead = Lookahead::AwaitingCar { entry_index };
                    tracing::debug!(
                        series = %series.season_name,
                        week = week.week,
                        "car expected on next line"
                    );
                }
            }
            _ if series.schedules.is_empty() => {
                if !apply_header_line(series, &role, line) {
                    self.unmatched_lines += 1;
                }
            }
            _ => {
                self.unmatched_lines += 1;
                tracing::trace!(line, "unmatched line");
            }
        }
    }

    /// Flush the open series and keep only series with a plausible number of weeks.
    pub fn finish(mut self) -> ParsedSchedule {
        self.flush_current();

        let max_weeks = self.options.max_weeks;
        let mut result = ParsedSchedule::default();
        for series in self.completed {
            let week_count = series.schedules.len();
            if (1..=max_weeks).contains(&week_count) {
                result.series.push(series);
            } else {
                tracing::debug!(
                    series = %series.season_name,
                    week_count,
                    max_weeks,
                    "dropping implausible series"
                );
                result.dropped.push(DroppedSeries {
                    season_name: series.season_name,
                    week_count,
                });
            }
        }

        tracing::info!(
            series = result.series.len(),
            dropped = result.dropped.len(),
            unmatched_lines = self.unmatched_lines,
            "schedule parsed"
        );
        result
    }

    fn start_series(&mut self, season_name: String) {
        self.flush_current();
        let kind = classify_kind(&season_name, self.options);
        tracing::debug!(series = %season_name, ?kind, "series started");
        self.current = Some(SeriesRecord::new(season_name, kind));
        self.lookahead = Lookahead::Idle;
    }

    fn flush_current(&mut self) {
        if let Some(series) = self.current.take() {
            tracing::debug!(
                series = %series.season_name,
                weeks = series.schedules.len(),
                "series closed"
            );
            self.completed.push(series);
        }
    }

    fn set_weekly_cars(&mut self, entry_index: usize, car: String) {
        let entry = self
            .current
            .as_mut()
            .and_then(|s| s.schedules.get_mut(entry_index));
        if let Some(entry) = entry {
            tracing::debug!(entry_index, car = %car, "weekly car resolved");
            entry.weekly_cars = Some(car);
        }
    }
}
