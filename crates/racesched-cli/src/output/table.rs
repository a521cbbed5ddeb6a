use racesched_core::export::calendar::CalendarWeek;
use racesched_core::export::display::{cars_for_week, track_parts};
use racesched_core::model::{ParsedSchedule, SeriesRecord};
use std::fmt::Write;

const CELL_WIDTH: usize = 28;

pub fn format_parsed(parsed: &ParsedSchedule) -> String {
    let mut out = String::new();

    for (i, series) in parsed.series.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_series(&mut out, series);
    }

    if !parsed.dropped.is_empty() {
        out.push_str("\nDropped series:\n");
        for dropped in &parsed.dropped {
            let _ = writeln!(
                out,
                "  {} ({} week entries)",
                dropped.season_name, dropped.week_count
            );
        }
    }

    out.trim_end().to_string()
}

fn write_series(out: &mut String, series: &SeriesRecord) {
    let _ = writeln!(out, "=== {} ===\n", series.season_name);
    let _ = writeln!(out, "  License:   {}", series.license_group);
    if !series.race_frequency.is_empty() {
        let _ = writeln!(out, "  Races:     {}", series.race_frequency);
    }
    if let Some(ref style) = series.track_type {
        let _ = writeln!(out, "  Style:     {}", style);
    }
    if !series.kind.has_weekly_cars() {
        if let Some(roster) = series.car_types.first() {
            let _ = writeln!(out, "  Cars:      {}", roster.car_type);
        }
    }
    if series.same_track_every_week() {
        let _ = writeln!(out, "  Same track every week");
    }
    out.push('\n');

    let tracks: Vec<String> = series
        .schedules
        .iter()
        .map(|e| match track_parts(e) {
            (track, "") => track.to_string(),
            (track, config) => format!("{} - {}", track, config),
        })
        .collect();
    let track_width = tracks.iter().map(|t| t.chars().count()).max().unwrap_or(10);

    for (entry, track) in series.schedules.iter().zip(&tracks) {
        let mut line = format!(
            "  Week {:>2}  {}  {:<width$}",
            entry.race_week_num + 1,
            entry.start_date,
            track,
            width = track_width
        );
        if series.kind.has_weekly_cars() {
            let _ = write!(line, "  {}", cars_for_week(series, entry));
        }
        if !entry.laps.is_empty() {
            let _ = write!(line, "  {}", entry.laps);
        }
        if entry.rain_chance > 0 {
            let _ = write!(line, "  rain {}%", entry.rain_chance);
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }
}

/// Side-by-side weekly grid, one column per series.
pub fn format_calendar(names: &[&str], weeks: &[CalendarWeek]) -> String {
    let mut out = String::new();

    let _ = write!(out, "{:<23}", "Week");
    for name in names {
        let _ = write!(out, " | {:<width$}", truncate(name), width = CELL_WIDTH);
    }
    out.push('\n');
    let _ = writeln!(out, "{}", "-".repeat(23 + names.len() * (CELL_WIDTH + 3)));

    for week in weeks {
        let range = format!("{} - {}", week.start.format("%b %d"), week.end.format("%b %d"));
        let _ = write!(out, "{:<23}", range);
        for cell in &week.cells {
            let title = cell.as_ref().map(|c| c.title.as_str()).unwrap_or("");
            let _ = write!(out, " | {:<width$}", truncate(title), width = CELL_WIDTH);
        }
        out.push('\n');

        let details: Vec<String> = week
            .cells
            .iter()
            .map(|cell| match cell {
                Some(c) if c.rain_chance > 0 && !c.subtext.is_empty() => {
                    format!("{} ({}% rain)", c.subtext, c.rain_chance)
                }
                Some(c) if c.rain_chance > 0 => format!("{}% rain", c.rain_chance),
                Some(c) => c.subtext.clone(),
                None => String::new(),
            })
            .collect();
        if details.iter().any(|d| !d.is_empty()) {
            let _ = write!(out, "{:<23}", "");
            for detail in &details {
                let _ = write!(out, " | {:<width$}", truncate(detail), width = CELL_WIDTH);
            }
            out.push('\n');
        }
    }

    out.trim_end().to_string()
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= CELL_WIDTH {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(CELL_WIDTH - 1).collect();
    cut.push('…');
    cut
}
