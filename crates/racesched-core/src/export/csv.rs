use crate::export::display::week_cell;
use crate::minimize::Minimizer;
use crate::model::SeriesRecord;

/// Pivot the selected series into a CSV with one column per series and one
/// row per week, `Track1` through `Track{weeks}`.
///
/// A `Style` row is written only when at least one series carries a track type.
pub fn pivot_csv(series: &[&SeriesRecord], weeks: usize, minimizer: &Minimizer) -> String {
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(weeks + 4);

    rows.push(labelled("RowType", series.iter().map(|s| s.season_name.clone())));
    rows.push(labelled(
        "Time",
        series.iter().map(|s| {
            if s.race_frequency.is_empty() {
                "N/A".to_string()
            } else {
                s.race_frequency.clone()
            }
        }),
    ));
    rows.push(labelled("License", series.iter().map(|s| s.license_group.to_string())));
    if series.iter().any(|s| s.track_type.is_some()) {
        rows.push(labelled(
            "Style",
            series
                .iter()
                .map(|s| s.track_type.clone().unwrap_or_else(|| "N/A".to_string())),
        ));
    }
    rows.push(labelled("Name", series.iter().map(|s| s.season_name.clone())));

    for week in 0..weeks {
        let label = format!("Track{}", week + 1);
        let cells = series.iter().map(|s| {
            u32::try_from(week)
                .ok()
                .and_then(|w| s.week(w))
                .map(|entry| week_cell(s, entry, minimizer))
                .unwrap_or_default()
        });
        rows.push(labelled(&label, cells));
    }

    rows.iter()
        .map(|row| row.iter().map(|f| escape(f)).collect::<Vec<_>>().join(","))
        .collect::<Vec<_>>()
        .join("\n")
}

fn labelled(label: &str, cells: impl Iterator<Item = String>) -> Vec<String> {
    std::iter::once(label.to_string()).chain(cells).collect()
}

fn escape(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
