use crate::model::{Line, TextFragment};
use crate::options::ParseOptions;

/// Group the fragments of one page into visual lines, top to bottom.
///
/// A fragment joins the first line whose baseline is within
/// `options.y_tolerance` of its own; otherwise it starts a new line at its
/// baseline. Text is concatenated in extraction order unless
/// `options.order_by_x` is set, so callers relying on the default must
/// trust the extractor to emit fragments left to right.
pub fn reconstruct_lines(fragments: &[TextFragment], options: &ParseOptions) -> Vec<Line> {
    let mut groups: Vec<(f32, Vec<&TextFragment>)> = Vec::new();

    for fragment in fragments {
        let existing = groups
            .iter_mut()
            .find(|(y, _)| (y - fragment.baseline_y).abs() < options.y_tolerance);
        match existing {
            Some((_, members)) => members.push(fragment),
            None => groups.push((fragment.baseline_y, vec![fragment])),
        }
    }

    let mut lines: Vec<Line> = groups
        .into_iter()
        .map(|(y, mut members)| {
            if options.order_by_x {
                members.sort_by(|a, b| a.x.total_cmp(&b.x));
            }
            let text: String = members.iter().map(|f| f.text.as_str()).collect();
            Line {
                y,
                text: text.trim().to_string(),
            }
        })
        .collect();

    lines.sort_by(|a, b| b.y.total_cmp(&a.y));
    lines
}
