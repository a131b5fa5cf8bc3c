//! Fixed-width pointer diagrams of the search state
//!
//! Every column has the same width, so index, value, window band, marker and
//! label rows line up. Rendering is a pure function of a snapshot; it never
//! looks at the search loop.
//!
//! ```text
//!  index │     0     1     2     3     4     5     6     7
//!  value │     5     8     9    14    17    23    31    42
//!        │ ───── ───── ───── ───── ───── ───── ───── ─────
//! window │                         ░░░░░ ░░░░░ ░░░░░ ░░░░░
//! marker │                                   ▲
//!  label │                           LOW   MID        HIGH
//! ```

use crate::tracer::{SearchTrace, StepRecord};

/// Narrowest column, wide enough for `HIGH`, `FOUND` and `L/M/H`
const MIN_CELL_WIDTH: usize = 5;

const WINDOW_FILL: char = '░';
const RULE_FILL: char = '─';
const MID_MARKER: &str = "▲";
const FOUND_MARKER: &str = "★";

/// Render the array with the search window, midpoint and match marked
///
/// `window` is the inclusive `(low, high)` range still being searched. Indices
/// outside the slice are ignored rather than rejected.
pub fn render(
    sorted: &[i64],
    window: Option<(usize, usize)>,
    mid: Option<usize>,
    found: Option<usize>,
) -> String {
    let width = cell_width(sorted);
    let in_window = |i: usize| window.is_some_and(|(low, high)| low <= i && i <= high);

    let mut lines = vec![
        row("index", (0..sorted.len()).map(|i| i.to_string()), width),
        row("value", sorted.iter().map(|v| v.to_string()), width),
        row(
            "",
            sorted.iter().map(|_| RULE_FILL.to_string().repeat(width)),
            width,
        ),
    ];

    if window.is_some() {
        lines.push(row(
            "window",
            (0..sorted.len()).map(|i| {
                if in_window(i) {
                    WINDOW_FILL.to_string().repeat(width)
                } else {
                    String::new()
                }
            }),
            width,
        ));
    }

    if mid.is_some() || found.is_some() {
        lines.push(row(
            "marker",
            (0..sorted.len()).map(|i| {
                if found == Some(i) {
                    FOUND_MARKER.to_string()
                } else if mid == Some(i) {
                    MID_MARKER.to_string()
                } else {
                    String::new()
                }
            }),
            width,
        ));
    }

    if window.is_some() || mid.is_some() || found.is_some() {
        lines.push(row(
            "label",
            (0..sorted.len()).map(|i| label(i, window, mid, found)),
            width,
        ));
    }

    lines.join("\n")
}

/// Diagram for one recorded step
///
/// A terminal step marks the midpoint as the match.
pub fn render_step(sorted: &[i64], step: &StepRecord) -> String {
    let found = step.is_terminal().then_some(step.mid);
    render(sorted, Some((step.low, step.high)), Some(step.mid), found)
}

/// Diagram of the final state of a trace
pub fn render_final(trace: &SearchTrace) -> String {
    match trace.outcome().position {
        Some(position) => render(trace.sorted(), None, None, Some(position)),
        None => format!(
            "TARGET NOT FOUND\nTarget value {} is not present in the array.",
            trace.target()
        ),
    }
}

fn cell_width(sorted: &[i64]) -> usize {
    let widest_value = sorted
        .iter()
        .map(|v| v.to_string().chars().count())
        .max()
        .unwrap_or(0);
    let widest_index = sorted.len().saturating_sub(1).to_string().len();

    MIN_CELL_WIDTH.max(widest_value).max(widest_index)
}

fn row(name: &str, cells: impl Iterator<Item = String>, width: usize) -> String {
    let body: Vec<String> = cells.map(|c| format!("{:>width$}", c)).collect();
    format!("{:>6} │ {}", name, body.join(" "))
        .trim_end()
        .to_string()
}

fn label(
    i: usize,
    window: Option<(usize, usize)>,
    mid: Option<usize>,
    found: Option<usize>,
) -> String {
    if found == Some(i) {
        return "FOUND".to_string();
    }

    let mut parts = Vec::new();
    if window.is_some_and(|(low, _)| low == i) {
        parts.push(("L", "LOW"));
    }
    if mid == Some(i) {
        parts.push(("M", "MID"));
    }
    if window.is_some_and(|(_, high)| high == i) {
        parts.push(("H", "HIGH"));
    }

    match parts.as_slice() {
        [] => String::new(),
        [(_, word)] => word.to_string(),
        many => many
            .iter()
            .map(|(short, _)| *short)
            .collect::<Vec<_>>()
            .join("/"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracer::trace;

    /// Char column where `pat` ends on `line`
    fn end_column(line: &str, pat: &str) -> usize {
        let byte = line.find(pat).expect("pattern present");
        line[..byte].chars().count() + pat.chars().count()
    }

    fn line_starting<'a>(diagram: &'a str, name: &str) -> &'a str {
        diagram
            .lines()
            .find(|l| l.trim_start().starts_with(name))
            .expect("row present")
    }

    #[test]
    fn test_rows_present() {
        let diagram = render(&[5, 8, 9], Some((0, 2)), Some(1), None);
        let lines: Vec<&str> = diagram.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].trim_start().starts_with("index"));
        assert!(lines[1].trim_start().starts_with("value"));
        assert!(lines[2].contains("─────"));
        assert!(lines[3].starts_with("window"));
        assert!(lines[4].trim_start().starts_with("marker"));
        assert!(lines[5].trim_start().starts_with("label"));
    }

    #[test]
    fn test_marker_aligns_with_mid_column() {
        let diagram = render(&[5, 8, 9, 14, 17], Some((0, 4)), Some(2), None);

        let index_row = line_starting(&diagram, "index");
        let marker_row = line_starting(&diagram, "marker");
        assert_eq!(end_column(marker_row, MID_MARKER), end_column(index_row, "2"));
    }

    #[test]
    fn test_window_band_covers_only_window() {
        let diagram = render(&[1, 2, 3, 4, 5, 6, 7, 8], Some((4, 7)), Some(5), None);
        let window_row = line_starting(&diagram, "window");

        let band = WINDOW_FILL.to_string().repeat(5);
        assert_eq!(window_row.matches(band.as_str()).count(), 4);
    }

    #[test]
    fn test_labels() {
        let diagram = render(&[1, 2, 3, 4, 5, 6, 7, 8], Some((0, 7)), Some(3), None);
        let label_row = line_starting(&diagram, "label");

        assert!(label_row.contains("LOW"));
        assert!(label_row.contains("MID"));
        assert!(label_row.contains("HIGH"));
    }

    #[test]
    fn test_collapsed_window_combines_labels() {
        let diagram = render(&[1, 2, 3], Some((1, 1)), Some(1), None);
        assert!(line_starting(&diagram, "label").contains("L/M/H"));

        let diagram = render(&[1, 2, 3], Some((1, 2)), Some(1), None);
        let label_row = line_starting(&diagram, "label");
        assert!(label_row.contains("L/M"));
        assert!(label_row.contains("HIGH"));
    }

    #[test]
    fn test_found_marker_wins_over_mid() {
        let diagram = render(&[1, 2, 3], Some((0, 2)), Some(1), Some(1));
        assert!(diagram.contains(FOUND_MARKER));
        assert!(!diagram.contains(MID_MARKER));
        assert!(line_starting(&diagram, "label").contains("FOUND"));
    }

    #[test]
    fn test_wide_values_widen_cells() {
        let diagram = render(&[-1_000_000, 7], Some((0, 1)), Some(0), None);
        let value_row = line_starting(&diagram, "value");
        assert!(value_row.contains("-1000000        7"));
    }

    #[test]
    fn test_plain_snapshot_has_no_markers() {
        let diagram = render(&[1, 2, 3], None, None, None);
        assert_eq!(diagram.lines().count(), 3);
    }

    #[test]
    fn test_render_is_deterministic() {
        let a = render(&[4, 5, 6], Some((0, 2)), Some(1), None);
        let b = render(&[4, 5, 6], Some((0, 2)), Some(1), None);
        assert_eq!(a, b);
    }

    #[test]
    fn test_render_step_and_final() {
        let trace = trace(&[23, 5, 17, 42, 9, 31, 14, 8], 17).unwrap();

        let first = render_step(trace.sorted(), &trace.steps()[0]);
        assert!(first.contains(MID_MARKER));
        assert!(!first.contains(FOUND_MARKER));

        let last = render_step(trace.sorted(), trace.last_step().unwrap());
        assert!(last.contains(FOUND_MARKER));

        let final_view = render_final(&trace);
        assert!(final_view.contains("FOUND"));
        assert!(!final_view.contains("window"));

        let miss = crate::tracer::trace(&[1, 2, 3], 10).unwrap();
        assert!(render_final(&miss).contains("TARGET NOT FOUND"));
    }
}
