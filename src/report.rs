//! Human-readable narration of a search trace
//!
//! Default `--format text` output: a header, one block per step explaining the
//! midpoint arithmetic and the decision taken, a completion section and the
//! statistics.

use crate::diagram;
use crate::input::InputError;
use crate::stats::{TraceStats, SPACE_COMPLEXITY, TIME_COMPLEXITY};
use crate::tracer::{Comparison, SearchTrace, StepRecord};

const SEPARATOR: &str = "────────────────────────────────────────";

/// Text report formatter
#[derive(Debug, Clone, Copy)]
pub struct TextReport {
    show_diagrams: bool,
}

impl TextReport {
    /// Create a text report formatter
    pub fn new(show_diagrams: bool) -> Self {
        Self { show_diagrams }
    }

    /// Full narration: steps, completion and statistics
    pub fn render(&self, trace: &SearchTrace) -> String {
        let stats = TraceStats::from_trace(trace);
        let mut out = self.render_steps(trace);
        out.push('\n');
        out.push_str(&self.render_completion(trace));
        out.push('\n');
        out.push_str(&render_statistics(&stats));
        out
    }

    /// Header plus one block per recorded step
    pub fn render_steps(&self, trace: &SearchTrace) -> String {
        let mut out = String::new();

        out.push_str("=== BINARY SEARCH ===\n");
        out.push_str(&format!("Input array:  {:?}\n", trace.input()));
        out.push_str(&format!("Sorted array: {:?}\n", trace.sorted()));
        out.push_str(&format!("Target value: {}\n", trace.target()));
        out.push_str(SEPARATOR);
        out.push('\n');

        for step in trace.steps() {
            out.push_str(&self.render_step(trace, step));
            out.push_str(SEPARATOR);
            out.push('\n');
        }

        out
    }

    /// Narration of a single step
    pub fn render_step(&self, trace: &SearchTrace, step: &StepRecord) -> String {
        let mut out = String::new();
        let target = trace.target();

        out.push_str(&format!("Step {}\n", step.step_index));
        out.push_str(&format!(
            "  Search range: indices [{}] to [{}]\n",
            step.low, step.high
        ));
        out.push_str(&format!(
            "  Middle index: mid = ({} + {}) / 2 = {}\n",
            step.low, step.high, step.mid
        ));
        out.push_str(&format!("  Middle value: arr[{}] = {}\n", step.mid, step.mid_value));

        if self.show_diagrams {
            out.push('\n');
            out.push_str(&diagram::render_step(trace.sorted(), step));
            out.push_str("\n\n");
        }

        out.push_str(&format!(
            "  Comparison {}: is {} == {}?\n",
            step.step_index, step.mid_value, target
        ));

        match step.comparison {
            Comparison::Equal => {
                out.push_str("  MATCH FOUND!\n");
                out.push_str(&format!(
                    "  The target {} is at index {} in the sorted array.\n",
                    target, step.mid
                ));
            }
            Comparison::Less => {
                out.push_str(&format!("  {} < {}\n", step.mid_value, target));
                out.push_str("  Target is in the RIGHT half.\n");
                out.push_str(&format!("  Update: low = mid + 1 = {}\n", step.mid + 1));
            }
            Comparison::Greater => {
                out.push_str(&format!("  {} > {}\n", step.mid_value, target));
                out.push_str("  Target is in the LEFT half.\n");
                out.push_str(&format!(
                    "  Update: high = mid - 1 = {}\n",
                    step.mid as i64 - 1
                ));
            }
        }

        out
    }

    /// Completion section: success details or the exhausted window
    pub fn render_completion(&self, trace: &SearchTrace) -> String {
        let mut out = String::new();
        let target = trace.target();

        out.push_str("=== SEARCH COMPLETED ===\n");

        match trace.outcome().position {
            Some(position) => {
                out.push_str("SUCCESS\n");
                out.push_str(&format!("  Target found: {}\n", target));
                out.push_str(&format!("  Position: index {} in sorted array\n", position));
                if let Some(original) = trace.original_index() {
                    out.push_str(&format!("  Original array index: {}\n", original));
                }
            }
            None => {
                out.push_str("NOT FOUND\n");
                out.push_str(&format!("  Target {} is not in the array.\n", target));
                if let Some((low, high)) = trace.last_step().map(final_bounds) {
                    out.push_str(&format!(
                        "  Search ended with low = {} > high = {}\n",
                        low, high
                    ));
                }
            }
        }

        if self.show_diagrams {
            out.push('\n');
            out.push_str(&diagram::render_final(trace));
            out.push('\n');
        }

        out
    }
}

impl Default for TextReport {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Statistics section of the narration
pub fn render_statistics(stats: &TraceStats) -> String {
    let mut out = String::new();

    out.push_str("ALGORITHM STATISTICS\n");
    out.push_str(&format!("  Total steps: {}\n", stats.total_steps));
    out.push_str(&format!("  Comparisons made: {}\n", stats.comparisons));
    out.push_str(&format!("  Array size: {} elements\n", stats.array_size));
    out.push_str(&format!(
        "  Worst case: {} steps for {} elements\n",
        stats.worst_case_steps, stats.array_size
    ));
    out.push_str(&format!(
        "  Efficiency: {:.0}% of the worst case\n",
        stats.efficiency_pct()
    ));
    out.push_str(&format!(
        "  Time complexity: {} = O(log {})\n",
        stats.time_complexity, stats.array_size
    ));
    out.push_str(&format!(
        "  Space complexity: {} - constant extra space\n",
        stats.space_complexity
    ));

    out
}

/// Compact status box shown next to the step narration
pub fn render_summary_box(stats: &TraceStats, target: i64) -> String {
    let status = if stats.found {
        "Found ✓"
    } else {
        "Not Found ✗"
    };

    let mut out = String::new();
    out.push_str("Algorithm: Binary Search\n");
    out.push_str(&format!("Status: {}\n", status));
    out.push_str(&format!("Target: {}\n", target));
    out.push_str(&format!("Array Size: {}\n", stats.array_size));
    out.push_str(&format!("Steps: {}\n", stats.total_steps));
    out.push_str(&format!("Comparisons: {}\n", stats.comparisons));
    out.push_str(&format!("Time Complexity: {}\n", stats.time_complexity));
    out
}

/// Background on the algorithm, shown by `--about` and `learn`
pub fn render_about() -> String {
    let mut out = String::new();

    out.push_str("=== HOW BINARY SEARCH WORKS ===\n\n");
    out.push_str("Algorithm steps:\n");
    out.push_str("  1. Requirement: the array must be sorted in ascending order\n");
    out.push_str("  2. Initialize: low = 0, high = length - 1\n");
    out.push_str("  3. Find middle: mid = (low + high) / 2\n");
    out.push_str("  4. Compare arr[mid] with the target:\n");
    out.push_str("       arr[mid] == target  found, return mid\n");
    out.push_str("       arr[mid] <  target  search the RIGHT half (low = mid + 1)\n");
    out.push_str("       arr[mid] >  target  search the LEFT half (high = mid - 1)\n");
    out.push_str("  5. Repeat steps 3-4 until found or low > high\n\n");

    out.push_str("Key characteristics:\n");
    out.push_str(&format!(
        "  Time complexity:  {} - each step halves the search window\n",
        TIME_COMPLEXITY
    ));
    out.push_str(&format!(
        "  Space complexity: {} - uses constant extra space\n",
        SPACE_COMPLEXITY
    ));
    out.push_str("  Requirements:     sorted input and random access by index\n\n");

    out.push_str("Why binary search:\n");
    out.push_str("  - Very fast on large sorted datasets\n");
    out.push_str("  - A compact example of divide and conquer\n");
    out.push_str("  - Every step can be drawn as a shrinking window\n");
    out.push_str("  - A fundamental algorithm in computer science\n");

    out
}

/// User-facing message for rejected input
pub fn render_error(error: &InputError) -> String {
    format!("Error: {}.", error)
}

/// Bounds after the decision of a non-matching step
///
/// `high` can drop to -1 when the window closes at index 0.
fn final_bounds(step: &StepRecord) -> (i64, i64) {
    let (low, high, mid) = (step.low as i64, step.high as i64, step.mid as i64);
    match step.comparison {
        Comparison::Equal => (low, high),
        Comparison::Less => (mid + 1, high),
        Comparison::Greater => (low, mid - 1),
    }
}
