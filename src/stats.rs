//! Summary statistics for a search trace
//!
//! Complexity figures are descriptive: binary search is always reported as
//! O(log n) time and O(1) extra space. The worst-case step bound is the one
//! thing computed from the input size.

use serde::{Deserialize, Serialize};

use crate::tracer::SearchTrace;

/// Time complexity reported for binary search
pub const TIME_COMPLEXITY: &str = "O(log n)";

/// Space complexity reported for binary search (beyond the trace itself)
pub const SPACE_COMPLEXITY: &str = "O(1)";

/// Aggregate statistics for one trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStats {
    /// Number of elements searched
    pub array_size: usize,
    /// Number of loop iterations
    pub total_steps: usize,
    /// Number of comparisons (one per step)
    pub comparisons: usize,
    /// Whether the target was found
    pub found: bool,
    /// Index in the sorted sequence, when found
    pub position: Option<usize>,
    /// Most steps a search over `array_size` elements can take
    pub worst_case_steps: usize,
    pub time_complexity: String,
    pub space_complexity: String,
}

impl TraceStats {
    /// Derive statistics from a finished trace
    pub fn from_trace(trace: &SearchTrace) -> Self {
        let outcome = trace.outcome();
        let array_size = trace.sorted().len();

        Self {
            array_size,
            total_steps: outcome.total_steps,
            comparisons: outcome.comparisons,
            found: outcome.found,
            position: outcome.position,
            worst_case_steps: worst_case_steps(array_size),
            time_complexity: TIME_COMPLEXITY.to_string(),
            space_complexity: SPACE_COMPLEXITY.to_string(),
        }
    }

    /// Share of the worst case actually used, as a percentage
    pub fn efficiency_pct(&self) -> f64 {
        if self.worst_case_steps == 0 {
            return 0.0;
        }
        (self.total_steps as f64 / self.worst_case_steps as f64) * 100.0
    }

    /// Human-readable status
    pub fn status(&self) -> &'static str {
        if self.found {
            "Found"
        } else {
            "Not Found"
        }
    }
}

/// Maximum number of steps binary search can take over `n` elements
///
/// Equal to `floor(log2 n) + 1` for `n > 0`, and `0` for an empty slice.
pub fn worst_case_steps(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()) as usize
}
