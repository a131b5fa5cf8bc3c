//! Binary search with a recorded step trace
//!
//! The tracer sorts a copy of the input, then runs an iterative binary search
//! over the inclusive window `[low, high]`, recording one [`StepRecord`] per
//! comparison. The trace is a pure function of `(values, target)`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::input::{InputError, SearchRequest};

/// Result of comparing the middle value against the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Comparison {
    /// `arr[mid] == target`
    Equal,
    /// `arr[mid] < target`, continue in the right half
    Less,
    /// `arr[mid] > target`, continue in the left half
    Greater,
}

impl Comparison {
    /// Compare a middle value against the target
    pub fn of(mid_value: i64, target: i64) -> Self {
        match mid_value.cmp(&target) {
            Ordering::Equal => Comparison::Equal,
            Ordering::Less => Comparison::Less,
            Ordering::Greater => Comparison::Greater,
        }
    }

    /// Operator describing how the middle value relates to the target
    pub fn symbol(&self) -> &'static str {
        match self {
            Comparison::Equal => "==",
            Comparison::Less => "<",
            Comparison::Greater => ">",
        }
    }

    /// Uppercase name used in machine-readable output
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparison::Equal => "EQUAL",
            Comparison::Less => "LESS",
            Comparison::Greater => "GREATER",
        }
    }
}

/// One iteration of the search loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    /// 1-based iteration number
    pub step_index: usize,
    /// Lower bound of the search window (inclusive)
    pub low: usize,
    /// Upper bound of the search window (inclusive)
    pub high: usize,
    /// `floor((low + high) / 2)`
    pub mid: usize,
    /// `sorted[mid]`
    pub mid_value: i64,
    /// How `mid_value` compares to the target
    pub comparison: Comparison,
}

impl StepRecord {
    /// Whether this step ended the search with a match
    pub fn is_terminal(&self) -> bool {
        self.comparison == Comparison::Equal
    }

    /// Number of indices still under consideration during this step
    pub fn window_len(&self) -> usize {
        self.high - self.low + 1
    }

    /// The window the next step searches, if any
    ///
    /// Returns `None` after a match or when the decision empties the window.
    pub fn next_window(&self) -> Option<(usize, usize)> {
        let (low, high) = match self.comparison {
            Comparison::Equal => return None,
            Comparison::Less => (self.mid + 1, self.high),
            Comparison::Greater => (self.low, self.mid.checked_sub(1)?),
        };
        (low <= high).then_some((low, high))
    }
}

/// Final result of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Whether the target was found
    pub found: bool,
    /// Index into the sorted sequence (only when found)
    pub position: Option<usize>,
    /// Number of comparisons made (one per step)
    pub comparisons: usize,
    /// Number of steps recorded
    pub total_steps: usize,
}

/// Complete trace of one binary search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTrace {
    input: Vec<i64>,
    sorted: Vec<i64>,
    origin: Vec<usize>,
    target: i64,
    steps: Vec<StepRecord>,
    outcome: Outcome,
}

impl SearchTrace {
    /// Values in the order they were supplied
    pub fn input(&self) -> &[i64] {
        &self.input
    }

    /// Sorted copy the search ran over
    pub fn sorted(&self) -> &[i64] {
        &self.sorted
    }

    /// Value that was searched for
    pub fn target(&self) -> i64 {
        self.target
    }

    /// Recorded steps, in order
    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    /// Final outcome
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// The step that ended the search
    pub fn last_step(&self) -> Option<&StepRecord> {
        self.steps.last()
    }

    /// Input index a sorted slot came from
    pub fn origin_of(&self, sorted_index: usize) -> Option<usize> {
        self.origin.get(sorted_index).copied()
    }

    /// Input index of the element the search landed on
    ///
    /// With duplicates this is the exact occurrence the midpoint hit, not
    /// necessarily the first one in input order.
    pub fn original_index(&self) -> Option<usize> {
        self.outcome.position.and_then(|p| self.origin_of(p))
    }
}

/// Sort the values and run a traced binary search for `target`
///
/// # Errors
///
/// Returns [`InputError::EmptyInput`] when `values` is empty.
///
/// # Example
///
/// ```
/// use bintrace::tracer::trace;
///
/// let trace = trace(&[23, 5, 17, 42, 9, 31, 14, 8], 17).unwrap();
/// assert_eq!(trace.sorted(), &[5, 8, 9, 14, 17, 23, 31, 42]);
/// assert_eq!(trace.outcome().position, Some(4));
/// assert_eq!(trace.steps().len(), 3);
/// ```
pub fn trace(values: &[i64], target: i64) -> Result<SearchTrace, InputError> {
    if values.is_empty() {
        return Err(InputError::EmptyInput);
    }

    // Stable sort over indices so every sorted slot remembers its input slot
    let mut origin: Vec<usize> = (0..values.len()).collect();
    origin.sort_by_key(|&i| values[i]);
    let sorted: Vec<i64> = origin.iter().map(|&i| values[i]).collect();

    let (steps, position) = search(&sorted, target);
    let outcome = Outcome {
        found: position.is_some(),
        position,
        comparisons: steps.len(),
        total_steps: steps.len(),
    };

    Ok(SearchTrace {
        input: values.to_vec(),
        sorted,
        origin,
        target,
        steps,
        outcome,
    })
}

/// Trace a parsed request
pub fn trace_request(request: &SearchRequest) -> Result<SearchTrace, InputError> {
    trace(&request.values, request.target)
}

/// Parse raw form text and trace it
pub fn trace_text(values_text: &str, target_text: &str) -> Result<SearchTrace, InputError> {
    let request = SearchRequest::parse(values_text, target_text)?;
    trace_request(&request)
}

/// Iterative binary search over a non-empty sorted slice
fn search(sorted: &[i64], target: i64) -> (Vec<StepRecord>, Option<usize>) {
    let mut steps = Vec::new();
    let mut low = 0;
    let mut high = sorted.len() - 1;

    while low <= high {
        // Same as (low + high) / 2 for unsigned bounds, without the overflow
        let mid = low + (high - low) / 2;
        let mid_value = sorted[mid];
        let comparison = Comparison::of(mid_value, target);

        steps.push(StepRecord {
            step_index: steps.len() + 1,
            low,
            high,
            mid,
            mid_value,
            comparison,
        });

        match comparison {
            Comparison::Equal => return (steps, Some(mid)),
            Comparison::Less => low = mid + 1,
            Comparison::Greater => match mid.checked_sub(1) {
                Some(h) => high = h,
                None => break,
            },
        }
    }

    (steps, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(trace: &SearchTrace) -> Vec<(usize, usize, usize)> {
        trace.steps().iter().map(|s| (s.low, s.high, s.mid)).collect()
    }

    #[test]
    fn test_default_example_finds_17() {
        let trace = trace(&[23, 5, 17, 42, 9, 31, 14, 8], 17).unwrap();

        assert_eq!(trace.sorted(), &[5, 8, 9, 14, 17, 23, 31, 42]);
        assert_eq!(bounds(&trace), vec![(0, 7, 3), (4, 7, 5), (4, 4, 4)]);

        let comparisons: Vec<_> = trace.steps().iter().map(|s| s.comparison).collect();
        assert_eq!(
            comparisons,
            vec![Comparison::Less, Comparison::Greater, Comparison::Equal]
        );

        let outcome = trace.outcome();
        assert!(outcome.found);
        assert_eq!(outcome.position, Some(4));
        assert_eq!(outcome.comparisons, 3);
        assert_eq!(outcome.total_steps, 3);
        // 17 was the third value supplied
        assert_eq!(trace.original_index(), Some(2));
    }

    #[test]
    fn test_target_above_all_values() {
        let trace = trace(&[1, 2, 3, 4, 5, 6, 7, 8, 9], 10).unwrap();

        assert!(!trace.outcome().found);
        assert_eq!(trace.outcome().position, None);
        assert_eq!(trace.original_index(), None);
        assert_eq!(
            bounds(&trace),
            vec![(0, 8, 4), (5, 8, 6), (7, 8, 7), (8, 8, 8)]
        );

        let last = trace.last_step().unwrap();
        assert_eq!(last.comparison, Comparison::Less);
        assert_eq!(last.next_window(), None);
    }

    #[test]
    fn test_target_below_all_values_stops_at_index_zero() {
        let trace = trace(&[10, 20, 30], 1).unwrap();

        assert!(!trace.outcome().found);
        assert_eq!(bounds(&trace), vec![(0, 2, 1), (0, 0, 0)]);
        assert_eq!(trace.last_step().unwrap().comparison, Comparison::Greater);
    }

    #[test]
    fn test_single_element() {
        let hit = trace(&[5], 5).unwrap();
        assert!(hit.outcome().found);
        assert_eq!(hit.outcome().position, Some(0));
        assert_eq!(hit.outcome().total_steps, 1);

        let miss = trace(&[5], 3).unwrap();
        assert!(!miss.outcome().found);
        assert_eq!(miss.outcome().total_steps, 1);
    }

    #[test]
    fn test_empty_values_rejected() {
        assert_eq!(trace(&[], 1), Err(InputError::EmptyInput));
    }

    #[test]
    fn test_step_indices_start_at_one() {
        let trace = trace(&[15, 25, 35, 45, 55, 65, 75, 85, 95], 99).unwrap();
        for (i, step) in trace.steps().iter().enumerate() {
            assert_eq!(step.step_index, i + 1);
        }
    }

    #[test]
    fn test_duplicates_map_to_searched_occurrence() {
        // Sorted: [3, 7, 7, 7, 9]; first probe lands on sorted index 2
        let trace = trace(&[7, 9, 7, 3, 7], 7).unwrap();

        assert_eq!(trace.outcome().position, Some(2));
        // Stable sort: sorted slots 1..=3 hold input indices 0, 2, 4
        assert_eq!(trace.origin_of(1), Some(0));
        assert_eq!(trace.origin_of(2), Some(2));
        assert_eq!(trace.origin_of(3), Some(4));
        assert_eq!(trace.original_index(), Some(2));
    }

    #[test]
    fn test_input_order_is_kept() {
        let trace = trace(&[3, 1, 2], 2).unwrap();
        assert_eq!(trace.input(), &[3, 1, 2]);
        assert_eq!(trace.target(), 2);
    }

    #[test]
    fn test_next_window() {
        let step = StepRecord {
            step_index: 1,
            low: 0,
            high: 7,
            mid: 3,
            mid_value: 14,
            comparison: Comparison::Less,
        };
        assert_eq!(step.next_window(), Some((4, 7)));
        assert_eq!(step.window_len(), 8);

        let left = StepRecord {
            comparison: Comparison::Greater,
            ..step
        };
        assert_eq!(left.next_window(), Some((0, 2)));

        let hit = StepRecord {
            comparison: Comparison::Equal,
            ..step
        };
        assert!(hit.is_terminal());
        assert_eq!(hit.next_window(), None);
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let trace = trace(&[i64::MIN, 0, i64::MAX], i64::MAX).unwrap();
        assert_eq!(trace.outcome().position, Some(2));
    }

    #[test]
    fn test_trace_text_parses_then_traces() {
        let trace = trace_text("2,4,6,8,10,12,14,16,18,20", "12").unwrap();
        assert_eq!(trace.outcome().position, Some(5));

        assert!(matches!(
            trace_text("2,4,x", "12"),
            Err(InputError::NonIntegerValue { .. })
        ));
        assert!(matches!(
            trace_text("2,4", "twelve"),
            Err(InputError::NonIntegerTarget { .. })
        ));
    }

    #[test]
    fn test_comparison_labels() {
        assert_eq!(Comparison::of(3, 3), Comparison::Equal);
        assert_eq!(Comparison::of(2, 3), Comparison::Less);
        assert_eq!(Comparison::of(4, 3), Comparison::Greater);
        assert_eq!(Comparison::Less.symbol(), "<");
        assert_eq!(Comparison::Greater.as_str(), "GREATER");
    }
}
