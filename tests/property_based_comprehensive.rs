//! Property-based tests for the search tracer
//!
//! Core properties checked:
//! 1. Found exactly when the target is present, at a matching index
//! 2. Step count never exceeds floor(log2 n) + 1
//! 3. Search windows shrink strictly and stay nested
//! 4. Tracing is a pure function of its input
//! 5. Parsing round-trips through the text form and never panics

use bintrace::input::{parse_values, InputError};
use bintrace::stats::{worst_case_steps, TraceStats};
use bintrace::tracer::{trace, trace_text, Comparison};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_found_iff_present(
        values in prop::collection::vec(-50i64..50, 1..64),
        target in -60i64..60,
    ) {
        let trace = trace(&values, target).unwrap();
        let outcome = trace.outcome();

        prop_assert_eq!(outcome.found, values.contains(&target));
        match outcome.position {
            Some(position) => {
                prop_assert_eq!(trace.sorted()[position], target);
                let original = trace.original_index().unwrap();
                prop_assert_eq!(values[original], target);
            }
            None => prop_assert!(!outcome.found),
        }
    }

    #[test]
    fn prop_step_count_bounded(
        values in prop::collection::vec(any::<i64>(), 1..512),
        target in any::<i64>(),
    ) {
        let trace = trace(&values, target).unwrap();
        let steps = trace.steps().len();
        let bound = worst_case_steps(values.len());

        prop_assert!(steps >= 1);
        prop_assert!(steps <= bound);

        // The looser ceil(log2 n) + 1 bound holds as well
        let ceil_log2 = (values.len() as f64).log2().ceil() as usize;
        prop_assert!(steps <= ceil_log2 + 1);
    }

    #[test]
    fn prop_windows_strictly_nested(
        values in prop::collection::vec(-1000i64..1000, 1..200),
        target in -1000i64..1000,
    ) {
        let trace = trace(&values, target).unwrap();
        let steps = trace.steps();

        for step in steps {
            prop_assert!(step.low <= step.high);
            prop_assert!(step.high < trace.sorted().len());
            prop_assert_eq!(step.mid, (step.low + step.high) / 2);
            prop_assert_eq!(step.mid_value, trace.sorted()[step.mid]);
        }

        for pair in steps.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            prop_assert_eq!(next.step_index, prev.step_index + 1);
            prop_assert!(prev.low <= next.low && next.high <= prev.high);
            prop_assert!(next.window_len() < prev.window_len());
            prop_assert_eq!(prev.next_window(), Some((next.low, next.high)));
        }

        // Only the last step may be a match
        for step in &steps[..steps.len() - 1] {
            prop_assert_ne!(step.comparison, Comparison::Equal);
        }
    }

    #[test]
    fn prop_trace_is_pure(
        values in prop::collection::vec(any::<i64>(), 1..100),
        target in any::<i64>(),
    ) {
        let first = trace(&values, target).unwrap();
        let second = trace(&values, target).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_sorted_is_permutation_of_input(
        values in prop::collection::vec(any::<i64>(), 1..100),
        target in any::<i64>(),
    ) {
        let trace = trace(&values, target).unwrap();

        let mut expected = values.clone();
        expected.sort();
        prop_assert_eq!(trace.sorted(), expected.as_slice());
        prop_assert_eq!(trace.input(), values.as_slice());
    }

    #[test]
    fn prop_stats_match_outcome(
        values in prop::collection::vec(-20i64..20, 1..50),
        target in -25i64..25,
    ) {
        let trace = trace(&values, target).unwrap();
        let stats = TraceStats::from_trace(&trace);

        prop_assert_eq!(stats.total_steps, trace.steps().len());
        prop_assert_eq!(stats.comparisons, stats.total_steps);
        prop_assert_eq!(stats.array_size, values.len());
        prop_assert_eq!(stats.found, trace.outcome().found);
    }

    #[test]
    fn prop_text_form_round_trip(
        values in prop::collection::vec(any::<i64>(), 1..40),
        target in any::<i64>(),
    ) {
        let values_text = values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        let from_text = trace_text(&values_text, &target.to_string()).unwrap();
        let direct = trace(&values, target).unwrap();
        prop_assert_eq!(from_text, direct);
    }

    #[test]
    fn prop_parse_values_never_panics(text in ".{0,64}") {
        match parse_values(&text) {
            Ok(values) => prop_assert!(!values.is_empty()),
            Err(InputError::EmptyInput) => prop_assert!(text.trim().is_empty()),
            Err(InputError::NonIntegerValue { .. }) => {}
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }
}

#[test]
fn test_empty_sequence_is_rejected() {
    assert_eq!(trace(&[], 0), Err(InputError::EmptyInput));
}
