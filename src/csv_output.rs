//! CSV output format for search traces
//!
//! One row per step for spreadsheet analysis; `--summary` switches to a single
//! statistics row.

use crate::stats::TraceStats;
use crate::tracer::{Comparison, SearchTrace, StepRecord};

/// CSV output formatter
#[derive(Debug, Default)]
pub struct CsvOutput {
    rows: Vec<CsvStep>,
}

/// CSV record for a single step
#[derive(Debug, Clone)]
pub struct CsvStep {
    pub step: usize,
    pub low: usize,
    pub high: usize,
    pub mid: usize,
    pub mid_value: i64,
    pub comparison: Comparison,
    /// Decision taken, e.g. `low = 4` or `found at 4`
    pub action: String,
}

impl From<&StepRecord> for CsvStep {
    fn from(step: &StepRecord) -> Self {
        let action = match step.comparison {
            Comparison::Equal => format!("found at {}", step.mid),
            Comparison::Less => format!("low = {}", step.mid + 1),
            Comparison::Greater => format!("high = {}", step.mid as i64 - 1),
        };

        Self {
            step: step.step_index,
            low: step.low,
            high: step.high,
            mid: step.mid,
            mid_value: step.mid_value,
            comparison: step.comparison,
            action,
        }
    }
}

impl CsvOutput {
    /// Create a new CSV output formatter
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a formatter holding every step of a trace
    pub fn from_trace(trace: &SearchTrace) -> Self {
        let mut output = Self::new();
        for step in trace.steps() {
            output.add_step(CsvStep::from(step));
        }
        output
    }

    /// Add a step to the output
    pub fn add_step(&mut self, step: CsvStep) {
        self.rows.push(step);
    }

    fn header() -> &'static str {
        "step,low,high,mid,mid_value,comparison,action"
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn format_step(step: &CsvStep) -> String {
        [
            step.step.to_string(),
            step.low.to_string(),
            step.high.to_string(),
            step.mid.to_string(),
            step.mid_value.to_string(),
            step.comparison.as_str().to_string(),
            Self::escape_field(&step.action),
        ]
        .join(",")
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();

        output.push_str(Self::header());
        output.push('\n');

        for step in &self.rows {
            output.push_str(&Self::format_step(step));
            output.push('\n');
        }

        output
    }
}

/// CSV statistics output (for `--summary` mode)
pub fn stats_to_csv(stats: &TraceStats) -> String {
    let position = stats
        .position
        .map(|p| p.to_string())
        .unwrap_or_default();

    format!(
        "array_size,total_steps,comparisons,found,position,worst_case_steps\n{},{},{},{},{},{}\n",
        stats.array_size,
        stats.total_steps,
        stats.comparisons,
        stats.found,
        position,
        stats.worst_case_steps
    )
}
