//! JSON output format for search traces
//!
//! `--format json`: the whole trace in a versioned envelope.

use serde::{Deserialize, Serialize};

use crate::stats::TraceStats;
use crate::tracer::{SearchTrace, StepRecord};

/// A single search step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonStep {
    /// 1-based step number
    pub step: usize,
    pub low: usize,
    pub high: usize,
    pub mid: usize,
    /// Value at `mid` in the sorted array
    pub mid_value: i64,
    /// EQUAL, LESS or GREATER (mid value vs target)
    pub comparison: String,
    /// Window searched next, absent once the search stops
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_window: Option<[usize; 2]>,
}

impl From<&StepRecord> for JsonStep {
    fn from(step: &StepRecord) -> Self {
        Self {
            step: step.step_index,
            low: step.low,
            high: step.high,
            mid: step.mid,
            mid_value: step.mid_value,
            comparison: step.comparison.as_str().to_string(),
            next_window: step.next_window().map(|(low, high)| [low, high]),
        }
    }
}

/// Final result of the search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutcome {
    pub found: bool,
    /// Index in the sorted array (only when found)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    /// Index in the input array (only when found)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_index: Option<usize>,
    pub comparisons: usize,
    pub total_steps: usize,
}

/// Summary statistics for the trace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSummary {
    pub array_size: usize,
    pub worst_case_steps: usize,
    pub time_complexity: String,
    pub space_complexity: String,
}

/// Root JSON output structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput {
    /// Format version identifier
    pub version: String,
    /// Format name
    pub format: String,
    /// Values in input order
    pub input: Vec<i64>,
    /// Values the search ran over
    pub sorted: Vec<i64>,
    pub target: i64,
    pub steps: Vec<JsonStep>,
    pub outcome: JsonOutcome,
    pub summary: JsonSummary,
}

impl JsonOutput {
    /// Build the JSON document for a trace
    pub fn from_trace(trace: &SearchTrace) -> Self {
        let stats = TraceStats::from_trace(trace);
        let outcome = trace.outcome();

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "bintrace-json-v1".to_string(),
            input: trace.input().to_vec(),
            sorted: trace.sorted().to_vec(),
            target: trace.target(),
            steps: trace.steps().iter().map(JsonStep::from).collect(),
            outcome: JsonOutcome {
                found: outcome.found,
                position: outcome.position,
                original_index: trace.original_index(),
                comparisons: outcome.comparisons,
                total_steps: outcome.total_steps,
            },
            summary: JsonSummary {
                array_size: stats.array_size,
                worst_case_steps: stats.worst_case_steps,
                time_complexity: stats.time_complexity,
                space_complexity: stats.space_complexity,
            },
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
