//! Form state and the actions that transform it
//!
//! The visualizer's form (values box, target box and four output panels) is
//! modelled as plain data. Every user action is a pure function from the
//! current state to the next one, so front ends only dispatch actions.

use crate::diagram;
use crate::presets::{self, Preset};
use crate::report::{self, TextReport};
use crate::stats::TraceStats;
use crate::tracer;

/// Output panels filled by a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Panels {
    /// Step-by-step narration, or the error message
    pub steps: String,
    /// Diagram of the last search step
    pub current: String,
    /// Diagram of the final state
    pub final_view: String,
    /// Status box
    pub stats: String,
}

impl Panels {
    /// Whether nothing has been rendered yet
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
            && self.current.is_empty()
            && self.final_view.is_empty()
            && self.stats.is_empty()
    }
}

/// Everything the form shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Raw values text
    pub values: String,
    /// Raw target text
    pub target: String,
    pub panels: Panels,
}

impl FormState {
    /// Form pre-filled with the default example
    pub fn initial() -> Self {
        let mut state = Self::default();
        if let Some(preset) = presets::builtin()
            .into_iter()
            .find(|p| p.name == presets::DEFAULT_PRESET)
        {
            state.values = preset.values;
            state.target = preset.target;
        }
        state
    }
}

/// A user action on the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// Replace the values text
    SetValues(String),
    /// Replace the target text
    SetTarget(String),
    /// Trace the current input and fill the panels
    Run,
    /// Empty the inputs and the panels
    Clear,
    /// Copy an example into the inputs (panels are left as they are)
    Load(Preset),
}

/// Compute the next form state
pub fn apply(state: &FormState, action: FormAction) -> FormState {
    match action {
        FormAction::SetValues(values) => FormState {
            values,
            ..state.clone()
        },
        FormAction::SetTarget(target) => FormState {
            target,
            ..state.clone()
        },
        FormAction::Run => FormState {
            panels: run(&state.values, &state.target),
            ..state.clone()
        },
        FormAction::Clear => FormState::default(),
        FormAction::Load(preset) => FormState {
            values: preset.values,
            target: preset.target,
            ..state.clone()
        },
    }
}

/// Trace raw input and render the four panels
///
/// Invalid input puts the error message in the steps panel and leaves the
/// other panels empty.
pub fn run(values: &str, target: &str) -> Panels {
    let trace = match tracer::trace_text(values, target) {
        Ok(trace) => trace,
        Err(err) => {
            return Panels {
                steps: report::render_error(&err),
                ..Panels::default()
            }
        }
    };

    let text = TextReport::new(false);
    let stats = TraceStats::from_trace(&trace);

    let mut steps = text.render_steps(&trace);
    steps.push('\n');
    steps.push_str(&text.render_completion(&trace));
    steps.push('\n');
    steps.push_str(&report::render_statistics(&stats));

    let current = trace
        .last_step()
        .map(|step| diagram::render_step(trace.sorted(), step))
        .unwrap_or_default();

    Panels {
        steps,
        current,
        final_view: diagram::render_final(&trace),
        stats: report::render_summary_box(&stats, trace.target()),
    }
}
