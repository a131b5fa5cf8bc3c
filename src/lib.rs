//! bintrace - step-by-step binary search tracer
//!
//! This library sorts a list of integers, runs an iterative binary search for
//! a target and records every step (search window, midpoint, comparison), then
//! renders the trace as narrated text, pointer diagrams, JSON, CSV or HTML.
//!
//! ```
//! use bintrace::tracer::trace;
//!
//! let trace = trace(&[23, 5, 17, 42, 9, 31, 14, 8], 17).unwrap();
//! assert!(trace.outcome().found);
//! ```

pub mod cli;
pub mod config;
pub mod csv_output;
pub mod diagram;
pub mod form;
pub mod html_output;
pub mod input;
pub mod json_output;
pub mod presets;
pub mod report;
pub mod session;
pub mod stats;
pub mod tracer;
