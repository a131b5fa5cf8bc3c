//! Input parsing for raw search requests
//!
//! Values are entered as comma-separated integers (e.g. `23, 5, 17, 42`) and
//! the target as a single integer. All validation happens here, before any
//! sorting or searching takes place.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while validating a search request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter both an array and a target number")]
    EmptyInput,

    #[error(
        "Value {token:?} at position {position} is not an integer; enter numbers only, separated by commas (e.g., 5,3,9,1,7)"
    )]
    NonIntegerValue { token: String, position: usize },

    #[error("Target {token:?} must be a single integer number")]
    NonIntegerTarget { token: String },
}

/// Result type for input validation
pub type Result<T> = std::result::Result<T, InputError>;

/// A validated search request: the values as supplied plus the target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct SearchRequest {
    /// Values in input order (unsorted, duplicates allowed)
    pub values: Vec<i64>,
    /// Value to search for
    pub target: i64,
}

impl SearchRequest {
    /// Parse a request from raw form text
    ///
    /// Missing input on either side is reported first, then the values are
    /// validated, then the target.
    ///
    /// # Example
    ///
    /// ```
    /// use bintrace::input::SearchRequest;
    ///
    /// let request = SearchRequest::parse("23, 5, 17", "17").unwrap();
    /// assert_eq!(request.values, vec![23, 5, 17]);
    /// assert_eq!(request.target, 17);
    /// ```
    pub fn parse(values_text: &str, target_text: &str) -> Result<Self> {
        if values_text.trim().is_empty() || target_text.trim().is_empty() {
            return Err(InputError::EmptyInput);
        }

        let values = parse_values(values_text)?;
        let target = parse_target(target_text)?;

        Ok(Self { values, target })
    }
}

/// Parse a comma-separated list of integers
///
/// Every token is trimmed before parsing. Empty tokens (`1,,2` or a trailing
/// comma) are rejected like any other non-integer token.
pub fn parse_values(text: &str) -> Result<Vec<i64>> {
    if text.trim().is_empty() {
        return Err(InputError::EmptyInput);
    }

    text.split(',')
        .enumerate()
        .map(|(position, token)| {
            let token = token.trim();
            token
                .parse::<i64>()
                .map_err(|_| InputError::NonIntegerValue {
                    token: token.to_string(),
                    position,
                })
        })
        .collect()
}

/// Parse the target as a single integer
pub fn parse_target(text: &str) -> Result<i64> {
    let token = text.trim();
    if token.is_empty() {
        return Err(InputError::EmptyInput);
    }

    token
        .parse::<i64>()
        .map_err(|_| InputError::NonIntegerTarget {
            token: token.to_string(),
        })
}
