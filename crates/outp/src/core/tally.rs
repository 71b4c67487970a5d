// standard library
use std::collections::HashMap;

// mcpost modules
use mcpost_utils::ValueExt;

// external crates
use serde::Serialize;

/// Tally results keyed on cell number
pub type TallyResults = HashMap<u32, TallyResult>;

/// Tally result for a single cell
///
/// The mean value and relative error exactly as printed in the results block
/// of the report.
///
/// ```text
///  cell  101
///                  1.23456E-03 0.0123
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct TallyResult {
    /// Tally result
    pub value: f64,
    /// Relative error on the result
    pub error: f64,
}

impl std::fmt::Display for TallyResult {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {:.4}", self.value.sci(5, 2), self.error)
    }
}
