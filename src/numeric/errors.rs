// ============================================================================
// Arithmetic Errors
// Classified failures of calculator arithmetic
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while evaluating a calculator step.
///
/// All of them are recoverable by the user: the engine keeps its state as it
/// was before the failing step and only reports the classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ArithError {
    /// Result magnitude reached the exponent bound
    Overflow,
    /// Non-zero value divided by zero, or reciprocal of zero
    DivideByZero,
    /// Zero divided by zero
    UndefinedResult,
    /// Square root of a negative value
    NegativeOperand,
}

impl fmt::Display for ArithError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithError::Overflow => {
                write!(f, "arithmetic overflow: result magnitude out of bounds")
            },
            ArithError::DivideByZero => write!(f, "division by zero"),
            ArithError::UndefinedResult => write!(f, "undefined result: zero divided by zero"),
            ArithError::NegativeOperand => {
                write!(f, "negative operand: square root of a negative value")
            },
        }
    }
}

impl std::error::Error for ArithError {}

/// Result type alias for calculator arithmetic
pub type ArithResult<T> = Result<T, ArithError>;
