// ============================================================================
// Numeric Module
// Arbitrary-precision decimal arithmetic policy for calculator steps
// ============================================================================
//
// This module provides:
// - NumericPolicy: checked add/subtract/multiply/divide, sqrt, square,
//   reciprocal, negate and percent over bigdecimal::BigDecimal
// - ArithError: classification of failed steps
// - format: digit grouping for display text
//
// Design principles:
// - No floating-point operations
// - Sums and products are exact; quotients and roots keep 16 fractional digits
// - All fallible arithmetic returns Result (no panics)
// - Every accepted result passes the magnitude-exponent overflow check

mod errors;
pub mod format;
mod policy;

pub use errors::{ArithError, ArithResult};
pub use policy::{magnitude_exponent, NumericPolicy, DEFAULT_EXPONENT_BOUND, QUOTIENT_SCALE};
