// ============================================================================
// Numeric Policy
// Arbitrary-precision decimal arithmetic with overflow classification
// ============================================================================

use super::errors::{ArithError, ArithResult};
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

/// Default bound on the magnitude exponent (`1e10000` and `1e-10000` overflow).
pub const DEFAULT_EXPONENT_BOUND: u32 = 10_000;

/// Fractional digits kept by division, reciprocal and square root.
///
/// Addition, subtraction, multiplication and percent are exact.
pub const QUOTIENT_SCALE: i64 = 16;

/// Arithmetic rules shared by every calculator step.
///
/// Values are [`BigDecimal`], so sums and products never lose digits.
/// Quotients and roots are rounded half-up to [`QUOTIENT_SCALE`] fractional
/// digits. Every result has to pass [`NumericPolicy::check_overflow`] before
/// it may enter engine state.
///
/// # Example
/// ```
/// use bigdecimal::BigDecimal;
/// use calc_engine::numeric::{ArithError, NumericPolicy};
///
/// let policy = NumericPolicy::default();
/// let two = BigDecimal::from(2);
/// let three = BigDecimal::from(3);
///
/// assert_eq!(policy.add(&two, &three), Ok(BigDecimal::from(5)));
/// assert_eq!(
///     policy.divide(&two, &three),
///     Ok("0.6666666666666667".parse::<BigDecimal>().unwrap())
/// );
/// assert_eq!(
///     policy.divide(&BigDecimal::from(0), &BigDecimal::from(0)),
///     Err(ArithError::UndefinedResult)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericPolicy {
    exponent_bound: u32,
}

impl NumericPolicy {
    /// Create a policy with the given magnitude-exponent bound
    pub const fn new(exponent_bound: u32) -> Self {
        Self { exponent_bound }
    }

    /// The magnitude-exponent bound in force
    pub fn exponent_bound(&self) -> u32 {
        self.exponent_bound
    }

    // ========================================================================
    // Overflow
    // ========================================================================

    /// Reject values whose magnitude exponent reaches the bound in either
    /// direction (`1e10000` and `1e-10000` both overflow under the default
    /// bound). Returns the value unchanged when it is acceptable.
    pub fn check_overflow(&self, value: BigDecimal) -> ArithResult<BigDecimal> {
        if magnitude_exponent(&value).unsigned_abs() >= u64::from(self.exponent_bound) {
            return Err(ArithError::Overflow);
        }
        Ok(value)
    }

    // ========================================================================
    // Binary Operations
    // ========================================================================

    pub fn add(&self, a: &BigDecimal, b: &BigDecimal) -> ArithResult<BigDecimal> {
        self.check_overflow(a + b)
    }

    pub fn subtract(&self, a: &BigDecimal, b: &BigDecimal) -> ArithResult<BigDecimal> {
        self.check_overflow(a - b)
    }

    pub fn multiply(&self, a: &BigDecimal, b: &BigDecimal) -> ArithResult<BigDecimal> {
        self.check_overflow(a * b)
    }

    /// Divide `a` by `b`; `0 ÷ 0` is undefined, anything else over zero is a
    /// division by zero.
    pub fn divide(&self, a: &BigDecimal, b: &BigDecimal) -> ArithResult<BigDecimal> {
        if b.is_zero() {
            return Err(if a.is_zero() {
                ArithError::UndefinedResult
            } else {
                ArithError::DivideByZero
            });
        }
        self.check_overflow(scaled_quotient(a, b))
    }

    // ========================================================================
    // Unary Operations
    // ========================================================================

    pub fn sqrt(&self, a: &BigDecimal) -> ArithResult<BigDecimal> {
        if a.is_negative() {
            return Err(ArithError::NegativeOperand);
        }
        self.check_overflow(scaled_sqrt(a))
    }

    pub fn square(&self, a: &BigDecimal) -> ArithResult<BigDecimal> {
        self.multiply(a, a)
    }

    pub fn reciprocal(&self, a: &BigDecimal) -> ArithResult<BigDecimal> {
        if a.is_zero() {
            return Err(ArithError::DivideByZero);
        }
        self.check_overflow(scaled_quotient(&BigDecimal::from(1), a))
    }

    /// Sign flip. Cannot fail.
    pub fn negate(&self, a: &BigDecimal) -> BigDecimal {
        -a.clone()
    }

    /// `first × second / 100`, exact
    pub fn percent(&self, first: &BigDecimal, second: &BigDecimal) -> ArithResult<BigDecimal> {
        let (mantissa, scale) = (first * second).into_bigint_and_exponent();
        self.check_overflow(BigDecimal::new(mantissa, scale + 2))
    }
}

impl Default for NumericPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_EXPONENT_BOUND)
    }
}

/// Decimal exponent of the most significant digit (`1234.5` → 3,
/// `0.00120` → -3). Zero has exponent 0.
pub fn magnitude_exponent(value: &BigDecimal) -> i64 {
    if value.is_zero() {
        return 0;
    }
    let (_, scale) = value.as_bigint_and_exponent();
    value.digits() as i64 - 1 - scale
}

// ============================================================================
// Scaled Rounding
// ============================================================================

fn pow10(exponent: i64) -> BigInt {
    num_traits::pow(BigInt::from(10u8), exponent as usize)
}

/// `num / den` rounded half away from zero to an integer
fn round_half_up(num: &BigInt, den: &BigInt) -> BigInt {
    let quotient = num / den;
    let remainder = num % den;
    if remainder.abs() * 2u8 < den.abs() {
        return quotient;
    }
    if num.is_negative() != den.is_negative() {
        quotient - 1u8
    } else {
        quotient + 1u8
    }
}

/// `a / b` with [`QUOTIENT_SCALE`] fractional digits. `b` must be non-zero.
fn scaled_quotient(a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
    let (num, num_scale) = a.as_bigint_and_exponent();
    let (den, den_scale) = b.as_bigint_and_exponent();

    // a / b = num / den · 10^(den_scale - num_scale)
    let shift = QUOTIENT_SCALE + den_scale - num_scale;
    let quotient = if shift >= 0 {
        round_half_up(&(num * pow10(shift)), &den)
    } else {
        round_half_up(&num, &(den * pow10(-shift)))
    };
    BigDecimal::new(quotient, QUOTIENT_SCALE)
}

/// Square root of a non-negative `a` with [`QUOTIENT_SCALE`] fractional digits
fn scaled_sqrt(a: &BigDecimal) -> BigDecimal {
    let (mantissa, scale) = a.as_bigint_and_exponent();

    // Root of num / den, scaled so the integer root carries the fraction
    let shift = 2 * QUOTIENT_SCALE - scale;
    let (num, den) = if shift >= 0 {
        (mantissa * pow10(shift), BigInt::from(1u8))
    } else {
        (mantissa, pow10(-shift))
    };

    let root = (&num / &den).sqrt();
    // sqrt(x) >= root + 1/2  <=>  4x >= (2·root + 1)^2
    let upper = &root * 2u8 + 1u8;
    let root = if num * 4u8 >= &upper * &upper * den {
        root + 1u8
    } else {
        root
    };
    BigDecimal::new(root, QUOTIENT_SCALE)
}
