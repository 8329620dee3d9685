// ============================================================================
// Digit Grouping
// Pure text shaping for decimal display (no rounding)
// ============================================================================

use bigdecimal::BigDecimal;
use num_traits::{Signed, Zero};

/// Group the integer digits of a plain decimal string in clusters of three,
/// counting leftward from the decimal point. Sign and fractional part are
/// left untouched; separators already present are dropped first so the
/// function is idempotent.
pub fn group_digits(text: &str, separator: char) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };

    let digits: Vec<char> = integer.chars().filter(|c| *c != separator).collect();
    let mut out = String::with_capacity(text.len() + digits.len() / 3 + 1);
    out.push_str(sign);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(*digit);
    }
    if let Some(frac) = fraction {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Positional text of a decimal, never in exponent form (`1e3` → `"1000"`,
/// `1.50` → `"1.50"`).
pub fn plain_string(value: &BigDecimal) -> String {
    let (mantissa, scale) = value.as_bigint_and_exponent();
    let sign = if mantissa.is_negative() { "-" } else { "" };
    let digits = mantissa.magnitude().to_string();

    if scale <= 0 {
        if mantissa.is_zero() {
            return "0".to_string();
        }
        let zeros = "0".repeat(scale.unsigned_abs() as usize);
        return format!("{sign}{digits}{zeros}");
    }

    let scale = scale as usize;
    if digits.len() > scale {
        let (integer, fraction) = digits.split_at(digits.len() - scale);
        format!("{sign}{integer}.{fraction}")
    } else {
        let zeros = "0".repeat(scale - digits.len());
        format!("{sign}0.{zeros}{digits}")
    }
}

/// Normalize a decimal (drop trailing fractional zeros) and group it.
pub fn group_decimal(value: &BigDecimal, separator: char) -> String {
    group_digits(&plain_string(&value.normalized()), separator)
}
