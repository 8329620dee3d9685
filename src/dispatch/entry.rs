// ============================================================================
// Digit Buffer
// Accumulates the number being typed
// ============================================================================

use crate::interfaces::NumberEntry;
use crate::numeric::format::plain_string;
use bigdecimal::BigDecimal;
use num_traits::Zero;
use std::str::FromStr;

/// Default digit capacity of a typed number
pub const DEFAULT_MAX_DIGITS: usize = 16;

/// Typed-number text with the usual desktop-calculator rules: a single
/// leading zero, one decimal point, a bounded number of digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitBuffer {
    text: String,
    max_digits: usize,

    /// Text came from `load`; the next digit replaces it
    loaded: bool,
}

impl DigitBuffer {
    pub fn new(max_digits: usize) -> Self {
        Self {
            text: String::new(),
            max_digits,
            loaded: false,
        }
    }

    fn digit_count(&self) -> usize {
        self.text.chars().filter(char::is_ascii_digit).count()
    }

    fn restart_if_loaded(&mut self) {
        if self.loaded {
            self.start_fresh();
        }
    }
}

impl Default for DigitBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DIGITS)
    }
}

impl NumberEntry for DigitBuffer {
    fn push_digit(&mut self, digit: u8) -> bool {
        if digit > 9 {
            return false;
        }
        self.restart_if_loaded();

        let unsigned = self.text.trim_start_matches('-');
        if unsigned == "0" {
            if digit == 0 {
                return true;
            }
            self.text.pop();
        } else if self.digit_count() >= self.max_digits {
            return false;
        }

        self.text.push(char::from(b'0' + digit));
        true
    }

    fn push_decimal_point(&mut self) -> bool {
        self.restart_if_loaded();
        if self.text.contains('.') || self.digit_count() >= self.max_digits {
            return false;
        }
        if self.text.is_empty() {
            self.text.push('0');
        }
        self.text.push('.');
        true
    }

    fn backspace(&mut self) {
        self.loaded = false;
        self.text.pop();
        if self.text == "-" || self.text == "-0" {
            self.text.clear();
        }
    }

    fn negate(&mut self) {
        if !self.can_negate() {
            return;
        }
        match self.text.strip_prefix('-') {
            Some(rest) => self.text = rest.to_string(),
            None => self.text.insert(0, '-'),
        }
    }

    fn can_negate(&self) -> bool {
        self.current().is_some_and(|value| !value.is_zero())
    }

    fn has_number(&self) -> bool {
        !self.text.is_empty()
    }

    fn current(&self) -> Option<BigDecimal> {
        if self.text.is_empty() {
            return None;
        }
        let value = BigDecimal::from_str(self.text.trim_end_matches('.')).ok()?;
        Some(if value.is_zero() { BigDecimal::zero() } else { value })
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn start_fresh(&mut self) {
        self.text.clear();
        self.loaded = false;
    }

    fn load(&mut self, value: &BigDecimal) {
        self.text = plain_string(&value.normalized());
        self.loaded = true;
    }
}
