// ============================================================================
// Display Formatting
// Decimal results, typed text and errors as on-screen strings
// ============================================================================

use crate::domain::{DisplayConfig, HistoryTrail};
use crate::numeric::format::{group_digits, plain_string};
use crate::numeric::ArithError;
use bigdecimal::{BigDecimal, RoundingMode};

/// Placeholder used while grouping, swapped for the configured separator
const GROUP_MARK: char = '_';

/// User-facing text for an arithmetic error
pub fn error_message(error: ArithError) -> &'static str {
    match error {
        ArithError::Overflow => "Overflow",
        ArithError::DivideByZero => "Cannot divide by zero",
        ArithError::UndefinedResult => "Result is undefined",
        ArithError::NegativeOperand => "Invalid input",
    }
}

/// Turns engine output into display text using one [`DisplayConfig`].
///
/// Results are rounded half-even to `max_fraction_digits`, stripped of
/// trailing zeros and grouped in threes. Typed text keeps its trailing
/// point and zeros (`"12."`, `"0.50"`) so the user sees what they typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFormatter {
    config: DisplayConfig,
}

impl DisplayFormatter {
    pub fn new(config: DisplayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Display string for a computed value
    pub fn format(&self, value: &BigDecimal) -> String {
        let rounded = value
            .with_scale_round(i64::from(self.config.max_fraction_digits), RoundingMode::HalfEven)
            .normalized();
        self.localize(&plain_string(&rounded))
    }

    /// Display string for the number being typed
    pub fn format_entry(&self, text: &str) -> String {
        if text.is_empty() {
            return "0".to_string();
        }
        self.localize(text)
    }

    /// History line with every number formatted for display
    pub fn history_line(&self, history: &HistoryTrail) -> String {
        history.render_with(|value| self.format(value)).join(" ")
    }

    fn localize(&self, plain: &str) -> String {
        group_digits(plain, GROUP_MARK)
            .chars()
            .map(|c| match c {
                '.' => self.config.decimal_separator,
                GROUP_MARK => self.config.group_separator,
                other => other,
            })
            .collect()
    }
}

impl Default for DisplayFormatter {
    fn default() -> Self {
        Self::new(DisplayConfig::default())
    }
}
