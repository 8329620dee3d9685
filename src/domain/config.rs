// ============================================================================
// Session Configuration
// Numeric bounds and display conventions for a calculator session
// ============================================================================

use crate::numeric::{NumericPolicy, DEFAULT_EXPONENT_BOUND};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Widest digit count the display settings may ask for
const MAX_DISPLAY_DIGITS: u32 = 32;

// ============================================================================
// Display Configuration
// ============================================================================

/// How the dispatch boundary turns decimals into text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Separator between integer and fractional part
    pub decimal_separator: char,

    /// Separator between groups of three integer digits
    pub group_separator: char,

    /// Fractional digits kept on the display (half-even rounding)
    pub max_fraction_digits: u32,

    /// Longest number the user may type, in digits
    pub max_input_digits: usize,
}

impl DisplayConfig {
    /// Classic desktop layout: `1 234,5`
    pub fn classic() -> Self {
        Self {
            decimal_separator: ',',
            group_separator: ' ',
            max_fraction_digits: 16,
            max_input_digits: 16,
        }
    }

    /// Locale-neutral layout: `1,234.5`
    pub fn invariant() -> Self {
        Self {
            decimal_separator: '.',
            group_separator: ',',
            max_fraction_digits: 16,
            max_input_digits: 16,
        }
    }

    /// Builder method: Set the decimal and group separators
    pub fn with_separators(mut self, decimal: char, group: char) -> Self {
        self.decimal_separator = decimal;
        self.group_separator = group;
        self
    }

    /// Validate the display settings
    pub fn validate(&self) -> Result<(), String> {
        if self.decimal_separator == self.group_separator {
            return Err("Decimal and group separators must differ".to_string());
        }

        if self.decimal_separator.is_ascii_digit() || self.group_separator.is_ascii_digit() {
            return Err("Separators cannot be digits".to_string());
        }

        if self.max_fraction_digits > MAX_DISPLAY_DIGITS {
            return Err(format!(
                "Fraction digits cannot exceed {}",
                MAX_DISPLAY_DIGITS
            ));
        }

        if self.max_input_digits == 0 || self.max_input_digits > MAX_DISPLAY_DIGITS as usize {
            return Err(format!(
                "Input digits must be between 1 and {}",
                MAX_DISPLAY_DIGITS
            ));
        }

        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::classic()
    }
}

// ============================================================================
// Engine Configuration
// ============================================================================

/// Complete configuration for one calculator session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineConfig {
    /// Magnitude exponent at which results count as overflowed
    pub exponent_bound: u32,

    /// Display conventions for the dispatch boundary
    pub display: DisplayConfig,
}

impl EngineConfig {
    /// Create a configuration with the given overflow bound
    pub fn new(exponent_bound: u32) -> Self {
        Self {
            exponent_bound,
            display: DisplayConfig::default(),
        }
    }

    /// Builder method: Set the overflow exponent bound
    pub fn with_exponent_bound(mut self, bound: u32) -> Self {
        self.exponent_bound = bound;
        self
    }

    /// Builder method: Set display conventions
    pub fn with_display(mut self, display: DisplayConfig) -> Self {
        self.display = display;
        self
    }

    /// Numeric policy described by this configuration
    pub fn policy(&self) -> NumericPolicy {
        NumericPolicy::new(self.exponent_bound)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.exponent_bound == 0 {
            return Err("Exponent bound must be positive".to_string());
        }

        self.display.validate()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl EngineConfig {
    /// Classic desktop calculator
    /// - Overflow at exponent ±10000
    /// - `1 234,5` display
    pub fn classic() -> Self {
        Self::new(DEFAULT_EXPONENT_BOUND)
    }

    /// Same bounds with `1,234.5` display
    pub fn invariant() -> Self {
        Self::new(DEFAULT_EXPONENT_BOUND).with_display(DisplayConfig::invariant())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::classic()
    }
}
