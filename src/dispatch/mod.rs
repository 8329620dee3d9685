// ============================================================================
// Dispatch Module
// Keypad boundary: number entry, display text, error overlay
// ============================================================================

mod calculator;
mod display;
mod entry;

pub use calculator::{Calculator, Key, Screen};
pub use display::{error_message, DisplayFormatter};
pub use entry::{DigitBuffer, DEFAULT_MAX_DIGITS};
