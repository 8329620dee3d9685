// ============================================================================
// Number Entry Interface
// Contract for the collaborator that accumulates typed digits
// ============================================================================

use bigdecimal::BigDecimal;

/// Digit accumulation for the number being typed.
///
/// The sequencing engine never touches raw digits: the dispatch boundary
/// hands it the completed number and asks the entry for a clean slate when
/// a new number must start.
pub trait NumberEntry {
    /// Append a digit (0-9); false when the entry is full
    fn push_digit(&mut self, digit: u8) -> bool;

    /// Start the fractional part; false when already present or full
    fn push_decimal_point(&mut self) -> bool;

    /// Remove the last typed character
    fn backspace(&mut self);

    /// Flip the sign of the number in progress
    fn negate(&mut self);

    /// True when the entry holds a non-zero number whose sign can flip
    fn can_negate(&self) -> bool;

    /// True when at least one digit has been typed
    fn has_number(&self) -> bool;

    /// The completed number, if anything was typed
    fn current(&self) -> Option<BigDecimal>;

    /// Raw text of the entry (`"-12."`, `"0.50"`)
    fn text(&self) -> &str;

    /// Forget everything typed so far
    fn start_fresh(&mut self);

    /// Show a recalled value as the entry; the next digit starts over
    fn load(&mut self, value: &BigDecimal);
}
