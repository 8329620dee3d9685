// ============================================================================
// Engine State
// Everything the sequencing engine carries from one action to the next
// ============================================================================

use crate::domain::{BinaryOp, ExtraOp};
use bigdecimal::BigDecimal;
use num_traits::Zero;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The previous step as the state machine classifies it.
///
/// `Settled` covers a fresh session and the moment right after "=": both
/// behave identically for every later branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LastStep {
    #[default]
    Settled,
    Number,
    Binary(BinaryOp),
    Extra(ExtraOp),
    Negate,
    Percent,
    Memory,
}

impl LastStep {
    pub fn is_binary(&self) -> bool {
        matches!(self, LastStep::Binary(_))
    }

    pub fn is_extra(&self) -> bool {
        matches!(self, LastStep::Extra(_))
    }

    pub fn is_number_or_negate(&self) -> bool {
        matches!(self, LastStep::Number | LastStep::Negate)
    }
}

/// Carried-over state of one calculator session.
///
/// Owned exclusively by the [`Sequencer`](super::Sequencer) and reset by
/// Clear. Every field is read by at least one transition; most transitions
/// read several of them together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineState {
    /// Most recently established operand
    pub last_number: Option<BigDecimal>,

    /// Operand preceding `last_number`
    pub previous_number: Option<BigDecimal>,

    /// Result of the last completed binary step
    pub last_binary_result: Option<BigDecimal>,

    /// Result of the latest extra operation, consumed by the next binary or "="
    pub last_extra_result: Option<BigDecimal>,

    /// Running left operand for the next evaluation
    pub operation_result: Option<BigDecimal>,

    /// Last number the user actually typed
    pub last_inputted_number: Option<BigDecimal>,

    /// Operator awaiting its right operand
    pub pending_binary_op: Option<BinaryOp>,

    pub last_step: LastStep,

    /// A binary operator was already open before the current step
    pub operand_preceded: bool,

    /// "=" was the previous evaluation; the next "=" replays it
    pub repeat_equals_armed: bool,

    /// "=" already evaluated the pending operator at least once
    pub enter_repeated_since_pending: bool,
}

impl EngineState {
    /// Establish a new operand, shifting the current one into
    /// `previous_number`.
    pub fn push_number(&mut self, value: Option<BigDecimal>) {
        self.previous_number = std::mem::replace(&mut self.last_number, value);
    }

    /// Hand a pending extra result over to `last_number`.
    pub fn fold_extra_result(&mut self) {
        if let Some(extra) = self.last_extra_result.take() {
            self.last_number = Some(extra);
        }
    }

    /// Route a pending extra result and the last binary result into the
    /// operand slots read by the next evaluation.
    pub fn prime_operands(&mut self) {
        if let Some(extra) = &self.last_extra_result {
            if !self.last_step.is_number_or_negate() {
                self.last_number = Some(extra.clone());
            } else if self.last_binary_result.is_some() || self.last_step == LastStep::Number {
                self.operation_result = Some(extra.clone());
            }
        }
        if let Some(result) = &self.last_binary_result {
            self.operation_result = Some(result.clone());
        }
    }

    /// Left operand of the next evaluation: the running result, else the
    /// operand before the last one, else the last one itself.
    pub fn left_operand(&self) -> BigDecimal {
        self.operation_result
            .as_ref()
            .or(self.previous_number.as_ref())
            .or(self.last_number.as_ref())
            .cloned()
            .unwrap_or_else(BigDecimal::zero)
    }

    /// Right operand of the next evaluation
    pub fn right_operand(&self) -> BigDecimal {
        self.last_number.clone().unwrap_or_else(BigDecimal::zero)
    }
}
