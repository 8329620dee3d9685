// ============================================================================
// Operation Domain Model
// Calculator actions and their operator enums
// ============================================================================

use crate::numeric::{ArithResult, NumericPolicy};
use bigdecimal::BigDecimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Operators
// ============================================================================

/// Binary operator keys (`+ - × ÷`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    /// Glyph shown in the history trail
    pub fn glyph(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "×",
            BinaryOp::Divide => "÷",
        }
    }

    pub fn apply(
        &self,
        policy: &NumericPolicy,
        a: &BigDecimal,
        b: &BigDecimal,
    ) -> ArithResult<BigDecimal> {
        match self {
            BinaryOp::Add => policy.add(a, b),
            BinaryOp::Subtract => policy.subtract(a, b),
            BinaryOp::Multiply => policy.multiply(a, b),
            BinaryOp::Divide => policy.divide(a, b),
        }
    }
}

/// Unary "extra" operators, usable mid-expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExtraOp {
    Sqrt,
    Square,
    Reciprocal,
}

impl ExtraOp {
    /// Function name used when wrapping the operand in the history trail
    pub fn label(&self) -> &'static str {
        match self {
            ExtraOp::Sqrt => "sqrt",
            ExtraOp::Square => "sqr",
            ExtraOp::Reciprocal => "1/",
        }
    }

    pub fn apply(&self, policy: &NumericPolicy, a: &BigDecimal) -> ArithResult<BigDecimal> {
        match self {
            ExtraOp::Sqrt => policy.sqrt(a),
            ExtraOp::Square => policy.square(a),
            ExtraOp::Reciprocal => policy.reciprocal(a),
        }
    }
}

/// Memory keys (MS, MR, M+, M-, MC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MemoryOp {
    Store,
    Recall,
    Add,
    Subtract,
    Clear,
}

// ============================================================================
// Actions
// ============================================================================

/// One user action as seen by the sequencing engine.
///
/// Operators carry only their tag; operands are supplied by the engine from
/// its own state or from the freshly typed number.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OperationKind {
    /// A completed typed number
    Number(BigDecimal),
    Binary(BinaryOp),
    Percent,
    Negate,
    Extra(ExtraOp),
    /// The "=" key
    Enter,
    Memory(MemoryOp),
    Clear,
    ClearEntered,
    Backspace,
}

impl OperationKind {
    /// Payload-free classification of this action
    pub fn tag(&self) -> ActionTag {
        match self {
            OperationKind::Number(_) => ActionTag::Number,
            OperationKind::Binary(_) => ActionTag::Binary,
            OperationKind::Percent => ActionTag::Percent,
            OperationKind::Negate => ActionTag::Negate,
            OperationKind::Extra(_) => ActionTag::Extra,
            OperationKind::Enter => ActionTag::Enter,
            OperationKind::Memory(_) => ActionTag::Memory,
            OperationKind::Clear => ActionTag::Clear,
            OperationKind::ClearEntered => ActionTag::ClearEntered,
            OperationKind::Backspace => ActionTag::Backspace,
        }
    }
}

/// Action classification without payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ActionTag {
    Number,
    Binary,
    Percent,
    Negate,
    Extra,
    Enter,
    Memory,
    Clear,
    ClearEntered,
    Backspace,
}

impl ActionTag {
    /// Actions that wipe a transient error overlay
    pub fn is_clearing(&self) -> bool {
        matches!(
            self,
            ActionTag::Clear | ActionTag::ClearEntered | ActionTag::Backspace
        )
    }
}
