// ============================================================================
// Operand Selection
// Which values an implicit-operand step works on
// ============================================================================

use super::state::{EngineState, LastStep};
use bigdecimal::BigDecimal;
use num_traits::Zero;

/// Where a unary step takes its operand from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Focus {
    /// The number the user just typed
    Typed(BigDecimal),
    /// The value currently on display
    Shown(BigDecimal),
    /// Nothing typed and nothing computed yet
    Empty,
}

/// Operand of extra operations and negate: the typed number, else the
/// displayed value.
pub fn unary_focus(typed: Option<BigDecimal>, shown: Option<&BigDecimal>) -> Focus {
    match (typed, shown) {
        (Some(value), _) => Focus::Typed(value),
        (None, Some(value)) => Focus::Shown(value.clone()),
        (None, None) => Focus::Empty,
    }
}

/// Operand of the memory keys: typed number, then the pending extra
/// result, then the running result, then the last operand, then zero.
pub fn memory_operand(state: &EngineState, typed: Option<&BigDecimal>) -> BigDecimal {
    typed
        .or(state.last_extra_result.as_ref())
        .or(state.operation_result.as_ref())
        .or(state.last_number.as_ref())
        .cloned()
        .unwrap_or_else(BigDecimal::zero)
}

/// The two percent operands. `first` is `None` when no base exists, in which
/// case the percent value is zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PercentOperands {
    pub first: Option<BigDecimal>,
    pub second: Option<BigDecimal>,
}

impl PercentOperands {
    fn new(first: Option<BigDecimal>, second: Option<BigDecimal>) -> Self {
        Self { first, second }
    }
}

/// Pick the percent operands.
///
/// A typed number is always the second operand; its base is the last
/// binary result, else the operand before the open operator. Without a
/// typed number the rules are tried in order:
///
/// 1. a binary result exists: it is the base, the second operand depends on
///    the step before (percent repeats on the last operand, an extra step
///    contributes its result)
/// 2. the step before was negate: previous and last operand
/// 3. a last operand exists: it is the base
/// 4. otherwise both are zero
pub fn percent_operands(state: &EngineState, typed: Option<&BigDecimal>) -> PercentOperands {
    if let Some(number) = typed {
        let first = if state.last_binary_result.is_some() {
            &state.last_binary_result
        } else if state.operand_preceded && state.last_step != LastStep::Number {
            &state.last_number
        } else {
            &state.previous_number
        };
        return PercentOperands::new(first.clone(), Some(number.clone()));
    }

    if let Some(binary) = &state.last_binary_result {
        let second = match state.last_step {
            LastStep::Percent => state.last_number.clone(),
            LastStep::Extra(_) if state.last_extra_result.is_some() => {
                state.last_extra_result.clone()
            },
            _ => Some(binary.clone()),
        };
        return PercentOperands::new(Some(binary.clone()), second);
    }

    if state.last_step == LastStep::Negate {
        return PercentOperands::new(state.previous_number.clone(), state.last_number.clone());
    }

    if let Some(last) = &state.last_number {
        let repeat = state.previous_number.is_some()
            && state.last_step == LastStep::Percent
            && state.operand_preceded;
        let second = if repeat {
            state.previous_number.clone()
        } else {
            state.last_extra_result.clone().or_else(|| Some(last.clone()))
        };
        return PercentOperands::new(Some(last.clone()), second);
    }

    PercentOperands::new(Some(BigDecimal::zero()), Some(BigDecimal::zero()))
}
