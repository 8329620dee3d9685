// ============================================================================
// Sequencer
// The calculator state machine: one action in, one displayable value out
// ============================================================================

use super::operands::{memory_operand, percent_operands, unary_focus, Focus};
use super::state::{EngineState, LastStep};
use crate::domain::{
    ActionTag, BinaryOp, ExtraOp, HistoryToken, HistoryTrail, MemoryOp, MemoryRegister,
    OperationKind, SessionId,
};
use crate::interfaces::{CalcEvent, EventHandler};
use crate::numeric::{ArithResult, NumericPolicy};
use bigdecimal::BigDecimal;
use chrono::Utc;
use num_traits::Zero;
use std::sync::Arc;

/// Everything an action may touch, captured before it runs
struct Checkpoint {
    state: EngineState,
    history: HistoryTrail,
    memory: MemoryRegister,
    response: Option<BigDecimal>,
}

/// Sequencing engine for one calculator session.
///
/// Interprets each [`OperationKind`] against the carried-over state and
/// returns the value to display. A failing action leaves state, history
/// and memory exactly as they were before it; the typed number it consumed
/// is discarded.
///
/// # Example
/// ```
/// use bigdecimal::BigDecimal;
/// use calc_engine::prelude::*;
/// use std::sync::Arc;
///
/// let mut engine = Sequencer::new(NumericPolicy::default(), Arc::new(NoOpEventHandler));
/// engine.apply(OperationKind::Number(BigDecimal::from(2)), None).unwrap();
/// engine.apply(OperationKind::Binary(BinaryOp::Add), None).unwrap();
/// engine.apply(OperationKind::Number(BigDecimal::from(3)), None).unwrap();
///
/// assert_eq!(engine.apply(OperationKind::Enter, None), Ok(BigDecimal::from(5)));
/// assert_eq!(engine.apply(OperationKind::Enter, None), Ok(BigDecimal::from(8)));
/// ```
pub struct Sequencer {
    session_id: SessionId,
    policy: NumericPolicy,
    state: EngineState,
    history: HistoryTrail,
    memory: MemoryRegister,

    /// Typed number not yet consumed by an operation
    pending_input: Option<BigDecimal>,

    /// Value currently on display
    response: Option<BigDecimal>,

    last_accepted: Option<ActionTag>,
    event_handler: Arc<dyn EventHandler>,
}

impl Sequencer {
    /// Create a fresh session
    pub fn new(policy: NumericPolicy, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            session_id: SessionId::new(),
            policy,
            state: EngineState::default(),
            history: HistoryTrail::new(),
            memory: MemoryRegister::new(),
            pending_input: None,
            response: None,
            last_accepted: None,
            event_handler,
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn policy(&self) -> &NumericPolicy {
        &self.policy
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn history(&self) -> &HistoryTrail {
        &self.history
    }

    /// History as display strings, numbers in plain form
    pub fn render_history(&self) -> Vec<String> {
        self.history.render()
    }

    /// Stored memory value, if any
    pub fn memory(&self) -> Option<&BigDecimal> {
        self.memory.recall()
    }

    pub fn pending_input(&self) -> Option<&BigDecimal> {
        self.pending_input.as_ref()
    }

    /// Value currently on display, `None` on a fresh or cleared session
    pub fn response(&self) -> Option<&BigDecimal> {
        self.response.as_ref()
    }

    /// Tag of the last action that completed without error
    pub fn last_accepted(&self) -> Option<ActionTag> {
        self.last_accepted
    }

    /// Whether backspace may edit the number being typed.
    ///
    /// Never right after an operator, an extra operation or "=": the value
    /// shown then is a result, not an entry.
    pub fn backspace_allowed(&self, typing: bool) -> bool {
        let after_result = matches!(
            self.last_accepted,
            Some(ActionTag::Binary | ActionTag::Extra | ActionTag::Enter)
        );
        !after_result && (typing || self.pending_input.is_some())
    }

    // ========================================================================
    // Entry Point
    // ========================================================================

    /// Apply one action and return the value to display.
    ///
    /// `typed` is the number completed by the entry buffer, if any; it is
    /// accepted as if a [`OperationKind::Number`] preceded `action`.
    pub fn apply(
        &mut self,
        action: OperationKind,
        typed: Option<BigDecimal>,
    ) -> ArithResult<BigDecimal> {
        let checkpoint = self.checkpoint();
        if let Some(number) = typed {
            self.accept_number(number);
        }

        let mut events = Vec::new();
        let outcome = self
            .dispatch(&action, &mut events)
            .and_then(|value| self.policy.check_overflow(value));

        match outcome {
            Ok(result) => {
                tracing::debug!(?action, %result, "action applied");
                self.last_accepted = Some(action.tag());
                events.push(CalcEvent::ActionApplied {
                    session_id: self.session_id,
                    action,
                    result: result.clone(),
                    timestamp: Utc::now(),
                });
                self.event_handler.on_events(events);
                Ok(result)
            },
            Err(error) => {
                self.restore(checkpoint);
                self.pending_input = None;
                tracing::warn!(?action, %error, "action rejected, state rolled back");
                self.event_handler.on_event(CalcEvent::ActionRejected {
                    session_id: self.session_id,
                    action,
                    error,
                    timestamp: Utc::now(),
                });
                Err(error)
            },
        }
    }

    /// Prepare for a new typed number; call when the first digit arrives.
    ///
    /// Directly after an extra, percent or negate step the wrapped operand
    /// shown in history is abandoned: its tokens are removed and the operand
    /// it replaced comes back.
    pub fn begin_entry(&mut self) {
        if self.pending_input.is_some() {
            return;
        }

        let rewritable = matches!(
            self.last_accepted,
            Some(ActionTag::Extra | ActionTag::Percent | ActionTag::Negate)
        );
        if rewritable {
            let wrapped_tail = self
                .history
                .tokens()
                .last()
                .is_some_and(HistoryToken::is_wrapper);
            if wrapped_tail && self.history.truncate_trailing_extras_and_number() {
                self.state.last_number = self.state.previous_number.take();
            }
            self.state.last_extra_result = None;
        }
        self.last_accepted = Some(ActionTag::Number);
    }

    fn accept_number(&mut self, number: BigDecimal) {
        self.begin_entry();
        self.pending_input = Some(number);
    }

    fn dispatch(
        &mut self,
        action: &OperationKind,
        events: &mut Vec<CalcEvent>,
    ) -> ArithResult<BigDecimal> {
        match action {
            OperationKind::Number(number) => {
                self.accept_number(number.clone());
                Ok(number.clone())
            },
            OperationKind::Binary(op) => {
                let typed = self.pending_input.take();
                let result = self.process_binary(*op, typed)?;
                Ok(self.show(result))
            },
            OperationKind::Percent => {
                let typed = self.pending_input.take();
                let result = self.process_percent(typed)?;
                Ok(self.show(result))
            },
            OperationKind::Negate => {
                let result = self.process_negate();
                Ok(self.show(result))
            },
            OperationKind::Extra(op) => {
                let typed = self.pending_input.take();
                let result = self.process_extra(*op, typed)?;
                Ok(self.show(result))
            },
            OperationKind::Enter => {
                let typed = self.pending_input.take();
                let result = self.process_enter(typed)?;
                Ok(self.show(result))
            },
            OperationKind::Memory(op) => {
                let typed = self.pending_input.take();
                let result = self.process_memory(*op, typed, events);
                Ok(self.show(result))
            },
            OperationKind::Clear => Ok(self.process_clear(events)),
            OperationKind::ClearEntered => {
                self.process_clear_entered();
                Ok(self.show(BigDecimal::zero()))
            },
            OperationKind::Backspace => Ok(self
                .pending_input
                .as_ref()
                .or(self.response.as_ref())
                .cloned()
                .unwrap_or_else(BigDecimal::zero)),
        }
    }

    fn show(&mut self, value: BigDecimal) -> BigDecimal {
        self.response = Some(value.clone());
        value
    }

    // ========================================================================
    // Binary Operators
    // ========================================================================

    fn process_binary(
        &mut self,
        op: BinaryOp,
        typed: Option<BigDecimal>,
    ) -> ArithResult<BigDecimal> {
        let mut result = self.response.clone();

        if let Some(number) = typed {
            self.commit_number(number.clone());
            self.state.last_inputted_number = Some(number.clone());
            result = Some(number);
            if self.state.repeat_equals_armed {
                self.state.last_binary_result = None;
            }
            if !self.state.operand_preceded {
                self.state.previous_number = None;
            }
        } else if let Some(shown) = self.response.clone() {
            if !self.history.contains_extra_operation() {
                self.rebind_last_number(shown);
            }
        } else {
            self.seed_zero();
            result = Some(BigDecimal::zero());
        }

        self.open_operator(op)?;

        if let Some(running) = &self.state.operation_result {
            result = Some(running.clone());
        }
        self.state.repeat_equals_armed = false;
        self.state.fold_extra_result();
        Ok(result.unwrap_or_else(BigDecimal::zero))
    }

    /// Record `op` as the pending operator, evaluating the previous one when
    /// an operand was entered for it.
    fn open_operator(&mut self, op: BinaryOp) -> ArithResult<()> {
        self.state.prime_operands();
        self.state.enter_repeated_since_pending = false;

        if self.state.last_step.is_binary() {
            self.history.replace_or_append_pending_operator(op);
        } else {
            self.history.append(HistoryToken::Binary(op));
            if self.state.operand_preceded {
                self.evaluate_pending()?;
            } else {
                self.state.operation_result = None;
            }
        }

        self.state.last_step = LastStep::Binary(op);
        self.state.operand_preceded = true;
        self.state.pending_binary_op = Some(op);
        Ok(())
    }

    fn evaluate_pending(&mut self) -> ArithResult<()> {
        let Some(op) = self.state.pending_binary_op else {
            return Ok(());
        };
        let left = self.state.left_operand();
        let right = self.state.right_operand();
        let value = op.apply(&self.policy, &left, &right)?;
        tracing::trace!(%left, op = op.glyph(), %right, %value, "evaluated");
        self.state.last_binary_result = Some(value.clone());
        self.state.operation_result = Some(value);
        Ok(())
    }

    /// Re-point the last operand at the displayed value when an operator
    /// follows a result rather than a typed number.
    fn rebind_last_number(&mut self, shown: BigDecimal) {
        self.state.last_number = Some(shown.clone());
        let after_negate = self.state.last_step == LastStep::Negate;
        if self.state.repeat_equals_armed && !after_negate {
            self.history.append_number(shown);
        } else if !self.state.repeat_equals_armed && after_negate {
            self.history.replace_last_number(shown);
        }
    }

    // ========================================================================
    // Unary Operators
    // ========================================================================

    fn process_extra(
        &mut self,
        op: ExtraOp,
        typed: Option<BigDecimal>,
    ) -> ArithResult<BigDecimal> {
        let operand = match unary_focus(typed, self.response.as_ref()) {
            Focus::Typed(number) => {
                self.state.last_inputted_number = Some(number.clone());
                self.commit_number(number.clone());
                number
            },
            Focus::Shown(shown) => {
                if self.shown_value_starts_operand() {
                    self.commit_number(shown.clone());
                    self.state.last_binary_result = None;
                }
                shown
            },
            Focus::Empty => {
                self.seed_zero();
                BigDecimal::zero()
            },
        };

        self.history.append(HistoryToken::Extra(op));
        self.state.last_step = LastStep::Extra(op);

        let value = op.apply(&self.policy, &operand)?;
        self.state.last_extra_result = Some(value.clone());
        Ok(value)
    }

    /// A displayed result becomes a new history operand right after an
    /// operator, or after "=" unless it is already wrapped.
    fn shown_value_starts_operand(&self) -> bool {
        match self.state.last_step {
            LastStep::Binary(_) => true,
            LastStep::Extra(_) | LastStep::Negate => false,
            _ => self.state.repeat_equals_armed,
        }
    }

    fn process_negate(&mut self) -> BigDecimal {
        match self.pending_input.take() {
            // A number still being typed flips in place
            Some(typed) if !typed.is_zero() => {
                let flipped = self.policy.negate(&typed);
                self.pending_input = Some(flipped.clone());
                return flipped;
            },
            // A typed zero has no sign to flip; it becomes the wrapped operand
            Some(zero) => {
                self.state.last_inputted_number = Some(zero.clone());
                self.commit_number(zero);
            },
            None => {},
        }

        let operand = if self.state.last_step.is_number_or_negate() {
            self.state.right_operand()
        } else {
            let shown = match self.response.clone() {
                Some(shown) => {
                    if matches!(self.state.last_step, LastStep::Binary(_) | LastStep::Settled) {
                        self.commit_number(shown.clone());
                    }
                    shown
                },
                None => {
                    self.commit_number(BigDecimal::zero());
                    BigDecimal::zero()
                },
            };
            self.state.last_binary_result = None;
            shown
        };

        let value = self.policy.negate(&operand);
        if self.state.last_extra_result.is_some() {
            self.state.last_extra_result = Some(value.clone());
        }
        self.history.append(HistoryToken::Negate);
        self.state.last_step = LastStep::Negate;
        self.state.last_number = Some(value.clone());
        value
    }

    fn process_percent(&mut self, typed: Option<BigDecimal>) -> ArithResult<BigDecimal> {
        if let Some(number) = &typed {
            self.state.last_inputted_number = Some(number.clone());
        }

        let operands = percent_operands(&self.state, typed.as_ref());
        let value = match (&operands.first, &operands.second) {
            (Some(first), Some(second)) => self.policy.percent(first, second)?,
            _ => BigDecimal::zero(),
        };

        if value.is_zero() {
            if self.state.last_step.is_binary() || self.state.last_step.is_extra() {
                self.record_number(BigDecimal::zero());
                self.state.push_number(typed);
                self.state.last_binary_result = None;
            } else {
                self.seed_zero();
            }
            return Ok(BigDecimal::zero());
        }

        if self.state.previous_number.is_none() {
            self.state.previous_number = self.state.last_number.clone();
        } else if typed.is_some() {
            self.state.previous_number = self.state.last_binary_result.clone();
        }
        self.discard_wrapped_operand();

        self.history.append_number(value.clone());
        self.history.append(HistoryToken::Percent);
        self.state.last_number = Some(value.clone());
        self.state.repeat_equals_armed = false;
        self.state.last_step = LastStep::Percent;
        Ok(value)
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    fn process_enter(&mut self, typed: Option<BigDecimal>) -> ArithResult<BigDecimal> {
        let mut result = self.response.clone();

        if let Some(number) = typed {
            self.state.last_binary_result = None;
            self.state.push_number(Some(number.clone()));
            self.state.last_inputted_number = Some(number.clone());
            self.state.last_step = LastStep::Number;
            result = Some(number);
        } else {
            let step = self.state.last_step;
            if step == LastStep::Percent {
                self.state.last_binary_result = self.state.previous_number.clone();
            }
            if step.is_extra() && self.state.repeat_equals_armed {
                // replay the last operator against the extra result
                self.state.last_binary_result = self.state.last_extra_result.take();
                if let Some(previous) = &self.state.previous_number {
                    self.state.last_number = Some(previous.clone());
                }
            }
            let open_operand = step.is_binary() || step == LastStep::Memory;
            if !self.state.repeat_equals_armed && open_operand {
                if let Some(binary) = self.state.last_binary_result.clone() {
                    self.state.push_number(Some(binary));
                }
            }
        }

        self.state.prime_operands();
        if self.state.operand_preceded || self.state.enter_repeated_since_pending {
            self.evaluate_pending()?;
            self.state.enter_repeated_since_pending = true;
            self.state.operand_preceded = false;
        } else {
            self.state.operation_result = None;
        }
        if let Some(running) = &self.state.operation_result {
            result = Some(running.clone());
        }

        self.state.previous_number = None;
        self.state.repeat_equals_armed = true;
        self.state.fold_extra_result();
        self.state.last_step = LastStep::Settled;
        self.history.clear();
        Ok(result.unwrap_or_else(BigDecimal::zero))
    }

    // ========================================================================
    // Memory
    // ========================================================================

    fn process_memory(
        &mut self,
        op: MemoryOp,
        typed: Option<BigDecimal>,
        events: &mut Vec<CalcEvent>,
    ) -> BigDecimal {
        if let Some(number) = &typed {
            self.state.last_inputted_number = Some(number.clone());
        }
        let operand = memory_operand(&self.state, typed.as_ref());

        let result = match op {
            MemoryOp::Store => {
                self.memory.store(operand.clone());
                operand
            },
            MemoryOp::Recall => self.memory.recall().cloned().unwrap_or(operand),
            MemoryOp::Add => {
                self.memory.add(&operand);
                operand
            },
            MemoryOp::Subtract => {
                self.memory.subtract(&operand);
                operand
            },
            MemoryOp::Clear => {
                self.memory.clear();
                typed
                    .as_ref()
                    .or(self.response.as_ref())
                    .cloned()
                    .unwrap_or_else(BigDecimal::zero)
            },
        };

        if op != MemoryOp::Recall {
            events.push(CalcEvent::MemoryChanged {
                session_id: self.session_id,
                value: self.memory.recall().cloned(),
                timestamp: Utc::now(),
            });
        }

        // The shown value becomes the operand of the next operator
        self.pending_input = match op {
            MemoryOp::Store | MemoryOp::Clear => typed,
            MemoryOp::Recall | MemoryOp::Add | MemoryOp::Subtract => Some(result.clone()),
        };
        self.state.last_step = LastStep::Memory;
        result
    }

    // ========================================================================
    // Clearing
    // ========================================================================

    /// Reset everything except memory
    fn process_clear(&mut self, events: &mut Vec<CalcEvent>) -> BigDecimal {
        self.state = EngineState::default();
        self.history.clear();
        self.pending_input = None;
        self.response = None;

        tracing::debug!(session_id = %self.session_id.as_uuid(), "session cleared");
        events.push(CalcEvent::SessionCleared {
            session_id: self.session_id,
            timestamp: Utc::now(),
        });
        BigDecimal::zero()
    }

    /// Drop the current entry and the last operand's history tokens
    fn process_clear_entered(&mut self) {
        self.pending_input = None;
        self.state.last_inputted_number = None;

        let discarded = self.discard_wrapped_operand();
        if !discarded && self.state.last_step == LastStep::Number {
            self.history.pop_trailing_number();
        }
        if !self.state.repeat_equals_armed {
            self.state.last_extra_result = self
                .state
                .operation_result
                .clone()
                .or_else(|| self.state.previous_number.clone());
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn record_number(&mut self, value: BigDecimal) {
        self.history.append_number(value);
        self.state.last_step = LastStep::Number;
    }

    fn commit_number(&mut self, value: BigDecimal) {
        self.record_number(value.clone());
        self.state.push_number(Some(value));
    }

    /// Start from an implicit zero operand
    fn seed_zero(&mut self) {
        self.history.replace_leading_number(BigDecimal::zero());
        self.state.last_number = Some(BigDecimal::zero());
        self.state.operand_preceded = false;
    }

    /// Remove a wrapped trailing operand from history along with the
    /// operand values it produced.
    fn discard_wrapped_operand(&mut self) -> bool {
        if !self.history.contains_wrapper() || !self.history.truncate_trailing_extras_and_number() {
            return false;
        }
        self.state.last_number = None;
        self.state.last_extra_result = None;
        true
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            state: self.state.clone(),
            history: self.history.clone(),
            memory: self.memory.clone(),
            response: self.response.clone(),
        }
    }

    fn restore(&mut self, checkpoint: Checkpoint) {
        self.state = checkpoint.state;
        self.history = checkpoint.history;
        self.memory = checkpoint.memory;
        self.response = checkpoint.response;
    }
}
