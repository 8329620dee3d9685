// ============================================================================
// History Trail
// Ordered tokens of the on-screen expression
// ============================================================================

use super::operation::{BinaryOp, ExtraOp};
use crate::numeric::format::plain_string;
use bigdecimal::BigDecimal;
use num_traits::Zero;
use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One rendered element of the expression trail
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HistoryToken {
    Number(BigDecimal),
    Binary(BinaryOp),
    Extra(ExtraOp),
    Negate,
    Percent,
}

impl HistoryToken {
    /// Tokens layered on top of the number beneath them
    pub fn is_wrapper(&self) -> bool {
        matches!(
            self,
            HistoryToken::Extra(_) | HistoryToken::Negate | HistoryToken::Percent
        )
    }
}

/// The expression trail, in display order.
///
/// At most one unresolved binary operator exists and it is always the tail;
/// pressing an operator twice replaces it instead of appending.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HistoryTrail {
    tokens: SmallVec<[HistoryToken; 8]>,
}

impl HistoryTrail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tokens(&self) -> &[HistoryToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    pub fn append(&mut self, token: HistoryToken) {
        self.tokens.push(token);
    }

    pub fn append_number(&mut self, value: BigDecimal) {
        self.append(HistoryToken::Number(value));
    }

    /// True when the tail is an unresolved binary operator
    pub fn ends_with_operator(&self) -> bool {
        matches!(self.tokens.last(), Some(HistoryToken::Binary(_)))
    }

    pub fn contains_extra_operation(&self) -> bool {
        self.tokens
            .iter()
            .any(|t| matches!(t, HistoryToken::Extra(_)))
    }

    /// True when any extra, negate or percent token is present
    pub fn contains_wrapper(&self) -> bool {
        self.tokens.iter().any(HistoryToken::is_wrapper)
    }

    // ========================================================================
    // Rewrites
    // ========================================================================

    /// Replace the most recent number, or append when the tail is a pending
    /// operator (or there is no number yet).
    pub fn replace_last_number(&mut self, value: BigDecimal) {
        if !self.ends_with_operator() {
            if let Some(slot) = self
                .tokens
                .iter_mut()
                .rev()
                .find(|t| matches!(t, HistoryToken::Number(_)))
            {
                *slot = HistoryToken::Number(value);
                return;
            }
        }
        self.append_number(value);
    }

    /// Swap the pending operator in place, or append a new one
    pub fn replace_or_append_pending_operator(&mut self, op: BinaryOp) {
        if let Some(last) = self.tokens.last_mut() {
            if matches!(last, HistoryToken::Binary(_)) {
                *last = HistoryToken::Binary(op);
                return;
            }
        }
        self.append(HistoryToken::Binary(op));
    }

    /// Strip trailing wrapper tokens and the number beneath them.
    ///
    /// Leaves the trail untouched (and returns false) when its tail is not a
    /// number-bearing run.
    pub fn truncate_trailing_extras_and_number(&mut self) -> bool {
        let mut end = self.tokens.len();
        while end > 0 && self.tokens[end - 1].is_wrapper() {
            end -= 1;
        }
        match end.checked_sub(1).map(|i| &self.tokens[i]) {
            Some(HistoryToken::Number(_)) => {
                self.tokens.truncate(end - 1);
                true
            },
            _ => false,
        }
    }

    /// Drop a bare trailing number
    pub fn pop_trailing_number(&mut self) -> bool {
        if matches!(self.tokens.last(), Some(HistoryToken::Number(_))) {
            self.tokens.pop();
            true
        } else {
            false
        }
    }

    /// Put `value` at the head of the trail, replacing a leading number
    pub fn replace_leading_number(&mut self, value: BigDecimal) {
        if let Some(first) = self.tokens.first_mut() {
            if matches!(first, HistoryToken::Number(_)) {
                *first = HistoryToken::Number(value);
                return;
            }
        }
        self.append_number(value);
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Display strings with numbers in plain normalized form
    pub fn render(&self) -> Vec<String> {
        self.render_with(|value| plain_string(&value.normalized()))
    }

    /// Display strings with a caller-supplied number format.
    ///
    /// Wrapper tokens fold into the operand before them (`sqrt( sqrt( 16 ) )`);
    /// percent tokens contribute no text of their own.
    pub fn render_with<F>(&self, format_number: F) -> Vec<String>
    where
        F: Fn(&BigDecimal) -> String,
    {
        let mut out = Vec::with_capacity(self.tokens.len());
        let mut operand: Option<String> = None;

        for token in &self.tokens {
            match token {
                HistoryToken::Number(value) => {
                    out.extend(operand.take());
                    operand = Some(format_number(value));
                },
                HistoryToken::Extra(op) => {
                    operand = Some(wrap(op.label(), operand.take(), &format_number));
                },
                HistoryToken::Negate => {
                    operand = Some(wrap("negate", operand.take(), &format_number));
                },
                HistoryToken::Percent => {},
                HistoryToken::Binary(op) => {
                    out.extend(operand.take());
                    out.push(op.glyph().to_string());
                },
            }
        }
        out.extend(operand);
        out
    }

    /// Rendered tokens joined by single spaces
    pub fn render_line(&self) -> String {
        self.render().join(" ")
    }
}

fn wrap<F>(label: &str, inner: Option<String>, format_number: &F) -> String
where
    F: Fn(&BigDecimal) -> String,
{
    let inner = inner.unwrap_or_else(|| format_number(&BigDecimal::zero()));
    format!("{}( {} )", label, inner)
}
