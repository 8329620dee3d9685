// ============================================================================
// Calculator Engine Library
// Sequencing state machine for a classic desktop calculator
// ============================================================================

//! # Calculator Engine
//!
//! The calculation-sequencing core of a classic desktop calculator: a stream
//! of key actions goes in, a decimal to display (or a classified error) comes
//! out. Arithmetic is arbitrary-precision; only quotients and roots are
//! rounded, to 16 fractional digits.
//!
//! ## Features
//!
//! - **Chained operations** evaluated strictly left to right
//! - **Repeat-equals**: each further "=" replays the last operator
//! - **Extra operations** (√, x², 1/x) usable mid-expression
//! - **Context-dependent percent** following the classic rule table
//! - **Single memory register** surviving Clear
//! - **Atomic failures**: an error never leaves partial state behind
//! - **Event hooks** for logging and audit
//!
//! ## Example
//!
//! ```rust
//! use calc_engine::prelude::*;
//! use bigdecimal::BigDecimal;
//! use std::sync::Arc;
//!
//! let mut engine = SequencerBuilder::classic()
//!     .build(Arc::new(NoOpEventHandler))
//!     .unwrap();
//!
//! engine.apply(OperationKind::Number(BigDecimal::from(20)), None).unwrap();
//! engine.apply(OperationKind::Binary(BinaryOp::Add), None).unwrap();
//! engine.apply(OperationKind::Number(BigDecimal::from(10)), None).unwrap();
//!
//! // 10% of 20
//! let percent = engine.apply(OperationKind::Percent, None).unwrap();
//! assert_eq!(percent, BigDecimal::from(2));
//! assert_eq!(engine.history().render_line(), "20 + 2");
//!
//! let total = engine.apply(OperationKind::Enter, None).unwrap();
//! assert_eq!(total, BigDecimal::from(22));
//! ```
//!
//! The [`dispatch::Calculator`] facade adds digit entry and display text on
//! top of the engine:
//!
//! ```rust
//! use calc_engine::prelude::*;
//! use std::sync::Arc;
//!
//! let mut calc: Calculator =
//!     Calculator::from_config(EngineConfig::invariant(), Arc::new(NoOpEventHandler)).unwrap();
//! calc.press(Key::Digit(9));
//! let screen = calc.press(Key::Action(OperationKind::Extra(ExtraOp::Sqrt)));
//!
//! assert_eq!(screen.display, "3");
//! assert_eq!(screen.history, "sqrt( 9 )");
//! ```

pub mod dispatch;
pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::dispatch::{Calculator, DigitBuffer, DisplayFormatter, Key, Screen};
    pub use crate::domain::{
        ActionTag, BinaryOp, DisplayConfig, EngineConfig, ExtraOp, HistoryToken, HistoryTrail,
        MemoryOp, MemoryRegister, OperationKind, SessionId,
    };
    pub use crate::engine::{create_from_config, EngineState, Sequencer, SequencerBuilder};
    pub use crate::interfaces::{
        CalcEvent, EventHandler, LoggingEventHandler, NoOpEventHandler, NumberEntry,
    };
    pub use crate::numeric::{ArithError, ArithResult, NumericPolicy};
}
