// ============================================================================
// Event Handler Interface
// Defines the contract for observing calculator sessions
// ============================================================================

use crate::domain::{OperationKind, SessionId};
use crate::numeric::ArithError;
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the sequencing engine
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalcEvent {
    /// Action accepted, value to display
    ActionApplied {
        session_id: SessionId,
        action: OperationKind,
        result: BigDecimal,
        timestamp: DateTime<Utc>,
    },

    /// Action failed with a classified error; state was rolled back
    ActionRejected {
        session_id: SessionId,
        action: OperationKind,
        error: ArithError,
        timestamp: DateTime<Utc>,
    },

    /// Clear reset the session (memory survives)
    SessionCleared {
        session_id: SessionId,
        timestamp: DateTime<Utc>,
    },

    /// Memory register changed
    MemoryChanged {
        session_id: SessionId,
        value: Option<BigDecimal>,
        timestamp: DateTime<Utc>,
    },
}

/// Event handler trait for processing engine events
/// Implementations can handle logging, metrics, audit trails, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a calculator event
    fn on_event(&self, event: CalcEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<CalcEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalcEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalcEvent) {
        tracing::debug!("Calculator event: {:?}", event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(CalcEvent::SessionCleared {
            session_id: SessionId::new(),
            timestamp: Utc::now(),
        });
    }

    #[test]
    fn test_logging_handler_batch() {
        let session_id = SessionId::new();
        LoggingEventHandler.on_events(vec![
            CalcEvent::ActionApplied {
                session_id,
                action: OperationKind::Enter,
                result: BigDecimal::from(1),
                timestamp: Utc::now(),
            },
            CalcEvent::ActionRejected {
                session_id,
                action: OperationKind::Enter,
                error: ArithError::DivideByZero,
                timestamp: Utc::now(),
            },
        ]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_event_serializes_to_json() {
        let event = CalcEvent::MemoryChanged {
            session_id: SessionId::new(),
            value: Some(BigDecimal::from(7)),
            timestamp: Utc::now(),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: CalcEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
