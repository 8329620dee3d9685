// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod event_handler;
mod number_entry;

pub use event_handler::{CalcEvent, EventHandler, LoggingEventHandler, NoOpEventHandler};
pub use number_entry::NumberEntry;
