// ============================================================================
// Domain Models Module
// Contains the calculator's value types: actions, history, memory, config
// ============================================================================

pub mod config;
pub mod history;
pub mod memory;
pub mod operation;
pub mod session;

pub use config::{DisplayConfig, EngineConfig};
pub use history::{HistoryToken, HistoryTrail};
pub use memory::MemoryRegister;
pub use operation::{ActionTag, BinaryOp, ExtraOp, MemoryOp, OperationKind};
pub use session::SessionId;
