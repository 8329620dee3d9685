// ============================================================================
// Engine Module
// Contains the sequencing state machine
// ============================================================================

mod operands;
mod sequencer;
mod state;

pub mod factory;

pub use factory::{create_from_config, SequencerBuilder};
pub use operands::{memory_operand, percent_operands, unary_focus, Focus, PercentOperands};
pub use sequencer::Sequencer;
pub use state::{EngineState, LastStep};
