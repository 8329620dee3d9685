// ============================================================================
// Sequencer Factory
// Creates sequencing engines from configuration
// ============================================================================

use crate::domain::config::{DisplayConfig, EngineConfig};
use crate::engine::Sequencer;
use crate::interfaces::EventHandler;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a sequencing engine from configuration
///
/// # Arguments
/// * `config` - Engine configuration
/// * `event_handler` - Handler for session events
///
/// # Returns
/// * `Result<Sequencer, String>` - Configured engine or validation error
///
/// # Example
/// ```
/// use calc_engine::prelude::*;
/// use calc_engine::engine::factory::create_from_config;
/// use std::sync::Arc;
///
/// let engine = create_from_config(EngineConfig::classic(), Arc::new(NoOpEventHandler)).unwrap();
/// assert!(engine.history().is_empty());
/// ```
pub fn create_from_config(
    config: EngineConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<Sequencer, String> {
    config.validate()?;
    Ok(Sequencer::new(config.policy(), event_handler))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for sequencing engines with a fluent API
///
/// # Example
/// ```
/// use calc_engine::prelude::*;
/// use calc_engine::engine::factory::SequencerBuilder;
/// use std::sync::Arc;
///
/// let engine = SequencerBuilder::new()
///     .with_exponent_bound(100)
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
/// assert_eq!(engine.policy().exponent_bound(), 100);
/// ```
pub struct SequencerBuilder {
    config: EngineConfig,
}

impl SequencerBuilder {
    /// Start from the classic configuration
    pub fn new() -> Self {
        Self {
            config: EngineConfig::classic(),
        }
    }

    /// Magnitude exponent at which results overflow
    pub fn with_exponent_bound(mut self, bound: u32) -> Self {
        self.config.exponent_bound = bound;
        self
    }

    pub fn with_display(mut self, display: DisplayConfig) -> Self {
        self.config.display = display;
        self
    }

    // ========================================================================
    // Presets
    // ========================================================================

    /// Classic preset (`1 234,5`)
    pub fn classic() -> Self {
        Self {
            config: EngineConfig::classic(),
        }
    }

    /// Invariant preset (`1,234.5`)
    pub fn invariant() -> Self {
        Self {
            config: EngineConfig::invariant(),
        }
    }

    /// Build the engine
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Result<Sequencer, String> {
        create_from_config(self.config, event_handler)
    }

    /// Get the current configuration (for inspection)
    pub fn get_config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Default for SequencerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
