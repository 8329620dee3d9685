// ============================================================================
// Memory Register
// Single stored value behind the MS/MR/M+/M-/MC keys
// ============================================================================

use bigdecimal::BigDecimal;
use num_traits::Zero;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One optional stored decimal.
///
/// Add and subtract on an empty register treat it as zero, so the first M+
/// or M- initializes memory. Sums are exact; memory keys never report errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MemoryRegister {
    value: Option<BigDecimal>,
}

impl MemoryRegister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&mut self, value: BigDecimal) {
        self.value = Some(value);
    }

    pub fn recall(&self) -> Option<&BigDecimal> {
        self.value.as_ref()
    }

    pub fn add(&mut self, value: &BigDecimal) {
        let current = self.value.take().unwrap_or_else(BigDecimal::zero);
        self.value = Some(current + value);
    }

    pub fn subtract(&mut self, value: &BigDecimal) {
        let current = self.value.take().unwrap_or_else(BigDecimal::zero);
        self.value = Some(current - value);
    }

    pub fn clear(&mut self) {
        self.value = None;
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}
