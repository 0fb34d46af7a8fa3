use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SPIN_DURATION;
use crate::error::SpinError;

/// Immutable settings for one spin invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpinConfig {
    /// Whole spin length in seconds, pullback through final settle.
    pub duration: f64,
    /// Height of one list row, in pixels.
    pub row_height: f64,
    /// Gap between adjacent rows, in pixels.
    pub row_spacing: f64,
    /// Whether to roll a random last-moment jump before settling.
    pub add_random_surprises: bool,
    /// Whether to schedule the haptic tap track alongside the animation.
    pub use_haptics: bool,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_SPIN_DURATION,
            row_height: 44.0,
            row_spacing: 8.0,
            add_random_surprises: true,
            use_haptics: true,
        }
    }
}

impl SpinConfig {
    /// Check the row metrics; the duration is validated when the phase
    /// timing is derived.
    pub fn validate(&self) -> Result<(), SpinError> {
        let sane = |v: f64| v.is_finite() && v >= 0.0;
        if !sane(self.row_height) || !sane(self.row_spacing) {
            return Err(SpinError::InvalidRowMetrics {
                row_height: self.row_height,
                row_spacing: self.row_spacing,
            });
        }
        Ok(())
    }
}
