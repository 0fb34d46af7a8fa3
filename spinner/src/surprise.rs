use rand::Rng;
use serde::{Deserialize, Serialize};

/// End-of-spin jump variant, one of three equally likely outcomes.
///
/// A jump moves the list exactly one row (height plus spacing) away from the
/// chosen row during deceleration, then the settle snaps it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurpriseOutcome {
    None,
    JumpUp,
    JumpDown,
}

impl SurpriseOutcome {
    /// Uniform pick over the closed set of variants.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match rng.gen_range(0..3) {
            0 => SurpriseOutcome::None,
            1 => SurpriseOutcome::JumpUp,
            _ => SurpriseOutcome::JumpDown,
        }
    }

    /// Pixel offset held between deceleration and the final settle.
    pub fn offset(self, row_height: f64, row_spacing: f64) -> f64 {
        match self {
            SurpriseOutcome::None => 0.0,
            SurpriseOutcome::JumpUp => row_height + row_spacing,
            SurpriseOutcome::JumpDown => -(row_height + row_spacing),
        }
    }
}
