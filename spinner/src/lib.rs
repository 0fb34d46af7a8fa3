//! Roulette-style spin choreography for a scrollable list.
//!
//! One spin pulls the list back, races it past the chosen row, decelerates
//! onto it and (optionally) adds a last-moment jump to a neighboring row
//! before settling, with a haptic tap schedule derived from the same phase
//! durations so the clicks track the visual motion.
//!
//! The crate is headless: [`SpinChoreographer`] is a state machine that emits
//! [`Effect`]s and consumes [`SpinEvent`]s, and a host (see the `frontend`
//! crate) plays the effects against a real scroll surface and pulse device.

pub mod choreographer;
pub mod config;
pub mod constants;
pub mod easing;
pub mod error;
pub mod host;
pub mod surprise;
pub mod taps;
pub mod timing;

pub use choreographer::{Effect, Phase, SpinChoreographer, SpinEvent};
pub use config::SpinConfig;
pub use error::SpinError;
pub use host::{HapticEngine, ScrollSurface, ViewMetrics};
pub use surprise::SurpriseOutcome;
pub use taps::{Tap, TapKind};
pub use timing::SpinTiming;
