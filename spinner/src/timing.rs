use crate::constants::{
    DECELERATION_TIME, END_SURPRISE_DELAY_TIME, END_SURPRISE_SCROLL_TIME, PULLBACK_TIME,
};
use crate::error::SpinError;

/// Duration of every phase of one spin, derived once from the total duration.
///
/// Only the main spin stretches or shrinks with the total; the pullback and
/// the come-to-rest phases are fixed so the spin always ends with the same
/// feel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinTiming {
    pub total: f64,
    pub pullback: f64,
    pub main_spin: f64,
    pub deceleration: f64,
    pub surprise_delay: f64,
    pub surprise_scroll: f64,
}

impl SpinTiming {
    /// Derive the phase durations, rejecting totals that would leave the main
    /// spin with zero or negative time.
    pub fn from_total(total: f64) -> Result<Self, SpinError> {
        if !total.is_finite() || total <= 0.0 {
            return Err(SpinError::InvalidDuration(total));
        }

        let come_to_rest = DECELERATION_TIME + END_SURPRISE_DELAY_TIME + END_SURPRISE_SCROLL_TIME;
        let main_spin = total - PULLBACK_TIME - come_to_rest;
        if main_spin <= 0.0 {
            return Err(SpinError::InvalidDuration(total));
        }

        Ok(Self {
            total,
            pullback: PULLBACK_TIME,
            main_spin,
            deceleration: DECELERATION_TIME,
            surprise_delay: END_SURPRISE_DELAY_TIME,
            surprise_scroll: END_SURPRISE_SCROLL_TIME,
        })
    }

    /// Time spent settling after the main spin ends.
    pub fn come_to_rest(&self) -> f64 {
        self.deceleration + self.surprise_delay + self.surprise_scroll
    }
}
