//! The haptic tap track: one upfront batch of delays derived from the same
//! phase durations as the visual animation, so the clicks stay in step with
//! the motion for any total spin length.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::constants::{
    BOUNCEBACK_TAP_COUNT, PULLBACK_TAP_COUNT, SPINNING_TAP_DELAYS, SPINNING_TAP_SHIFT,
    SURPRISE_TAP_DIVISOR,
};
use crate::timing::SpinTiming;

/// One scheduled pulse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tap {
    /// Seconds after spin start, except for the surprise tap, whose delay is
    /// relative to the moment it is scheduled.
    pub delay: f64,
    pub kind: TapKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TapKind {
    Pullback,
    Spinning,
    BounceBack,
    Surprise,
}

/// The 22 spinning intervals followed by the same 22 reversed, so the clatter
/// speeds up and then slows back down symmetrically.
static MIRRORED_SPINNING_DELAYS: Lazy<Vec<f64>> = Lazy::new(|| {
    let mut all = SPINNING_TAP_DELAYS.to_vec();
    all.extend(SPINNING_TAP_DELAYS.iter().rev());
    all
});

/// Build the upfront tap batch for one spin: pullback taps, the mirrored
/// spinning run, and the bounce-back taps after the main spin ends. The one
/// surprise tap is scheduled inline by the choreographer, not here.
pub fn tap_schedule(timing: &SpinTiming) -> Vec<Tap> {
    let mut taps =
        Vec::with_capacity(PULLBACK_TAP_COUNT + MIRRORED_SPINNING_DELAYS.len() + BOUNCEBACK_TAP_COUNT);

    let pullback_spacing = timing.pullback / PULLBACK_TAP_COUNT as f64;
    for n in 0..PULLBACK_TAP_COUNT {
        taps.push(Tap {
            delay: n as f64 * pullback_spacing,
            kind: TapKind::Pullback,
        });
    }

    let mut elapsed = timing.pullback;
    for interval in MIRRORED_SPINNING_DELAYS.iter() {
        elapsed += interval;
        taps.push(Tap {
            delay: elapsed + SPINNING_TAP_SHIFT,
            kind: TapKind::Spinning,
        });
    }

    let bounceback_start = timing.pullback + timing.main_spin;
    for n in 1..=BOUNCEBACK_TAP_COUNT {
        taps.push(Tap {
            delay: bounceback_start + n as f64 * pullback_spacing,
            kind: TapKind::BounceBack,
        });
    }

    taps
}

/// The extra tap fired partway into the surprise settle.
pub fn surprise_tap(timing: &SpinTiming) -> Tap {
    Tap {
        delay: timing.surprise_scroll / SURPRISE_TAP_DIVISOR,
        kind: TapKind::Surprise,
    }
}
