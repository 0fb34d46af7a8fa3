//! Fixed numbers behind the spin choreography.

/// Default length of a whole spin, in seconds.
pub const DEFAULT_SPIN_DURATION: f64 = 4.4;

/// Backwards pull before the list races forward.
pub const PULLBACK_TIME: f64 = 0.5;

/// Long deceleration onto the chosen row.
pub const DECELERATION_TIME: f64 = 1.0;

/// Pause between coming to rest and the end-of-spin surprise jump.
pub const END_SURPRISE_DELAY_TIME: f64 = 0.25;

/// The surprise jump itself.
pub const END_SURPRISE_SCROLL_TIME: f64 = 0.25;

/// Extra scroll distance past the chosen row during the main spin, in pixels.
/// Removing it again during deceleration sells the "kept spinning past the
/// winner" illusion.
pub const OVERSHOOT_PX: f64 = 300.0;

/// Taps fired while the list is being pulled back, evenly spaced.
pub const PULLBACK_TAP_COUNT: usize = 3;

/// Taps fired while the overshoot bounces back, evenly spaced.
pub const BOUNCEBACK_TAP_COUNT: usize = 4;

/// The first spinning tap fires a touch early so it lands on the visual
/// kick-off rather than just after it.
pub const SPINNING_TAP_SHIFT: f64 = -0.02;

/// The inline surprise tap fires this fraction of the way into the settle.
pub const SURPRISE_TAP_DIVISOR: f64 = 2.5;

/// Every scheduled tap fires at full strength.
pub const TAP_INTENSITY: f64 = 1.0;

/// Intervals between consecutive spinning taps: a slow first click, then a
/// quick steady clatter. The schedule builder mirrors this table end-to-end
/// so the rhythm accelerates and then decelerates with the wheel.
pub const SPINNING_TAP_DELAYS: [f64; 22] = [
    0.2, 0.12, 0.07, 0.025, 0.0125, 0.011, 0.01, 0.01, 0.01, 0.01, 0.01, 0.01, 0.01, 0.01, 0.01,
    0.01, 0.01, 0.01, 0.01, 0.01, 0.01, 0.01,
];
