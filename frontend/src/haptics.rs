use spinner::HapticEngine;
use web_sys::window;

/// Pulse device backed by the Vibration API.
///
/// `prepare` is a no-op here: the web API needs no priming call, but the
/// trait keeps the fire-then-prepare contract so native hosts can re-arm a
/// real impact generator for low latency.
pub struct VibrationHaptics {
    pulse_ms: u32,
}

impl VibrationHaptics {
    pub fn new() -> Self {
        Self { pulse_ms: 10 }
    }
}

impl Default for VibrationHaptics {
    fn default() -> Self {
        Self::new()
    }
}

impl HapticEngine for VibrationHaptics {
    fn prepare(&mut self) {}

    fn fire(&mut self, intensity: f64) {
        let duration = (self.pulse_ms as f64 * intensity.clamp(0.0, 1.0)).round() as u32;
        if duration == 0 {
            return;
        }
        if let Some(window) = window() {
            // Returns false when the page is not allowed to vibrate; the tap
            // is simply lost, matching a device without a haptic engine.
            let _ = window.navigator().vibrate_with_duration(duration);
        }
    }
}
