//! The capabilities a host has to supply: a scroll surface to move and a
//! pulse device to click. Real implementations live with the host (the
//! `frontend` crate binds these to the DOM and the Vibration API); tests use
//! recording fakes.

/// Readable geometry of the scroll surface, captured at spin start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewMetrics {
    /// Visible height of the scroll surface, in pixels.
    pub frame_height: f64,
    /// Vertical center of the chosen row within the content, in pixels.
    pub target_center_y: f64,
}

impl ViewMetrics {
    /// Content offset that centers the chosen row in the surface.
    pub fn resting_offset(&self) -> f64 {
        self.target_center_y - self.frame_height / 2.0
    }
}

/// A scrollable view the choreography mutates over time.
pub trait ScrollSurface {
    /// Snap the vertical content offset. Hosts animating an offset change
    /// call this once per frame with tweened values.
    fn set_content_offset(&mut self, y: f64);

    /// Extra scrollable room above the content, in pixels.
    fn set_top_inset(&mut self, inset: f64);

    /// Matching inset for the scroll indicator, where the platform has one.
    fn set_indicator_inset(&mut self, inset: f64);
}

/// A haptic pulse device with the usual prime-before-fire contract.
pub trait HapticEngine {
    /// Prime the device so the next pulse fires with low latency. Called once
    /// at acquisition and again after every pulse.
    fn prepare(&mut self);

    /// Fire one pulse, intensity in 0.0..=1.0.
    fn fire(&mut self, intensity: f64);
}
