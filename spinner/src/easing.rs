//! The one easing curve the spin uses, plus a small tween for hosts that
//! drive the content offset frame by frame.

/// Cubic ease-in-out: slow start, fast middle, slow finish.
/// `t` should be in [0, 1].
#[inline]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// One animated content-offset change, sampled per frame by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetTween {
    pub from: f64,
    pub to: f64,
    pub duration: f64,
}

impl OffsetTween {
    pub fn new(from: f64, to: f64, duration: f64) -> Self {
        Self { from, to, duration }
    }

    /// Offset at `elapsed` seconds in; clamps to the endpoint.
    pub fn sample(&self, elapsed: f64) -> f64 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = ease_in_out_cubic(elapsed / self.duration);
        self.from + (self.to - self.from) * t
    }

    pub fn finished(&self, elapsed: f64) -> bool {
        elapsed >= self.duration
    }
}
