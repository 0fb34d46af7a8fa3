use std::fmt;

/// Rejections raised before any animation starts.
#[derive(Debug, Clone, PartialEq)]
pub enum SpinError {
    /// The total duration was non-finite, non-positive, or too short to fit
    /// the fixed pullback and come-to-rest phases.
    InvalidDuration(f64),
    /// Row height or spacing was negative or not finite.
    InvalidRowMetrics { row_height: f64, row_spacing: f64 },
}

impl fmt::Display for SpinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpinError::InvalidDuration(total) => write!(
                f,
                "spin duration {}s leaves no time for the main spin",
                total
            ),
            SpinError::InvalidRowMetrics {
                row_height,
                row_spacing,
            } => write!(
                f,
                "row height {} / spacing {} must be finite and non-negative",
                row_height, row_spacing
            ),
        }
    }
}

impl std::error::Error for SpinError {}
