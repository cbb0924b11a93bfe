//! Canny edge mask: Sobel gradients, non-maximum suppression and hysteresis.
//!
//! Thresholds are expressed in 8-bit intensity units (as for a 0..255 image),
//! while the input is a float image in [0, 1]; the comparison scales the
//! thresholds accordingly.
use super::grad::Grad;
use super::hysteresis::hysteresis;
use super::nms::non_max_suppression;
use super::otsu::{histogram, otsu_threshold};
use crate::image::{ImageU8, Mask};
use serde::{Deserialize, Serialize};

/// Low/high hysteresis thresholds on the L1 Sobel magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CannyThresholds {
    pub low: f32,
    pub high: f32,
}

impl Default for CannyThresholds {
    fn default() -> Self {
        Self {
            low: 50.0,
            high: 150.0,
        }
    }
}

impl CannyThresholds {
    pub fn new(low: f32, high: f32) -> Self {
        Self { low, high }
    }

    /// Returns `(low, high)` with `low <= high`.
    pub fn ordered(&self) -> (f32, f32) {
        if self.low <= self.high {
            (self.low, self.high)
        } else {
            (self.high, self.low)
        }
    }
}

/// Binary edge mask from precomputed gradients of a [0, 1] image.
pub fn canny_from_gradients(grad: &Grad, thresholds: CannyThresholds) -> Mask {
    let (low, high) = thresholds.ordered();
    let suppressed = non_max_suppression(grad);
    hysteresis(&suppressed, low / 255.0, high / 255.0)
}

/// Derive thresholds from the image histogram: `high` is the Otsu threshold
/// (restricted to `region` when it has any set pixel), `low = floor(high / 2)`.
pub fn auto_thresholds(gray: &ImageU8<'_>, region: Option<&Mask>) -> CannyThresholds {
    let high = otsu_threshold(&histogram(gray, region)) as f32;
    CannyThresholds {
        low: (0.5 * high).floor(),
        high,
    }
}
