//! Edge processing: smoothing, image gradients, and the Canny edge mask.
//!
//! These are the upstream collaborators of the selector:
//!
//! - 3×3 Gaussian smoothing applied once to the input intensities.
//! - Sobel gradients returning `gx`, `gy`, magnitude, and direction.
//! - Canny-style edge mask (NMS + hysteresis) with thresholds in 8-bit units.
//! - Otsu-based automatic threshold selection, optionally region-restricted.
//!
//! Borders are handled by clamping (gradients) or reflection (blur); NMS
//! ignores the outermost 1-pixel frame.

pub mod blur;
pub mod canny;
pub mod grad;
pub mod hysteresis;
pub mod nms;
pub mod otsu;

pub use blur::gaussian_blur_3x3;
pub use canny::{auto_thresholds, canny_from_gradients, CannyThresholds};
pub use grad::{sobel_gradients, Grad};
