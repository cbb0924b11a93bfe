//! Saliency and direction fields consumed by the selector.
//!
//! Saliency is the Sobel magnitude divided by its maximum over the image, so
//! it lies in [0, 1]; a featureless image yields an all-zero field. Direction
//! is the gradient angle `atan2(gy, gx)` in (−π, π].
use crate::edges::Grad;
use crate::image::ImageF32;

/// Read-only per-pixel fields shared by every selection on one image.
#[derive(Clone, Debug, PartialEq)]
pub struct SaliencyField {
    pub saliency: ImageF32,
    pub direction: ImageF32,
}

impl SaliencyField {
    /// Normalize the gradient magnitude and keep the gradient direction.
    pub fn from_gradients(grad: &Grad) -> Self {
        let max = grad.mag.data.iter().copied().fold(0.0f32, f32::max);
        let saliency = if max > 0.0 {
            grad.mag.map(|m| m / max)
        } else {
            ImageF32::new(grad.mag.w, grad.mag.h)
        };
        Self {
            saliency,
            direction: grad
                .direction
                .map(|a| if a <= -std::f32::consts::PI { std::f32::consts::PI } else { a }),
        }
    }

    pub fn dims(&self) -> (usize, usize) {
        self.saliency.dims()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::sobel_gradients;

    #[test]
    fn saliency_is_normalized_to_unit_max() {
        let img = ImageF32::from_fn(9, 9, |x, y| (x * y) as f32 / 64.0);
        let field = SaliencyField::from_gradients(&sobel_gradients(&img));
        let max = field.saliency.data.iter().copied().fold(0.0f32, f32::max);
        assert!((max - 1.0).abs() < 1e-6);
        assert!(field.saliency.data.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn flat_image_gives_zero_saliency() {
        let field = SaliencyField::from_gradients(&sobel_gradients(&ImageF32::filled(5, 4, 0.7)));
        assert_eq!(field.dims(), (5, 4));
        assert!(field.saliency.data.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn directions_stay_in_half_open_range() {
        let img = ImageF32::from_fn(9, 9, |x, y| ((x as f32) - (y as f32) * 0.5).sin());
        let field = SaliencyField::from_gradients(&sobel_gradients(&img));
        let pi = std::f32::consts::PI;
        assert!(field.direction.data.iter().all(|&a| a > -pi && a <= pi));
    }
}
