//! Sobel image gradients with magnitude and continuous direction.
//!
//! - Convolves the 3×3 Sobel pair (`X` and `Y`) with border clamping.
//! - Outputs per‑pixel `gx`, `gy`, `mag = sqrt(gx^2+gy^2)` and
//!   `direction = atan2(gy, gx)` in (−π, π].
//!
//! Complexity: O(W·H) per pass; memory: four float buffers.
use crate::image::{ImageF32, ImageView, ImageViewMut};

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Per‑pixel gradient buffers.
#[derive(Clone, Debug)]
pub struct Grad {
    /// Horizontal derivative (convolution with kernel X)
    pub gx: ImageF32,
    /// Vertical derivative (convolution with kernel Y)
    pub gy: ImageF32,
    /// Euclidean magnitude per pixel: `sqrt(gx^2 + gy^2)`
    pub mag: ImageF32,
    /// Gradient direction in radians, range (−π, π]
    pub direction: ImageF32,
}

impl Grad {
    /// L1 magnitude `|gx| + |gy|` at (x, y), the norm used for Canny thresholds.
    #[inline]
    pub fn l1(&self, x: usize, y: usize) -> f32 {
        self.gx.get(x, y).abs() + self.gy.get(x, y).abs()
    }
}

fn gradients_with_kernels(l: &ImageF32, kernel_x: &Kernel3, kernel_y: &Kernel3) -> Grad {
    let w = l.w;
    let h = l.h;
    let mut gx = ImageF32::new(w, h);
    let mut gy = ImageF32::new(w, h);
    let mut mag = ImageF32::new(w, h);
    let mut direction = ImageF32::new(w, h);

    if w == 0 || h == 0 {
        return Grad {
            gx,
            gy,
            mag,
            direction,
        };
    }

    for y in 0..h {
        let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        let rows = [l.row(y_idx[0]), l.row(y_idx[1]), l.row(y_idx[2])];
        let out_gx = gx.row_mut(y);
        let out_gy = gy.row_mut(y);
        let out_mag = mag.row_mut(y);
        let out_dir = direction.row_mut(y);
        for x in 0..w {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];

            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            for (ky, yy_row) in rows.iter().enumerate() {
                let kx_row = &kernel_x[ky];
                let ky_row = &kernel_y[ky];
                sum_x += yy_row[x_idx[0]] * kx_row[0]
                    + yy_row[x_idx[1]] * kx_row[1]
                    + yy_row[x_idx[2]] * kx_row[2];
                sum_y += yy_row[x_idx[0]] * ky_row[0]
                    + yy_row[x_idx[1]] * ky_row[1]
                    + yy_row[x_idx[2]] * ky_row[2];
            }

            out_gx[x] = sum_x;
            out_gy[x] = sum_y;
            out_mag[x] = (sum_x * sum_x + sum_y * sum_y).sqrt();
            out_dir[x] = sum_y.atan2(sum_x);
        }
    }

    Grad {
        gx,
        gy,
        mag,
        direction,
    }
}

/// Compute Sobel gradients on a single‑channel float image.
pub fn sobel_gradients(l: &ImageF32) -> Grad {
    gradients_with_kernels(l, &SOBEL_KERNEL_X, &SOBEL_KERNEL_Y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn vertical_step_has_horizontal_gradient() {
        let img = ImageF32::from_fn(8, 8, |x, _| if x < 4 { 0.0 } else { 1.0 });
        let g = sobel_gradients(&img);
        assert!((g.gx.get(4, 4) - 4.0).abs() < 1e-6);
        assert!(g.gy.get(4, 4).abs() < 1e-6);
        assert!(g.direction.get(4, 4).abs() < 1e-6);
        assert_eq!(g.mag.get(0, 4), 0.0);
        assert!((g.l1(3, 4) - 4.0).abs() < 1e-6);
    }

    #[test]
    fn horizontal_step_points_down() {
        let img = ImageF32::from_fn(8, 8, |_, y| if y < 4 { 0.0 } else { 1.0 });
        let g = sobel_gradients(&img);
        assert!((g.direction.get(3, 4) - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn empty_image_yields_empty_buffers() {
        let g = sobel_gradients(&ImageF32::new(0, 0));
        assert!(g.mag.data.is_empty());
        assert!(g.direction.data.is_empty());
    }
}
