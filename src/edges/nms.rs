//! Non‑maximum suppression on gradient magnitude with direction alignment.
//!
//! For each pixel the L1 magnitude `|gx| + |gy|` is compared with its two
//! neighbours along the quantized gradient direction (0°, 45°, 90°, 135°).
//! A pixel survives when it is strictly greater than the "previous"
//! neighbour and not smaller than the "next" one; the asymmetry keeps exactly
//! one pixel across a two-pixel-wide plateau.
//!
//! The outermost 1‑pixel frame is always suppressed to avoid out‑of‑bounds
//! checks in neighbour lookup.
use crate::edges::grad::Grad;
use crate::image::{ImageF32, ImageView, ImageViewMut};

const TAN_22_5_DEG: f32 = 0.41421356237;

/// Returns the L1 magnitude of surviving pixels, 0 elsewhere.
pub fn non_max_suppression(grad: &Grad) -> ImageF32 {
    let w = grad.gx.w;
    let h = grad.gx.h;
    let mut out = ImageF32::new(w, h);
    if w < 3 || h < 3 {
        return out;
    }

    let l1 = ImageF32::from_fn(w, h, |x, y| grad.l1(x, y));
    for y in 1..h - 1 {
        let mag_prev = l1.row(y - 1);
        let mag_row = l1.row(y);
        let mag_next = l1.row(y + 1);
        let gx_row = grad.gx.row(y);
        let gy_row = grad.gy.row(y);
        let out_row = out.row_mut(y);

        for x in 1..w - 1 {
            let mag = mag_row[x];
            if mag <= 0.0 {
                continue;
            }

            let gx = gx_row[x];
            let gy = gy_row[x];
            let abs_gx = gx.abs();
            let abs_gy = gy.abs();
            let same_sign = (gx >= 0.0 && gy >= 0.0) || (gx <= 0.0 && gy <= 0.0);

            let (before, after) = if abs_gy <= abs_gx * TAN_22_5_DEG {
                (mag_row[x - 1], mag_row[x + 1])
            } else if abs_gx <= abs_gy * TAN_22_5_DEG {
                (mag_prev[x], mag_next[x])
            } else if same_sign {
                (mag_prev[x - 1], mag_next[x + 1])
            } else {
                (mag_prev[x + 1], mag_next[x - 1])
            };

            if mag <= before || mag < after {
                continue;
            }
            out_row[x] = mag;
        }
    }

    out
}
