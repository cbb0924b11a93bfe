//! 3×3 Gaussian smoothing applied before gradient computation.
//!
//! Borders use reflect-101 indexing (`-1 → 1`, `w → w-2`), so flat regions
//! stay flat right up to the image frame.
use crate::image::{ImageF32, ImageView, ImageViewMut};

/// Normalised 3-tap Gaussian `[1, 2, 1] / 4`, applied along rows then columns.
const GAUSSIAN_3TAP: [f32; 3] = [0.25, 0.5, 0.25];

#[inline]
fn reflect_101(i: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let last = len as isize - 1;
    let mut i = i;
    // taps are short, so at most one reflection per side is needed
    if i < 0 {
        i = -i;
    }
    if i > last {
        i = 2 * last - i;
    }
    i.clamp(0, last) as usize
}

/// 3×3 Gaussian smoothing used ahead of saliency and edge detection.
pub fn gaussian_blur_3x3(src: &ImageF32) -> ImageF32 {
    let (w, h) = src.dims();
    let taps = &GAUSSIAN_3TAP;
    let radius = (taps.len() / 2) as isize;
    let mut horiz = ImageF32::new(w, h);
    let mut out = ImageF32::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }

    for y in 0..h {
        let src_row = src.row(y);
        let dst_row = horiz.row_mut(y);
        for (x, dst) in dst_row.iter_mut().enumerate() {
            let mut acc = 0.0;
            for (k, &tap) in taps.iter().enumerate() {
                let sx = reflect_101(x as isize + k as isize - radius, w);
                acc += src_row[sx] * tap;
            }
            *dst = acc;
        }
    }

    for y in 0..h {
        let dst_row = out.row_mut(y);
        for (k, &tap) in taps.iter().enumerate() {
            let sy = reflect_101(y as isize + k as isize - radius, h);
            let src_row = horiz.row(sy);
            for (dst, &s) in dst_row.iter_mut().zip(src_row) {
                *dst += s * tap;
            }
        }
    }
    out
}
