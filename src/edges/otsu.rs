//! Otsu threshold estimation over an 8-bit histogram.
//!
//! The threshold maximizes the between-class variance of the two classes
//! `[0, t]` and `(t, 255]`. When a region mask is supplied, only pixels inside
//! it contribute to the histogram; an absent or empty mask means the whole
//! image.
use crate::image::{ImageU8, ImageView, Mask};

/// 256-bin intensity histogram, optionally restricted to `region`.
pub fn histogram(gray: &ImageU8<'_>, region: Option<&Mask>) -> [u64; 256] {
    let region = region.filter(|m| m.any());
    let mut hist = [0u64; 256];
    for (y, row) in gray.rows().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            if region.map_or(true, |m| m.get(x, y)) {
                hist[v as usize] += 1;
            }
        }
    }
    hist
}

/// Threshold maximizing the between-class variance of `hist`.
///
/// The first maximum wins on ties. A histogram with fewer than two distinct
/// occupied bins yields 0.
pub fn otsu_threshold(hist: &[u64; 256]) -> u8 {
    let total: u64 = hist.iter().sum();
    if total == 0 {
        return 0;
    }
    let total_f = total as f64;
    let sum_all: f64 = hist
        .iter()
        .enumerate()
        .map(|(i, &c)| i as f64 * c as f64)
        .sum();

    let mut best_t = 0u8;
    let mut best_var = 0.0f64;
    let mut weight_bg = 0.0f64;
    let mut sum_bg = 0.0f64;
    for (t, &count) in hist.iter().enumerate() {
        weight_bg += count as f64;
        if weight_bg == 0.0 {
            continue;
        }
        let weight_fg = total_f - weight_bg;
        if weight_fg == 0.0 {
            break;
        }
        sum_bg += t as f64 * count as f64;
        let mean_bg = sum_bg / weight_bg;
        let mean_fg = (sum_all - sum_bg) / weight_fg;
        let diff = mean_bg - mean_fg;
        let var = weight_bg * weight_fg * diff * diff;
        if var > best_var {
            best_var = var;
            best_t = t as u8;
        }
    }
    best_t
}
