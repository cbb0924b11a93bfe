//! Sketch rendering: thicken the selected pixels into strokes.
//!
//! The selection is rasterized to 0/255, dilated once with a 3×3 square and
//! smoothed with a 3×3 median. Dilation only looks at in-bounds neighbours;
//! the median replicates the border. Rows are processed in parallel when the
//! `parallel` feature is enabled.
use crate::image::{Mask, PixelGrid};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub const INK: u8 = 255;

fn for_each_row(out: &mut PixelGrid<u8>, row_fn: impl Fn(usize, &mut [u8]) + Sync) {
    let w = out.w;
    if w == 0 {
        return;
    }
    #[cfg(feature = "parallel")]
    out.data
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, row)| row_fn(y, row));
    #[cfg(not(feature = "parallel"))]
    out.data
        .chunks_mut(w)
        .enumerate()
        .for_each(|(y, row)| row_fn(y, row));
}

/// 3×3 max filter over an 8-bit raster.
pub fn dilate_3x3(src: &PixelGrid<u8>) -> PixelGrid<u8> {
    let (w, h) = src.dims();
    let mut out = PixelGrid::new(w, h);
    for_each_row(&mut out, |y, row| {
        let ys = y.saturating_sub(1)..=(y + 1).min(h - 1);
        for (x, dst) in row.iter_mut().enumerate() {
            let xs = x.saturating_sub(1)..=(x + 1).min(w - 1);
            *dst = ys
                .clone()
                .flat_map(|sy| xs.clone().map(move |sx| (sx, sy)))
                .map(|(sx, sy)| src.get(sx, sy))
                .max()
                .unwrap_or(0);
        }
    });
    out
}

/// 3×3 median filter with replicated border.
pub fn median_3x3(src: &PixelGrid<u8>) -> PixelGrid<u8> {
    let (w, h) = src.dims();
    let mut out = PixelGrid::new(w, h);
    for_each_row(&mut out, |y, row| {
        let rows = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        for (x, dst) in row.iter_mut().enumerate() {
            let cols = [x.saturating_sub(1), x, (x + 1).min(w - 1)];
            let mut window = [0u8; 9];
            for (i, &sy) in rows.iter().enumerate() {
                for (j, &sx) in cols.iter().enumerate() {
                    window[i * 3 + j] = src.get(sx, sy);
                }
            }
            window.sort_unstable();
            *dst = window[4];
        }
    });
    out
}

/// Turn a selection mask into the final sketch raster (strokes = 255).
pub fn render_sketch(selection: &Mask) -> PixelGrid<u8> {
    median_3x3(&dilate_3x3(&selection.to_u8()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_pixel_dilates_to_square_then_survives_median() {
        let mask = Mask::from_fn(7, 7, |x, y| x == 3 && y == 3);
        let dilated = dilate_3x3(&mask.to_u8());
        assert_eq!(dilated.data.iter().filter(|&&v| v == INK).count(), 9);

        let sketch = render_sketch(&mask);
        // 3×3 block: the centre and edge-midpoints keep a majority, corners do not.
        assert_eq!(sketch.get(3, 3), INK);
        assert_eq!(sketch.get(3, 2), INK);
        assert_eq!(sketch.get(2, 2), 0);
        assert_eq!(sketch.get(0, 0), 0);
    }

    #[test]
    fn line_becomes_three_pixels_thick() {
        let mask = Mask::from_fn(9, 9, |_, y| y == 4);
        let sketch = render_sketch(&mask);
        for x in 0..9 {
            let column: Vec<u8> = (0..9).map(|y| sketch.get(x, y)).collect();
            assert_eq!(column, vec![0, 0, 0, INK, INK, INK, 0, 0, 0], "column {x}");
        }
    }

    #[test]
    fn median_removes_isolated_speck() {
        let mut raster = PixelGrid::<u8>::new(5, 5);
        raster.set(2, 2, INK);
        assert!(median_3x3(&raster).data.iter().all(|&v| v == 0));
    }

    #[test]
    fn empty_selection_renders_blank() {
        let sketch = render_sketch(&Mask::new(4, 3));
        assert_eq!(sketch.dims(), (4, 3));
        assert!(sketch.data.iter().all(|&v| v == 0));
    }
}
