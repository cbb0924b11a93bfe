//! Double-threshold edge tracking.
//!
//! Pixels whose suppressed magnitude exceeds `high` seed the edge set; pixels
//! above `low` join it when they are 8-connected (directly or through other
//! such pixels) to a seed. Everything else is discarded.
use crate::image::{ImageF32, Mask};

const NEIGHBOURS_8: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Track edges over a non-maximum-suppressed magnitude map.
pub fn hysteresis(suppressed: &ImageF32, low: f32, high: f32) -> Mask {
    let (w, h) = suppressed.dims();
    let mut edges = Mask::new(w, h);
    let mut stack = Vec::new();

    for (i, &m) in suppressed.data.iter().enumerate() {
        if m > high && !edges.data[i] {
            edges.data[i] = true;
            stack.push(i);
            while let Some(idx) = stack.pop() {
                let (x, y) = ((idx % w) as isize, (idx / w) as isize);
                for (dx, dy) in NEIGHBOURS_8 {
                    let (nx, ny) = (x + dx, y + dy);
                    if nx < 0 || ny < 0 || nx >= w as isize || ny >= h as isize {
                        continue;
                    }
                    let n = ny as usize * w + nx as usize;
                    if !edges.data[n] && suppressed.data[n] > low {
                        edges.data[n] = true;
                        stack.push(n);
                    }
                }
            }
        }
    }
    edges
}
