//! Owned single-channel grid in row-major layout (stride == width).
//!
//! `PixelGrid<T>` backs every per-pixel field of the sketch pipeline:
//! intensities and saliency (`f32`), gradient directions (`f32` radians) and
//! boolean masks (edge mask, constraint masks, selection).

/// Dense `w × h` grid of `T` values.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelGrid<T> {
    /// Grid width in pixels
    pub w: usize,
    /// Grid height in pixels
    pub h: usize,
    /// Number of elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<T>,
}

/// Float image used for intensities, saliency and directions.
pub type ImageF32 = PixelGrid<f32>;

/// Boolean mask; `true` marks a pixel as set.
pub type Mask = PixelGrid<bool>;

impl<T: Copy + Default> PixelGrid<T> {
    /// Construct a default-initialized grid of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self::filled(w, h, T::default())
    }
}

impl<T: Copy> PixelGrid<T> {
    /// Construct a grid of size `w × h` with every element set to `value`.
    pub fn filled(w: usize, h: usize, value: T) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![value; w * h],
        }
    }

    /// Wrap row-major `data`; returns `None` when the length is not `w * h`.
    pub fn from_vec(w: usize, h: usize, data: Vec<T>) -> Option<Self> {
        (data.len() == w * h).then_some(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    /// Build a grid by evaluating `f(x, y)` in raster order.
    pub fn from_fn(w: usize, h: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                data.push(f(x, y));
            }
        }
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }
    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[self.idx(x, y)]
    }
    #[inline]
    /// Set the pixel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: T) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// `(width, height)` of the grid.
    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.w, self.h)
    }

    #[inline]
    pub fn same_dims<U>(&self, other: &PixelGrid<U>) -> bool {
        self.w == other.w && self.h == other.h
    }

    /// Apply `f` to every element, producing a grid of the same shape.
    pub fn map<U: Copy>(&self, mut f: impl FnMut(T) -> U) -> PixelGrid<U> {
        PixelGrid {
            w: self.w,
            h: self.h,
            stride: self.w,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }
}

impl Mask {
    /// Number of set pixels.
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    pub fn any(&self) -> bool {
        self.data.iter().any(|&v| v)
    }

    /// Element-wise AND. Both masks must share dimensions.
    pub fn and(&self, other: &Mask) -> Mask {
        debug_assert!(self.same_dims(other));
        PixelGrid {
            w: self.w,
            h: self.h,
            stride: self.w,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| a && b)
                .collect(),
        }
    }

    /// True when every set pixel of `self` is also set in `other`.
    pub fn is_subset_of(&self, other: &Mask) -> bool {
        self.same_dims(other)
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(&a, &b)| !a || b)
    }

    /// Render as an 8-bit raster (set = 255).
    pub fn to_u8(&self) -> PixelGrid<u8> {
        self.map(|v| if v { 255 } else { 0 })
    }
}

impl<T: Copy> crate::image::traits::ImageView for PixelGrid<T> {
    type Pixel = T;

    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[T] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

impl<T: Copy> crate::image::traits::ImageViewMut for PixelGrid<T> {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [T] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageView;

    #[test]
    fn from_fn_fills_in_raster_order() {
        let g = PixelGrid::from_fn(3, 2, |x, y| (y * 3 + x) as u32);
        assert_eq!(g.data, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(g.get(2, 1), 5);
        assert_eq!(g.row(1), &[3, 4, 5]);
    }

    #[test]
    fn from_vec_rejects_wrong_length() {
        assert!(PixelGrid::from_vec(2, 2, vec![0u8; 3]).is_none());
        assert!(PixelGrid::from_vec(2, 2, vec![0u8; 4]).is_some());
    }

    #[test]
    fn mask_and_count_and_subset() {
        let a = Mask::from_fn(4, 4, |x, _| x < 2);
        let b = Mask::from_fn(4, 4, |_, y| y < 2);
        let both = a.and(&b);
        assert_eq!(both.count(), 4);
        assert!(both.is_subset_of(&a));
        assert!(both.is_subset_of(&b));
        assert!(!a.is_subset_of(&b));
        assert!(!Mask::new(4, 4).any());
    }
}
