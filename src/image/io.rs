//! I/O helpers for grayscale images, masks and JSON.
//!
//! - `load_grayscale_image`: read a PNG/JPEG/etc. into an owned 8-bit gray buffer.
//! - `load_mask`: read an image as a boolean mask (nonzero = true).
//! - `save_raster_u8` / `save_mask`: write 8-bit rasters and masks to PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageU8, Mask, PixelGrid};
use image::{GrayImage, ImageBuffer, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned 8-bit grayscale buffer with stride and borrowed view conversion.
#[derive(Clone, Debug, PartialEq)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    stride: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Construct an owned grayscale buffer given raw bytes.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != width * height`.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        assert_eq!(data.len(), width * height, "gray buffer size mismatch");
        let stride = width;
        Self {
            width,
            height,
            stride,
            data,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.stride,
            data: &self.data,
        }
    }
}

/// Load an image from disk and convert to 8-bit grayscale.
pub fn load_grayscale_image(path: &Path) -> Result<GrayImageU8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.into_raw();
    Ok(GrayImageU8::new(width, height, data))
}

/// Load a mask image; any nonzero gray value marks the pixel as set.
pub fn load_mask(path: &Path) -> Result<Mask, String> {
    let gray = load_grayscale_image(path)?;
    Ok(mask_from_gray(&gray))
}

/// Threshold an 8-bit buffer at zero (nonzero = true).
pub fn mask_from_gray(gray: &GrayImageU8) -> Mask {
    let view = gray.as_view();
    Mask::from_fn(view.w, view.h, |x, y| view.get(x, y) > 0)
}

/// Save an 8-bit raster to a grayscale PNG.
pub fn save_raster_u8(raster: &PixelGrid<u8>, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let image: GrayImage =
        ImageBuffer::<Luma<u8>, Vec<u8>>::from_raw(raster.w as u32, raster.h as u32, raster.data.clone())
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save a mask as a black/white PNG (set = 255).
pub fn save_mask(mask: &Mask, path: &Path) -> Result<(), String> {
    save_raster_u8(&mask.to_u8(), path)
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
