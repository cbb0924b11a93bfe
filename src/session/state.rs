//! Immutable per-revision snapshot of everything derived from one image.
//!
//! The smoothed intensities and the saliency field depend only on the image,
//! so they are computed once and shared between revisions. The edge mask
//! depends on the Canny thresholds; changing them produces a new snapshot
//! with an incremented revision instead of mutating the old one.
use crate::edges::{canny_from_gradients, gaussian_blur_3x3, sobel_gradients, CannyThresholds, Grad};
use crate::image::io::GrayImageU8;
use crate::image::{ImageF32, Mask};
use crate::saliency::SaliencyField;
use log::debug;
use std::sync::Arc;
use std::time::Instant;

/// Image-dependent data shared by all revisions of a session.
#[derive(Debug)]
struct ImageFields {
    gray: GrayImageU8,
    smoothed: ImageF32,
    grad: Grad,
    field: SaliencyField,
}

/// Snapshot consumed by the selector; never mutated after construction.
#[derive(Clone, Debug)]
pub struct SketchState {
    fields: Arc<ImageFields>,
    thresholds: CannyThresholds,
    edges: Mask,
    revision: u64,
}

impl SketchState {
    /// Smooth the image, build the saliency field and detect edges.
    pub fn new(gray: GrayImageU8, thresholds: CannyThresholds) -> Self {
        let start = Instant::now();
        let smoothed = gaussian_blur_3x3(&gray.as_view().to_unit_f32());
        let grad = sobel_gradients(&smoothed);
        let field = SaliencyField::from_gradients(&grad);
        let edges = canny_from_gradients(&grad, thresholds);
        debug!(
            "SketchState::new {}x{} edges={} in {:.3} ms",
            gray.width(),
            gray.height(),
            edges.count(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        Self {
            fields: Arc::new(ImageFields {
                gray,
                smoothed,
                grad,
                field,
            }),
            thresholds,
            edges,
            revision: 0,
        }
    }

    /// New snapshot with edges recomputed for `thresholds`.
    pub fn with_thresholds(&self, thresholds: CannyThresholds) -> Self {
        let edges = canny_from_gradients(&self.fields.grad, thresholds);
        Self {
            fields: Arc::clone(&self.fields),
            thresholds,
            edges,
            revision: self.revision + 1,
        }
    }

    pub fn gray(&self) -> &GrayImageU8 {
        &self.fields.gray
    }

    /// Gaussian-smoothed intensities in [0, 1].
    pub fn smoothed(&self) -> &ImageF32 {
        &self.fields.smoothed
    }

    pub fn saliency_field(&self) -> &SaliencyField {
        &self.fields.field
    }

    pub fn edges(&self) -> &Mask {
        &self.edges
    }

    pub fn thresholds(&self) -> CannyThresholds {
        self.thresholds
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn dims(&self) -> (usize, usize) {
        self.edges.dims()
    }
}
