//! End-to-end sketch pipeline on top of a [`SketchState`] snapshot.
//!
//! - [`autotune`]: re-derive Canny thresholds from the image histogram
//!   (optionally inside a region) and return the updated snapshot.
//! - [`run_sketch`]: select edge pixels under the budget and render strokes.
use crate::diagnostics::{InputDescriptor, SelectionReport, SketchReport, TimingBreakdown};
use crate::edges::auto_thresholds;
use crate::image::{Mask, PixelGrid};
use crate::render::render_sketch;
use crate::select::{select, SelectError, SelectInput, SelectParams, Selection};
use crate::session::SketchState;
use log::info;

/// Optional user constraints for one run.
#[derive(Clone, Copy, Debug, Default)]
pub struct SketchMasks<'a> {
    /// Restricts the search space.
    pub region: Option<&'a Mask>,
    /// Pixels that must appear in the sketch when they are eligible edges.
    pub keep: Option<&'a Mask>,
}

/// Result of [`run_sketch`].
#[derive(Clone, Debug)]
pub struct SketchOutput {
    pub selection: Selection,
    /// Rendered strokes (255) on a black background (0).
    pub sketch: PixelGrid<u8>,
    pub timings: TimingBreakdown,
}

impl SketchOutput {
    pub fn report(
        &self,
        state: &SketchState,
        masks: SketchMasks<'_>,
        params: &SelectParams,
    ) -> SketchReport {
        let (width, height) = state.dims();
        SketchReport {
            input: InputDescriptor {
                width,
                height,
                revision: state.revision(),
                has_region_mask: masks.region.is_some(),
                has_keep_mask: masks.keep.is_some(),
            },
            thresholds: state.thresholds(),
            params: *params,
            edge_count: state.edges().count(),
            selection: SelectionReport::from(&self.selection),
            timings: self.timings.clone(),
        }
    }
}

/// Snapshot with thresholds re-derived by Otsu over `region` (or the whole
/// image when the region is absent or empty).
pub fn autotune(state: &SketchState, region: Option<&Mask>) -> Result<SketchState, SelectError> {
    let expected = state.dims();
    if let Some(region) = region {
        if region.dims() != expected {
            return Err(SelectError::DimensionMismatch {
                name: "region mask",
                expected,
                found: region.dims(),
            });
        }
    }
    let thresholds = auto_thresholds(&state.gray().as_view(), region);
    info!(
        "autotune: low={} high={} (region={})",
        thresholds.low,
        thresholds.high,
        region.is_some()
    );
    Ok(state.with_thresholds(thresholds))
}

/// Select edge pixels from `state` and render them into a sketch.
pub fn run_sketch(
    state: &SketchState,
    masks: SketchMasks<'_>,
    params: &SelectParams,
) -> Result<SketchOutput, SelectError> {
    let field = state.saliency_field();
    let input = SelectInput::new(state.edges(), &field.saliency, &field.direction)
        .with_region(masks.region)
        .with_keep(masks.keep);

    let mut timings = TimingBreakdown::default();
    let selection = timings.measure("select", || select(&input, params))?;
    let sketch = timings.measure("render", || render_sketch(&selection.mask));

    info!(
        "sketch: selected {}/{} eligible pixels (budget {}, forced {}) in {:.3} ms",
        selection.selected,
        selection.eligible,
        selection.budget,
        selection.forced,
        timings.total_ms
    );

    Ok(SketchOutput {
        selection,
        sketch,
        timings,
    })
}
