#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod diagnostics;
pub mod image;
pub mod pipeline;
pub mod select;
pub mod session;

// Collaborators of the selector – public, but considered lower level.
pub mod angle;
pub mod config;
pub mod edges;
pub mod render;
pub mod saliency;

// --- High-level re-exports -------------------------------------------------

pub use crate::pipeline::{autotune, run_sketch, SketchMasks, SketchOutput};
pub use crate::select::{select, SelectError, SelectInput, SelectParams, Selection};
pub use crate::session::{InMemorySessionStore, SessionStore, SketchState};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use edge_sketch::prelude::*;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let (w, h) = (64usize, 48usize);
/// let gray = GrayImageU8::new(w, h, vec![0u8; w * h]);
/// let state = autotune(&SketchState::new(gray, CannyThresholds::default()), None)?;
///
/// let params = SelectParams::default().with_budget_ratio(0.3);
/// let out = run_sketch(&state, SketchMasks::default(), &params)?;
/// println!("selected={} budget={}", out.selection.selected, out.selection.budget);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::edges::CannyThresholds;
    pub use crate::image::io::GrayImageU8;
    pub use crate::image::{ImageF32, Mask};
    pub use crate::{autotune, run_sketch, SketchMasks, SketchState};
    pub use crate::{select, SelectInput, SelectParams};
}
