//! Serializable diagnostics produced by the sketch pipeline and the tool.
//!
//! `SketchReport` bundles the input description, the thresholds and selector
//! parameters in effect, the selector counters and per-stage timings.

pub mod report;
pub mod selection;
pub mod timing;

pub use report::{InputDescriptor, SketchReport};
pub use selection::SelectionReport;
pub use timing::{StageTiming, TimingBreakdown};
