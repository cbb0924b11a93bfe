use super::{SelectionReport, TimingBreakdown};
use crate::edges::CannyThresholds;
use crate::select::SelectParams;
use serde::Serialize;

/// Summary of one sketch run, written by the tool as JSON.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SketchReport {
    pub input: InputDescriptor,
    pub thresholds: CannyThresholds,
    pub params: SelectParams,
    pub edge_count: usize,
    pub selection: SelectionReport,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub revision: u64,
    pub has_region_mask: bool,
    pub has_keep_mask: bool,
}
