use crate::select::Selection;
use serde::{Deserialize, Serialize};

/// Counters describing one selector run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionReport {
    pub eligible: usize,
    pub budget: usize,
    pub forced: usize,
    pub selected: usize,
    pub queue_pops: usize,
    pub stale_discards: usize,
}

impl From<&Selection> for SelectionReport {
    fn from(sel: &Selection) -> Self {
        Self {
            eligible: sel.eligible,
            budget: sel.budget,
            forced: sel.forced,
            selected: sel.selected,
            queue_pops: sel.pops,
            stale_discards: sel.stale,
        }
    }
}
