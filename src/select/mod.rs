//! Budgeted greedy edge selection.
//!
//! Given an edge mask, saliency and direction fields and optional region /
//! keep masks, [`select`] chooses at most `floor(eligible × budget_ratio)`
//! pixels using a lazily invalidated max-priority queue. The selector is a
//! pure function of its inputs: it owns its working buffers for the duration
//! of one call and never touches shared state.

pub mod error;
pub mod greedy;
pub mod params;
pub mod queue;

pub use error::SelectError;
pub use greedy::{compute_budget, eligible_mask, select, SelectInput, Selection};
pub use params::SelectParams;
