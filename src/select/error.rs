use thiserror::Error;

/// Validation failures reported before any selection work starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectError {
    #[error("{name} is {found:?} but the edge mask is {expected:?} (width, height)")]
    DimensionMismatch {
        name: &'static str,
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("budget ratio must lie in [0, 1], got {0}")]
    InvalidBudgetRatio(f64),

    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidWeight { name: &'static str, value: f32 },
}
