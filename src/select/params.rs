//! Tuning knobs for the budgeted selector.
use serde::{Deserialize, Serialize};

/// Parameters of one selection run.
///
/// - `budget_ratio`: fraction of eligible edge pixels that may be selected,
///   in [0, 1].
/// - `lambda_connect`: gain added to a candidate each time one of its
///   8-neighbours is selected. The default spreads a full-neighbourhood bonus
///   of 0.5 over the 8 neighbours.
/// - `lambda_parallel`: penalty weight on `cos²` of the direction difference
///   between a newly selected pixel and its neighbour.
/// - `seed_forced_neighbors`: when set, forced-keep pixels update their
///   neighbours' gains before the greedy loop; off by default, in which case
///   forced pixels count towards the budget but do not touch any gain.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectParams {
    pub budget_ratio: f64,
    pub lambda_connect: f32,
    pub lambda_parallel: f32,
    pub seed_forced_neighbors: bool,
}

impl Default for SelectParams {
    fn default() -> Self {
        Self {
            budget_ratio: 0.3,
            lambda_connect: 0.0625,
            lambda_parallel: 0.0,
            seed_forced_neighbors: false,
        }
    }
}

impl SelectParams {
    pub fn with_budget_ratio(mut self, budget_ratio: f64) -> Self {
        self.budget_ratio = budget_ratio;
        self
    }

    pub fn with_weights(mut self, lambda_connect: f32, lambda_parallel: f32) -> Self {
        self.lambda_connect = lambda_connect;
        self.lambda_parallel = lambda_parallel;
        self
    }

    pub fn with_seed_forced_neighbors(mut self, seed: bool) -> Self {
        self.seed_forced_neighbors = seed;
        self
    }
}
