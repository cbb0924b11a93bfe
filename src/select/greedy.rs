//! Lazy-greedy budgeted edge selection.
//!
//! Eligible pixels are the edge pixels inside the search region. Every
//! eligible pixel starts with its saliency as gain; the highest-gain pixel is
//! selected repeatedly until the budget is met or candidates run out. Each
//! selection updates the live gain of its unselected eligible 8-neighbours:
//!
//! ```text
//! gain' = gain + λ_connect − λ_parallel · cos²(dir[new] − dir[neighbour])
//! ```
//!
//! Updated gains are pushed as new queue entries; entries whose gain no longer
//! matches the live table are discarded when popped.
use super::error::SelectError;
use super::params::SelectParams;
use super::queue::GainQueue;
use crate::angle::parallel_alignment;
use crate::image::{ImageF32, Mask, PixelGrid};
use log::debug;

/// Borrowed inputs of one selection run. All grids share the edge mask's shape.
#[derive(Clone, Copy, Debug)]
pub struct SelectInput<'a> {
    /// Candidate pixels (edge detector output).
    pub edges: &'a Mask,
    /// Per-pixel saliency in [0, 1].
    pub saliency: &'a ImageF32,
    /// Per-pixel gradient direction in radians.
    pub direction: &'a ImageF32,
    /// Search region; `None` or an all-false mask means the whole image.
    pub region: Option<&'a Mask>,
    /// Pixels that must be kept when they are eligible.
    pub keep: Option<&'a Mask>,
}

impl<'a> SelectInput<'a> {
    pub fn new(edges: &'a Mask, saliency: &'a ImageF32, direction: &'a ImageF32) -> Self {
        Self {
            edges,
            saliency,
            direction,
            region: None,
            keep: None,
        }
    }

    pub fn with_region(mut self, region: Option<&'a Mask>) -> Self {
        self.region = region;
        self
    }

    pub fn with_keep(mut self, keep: Option<&'a Mask>) -> Self {
        self.keep = keep;
        self
    }

    fn validate(&self) -> Result<(), SelectError> {
        let expected = self.edges.dims();
        check_dims("saliency", expected, self.saliency)?;
        check_dims("direction", expected, self.direction)?;
        if let Some(region) = self.region {
            check_dims("region mask", expected, region)?;
        }
        if let Some(keep) = self.keep {
            check_dims("keep mask", expected, keep)?;
        }
        Ok(())
    }
}

fn check_dims<T>(
    name: &'static str,
    expected: (usize, usize),
    grid: &PixelGrid<T>,
) -> Result<(), SelectError> {
    let found = (grid.w, grid.h);
    if found != expected {
        return Err(SelectError::DimensionMismatch {
            name,
            expected,
            found,
        });
    }
    Ok(())
}

fn validate_params(params: &SelectParams) -> Result<(), SelectError> {
    let ratio = params.budget_ratio;
    if !(0.0..=1.0).contains(&ratio) {
        return Err(SelectError::InvalidBudgetRatio(ratio));
    }
    for (name, value) in [
        ("lambda_connect", params.lambda_connect),
        ("lambda_parallel", params.lambda_parallel),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(SelectError::InvalidWeight { name, value });
        }
    }
    Ok(())
}

/// Outcome of one selection run.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    /// Selected pixels.
    pub mask: Mask,
    /// Maximum number of selected pixels the greedy loop fills up to.
    pub budget: usize,
    /// Number of eligible pixels (edges inside the search region).
    pub eligible: usize,
    /// Forced-keep pixels honoured before the loop.
    pub forced: usize,
    /// Total selected pixels, forced included.
    pub selected: usize,
    /// Queue entries popped by the greedy loop.
    pub pops: usize,
    /// Popped entries discarded as out of date or already selected.
    pub stale: usize,
}

/// `floor(eligible × ratio)`.
pub fn compute_budget(eligible: usize, ratio: f64) -> usize {
    (eligible as f64 * ratio).floor() as usize
}

/// Edge pixels inside `region`; an absent or all-false region admits every edge.
pub fn eligible_mask(edges: &Mask, region: Option<&Mask>) -> Mask {
    match region.filter(|m| m.any()) {
        Some(region) => edges.and(region),
        None => edges.clone(),
    }
}

/// Fixed-order 8-neighbourhood of linear index `idx` in a `w × h` grid.
fn neighbours(idx: usize, w: usize, h: usize) -> impl Iterator<Item = usize> {
    let (x, y) = (idx % w, idx / w);
    let ys = y.saturating_sub(1)..=(y + 1).min(h - 1);
    ys.flat_map(move |ny| {
        let xs = x.saturating_sub(1)..=(x + 1).min(w - 1);
        xs.map(move |nx| ny * w + nx)
    })
    .filter(move |&n| n != idx)
}

struct GainState<'a> {
    eligible: &'a [bool],
    direction: &'a [f32],
    live: Vec<f32>,
    w: usize,
    h: usize,
    lambda_connect: f32,
    lambda_parallel: f32,
}

impl GainState<'_> {
    /// Apply the gain update from newly selected `idx` to its candidate
    /// neighbours and report each changed `(neighbour, gain)`.
    fn propagate(&mut self, idx: usize, selection: &[bool], mut changed: impl FnMut(usize, f32)) {
        let dir = self.direction[idx];
        for n in neighbours(idx, self.w, self.h) {
            if !self.eligible[n] || selection[n] {
                continue;
            }
            let alignment = parallel_alignment(dir, self.direction[n]);
            let gain = self.live[n] + self.lambda_connect - self.lambda_parallel * alignment;
            if gain.to_bits() != self.live[n].to_bits() {
                self.live[n] = gain;
                changed(n, gain);
            }
        }
    }
}

/// Select at most `budget` pixels maximizing the connectivity- and
/// direction-aware gain.
///
/// Forced-keep pixels inside the eligible set are always part of the result
/// and count towards the budget, even when they alone exceed it; keep pixels
/// off an edge or outside the region are dropped. Inputs are validated
/// up front; nothing is computed when validation fails.
pub fn select(input: &SelectInput<'_>, params: &SelectParams) -> Result<Selection, SelectError> {
    input.validate()?;
    validate_params(params)?;

    let (w, h) = input.edges.dims();
    let eligible = eligible_mask(input.edges, input.region);
    let eligible_count = eligible.count();
    let budget = compute_budget(eligible_count, params.budget_ratio);

    let mut mask = match input.keep {
        Some(keep) => keep.and(&eligible),
        None => Mask::new(w, h),
    };
    let forced = mask.count();
    let mut selected = forced;

    let mut state = GainState {
        eligible: &eligible.data,
        direction: &input.direction.data,
        live: eligible
            .data
            .iter()
            .zip(&input.saliency.data)
            .map(|(&e, &s)| if e { s } else { 0.0 })
            .collect(),
        w,
        h,
        lambda_connect: params.lambda_connect,
        lambda_parallel: params.lambda_parallel,
    };

    if params.seed_forced_neighbors {
        for idx in 0..mask.data.len() {
            if mask.data[idx] {
                state.propagate(idx, &mask.data, |_, _| {});
            }
        }
    }

    let mut queue = GainQueue::with_capacity(eligible_count);
    for (idx, (&e, &s)) in eligible.data.iter().zip(&mask.data).enumerate() {
        if e && !s {
            queue.push(idx, state.live[idx]);
        }
    }

    let mut pops = 0usize;
    let mut stale = 0usize;
    while selected < budget {
        let Some((idx, gain)) = queue.pop() else {
            break;
        };
        pops += 1;
        if gain.to_bits() != state.live[idx].to_bits() || mask.data[idx] {
            stale += 1;
            continue;
        }
        mask.data[idx] = true;
        selected += 1;
        state.propagate(idx, &mask.data, |n, g| queue.push(n, g));
    }

    debug!(
        "select: {}x{} eligible={} budget={} forced={} selected={} pops={} stale={} queued={}",
        w,
        h,
        eligible_count,
        budget,
        forced,
        selected,
        pops,
        stale,
        queue.len()
    );

    Ok(Selection {
        mask,
        budget,
        eligible: eligible_count,
        forced,
        selected,
        pops,
        stale,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        edges: Mask,
        saliency: ImageF32,
        direction: ImageF32,
    }

    impl Fixture {
        fn input(&self) -> SelectInput<'_> {
            SelectInput::new(&self.edges, &self.saliency, &self.direction)
        }
    }

    fn diagonal(n: usize) -> Fixture {
        Fixture {
            edges: Mask::from_fn(n, n, |x, y| x == y),
            saliency: ImageF32::from_fn(n, n, |x, y| if x == y { 1.0 } else { 0.0 }),
            direction: ImageF32::new(n, n),
        }
    }

    /// Deterministic pseudo-random field with a dense edge mask.
    fn textured(w: usize, h: usize) -> Fixture {
        let hash = |x: usize, y: usize| ((x * 73 + y * 151 + x * y * 7) % 97) as f32 / 96.0;
        Fixture {
            edges: Mask::from_fn(w, h, |x, y| (x * 5 + y * 3) % 7 < 4),
            saliency: ImageF32::from_fn(w, h, hash),
            direction: ImageF32::from_fn(w, h, |x, y| hash(y, x) * 6.0 - 3.0),
        }
    }

    fn params(ratio: f64, connect: f32, parallel: f32) -> SelectParams {
        SelectParams::default()
            .with_budget_ratio(ratio)
            .with_weights(connect, parallel)
    }

    #[test]
    fn diagonal_scenario_picks_adjacent_run_from_first_row() {
        let f = diagonal(5);
        let sel = select(&f.input(), &params(0.6, 1.0, 0.0)).unwrap();
        assert_eq!(sel.budget, 3);
        assert_eq!(sel.selected, 3);
        let picked: Vec<(usize, usize)> = (0..5)
            .flat_map(|y| (0..5).map(move |x| (x, y)))
            .filter(|&(x, y)| sel.mask.get(x, y))
            .collect();
        assert_eq!(picked, vec![(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn zero_ratio_selects_nothing() {
        let f = diagonal(5);
        let sel = select(&f.input(), &params(0.0, 1.0, 0.0)).unwrap();
        assert_eq!(sel.budget, 0);
        assert_eq!(sel.mask.count(), 0);
        assert_eq!(sel.pops, 0);
    }

    #[test]
    fn full_ratio_selects_exactly_the_eligible_set() {
        let f = textured(12, 9);
        let region = Mask::from_fn(12, 9, |x, _| x >= 3);
        let input = f.input().with_region(Some(&region));
        let sel = select(&input, &params(1.0, 0.3, 0.7)).unwrap();
        assert_eq!(sel.mask, eligible_mask(&f.edges, Some(&region)));
        assert_eq!(sel.selected, sel.eligible);
    }

    #[test]
    fn budget_and_eligibility_hold() {
        let f = textured(16, 11);
        let region = Mask::from_fn(16, 11, |x, y| x + y < 18);
        let input = f.input().with_region(Some(&region));
        let sel = select(&input, &params(0.45, 0.2, 0.5)).unwrap();
        assert!(sel.mask.count() <= sel.budget);
        assert_eq!(sel.mask.count(), sel.selected);
        assert!(sel.mask.is_subset_of(&eligible_mask(&f.edges, Some(&region))));
    }

    #[test]
    fn forced_pixels_are_kept_and_counted() {
        let f = textured(10, 10);
        let keep = Mask::from_fn(10, 10, |x, y| x == 2 || y == 7);
        let input = f.input().with_keep(Some(&keep));
        let sel = select(&input, &params(0.25, 0.1, 0.1)).unwrap();
        let forced = keep.and(&f.edges);
        assert!(forced.is_subset_of(&sel.mask));
        assert_eq!(sel.forced, forced.count());
        assert!(sel.selected >= sel.forced);
        assert!(sel.selected <= sel.budget.max(sel.forced));
    }

    #[test]
    fn forced_pixels_off_edges_are_dropped() {
        let f = diagonal(4);
        let keep = Mask::from_fn(4, 4, |x, y| x != y);
        let sel = select(&f.input().with_keep(Some(&keep)), &params(0.0, 1.0, 0.0)).unwrap();
        assert_eq!(sel.forced, 0);
        assert_eq!(sel.mask.count(), 0);
    }

    #[test]
    fn forced_pixels_beyond_budget_stop_the_loop() {
        let f = diagonal(6);
        let keep = Mask::from_fn(6, 6, |x, y| x == y && x < 4);
        let sel = select(&f.input().with_keep(Some(&keep)), &params(0.5, 1.0, 0.0)).unwrap();
        assert_eq!(sel.budget, 3);
        assert_eq!(sel.selected, 4);
        assert_eq!(sel.pops, 0);
    }

    #[test]
    fn repeated_runs_are_bit_identical() {
        let f = textured(20, 14);
        let p = params(0.4, 0.25, 0.6);
        let a = select(&f.input(), &p).unwrap();
        let b = select(&f.input(), &p).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn larger_budget_extends_smaller_selection() {
        let f = textured(18, 13);
        let small = select(&f.input(), &params(0.1, 0.25, 0.4)).unwrap();
        let large = select(&f.input(), &params(0.3, 0.25, 0.4)).unwrap();
        assert!(small.selected <= large.selected);
        assert!(small.mask.is_subset_of(&large.mask));
    }

    #[test]
    fn stale_entries_never_change_the_count() {
        let f = textured(15, 15);
        let sel = select(&f.input(), &params(0.8, 0.5, 0.3)).unwrap();
        assert!(sel.stale > 0, "fixture should produce stale entries");
        assert_eq!(sel.selected, sel.budget);
        assert_eq!(sel.pops, sel.selected + sel.stale);
    }

    #[test]
    fn parallel_penalty_prefers_crossing_directions() {
        // Three candidates in a row; the centre is picked first. The left
        // neighbour shares its direction, the right one is perpendicular.
        let edges = Mask::filled(3, 1, true);
        let saliency = ImageF32::from_vec(3, 1, vec![0.5, 0.9, 0.5]).unwrap();
        let direction =
            ImageF32::from_vec(3, 1, vec![0.0, 0.0, std::f32::consts::FRAC_PI_2]).unwrap();
        let input = SelectInput::new(&edges, &saliency, &direction);
        let sel = select(&input, &params(0.7, 0.0, 1.0)).unwrap();
        assert_eq!(sel.mask.data, vec![false, true, true]);
    }

    #[test]
    fn empty_region_mask_means_whole_image() {
        let f = diagonal(5);
        let region = Mask::new(5, 5);
        let sel = select(&f.input().with_region(Some(&region)), &params(1.0, 1.0, 0.0)).unwrap();
        assert_eq!(sel.eligible, 5);
        assert_eq!(sel.selected, 5);
    }

    #[test]
    fn region_without_edges_drops_keep_pixels_outside_it() {
        let f = diagonal(5);
        let region = Mask::from_fn(5, 5, |x, y| x == 4 && y == 0);
        let keep = Mask::from_fn(5, 5, |x, y| x == 1 && y == 1);
        let input = f.input().with_region(Some(&region)).with_keep(Some(&keep));
        let sel = select(&input, &params(1.0, 1.0, 0.0)).unwrap();
        assert_eq!(sel.eligible, 0);
        assert_eq!(sel.budget, 0);
        assert_eq!(sel.forced, 0);
        assert!(!sel.mask.any());
    }

    #[test]
    fn keep_outside_region_does_not_take_a_budget_slot() {
        let f = diagonal(5);
        let region = Mask::from_fn(5, 5, |x, y| x < 2 && y < 2);
        let keep = Mask::from_fn(5, 5, |x, y| x == 4 && y == 4);
        let input = f.input().with_region(Some(&region)).with_keep(Some(&keep));
        let sel = select(&input, &params(1.0, 1.0, 0.0)).unwrap();
        let eligible = eligible_mask(&f.edges, Some(&region));
        assert_eq!(sel.budget, 2);
        assert_eq!(sel.forced, 0);
        assert!(!sel.mask.get(4, 4));
        assert_eq!(sel.mask, eligible);
    }

    #[test]
    fn seeding_from_forced_pixels_changes_the_pick() {
        // Row of four equal candidates; the forced pixel sits at the right end.
        let edges = Mask::filled(4, 1, true);
        let saliency = ImageF32::filled(4, 1, 1.0);
        let direction = ImageF32::new(4, 1);
        let keep = Mask::from_fn(4, 1, |x, _| x == 3);
        let input = SelectInput::new(&edges, &saliency, &direction).with_keep(Some(&keep));
        let p = params(0.5, 1.0, 0.0);

        let plain = select(&input, &p).unwrap();
        assert_eq!(plain.mask.data, vec![true, false, false, true]);

        let seeded = select(&input, &p.with_seed_forced_neighbors(true)).unwrap();
        assert_eq!(seeded.mask.data, vec![false, false, true, true]);
    }

    #[test]
    fn mismatched_dimensions_fail_fast() {
        let f = diagonal(5);
        let small = ImageF32::new(4, 5);
        let input = SelectInput::new(&f.edges, &small, &f.direction);
        let err = select(&input, &SelectParams::default()).unwrap_err();
        assert_eq!(
            err,
            SelectError::DimensionMismatch {
                name: "saliency",
                expected: (5, 5),
                found: (4, 5),
            }
        );

        let region = Mask::new(5, 6);
        let err = select(&f.input().with_region(Some(&region)), &SelectParams::default())
            .unwrap_err();
        assert!(matches!(err, SelectError::DimensionMismatch { name: "region mask", .. }));
    }

    #[test]
    fn invalid_ratio_and_weights_are_rejected() {
        let f = diagonal(3);
        for ratio in [-0.1, 1.5, f64::NAN] {
            let err = select(&f.input(), &params(ratio, 0.0, 0.0)).unwrap_err();
            assert!(matches!(err, SelectError::InvalidBudgetRatio(_)));
        }
        let err = select(&f.input(), &params(0.5, -1.0, 0.0)).unwrap_err();
        assert!(matches!(err, SelectError::InvalidWeight { name: "lambda_connect", .. }));
        let err = select(&f.input(), &params(0.5, 0.0, f32::INFINITY)).unwrap_err();
        assert!(matches!(err, SelectError::InvalidWeight { name: "lambda_parallel", .. }));
    }

    #[test]
    fn empty_grid_is_valid() {
        let edges = Mask::new(0, 0);
        let field = ImageF32::new(0, 0);
        let sel = select(&SelectInput::new(&edges, &field, &field), &params(1.0, 1.0, 1.0)).unwrap();
        assert_eq!(sel.selected, 0);
    }

    #[test]
    fn neighbours_are_clipped_at_borders() {
        let corner: Vec<usize> = neighbours(0, 3, 3).collect();
        assert_eq!(corner, vec![1, 3, 4]);
        let centre: Vec<usize> = neighbours(4, 3, 3).collect();
        assert_eq!(centre, vec![0, 1, 2, 3, 5, 6, 7, 8]);
    }
}
