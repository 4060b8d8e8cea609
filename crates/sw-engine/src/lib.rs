//! # sw-engine
//!
//! Derivative-free minimization over integer 2-D coordinates by compass
//! search with step halving.
//!
//! Each run walks from the current best point to its best neighbor until no
//! neighbor is strictly better, then halves the step and starts over. Values
//! of neighbors that stay inside the window after a move are reused, so the
//! objective is never called twice for a cell that has not left the window.
//!
//! Three neighborhoods are available: the square grid with four or eight
//! neighbors, and a triangular lattice with six.
//!
//! The objective must be pure and is expected to be strictly positive; the
//! progress callback is invoked once for the starting point and once per
//! accepted move, with strictly decreasing values.

pub mod evaluator;
pub mod grid;
pub mod lattice;
pub mod objectives;
pub mod recorder;
pub mod run_config;
pub mod search;

pub use evaluator::Progress;
pub use lattice::{AxisMode, Lattice, SquareLattice, TriangularLattice};
pub use objectives::Objective;
pub use recorder::ProgressRecorder;
pub use run_config::RunConfig;
pub use sw_types::{
    Connectivity, Point, ProgressRecord, SearchConfig, SearchOutcome, Step, SwError, SwResult,
    Topology,
};

/// Minimize `objective` on the square grid.
///
/// `runs` bounds the number of step halvings; `connectivity` chooses between
/// four and eight neighbors.
pub fn find_min<F>(
    runs: u32,
    connectivity: Connectivity,
    start: Point,
    step: Step,
    objective: F,
    progress: Progress<'_>,
) -> SearchOutcome
where
    F: FnMut(i64, i64) -> f64,
{
    search::search(
        &SquareLattice::new(connectivity),
        runs,
        start,
        step,
        objective,
        progress,
    )
}

/// Minimize `objective` on the triangular lattice.
pub fn find_min_tri<F>(
    runs: u32,
    start: Point,
    step: Step,
    objective: F,
    progress: Progress<'_>,
) -> SearchOutcome
where
    F: FnMut(i64, i64) -> f64,
{
    search::search(&TriangularLattice, runs, start, step, objective, progress)
}

/// Minimize `objective` as described by `config`.
pub fn minimize<F>(config: &SearchConfig, objective: F, progress: Progress<'_>) -> SearchOutcome
where
    F: FnMut(i64, i64) -> f64,
{
    match config.topology {
        Topology::Square { connectivity } => find_min(
            config.runs,
            connectivity,
            config.start,
            config.step,
            objective,
            progress,
        ),
        Topology::Triangular => {
            find_min_tri(config.runs, config.start, config.step, objective, progress)
        }
    }
}
