//! Local descent at a fixed step and the step-halving run loop.

use sw_types::{Point, SearchOutcome, Step};
use tracing::{debug, trace};

use crate::evaluator::{Evaluator, Progress};
use crate::grid::NeighborGrid;
use crate::lattice::{Lattice, RoundPlan};

/// Move to the best neighbor until the center is locally optimal at this
/// step, then forget the neighbors so the next step starts fresh.
pub(crate) fn descend<F, const N: usize>(
    evaluator: &mut Evaluator<'_, F>,
    grid: &mut NeighborGrid<N>,
    mut center: Point,
    plan: &RoundPlan<N>,
) -> Point
where
    F: FnMut(i64, i64) -> f64,
{
    loop {
        let best = evaluator.round(grid, center, plan);
        if best == grid.center() {
            grid.clear_neighbors();
            return center;
        }

        let (ox, oy) = plan.offsets[best];
        center = center.offset(ox, oy);
        *grid = grid.shifted(plan.shifts[best]);

        let value = grid.center_value();
        trace!(x = center.x, y = center.y, value, slot = best, "accepted move");
        evaluator.report(center, value);
    }
}

/// Run up to `runs` descents on `lattice`, halving the step after each.
pub fn search<L, F, const N: usize>(
    lattice: &L,
    runs: u32,
    start: Point,
    step: Step,
    objective: F,
    progress: Progress<'_>,
) -> SearchOutcome
where
    L: Lattice<N>,
    F: FnMut(i64, i64) -> f64,
{
    let mut evaluator = Evaluator::new(objective, progress);
    let mut center = start;
    let mut grid = NeighborGrid::<N>::new(L::CENTER, evaluator.evaluate(center));
    evaluator.report(center, grid.center_value());

    let mut step = step;
    let mut runs_completed = 0;

    for run in 0..runs {
        let Some(plan) = lattice.plan(step) else {
            debug!(lattice = lattice.name(), run, "both step components collapsed");
            break;
        };

        debug!(
            lattice = lattice.name(),
            run,
            dx = step.dx,
            dy = step.dy,
            mode = ?plan.mode,
            "starting run"
        );
        center = descend(&mut evaluator, &mut grid, center, &plan);
        runs_completed += 1;
        step = step.halved();
    }

    let outcome = SearchOutcome {
        point: center,
        value: grid.center_value(),
        evaluations: evaluator.evaluations(),
        runs_completed,
    };
    debug!(
        lattice = lattice.name(),
        x = outcome.point.x,
        y = outcome.point.y,
        value = outcome.value,
        evaluations = outcome.evaluations,
        runs_completed,
        "search finished"
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::{SquareLattice, TriangularLattice};
    use sw_types::Connectivity;

    fn bowl(x: i64, y: i64) -> f64 {
        let a = x as f64 - 3.3;
        let b = y as f64 - 4.4;
        a * a + b * b
    }

    /// Replays `descend` and checks after every shift that each cached cell
    /// holds the objective value at its own coordinate.
    fn assert_cache_tracks_coordinates<L, const N: usize>(lattice: &L, start: Point, step: Step)
    where
        L: Lattice<N>,
    {
        let plan = lattice.plan(step).unwrap();
        let mut evaluator = Evaluator::new(bowl, None);
        let mut center = start;
        let mut grid = NeighborGrid::<N>::new(L::CENTER, bowl(start.x, start.y));

        loop {
            let best = evaluator.round(&mut grid, center, &plan);
            if best == grid.center() {
                break;
            }
            let (ox, oy) = plan.offsets[best];
            center = center.offset(ox, oy);
            grid = grid.shifted(plan.shifts[best]);

            for &slot in plan.active.iter().chain(std::iter::once(&L::CENTER)) {
                if let Some(value) = grid.get(slot) {
                    let (sx, sy) = plan.offsets[slot];
                    let at = center.offset(sx, sy);
                    assert_eq!(value, bowl(at.x, at.y), "slot {slot} stale at {at}");
                }
            }
        }
    }

    #[test]
    fn test_cache_tracks_coordinates() {
        let start = Point::new(-40, 25);
        assert_cache_tracks_coordinates(
            &SquareLattice::new(Connectivity::Orthogonal),
            start,
            Step::new(3, 2),
        );
        assert_cache_tracks_coordinates(
            &SquareLattice::new(Connectivity::EightConnected),
            start,
            Step::new(2, 3),
        );
        assert_cache_tracks_coordinates(&TriangularLattice, start, Step::new(4, 3));
        assert_cache_tracks_coordinates(&TriangularLattice, start, Step::new(-5, 4));
        assert_cache_tracks_coordinates(&TriangularLattice, start, Step::new(1, 2));
    }

    #[test]
    fn test_zero_runs_evaluates_center_only() {
        let outcome = search(
            &SquareLattice::new(Connectivity::Orthogonal),
            0,
            Point::new(0, 0),
            Step::new(2, 2),
            bowl,
            None,
        );
        assert_eq!(outcome.point, Point::new(0, 0));
        assert_eq!(outcome.evaluations, 1);
        assert_eq!(outcome.runs_completed, 0);
        assert_eq!(outcome.value, bowl(0, 0));
    }

    #[test]
    fn test_collapsed_step_stops_early() {
        let outcome = search(&TriangularLattice, 5, Point::new(0, 0), Step::new(0, 0), bowl, None);
        assert_eq!(outcome.evaluations, 1);
        assert_eq!(outcome.runs_completed, 0);

        // (2, 2) -> (1, 1) -> (0, 0): two runs then stop.
        let outcome = search(
            &SquareLattice::new(Connectivity::Orthogonal),
            10,
            Point::new(0, 0),
            Step::new(2, 2),
            bowl,
            None,
        );
        assert_eq!(outcome.runs_completed, 2);
        assert_eq!(outcome.point, Point::new(3, 4));
        assert_eq!(outcome.evaluations, 21);
    }

    #[test]
    fn test_single_axis_search() {
        let square = SquareLattice::new(Connectivity::EightConnected);

        let vertical = search(&square, 1, Point::new(0, 0), Step::new(0, 4), bowl, None);
        assert_eq!(vertical.point, Point::new(0, 4));
        assert_eq!(vertical.evaluations, 4);

        let horizontal = search(&square, 1, Point::new(0, 0), Step::new(4, 0), bowl, None);
        assert_eq!(horizontal.point, Point::new(4, 0));
        assert_eq!(horizontal.evaluations, 4);

        let tri_vertical = search(&TriangularLattice, 1, Point::new(0, 0), Step::new(0, 4), bowl, None);
        assert_eq!(tri_vertical.point, Point::new(0, 4));
        assert_eq!(tri_vertical.evaluations, 4);
    }

    #[test]
    fn test_most_negative_step_disables_axis() {
        let square = search(
            &SquareLattice::new(Connectivity::Orthogonal),
            1,
            Point::new(0, 0),
            Step::new(i64::MIN, 4),
            bowl,
            None,
        );
        assert_eq!(square.point, Point::new(0, 4));
        assert_eq!(square.evaluations, 4);

        let tri = search(&TriangularLattice, 1, Point::new(0, 0), Step::new(4, i64::MIN), bowl, None);
        assert_eq!(tri.point, Point::new(4, 0));
        assert_eq!(tri.evaluations, 4);
    }

    #[test]
    fn test_progress_sees_start_and_moves() {
        let mut seen = Vec::new();
        let mut record = |point: Point, value: f64| seen.push((point, value));
        let outcome = search(
            &SquareLattice::new(Connectivity::EightConnected),
            1,
            Point::new(0, 0),
            Step::new(2, 2),
            bowl,
            Some(&mut record),
        );

        let points: Vec<Point> = seen.iter().map(|(point, _)| *point).collect();
        assert_eq!(
            points,
            vec![Point::new(0, 0), Point::new(2, 2), Point::new(4, 4)]
        );
        assert_eq!(seen.last().map(|(_, value)| *value), Some(outcome.value));
    }
}
