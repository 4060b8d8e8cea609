//! Objective calls, evaluation counting and progress notification.

use sw_types::Point;
use tracing::trace;

use crate::grid::NeighborGrid;
use crate::lattice::RoundPlan;

/// Optional observer called with the initial center and every accepted move.
pub type Progress<'a> = Option<&'a mut dyn FnMut(Point, f64)>;

/// Wraps the caller's objective and progress callback for one search.
pub struct Evaluator<'a, F> {
    objective: F,
    progress: Progress<'a>,
    evaluations: u64,
}

impl<'a, F> Evaluator<'a, F>
where
    F: FnMut(i64, i64) -> f64,
{
    pub fn new(objective: F, progress: Progress<'a>) -> Self {
        Self {
            objective,
            progress,
            evaluations: 0,
        }
    }

    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    /// Call the objective once at `point`.
    pub fn evaluate(&mut self, point: Point) -> f64 {
        self.evaluations += 1;
        let value = (self.objective)(point.x, point.y);
        trace!(x = point.x, y = point.y, value, n = self.evaluations, "evaluated");
        value
    }

    /// Tell the progress callback about a new best point.
    pub fn report(&mut self, point: Point, value: f64) {
        if let Some(progress) = self.progress.as_mut() {
            progress(point, value);
        }
    }

    /// Evaluate every unknown active slot around `center` and return the
    /// best slot, or the center slot when no neighbor is strictly better.
    ///
    /// Ties keep the slot seen first in scan order.
    pub fn round<const N: usize>(
        &mut self,
        grid: &mut NeighborGrid<N>,
        center: Point,
        plan: &RoundPlan<N>,
    ) -> usize {
        let mut best = grid.center();
        let mut best_value = grid.center_value();

        for &slot in plan.active {
            if grid.is_known(slot) {
                continue;
            }
            let (ox, oy) = plan.offsets[slot];
            let value = self.evaluate(center.offset(ox, oy));
            grid.set(slot, value);

            if value < best_value {
                best = slot;
                best_value = value;
            }
        }

        best
    }
}
