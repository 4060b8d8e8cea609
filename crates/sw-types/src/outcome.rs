use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Result of one pattern search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Best point found.
    pub point: Point,
    /// Objective value at `point`.
    pub value: f64,
    /// Number of objective calls, always at least one.
    pub evaluations: u64,
    /// Halving runs actually executed. Smaller than the budget when both step
    /// components collapsed first.
    pub runs_completed: u32,
}

/// One progress notification: the search start, or an accepted move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    /// Zero for the initial center, then one per accepted move.
    pub sequence: usize,
    pub point: Point,
    pub value: f64,
}
