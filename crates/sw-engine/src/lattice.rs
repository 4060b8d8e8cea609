//! Neighbor layouts and the shift tables that re-center a grid after a move.
//!
//! Square slots, `y` growing upward:
//!
//! ```text
//!   6 7 8
//!   3 4 5
//!   0 1 2
//! ```
//!
//! Triangular slots, two offset rows around a middle row:
//!
//! ```text
//!    5 6
//!   2 3 4
//!    0 1
//! ```

use sw_types::{Connectivity, Step};

/// `(source, destination)` slot pairs kept when the window moves.
pub type ShiftTable = &'static [(usize, usize)];

pub const SQUARE_SLOTS: usize = 9;
pub const TRIANGULAR_SLOTS: usize = 7;

/// Which part of the neighborhood a run searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisMode {
    /// Every neighbor the layout offers.
    Full,
    /// `dy` collapsed: left and right only.
    Horizontal,
    /// `dx` collapsed: down and up only.
    Vertical,
    /// Triangular rows can no longer be offset by half a step (|dx| = 1):
    /// down, left, right and up.
    Cross,
}

/// Per-run description of the neighborhood: which slots are searched, where
/// each slot sits relative to the center, and how to shift after a move.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundPlan<const N: usize> {
    pub mode: AxisMode,
    /// Active slots in scan order.
    pub active: &'static [usize],
    pub offsets: [(i64, i64); N],
    /// Indexed by winning slot.
    pub shifts: &'static [ShiftTable; N],
}

/// A neighbor layout with `N` slots.
pub trait Lattice<const N: usize> {
    const CENTER: usize;

    fn name(&self) -> &'static str;

    /// Plan a run at `step`, or `None` when both axes have collapsed.
    fn plan(&self, step: Step) -> Option<RoundPlan<N>>;
}

/// Step with collapsed components replaced by zero.
fn effective(step: Step) -> (i64, i64) {
    let dx = if step.x_collapsed() { 0 } else { step.dx };
    let dy = if step.y_collapsed() { 0 } else { step.dy };
    (dx, dy)
}

// ---------------------------------------------------------------------------
// Square lattice
// ---------------------------------------------------------------------------

static SQUARE_SHIFTS: [ShiftTable; SQUARE_SLOTS] = [
    // down left
    &[(0, 4), (1, 5), (3, 7), (4, 8)],
    // down
    &[(0, 3), (1, 4), (2, 5), (3, 6), (4, 7), (5, 8)],
    // down right
    &[(1, 3), (2, 4), (4, 6), (5, 7)],
    // left
    &[(0, 1), (1, 2), (3, 4), (4, 5), (6, 7), (7, 8)],
    // center
    &[],
    // right
    &[(1, 0), (2, 1), (4, 3), (5, 4), (7, 6), (8, 7)],
    // up left
    &[(3, 1), (4, 2), (6, 4), (7, 5)],
    // up
    &[(3, 0), (4, 1), (5, 2), (6, 3), (7, 4), (8, 5)],
    // up right
    &[(4, 0), (5, 1), (7, 3), (8, 4)],
];

const SQUARE_ORTHOGONAL: &[usize] = &[1, 3, 5, 7];
const SQUARE_EIGHT: &[usize] = &[0, 1, 2, 3, 5, 6, 7, 8];
const SQUARE_HORIZONTAL: &[usize] = &[3, 5];
const SQUARE_VERTICAL: &[usize] = &[1, 7];

/// 3x3 grid searched with four or eight neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareLattice {
    pub connectivity: Connectivity,
}

impl SquareLattice {
    pub fn new(connectivity: Connectivity) -> Self {
        Self { connectivity }
    }
}

impl Lattice<SQUARE_SLOTS> for SquareLattice {
    const CENTER: usize = 4;

    fn name(&self) -> &'static str {
        match self.connectivity {
            Connectivity::Orthogonal => "square",
            Connectivity::EightConnected => "diagonal",
        }
    }

    fn plan(&self, step: Step) -> Option<RoundPlan<SQUARE_SLOTS>> {
        let (mode, active) = match (step.x_collapsed(), step.y_collapsed()) {
            (true, true) => return None,
            (false, true) => (AxisMode::Horizontal, SQUARE_HORIZONTAL),
            (true, false) => (AxisMode::Vertical, SQUARE_VERTICAL),
            (false, false) => match self.connectivity {
                Connectivity::Orthogonal => (AxisMode::Full, SQUARE_ORTHOGONAL),
                Connectivity::EightConnected => (AxisMode::Full, SQUARE_EIGHT),
            },
        };

        let (dx, dy) = effective(step);
        let mut offsets = [(0, 0); SQUARE_SLOTS];
        for (slot, offset) in offsets.iter_mut().enumerate() {
            let column = slot as i64 % 3 - 1;
            let row = slot as i64 / 3 - 1;
            *offset = (column * dx, row * dy);
        }

        Some(RoundPlan {
            mode,
            active,
            offsets,
            shifts: &SQUARE_SHIFTS,
        })
    }
}

// ---------------------------------------------------------------------------
// Triangular lattice
// ---------------------------------------------------------------------------

static TRIANGULAR_SHIFTS: [ShiftTable; TRIANGULAR_SLOTS] = [
    // lower left
    &[(0, 3), (1, 4), (2, 5), (3, 6)],
    // lower right
    &[(0, 2), (1, 3), (3, 5), (4, 6)],
    // left
    &[(0, 1), (2, 3), (3, 4), (5, 6)],
    // center
    &[],
    // right
    &[(1, 0), (3, 2), (4, 3), (6, 5)],
    // upper left
    &[(2, 0), (3, 1), (5, 3), (6, 4)],
    // upper right
    &[(3, 0), (4, 1), (5, 2), (6, 3)],
];

/// Shifts for the four-slot cross. Slots 0 and 6 are never active there.
static CROSS_SHIFTS: [ShiftTable; TRIANGULAR_SLOTS] = [
    &[],
    // down
    &[(1, 3), (3, 5)],
    // left
    &[(2, 3), (3, 4)],
    &[],
    // right
    &[(3, 2), (4, 3)],
    // up
    &[(3, 1), (5, 3)],
    &[],
];

const TRIANGULAR_FULL: &[usize] = &[0, 1, 2, 4, 5, 6];
const TRIANGULAR_CROSS: &[usize] = &[1, 2, 4, 5];
const TRIANGULAR_HORIZONTAL: &[usize] = &[2, 4];
const TRIANGULAR_VERTICAL: &[usize] = &[1, 5];

/// Six-neighbor lattice generated by `a = (dx, 0)` and `b = (dx / 2, dy)`.
///
/// Choosing `dy` close to `0.866 * dx` makes the triangles nearly
/// equilateral. Slot offsets are `-b`, `a - b`, `-a`, `a`, `b - a`, `b`, which
/// is a lattice for every `dx`, so the shift tables stay exact for odd steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TriangularLattice;

impl Lattice<TRIANGULAR_SLOTS> for TriangularLattice {
    const CENTER: usize = 3;

    fn name(&self) -> &'static str {
        "triangular"
    }

    fn plan(&self, step: Step) -> Option<RoundPlan<TRIANGULAR_SLOTS>> {
        let (dx, dy) = effective(step);
        let half = dx / 2;

        let (mode, active) = match (step.x_collapsed(), step.y_collapsed()) {
            (true, true) => return None,
            (false, true) => (AxisMode::Horizontal, TRIANGULAR_HORIZONTAL),
            (true, false) => (AxisMode::Vertical, TRIANGULAR_VERTICAL),
            (false, false) if half == 0 => (AxisMode::Cross, TRIANGULAR_CROSS),
            (false, false) => (AxisMode::Full, TRIANGULAR_FULL),
        };

        let (offsets, shifts) = if mode == AxisMode::Full {
            (
                [
                    (-half, -dy),
                    (dx - half, -dy),
                    (-dx, 0),
                    (0, 0),
                    (dx, 0),
                    (half - dx, dy),
                    (half, dy),
                ],
                &TRIANGULAR_SHIFTS,
            )
        } else {
            // Row slots sit straight below and above the center.
            (
                [(0, -dy), (0, -dy), (-dx, 0), (0, 0), (dx, 0), (0, dy), (0, dy)],
                &CROSS_SHIFTS,
            )
        };

        Some(RoundPlan {
            mode,
            active,
            offsets,
            shifts,
        })
    }
}
