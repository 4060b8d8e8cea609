//! Fixed-size cache of objective values around the current center.

/// Objective values for the center and its neighbor slots.
///
/// A cell is `None` until it is evaluated at the current step, and becomes
/// `None` again once the window moves past it. The center cell is always
/// known and holds the best value seen in the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeighborGrid<const N: usize> {
    cells: [Option<f64>; N],
    center: usize,
}

impl<const N: usize> NeighborGrid<N> {
    /// A grid where only the center is known.
    pub fn new(center: usize, value: f64) -> Self {
        let mut cells = [None; N];
        cells[center] = Some(value);
        Self { cells, center }
    }

    pub fn center(&self) -> usize {
        self.center
    }

    pub fn center_value(&self) -> f64 {
        match self.cells[self.center] {
            Some(value) => value,
            None => unreachable!("center cell of a neighbor grid is always evaluated"),
        }
    }

    pub fn get(&self, slot: usize) -> Option<f64> {
        self.cells[slot]
    }

    pub fn is_known(&self, slot: usize) -> bool {
        self.cells[slot].is_some()
    }

    pub fn set(&mut self, slot: usize, value: f64) {
        self.cells[slot] = Some(value);
    }

    /// Forget every neighbor, keeping the center.
    pub fn clear_neighbors(&mut self) {
        for (slot, cell) in self.cells.iter_mut().enumerate() {
            if slot != self.center {
                *cell = None;
            }
        }
    }

    /// Re-center on a winning neighbor.
    ///
    /// `moves` lists `(source, destination)` slot pairs that stay inside the
    /// window; one of them must carry the winner into the center. Every other
    /// destination comes back unknown.
    pub fn shifted(&self, moves: &[(usize, usize)]) -> Self {
        let mut cells = [None; N];
        for &(source, destination) in moves {
            cells[destination] = self.cells[source];
        }
        debug_assert!(cells[self.center].is_some(), "shift table lost the center");
        Self {
            cells,
            center: self.center,
        }
    }

    pub fn known_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}
