use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::SwResult;
use crate::geometry::{Point, Step};
use crate::validation_error;

/// Which neighbors of the square lattice take part in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Connectivity {
    /// Up, down, left and right only.
    Orthogonal,
    /// All eight surrounding cells, diagonals included.
    EightConnected,
}

impl Default for Connectivity {
    fn default() -> Self {
        Self::Orthogonal
    }
}

/// Neighbor layout used by the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Topology {
    /// 3x3 grid around the center.
    Square { connectivity: Connectivity },
    /// Two offset rows above and below a middle row: six neighbors.
    Triangular,
}

impl Topology {
    pub const fn square() -> Self {
        Self::Square {
            connectivity: Connectivity::Orthogonal,
        }
    }

    pub const fn square_diagonal() -> Self {
        Self::Square {
            connectivity: Connectivity::EightConnected,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Square {
                connectivity: Connectivity::Orthogonal,
            } => "square",
            Self::Square {
                connectivity: Connectivity::EightConnected,
            } => "diagonal",
            Self::Triangular => "triangular",
        }
    }
}

impl Default for Topology {
    fn default() -> Self {
        Self::square()
    }
}

/// Everything needed to run one search, apart from the objective itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub topology: Topology,
    /// Maximum number of step-halving runs.
    pub runs: u32,
    pub start: Point,
    pub step: Step,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            topology: Topology::default(),
            runs: 8,
            start: Point::default(),
            step: Step::new(16, 16),
        }
    }
}

impl SearchConfig {
    pub fn new(topology: Topology) -> Self {
        Self {
            topology,
            ..Self::default()
        }
    }

    /// Build a config from the signed run-count convention, where a negative
    /// count asks for diagonal neighbors and its magnitude is the budget.
    ///
    /// Only meaningful for the square topology; a negative count with the
    /// triangular topology is rejected.
    pub fn from_signed_runs(runs: i64, triangular: bool) -> SwResult<Self> {
        let budget = u32::try_from(runs.unsigned_abs())
            .map_err(|_| validation_error!("run count {} does not fit in u32", runs))?;

        let topology = match (triangular, runs < 0) {
            (true, true) => {
                return Err(validation_error!(
                    "negative run count {} selects diagonals, which the triangular topology does not have",
                    runs
                ))
            }
            (true, false) => Topology::Triangular,
            (false, true) => Topology::square_diagonal(),
            (false, false) => Topology::square(),
        };

        Ok(Self {
            topology,
            runs: budget,
            ..Self::default()
        })
    }

    pub fn with_runs(mut self, runs: u32) -> Self {
        self.runs = runs;
        self
    }

    pub fn with_start(mut self, x: i64, y: i64) -> Self {
        self.start = Point::new(x, y);
        self
    }

    pub fn with_step(mut self, dx: i64, dy: i64) -> Self {
        self.step = Step::new(dx, dy);
        self
    }

    pub fn with_topology(mut self, topology: Topology) -> Self {
        self.topology = topology;
        self
    }

    pub fn from_json_str(json: &str) -> SwResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> SwResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json(&self) -> SwResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
