//! Named benchmark objectives for demos and the command-line front end.
//!
//! Each function is evaluated at `(x * scale, y * scale)`. Functions whose
//! textbook minimum is zero are lifted by one so that they stay strictly
//! positive on every lattice point.

use serde::{Deserialize, Serialize};
use sw_types::{SwError, SwResult};

/// A two-dimensional test function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Objective {
    /// `(x - tx)^2 + (y - ty)^2`. Positive as long as the target is not a
    /// scaled lattice point.
    ShiftedSphere { target_x: f64, target_y: f64 },
    /// `(1 - x)^2 + 100 (y - x^2)^2 + 1`, minimum 1 at (1, 1).
    Rosenbrock,
    /// `(x^2 + y - 11)^2 + (x + y^2 - 7)^2 + 1`, four minima of value 1.
    Himmelblau,
    /// `(x + 2y - 7)^2 + (2x + y - 5)^2 + 1`, minimum 1 at (1, 3).
    Booth,
    /// `0.26 (x^2 + y^2) - 0.48 x y + 1`, minimum 1 at the origin.
    Matyas,
}

impl Objective {
    pub const NAMES: [&'static str; 5] = ["sphere", "rosenbrock", "himmelblau", "booth", "matyas"];

    /// Sphere centered on a non-lattice point.
    pub const fn sphere() -> Self {
        Self::ShiftedSphere {
            target_x: 3.3,
            target_y: 4.4,
        }
    }

    pub fn from_name(name: &str) -> SwResult<Self> {
        match name.to_ascii_lowercase().as_str() {
            "sphere" | "shifted_sphere" => Ok(Self::sphere()),
            "rosenbrock" => Ok(Self::Rosenbrock),
            "himmelblau" => Ok(Self::Himmelblau),
            "booth" => Ok(Self::Booth),
            "matyas" => Ok(Self::Matyas),
            _ => Err(SwError::UnknownObjective {
                name: name.to_string(),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::ShiftedSphere { .. } => "sphere",
            Self::Rosenbrock => "rosenbrock",
            Self::Himmelblau => "himmelblau",
            Self::Booth => "booth",
            Self::Matyas => "matyas",
        }
    }

    pub fn evaluate(&self, x: i64, y: i64, scale: f64) -> f64 {
        let x = x as f64 * scale;
        let y = y as f64 * scale;
        match *self {
            Self::ShiftedSphere { target_x, target_y } => {
                (x - target_x).powi(2) + (y - target_y).powi(2)
            }
            Self::Rosenbrock => (1.0 - x).powi(2) + 100.0 * (y - x * x).powi(2) + 1.0,
            Self::Himmelblau => (x * x + y - 11.0).powi(2) + (x + y * y - 7.0).powi(2) + 1.0,
            Self::Booth => (x + 2.0 * y - 7.0).powi(2) + (2.0 * x + y - 5.0).powi(2) + 1.0,
            Self::Matyas => 0.26 * (x * x + y * y) - 0.48 * x * y + 1.0,
        }
    }

    /// The objective as a closure over lattice coordinates.
    pub fn at_scale(self, scale: f64) -> impl Fn(i64, i64) -> f64 {
        move |x, y| self.evaluate(x, y, scale)
    }
}
