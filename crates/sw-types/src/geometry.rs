use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the integer search lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`. Coordinates wrap on overflow.
    pub fn offset(self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

/// Signed step vector used to place neighbors around the current center.
///
/// A component is *collapsed* when negating it leaves it unchanged: that is
/// `0`, and also `i64::MIN` under two's complement. A collapsed component
/// disables search along its axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Step {
    pub dx: i64,
    pub dy: i64,
}

impl Step {
    pub const fn new(dx: i64, dy: i64) -> Self {
        Self { dx, dy }
    }

    /// True for `0` and `i64::MIN`.
    pub fn is_collapsed(component: i64) -> bool {
        component == component.wrapping_neg()
    }

    pub fn x_collapsed(&self) -> bool {
        Self::is_collapsed(self.dx)
    }

    pub fn y_collapsed(&self) -> bool {
        Self::is_collapsed(self.dy)
    }

    pub fn fully_collapsed(&self) -> bool {
        self.x_collapsed() && self.y_collapsed()
    }

    /// Both components divided by two, truncating toward zero.
    pub fn halved(self) -> Self {
        Self {
            dx: self.dx / 2,
            dy: self.dy / 2,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.dx, self.dy)
    }
}
