//! Axis-aligned rectangular extents.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Position, TINY};
use crate::units::Length;

/// The 2D rectangular extent of something.
///
/// A window is either empty (undefined) or holds a south-west and a
/// north-east corner with `min.x <= max.x` and `min.y <= max.y`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Window {
    corners: Option<(Position, Position)>,
}

impl Window {
    /// Creates an empty window.
    pub fn new() -> Self {
        Self { corners: None }
    }

    /// Creates a window enclosing a pair of positions.
    pub fn from_positions(a: &Position, b: &Position) -> Self {
        let mut w = Self::new();
        w.union_position(a);
        w.union_position(b);
        w
    }

    /// Creates a window that only covers `p`.
    pub fn from_position(p: &Position) -> Self {
        Self::from_positions(p, p)
    }

    /// Creates the bounding box of `points` (empty if there are none).
    pub fn from_points(points: &[Position]) -> Self {
        let mut w = Self::new();
        for p in points {
            w.union_position(p);
        }
        w
    }

    /// Creates a square window of side `size` centred on `center`.
    pub fn around(center: &Position, size: f64) -> Self {
        let half = size * 0.5;
        Self::from_positions(
            &Position::new(center.x - half, center.y - half),
            &Position::new(center.x + half, center.y + half),
        )
    }

    /// The area common to two windows. The result is empty if they do not
    /// overlap, or if either of them is empty.
    pub fn intersection(e1: &Window, e2: &Window) -> Self {
        let (Some((min1, max1)), Some((min2, max2))) = (e1.corners, e2.corners) else {
            return Self::new();
        };
        let min = Position::new(min1.x.max(min2.x), min1.y.max(min2.y));
        let max = Position::new(max1.x.min(max2.x), max1.y.min(max2.y));
        if min.x > max.x || min.y > max.y {
            Self::new()
        } else {
            Self {
                corners: Some((min, max)),
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.corners.is_none()
    }

    pub fn set_empty(&mut self) {
        self.corners = None;
    }

    /// The south-west corner.
    pub fn min(&self) -> Option<Position> {
        self.corners.map(|(min, _)| min)
    }

    /// The north-east corner.
    pub fn max(&self) -> Option<Position> {
        self.corners.map(|(_, max)| max)
    }

    pub fn width(&self) -> Option<f64> {
        self.corners.map(|(min, max)| max.x - min.x)
    }

    pub fn height(&self) -> Option<f64> {
        self.corners.map(|(min, max)| max.y - min.y)
    }

    pub fn center(&self) -> Option<Position> {
        self.corners
            .map(|(min, max)| Position::new((min.x + max.x) * 0.5, (min.y + max.y) * 0.5))
    }

    /// Does this window only cover a point in space?
    pub fn is_point(&self) -> bool {
        match (self.width(), self.height()) {
            (Some(w), Some(h)) => w < TINY && h < TINY,
            _ => false,
        }
    }

    /// Grows this window to include `(x, y)`, initialising it if empty.
    pub fn union(&mut self, x: f64, y: f64) {
        match &mut self.corners {
            None => self.corners = Some((Position::new(x, y), Position::new(x, y))),
            Some((min, max)) => {
                min.x = min.x.min(x);
                min.y = min.y.min(y);
                max.x = max.x.max(x);
                max.y = max.y.max(y);
            }
        }
    }

    pub fn union_position(&mut self, p: &Position) {
        self.union(p.x, p.y);
    }

    pub fn union_window(&mut self, other: &Window) {
        if let Some((min, max)) = other.corners {
            self.union_position(&min);
            self.union_position(&max);
        }
    }

    /// Checks if two windows overlap or touch.
    pub fn is_overlap(&self, other: &Window) -> bool {
        let (Some((min1, max1)), Some((min2, max2))) = (self.corners, other.corners) else {
            return false;
        };
        !(min1.x.max(min2.x) > max1.x.min(max2.x) || min1.y.max(min2.y) > max1.y.min(max2.y))
    }

    /// Checks whether a position falls inside (or on the edge of) this window.
    pub fn is_overlap_position(&self, p: &Position) -> bool {
        match self.corners {
            Some((min, max)) => p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y,
            None => false,
        }
    }

    /// Checks whether this window lies entirely within `other`.
    pub fn is_enclosed_by(&self, other: &Window) -> bool {
        let (Some((min, max)), Some((omin, omax))) = (self.corners, other.corners) else {
            return false;
        };
        omin.x <= min.x && omin.y <= min.y && omax.x >= max.x && omax.y >= max.y
    }

    /// Expands this window about its centre. A factor of `0.1` adds a 10%
    /// margin on every side; negative factors shrink, but never below zero
    /// width or height.
    pub fn expand(&mut self, factor: f64) {
        let (Some(center), Some(mut dx), Some(mut dy)) = (self.center(), self.width(), self.height())
        else {
            return;
        };
        dx += dx * factor * 2.0;
        dy += dy * factor * 2.0;
        if factor < 0.0 {
            dx = dx.max(0.0);
            dy = dy.max(0.0);
        }
        let min = Position::new(center.x - dx * 0.5, center.y - dy * 0.5);
        let max = Position::new(min.x + dx, min.y + dy);
        self.corners = Some((min, max));
    }

    /// Adds a fixed margin on every side. If a negative margin inverts an
    /// axis, that axis collapses to its midpoint.
    pub fn expand_by_length(&mut self, margin: Length) {
        let Some((min, max)) = &mut self.corners else {
            return;
        };
        let value = margin.meters();
        min.x -= value;
        min.y -= value;
        max.x += value;
        max.y += value;

        if value < 0.0 {
            if min.x > max.x {
                let mid = 0.5 * (min.x + max.x);
                min.x = mid;
                max.x = mid;
            }
            if min.y > max.y {
                let mid = 0.5 * (min.y + max.y);
                min.y = mid;
                max.y = mid;
            }
        }
    }

    /// Translates this window.
    pub fn shift(&mut self, dx: f64, dy: f64) {
        if let Some((min, max)) = &mut self.corners {
            min.x += dx;
            min.y += dy;
            max.x += dx;
            max.y += dy;
        }
    }
}

impl PartialEq for Window {
    fn eq(&self, other: &Self) -> bool {
        match (self.corners, other.corners) {
            (None, None) => true,
            (Some((min1, max1)), Some((min2, max2))) => {
                min1.is_at(&min2, TINY) && max1.is_at(&max2, TINY)
            }
            _ => false,
        }
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.corners {
            Some((min, max)) => write!(
                f,
                "Min [{:.3}E, {:.3}N]  Max [{:.3}E, {:.3}N]",
                min.x, min.y, max.x, max.y
            ),
            None => f.write_str("(empty)"),
        }
    }
}
