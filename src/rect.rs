//! Rectangles.

use cgmath::{EuclideanSpace, Point2, Vector2};
use serde::{Deserialize, Serialize};
use std::ops;

/// A rectangle.
///
/// The y-axis points down, so `min_y` is the top edge and `max_y` the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Rectangle origin.
    pub origin: Point2<f64>,

    /// Rectangle size.
    pub size: Vector2<f64>,
}

impl Rect {
    /// Creates a new rectangle from its components.
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Rect {
        Rect {
            origin: Point2::new(x, y),
            size: Vector2::new(width, height),
        }
    }

    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.x
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.y
    }

    pub fn width(&self) -> f64 {
        self.size.x
    }

    pub fn height(&self) -> f64 {
        self.size.y
    }

    /// Returns width / height.
    pub fn aspect_ratio(&self) -> f64 {
        self.size.x / self.size.y
    }

    /// Returns true if the two rectangles intersect.
    ///
    /// Rectangles that only share an edge do not intersect.
    pub fn intersects(&self, rect: Rect) -> bool {
        self.origin.x < rect.max_x()
            && self.origin.y < rect.max_y()
            && rect.origin.x < self.max_x()
            && rect.origin.y < self.max_y()
    }

    /// Returns a new rectangle inset by the specified amount on each side.
    pub fn inset(&self, horiz: f64, vert: f64) -> Rect {
        Rect {
            origin: (self.origin.x + horiz, self.origin.y + vert).into(),
            size: (self.size.x - 2. * horiz, self.size.y - 2. * vert).into(),
        }
    }

    /// Returns a new rectangle moved by the specified amount.
    pub fn offset(&self, dx: f64, dy: f64) -> Rect {
        *self + Point2::new(dx, dy)
    }

    /// Returns a new rectangle with the same origin and width, and a height derived from the
    /// width so that `width / height == ratio`.
    pub fn with_height_for_ratio(&self, ratio: f64) -> Rect {
        Rect {
            origin: self.origin,
            size: (self.size.x, self.size.x / ratio).into(),
        }
    }
}

impl ops::Add<Point2<f64>> for Rect {
    type Output = Rect;
    fn add(self, point: Point2<f64>) -> Rect {
        Rect {
            origin: self.origin + point.to_vec(),
            size: self.size,
        }
    }
}
