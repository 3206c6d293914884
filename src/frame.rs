//! Value types: frames, points, and the anchor/rotation helpers shared by the
//! resize and snap engines.
//!
//! A `Frame` is the un-rotated rectangle of an overlay item in monitor
//! coordinates. Rotation is carried separately by callers (in degrees) and is
//! applied about the frame center.

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

use serde::{Deserialize, Serialize};

use crate::handle::Handle;

/// A point in monitor coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Rotate this point about `center` by `angle_deg` degrees.
    ///
    /// Positive angles turn clockwise on a y-down screen.
    #[must_use]
    pub fn rotated_about(self, center: Point, angle_deg: f64) -> Point {
        let (sin, cos) = angle_deg.to_radians().sin_cos();
        let dx = self.x - center.x;
        let dy = self.y - center.y;
        Point {
            x: center.x + dx * cos - dy * sin,
            y: center.y + dx * sin + dy * cos,
        }
    }
}

/// An axis-aligned rectangle: top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Same size, shifted by `(dx, dy)`.
    #[must_use]
    pub fn translated(self, dx: f64, dy: f64) -> Frame {
        Frame { x: self.x + dx, y: self.y + dy, ..self }
    }

    /// The point that stays fixed while `handle` is dragged: the corner or
    /// edge midpoint on the opposite side of the frame.
    #[must_use]
    pub fn anchor_for(&self, handle: Handle) -> Point {
        let mid_x = self.x + self.width / 2.0;
        let mid_y = self.y + self.height / 2.0;
        match handle {
            Handle::TopLeft => Point::new(self.right(), self.bottom()),
            Handle::Top => Point::new(mid_x, self.bottom()),
            Handle::TopRight => Point::new(self.x, self.bottom()),
            Handle::Left => Point::new(self.right(), mid_y),
            Handle::Right => Point::new(self.x, mid_y),
            Handle::BottomLeft => Point::new(self.right(), self.y),
            Handle::Bottom => Point::new(mid_x, self.y),
            Handle::BottomRight => Point::new(self.x, self.y),
        }
    }

    /// Where `anchor_for(handle)` lands on screen once the frame is rotated
    /// by `angle_deg` about its own center.
    #[must_use]
    pub fn rotated_anchor(&self, handle: Handle, angle_deg: f64) -> Point {
        self.anchor_for(handle).rotated_about(self.center(), angle_deg)
    }

    /// Axis-aligned bounding box of this frame rotated by `angle_deg` about
    /// its center.
    #[must_use]
    pub fn rotated_bounds(&self, angle_deg: f64) -> Frame {
        let (sin, cos) = angle_deg.to_radians().sin_cos();
        let (sin, cos) = (sin.abs(), cos.abs());
        let width = self.width * cos + self.height * sin;
        let height = self.width * sin + self.height * cos;
        let center = self.center();
        Frame {
            x: center.x - width / 2.0,
            y: center.y - height / 2.0,
            width,
            height,
        }
    }
}
