//! The eight resize handles and their fixed lookup tables.
//!
//! Every table here is a `const` array indexed by [`Handle::index`], so the
//! handle ring is defined once and never mutated. The visual-remap tables are
//! written out literally per quadrant rather than derived from a rotation of
//! the ring.

#[cfg(test)]
#[path = "handle_test.rs"]
mod handle_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A grab point on the border of a selection frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Handle {
    TopLeft,
    Top,
    TopRight,
    Left,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

/// Per-axis multiplier for a handle: -1 for the low side, +1 for the high
/// side, 0 when the handle does not touch that axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Direction {
    pub x: i8,
    pub y: i8,
}

impl Direction {
    /// Direction used for names that do not identify a handle.
    pub const ZERO: Direction = Direction { x: 0, y: 0 };

    const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Both multipliers carry the same sign (top-left / bottom-right diagonal).
    #[must_use]
    pub fn same_sign(self) -> bool {
        i16::from(self.x) * i16::from(self.y) > 0
    }
}

/// Resize cursor glyph for a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorShape {
    /// `\` diagonal.
    SizeFDiag,
    /// Vertical arrows.
    SizeVer,
    /// `/` diagonal.
    SizeBDiag,
    /// Horizontal arrows.
    SizeHor,
    /// Plain pointer, for anything that is not a handle.
    Arrow,
}

/// Error returned by [`Handle::from_str`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown resize handle: {0:?}")]
pub struct ParseHandleError(pub String);

const DIRECTIONS: [Direction; 8] = [
    Direction::new(-1, -1),
    Direction::new(0, -1),
    Direction::new(1, -1),
    Direction::new(-1, 0),
    Direction::new(1, 0),
    Direction::new(-1, 1),
    Direction::new(0, 1),
    Direction::new(1, 1),
];

const CURSOR_SHAPES: [CursorShape; 8] = [
    CursorShape::SizeFDiag,
    CursorShape::SizeVer,
    CursorShape::SizeBDiag,
    CursorShape::SizeHor,
    CursorShape::SizeHor,
    CursorShape::SizeBDiag,
    CursorShape::SizeVer,
    CursorShape::SizeFDiag,
];

const NAMES: [&str; 8] = [
    "TOP_LEFT",
    "TOP",
    "TOP_RIGHT",
    "LEFT",
    "RIGHT",
    "BOTTOM_LEFT",
    "BOTTOM",
    "BOTTOM_RIGHT",
];

/// Visual handle per rotation quadrant (0°, 90°, 180°, 270°), indexed by the
/// logical handle.
pub(crate) const VISUAL_HANDLES: [[Handle; 8]; 4] = {
    use Handle as H;
    [
        [H::TopLeft, H::Top, H::TopRight, H::Left, H::Right, H::BottomLeft, H::Bottom, H::BottomRight],
        [H::TopRight, H::Right, H::BottomRight, H::Top, H::Bottom, H::TopLeft, H::Left, H::BottomLeft],
        [H::BottomRight, H::Bottom, H::BottomLeft, H::Right, H::Left, H::TopRight, H::Top, H::TopLeft],
        [H::BottomLeft, H::Left, H::TopLeft, H::Bottom, H::Top, H::BottomRight, H::Right, H::TopRight],
    ]
};

impl Handle {
    /// All handles in table order.
    pub const ALL: [Handle; 8] = [
        Handle::TopLeft,
        Handle::Top,
        Handle::TopRight,
        Handle::Left,
        Handle::Right,
        Handle::BottomLeft,
        Handle::Bottom,
        Handle::BottomRight,
    ];

    /// Position of this handle in the lookup tables.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::TopLeft => 0,
            Self::Top => 1,
            Self::TopRight => 2,
            Self::Left => 3,
            Self::Right => 4,
            Self::BottomLeft => 5,
            Self::Bottom => 6,
            Self::BottomRight => 7,
        }
    }

    #[must_use]
    pub fn direction(self) -> Direction {
        DIRECTIONS[self.index()]
    }

    #[must_use]
    pub fn cursor_shape(self) -> CursorShape {
        CURSOR_SHAPES[self.index()]
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        NAMES[self.index()]
    }

    #[must_use]
    pub fn is_corner(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight | Self::BottomLeft | Self::BottomRight)
    }

    /// Whether dragging this handle changes the horizontal extent.
    #[must_use]
    pub fn affects_x(self) -> bool {
        self.direction().x != 0
    }

    /// Whether dragging this handle changes the vertical extent.
    #[must_use]
    pub fn affects_y(self) -> bool {
        self.direction().y != 0
    }

    /// Direction for a handle given by name; unknown names get
    /// [`Direction::ZERO`].
    #[must_use]
    pub fn direction_of(name: &str) -> Direction {
        name.parse::<Handle>().map_or(Direction::ZERO, Handle::direction)
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Handle {
    type Err = ParseHandleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NAMES
            .iter()
            .position(|name| *name == s)
            .map(|i| Handle::ALL[i])
            .ok_or_else(|| ParseHandleError(s.to_owned()))
    }
}
