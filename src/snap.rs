//! Snap engine: pulls points and frame edges onto a grid.
//!
//! DESIGN
//! ======
//! Each axis is handled on its own. A coordinate snaps to the nearest grid
//! line when it is within `max(grid.h, grid.v) * threshold_ratio` of it; a
//! distance exactly at the threshold still snaps.
//!
//! All work happens in scaled (display) space: a coordinate `v` becomes
//! `v * scale`, snaps against the grid there, and maps back with `/ scale`.
//! The unscaled entry points are the scaled ones at [`Scale::IDENTITY`].
//!
//! TRADE-OFFS
//! ==========
//! Resize snapping is axis-aligned only. For a rotated frame the edges no
//! longer lie on grid axes, so `resize_rect` hands the frame back untouched.
//! Move snapping does handle rotation, by snapping the rotated bounding box
//! and translating the real frame by the same offset.

#[cfg(test)]
#[path = "snap_test.rs"]
mod snap_test;

use crate::config::SnapConfig;
use crate::frame::{Frame, Point};
use crate::handle::Handle;

/// Grid spacing: `h` between vertical lines (x axis), `v` between
/// horizontal lines (y axis).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    pub h: f64,
    pub v: f64,
}

impl Grid {
    #[must_use]
    pub fn new(h: f64, v: f64) -> Self {
        Self { h, v }
    }
}

/// Frame-to-display scale factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub x: f64,
    pub y: f64,
}

impl Scale {
    pub const IDENTITY: Scale = Scale { x: 1.0, y: 1.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unusable components (zero, negative, non-finite) fall back to 1.
    fn sanitized(self) -> Scale {
        let fix = |s: f64| if s.is_finite() && s > 0.0 { s } else { 1.0 };
        Scale { x: fix(self.x), y: fix(self.y) }
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// =============================================================================
// FREE FUNCTIONS (default settings)
// =============================================================================

/// Snap a point to the grid, each axis independently.
#[must_use]
pub fn snap_point(point: Point, grid_h: f64, grid_v: f64) -> Point {
    Snapper::default().point(point, Grid::new(grid_h, grid_v), Scale::IDENTITY)
}

/// [`snap_point`] with the grid expressed in scaled space.
#[must_use]
pub fn snap_point_scaled(point: Point, grid_h: f64, grid_v: f64, scale_x: f64, scale_y: f64) -> Point {
    Snapper::default().point(point, Grid::new(grid_h, grid_v), Scale::new(scale_x, scale_y))
}

/// Snap the edges moved by `handle` after a resize.
#[must_use]
pub fn snapped_resize_rect(frame: Frame, rotation_deg: f64, handle: Handle, grid_h: f64, grid_v: f64) -> Frame {
    Snapper::default().resize_rect(frame, rotation_deg, handle, Grid::new(grid_h, grid_v), Scale::IDENTITY)
}

/// [`snapped_resize_rect`] with the grid expressed in scaled space.
#[must_use]
pub fn snapped_resize_rect_scaled(
    frame: Frame,
    rotation_deg: f64,
    handle: Handle,
    grid_h: f64,
    grid_v: f64,
    scale_x: f64,
    scale_y: f64,
) -> Frame {
    Snapper::default().resize_rect(frame, rotation_deg, handle, Grid::new(grid_h, grid_v), Scale::new(scale_x, scale_y))
}

/// Snap a moved frame so its (rotated) bounding box meets the grid.
#[must_use]
pub fn snapped_rect(frame: Frame, rotation_deg: f64, grid_h: f64, grid_v: f64) -> Frame {
    Snapper::default().move_rect(frame, rotation_deg, Grid::new(grid_h, grid_v), Scale::IDENTITY)
}

/// [`snapped_rect`] with the grid expressed in scaled space.
#[must_use]
pub fn snapped_rect_scaled(
    frame: Frame,
    rotation_deg: f64,
    grid_h: f64,
    grid_v: f64,
    scale_x: f64,
    scale_y: f64,
) -> Frame {
    Snapper::default().move_rect(frame, rotation_deg, Grid::new(grid_h, grid_v), Scale::new(scale_x, scale_y))
}

// =============================================================================
// SNAPPER
// =============================================================================

/// Snap engine with explicit settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Snapper {
    config: SnapConfig,
}

impl Snapper {
    #[must_use]
    pub fn new(config: SnapConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> SnapConfig {
        self.config
    }

    /// Maximum distance (in scaled space) at which a coordinate snaps.
    #[must_use]
    pub fn threshold(&self, grid: Grid) -> f64 {
        grid.h.max(grid.v) * self.config.threshold_ratio
    }

    #[must_use]
    pub fn point(&self, point: Point, grid: Grid, scale: Scale) -> Point {
        let scale = scale.sanitized();
        let threshold = self.threshold(grid);
        Point {
            x: snap_axis(point.x * scale.x, grid.h, threshold).map_or(point.x, |x| x / scale.x),
            y: snap_axis(point.y * scale.y, grid.v, threshold).map_or(point.y, |y| y / scale.y),
        }
    }

    /// Snap the sides of `frame` that `handle` moves, keeping the opposite
    /// sides fixed. Rotated frames are returned unchanged.
    #[must_use]
    pub fn resize_rect(&self, frame: Frame, rotation_deg: f64, handle: Handle, grid: Grid, scale: Scale) -> Frame {
        if rotation_deg.abs() > self.config.rotation_epsilon_deg {
            tracing::debug!(rotation_deg, "resize snapping skipped for rotated frame");
            return frame;
        }

        let scale = scale.sanitized();
        let threshold = self.threshold(grid);
        let min = self.config.min_size;
        let dir = handle.direction();
        let mut out = frame;

        if dir.x < 0 {
            if let Some(left) = snap_axis(frame.x * scale.x, grid.h, threshold) {
                (out.x, out.width) = snap_low_side(left / scale.x, frame.right(), min);
            }
        } else if dir.x > 0 {
            if let Some(right) = snap_axis(frame.right() * scale.x, grid.h, threshold) {
                out.width = (right / scale.x - frame.x).max(min);
            }
        }

        if dir.y < 0 {
            if let Some(top) = snap_axis(frame.y * scale.y, grid.v, threshold) {
                (out.y, out.height) = snap_low_side(top / scale.y, frame.bottom(), min);
            }
        } else if dir.y > 0 {
            if let Some(bottom) = snap_axis(frame.bottom() * scale.y, grid.v, threshold) {
                out.height = (bottom / scale.y - frame.y).max(min);
            }
        }

        out
    }

    /// Snap a moved frame. The rotated bounding box picks the offset; the
    /// frame itself is only translated.
    #[must_use]
    pub fn move_rect(&self, frame: Frame, rotation_deg: f64, grid: Grid, scale: Scale) -> Frame {
        let scale = scale.sanitized();
        let threshold = self.threshold(grid);
        let bounds = frame.rotated_bounds(rotation_deg);

        let dx = edge_offset(bounds.x * scale.x, bounds.right() * scale.x, grid.h, threshold).map(|dx| dx / scale.x);
        let dy = edge_offset(bounds.y * scale.y, bounds.bottom() * scale.y, grid.v, threshold).map(|dy| dy / scale.y);
        if dx.is_none() && dy.is_none() {
            return frame;
        }

        tracing::trace!(?dx, ?dy, "move snapped to grid");
        frame.translated(dx.unwrap_or_default(), dy.unwrap_or_default())
    }
}

// =============================================================================
// AXIS HELPERS
// =============================================================================

/// Nearest grid line to `value`, or `None` when the grid is disabled on this
/// axis.
fn nearest_line(value: f64, grid: f64) -> Option<f64> {
    (grid > 0.0).then(|| (value / grid).round() * grid)
}

/// The grid line `value` snaps to, if one is within `threshold`.
fn snap_axis(value: f64, grid: f64, threshold: f64) -> Option<f64> {
    nearest_line(value, grid).filter(|line| (line - value).abs() <= threshold)
}

/// Offset that brings the closer of two edges onto the grid, if within
/// `threshold`. The low edge wins ties.
fn edge_offset(low: f64, high: f64, grid: f64, threshold: f64) -> Option<f64> {
    let low_offset = nearest_line(low, grid)? - low;
    let high_offset = nearest_line(high, grid)? - high;
    let offset = if low_offset.abs() <= high_offset.abs() { low_offset } else { high_offset };
    (offset.abs() <= threshold).then_some(offset)
}

/// New `(origin, size)` after snapping the low side to `edge` while `far`
/// stays put.
fn snap_low_side(edge: f64, far: f64, min: f64) -> (f64, f64) {
    let size = far - edge;
    if size < min { (far - min, min) } else { (edge, size) }
}
