//! Resize engine: turns a drag on one of the eight handles into a new frame.
//!
//! A resize runs in two passes. The first works in un-rotated frame space and
//! moves whichever edges the handle owns, honoring aspect lock (a fixed ratio
//! or shift) and center pivot (ctrl). The second only runs for rotated
//! frames: it translates the result so the anchor point opposite the handle
//! stays at the same on-screen position once the rotation is applied.
//!
//! The free functions use [`ResizeConfig::default`]; construct a [`Resizer`]
//! to change the minimum size or rotation threshold.

#[cfg(test)]
#[path = "resize_test.rs"]
mod resize_test;

use crate::config::ResizeConfig;
use crate::consts::QUADRANT_DEG;
use crate::frame::{Frame, Point};
use crate::handle::{CursorShape, Handle, VISUAL_HANDLES};
use crate::input::Modifiers;

/// Map the handle the user grabbed to the handle it looks like on screen
/// after `rotation_deg`, for picking a cursor glyph.
///
/// The rotation is rounded to the nearest quarter turn.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn resolve_visual_handle(logical: Handle, rotation_deg: f64) -> Handle {
    let normalized = rotation_deg.rem_euclid(360.0);
    // NaN casts to 0, which keeps the identity mapping.
    let quadrant = (normalized / QUADRANT_DEG).round() as usize % 4;
    VISUAL_HANDLES[quadrant][logical.index()]
}

/// Name-based [`resolve_visual_handle`]. Unknown names come back unchanged.
#[must_use]
pub fn resolve_visual_handle_named(name: &str, rotation_deg: f64) -> &str {
    match name.parse::<Handle>() {
        Ok(handle) => resolve_visual_handle(handle, rotation_deg).name(),
        Err(_) => name,
    }
}

/// Cursor glyph for the handle called `name` on a frame rotated by
/// `rotation_deg`. Anything that is not a handle gets the plain arrow.
#[must_use]
pub fn cursor_for(name: &str, rotation_deg: f64) -> CursorShape {
    name.parse::<Handle>()
        .map_or(CursorShape::Arrow, |handle| resolve_visual_handle(handle, rotation_deg).cursor_shape())
}

/// Resize `frame` by dragging `handle` by `(dx, dy)` with default settings.
///
/// `aspect_lock` is a fixed width/height ratio, or `0` for none.
#[must_use]
pub fn compute_resize(
    handle: Handle,
    dx: f64,
    dy: f64,
    frame: Frame,
    aspect_lock: f64,
    modifiers: Modifiers,
    rotation_deg: f64,
) -> Frame {
    Resizer::default().resize(handle, Point::new(dx, dy), frame, aspect_lock, modifiers, rotation_deg)
}

/// [`compute_resize`] for a handle given by name. Unknown names leave the
/// frame untouched.
#[must_use]
pub fn compute_resize_named(
    name: &str,
    dx: f64,
    dy: f64,
    frame: Frame,
    aspect_lock: f64,
    modifiers: Modifiers,
    rotation_deg: f64,
) -> Frame {
    match name.parse::<Handle>() {
        Ok(handle) => compute_resize(handle, dx, dy, frame, aspect_lock, modifiers, rotation_deg),
        Err(e) => {
            tracing::trace!(error = %e, "resize ignored");
            frame
        }
    }
}

/// Resize engine with explicit settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Resizer {
    config: ResizeConfig,
}

impl Resizer {
    #[must_use]
    pub fn new(config: ResizeConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> ResizeConfig {
        self.config
    }

    /// Resize `frame` by dragging `handle` by `delta`.
    ///
    /// `delta` is in frame space (already divided by any display scale).
    /// `aspect_lock > 0` fixes the ratio; otherwise shift locks the frame's
    /// current ratio. Ctrl scales about the center.
    #[must_use]
    pub fn resize(
        &self,
        handle: Handle,
        delta: Point,
        frame: Frame,
        aspect_lock: f64,
        modifiers: Modifiers,
        rotation_deg: f64,
    ) -> Frame {
        let resized = self.resize_axes(handle, delta, frame, aspect_lock, modifiers);
        if rotation_deg.abs() >= self.config.rotation_epsilon_deg {
            tracing::trace!(%handle, rotation_deg, "realigning resize anchor");
            return align_to_anchor(handle, rotation_deg, resized, frame);
        }
        resized
    }

    fn resize_axes(&self, handle: Handle, delta: Point, frame: Frame, aspect_lock: f64, modifiers: Modifiers) -> Frame {
        let dir = handle.direction();
        let min = self.config.min_size;
        let ratio = aspect_ratio(frame, aspect_lock, modifiers);

        // Corners under aspect lock: x drives, y follows.
        let dx = delta.x;
        let dy = match ratio {
            Some(ratio) if handle.is_corner() => {
                if dir.same_sign() {
                    dx / ratio
                } else {
                    -dx / ratio
                }
            }
            _ => delta.y,
        };

        let mut out = frame;
        if handle.affects_x() {
            (out.x, out.width) = if modifiers.ctrl {
                pivot_axis(frame.x, frame.width, dx, dir.x, min)
            } else {
                drag_axis(frame.x, frame.width, dx, dir.x, min)
            };
        }
        if handle.affects_y() {
            (out.y, out.height) = if modifiers.ctrl {
                pivot_axis(frame.y, frame.height, dy, dir.y, min)
            } else {
                drag_axis(frame.y, frame.height, dy, dir.y, min)
            };
        }

        // Edge handles under aspect lock: the other axis follows and stays
        // centered on the original frame.
        if let Some(ratio) = ratio {
            if handle.affects_x() && !handle.affects_y() {
                out.height = (frame.height + (out.width - frame.width) / ratio).max(min);
                out.y = frame.y + (frame.height - out.height) / 2.0;
            } else if handle.affects_y() && !handle.affects_x() {
                out.width = (frame.width + (out.height - frame.height) * ratio).max(min);
                out.x = frame.x + (frame.width - out.width) / 2.0;
            }
        }

        out
    }
}

/// Ratio to hold during this resize, if any.
fn aspect_ratio(frame: Frame, aspect_lock: f64, modifiers: Modifiers) -> Option<f64> {
    let ratio = if aspect_lock > 0.0 {
        aspect_lock
    } else if modifiers.shift {
        frame.width / frame.height
    } else {
        return None;
    };
    (ratio.is_finite() && ratio > 0.0).then_some(ratio)
}

/// Move one side of an axis. Returns the new `(origin, size)`.
///
/// A low-side handle moves the origin by the full delta; a high-side handle
/// only changes the size. Only the size is floored.
fn drag_axis(origin: f64, size: f64, delta: f64, dir: i8, min: f64) -> (f64, f64) {
    if dir < 0 {
        (origin + delta, (size - delta).max(min))
    } else {
        (origin, (size + delta).max(min))
    }
}

/// Grow or shrink an axis symmetrically about its center. Only the size is
/// floored, so a clamped pivot drifts off center.
fn pivot_axis(origin: f64, size: f64, delta: f64, dir: i8, min: f64) -> (f64, f64) {
    let grow = delta * f64::from(dir);
    (origin - grow, (size + 2.0 * grow).max(min))
}

/// Translate `resized` so the anchor of `handle`, rotated about each frame's
/// own center, lands where it did on `original`.
fn align_to_anchor(handle: Handle, rotation_deg: f64, resized: Frame, original: Frame) -> Frame {
    let before = original.rotated_anchor(handle, rotation_deg);
    let after = resized.rotated_anchor(handle, rotation_deg);
    resized.translated(before.x - after.x, before.y - after.y)
}
