//! Shared numeric constants for the geometry crate.

// ── Resize ──────────────────────────────────────────────────────

/// Smallest width or height a resize is allowed to produce.
pub const MIN_FRAME_SIZE: f64 = 1.0;

/// Rotations smaller than this (in degrees) are treated as unrotated.
pub const ROTATION_EPSILON_DEG: f64 = 0.1;

/// Angular width of one cursor-remap quadrant.
pub const QUADRANT_DEG: f64 = 90.0;

// ── Snapping ────────────────────────────────────────────────────

/// Snap threshold as a fraction of the larger grid spacing.
pub const SNAP_THRESHOLD_RATIO: f64 = 0.3;

// ── Modifier bits ───────────────────────────────────────────────
//
// Bit layout of the host toolkit's keyboard-modifier mask.

/// Shift held: lock aspect ratio.
pub const SHIFT_BIT: u32 = 0x0200_0000;

/// Ctrl held: scale about the frame center.
pub const CTRL_BIT: u32 = 0x0400_0000;

/// Alt / Option held.
pub const ALT_BIT: u32 = 0x0800_0000;

/// Meta / Command held.
pub const META_BIT: u32 = 0x1000_0000;
