//! Frame geometry for the monitor overlay of a video editor.
//!
//! The monitor draws a selection rectangle over the picture with eight resize
//! handles, a rotation, and an optional snapping grid. This crate owns the
//! math behind that overlay and nothing else: callers hand in plain frames,
//! deltas, angles and grid spacings, and get plain frames back. There is no
//! state, no rendering, and no event handling here; the host GUI layer wires
//! pointer events to these functions and commits the result to its model.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`frame`] | `Frame` / `Point` value types, anchors, rotation about a center |
//! | [`handle`] | The eight resize handles and their fixed lookup tables |
//! | [`input`] | Modifier keys held during a drag |
//! | [`resize`] | Handle-driven resizing with aspect lock, center pivot and rotation |
//! | [`snap`] | Grid snapping for moves and resizes, optionally in scaled space |
//! | [`migrate`] | Versioned effect-parameter upgrade/downgrade rules |
//! | [`config`] | Tunables for the resize and snap engines |
//! | [`consts`] | Shared numeric constants (minimum size, thresholds, modifier bits) |

pub mod config;
pub mod consts;
pub mod frame;
pub mod handle;
pub mod input;
pub mod migrate;
pub mod resize;
pub mod snap;

pub use config::{ConfigError, GeometryConfig, ResizeConfig, SnapConfig};
pub use frame::{Frame, Point};
pub use handle::{CursorShape, Direction, Handle, ParseHandleError};
pub use input::Modifiers;
pub use migrate::{EffectMigrations, MigrationDirection, MigrationError, ParamMigrations};
pub use resize::{Resizer, compute_resize, cursor_for, resolve_visual_handle};
pub use snap::{Grid, Scale, Snapper, snap_point, snapped_rect, snapped_resize_rect};
