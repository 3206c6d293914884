//! Modifier keys held during a drag.
//!
//! The geometry never reads live keyboard state; the host passes in whatever
//! it saw on the pointer event, either as a `Modifiers` value or as the
//! toolkit's raw bitmask via [`Modifiers::from_bits`].

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::consts::{ALT_BIT, CTRL_BIT, META_BIT, SHIFT_BIT};

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Shift key is held. Locks the aspect ratio while resizing.
    pub shift: bool,
    /// Ctrl key is held. Resizes about the frame center.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { shift: false, ctrl: false, alt: false, meta: false };

    /// Decode the host toolkit's modifier bitmask. Unknown bits are ignored.
    #[must_use]
    pub fn from_bits(bits: u32) -> Self {
        Self {
            shift: bits & SHIFT_BIT != 0,
            ctrl: bits & CTRL_BIT != 0,
            alt: bits & ALT_BIT != 0,
            meta: bits & META_BIT != 0,
        }
    }

    /// Encode back into the host toolkit's bitmask.
    #[must_use]
    pub fn bits(self) -> u32 {
        let mut bits = 0;
        if self.shift {
            bits |= SHIFT_BIT;
        }
        if self.ctrl {
            bits |= CTRL_BIT;
        }
        if self.alt {
            bits |= ALT_BIT;
        }
        if self.meta {
            bits |= META_BIT;
        }
        bits
    }
}
