//! Toolkit-neutral key identifiers.
//!
//! Both key kinds are 64-bit ids. The low 32 bits hold the key value and
//! bits 32..40 hold the plane, which records who minted the id:
//!
//! - `UNICODE_PLANE`: printable logical keys (lowercase code point) and
//!   physical keys (USB HID usage, `page << 16 | usage`).
//! - `UNPRINTABLE_PLANE`: logical keys with no printable representation.
//! - `TOOLKIT_PLANE`: keys the toolkit defines itself (sided modifiers, numpad).
//! - `WEB_PLANE`: ids minted from unknown browser `KeyboardEvent.code` strings.

use std::fmt;

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

/// Bits of an id holding the key value.
pub const VALUE_MASK: u64 = 0x000_FFFF_FFFF;
/// Bits of an id holding the plane.
pub const PLANE_MASK: u64 = 0x0FF_0000_0000;

pub const UNICODE_PLANE: u64 = 0x000_0000_0000;
pub const UNPRINTABLE_PLANE: u64 = 0x001_0000_0000;
pub const TOOLKIT_PLANE: u64 = 0x002_0000_0000;
/// Reserved for ids synthesized by the web adapter.
pub const WEB_PLANE: u64 = 0x017_0000_0000;

/// Mints a web-plane id from a `KeyboardEvent.code` string.
///
/// xxh3 is seedless and specified byte-for-byte, so the result is the same
/// across calls, processes and builds. Masking to `VALUE_MASK` keeps the hash
/// out of the plane bits.
fn web_plane_id(code: &str) -> u64 {
    WEB_PLANE | (xxh3_64(code.as_bytes()) & VALUE_MASK)
}

// ---------------------------------------------------------------------------
// Physical keys
// ---------------------------------------------------------------------------

/// A key position on the keyboard, independent of layout.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhysicalKeyboardKey(u64);

impl PhysicalKeyboardKey {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Synthesizes a web-plane key for a code with no table entry.
    pub fn from_web_code(code: &str) -> Self {
        Self(web_plane_id(code))
    }

    pub const fn id(self) -> u64 {
        self.0
    }

    pub const fn plane(self) -> u64 {
        self.0 & PLANE_MASK
    }

    pub const fn value(self) -> u64 {
        self.0 & VALUE_MASK
    }

    /// The USB HID usage (`page << 16 | usage`) for table-mapped keys.
    pub const fn usb_hid_usage(self) -> u32 {
        (self.0 & VALUE_MASK) as u32
    }

    pub const fn is_web_plane(self) -> bool {
        self.plane() == WEB_PLANE
    }
}

impl fmt::Debug for PhysicalKeyboardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PhysicalKeyboardKey({:#013x})", self.0)
    }
}

impl fmt::Display for PhysicalKeyboardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#013x}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Logical keys
// ---------------------------------------------------------------------------

/// The meaning of a key under the active layout.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogicalKeyboardKey(u64);

impl LogicalKeyboardKey {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Synthesizes a web-plane key for a code with no table entry.
    pub fn from_web_code(code: &str) -> Self {
        Self(web_plane_id(code))
    }

    pub const fn id(self) -> u64 {
        self.0
    }

    pub const fn plane(self) -> u64 {
        self.0 & PLANE_MASK
    }

    pub const fn value(self) -> u64 {
        self.0 & VALUE_MASK
    }

    pub const fn is_web_plane(self) -> bool {
        self.plane() == WEB_PLANE
    }

    /// The character for unicode-plane keys, `None` for every other plane.
    pub fn printable_char(self) -> Option<char> {
        if self.plane() != UNICODE_PLANE {
            return None;
        }
        char::from_u32(self.value() as u32)
    }
}

impl fmt::Debug for LogicalKeyboardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LogicalKeyboardKey({:#013x})", self.0)
    }
}

impl fmt::Display for LogicalKeyboardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#013x}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
