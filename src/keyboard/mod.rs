//! Toolkit-neutral keyboard model.
//!
//! Defines the key identifier types, the modifier vocabulary, and the
//! `RawKeyEventData` trait every platform adapter implements.
//! Platform-specific decoders live under `crate::platform`.

mod keys;

pub use keys::{
    LogicalKeyboardKey, PhysicalKeyboardKey, PLANE_MASK, TOOLKIT_PLANE, UNICODE_PLANE,
    UNPRINTABLE_PLANE, VALUE_MASK, WEB_PLANE,
};

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

/// A modifier whose state a platform may report alongside a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModifierKey {
    Control,
    Shift,
    Alt,
    Meta,
    CapsLock,
    NumLock,
    ScrollLock,
    Function,
    Symbol,
}

impl ModifierKey {
    pub const ALL: [ModifierKey; 9] = [
        ModifierKey::Control,
        ModifierKey::Shift,
        ModifierKey::Alt,
        ModifierKey::Meta,
        ModifierKey::CapsLock,
        ModifierKey::NumLock,
        ModifierKey::ScrollLock,
        ModifierKey::Function,
        ModifierKey::Symbol,
    ];
}

/// Which of a pair of sided modifiers a query or report refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyboardSide {
    /// Either side, or the platform cannot tell them apart.
    Any,
    Left,
    Right,
    /// Both sides at once.
    All,
}

// ---------------------------------------------------------------------------
// Adapter trait
// ---------------------------------------------------------------------------

/// Platform-specific data carried by one raw key event.
///
/// Implementations are immutable value types; every method is a pure function
/// of the stored fields.
pub trait RawKeyEventData {
    /// Text to show for the key. Empty when the platform could not identify it.
    fn key_label(&self) -> &str;

    fn physical_key(&self) -> PhysicalKeyboardKey;

    fn logical_key(&self) -> LogicalKeyboardKey;

    /// Whether `key` is held on `side`.
    fn is_modifier_pressed(&self, key: ModifierKey, side: KeyboardSide) -> bool;

    /// Which side of `key` is held.
    fn modifier_side(&self, key: ModifierKey) -> KeyboardSide;

    fn is_control_pressed(&self) -> bool {
        self.is_modifier_pressed(ModifierKey::Control, KeyboardSide::Any)
    }

    fn is_shift_pressed(&self) -> bool {
        self.is_modifier_pressed(ModifierKey::Shift, KeyboardSide::Any)
    }

    fn is_alt_pressed(&self) -> bool {
        self.is_modifier_pressed(ModifierKey::Alt, KeyboardSide::Any)
    }

    fn is_meta_pressed(&self) -> bool {
        self.is_modifier_pressed(ModifierKey::Meta, KeyboardSide::Any)
    }

    /// Every pressed modifier with the side it is held on, in `ModifierKey::ALL` order.
    fn modifiers_pressed(&self) -> Vec<(ModifierKey, KeyboardSide)> {
        ModifierKey::ALL
            .into_iter()
            .filter(|&key| self.is_modifier_pressed(key, KeyboardSide::Any))
            .map(|key| (key, self.modifier_side(key)))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
