//! Web platform backend.
//!
//! Decodes the fields of a browser `KeyboardEvent` (`code`, `key`,
//! `location`) plus the embedder's modifier bitmask into toolkit keys.
//!
//! The browser reports modifier state without side information and never
//! reports Fn or Symbol, so those queries have fixed answers here.

pub mod keycodes;

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::keyboard::{
    KeyboardSide, LogicalKeyboardKey, ModifierKey, PhysicalKeyboardKey, RawKeyEventData,
};
use keycodes::{BuiltinWebTables, WebKeyTables};

// ---------------------------------------------------------------------------
// Modifier bits
// ---------------------------------------------------------------------------

/// `metaState` bit for Shift.
pub const MODIFIER_SHIFT: u32 = 0x01;
/// `metaState` bit for Alt.
pub const MODIFIER_ALT: u32 = 0x02;
/// `metaState` bit for Control.
pub const MODIFIER_CONTROL: u32 = 0x04;
/// `metaState` bit for Meta (Command / Windows).
pub const MODIFIER_META: u32 = 0x08;
/// `metaState` bit for Num Lock.
pub const MODIFIER_NUM_LOCK: u32 = 0x10;
/// `metaState` bit for Caps Lock.
pub const MODIFIER_CAPS_LOCK: u32 = 0x20;
/// `metaState` bit for Scroll Lock.
pub const MODIFIER_SCROLL_LOCK: u32 = 0x40;

/// Returns the `metaState` bit for `key`, or `None` if the browser never reports it.
pub const fn modifier_mask(key: ModifierKey) -> Option<u32> {
    match key {
        ModifierKey::Control => Some(MODIFIER_CONTROL),
        ModifierKey::Shift => Some(MODIFIER_SHIFT),
        ModifierKey::Alt => Some(MODIFIER_ALT),
        ModifierKey::Meta => Some(MODIFIER_META),
        ModifierKey::NumLock => Some(MODIFIER_NUM_LOCK),
        ModifierKey::CapsLock => Some(MODIFIER_CAPS_LOCK),
        ModifierKey::ScrollLock => Some(MODIFIER_SCROLL_LOCK),
        ModifierKey::Function | ModifierKey::Symbol => None,
    }
}

/// The browser sends this `key` when it cannot identify the key.
const UNIDENTIFIED_KEY: &str = "Unidentified";

// ---------------------------------------------------------------------------
// Key location
// ---------------------------------------------------------------------------

/// `KeyboardEvent.location` values defined by the DOM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyLocation {
    Standard,
    Left,
    Right,
    Numpad,
    /// Any value the DOM does not define.
    Unknown(u32),
}

impl From<u32> for KeyLocation {
    fn from(location: u32) -> Self {
        match location {
            0 => KeyLocation::Standard,
            1 => KeyLocation::Left,
            2 => KeyLocation::Right,
            3 => KeyLocation::Numpad,
            other => KeyLocation::Unknown(other),
        }
    }
}

// ---------------------------------------------------------------------------
// Event data
// ---------------------------------------------------------------------------

/// Platform data for one browser key event.
///
/// Immutable once built. `location` and `meta_state` default to 0; a
/// deserialized event without `code` or `key` is rejected by serde.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WebKeyEventData {
    code: String,
    key: String,
    #[serde(default)]
    location: u32,
    #[serde(default)]
    meta_state: u32,
}

impl WebKeyEventData {
    pub fn new(code: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            key: key.into(),
            location: 0,
            meta_state: 0,
        }
    }

    pub fn with_location(mut self, location: u32) -> Self {
        self.location = location;
        self
    }

    pub fn with_meta_state(mut self, meta_state: u32) -> Self {
        self.meta_state = meta_state;
        self
    }

    /// The layout-independent `KeyboardEvent.code`.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The layout-aware `KeyboardEvent.key`.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn location(&self) -> u32 {
        self.location
    }

    pub fn meta_state(&self) -> u32 {
        self.meta_state
    }

    pub fn key_location(&self) -> KeyLocation {
        KeyLocation::from(self.location)
    }

    /// Resolves the physical key against `tables`, minting a web-plane key
    /// when `code` has no entry.
    pub fn physical_key_in<T: WebKeyTables + ?Sized>(&self, tables: &T) -> PhysicalKeyboardKey {
        tables.physical(&self.code).unwrap_or_else(|| {
            let key = PhysicalKeyboardKey::from_web_code(&self.code);
            log::debug!("web: no physical key for code {:?}, minted {key}", self.code);
            key
        })
    }

    /// Resolves the logical key against `tables`.
    ///
    /// Order: numpad table, general table, web-plane synthesis.
    pub fn logical_key_in<T: WebKeyTables + ?Sized>(&self, tables: &T) -> LogicalKeyboardKey {
        if let Some(key) = tables.numpad(&self.code) {
            return key;
        }
        if let Some(key) = tables.logical(&self.code) {
            return key;
        }
        let key = LogicalKeyboardKey::from_web_code(&self.code);
        log::debug!("web: no logical key for code {:?}, minted {key}", self.code);
        key
    }
}

impl RawKeyEventData for WebKeyEventData {
    fn key_label(&self) -> &str {
        if self.key == UNIDENTIFIED_KEY {
            ""
        } else {
            &self.key
        }
    }

    fn physical_key(&self) -> PhysicalKeyboardKey {
        self.physical_key_in(&BuiltinWebTables)
    }

    fn logical_key(&self) -> LogicalKeyboardKey {
        self.logical_key_in(&BuiltinWebTables)
    }

    /// `side` is ignored: the browser does not say which side is held.
    fn is_modifier_pressed(&self, key: ModifierKey, _side: KeyboardSide) -> bool {
        modifier_mask(key).is_some_and(|mask| self.meta_state & mask != 0)
    }

    fn modifier_side(&self, _key: ModifierKey) -> KeyboardSide {
        KeyboardSide::Any
    }
}

impl PartialEq for WebKeyEventData {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
            || (self.code == other.code
                && self.key == other.key
                && self.location == other.location
                && self.meta_state == other.meta_state)
    }
}

impl Eq for WebKeyEventData {}

impl Hash for WebKeyEventData {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
        self.key.hash(state);
        self.location.hash(state);
        self.meta_state.hash(state);
    }
}

impl fmt::Debug for WebKeyEventData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebKeyEventData")
            .field("code", &self.code)
            .field("key", &self.key)
            .field("location", &self.location)
            .field("meta_state", &format_args!("{:#04x}", self.meta_state))
            .finish()
    }
}

impl fmt::Display for WebKeyEventData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "code: {}, key: {}, location: {}, metaState: {:#04x}",
            self.code, self.key, self.location, self.meta_state
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(data: &WebKeyEventData) -> u64 {
        let mut hasher = DefaultHasher::new();
        data.hash(&mut hasher);
        hasher.finish()
    }

    /// Tables where a numpad code is present in both the numpad and general
    /// lookups, with different answers.
    struct OverlappingTables;

    const NUMPAD_DECIMAL: LogicalKeyboardKey = LogicalKeyboardKey::new(0x002_0000_022e);
    const PERIOD: LogicalKeyboardKey = LogicalKeyboardKey::new(0x2e);

    impl WebKeyTables for OverlappingTables {
        fn physical(&self, _code: &str) -> Option<PhysicalKeyboardKey> {
            None
        }

        fn logical(&self, code: &str) -> Option<LogicalKeyboardKey> {
            (code == "NumpadDecimal" || code == "Period").then_some(PERIOD)
        }

        fn numpad(&self, code: &str) -> Option<LogicalKeyboardKey> {
            (code == "NumpadDecimal").then_some(NUMPAD_DECIMAL)
        }
    }

    // --- construction and equality ---

    #[test]
    fn new_defaults_location_and_meta_state() {
        let data = WebKeyEventData::new("KeyA", "a");
        assert_eq!(data.code(), "KeyA");
        assert_eq!(data.key(), "a");
        assert_eq!(data.location(), 0);
        assert_eq!(data.meta_state(), 0);
    }

    #[test]
    fn equal_fields_compare_and_hash_equal() {
        let a = WebKeyEventData::new("KeyA", "A").with_location(0).with_meta_state(0x01);
        let b = WebKeyEventData::new("KeyA", "A").with_meta_state(0x01);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn any_single_field_difference_breaks_equality() {
        let base = WebKeyEventData::new("KeyA", "a").with_location(1).with_meta_state(0x04);
        assert_ne!(base, WebKeyEventData::new("KeyB", "a").with_location(1).with_meta_state(0x04));
        assert_ne!(base, WebKeyEventData::new("KeyA", "b").with_location(1).with_meta_state(0x04));
        assert_ne!(base, WebKeyEventData::new("KeyA", "a").with_location(2).with_meta_state(0x04));
        assert_ne!(base, WebKeyEventData::new("KeyA", "a").with_location(1).with_meta_state(0x05));
    }

    #[test]
    #[allow(clippy::eq_op)]
    fn equality_is_reflexive() {
        let data = WebKeyEventData::new("Enter", "Enter");
        assert_eq!(data, data);
    }

    // --- key label ---

    #[test]
    fn unidentified_key_has_empty_label() {
        assert_eq!(WebKeyEventData::new("KeyA", "Unidentified").key_label(), "");
    }

    #[test]
    fn other_keys_label_verbatim() {
        assert_eq!(WebKeyEventData::new("KeyA", "a").key_label(), "a");
        assert_eq!(WebKeyEventData::new("KeyA", "").key_label(), "");
        assert_eq!(WebKeyEventData::new("KeyA", "unidentified").key_label(), "unidentified");
        assert_eq!(WebKeyEventData::new("Enter", "Enter").key_label(), "Enter");
    }

    // --- physical key ---

    #[test]
    fn known_code_uses_physical_table() {
        let data = WebKeyEventData::new("KeyA", "a");
        assert_eq!(data.physical_key(), PhysicalKeyboardKey::new(0x0007_0004));
    }

    #[test]
    fn unknown_code_mints_stable_physical_key() {
        let data = WebKeyEventData::new("UnknownXYZ123", "Unidentified");
        let first = data.physical_key();
        assert!(first.is_web_plane());
        assert_eq!(first, data.physical_key());
        assert_eq!(first, WebKeyEventData::new("UnknownXYZ123", "x").physical_key());
    }

    // --- logical key ---

    #[test]
    fn numpad_table_takes_precedence() {
        let data = WebKeyEventData::new("NumpadDecimal", ".");
        assert_eq!(data.logical_key_in(&OverlappingTables), NUMPAD_DECIMAL);
        assert_eq!(
            WebKeyEventData::new("Period", ".").logical_key_in(&OverlappingTables),
            PERIOD
        );
    }

    #[test]
    fn builtin_numpad_decimal_is_not_period() {
        let numpad = WebKeyEventData::new("NumpadDecimal", ".").logical_key();
        let period = WebKeyEventData::new("Period", ".").logical_key();
        assert_ne!(numpad, period);
        assert_eq!(numpad, NUMPAD_DECIMAL);
        assert_eq!(period, PERIOD);
    }

    #[test]
    fn general_table_used_when_not_numpad() {
        let data = WebKeyEventData::new("KeyA", "a");
        assert_eq!(data.logical_key(), LogicalKeyboardKey::new(0x61));
        let enter = WebKeyEventData::new("NumpadEnter", "Enter");
        assert_eq!(enter.logical_key(), LogicalKeyboardKey::new(0x001_0000_000d));
    }

    #[test]
    fn unknown_code_mints_stable_logical_key() {
        let data = WebKeyEventData::new("UnknownXYZ123", "Unidentified");
        let first = data.logical_key();
        assert!(first.is_web_plane());
        assert_eq!(first, data.logical_key());
        assert_eq!(first, data.logical_key_in(&OverlappingTables));
    }

    #[test]
    fn logical_key_ignores_key_and_location() {
        let a = WebKeyEventData::new("KeyQ", "q");
        let b = WebKeyEventData::new("KeyQ", "a").with_location(3);
        assert_eq!(a.logical_key(), b.logical_key());
    }

    // --- modifiers ---

    #[test]
    fn shift_and_control_bits() {
        let data = WebKeyEventData::new("KeyA", "A").with_meta_state(0x05);
        assert!(data.is_modifier_pressed(ModifierKey::Shift, KeyboardSide::Any));
        assert!(data.is_modifier_pressed(ModifierKey::Control, KeyboardSide::Any));
        assert!(!data.is_modifier_pressed(ModifierKey::Alt, KeyboardSide::Any));
        assert!(!data.is_modifier_pressed(ModifierKey::Meta, KeyboardSide::Any));
    }

    #[test]
    fn each_reported_modifier_tests_its_own_bit() {
        let cases = [
            (ModifierKey::Shift, 0x01),
            (ModifierKey::Alt, 0x02),
            (ModifierKey::Control, 0x04),
            (ModifierKey::Meta, 0x08),
            (ModifierKey::NumLock, 0x10),
            (ModifierKey::CapsLock, 0x20),
            (ModifierKey::ScrollLock, 0x40),
        ];
        for (key, bit) in cases {
            let on = WebKeyEventData::new("KeyA", "a").with_meta_state(bit);
            let off = WebKeyEventData::new("KeyA", "a").with_meta_state(!bit);
            assert!(on.is_modifier_pressed(key, KeyboardSide::Any), "{key:?} not pressed");
            assert!(!off.is_modifier_pressed(key, KeyboardSide::Any), "{key:?} pressed");
            assert_eq!(modifier_mask(key), Some(bit));
        }
    }

    #[test]
    fn function_and_symbol_never_pressed() {
        let data = WebKeyEventData::new("Fn", "Fn").with_meta_state(u32::MAX);
        for side in [KeyboardSide::Any, KeyboardSide::Left, KeyboardSide::Right, KeyboardSide::All] {
            assert!(!data.is_modifier_pressed(ModifierKey::Function, side));
            assert!(!data.is_modifier_pressed(ModifierKey::Symbol, side));
        }
    }

    #[test]
    fn side_argument_has_no_effect() {
        let data = WebKeyEventData::new("ShiftRight", "Shift").with_meta_state(MODIFIER_SHIFT);
        assert!(data.is_modifier_pressed(ModifierKey::Shift, KeyboardSide::Left));
        assert!(data.is_modifier_pressed(ModifierKey::Shift, KeyboardSide::Right));
    }

    #[test]
    fn modifier_side_is_always_any() {
        for meta_state in [0, 0x7f, u32::MAX] {
            let data = WebKeyEventData::new("KeyA", "a").with_meta_state(meta_state);
            for key in ModifierKey::ALL {
                assert_eq!(data.modifier_side(key), KeyboardSide::Any);
            }
        }
    }

    #[test]
    fn modifiers_pressed_lists_set_bits() {
        let data = WebKeyEventData::new("KeyA", "A")
            .with_meta_state(MODIFIER_SHIFT | MODIFIER_CAPS_LOCK);
        assert_eq!(
            data.modifiers_pressed(),
            vec![
                (ModifierKey::Shift, KeyboardSide::Any),
                (ModifierKey::CapsLock, KeyboardSide::Any),
            ]
        );
        assert!(data.is_shift_pressed());
        assert!(!data.is_control_pressed());
    }

    // --- location and diagnostics ---

    #[test]
    fn key_location_decodes_dom_values() {
        let at = |n| WebKeyEventData::new("ShiftLeft", "Shift").with_location(n).key_location();
        assert_eq!(at(0), KeyLocation::Standard);
        assert_eq!(at(1), KeyLocation::Left);
        assert_eq!(at(2), KeyLocation::Right);
        assert_eq!(at(3), KeyLocation::Numpad);
        assert_eq!(at(9), KeyLocation::Unknown(9));
    }

    #[test]
    fn display_lists_all_fields() {
        let data = WebKeyEventData::new("KeyA", "A").with_location(0).with_meta_state(0x01);
        assert_eq!(data.to_string(), "code: KeyA, key: A, location: 0, metaState: 0x01");
    }
}
