//! Browser `KeyboardEvent.code` -> toolkit key tables.
//!
//! Three tables, all keyed by the layout-independent `code` string:
//!
//! - `web_to_physical`: USB HID usage of the key position.
//! - `web_numpad_to_logical`: numpad keys. Consulted before the general
//!   table so `NumpadDecimal` resolves to the numpad key, not to `.`.
//! - `web_to_logical`: everything else. Numpad codes also appear here,
//!   mapped to the main-area key that types the same character.
//!
//! Codes missing from a table return `None`; the caller mints a web-plane id.

use crate::keyboard::{LogicalKeyboardKey, PhysicalKeyboardKey};

// ---------------------------------------------------------------------------
// Table seam
// ---------------------------------------------------------------------------

/// Lookup tables used to resolve web key events.
pub trait WebKeyTables {
    fn physical(&self, code: &str) -> Option<PhysicalKeyboardKey>;

    fn logical(&self, code: &str) -> Option<LogicalKeyboardKey>;

    fn numpad(&self, code: &str) -> Option<LogicalKeyboardKey>;
}

/// The tables compiled into this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinWebTables;

impl WebKeyTables for BuiltinWebTables {
    fn physical(&self, code: &str) -> Option<PhysicalKeyboardKey> {
        web_to_physical(code)
    }

    fn logical(&self, code: &str) -> Option<LogicalKeyboardKey> {
        web_to_logical(code)
    }

    fn numpad(&self, code: &str) -> Option<LogicalKeyboardKey> {
        web_numpad_to_logical(code)
    }
}

// ---------------------------------------------------------------------------
// Physical: code -> USB HID usage
// ---------------------------------------------------------------------------

/// Converts a `KeyboardEvent.code` to the physical key at that position.
pub fn web_to_physical(code: &str) -> Option<PhysicalKeyboardKey> {
    let usage = match code {
        // Toolkit pseudo keys (page 0x00)
        "Hyper" => 0x0000_0010,
        "Super" => 0x0000_0011,
        "Fn" => 0x0000_0012,
        "FnLock" => 0x0000_0013,
        "Suspend" => 0x0000_0014,
        "Resume" => 0x0000_0015,
        "Turbo" => 0x0000_0016,

        // Generic desktop (page 0x01)
        "Sleep" => 0x0001_0082,
        "WakeUp" => 0x0001_0083,

        // Letters
        "KeyA" => 0x0007_0004,
        "KeyB" => 0x0007_0005,
        "KeyC" => 0x0007_0006,
        "KeyD" => 0x0007_0007,
        "KeyE" => 0x0007_0008,
        "KeyF" => 0x0007_0009,
        "KeyG" => 0x0007_000a,
        "KeyH" => 0x0007_000b,
        "KeyI" => 0x0007_000c,
        "KeyJ" => 0x0007_000d,
        "KeyK" => 0x0007_000e,
        "KeyL" => 0x0007_000f,
        "KeyM" => 0x0007_0010,
        "KeyN" => 0x0007_0011,
        "KeyO" => 0x0007_0012,
        "KeyP" => 0x0007_0013,
        "KeyQ" => 0x0007_0014,
        "KeyR" => 0x0007_0015,
        "KeyS" => 0x0007_0016,
        "KeyT" => 0x0007_0017,
        "KeyU" => 0x0007_0018,
        "KeyV" => 0x0007_0019,
        "KeyW" => 0x0007_001a,
        "KeyX" => 0x0007_001b,
        "KeyY" => 0x0007_001c,
        "KeyZ" => 0x0007_001d,

        // Top-row digits
        "Digit1" => 0x0007_001e,
        "Digit2" => 0x0007_001f,
        "Digit3" => 0x0007_0020,
        "Digit4" => 0x0007_0021,
        "Digit5" => 0x0007_0022,
        "Digit6" => 0x0007_0023,
        "Digit7" => 0x0007_0024,
        "Digit8" => 0x0007_0025,
        "Digit9" => 0x0007_0026,
        "Digit0" => 0x0007_0027,

        // Editing and punctuation
        "Enter" => 0x0007_0028,
        "Escape" => 0x0007_0029,
        "Backspace" => 0x0007_002a,
        "Tab" => 0x0007_002b,
        "Space" => 0x0007_002c,
        "Minus" => 0x0007_002d,
        "Equal" => 0x0007_002e,
        "BracketLeft" => 0x0007_002f,
        "BracketRight" => 0x0007_0030,
        "Backslash" => 0x0007_0031,
        "Semicolon" => 0x0007_0033,
        "Quote" => 0x0007_0034,
        "Backquote" => 0x0007_0035,
        "Comma" => 0x0007_0036,
        "Period" => 0x0007_0037,
        "Slash" => 0x0007_0038,
        "CapsLock" => 0x0007_0039,

        // Function keys F1-F12
        "F1" => 0x0007_003a,
        "F2" => 0x0007_003b,
        "F3" => 0x0007_003c,
        "F4" => 0x0007_003d,
        "F5" => 0x0007_003e,
        "F6" => 0x0007_003f,
        "F7" => 0x0007_0040,
        "F8" => 0x0007_0041,
        "F9" => 0x0007_0042,
        "F10" => 0x0007_0043,
        "F11" => 0x0007_0044,
        "F12" => 0x0007_0045,

        // System and navigation
        "PrintScreen" => 0x0007_0046,
        "ScrollLock" => 0x0007_0047,
        "Pause" => 0x0007_0048,
        "Insert" => 0x0007_0049,
        "Home" => 0x0007_004a,
        "PageUp" => 0x0007_004b,
        "Delete" => 0x0007_004c,
        "End" => 0x0007_004d,
        "PageDown" => 0x0007_004e,
        "ArrowRight" => 0x0007_004f,
        "ArrowLeft" => 0x0007_0050,
        "ArrowDown" => 0x0007_0051,
        "ArrowUp" => 0x0007_0052,

        // Numeric keypad
        "NumLock" => 0x0007_0053,
        "NumpadDivide" => 0x0007_0054,
        "NumpadMultiply" => 0x0007_0055,
        "NumpadSubtract" => 0x0007_0056,
        "NumpadAdd" => 0x0007_0057,
        "NumpadEnter" => 0x0007_0058,
        "Numpad1" => 0x0007_0059,
        "Numpad2" => 0x0007_005a,
        "Numpad3" => 0x0007_005b,
        "Numpad4" => 0x0007_005c,
        "Numpad5" => 0x0007_005d,
        "Numpad6" => 0x0007_005e,
        "Numpad7" => 0x0007_005f,
        "Numpad8" => 0x0007_0060,
        "Numpad9" => 0x0007_0061,
        "Numpad0" => 0x0007_0062,
        "NumpadDecimal" => 0x0007_0063,
        "IntlBackslash" => 0x0007_0064,
        "ContextMenu" => 0x0007_0065,
        "Power" => 0x0007_0066,
        "NumpadEqual" => 0x0007_0067,

        // Function keys F13-F24
        "F13" => 0x0007_0068,
        "F14" => 0x0007_0069,
        "F15" => 0x0007_006a,
        "F16" => 0x0007_006b,
        "F17" => 0x0007_006c,
        "F18" => 0x0007_006d,
        "F19" => 0x0007_006e,
        "F20" => 0x0007_006f,
        "F21" => 0x0007_0070,
        "F22" => 0x0007_0071,
        "F23" => 0x0007_0072,
        "F24" => 0x0007_0073,

        // Command keys
        "Open" => 0x0007_0074,
        "Help" => 0x0007_0075,
        "Select" => 0x0007_0077,
        "Again" => 0x0007_0079,
        "Undo" => 0x0007_007a,
        "Cut" => 0x0007_007b,
        "Copy" => 0x0007_007c,
        "Paste" => 0x0007_007d,
        "Find" => 0x0007_007e,
        "AudioVolumeMute" => 0x0007_007f,
        "AudioVolumeUp" => 0x0007_0080,
        "AudioVolumeDown" => 0x0007_0081,

        // International and IME
        "NumpadComma" => 0x0007_0085,
        "IntlRo" => 0x0007_0087,
        "KanaMode" => 0x0007_0088,
        "IntlYen" => 0x0007_0089,
        "Convert" => 0x0007_008a,
        "NonConvert" => 0x0007_008b,
        "Lang1" => 0x0007_0090,
        "Lang2" => 0x0007_0091,
        "Lang3" => 0x0007_0092,
        "Lang4" => 0x0007_0093,
        "Lang5" => 0x0007_0094,
        "NumpadParenLeft" => 0x0007_00b6,
        "NumpadParenRight" => 0x0007_00b7,
        "NumpadBackspace" => 0x0007_00bb,

        // Modifiers: left and right are distinct positions.
        "ControlLeft" => 0x0007_00e0,
        "ShiftLeft" => 0x0007_00e1,
        "AltLeft" => 0x0007_00e2,
        "MetaLeft" => 0x0007_00e3,
        "ControlRight" => 0x0007_00e4,
        "ShiftRight" => 0x0007_00e5,
        "AltRight" => 0x0007_00e6,
        "MetaRight" => 0x0007_00e7,

        // Consumer page (0x0C): media and browser keys
        "MediaTrackNext" => 0x000c_00b5,
        "MediaTrackPrevious" => 0x000c_00b6,
        "MediaStop" => 0x000c_00b7,
        "Eject" => 0x000c_00b8,
        "MediaPlayPause" => 0x000c_00cd,
        "MediaSelect" => 0x000c_0183,
        "LaunchMail" => 0x000c_018a,
        "LaunchApp2" => 0x000c_0192,
        "LaunchApp1" => 0x000c_0194,
        "BrowserSearch" => 0x000c_0221,
        "BrowserHome" => 0x000c_0223,
        "BrowserBack" => 0x000c_0224,
        "BrowserForward" => 0x000c_0225,
        "BrowserStop" => 0x000c_0226,
        "BrowserRefresh" => 0x000c_0227,
        "BrowserFavorites" => 0x000c_022a,

        _ => return None,
    };
    Some(PhysicalKeyboardKey::new(usage))
}

// ---------------------------------------------------------------------------
// Numpad: code -> toolkit-plane numpad key
// ---------------------------------------------------------------------------

/// Converts a numpad `KeyboardEvent.code` to its numpad logical key.
///
/// Numpad key values are `TOOLKIT_PLANE | 0x200 | ascii`.
pub fn web_numpad_to_logical(code: &str) -> Option<LogicalKeyboardKey> {
    let id = match code {
        "NumpadParenLeft" => 0x002_0000_0228,
        "NumpadParenRight" => 0x002_0000_0229,
        "NumpadMultiply" => 0x002_0000_022a,
        "NumpadAdd" => 0x002_0000_022b,
        "NumpadComma" => 0x002_0000_022c,
        "NumpadSubtract" => 0x002_0000_022d,
        "NumpadDecimal" => 0x002_0000_022e,
        "NumpadDivide" => 0x002_0000_022f,
        "Numpad0" => 0x002_0000_0230,
        "Numpad1" => 0x002_0000_0231,
        "Numpad2" => 0x002_0000_0232,
        "Numpad3" => 0x002_0000_0233,
        "Numpad4" => 0x002_0000_0234,
        "Numpad5" => 0x002_0000_0235,
        "Numpad6" => 0x002_0000_0236,
        "Numpad7" => 0x002_0000_0237,
        "Numpad8" => 0x002_0000_0238,
        "Numpad9" => 0x002_0000_0239,
        "NumpadEqual" => 0x002_0000_023d,
        _ => return None,
    };
    Some(LogicalKeyboardKey::new(id))
}

// ---------------------------------------------------------------------------
// Logical: code -> layout-level key
// ---------------------------------------------------------------------------

/// Converts a `KeyboardEvent.code` to a logical key, assuming a US layout.
///
/// Printable keys map to their lowercase code point in the unicode plane.
pub fn web_to_logical(code: &str) -> Option<LogicalKeyboardKey> {
    let id = match code {
        // Letters
        "KeyA" => 0x61,
        "KeyB" => 0x62,
        "KeyC" => 0x63,
        "KeyD" => 0x64,
        "KeyE" => 0x65,
        "KeyF" => 0x66,
        "KeyG" => 0x67,
        "KeyH" => 0x68,
        "KeyI" => 0x69,
        "KeyJ" => 0x6a,
        "KeyK" => 0x6b,
        "KeyL" => 0x6c,
        "KeyM" => 0x6d,
        "KeyN" => 0x6e,
        "KeyO" => 0x6f,
        "KeyP" => 0x70,
        "KeyQ" => 0x71,
        "KeyR" => 0x72,
        "KeyS" => 0x73,
        "KeyT" => 0x74,
        "KeyU" => 0x75,
        "KeyV" => 0x76,
        "KeyW" => 0x77,
        "KeyX" => 0x78,
        "KeyY" => 0x79,
        "KeyZ" => 0x7a,

        // Digits: numpad digits type the same character as the top row.
        "Digit0" | "Numpad0" => 0x30,
        "Digit1" | "Numpad1" => 0x31,
        "Digit2" | "Numpad2" => 0x32,
        "Digit3" | "Numpad3" => 0x33,
        "Digit4" | "Numpad4" => 0x34,
        "Digit5" | "Numpad5" => 0x35,
        "Digit6" | "Numpad6" => 0x36,
        "Digit7" | "Numpad7" => 0x37,
        "Digit8" | "Numpad8" => 0x38,
        "Digit9" | "Numpad9" => 0x39,

        // Punctuation
        "Space" => 0x20,
        "Quote" => 0x27,
        "NumpadParenLeft" => 0x28,
        "NumpadParenRight" => 0x29,
        "NumpadMultiply" => 0x2a,
        "NumpadAdd" => 0x2b,
        "Comma" | "NumpadComma" => 0x2c,
        "Minus" | "NumpadSubtract" => 0x2d,
        "Period" | "NumpadDecimal" => 0x2e,
        "Slash" | "NumpadDivide" => 0x2f,
        "Semicolon" => 0x3b,
        "Equal" | "NumpadEqual" => 0x3d,
        "BracketLeft" => 0x5b,
        "Backslash" | "IntlBackslash" => 0x5c,
        "BracketRight" => 0x5d,
        "Backquote" => 0x60,

        // Control characters
        "Backspace" | "NumpadBackspace" => 0x001_0000_0008,
        "Tab" => 0x001_0000_0009,
        "Enter" | "NumpadEnter" => 0x001_0000_000d,
        "Escape" => 0x001_0000_001b,
        "Delete" => 0x001_0000_007f,

        // Locks and pseudo modifiers
        "CapsLock" => 0x001_0000_0104,
        "Fn" => 0x001_0000_0106,
        "FnLock" => 0x001_0000_0107,
        "Hyper" => 0x001_0000_0108,
        "NumLock" => 0x001_0000_010a,
        "ScrollLock" => 0x001_0000_010c,
        "Super" => 0x001_0000_010e,

        // Navigation
        "ArrowDown" => 0x001_0000_0301,
        "ArrowLeft" => 0x001_0000_0302,
        "ArrowRight" => 0x001_0000_0303,
        "ArrowUp" => 0x001_0000_0304,
        "End" => 0x001_0000_0305,
        "Home" => 0x001_0000_0306,
        "PageDown" => 0x001_0000_0307,
        "PageUp" => 0x001_0000_0308,

        // Editing
        "Copy" => 0x001_0000_0402,
        "Cut" => 0x001_0000_0404,
        "Insert" => 0x001_0000_0407,
        "Paste" => 0x001_0000_0408,
        "Undo" => 0x001_0000_040a,

        // UI and device
        "Again" => 0x001_0000_0501,
        "ContextMenu" => 0x001_0000_0505,
        "Find" => 0x001_0000_0507,
        "Help" => 0x001_0000_0508,
        "Pause" => 0x001_0000_0509,
        "Select" => 0x001_0000_050c,
        "Eject" => 0x001_0000_0604,
        "Power" => 0x001_0000_0608,
        "PrintScreen" => 0x001_0000_060a,
        "WakeUp" => 0x001_0000_060b,

        // IME
        "Convert" => 0x001_0000_0705,
        "NonConvert" => 0x001_0000_070d,
        "KanaMode" => 0x001_0000_0719,

        // Function keys
        "F1" => 0x001_0000_0801,
        "F2" => 0x001_0000_0802,
        "F3" => 0x001_0000_0803,
        "F4" => 0x001_0000_0804,
        "F5" => 0x001_0000_0805,
        "F6" => 0x001_0000_0806,
        "F7" => 0x001_0000_0807,
        "F8" => 0x001_0000_0808,
        "F9" => 0x001_0000_0809,
        "F10" => 0x001_0000_080a,
        "F11" => 0x001_0000_080b,
        "F12" => 0x001_0000_080c,
        "F13" => 0x001_0000_080d,
        "F14" => 0x001_0000_080e,
        "F15" => 0x001_0000_080f,
        "F16" => 0x001_0000_0810,
        "F17" => 0x001_0000_0811,
        "F18" => 0x001_0000_0812,
        "F19" => 0x001_0000_0813,
        "F20" => 0x001_0000_0814,
        "F21" => 0x001_0000_0815,
        "F22" => 0x001_0000_0816,
        "F23" => 0x001_0000_0817,
        "F24" => 0x001_0000_0818,

        // Media
        "MediaPlayPause" => 0x001_0000_0a05,
        "MediaStop" => 0x001_0000_0a07,
        "MediaTrackNext" => 0x001_0000_0a08,
        "MediaTrackPrevious" => 0x001_0000_0a09,
        "AudioVolumeDown" => 0x001_0000_0a0f,
        "AudioVolumeUp" => 0x001_0000_0a10,
        "AudioVolumeMute" => 0x001_0000_0a11,

        // Launchers and browser
        "LaunchMail" => 0x001_0000_0b03,
        "MediaSelect" => 0x001_0000_0b05,
        "LaunchApp2" => 0x001_0000_0b0d,
        "LaunchApp1" => 0x001_0000_0b0e,
        "BrowserBack" => 0x001_0000_0c01,
        "BrowserFavorites" => 0x001_0000_0c02,
        "BrowserForward" => 0x001_0000_0c03,
        "BrowserHome" => 0x001_0000_0c04,
        "BrowserRefresh" => 0x001_0000_0c05,
        "BrowserSearch" => 0x001_0000_0c06,
        "BrowserStop" => 0x001_0000_0c07,

        // Keys the toolkit defines itself
        "Suspend" => 0x002_0000_0000,
        "Resume" => 0x002_0000_0001,
        "Sleep" => 0x002_0000_0002,
        "Turbo" => 0x002_0000_0003,
        "Lang1" => 0x002_0000_0010,
        "Lang2" => 0x002_0000_0011,
        "Lang3" => 0x002_0000_0012,
        "Lang4" => 0x002_0000_0013,
        "Lang5" => 0x002_0000_0014,
        "IntlRo" => 0x002_0000_0021,
        "IntlYen" => 0x002_0000_0022,

        // Sided modifiers
        "ControlLeft" => 0x002_0000_0100,
        "ControlRight" => 0x002_0000_0101,
        "ShiftLeft" => 0x002_0000_0102,
        "ShiftRight" => 0x002_0000_0103,
        "AltLeft" => 0x002_0000_0104,
        "AltRight" => 0x002_0000_0105,
        "MetaLeft" => 0x002_0000_0106,
        "MetaRight" => 0x002_0000_0107,

        _ => return None,
    };
    Some(LogicalKeyboardKey::new(id))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
