//! webkeys -- browser keyboard event decoding.
//!
//! Turns the `code`, `key`, `location` and modifier bitmask of a browser
//! `KeyboardEvent` into toolkit-neutral physical and logical keys.

pub mod config;
pub mod keyboard;
pub mod platform;

pub use keyboard::{
    KeyboardSide, LogicalKeyboardKey, ModifierKey, PhysicalKeyboardKey, RawKeyEventData,
};
pub use platform::web::WebKeyEventData;
