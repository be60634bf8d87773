//! Platform adapters.
//!
//! Each child module decodes one platform's native key event fields into
//! the toolkit-neutral types in `crate::keyboard` by implementing
//! `RawKeyEventData`.

pub mod web;
