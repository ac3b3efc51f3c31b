// SPDX-License-Identifier: MPL-2.0
//! Name Card tab: the attendee's card and its modal editor.
//!
//! - [`display`] renders the stored profile and its QR code
//! - [`editor`] edits a copy and reports the result as an event
//! - [`code`] encodes the card payload

pub mod code;
pub mod display;
pub mod editor;

pub use display::Card;
