// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Every screen follows the Elm-style "state down, messages up" pattern: a
//! `State` with `update` and `view`, a `Message` enum, and an `Event` enum
//! reporting what the app must do.
//!
//! # Tabs
//!
//! - [`info`] - Venue map, event details and the "More Info" page
//! - [`talks`] - Talk pager with swipe, arrow and chevron navigation
//! - [`name_card`] - Name card display and its modal editor
//!
//! # Shared Infrastructure
//!
//! - [`tab_bar`] - Bottom tab bar
//! - [`styles`] - Centralized button and container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode

pub mod design_tokens;
pub mod info;
pub mod name_card;
pub mod styles;
pub mod tab_bar;
pub mod talks;
pub mod theming;
