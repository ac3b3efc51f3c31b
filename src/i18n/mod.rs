// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! UI chrome is localized with Fluent. Bundles are embedded at compile time
//! from `assets/i18n/*.ftl`.
//!
//! # Features
//!
//! - Locale selection from CLI, config, or system settings
//! - Fallback to `en-US` when a locale or a message is missing

pub mod fluent;
