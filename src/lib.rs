// SPDX-License-Identifier: MPL-2.0
//! `weaving_con` is the BasketWeavingCon conference companion, built with the
//! Iced GUI framework.
//!
//! It shows venue information, pages through the talk programme, and keeps
//! the attendee's name card (photo, name, title and a QR code) on disk.

pub mod app;
pub mod conference;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod profile;
pub mod ui;
