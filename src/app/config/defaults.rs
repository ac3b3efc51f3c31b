// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and tuning constants.
//!
//! # Categories
//!
//! - **Locale**: fallback language
//! - **Name card**: photo encoding and QR rendering
//! - **Talks**: swipe gesture recognition

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither the CLI, the config, nor the OS picks one.
pub const DEFAULT_LOCALE: &str = "en-US";

// ==========================================================================
// Name Card Defaults
// ==========================================================================

/// JPEG quality used when persisting the name card photo (0-100).
pub const PHOTO_JPEG_QUALITY: u8 = 80;

/// Longest edge of a picked photo after the square crop, in pixels.
pub const PHOTO_MAX_DIMENSION: u32 = 512;

/// Size of one QR module on screen, in logical pixels.
pub const QR_CELL_SIZE: f32 = 6.0;

// ==========================================================================
// Talks Defaults
// ==========================================================================

/// Minimum horizontal travel for a drag to count as a swipe (logical pixels).
pub const SWIPE_THRESHOLD_PX: f32 = 60.0;

const _: () = {
    assert!(PHOTO_JPEG_QUALITY > 0 && PHOTO_JPEG_QUALITY <= 100);
    assert!(PHOTO_MAX_DIMENSION > 0);
    assert!(QR_CELL_SIZE > 0.0);
    assert!(SWIPE_THRESHOLD_PX > 0.0);
};
