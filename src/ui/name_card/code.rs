// SPDX-License-Identifier: MPL-2.0
//! QR encoding of the name card payload.

use iced::widget::qr_code::{Data, ErrorCorrection};

/// Encodes `payload` at medium error correction.
///
/// Returns `None` when the payload does not fit in a QR code.
#[must_use]
pub fn generate(payload: &str) -> Option<Data> {
    match Data::with_error_correction(payload.as_bytes(), ErrorCorrection::Medium) {
        Ok(data) => Some(data),
        Err(err) => {
            tracing::warn!(%err, bytes = payload.len(), "failed to encode name card QR code");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{CodeFormat, Profile};

    const QUIET_ZONE: usize = 4;
    const MODULE_PX: usize = 4;

    /// Encodes with the same encoder and level as the widget, renders the
    /// modules to greyscale and scans them back.
    fn scan(payload: &str) -> String {
        let code = qrcode::QrCode::with_error_correction_level(payload, qrcode::EcLevel::M)
            .expect("payload fits");
        let width = code.width();
        let colors = code.to_colors();
        let side = (width + 2 * QUIET_ZONE) * MODULE_PX;

        let mut image = rqrr::PreparedImage::prepare_from_greyscale(side, side, |x, y| {
            let (mx, my) = (x / MODULE_PX, y / MODULE_PX);
            let inside = (QUIET_ZONE..QUIET_ZONE + width).contains(&mx)
                && (QUIET_ZONE..QUIET_ZONE + width).contains(&my);
            let dark = inside
                && colors[(my - QUIET_ZONE) * width + (mx - QUIET_ZONE)] == qrcode::Color::Dark;
            if dark {
                0
            } else {
                255
            }
        });
        let grids = image.detect_grids();
        assert_eq!(grids.len(), 1);
        let (_meta, content) = grids[0].decode().expect("code decodes");
        content
    }

    fn ada() -> Profile {
        Profile {
            name: "Ada".into(),
            title: "Weaver".into(),
            photo: None,
        }
    }

    #[test]
    fn scanned_plain_code_matches_template() {
        let payload = ada().payload(CodeFormat::Plain);
        assert!(generate(&payload).is_some());
        assert_eq!(scan(&payload), "Name: Ada\nTitle: Weaver");
    }

    #[test]
    fn scanned_vcard_code_matches_template() {
        let payload = ada().payload(CodeFormat::VCard);
        assert!(generate(&payload).is_some());
        assert_eq!(
            scan(&payload),
            "BEGIN:VCARD\nVERSION:3.0\nFN:Ada\nTITLE:Weaver\nEND:VCARD"
        );
    }

    #[test]
    fn encodes_plain_payload() {
        assert!(generate("Name: Ada\nTitle: Weaver").is_some());
    }

    #[test]
    fn encodes_empty_payload() {
        assert!(generate("").is_some());
    }

    #[test]
    fn rejects_oversized_payload() {
        let payload = "x".repeat(8_000);
        assert!(generate(&payload).is_none());
    }
}
