// SPDX-License-Identifier: MPL-2.0
//! Text templates for the name card QR code.

use serde::{Deserialize, Serialize};

/// Which template the QR code payload follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeFormat {
    /// `Name: …` / `Title: …` lines.
    #[default]
    Plain,
    /// A vCard 3.0 contact block.
    VCard,
}

/// Builds the payload for `name` and `title`.
///
/// Field contents are inserted verbatim; empty strings stay empty.
#[must_use]
pub fn card_payload(format: CodeFormat, name: &str, title: &str) -> String {
    match format {
        CodeFormat::Plain => format!("Name: {name}\nTitle: {title}"),
        CodeFormat::VCard => {
            format!("BEGIN:VCARD\nVERSION:3.0\nFN:{name}\nTITLE:{title}\nEND:VCARD")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_payload_matches_template() {
        assert_eq!(
            card_payload(CodeFormat::Plain, "Ada", "Weaver"),
            "Name: Ada\nTitle: Weaver"
        );
    }

    #[test]
    fn vcard_payload_matches_template() {
        assert_eq!(
            card_payload(CodeFormat::VCard, "Ada", "Weaver"),
            "BEGIN:VCARD\nVERSION:3.0\nFN:Ada\nTITLE:Weaver\nEND:VCARD"
        );
    }

    #[test]
    fn empty_fields_are_encoded_as_is() {
        assert_eq!(card_payload(CodeFormat::Plain, "", ""), "Name: \nTitle: ");
    }

    #[test]
    fn payload_is_deterministic() {
        let first = card_payload(CodeFormat::VCard, "Jane Smith", "Loom Lead");
        let second = card_payload(CodeFormat::VCard, "Jane Smith", "Loom Lead");
        assert_eq!(first, second);
    }
}
