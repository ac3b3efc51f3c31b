// SPDX-License-Identifier: MPL-2.0
//! The attendee's name card: profile data, its photo, and its QR payload.
//!
//! [`ProfileStore`] is the only place that touches the persisted profile.
//! The app owns one store and lends it to the name card screens; they read
//! immutable [`Profile`] snapshots and write back through
//! [`ProfileStore::update`].

mod payload;
mod photo;
mod store;

pub use payload::{card_payload, CodeFormat};
pub use photo::Photo;
pub use store::{ProfileStore, PHOTO_FILE, PREFERENCES_FILE};

/// Text fields persisted in the preferences file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Name,
    Title,
}

impl ProfileField {
    pub const ALL: [ProfileField; 2] = [ProfileField::Name, ProfileField::Title];

    /// Preferences key for this field.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            ProfileField::Name => "name_card.name",
            ProfileField::Title => "name_card.title",
        }
    }
}

/// Immutable snapshot of the stored profile.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub photo: Option<Photo>,
}

impl Profile {
    /// Text encoded in the name card QR code.
    #[must_use]
    pub fn payload(&self, format: CodeFormat) -> String {
        card_payload(format, &self.name, &self.title)
    }
}

/// A complete edit reported by the name card editor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileUpdate {
    pub name: String,
    pub title: String,
    /// `None` removes any stored photo.
    pub photo: Option<Photo>,
}

impl From<Profile> for ProfileUpdate {
    fn from(profile: Profile) -> Self {
        Self {
            name: profile.name,
            title: profile.title,
            photo: profile.photo,
        }
    }
}
