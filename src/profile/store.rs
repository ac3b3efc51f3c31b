// SPDX-License-Identifier: MPL-2.0
//! Local persistence of the name card.
//!
//! Text fields live in a small CBOR key/value file (`preferences.cbor`); the
//! photo lives next to it as `name_card_photo.jpg`. Every write goes to disk
//! immediately. Reads never fail: unset text reads as `""`, and a missing or
//! unreadable photo reads as `None`. Write failures are logged and dropped.

use super::{Photo, Profile, ProfileField, ProfileUpdate};
use crate::app::config::PHOTO_JPEG_QUALITY;
use crate::app::paths;
use crate::error::Result;
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

/// Preferences file name within the data directory.
pub const PREFERENCES_FILE: &str = "preferences.cbor";

/// Photo file name within the data directory.
pub const PHOTO_FILE: &str = "name_card_photo.jpg";

/// Owner of the persisted profile.
#[derive(Debug)]
pub struct ProfileStore {
    /// `None` when no data directory could be resolved: text is kept in
    /// memory only and photo operations do nothing.
    dir: Option<PathBuf>,
    preferences: BTreeMap<String, String>,
}

impl ProfileStore {
    /// Opens the store in the default data directory (see [`paths`]).
    #[must_use]
    pub fn open_default() -> Self {
        match paths::get_app_data_dir() {
            Some(dir) => Self::open(dir),
            None => {
                tracing::warn!("no data directory available; name card will not persist");
                Self {
                    dir: None,
                    preferences: BTreeMap::new(),
                }
            }
        }
    }

    /// Opens the store rooted at `dir`. The directory is created on first write.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let preferences = match read_preferences(&dir.join(PREFERENCES_FILE)) {
            Ok(preferences) => preferences,
            Err(err) => {
                tracing::warn!(%err, "ignoring unreadable preferences");
                BTreeMap::new()
            }
        };
        tracing::debug!(dir = %dir.display(), entries = preferences.len(), "profile store opened");
        Self {
            dir: Some(dir),
            preferences,
        }
    }

    /// Directory holding the store files, if any.
    #[must_use]
    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    /// Returns the stored text for `field`, or `""` when unset.
    #[must_use]
    pub fn text(&self, field: ProfileField) -> String {
        self.preferences
            .get(field.key())
            .cloned()
            .unwrap_or_default()
    }

    /// Stores `value` for `field` and persists the preferences file.
    pub fn set_text(&mut self, field: ProfileField, value: &str) {
        self.preferences
            .insert(field.key().to_string(), value.to_string());
        if let Err(err) = self.write_preferences() {
            tracing::warn!(%err, key = field.key(), "failed to persist preference");
        }
    }

    /// Reads the stored photo from disk.
    #[must_use]
    pub fn photo(&self) -> Option<Photo> {
        let path = self.photo_path()?;
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return None,
            Err(err) => {
                tracing::warn!(%err, "failed to read name card photo");
                return None;
            }
        };
        match Photo::decode(&bytes) {
            Ok(photo) => Some(photo),
            Err(err) => {
                tracing::warn!(%err, "ignoring undecodable name card photo");
                None
            }
        }
    }

    /// Replaces the stored photo, or deletes it when `photo` is `None`.
    ///
    /// If encoding fails the previous file is left untouched.
    pub fn set_photo(&mut self, photo: Option<&Photo>) {
        let Some(path) = self.photo_path() else {
            return;
        };
        let result = match photo {
            Some(photo) => write_photo(&path, photo),
            None => remove_photo(&path),
        };
        if let Err(err) = result {
            tracing::warn!(%err, "failed to update name card photo");
        }
    }

    /// Current profile as an immutable snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Profile {
        Profile {
            name: self.text(ProfileField::Name),
            title: self.text(ProfileField::Title),
            photo: self.photo(),
        }
    }

    /// Applies a complete edit and returns the resulting snapshot.
    pub fn update(&mut self, update: ProfileUpdate) -> Profile {
        self.set_text(ProfileField::Name, &update.name);
        self.set_text(ProfileField::Title, &update.title);
        self.set_photo(update.photo.as_ref());
        tracing::info!("name card saved");
        self.snapshot()
    }

    fn photo_path(&self) -> Option<PathBuf> {
        self.dir.as_ref().map(|dir| dir.join(PHOTO_FILE))
    }

    fn write_preferences(&self) -> Result<()> {
        let Some(dir) = &self.dir else {
            return Ok(());
        };
        fs::create_dir_all(dir)?;
        let mut bytes = Vec::new();
        ciborium::into_writer(&self.preferences, &mut bytes)?;
        fs::write(dir.join(PREFERENCES_FILE), bytes)?;
        Ok(())
    }
}

fn read_preferences(path: &Path) -> Result<BTreeMap<String, String>> {
    let file = match fs::File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
        Err(err) => return Err(err.into()),
    };
    let preferences = ciborium::from_reader(BufReader::new(file))?;
    Ok(preferences)
}

fn write_photo(path: &Path, photo: &Photo) -> Result<()> {
    let bytes = photo.to_jpeg(PHOTO_JPEG_QUALITY)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)?;
    Ok(())
}

fn remove_photo(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Err(err) if err.kind() != ErrorKind::NotFound => Err(err.into()),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn solid_photo(color: [u8; 4]) -> Photo {
        Photo::from_rgba(RgbaImage::from_pixel(32, 32, Rgba(color)))
    }

    fn max_channel_diff(a: &Photo, b: &Photo) -> u8 {
        a.pixels()
            .pixels()
            .zip(b.pixels().pixels())
            .flat_map(|(p, q)| (0..3).map(move |c| p.0[c].abs_diff(q.0[c])))
            .max()
            .unwrap_or(0)
    }

    #[test]
    fn unset_text_reads_empty() {
        let dir = tempdir().unwrap();
        let store = ProfileStore::open(dir.path());
        assert_eq!(store.text(ProfileField::Name), "");
        assert_eq!(store.text(ProfileField::Title), "");
    }

    #[test]
    fn set_text_round_trips_including_empty() {
        let dir = tempdir().unwrap();
        let mut store = ProfileStore::open(dir.path());

        for value in ["Ada", "", "Thread Head Supreme ✂"] {
            store.set_text(ProfileField::Title, value);
            assert_eq!(store.text(ProfileField::Title), value);
        }
    }

    #[test]
    fn text_survives_reopen() {
        let dir = tempdir().unwrap();
        {
            let mut store = ProfileStore::open(dir.path());
            store.set_text(ProfileField::Name, "Jane Smith");
        }
        let reopened = ProfileStore::open(dir.path());
        assert_eq!(reopened.text(ProfileField::Name), "Jane Smith");
    }

    #[test]
    fn corrupt_preferences_load_as_empty() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(PREFERENCES_FILE), b"\xff\x00garbage").unwrap();

        let store = ProfileStore::open(dir.path());

        assert_eq!(store.text(ProfileField::Name), "");
    }

    #[test]
    fn photo_round_trips_within_jpeg_tolerance() {
        let dir = tempdir().unwrap();
        let mut store = ProfileStore::open(dir.path());
        let original = solid_photo([180, 90, 30, 255]);

        store.set_photo(Some(&original));
        let loaded = store.photo().expect("photo should be stored");

        assert_eq!((loaded.width(), loaded.height()), (32, 32));
        assert!(max_channel_diff(&original, &loaded) <= 8);
    }

    #[test]
    fn clearing_photo_deletes_file() {
        let dir = tempdir().unwrap();
        let mut store = ProfileStore::open(dir.path());
        store.set_photo(Some(&solid_photo([1, 2, 3, 255])));
        assert!(dir.path().join(PHOTO_FILE).exists());

        store.set_photo(None);

        assert!(!dir.path().join(PHOTO_FILE).exists());
        assert!(store.photo().is_none());
    }

    #[test]
    fn clearing_absent_photo_is_harmless() {
        let dir = tempdir().unwrap();
        let mut store = ProfileStore::open(dir.path());
        store.set_photo(None);
        assert!(store.photo().is_none());
    }

    #[test]
    fn unreadable_photo_reads_as_none() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(PHOTO_FILE), b"not a jpeg").unwrap();
        let store = ProfileStore::open(dir.path());
        assert!(store.photo().is_none());
    }

    #[test]
    fn update_writes_all_fields_and_returns_snapshot() {
        let dir = tempdir().unwrap();
        let mut store = ProfileStore::open(dir.path());

        let snapshot = store.update(ProfileUpdate {
            name: "Ada".into(),
            title: "Weaver".into(),
            photo: Some(solid_photo([0, 128, 255, 255])),
        });

        assert_eq!(snapshot.name, "Ada");
        assert_eq!(snapshot.title, "Weaver");
        assert!(snapshot.photo.is_some());
        assert_eq!(store.snapshot(), snapshot);
    }

    #[test]
    fn last_write_wins() {
        let dir = tempdir().unwrap();
        let mut store = ProfileStore::open(dir.path());
        store.set_text(ProfileField::Name, "first");
        store.set_text(ProfileField::Name, "second");
        assert_eq!(store.snapshot().name, "second");
    }
}
