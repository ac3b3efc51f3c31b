// SPDX-License-Identifier: MPL-2.0
//! Name card as shown on the tab: photo, name, title and QR code.

use super::code;
use crate::app::config::QR_CELL_SIZE;
use crate::i18n::fluent::I18n;
use crate::profile::{CodeFormat, Profile, ProfileStore};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, container, qr_code, scrollable, Column, Text};
use iced::{Element, Length, Theme};
use std::fmt;

/// Contextual data needed to render the name card.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the name card.
#[derive(Debug, Clone)]
pub enum Message {
    Edit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    OpenEditor,
}

/// What the card currently shows.
#[derive(Default)]
pub struct Card {
    profile: Profile,
    payload: String,
    code: Option<qr_code::Data>,
    photo: Option<Handle>,
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Card")
            .field("profile", &self.profile)
            .field("payload", &self.payload)
            .field("has_code", &self.code.is_some())
            .finish()
    }
}

impl Card {
    /// Reloads from `store` and regenerates the QR code.
    pub fn load(&mut self, store: &ProfileStore, format: CodeFormat) {
        self.show(store.snapshot(), format);
    }

    /// Displays `profile`, typically the snapshot returned by a store write.
    ///
    /// If the new payload cannot be encoded the previous code and its payload
    /// stay on screen; the profile fields still update.
    pub fn show(&mut self, profile: Profile, format: CodeFormat) {
        let payload = profile.payload(format);
        match code::generate(&payload) {
            Some(data) => {
                self.code = Some(data);
                self.payload = payload;
            }
            None => tracing::debug!("keeping previous name card code"),
        }

        if profile.photo != self.profile.photo || self.photo.is_none() {
            self.photo = profile.photo.as_ref().map(|photo| photo.handle());
        }

        self.profile = profile;
    }

    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Text encoded in the current code.
    #[must_use]
    pub fn payload(&self) -> &str {
        &self.payload
    }

    #[must_use]
    pub fn has_code(&self) -> bool {
        self.code.is_some()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Edit => Event::OpenEditor,
        }
    }

    #[must_use]
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let name = field_text(
            &self.profile.name,
            ctx.i18n.tr("name-card-name-placeholder"),
            typography::TITLE_MD,
        );
        let title = field_text(
            &self.profile.title,
            ctx.i18n.tr("name-card-title-placeholder"),
            typography::BODY_LG,
        );

        let mut card = Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(photo_view(self.photo.as_ref(), sizing::PHOTO))
            .push(name)
            .push(title);

        if let Some(data) = &self.code {
            card = card
                .push(
                    container(qr_code(data).cell_size(QR_CELL_SIZE).style(code_style))
                        .padding(spacing::XS)
                        .style(styles::container::code_backdrop),
                )
                .push(Text::new(ctx.i18n.tr("name-card-code-caption")).size(typography::CAPTION));
        }

        let edit = button(Text::new(ctx.i18n.tr("name-card-edit-button")))
            .on_press(Message::Edit)
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::primary);

        let content = Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .align_x(Horizontal::Center)
            .push(Text::new(ctx.i18n.tr("name-card-title")).size(typography::TITLE_LG))
            .push(
                container(card)
                    .padding(spacing::LG)
                    .width(Length::Fill)
                    .style(styles::container::card),
            )
            .push(edit);

        scrollable(container(content).center_x(Length::Fill)).into()
    }
}

/// Dark modules on white regardless of the app theme.
fn code_style(_theme: &Theme) -> qr_code::Style {
    qr_code::Style {
        cell: palette::BLACK,
        background: palette::WHITE,
    }
}

/// Stored text, or the dimmed placeholder when the field is empty.
fn field_text<'a>(value: &'a str, placeholder: String, size: f32) -> Text<'a> {
    if value.is_empty() {
        Text::new(placeholder).size(size).color(palette::GRAY_400)
    } else {
        Text::new(value).size(size)
    }
}

/// Square photo, or a placeholder glyph of the same size.
pub(super) fn photo_view<'a, M: 'a>(photo: Option<&Handle>, edge: f32) -> Element<'a, M> {
    match photo {
        Some(handle) => Image::new(handle.clone()).width(edge).height(edge).into(),
        None => container(Text::new("👤").size(edge / 2.0))
            .center(edge)
            .style(styles::container::photo_placeholder)
            .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{Photo, ProfileField, ProfileUpdate};
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn empty_store_loads_placeholder_card_with_code() {
        let dir = tempdir().unwrap();
        let store = ProfileStore::open(dir.path());
        let mut card = Card::default();

        card.load(&store, CodeFormat::Plain);

        assert_eq!(card.profile(), &Profile::default());
        assert_eq!(card.payload(), "Name: \nTitle: ");
        assert!(card.has_code());
    }

    #[test]
    fn loading_twice_yields_identical_state() {
        let dir = tempdir().unwrap();
        let mut store = ProfileStore::open(dir.path());
        store.update(ProfileUpdate {
            name: "Ada".into(),
            title: "Weaver".into(),
            photo: Some(Photo::from_rgba(RgbaImage::from_pixel(8, 8, Rgba([9, 9, 9, 255])))),
        });
        let mut card = Card::default();

        card.load(&store, CodeFormat::Plain);
        let first = (card.profile().clone(), card.payload().to_string(), card.has_code());
        card.load(&store, CodeFormat::Plain);
        let second = (card.profile().clone(), card.payload().to_string(), card.has_code());

        assert_eq!(first, second);
    }

    #[test]
    fn reload_picks_up_store_changes() {
        let dir = tempdir().unwrap();
        let mut store = ProfileStore::open(dir.path());
        let mut card = Card::default();
        card.load(&store, CodeFormat::Plain);

        store.set_text(ProfileField::Name, "Jane");
        card.load(&store, CodeFormat::VCard);

        assert_eq!(card.profile().name, "Jane");
        assert!(card.payload().starts_with("BEGIN:VCARD"));
    }

    #[test]
    fn unencodable_payload_keeps_previous_code() {
        let dir = tempdir().unwrap();
        let mut store = ProfileStore::open(dir.path());
        store.set_text(ProfileField::Name, "Ada");
        let mut card = Card::default();
        card.load(&store, CodeFormat::Plain);
        let encoded = card.payload().to_string();
        assert!(card.has_code());

        store.set_text(ProfileField::Title, &"x".repeat(8_000));
        card.load(&store, CodeFormat::Plain);

        assert!(card.has_code());
        assert_eq!(card.payload(), encoded);
        assert_eq!(card.profile().title.len(), 8_000);
    }

    #[test]
    fn show_uses_given_profile_without_store() {
        let mut card = Card::default();
        card.show(
            Profile {
                name: "Ada".into(),
                title: "Weaver".into(),
                photo: Some(Photo::from_rgba(RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 255])))),
            },
            CodeFormat::Plain,
        );

        assert_eq!(card.payload(), "Name: Ada\nTitle: Weaver");
        assert!(card.profile().photo.is_some());
        assert!(card.has_code());
    }

    #[test]
    fn edit_opens_editor() {
        let mut card = Card::default();
        assert_eq!(card.update(Message::Edit), Event::OpenEditor);
    }
}
