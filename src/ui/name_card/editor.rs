// SPDX-License-Identifier: MPL-2.0
//! Modal form editing the name card.
//!
//! The form works on a copy of the stored profile. Nothing is written until
//! "Done", which reports the whole edit to the app as [`Event::Save`].

use super::display::photo_view;
use crate::app::config::PHOTO_MAX_DIMENSION;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::profile::{Photo, Profile, ProfileUpdate};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Handle;
use iced::widget::{button, container, operation, text_input, Column, Id, Row, Space, Text};
use iced::{Element, Length, Task};
use std::path::PathBuf;

/// Extensions offered by the photo dialog.
const PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

const NAME_INPUT: &str = "name-card-editor-name";
const TITLE_INPUT: &str = "name-card-editor-title";

/// Contextual data needed to render the editor.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the editor.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    TitleChanged(String),
    NameSubmitted,
    TitleSubmitted,
    ChoosePhoto,
    PhotoPathChosen(Option<PathBuf>),
    PhotoLoaded(Result<Photo, Error>),
    RemovePhoto,
    Done,
    Cancel,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// Persist the edit and close the editor.
    Save(ProfileUpdate),
    /// Close the editor without saving.
    Dismiss,
}

/// Editor form state.
#[derive(Debug, Clone)]
pub struct State {
    name: String,
    title: String,
    photo: Option<Photo>,
    photo_handle: Option<Handle>,
    /// Dialog labels, localized when the form opens.
    dialog_title: String,
    filter_name: String,
}

impl State {
    /// Opens the form prefilled from `profile`.
    #[must_use]
    pub fn new(profile: Profile, i18n: &I18n) -> Self {
        let photo_handle = profile.photo.as_ref().map(Photo::handle);
        Self {
            name: profile.name,
            title: profile.title,
            photo: profile.photo,
            photo_handle,
            dialog_title: i18n.tr("editor-photo-dialog-title"),
            filter_name: i18n.tr("editor-photo-filter"),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn photo(&self) -> Option<&Photo> {
        self.photo.as_ref()
    }

    /// Task focusing the name field, run when the editor opens.
    pub fn focus_name<T: Send + 'static>() -> Task<T> {
        operation::focus(Id::new(NAME_INPUT))
    }

    pub fn update(&mut self, message: Message) -> (Event, Task<Message>) {
        match message {
            Message::NameChanged(name) => {
                self.name = name;
                (Event::None, Task::none())
            }
            Message::TitleChanged(title) => {
                self.title = title;
                (Event::None, Task::none())
            }
            Message::NameSubmitted => (Event::None, operation::focus(Id::new(TITLE_INPUT))),
            // Last field; Enter does not save.
            Message::TitleSubmitted => (Event::None, Task::none()),
            Message::Done => (Event::Save(self.to_update()), Task::none()),
            Message::ChoosePhoto => (
                Event::None,
                pick_photo(self.dialog_title.clone(), self.filter_name.clone()),
            ),
            Message::PhotoPathChosen(None) => {
                tracing::debug!("photo dialog dismissed");
                (Event::None, Task::none())
            }
            Message::PhotoPathChosen(Some(path)) => (Event::None, load_photo(path)),
            Message::PhotoLoaded(Ok(photo)) => {
                tracing::debug!(?photo, "photo selected");
                self.photo_handle = Some(photo.handle());
                self.photo = Some(photo);
                (Event::None, Task::none())
            }
            Message::PhotoLoaded(Err(err)) => {
                tracing::warn!(%err, "keeping previous photo");
                (Event::None, Task::none())
            }
            Message::RemovePhoto => {
                self.photo = None;
                self.photo_handle = None;
                (Event::None, Task::none())
            }
            Message::Cancel => (Event::Dismiss, Task::none()),
        }
    }

    fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            name: self.name.clone(),
            title: self.title.clone(),
            photo: self.photo.clone(),
        }
    }

    #[must_use]
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let name_input = text_input(&i18n.tr("editor-name-placeholder"), &self.name)
            .id(Id::new(NAME_INPUT))
            .on_input(Message::NameChanged)
            .on_submit(Message::NameSubmitted)
            .padding(spacing::XS)
            .size(typography::BODY_LG);

        let title_input = text_input(&i18n.tr("editor-title-placeholder"), &self.title)
            .id(Id::new(TITLE_INPUT))
            .on_input(Message::TitleChanged)
            .on_submit(Message::TitleSubmitted)
            .padding(spacing::XS)
            .size(typography::BODY_LG);

        let photo_buttons = Column::new()
            .spacing(spacing::XS)
            .push(
                button(Text::new(i18n.tr("editor-change-photo")))
                    .on_press(Message::ChoosePhoto)
                    .style(styles::button::secondary),
            )
            .push(
                button(Text::new(i18n.tr("editor-remove-photo")))
                    .on_press_maybe(self.photo.is_some().then_some(Message::RemovePhoto))
                    .style(styles::button::secondary),
            );

        let photo_row = Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(photo_view(self.photo_handle.as_ref(), sizing::PHOTO_PREVIEW))
            .push(photo_buttons);

        let actions = Row::new()
            .spacing(spacing::SM)
            .push(Space::new().width(Length::Fill))
            .push(
                button(Text::new(i18n.tr("editor-cancel")))
                    .on_press(Message::Cancel)
                    .style(styles::button::secondary),
            )
            .push(
                button(Text::new(i18n.tr("editor-done")))
                    .on_press(Message::Done)
                    .style(styles::button::primary),
            );

        let form = Column::new()
            .spacing(spacing::MD)
            .push(Text::new(i18n.tr("editor-title")).size(typography::TITLE_MD))
            .push(photo_row)
            .push(name_input)
            .push(title_input)
            .push(actions);

        let sheet = container(form)
            .padding(spacing::LG)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .style(styles::container::card);

        container(sheet)
            .padding(spacing::LG)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::scrim)
            .into()
    }
}

/// Opens the native image dialog.
fn pick_photo(title: String, filter_name: String) -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(title)
                .add_filter(filter_name, PHOTO_EXTENSIONS)
                .pick_file()
                .await
                .map(|h| h.path().to_path_buf())
        },
        Message::PhotoPathChosen,
    )
}

/// Decodes and crops the chosen file off the update loop.
fn load_photo(path: PathBuf) -> Task<Message> {
    Task::perform(
        async move { Photo::open_cropped(&path, PHOTO_MAX_DIMENSION) },
        Message::PhotoLoaded,
    )
}
