// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts depend on what is on screen:
//! - Editor open: Escape cancels the edit, nothing else is routed
//! - Talks tab: Left/Right arrows turn the page
//! - Other tabs: no global shortcuts

use super::{Message, Tab};
use crate::ui::name_card::editor;
use crate::ui::talks;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, Event, Subscription};

/// Creates the keyboard subscription for the current tab and modal state.
pub fn create_event_subscription(tab: Tab, editor_open: bool) -> Subscription<Message> {
    if editor_open {
        event::listen_with(|event, _status, _window| match event {
            Event::Keyboard(keyboard::Event::KeyPressed {
                key: Key::Named(Named::Escape),
                ..
            }) => Some(Message::Editor(editor::Message::Cancel)),
            _ => None,
        })
    } else if tab == Tab::Talks {
        event::listen_with(|event, status, _window| {
            // Leave keys alone when a widget already used them.
            if status == event::Status::Captured {
                return None;
            }
            match event {
                Event::Keyboard(keyboard::Event::KeyPressed {
                    key: Key::Named(Named::ArrowRight),
                    ..
                }) => Some(Message::Talks(talks::Message::Next)),
                Event::Keyboard(keyboard::Event::KeyPressed {
                    key: Key::Named(Named::ArrowLeft),
                    ..
                }) => Some(Message::Talks(talks::Message::Previous)),
                _ => None,
            }
        })
    } else {
        Subscription::none()
    }
}
