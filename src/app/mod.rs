// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the three tabs.
//!
//! The `App` struct owns the tab states, localization and the profile store,
//! and turns component events into side effects: persisting the name card,
//! reloading the card display, and launching the feedback mail.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod tab;
mod view;

pub use message::{Flags, Message};
pub use tab::Tab;

use crate::conference::FEEDBACK_MAILTO;
use crate::i18n::fluent::I18n;
use crate::profile::{CodeFormat, ProfileStore};
use crate::ui::info;
use crate::ui::name_card::{self, display, editor};
use crate::ui::talks;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    tab: Tab,
    info: info::State,
    talks: talks::State,
    name_card: name_card::Card,
    editor: Option<editor::State>,
    store: ProfileStore,
    code_format: CodeFormat,
    /// Resolved once at startup.
    theme: Theme,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("tab", &self.tab)
            .field("editor_open", &self.editor.is_some())
            .field("store", &self.store)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config and the stored profile, then opens on the requested tab.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            tracing::warn!("{warning}");
        }

        let app = Self::with_store(
            &config,
            flags.lang,
            ProfileStore::open_default(),
            flags.tab.unwrap_or_default(),
        );
        tracing::info!(tab = %app.tab, locale = %app.i18n.current_locale(), "application started");
        (app, Task::none())
    }

    /// Builds the app around an already opened store.
    #[must_use]
    pub fn with_store(config: &Config, lang: Option<String>, store: ProfileStore, tab: Tab) -> Self {
        let code_format = config.name_card.code_format;
        let mut name_card = name_card::Card::default();
        name_card.load(&store, code_format);

        Self {
            i18n: I18n::new(lang, config),
            tab,
            info: info::State::default(),
            talks: talks::State::default(),
            name_card,
            editor: None,
            store,
            code_format,
            theme: config.general.theme_mode.theme(),
        }
    }

    #[must_use]
    pub fn tab(&self) -> Tab {
        self.tab
    }

    #[must_use]
    pub fn name_card(&self) -> &name_card::Card {
        &self.name_card
    }

    #[must_use]
    pub fn editor(&self) -> Option<&editor::State> {
        self.editor.as_ref()
    }

    #[must_use]
    pub fn talks(&self) -> &talks::State {
        &self.talks
    }

    #[must_use]
    pub fn info(&self) -> &info::State {
        &self.info
    }

    #[must_use]
    pub fn store(&self) -> &ProfileStore {
        &self.store
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let tab_name = self.i18n.tr(self.tab.label_key());
        format!("{tab_name} - {app_name}")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.tab, self.editor.is_some())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectTab(tab) => {
                if tab == Tab::NameCard {
                    self.reload_name_card();
                }
                self.tab = tab;
                Task::none()
            }
            Message::Info(message) => {
                match self.info.update(message) {
                    info::Event::None => {}
                    info::Event::SendFeedback => open_feedback(),
                }
                Task::none()
            }
            Message::Talks(message) => {
                self.talks.update(message);
                Task::none()
            }
            Message::NameCard(message) => match self.name_card.update(message) {
                display::Event::OpenEditor => {
                    self.editor = Some(editor::State::new(self.store.snapshot(), &self.i18n));
                    editor::State::focus_name()
                }
            },
            Message::Editor(message) => {
                // Late results (e.g. a photo decode) after the editor closed are dropped.
                let Some(editor) = self.editor.as_mut() else {
                    return Task::none();
                };
                let (event, task) = editor.update(message);
                match event {
                    editor::Event::None => {}
                    editor::Event::Save(update) => {
                        let profile = self.store.update(update);
                        self.editor = None;
                        self.name_card.show(profile, self.code_format);
                    }
                    editor::Event::Dismiss => self.editor = None,
                }
                task.map(Message::Editor)
            }
        }
    }

    fn reload_name_card(&mut self) {
        self.name_card.load(&self.store, self.code_format);
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            tab: self.tab,
            info: &self.info,
            talks: &self.talks,
            name_card: &self.name_card,
            editor: self.editor.as_ref(),
        })
    }
}

/// Hands the feedback `mailto:` URL to the system. Failures are only logged.
fn open_feedback() {
    match opener::open(FEEDBACK_MAILTO) {
        Ok(()) => tracing::info!("opened feedback mail"),
        Err(err) => tracing::warn!(%err, "failed to open mail client"),
    }
}
