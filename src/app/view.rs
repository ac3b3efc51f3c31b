// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The active tab fills the window above the tab bar. While the name card
//! editor is open it is stacked on top as an opaque modal.

use super::{Message, Tab};
use crate::i18n::fluent::I18n;
use crate::ui::name_card::{self, editor};
use crate::ui::{info, tab_bar, talks};
use iced::widget::{opaque, Column, Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub tab: Tab,
    pub info: &'a info::State,
    pub talks: &'a talks::State,
    pub name_card: &'a name_card::Card,
    pub editor: Option<&'a editor::State>,
}

/// Renders the current tab, the tab bar and, if open, the editor.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let current_view: Element<'_, Message> = match ctx.tab {
        Tab::Info => ctx.info.view(info::ViewContext { i18n }).map(Message::Info),
        Tab::Talks => ctx.talks.view(talks::ViewContext { i18n }).map(Message::Talks),
        Tab::NameCard => ctx
            .name_card
            .view(name_card::display::ViewContext { i18n })
            .map(Message::NameCard),
    };

    let bar = tab_bar::view(tab_bar::ViewContext {
        i18n,
        active: ctx.tab,
    })
    .map(Message::SelectTab);

    let base = Column::new()
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(bar)
        .width(Length::Fill)
        .height(Length::Fill);

    match ctx.editor {
        Some(editor) => Stack::new()
            .push(base)
            .push(opaque(
                editor
                    .view(editor::ViewContext { i18n })
                    .map(Message::Editor),
            ))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => base.into(),
    }
}
