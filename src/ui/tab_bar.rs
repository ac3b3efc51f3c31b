// SPDX-License-Identifier: MPL-2.0
//! Tab bar along the bottom of the window.

use crate::app::Tab;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, container, Row, Text};
use iced::{Element, Length};

/// Contextual data needed to render the tab bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Tab,
}

/// Glyph shown above each tab label.
fn glyph(tab: Tab) -> &'static str {
    match tab {
        Tab::Info => "ⓘ",
        Tab::Talks => "🎤",
        Tab::NameCard => "🪪",
    }
}

/// Render the tab bar. Pressing a tab emits it.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Tab> {
    let tabs = Tab::ALL.into_iter().fold(
        Row::new().height(Length::Fill).align_y(Vertical::Center),
        |row, tab| {
            let label = iced::widget::column![
                Text::new(glyph(tab)).size(typography::TITLE_SM),
                Text::new(ctx.i18n.tr(tab.label_key())).size(typography::CAPTION),
            ]
            .align_x(iced::alignment::Horizontal::Center);

            row.push(
                button(container(label).center_x(Length::Fill))
                    .width(Length::Fill)
                    .on_press(tab)
                    .style(styles::button::tab(tab == ctx.active)),
            )
        },
    );

    container(tabs)
        .width(Length::Fill)
        .height(sizing::TAB_BAR_HEIGHT)
        .style(styles::container::tab_bar)
        .into()
}
