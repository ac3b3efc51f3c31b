// SPDX-License-Identifier: MPL-2.0
//! Info tab: venue map, event details and the "More Info" page.
//!
//! The tab keeps its own route stack so switching tabs and coming back
//! returns to the same page.

pub mod map;
pub mod more_info;

use crate::conference::{EventDetail, EVENT_DETAILS, VENUE};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, canvas, container, rule, scrollable, Column, Row, Space, Text};
use iced::{Element, Length};
use map::VenueMap;

/// Contextual data needed to render the info tab.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Pages of the info tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Overview,
    MoreInfo,
}

/// Messages emitted by the info tab.
#[derive(Debug, Clone)]
pub enum Message {
    ShowMoreInfo,
    Back,
    SendFeedback,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Open the organisers' feedback mail.
    SendFeedback,
}

/// Info tab state.
#[derive(Debug, Clone)]
pub struct State {
    routes: Vec<Route>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            routes: vec![Route::Overview],
        }
    }
}

impl State {
    /// Page currently on top of the stack.
    #[must_use]
    pub fn route(&self) -> Route {
        self.routes.last().copied().unwrap_or(Route::Overview)
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::ShowMoreInfo => {
                if self.route() != Route::MoreInfo {
                    self.routes.push(Route::MoreInfo);
                }
                Event::None
            }
            Message::Back => {
                // The overview is the root and never pops.
                if self.routes.len() > 1 {
                    self.routes.pop();
                }
                Event::None
            }
            Message::SendFeedback => Event::SendFeedback,
        }
    }

    #[must_use]
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        match self.route() {
            Route::Overview => overview(ctx.i18n),
            Route::MoreInfo => more_info::view(ctx.i18n),
        }
    }
}

fn overview(i18n: &I18n) -> Element<'_, Message> {
    let map = canvas(VenueMap::new(VENUE))
        .width(Length::Fill)
        .height(sizing::MAP_HEIGHT);

    let caption = Text::new(format!(
        "{} · {}",
        i18n.tr_with_args("info-map-caption", &[("venue", VENUE.name)]),
        VENUE.coordinates_label()
    ))
    .size(typography::CAPTION);

    let details = EVENT_DETAILS
        .iter()
        .enumerate()
        .fold(Column::new().spacing(spacing::XS), |column, (index, detail)| {
            let column = if index > 0 {
                column.push(rule::horizontal(1))
            } else {
                column
            };
            column.push(detail_row(detail))
        });

    let more_button = button(Text::new(i18n.tr("info-more-button")))
        .on_press(Message::ShowMoreInfo)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(Text::new(i18n.tr("info-title")).size(typography::TITLE_LG))
        .push(container(map).style(styles::container::card).clip(true))
        .push(caption)
        .push(container(details).padding(spacing::MD).style(styles::container::card))
        .push(container(more_button).align_x(Horizontal::Center).width(Length::Fill));

    scrollable(container(content).center_x(Length::Fill)).into()
}

fn detail_row<'a>(detail: &EventDetail) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(Text::new(detail.label).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(Text::new(detail.value).size(typography::BODY))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_overview() {
        assert_eq!(State::default().route(), Route::Overview);
    }

    #[test]
    fn more_info_pushes_and_back_pops() {
        let mut state = State::default();
        assert_eq!(state.update(Message::ShowMoreInfo), Event::None);
        assert_eq!(state.route(), Route::MoreInfo);

        state.update(Message::Back);
        assert_eq!(state.route(), Route::Overview);
    }

    #[test]
    fn back_on_overview_stays_put() {
        let mut state = State::default();
        state.update(Message::Back);
        assert_eq!(state.route(), Route::Overview);
    }

    #[test]
    fn repeated_show_does_not_stack_pages() {
        let mut state = State::default();
        state.update(Message::ShowMoreInfo);
        state.update(Message::ShowMoreInfo);
        state.update(Message::Back);
        assert_eq!(state.route(), Route::Overview);
    }

    #[test]
    fn feedback_is_reported_to_the_app() {
        let mut state = State::default();
        state.update(Message::ShowMoreInfo);
        assert_eq!(state.update(Message::SendFeedback), Event::SendFeedback);
        assert_eq!(state.route(), Route::MoreInfo);
    }
}
