// SPDX-License-Identifier: MPL-2.0
//! Talks tab: one talk per page.
//!
//! Pages change through a horizontal mouse drag over the talk card, the
//! chevron buttons, or the arrow keys (routed in by the app subscription).
//! All three go through [`Pager::swipe`], so the bounds behave the same.

pub mod pager;
pub mod swipe;

pub use pager::{Pager, Swipe};
pub use swipe::SwipeGesture;

use crate::app::config::SWIPE_THRESHOLD_PX;
use crate::conference::{Talk, TALKS};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, mouse_area, scrollable, Column, Row, Space, Text};
use iced::{Element, Length, Point};

/// Contextual data needed to render the talks tab.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the talks tab.
#[derive(Debug, Clone)]
pub enum Message {
    Next,
    Previous,
    CursorMoved(Point),
    DragStarted,
    DragEnded,
    DragCancelled,
}

/// Talks pager state.
#[derive(Debug, Clone)]
pub struct State {
    pager: Pager<Talk>,
    gesture: SwipeGesture,
}

impl Default for State {
    fn default() -> Self {
        Self::new(TALKS.to_vec()).unwrap_or_else(|| unreachable!("talk list is never empty"))
    }
}

impl State {
    /// Builds the pager over `talks`. Returns `None` for an empty list.
    #[must_use]
    pub fn new(talks: Vec<Talk>) -> Option<Self> {
        Some(Self {
            pager: Pager::new(talks)?,
            gesture: SwipeGesture::default(),
        })
    }

    #[must_use]
    pub fn pager(&self) -> &Pager<Talk> {
        &self.pager
    }

    pub fn update(&mut self, message: Message) {
        let swipe = match message {
            Message::Next => Some(Swipe::Left),
            Message::Previous => Some(Swipe::Right),
            Message::CursorMoved(position) => {
                self.gesture.track(position);
                None
            }
            Message::DragStarted => {
                self.gesture.start();
                None
            }
            Message::DragEnded => self.gesture.finish(SWIPE_THRESHOLD_PX),
            Message::DragCancelled => {
                self.gesture.cancel();
                None
            }
        };

        if let Some(direction) = swipe {
            match self.pager.swipe(direction) {
                Some(index) => tracing::debug!(index, ?direction, "talk page changed"),
                None => tracing::trace!(?direction, "no talk in that direction"),
            }
        }
    }

    #[must_use]
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let heading = Text::new(ctx.i18n.tr("talks-title")).size(typography::TITLE_LG);

        let card = mouse_area(
            container(talk_page(ctx.i18n, self.pager.current()))
                .padding(spacing::LG)
                .width(Length::Fill)
                .style(styles::container::card),
        )
        .on_move(Message::CursorMoved)
        .on_press(Message::DragStarted)
        .on_release(Message::DragEnded)
        .on_exit(Message::DragCancelled);

        let previous = button(Text::new("‹").size(typography::TITLE_LG))
            .on_press_maybe(self.pager.has_previous().then_some(Message::Previous))
            .style(styles::button::link);
        let next = button(Text::new("›").size(typography::TITLE_LG))
            .on_press_maybe(self.pager.has_next().then_some(Message::Next))
            .style(styles::button::link);

        let controls = Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(previous)
            .push(page_dots(&self.pager))
            .push(next);

        let position = ctx.i18n.tr_with_args(
            "talks-position",
            &[
                ("current", &(self.pager.index() + 1).to_string()),
                ("total", &self.pager.len().to_string()),
            ],
        );

        let content = Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .align_x(Horizontal::Center)
            .push(heading)
            .push(card)
            .push(controls)
            .push(Text::new(position).size(typography::BODY))
            .push(Text::new(ctx.i18n.tr("talks-swipe-hint")).size(typography::CAPTION));

        scrollable(container(content).center_x(Length::Fill)).into()
    }
}

fn talk_page<'a>(i18n: &I18n, talk: &Talk) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(talk.title).size(typography::TITLE_MD))
        .push(
            Text::new(i18n.tr_with_args("talks-speaker", &[("speaker", talk.speaker)]))
                .size(typography::BODY_LG),
        )
        .push(Text::new(talk.time).size(typography::BODY))
        .push(Space::new().height(spacing::XS))
        .push(Text::new(talk.summary).size(typography::BODY))
        .into()
}

fn page_dots<'a, T>(pager: &Pager<T>) -> Element<'a, Message> {
    (0..pager.len())
        .fold(Row::new().spacing(spacing::XS), |row, index| {
            row.push(
                container(Space::new())
                    .width(sizing::PAGE_DOT)
                    .height(sizing::PAGE_DOT)
                    .style(styles::container::page_dot(index == pager.index())),
            )
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_talk() {
        let state = State::default();
        assert_eq!(state.pager().index(), 0);
        assert_eq!(state.pager().current().title, TALKS[0].title);
    }

    #[test]
    fn empty_talk_list_is_rejected() {
        assert!(State::new(Vec::new()).is_none());
    }

    #[test]
    fn next_and_previous_respect_bounds() {
        let mut state = State::default();
        state.update(Message::Previous);
        assert_eq!(state.pager().index(), 0);

        for _ in 0..5 {
            state.update(Message::Next);
        }
        assert_eq!(state.pager().index(), TALKS.len() - 1);

        state.update(Message::Previous);
        assert_eq!(state.pager().index(), TALKS.len() - 2);
    }

    #[test]
    fn left_drag_past_threshold_advances() {
        let mut state = State::default();
        state.update(Message::CursorMoved(Point::new(400.0, 100.0)));
        state.update(Message::DragStarted);
        state.update(Message::CursorMoved(Point::new(400.0 - SWIPE_THRESHOLD_PX - 1.0, 105.0)));
        state.update(Message::DragEnded);
        assert_eq!(state.pager().index(), 1);
    }

    #[test]
    fn short_drag_does_not_change_page() {
        let mut state = State::default();
        state.update(Message::CursorMoved(Point::new(400.0, 100.0)));
        state.update(Message::DragStarted);
        state.update(Message::CursorMoved(Point::new(380.0, 100.0)));
        state.update(Message::DragEnded);
        assert_eq!(state.pager().index(), 0);
    }

    #[test]
    fn drag_leaving_the_card_is_cancelled() {
        let mut state = State::default();
        state.update(Message::CursorMoved(Point::new(400.0, 100.0)));
        state.update(Message::DragStarted);
        state.update(Message::DragCancelled);
        state.update(Message::CursorMoved(Point::new(100.0, 100.0)));
        state.update(Message::DragEnded);
        assert_eq!(state.pager().index(), 0);
    }
}
