// SPDX-License-Identifier: MPL-2.0
//! "More Info" page pushed from the Info overview.

use super::Message;
use crate::conference::{InfoBlurb, MORE_INFO_BLURBS, MORE_INFO_FOOTER, MORE_INFO_INTRO};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, container, scrollable, Column, Row, Text};
use iced::{Element, Length};

pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let back_button = button(Text::new(format!("← {}", i18n.tr("nav-back"))).size(typography::BODY))
        .on_press(Message::Back)
        .style(styles::button::secondary);

    let header = Row::new()
        .spacing(spacing::MD)
        .push(back_button)
        .push(Text::new(i18n.tr("more-info-title")).size(typography::TITLE_MD));

    let blurbs = MORE_INFO_BLURBS
        .iter()
        .fold(Column::new().spacing(spacing::MD), |column, blurb| {
            column.push(blurb_view(blurb))
        });

    let feedback = button(Text::new(format!("✉ {}", i18n.tr("more-info-feedback-button"))))
        .on_press(Message::SendFeedback)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(header)
        .push(Text::new(MORE_INFO_INTRO).size(typography::TITLE_LG))
        .push(blurbs)
        .push(Text::new(MORE_INFO_FOOTER).size(typography::BODY))
        .push(container(feedback).align_x(Horizontal::Center).width(Length::Fill));

    scrollable(container(content).center_x(Length::Fill)).into()
}

fn blurb_view<'a>(blurb: &InfoBlurb) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(blurb.title).size(typography::TITLE_SM))
        .push(Text::new(blurb.detail).size(typography::BODY))
        .into()
}
