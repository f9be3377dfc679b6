// SPDX-License-Identifier: MPL-2.0
//! Busy indicator shown while a generative edit is in flight.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment,
    widget::{Column, Container, Text},
    Element, Length,
};

/// Render a centered panel with the localized "working" message.
///
/// The surrounding controls are disabled while this is visible, so the
/// panel itself emits no messages.
pub fn view<'a, Message: 'a>(working_text: String) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(working_text).size(typography::BODY_LG));

    let panel = Container::new(content)
        .padding(spacing::LG)
        .style(styles::container::panel);

    Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
