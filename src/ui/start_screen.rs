// SPDX-License-Identifier: MPL-2.0
//! Start screen shown before an image is loaded: headline, upload
//! button, and feature cards.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, text, Column, Container, Row, Text},
    Element, Length,
};

/// Messages emitted by the start screen.
#[derive(Debug, Clone)]
pub enum Message {
    UploadImage,
}

/// Render the start screen.
pub fn view<'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let headline = Column::new()
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("start-title-1")).size(typography::TITLE_LG))
        .push(Text::new(i18n.tr("start-title-2")).size(typography::TITLE_LG));

    let subtitle = Text::new(i18n.tr("start-subtitle")).size(typography::BODY);

    let upload_btn = button(Text::new(i18n.tr("upload-image")).size(typography::BODY_LG))
        .on_press(Message::UploadImage)
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary);

    let drop_hint = Text::new(i18n.tr("drag-and-drop")).size(typography::BODY_SM);

    let features = Row::new()
        .spacing(spacing::MD)
        .push(feature_card(
            i18n,
            "feature-retouch-title",
            "feature-retouch-desc",
        ))
        .push(feature_card(
            i18n,
            "feature-filters-title",
            "feature-filters-desc",
        ))
        .push(feature_card(
            i18n,
            "feature-adjust-title",
            "feature-adjust-desc",
        ));

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(headline)
        .push(subtitle)
        .push(upload_btn)
        .push(drop_hint)
        .push(features);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .padding(spacing::XL)
        .into()
}

fn feature_card<'a>(
    i18n: &'a I18n,
    title_key: &str,
    desc_key: &str,
) -> Element<'a, Message> {
    let card = Column::new()
        .spacing(spacing::XS)
        .push(text(i18n.tr(title_key)).size(typography::BODY_LG))
        .push(text(i18n.tr(desc_key)).size(typography::BODY_SM));

    Container::new(card)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn start_screen_renders() {
        let i18n = I18n::default();
        let _element = view(&i18n);
    }

    #[test]
    fn start_screen_renders_in_every_locale() {
        let mut i18n = I18n::default();
        for locale in i18n.available_locales.clone() {
            i18n.set_locale(locale);
            let _element = view(&i18n);
        }
    }
}
