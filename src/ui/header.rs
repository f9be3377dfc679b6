// SPDX-License-Identifier: MPL-2.0
//! Application header with the title and the language switcher.
//!
//! The switcher is a button showing the active locale tag in uppercase.
//! Pressing it opens a dropdown listing every available language by its
//! native name; selecting one propagates a `LanguageSelected` event to
//! the parent application.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub menu_open: bool,
}

/// Messages emitted by the header.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleLanguageMenu,
    CloseLanguageMenu,
    SelectLanguage(LanguageIdentifier),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    LanguageSelected(LanguageIdentifier),
}

/// Process a header message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleLanguageMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseLanguageMenu => {
            *menu_open = false;
            Event::None
        }
        Message::SelectLanguage(locale) => {
            *menu_open = false;
            Event::LanguageSelected(locale)
        }
    }
}

/// Render the header bar, with the language dropdown below it when open.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    content = content.push(build_top_bar(&ctx));

    if ctx.menu_open {
        content = content.push(build_language_menu(&ctx));
    }

    content.into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("app-title")).size(typography::TITLE_MD);

    let current_tag = ctx.i18n.current_locale().to_string().to_uppercase();
    let switcher = button(Text::new(current_tag).size(typography::BODY_SM))
        .on_press(Message::ToggleLanguageMenu)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::unselected);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(title)
        .push(
            Container::new(switcher)
                .width(Length::Fill)
                .align_x(Horizontal::Right),
        );

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::toolbar)
        .into()
}

fn build_language_menu<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut menu_column = Column::new().spacing(spacing::XXS);

    for locale in &ctx.i18n.available_locales {
        menu_column = menu_column.push(build_language_item(ctx, locale));
    }

    let menu = Container::new(menu_column)
        .padding(spacing::XS)
        .width(sizing::LANGUAGE_MENU_WIDTH)
        .style(styles::container::dropdown);

    // Align under the switcher at the right edge of the bar.
    Container::new(menu)
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .padding([0.0, spacing::SM])
        .into()
}

fn build_language_item<'a>(
    ctx: &ViewContext<'a>,
    locale: &LanguageIdentifier,
) -> Element<'a, Message> {
    let label = Text::new(ctx.i18n.native_name(locale)).size(typography::BODY);
    let is_current = locale == ctx.i18n.current_locale();

    let item = button(label)
        .on_press(Message::SelectLanguage(locale.clone()))
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill);

    if is_current {
        item.style(styles::button::selected).into()
    } else {
        item.style(styles::button::menu_item).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn header_view_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            menu_open: false,
        };
        let _element = view(ctx);
    }

    #[test]
    fn header_view_renders_with_menu_open() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            menu_open: true,
        };
        let _element = view(ctx);
    }

    #[test]
    fn toggle_menu_changes_state() {
        let mut menu_open = false;
        let event = update(Message::ToggleLanguageMenu, &mut menu_open);
        assert!(menu_open);
        assert!(matches!(event, Event::None));

        let event = update(Message::ToggleLanguageMenu, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn close_menu_is_idempotent() {
        let mut menu_open = false;
        let event = update(Message::CloseLanguageMenu, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn selecting_a_language_closes_menu_and_emits_event() {
        let mut menu_open = true;
        let ja: LanguageIdentifier = "ja".parse().expect("valid tag");
        let event = update(Message::SelectLanguage(ja.clone()), &mut menu_open);
        assert!(!menu_open);
        match event {
            Event::LanguageSelected(locale) => assert_eq!(locale, ja),
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
