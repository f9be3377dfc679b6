// SPDX-License-Identifier: MPL-2.0
//! Crop panel for the editing sidebar.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::styles::button as button_styles;
use iced::widget::{button, container, text, Column, Row};
use iced::{Element, Length};

use super::{AspectRatio, Message, State, ViewContext};

pub fn panel<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = text(ctx.i18n.tr("crop-title")).size(typography::TITLE_SM);
    let description = text(ctx.i18n.tr("crop-description")).size(typography::BODY_SM);
    let ratio_label = text(ctx.i18n.tr("aspect-ratio-label")).size(typography::BODY_SM);

    let mut ratios = Row::new().spacing(spacing::XXS);
    for aspect in AspectRatio::ALL {
        ratios = ratios.push(ratio_button(state, ctx, aspect));
    }

    let apply_btn = {
        let btn = button(text(ctx.i18n.tr("crop-apply")).size(typography::BODY))
            .padding(spacing::XS)
            .width(Length::Fill);
        if state.crop_apply_enabled(ctx.is_loading) {
            btn.on_press(Message::ApplyCrop).style(button_styles::primary)
        } else {
            btn.style(button_styles::disabled())
        }
    };

    container(
        Column::new()
            .spacing(spacing::XS)
            .push(title)
            .push(description)
            .push(ratio_label)
            .push(ratios)
            .push(apply_btn),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

fn ratio_button<'a>(
    state: &State,
    ctx: &ViewContext<'a>,
    aspect: AspectRatio,
) -> Element<'a, Message> {
    let is_selected = state.aspect == aspect;
    let btn = button(text(aspect.label(ctx.i18n)).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .width(Length::Fill);

    if ctx.is_loading {
        btn.style(button_styles::disabled()).into()
    } else {
        btn.on_press(Message::SetAspect(aspect))
            .style(if is_selected {
                button_styles::selected
            } else {
                button_styles::unselected
            })
            .into()
    }
}
