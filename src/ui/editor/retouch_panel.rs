// SPDX-License-Identifier: MPL-2.0
//! Retouch panel: hotspot-anchored, prompt-driven local edits.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::styles::button as button_styles;
use iced::widget::{button, container, text, text_input, Column};
use iced::{Element, Length};

use super::{Message, State, ViewContext};

pub fn panel<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    // The guidance text changes once a point has been picked.
    let guidance_key = if state.hotspot.is_some() {
        "prompt-description"
    } else {
        "prompt-click"
    };
    let guidance = text(ctx.i18n.tr(guidance_key)).size(typography::BODY_SM);

    let placeholder = if state.hotspot.is_some() {
        ctx.i18n.tr("prompt-example")
    } else {
        ctx.i18n.tr("prompt-placeholder")
    };
    let mut prompt_input = text_input(&placeholder, &state.retouch_prompt)
        .padding(spacing::XS)
        .size(typography::BODY);
    if state.hotspot.is_some() && !ctx.is_loading {
        prompt_input = prompt_input.on_input(Message::RetouchPromptChanged);
    }

    let generate_btn = {
        let btn = button(text(ctx.i18n.tr("generate")).size(typography::BODY))
            .padding(spacing::XS)
            .width(Length::Fill);
        if state.retouch_submit_enabled(ctx.is_loading) {
            btn.on_press(Message::SubmitRetouch)
                .style(button_styles::primary)
        } else {
            btn.style(button_styles::disabled())
        }
    };

    container(
        Column::new()
            .spacing(spacing::XS)
            .push(guidance)
            .push(prompt_input)
            .push(generate_btn),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}
