// SPDX-License-Identifier: MPL-2.0
//! Adjustment panel: preset or prompt-driven global adjustments.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::styles::button as button_styles;
use iced::widget::{button, container, text, text_input, Column, Row};
use iced::{Element, Length};

use super::{AdjustmentPreset, Message, State, ViewContext};

pub fn panel<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = text(ctx.i18n.tr("adjustment-title")).size(typography::TITLE_SM);

    // Presets in a 2x2 grid.
    let mut presets = Column::new().spacing(spacing::XXS);
    for pair in AdjustmentPreset::ALL.chunks(2) {
        let mut row = Row::new().spacing(spacing::XXS);
        for preset in pair {
            row = row.push(preset_button(state, ctx, *preset));
        }
        presets = presets.push(row);
    }

    let placeholder = ctx.i18n.tr("adjustment-placeholder");
    let mut prompt_input = text_input(&placeholder, &state.adjustment_prompt)
        .padding(spacing::XS)
        .size(typography::BODY);
    if !ctx.is_loading {
        prompt_input = prompt_input.on_input(Message::AdjustmentPromptChanged);
    }

    let apply_btn = {
        let btn = button(text(ctx.i18n.tr("adjustment-apply")).size(typography::BODY))
            .padding(spacing::XS)
            .width(Length::Fill);
        if state.adjustment_submit_enabled(ctx.is_loading) {
            btn.on_press(Message::SubmitAdjustment)
                .style(button_styles::primary)
        } else {
            btn.style(button_styles::disabled())
        }
    };

    container(
        Column::new()
            .spacing(spacing::XS)
            .push(title)
            .push(presets)
            .push(prompt_input)
            .push(apply_btn),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

fn preset_button<'a>(
    state: &State,
    ctx: &ViewContext<'a>,
    preset: AdjustmentPreset,
) -> Element<'a, Message> {
    let is_selected = state.adjustment_preset == Some(preset);
    let btn = button(text(ctx.i18n.tr(preset.label_key())).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .width(Length::Fill);

    if ctx.is_loading {
        btn.style(button_styles::disabled()).into()
    } else {
        btn.on_press(Message::SelectAdjustmentPreset(preset))
            .style(if is_selected {
                button_styles::selected
            } else {
                button_styles::unselected
            })
            .into()
    }
}
