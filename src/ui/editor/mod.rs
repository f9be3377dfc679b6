// SPDX-License-Identifier: MPL-2.0
//! Editing sidebar: tab bar plus the retouch, adjustment, filter, and
//! crop panels.
//!
//! The sidebar owns the prompt drafts and the crop configuration, but
//! never the image or the backend. Anything that must leave the sidebar
//! (an aspect change, a crop request, a generative edit) is propagated
//! as an [`Event`] for the application to act on.

pub mod adjustment_panel;
pub mod crop_panel;
pub mod filter_panel;
pub mod retouch_panel;

use crate::backend::{EditRequest, Hotspot};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::styles::button as button_styles;
use iced::widget::{button, text, Column, Row};
use iced::{Element, Length};

/// Editing tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Retouch,
    Adjust,
    Filters,
    Crop,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Retouch, Tab::Adjust, Tab::Filters, Tab::Crop];

    pub fn label_key(&self) -> &'static str {
        match self {
            Tab::Retouch => "tab-retouch",
            Tab::Adjust => "tab-adjust",
            Tab::Filters => "tab-filters",
            Tab::Crop => "tab-crop",
        }
    }
}

/// Aspect ratio constraints offered by the crop panel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AspectRatio {
    #[default]
    Free,
    Square,
    Widescreen,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 3] =
        [AspectRatio::Free, AspectRatio::Square, AspectRatio::Widescreen];

    /// The width/height ratio to constrain the selection to, or `None`
    /// for a freeform selection.
    pub fn ratio(&self) -> Option<f32> {
        match self {
            AspectRatio::Free => None,
            AspectRatio::Square => Some(1.0),
            AspectRatio::Widescreen => Some(16.0 / 9.0),
        }
    }

    /// Label for the ratio button. Numeric ratios are shown as-is in
    /// every locale; only "free" is translated.
    pub fn label(&self, i18n: &I18n) -> String {
        match self {
            AspectRatio::Free => i18n.tr("crop-ratio-free"),
            AspectRatio::Square => "1:1".to_string(),
            AspectRatio::Widescreen => "16:9".to_string(),
        }
    }
}

/// One-click adjustments offered before the free-form prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustmentPreset {
    BlurBackground,
    EnhanceDetails,
    WarmerLighting,
    StudioLight,
}

impl AdjustmentPreset {
    pub const ALL: [AdjustmentPreset; 4] = [
        AdjustmentPreset::BlurBackground,
        AdjustmentPreset::EnhanceDetails,
        AdjustmentPreset::WarmerLighting,
        AdjustmentPreset::StudioLight,
    ];

    pub fn label_key(&self) -> &'static str {
        match self {
            AdjustmentPreset::BlurBackground => "adjustment-preset-blur",
            AdjustmentPreset::EnhanceDetails => "adjustment-preset-enhance",
            AdjustmentPreset::WarmerLighting => "adjustment-preset-warmer",
            AdjustmentPreset::StudioLight => "adjustment-preset-studio",
        }
    }

    /// The instruction sent to the backend. Always English, independent
    /// of the UI locale.
    pub fn prompt(&self) -> &'static str {
        match self {
            AdjustmentPreset::BlurBackground => {
                "Blur the background to create a shallow depth-of-field effect."
            }
            AdjustmentPreset::EnhanceDetails => {
                "Slightly enhance the sharpness and details of the image without making it look unnatural."
            }
            AdjustmentPreset::WarmerLighting => {
                "Adjust the color temperature to give the image warmer, golden-hour style lighting."
            }
            AdjustmentPreset::StudioLight => {
                "Add dramatic, professional studio lighting to the main subject."
            }
        }
    }
}

/// One-click stylistic filters offered before the free-form prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterPreset {
    Synthwave,
    Anime,
    Lomo,
    Glitch,
}

impl FilterPreset {
    pub const ALL: [FilterPreset; 4] = [
        FilterPreset::Synthwave,
        FilterPreset::Anime,
        FilterPreset::Lomo,
        FilterPreset::Glitch,
    ];

    pub fn label_key(&self) -> &'static str {
        match self {
            FilterPreset::Synthwave => "filter-preset-synthwave",
            FilterPreset::Anime => "filter-preset-anime",
            FilterPreset::Lomo => "filter-preset-lomo",
            FilterPreset::Glitch => "filter-preset-glitch",
        }
    }

    /// The instruction sent to the backend. Always English, independent
    /// of the UI locale.
    pub fn prompt(&self) -> &'static str {
        match self {
            FilterPreset::Synthwave => {
                "Apply a vibrant 80s synthwave aesthetic with neon magenta and cyan glows."
            }
            FilterPreset::Anime => {
                "Give the image a vibrant Japanese anime style, with bold outlines and cel-shading."
            }
            FilterPreset::Lomo => {
                "Apply a Lomography-style cross-processing film effect with high-contrast, saturated colors, and dark vignetting."
            }
            FilterPreset::Glitch => {
                "Transform the image into a futuristic holographic projection with digital glitch effects."
            }
        }
    }
}

/// Sidebar state. Owned by the application, mutated through [`update`].
#[derive(Default)]
pub struct State {
    pub tab: Tab,
    pub aspect: AspectRatio,
    pub retouch_prompt: String,
    pub hotspot: Option<Hotspot>,
    pub adjustment_prompt: String,
    pub adjustment_preset: Option<AdjustmentPreset>,
    pub filter_prompt: String,
    pub filter_preset: Option<FilterPreset>,
    /// Whether a crop selection currently exists on the canvas.
    pub is_cropping: bool,
}

impl State {
    /// A crop can be applied once a selection exists and no edit is in
    /// flight.
    pub fn crop_apply_enabled(&self, is_loading: bool) -> bool {
        !is_loading && self.is_cropping
    }

    /// Retouching needs both a hotspot and a non-blank prompt.
    pub fn retouch_submit_enabled(&self, is_loading: bool) -> bool {
        !is_loading && self.hotspot.is_some() && !self.retouch_prompt.trim().is_empty()
    }

    pub fn adjustment_submit_enabled(&self, is_loading: bool) -> bool {
        !is_loading && self.active_adjustment_prompt().is_some()
    }

    pub fn filter_submit_enabled(&self, is_loading: bool) -> bool {
        !is_loading && self.active_filter_prompt().is_some()
    }

    /// The adjustment instruction that would be submitted: a non-blank
    /// custom prompt wins over the selected preset.
    pub fn active_adjustment_prompt(&self) -> Option<String> {
        let custom = self.adjustment_prompt.trim();
        if !custom.is_empty() {
            return Some(custom.to_string());
        }
        self.adjustment_preset
            .map(|preset| preset.prompt().to_string())
    }

    /// The filter instruction that would be submitted, same precedence
    /// as [`active_adjustment_prompt`](Self::active_adjustment_prompt).
    pub fn active_filter_prompt(&self) -> Option<String> {
        let custom = self.filter_prompt.trim();
        if !custom.is_empty() {
            return Some(custom.to_string());
        }
        self.filter_preset.map(|preset| preset.prompt().to_string())
    }

    /// Clears per-image state after a crop or a new upload.
    pub fn reset_selection(&mut self) {
        self.is_cropping = false;
        self.hotspot = None;
    }
}

/// Contextual data needed to render the sidebar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub is_loading: bool,
}

/// Messages emitted by the sidebar.
#[derive(Debug, Clone)]
pub enum Message {
    SelectTab(Tab),
    SetAspect(AspectRatio),
    /// The canvas selection appeared or disappeared.
    SelectionChanged(bool),
    ApplyCrop,
    HotspotPicked(Hotspot),
    RetouchPromptChanged(String),
    SubmitRetouch,
    AdjustmentPromptChanged(String),
    SelectAdjustmentPreset(AdjustmentPreset),
    SubmitAdjustment,
    FilterPromptChanged(String),
    SelectFilterPreset(FilterPreset),
    SubmitFilter,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The crop constraint changed; the canvas selection must adopt it.
    AspectChanged(Option<f32>),
    /// The user confirmed the current crop selection.
    CropRequested,
    /// A generative edit is ready to be sent to the backend.
    EditRequested(EditRequest),
}

/// Process a sidebar message and return the corresponding event.
pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::SelectTab(tab) => {
            state.tab = tab;
            Event::None
        }
        Message::SetAspect(aspect) => {
            state.aspect = aspect;
            Event::AspectChanged(aspect.ratio())
        }
        Message::SelectionChanged(active) => {
            state.is_cropping = active;
            Event::None
        }
        Message::ApplyCrop => {
            if state.is_cropping {
                Event::CropRequested
            } else {
                Event::None
            }
        }
        Message::HotspotPicked(hotspot) => {
            state.hotspot = Some(hotspot);
            Event::None
        }
        Message::RetouchPromptChanged(prompt) => {
            state.retouch_prompt = prompt;
            Event::None
        }
        Message::SubmitRetouch => match state.hotspot {
            Some(hotspot) if !state.retouch_prompt.trim().is_empty() => {
                Event::EditRequested(EditRequest::Retouch {
                    prompt: state.retouch_prompt.trim().to_string(),
                    hotspot,
                })
            }
            _ => Event::None,
        },
        Message::AdjustmentPromptChanged(prompt) => {
            state.adjustment_prompt = prompt;
            Event::None
        }
        Message::SelectAdjustmentPreset(preset) => {
            // Re-clicking the active preset deselects it.
            if state.adjustment_preset == Some(preset) {
                state.adjustment_preset = None;
            } else {
                state.adjustment_preset = Some(preset);
            }
            Event::None
        }
        Message::SubmitAdjustment => match state.active_adjustment_prompt() {
            Some(prompt) => Event::EditRequested(EditRequest::Adjustment { prompt }),
            None => Event::None,
        },
        Message::FilterPromptChanged(prompt) => {
            state.filter_prompt = prompt;
            Event::None
        }
        Message::SelectFilterPreset(preset) => {
            if state.filter_preset == Some(preset) {
                state.filter_preset = None;
            } else {
                state.filter_preset = Some(preset);
            }
            Event::None
        }
        Message::SubmitFilter => match state.active_filter_prompt() {
            Some(prompt) => Event::EditRequested(EditRequest::Filter { prompt }),
            None => Event::None,
        },
    }
}

/// Render the sidebar: tab bar on top, the active panel below.
pub fn view<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut tab_bar = Row::new().spacing(spacing::XXS);
    for tab in Tab::ALL {
        tab_bar = tab_bar.push(tab_button(state, ctx, tab));
    }

    let panel = match state.tab {
        Tab::Retouch => retouch_panel::panel(state, ctx),
        Tab::Adjust => adjustment_panel::panel(state, ctx),
        Tab::Filters => filter_panel::panel(state, ctx),
        Tab::Crop => crop_panel::panel(state, ctx),
    };

    Column::new()
        .spacing(spacing::SM)
        .width(sizing::SIDEBAR_WIDTH)
        .push(tab_bar)
        .push(panel)
        .into()
}

fn tab_button<'a>(state: &State, ctx: &ViewContext<'a>, tab: Tab) -> Element<'a, Message> {
    let is_selected = state.tab == tab;
    let label = text(ctx.i18n.tr(tab.label_key())).size(typography::BODY_SM);

    let btn = button(label)
        .padding([spacing::XXS, spacing::XS])
        .width(Length::Fill);

    if ctx.is_loading {
        btn.style(styles::button::disabled()).into()
    } else {
        btn.on_press(Message::SelectTab(tab))
            .style(if is_selected {
                button_styles::selected
            } else {
                button_styles::unselected
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratios_match_their_constraints() {
        assert_eq!(AspectRatio::Free.ratio(), None);
        assert_eq!(AspectRatio::Square.ratio(), Some(1.0));
        assert_eq!(AspectRatio::Widescreen.ratio(), Some(16.0 / 9.0));
    }

    #[test]
    fn set_aspect_emits_the_new_constraint() {
        let mut state = State::default();
        let event = update(Message::SetAspect(AspectRatio::Square), &mut state);
        assert_eq!(state.aspect, AspectRatio::Square);
        match event {
            Event::AspectChanged(ratio) => assert_eq!(ratio, Some(1.0)),
            other => panic!("unexpected event: {other:?}"),
        }

        let event = update(Message::SetAspect(AspectRatio::Free), &mut state);
        assert!(matches!(event, Event::AspectChanged(None)));
    }

    #[test]
    fn apply_crop_requires_an_active_selection() {
        let mut state = State::default();
        let event = update(Message::ApplyCrop, &mut state);
        assert!(matches!(event, Event::None));

        update(Message::SelectionChanged(true), &mut state);
        let event = update(Message::ApplyCrop, &mut state);
        assert!(matches!(event, Event::CropRequested));
    }

    #[test]
    fn crop_apply_disabled_while_loading() {
        let mut state = State::default();
        state.is_cropping = true;
        assert!(state.crop_apply_enabled(false));
        assert!(!state.crop_apply_enabled(true));
    }

    #[test]
    fn retouch_needs_hotspot_and_prompt() {
        let mut state = State::default();
        state.retouch_prompt = "make the shirt green".to_string();
        assert!(!state.retouch_submit_enabled(false));
        let event = update(Message::SubmitRetouch, &mut state);
        assert!(matches!(event, Event::None));

        update(
            Message::HotspotPicked(Hotspot { x: 0.4, y: 0.6 }),
            &mut state,
        );
        assert!(state.retouch_submit_enabled(false));
        let event = update(Message::SubmitRetouch, &mut state);
        match event {
            Event::EditRequested(EditRequest::Retouch { prompt, hotspot }) => {
                assert_eq!(prompt, "make the shirt green");
                assert_eq!(hotspot.x, 0.4);
                assert_eq!(hotspot.y, 0.6);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn custom_adjustment_prompt_wins_over_preset() {
        let mut state = State::default();
        update(
            Message::SelectAdjustmentPreset(AdjustmentPreset::BlurBackground),
            &mut state,
        );
        update(
            Message::AdjustmentPromptChanged("change the background to a forest".to_string()),
            &mut state,
        );

        let event = update(Message::SubmitAdjustment, &mut state);
        match event {
            Event::EditRequested(EditRequest::Adjustment { prompt }) => {
                assert_eq!(prompt, "change the background to a forest");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn preset_reclick_deselects() {
        let mut state = State::default();
        update(
            Message::SelectFilterPreset(FilterPreset::Anime),
            &mut state,
        );
        assert_eq!(state.filter_preset, Some(FilterPreset::Anime));

        update(
            Message::SelectFilterPreset(FilterPreset::Anime),
            &mut state,
        );
        assert_eq!(state.filter_preset, None);

        let event = update(Message::SubmitFilter, &mut state);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn filter_preset_submits_its_english_prompt() {
        let mut state = State::default();
        update(
            Message::SelectFilterPreset(FilterPreset::Synthwave),
            &mut state,
        );
        let event = update(Message::SubmitFilter, &mut state);
        match event {
            Event::EditRequested(EditRequest::Filter { prompt }) => {
                assert_eq!(prompt, FilterPreset::Synthwave.prompt());
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn reset_selection_clears_crop_and_hotspot() {
        let mut state = State::default();
        state.is_cropping = true;
        state.hotspot = Some(Hotspot { x: 0.1, y: 0.2 });
        state.reset_selection();
        assert!(!state.is_cropping);
        assert!(state.hotspot.is_none());
    }
}
