// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the start screen,
//! the editor, and the edit backend.
//!
//! The `App` struct wires together the domains (editor, localization,
//! backend dispatch) and translates component events into side effects.
//! This file intentionally keeps policy decisions (window size, locale
//! adoption, retry semantics) close to the main update loop so it is
//! easy to audit user-facing behavior.

mod message;
mod screen;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::backend::{EditBackend, EditOutcome, EditRequest, NullBackend};
use crate::i18n::fluent::{self, I18n};
use crate::ui::components::error_display::{centered_error_view, ErrorDisplay, ErrorSeverity};
use crate::ui::components::loading_overlay;
use crate::ui::design_tokens::spacing;
use crate::ui::editor;
use crate::ui::header;
use crate::ui::start_screen;
use iced::{
    widget::{Column, Container, Row},
    window, Element, Length, Task, Theme,
};
use std::fmt;
use std::sync::Arc;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 760;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Root Iced application state that bridges UI components, localization,
/// and the generative edit backend.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    /// Whether the language switcher dropdown is open.
    language_menu_open: bool,
    editor: editor::State,
    /// Whether a generative edit is in flight.
    is_loading: bool,
    /// Localization key of the last backend failure, if unresolved.
    error_key: Option<&'static str>,
    /// The most recent edit request, kept for "try again".
    last_request: Option<EditRequest>,
    /// The most recent successful edit result.
    latest_result: Option<EditOutcome>,
    backend: Arc<dyn EditBackend>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("is_loading", &self.is_loading)
            .field("error_key", &self.error_key)
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Start,
            language_menu_open: false,
            editor: editor::State::default(),
            is_loading: false,
            error_key: None,
            last_request: None,
            latest_result: None,
            backend: Arc::new(NullBackend),
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Initializes application state and, unless the locale was forced on
    /// the command line, kicks off asynchronous OS locale detection.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let forced_locale = flags.lang.is_some();
        let i18n = I18n::new(flags.lang);

        let app = App {
            i18n,
            ..Self::default()
        };

        let task = if forced_locale {
            Task::none()
        } else {
            Task::perform(
                async { fluent::detect_system_locale() },
                Message::SystemLocaleDetected,
            )
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Header(msg) => {
                match header::update(msg, &mut self.language_menu_open) {
                    header::Event::None => {}
                    header::Event::LanguageSelected(locale) => {
                        self.i18n.set_locale(locale);
                    }
                }
                Task::none()
            }
            Message::StartScreen(start_screen::Message::UploadImage) => {
                self.screen = Screen::Editor;
                self.editor = editor::State::default();
                self.latest_result = None;
                Task::none()
            }
            Message::Editor(msg) => match editor::update(msg, &mut self.editor) {
                editor::Event::None => Task::none(),
                // The constraint lives in the editor state; the canvas
                // reads it on the next frame.
                editor::Event::AspectChanged(_) => Task::none(),
                editor::Event::CropRequested => {
                    self.editor.reset_selection();
                    Task::none()
                }
                editor::Event::EditRequested(request) => self.begin_edit(request),
            },
            Message::SystemLocaleDetected(detected) => {
                if let Some(locale) =
                    detected.and_then(|tag| self.i18n.supported_tag(&tag))
                {
                    self.i18n.set_locale(locale);
                }
                Task::none()
            }
            Message::EditCompleted(Ok(outcome)) => {
                self.is_loading = false;
                self.latest_result = Some(outcome);
                // A fresh result invalidates the hotspot and its prompt.
                self.editor.hotspot = None;
                self.editor.retouch_prompt.clear();
                Task::none()
            }
            Message::EditCompleted(Err(error)) => {
                self.is_loading = false;
                self.error_key = Some(error.i18n_key());
                Task::none()
            }
            Message::DismissError => {
                self.error_key = None;
                Task::none()
            }
            Message::RetryLastEdit => {
                self.error_key = None;
                match self.last_request.clone() {
                    Some(request) => self.begin_edit(request),
                    None => Task::none(),
                }
            }
        }
    }

    /// Marks the edit in flight and dispatches it to the backend.
    fn begin_edit(&mut self, request: EditRequest) -> Task<Message> {
        self.is_loading = true;
        self.error_key = None;
        self.last_request = Some(request.clone());

        let backend = Arc::clone(&self.backend);
        Task::perform(
            async move { backend.apply(&request) },
            Message::EditCompleted,
        )
    }

    fn view(&self) -> Element<'_, Message> {
        let header_view = header::view(header::ViewContext {
            i18n: &self.i18n,
            menu_open: self.language_menu_open,
        })
        .map(Message::Header);

        let content: Element<'_, Message> = match self.screen {
            Screen::Start => start_screen::view(&self.i18n).map(Message::StartScreen),
            Screen::Editor => self.view_editor(),
        };

        Column::new()
            .push(header_view)
            .push(
                Container::new(content)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .into()
    }

    /// Editor screen: the canvas area on the left, the sidebar on the
    /// right. The canvas area doubles as the surface for the loading
    /// and error states.
    fn view_editor(&self) -> Element<'_, Message> {
        let canvas_area: Element<'_, Message> = if self.is_loading {
            loading_overlay::view(self.i18n.tr("ai-working"))
        } else if let Some(key) = self.error_key {
            centered_error_view(
                ErrorDisplay::new(ErrorSeverity::Error)
                    .title(self.i18n.tr("error-occurred"))
                    .message(self.i18n.tr(key))
                    .action(self.i18n.tr("try-again"), Message::RetryLastEdit),
            )
        } else {
            Container::new(Column::new())
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        };

        let sidebar = editor::view(
            &self.editor,
            &editor::ViewContext {
                i18n: &self.i18n,
                is_loading: self.is_loading,
            },
        )
        .map(Message::Editor);

        Row::new()
            .spacing(spacing::MD)
            .padding(spacing::MD)
            .push(
                Container::new(canvas_area)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .push(sidebar)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::EditError;
    use crate::ui::editor::FilterPreset;
    use unic_langid::LanguageIdentifier;

    fn app() -> App {
        App::default()
    }

    #[test]
    fn cli_locale_override_is_adopted_without_detection() {
        let (app, _task) = App::new(Flags {
            lang: Some("ko".to_string()),
        });
        assert_eq!(app.i18n.current_locale().to_string(), "ko");
    }

    #[test]
    fn detected_system_locale_is_truncated_and_adopted() {
        let mut app = app();
        app.update(Message::SystemLocaleDetected(Some("ja-JP".to_string())));
        assert_eq!(app.i18n.current_locale().to_string(), "ja");
    }

    #[test]
    fn unsupported_system_locale_keeps_the_default() {
        let mut app = app();
        app.update(Message::SystemLocaleDetected(Some("fr-FR".to_string())));
        assert_eq!(app.i18n.current_locale().to_string(), "en");

        app.update(Message::SystemLocaleDetected(None));
        assert_eq!(app.i18n.current_locale().to_string(), "en");
    }

    #[test]
    fn header_selection_switches_language_and_closes_menu() {
        let mut app = app();
        app.update(Message::Header(header::Message::ToggleLanguageMenu));
        assert!(app.language_menu_open);

        let ko: LanguageIdentifier = "ko".parse().expect("valid tag");
        app.update(Message::Header(header::Message::SelectLanguage(ko)));
        assert_eq!(app.i18n.current_locale().to_string(), "ko");
        assert!(!app.language_menu_open);
    }

    #[test]
    fn upload_opens_the_editor_screen() {
        let mut app = app();
        assert_eq!(app.screen, Screen::Start);
        app.update(Message::StartScreen(start_screen::Message::UploadImage));
        assert_eq!(app.screen, Screen::Editor);
    }

    #[test]
    fn submitting_an_edit_sets_loading_and_remembers_the_request() {
        let mut app = app();
        app.update(Message::Editor(editor::Message::SelectFilterPreset(
            FilterPreset::Lomo,
        )));
        app.update(Message::Editor(editor::Message::SubmitFilter));

        assert!(app.is_loading);
        match &app.last_request {
            Some(EditRequest::Filter { prompt }) => {
                assert_eq!(prompt, FilterPreset::Lomo.prompt());
            }
            other => panic!("unexpected request: {other:?}"),
        }
    }

    #[test]
    fn successful_edit_clears_loading_and_hotspot() {
        let mut app = app();
        app.is_loading = true;
        app.editor.hotspot = Some(crate::backend::Hotspot { x: 0.5, y: 0.5 });
        app.editor.retouch_prompt = "remove the blemish".to_string();

        app.update(Message::EditCompleted(Ok(EditOutcome {
            image_png: vec![1, 2, 3],
        })));

        assert!(!app.is_loading);
        assert!(app.latest_result.is_some());
        assert!(app.editor.hotspot.is_none());
        assert!(app.editor.retouch_prompt.is_empty());
    }

    #[test]
    fn failed_edit_surfaces_its_localization_key() {
        let mut app = app();
        app.is_loading = true;
        app.update(Message::EditCompleted(Err(EditError::FilterFailed(
            "service unavailable".to_string(),
        ))));

        assert!(!app.is_loading);
        assert_eq!(app.error_key, Some("error-filter-failed"));

        app.update(Message::DismissError);
        assert_eq!(app.error_key, None);
    }

    #[test]
    fn retry_resubmits_the_last_request() {
        let mut app = app();
        app.last_request = Some(EditRequest::Adjustment {
            prompt: "warmer lighting".to_string(),
        });
        app.error_key = Some("error-adjustment-failed");

        app.update(Message::RetryLastEdit);

        assert!(app.is_loading);
        assert_eq!(app.error_key, None);
    }

    #[test]
    fn retry_without_a_request_is_a_no_op() {
        let mut app = app();
        app.update(Message::RetryLastEdit);
        assert!(!app.is_loading);
    }

    #[test]
    fn applying_a_crop_clears_the_selection() {
        let mut app = app();
        app.update(Message::Editor(editor::Message::SelectionChanged(true)));
        assert!(app.editor.is_cropping);

        app.update(Message::Editor(editor::Message::ApplyCrop));
        assert!(!app.editor.is_cropping);
    }

    #[test]
    fn view_renders_in_every_state() {
        let mut app = app();
        drop(app.view());

        app.screen = Screen::Editor;
        drop(app.view());

        app.is_loading = true;
        drop(app.view());

        app.is_loading = false;
        app.error_key = Some("error-unknown");
        drop(app.view());
    }
}
