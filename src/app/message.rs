// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::backend::{EditError, EditOutcome};
use crate::ui::editor;
use crate::ui::header;
use crate::ui::start_screen;

/// Runtime flags passed from the launcher.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Locale tag requested on the command line (`--lang ko`).
    pub lang: Option<String>,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    StartScreen(start_screen::Message),
    Editor(editor::Message),
    /// Result of the asynchronous OS locale probe run at startup.
    SystemLocaleDetected(Option<String>),
    /// Result of a generative edit sent to the backend.
    EditCompleted(Result<EditOutcome, EditError>),
    DismissError,
    /// Re-submit the most recent failed edit.
    RetryLastEdit,
}
