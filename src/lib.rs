// SPDX-License-Identifier: MPL-2.0
//! `iced_retouch` is the desktop front end of an AI-assisted photo editor
//! built with the Iced GUI framework.
//!
//! All actual image transformation (retouching, filters, adjustments,
//! cropping) is delegated to an external image-generation service behind the
//! [`backend::EditBackend`] port; this crate owns the presentation layer:
//! the editing panels, the start screen, and runtime language switching
//! between English, Japanese, and Korean via Fluent.

pub mod app;
pub mod backend;
pub mod error;
pub mod i18n;
pub mod ui;
