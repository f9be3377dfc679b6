// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization using the Fluent localization system.
//! Translation tables for English, Japanese, and Korean are embedded at
//! compile time; English is the fallback of last resort and defines every
//! message key the application looks up.
//!
//! # Features
//!
//! - Locale detection from CLI or system settings
//! - Runtime language switching restricted to the supported set
//! - Three-tier lookup: active locale, then English, then the key verbatim

pub mod fluent;
