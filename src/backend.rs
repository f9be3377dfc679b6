// SPDX-License-Identifier: MPL-2.0
//! Edit backend port definition.
//!
//! This module defines the [`EditBackend`] trait for the external AI
//! image-generation service that performs the actual edits. The UI only
//! builds requests and renders outcomes; transport, prompting strategy, and
//! model selection all live behind this seam.
//!
//! # Design Notes
//!
//! - Loading state is tracked by the application via Iced messages, not here
//! - The trait is `Send + Sync` so requests can run off the update loop
//! - Crop is not a backend request: the canvas collaborator applies crops
//!   locally from the selection rectangle

use std::fmt;

/// A point on the image picked by the user for a localized retouch,
/// in normalized coordinates (0.0 ..= 1.0 on each axis).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hotspot {
    pub x: f32,
    pub y: f32,
}

/// A single edit operation to delegate to the image-generation service.
#[derive(Debug, Clone, PartialEq)]
pub enum EditRequest {
    /// Localized retouch anchored at a user-picked point.
    Retouch { prompt: String, hotspot: Hotspot },
    /// Global photographic adjustment (lighting, background, mood).
    Adjustment { prompt: String },
    /// Stylistic filter applied to the whole image.
    Filter { prompt: String },
}

/// The edited image returned by the service.
///
/// The bytes are an encoded PNG; decoding and display belong to the canvas
/// collaborator, not to this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct EditOutcome {
    pub image_png: Vec<u8>,
}

/// Errors reported by the edit backend.
///
/// Each variant maps to an i18n message key so the UI can show a localized,
/// user-friendly explanation.
#[derive(Debug, Clone, PartialEq)]
pub enum EditError {
    /// A retouch generation request failed.
    GenerationFailed(String),
    /// A filter request failed.
    FilterFailed(String),
    /// An adjustment request failed.
    AdjustmentFailed(String),
    /// Anything the backend could not categorize.
    Unknown(String),
}

impl EditError {
    /// Returns the i18n message key for this error.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            EditError::GenerationFailed(_) => "error-generate-failed",
            EditError::FilterFailed(_) => "error-filter-failed",
            EditError::AdjustmentFailed(_) => "error-adjustment-failed",
            EditError::Unknown(_) => "error-unknown",
        }
    }

    /// Builds the failure variant matching the request that produced it.
    pub fn for_request(request: &EditRequest, reason: String) -> Self {
        match request {
            EditRequest::Retouch { .. } => EditError::GenerationFailed(reason),
            EditRequest::Adjustment { .. } => EditError::AdjustmentFailed(reason),
            EditRequest::Filter { .. } => EditError::FilterFailed(reason),
        }
    }
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditError::GenerationFailed(msg) => write!(f, "Generation failed: {}", msg),
            EditError::FilterFailed(msg) => write!(f, "Filter failed: {}", msg),
            EditError::AdjustmentFailed(msg) => write!(f, "Adjustment failed: {}", msg),
            EditError::Unknown(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for EditError {}

/// Port for the AI image-editing service.
///
/// Implementations must be `Send + Sync`; the application submits requests
/// through an `Arc<dyn EditBackend>` from an async task.
pub trait EditBackend: Send + Sync {
    /// Sends one edit request and blocks until the service answers.
    ///
    /// # Errors
    ///
    /// Returns an [`EditError`] when the service rejects the request or the
    /// generation fails.
    fn apply(&self, request: &EditRequest) -> Result<EditOutcome, EditError>;

    /// Whether the backend is configured and able to accept requests.
    fn is_ready(&self) -> bool;
}

/// Null-object backend used until a real service adapter is wired in.
///
/// Every request fails with [`EditError::Unknown`]; the UI surfaces that
/// through its normal error panel, so the shell stays usable for layout and
/// localization work without credentials.
#[derive(Debug, Default)]
pub struct NullBackend;

impl EditBackend for NullBackend {
    fn apply(&self, _request: &EditRequest) -> Result<EditOutcome, EditError> {
        Err(EditError::Unknown("no edit backend configured".to_string()))
    }

    fn is_ready(&self) -> bool {
        false
    }
}
