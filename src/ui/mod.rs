// SPDX-License-Identifier: MPL-2.0
//! UI layer: screens, panels, shared components, and design tokens.

pub mod components;
pub mod design_tokens;
pub mod editor;
pub mod header;
pub mod start_screen;
pub mod styles;
