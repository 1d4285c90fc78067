// SPDX-License-Identifier: MPL-2.0
//! Shared user interface infrastructure.
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`theming`] - Light/Dark/System theme mode
//! - [`widgets`] - Custom Iced widgets
//! - [`notice`] - Toast for non-fatal problems

pub mod design_tokens;
pub mod notice;
pub mod styles;
pub mod theming;
pub mod widgets;
