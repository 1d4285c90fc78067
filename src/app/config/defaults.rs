// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! Layout and cache bounds live next to their newtypes in
//! [`crate::domain::ui`] and are re-exported here so callers have one place
//! to look.
//!
//! # Categories
//!
//! - **Window**: Initial and minimum window size
//! - **Input**: Wheel stepping threshold
//! - **Layout / Cache**: Re-exported bounds

pub use crate::domain::ui::newtypes::{cache_bounds, layout_bounds};

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Initial window width.
pub const DEFAULT_WINDOW_WIDTH: f32 = 960.0;

/// Initial window height.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;

/// Minimum window width.
pub const MIN_WINDOW_WIDTH: f32 = 480.0;

/// Minimum window height.
pub const MIN_WINDOW_HEIGHT: f32 = 400.0;

// ==========================================================================
// Input Defaults
// ==========================================================================

/// Accumulated wheel lines needed to step the main carousel by one slide.
pub const WHEEL_LINES_PER_STEP: f32 = 1.0;

/// Pixels per wheel line when the device reports pixel deltas.
pub const WHEEL_PIXELS_PER_LINE: f32 = 40.0;
