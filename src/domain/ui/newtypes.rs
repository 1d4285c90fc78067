// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for gallery layout values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Layout Bounds
// =============================================================================

/// Slide and thumbnail size bounds, in logical pixels.
pub mod layout_bounds {
    /// Minimum main slide height.
    pub const MIN_SLIDE_HEIGHT: f32 = 120.0;
    /// Maximum main slide height.
    pub const MAX_SLIDE_HEIGHT: f32 = 2000.0;
    /// Default main slide height.
    pub const DEFAULT_SLIDE_HEIGHT: f32 = 440.0;

    /// Minimum thumbnail edge.
    pub const MIN_THUMB_EDGE: f32 = 32.0;
    /// Maximum thumbnail edge.
    pub const MAX_THUMB_EDGE: f32 = 320.0;
    /// Default thumbnail width.
    pub const DEFAULT_THUMB_WIDTH: f32 = 96.0;
    /// Default thumbnail height.
    pub const DEFAULT_THUMB_HEIGHT: f32 = 64.0;

    /// Maximum gap between thumbnails.
    pub const MAX_THUMB_GAP: f32 = 64.0;
    /// Default gap between thumbnails.
    pub const DEFAULT_THUMB_GAP: f32 = 8.0;
}

// =============================================================================
// SlideHeight
// =============================================================================

/// Height of the main carousel, guaranteed to be within 120–2000 px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideHeight(f32);

impl SlideHeight {
    /// Creates a new slide height, clamping the value to the valid range.
    #[must_use]
    pub fn new(height: f32) -> Self {
        Self(height.clamp(
            layout_bounds::MIN_SLIDE_HEIGHT,
            layout_bounds::MAX_SLIDE_HEIGHT,
        ))
    }

    /// Returns the raw height.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the height scaled by `factor`, still clamped.
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.0 * factor)
    }
}

impl Default for SlideHeight {
    fn default() -> Self {
        Self(layout_bounds::DEFAULT_SLIDE_HEIGHT)
    }
}

// =============================================================================
// ThumbnailSize
// =============================================================================

/// Fixed thumbnail dimensions, each edge within 32–320 px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbnailSize {
    width: f32,
    height: f32,
}

impl ThumbnailSize {
    /// Creates a new thumbnail size, clamping both edges.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        let clamp = |edge: f32| {
            edge.clamp(layout_bounds::MIN_THUMB_EDGE, layout_bounds::MAX_THUMB_EDGE)
        };
        Self {
            width: clamp(width),
            height: clamp(height),
        }
    }

    #[must_use]
    pub fn width(self) -> f32 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> f32 {
        self.height
    }

    /// Longest edge, used as the decode target for thumbnail variants.
    #[must_use]
    pub fn max_edge(self) -> u32 {
        self.width.max(self.height).ceil() as u32
    }

    /// Returns the size scaled by `factor`, still clamped.
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }
}

impl Default for ThumbnailSize {
    fn default() -> Self {
        Self {
            width: layout_bounds::DEFAULT_THUMB_WIDTH,
            height: layout_bounds::DEFAULT_THUMB_HEIGHT,
        }
    }
}

// =============================================================================
// ThumbnailGap
// =============================================================================

/// Gap between thumbnails, within 0–64 px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbnailGap(f32);

impl ThumbnailGap {
    #[must_use]
    pub fn new(gap: f32) -> Self {
        Self(gap.clamp(0.0, layout_bounds::MAX_THUMB_GAP))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ThumbnailGap {
    fn default() -> Self {
        Self(layout_bounds::DEFAULT_THUMB_GAP)
    }
}

// =============================================================================
// CacheBudget
// =============================================================================

/// Decoded image cache limits.
pub mod cache_bounds {
    /// Minimum cache size in megabytes.
    pub const MIN_MB: u32 = 8;
    /// Maximum cache size in megabytes.
    pub const MAX_MB: u32 = 512;
    /// Default cache size in megabytes.
    pub const DEFAULT_MB: u32 = 96;
    /// Minimum number of cached images.
    pub const MIN_IMAGES: usize = 4;
    /// Maximum number of cached images.
    pub const MAX_IMAGES: usize = 256;
    /// Default number of cached images.
    pub const DEFAULT_IMAGES: usize = 64;
}

/// Byte and entry limits for the decoded image cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheBudget {
    megabytes: u32,
    max_images: usize,
}

impl CacheBudget {
    /// Creates a new budget, clamping both limits.
    #[must_use]
    pub fn new(megabytes: u32, max_images: usize) -> Self {
        Self {
            megabytes: megabytes.clamp(cache_bounds::MIN_MB, cache_bounds::MAX_MB),
            max_images: max_images.clamp(cache_bounds::MIN_IMAGES, cache_bounds::MAX_IMAGES),
        }
    }

    #[must_use]
    pub fn max_bytes(self) -> usize {
        self.megabytes as usize * 1024 * 1024
    }

    #[must_use]
    pub fn max_images(self) -> usize {
        self.max_images
    }
}

impl Default for CacheBudget {
    fn default() -> Self {
        Self {
            megabytes: cache_bounds::DEFAULT_MB,
            max_images: cache_bounds::DEFAULT_IMAGES,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_height_clamps() {
        assert_eq!(SlideHeight::new(10.0).value(), layout_bounds::MIN_SLIDE_HEIGHT);
        assert_eq!(SlideHeight::new(9000.0).value(), layout_bounds::MAX_SLIDE_HEIGHT);
        assert_eq!(SlideHeight::new(500.0).value(), 500.0);
    }

    #[test]
    fn slide_height_scaled_stays_in_range() {
        let height = SlideHeight::new(200.0).scaled(0.5);
        assert_eq!(height.value(), layout_bounds::MIN_SLIDE_HEIGHT);
    }

    #[test]
    fn thumbnail_size_clamps_each_edge() {
        let size = ThumbnailSize::new(1.0, 1000.0);
        assert_eq!(size.width(), layout_bounds::MIN_THUMB_EDGE);
        assert_eq!(size.height(), layout_bounds::MAX_THUMB_EDGE);
    }

    #[test]
    fn thumbnail_max_edge_rounds_up() {
        assert_eq!(ThumbnailSize::new(96.4, 64.0).max_edge(), 97);
        assert_eq!(ThumbnailSize::default().max_edge(), 96);
    }

    #[test]
    fn thumbnail_gap_rejects_negative() {
        assert_eq!(ThumbnailGap::new(-4.0).value(), 0.0);
        assert_eq!(ThumbnailGap::default().value(), layout_bounds::DEFAULT_THUMB_GAP);
    }

    #[test]
    fn cache_budget_clamps() {
        let budget = CacheBudget::new(1, 100_000);
        assert_eq!(budget.max_bytes(), cache_bounds::MIN_MB as usize * 1024 * 1024);
        assert_eq!(budget.max_images(), cache_bounds::MAX_IMAGES);
    }
}
