// SPDX-License-Identifier: MPL-2.0
//! Snap point computation.
//!
//! A snap is the scroll offset at which one slide (or, after trimming, a
//! group of slides) is considered selected. Offsets grow to the right and
//! `0.0` shows the first slide flush with the viewport's leading edge.

use super::options::{Align, ContainScroll};

/// Two snaps closer than this are considered the same position.
const SNAP_EPSILON: f32 = 0.5;

/// Measured sizes the engine lays its snaps out from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SlideMetrics {
    /// Width of each slide, in order.
    pub sizes: Vec<f32>,
    /// Gap between adjacent slides.
    pub gap: f32,
    /// Visible width of the scrolling viewport.
    pub viewport: f32,
}

impl SlideMetrics {
    /// Metrics for `count` slides that all share the same width.
    #[must_use]
    pub fn uniform(count: usize, size: f32, gap: f32, viewport: f32) -> Self {
        Self {
            sizes: vec![size; count],
            gap,
            viewport,
        }
    }

    /// Total width of the slides including gaps.
    #[must_use]
    pub fn content_size(&self) -> f32 {
        if self.sizes.is_empty() {
            return 0.0;
        }
        let gaps = self.gap * (self.sizes.len() - 1) as f32;
        self.sizes.iter().sum::<f32>() + gaps
    }
}

/// Snap offsets plus the range the viewport can scroll through.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SnapLayout {
    snaps: Vec<f32>,
    max_scroll: f32,
    slide_count: usize,
}

impl SnapLayout {
    /// Lays out snaps for `metrics` using the given alignment rules.
    #[must_use]
    pub fn compute(metrics: &SlideMetrics, align: Align, contain: ContainScroll) -> Self {
        let max_scroll = (metrics.content_size() - metrics.viewport).max(0.0);

        let mut start = 0.0;
        let mut raw = Vec::with_capacity(metrics.sizes.len());
        for size in &metrics.sizes {
            let snap = match align {
                Align::Start => start,
                Align::Center => start + size / 2.0 - metrics.viewport / 2.0,
                Align::End => start + size - metrics.viewport,
            };
            raw.push(snap);
            start += size + metrics.gap;
        }

        let snaps = match contain {
            ContainScroll::None => raw,
            ContainScroll::KeepSnaps => raw
                .into_iter()
                .map(|snap| snap.clamp(0.0, max_scroll))
                .collect(),
            ContainScroll::TrimSnaps => {
                let mut trimmed: Vec<f32> = Vec::with_capacity(raw.len());
                for snap in raw.into_iter().map(|snap| snap.clamp(0.0, max_scroll)) {
                    let duplicate = trimmed
                        .last()
                        .is_some_and(|last| (snap - last).abs() < SNAP_EPSILON);
                    if !duplicate {
                        trimmed.push(snap);
                    }
                }
                trimmed
            }
        };

        Self {
            snaps,
            max_scroll,
            slide_count: metrics.sizes.len(),
        }
    }

    #[must_use]
    pub fn snaps(&self) -> &[f32] {
        &self.snaps
    }

    #[must_use]
    pub fn snap_count(&self) -> usize {
        self.snaps.len()
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    #[must_use]
    pub fn max_scroll(&self) -> f32 {
        self.max_scroll
    }

    /// Offset of the snap at `index`, if it exists.
    #[must_use]
    pub fn offset_of(&self, index: usize) -> Option<f32> {
        self.snaps.get(index).copied()
    }

    /// Index of the snap closest to `offset`. Returns 0 for an empty layout.
    #[must_use]
    pub fn nearest(&self, offset: f32) -> usize {
        self.snaps
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                (*a - offset)
                    .abs()
                    .partial_cmp(&(*b - offset).abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map_or(0, |(index, _)| index)
    }

    /// Clamps an arbitrary offset to the scrollable range.
    #[must_use]
    pub fn clamp_offset(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_scroll)
    }

    /// Offset expressed as a fraction of the scrollable range.
    #[must_use]
    pub fn progress(&self, offset: f32) -> f32 {
        if self.max_scroll > 0.0 {
            (offset / self.max_scroll).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, assert_offsets_eq};

    #[test]
    fn full_width_slides_get_one_snap_each() {
        let metrics = SlideMetrics::uniform(3, 800.0, 0.0, 800.0);
        let layout = SnapLayout::compute(&metrics, Align::Start, ContainScroll::TrimSnaps);

        assert_offsets_eq(layout.snaps(), &[0.0, 800.0, 1600.0]);
        assert_abs_diff_eq!(layout.max_scroll(), 1600.0);
    }

    #[test]
    fn trim_snaps_collapses_the_tail_of_a_thumbnail_strip() {
        // 6 thumbs of 100px with 10px gaps in a 330px viewport: content is
        // 650px, so only offsets 0..=320 are reachable.
        let metrics = SlideMetrics::uniform(6, 100.0, 10.0, 330.0);
        let layout = SnapLayout::compute(&metrics, Align::Start, ContainScroll::TrimSnaps);

        assert_eq!(layout.slide_count(), 6);
        assert_offsets_eq(layout.snaps(), &[0.0, 110.0, 220.0, 320.0]);
    }

    #[test]
    fn keep_snaps_clamps_without_collapsing() {
        let metrics = SlideMetrics::uniform(6, 100.0, 10.0, 330.0);
        let layout = SnapLayout::compute(&metrics, Align::Start, ContainScroll::KeepSnaps);

        assert_offsets_eq(layout.snaps(), &[0.0, 110.0, 220.0, 320.0, 320.0, 320.0]);
    }

    #[test]
    fn content_that_fits_has_a_single_trimmed_snap() {
        let metrics = SlideMetrics::uniform(3, 100.0, 10.0, 800.0);
        let layout = SnapLayout::compute(&metrics, Align::Start, ContainScroll::TrimSnaps);

        assert_offsets_eq(layout.snaps(), &[0.0]);
        assert_abs_diff_eq!(layout.max_scroll(), 0.0);
        assert_abs_diff_eq!(layout.progress(0.0), 0.0);
    }

    #[test]
    fn center_alignment_without_containment_goes_negative() {
        let metrics = SlideMetrics::uniform(3, 100.0, 0.0, 300.0);
        let layout = SnapLayout::compute(&metrics, Align::Center, ContainScroll::None);

        assert_offsets_eq(layout.snaps(), &[-100.0, 0.0, 100.0]);
    }

    #[test]
    fn end_alignment_is_clamped_to_zero() {
        let metrics = SlideMetrics::uniform(4, 100.0, 0.0, 200.0);
        let layout = SnapLayout::compute(&metrics, Align::End, ContainScroll::TrimSnaps);

        assert_offsets_eq(layout.snaps(), &[0.0, 100.0, 200.0]);
    }

    #[test]
    fn nearest_picks_closest_snap() {
        let metrics = SlideMetrics::uniform(3, 800.0, 0.0, 800.0);
        let layout = SnapLayout::compute(&metrics, Align::Start, ContainScroll::TrimSnaps);

        assert_eq!(layout.nearest(0.0), 0);
        assert_eq!(layout.nearest(390.0), 0);
        assert_eq!(layout.nearest(410.0), 1);
        assert_eq!(layout.nearest(5000.0), 2);
    }

    #[test]
    fn empty_layout_is_harmless() {
        let layout = SnapLayout::compute(
            &SlideMetrics::default(),
            Align::Start,
            ContainScroll::TrimSnaps,
        );

        assert_eq!(layout.snap_count(), 0);
        assert_eq!(layout.nearest(42.0), 0);
        assert!(layout.offset_of(0).is_none());
    }
}
