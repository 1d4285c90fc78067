// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Tracks a horizontal grab-and-drag gesture over a carousel viewport.

/// Manages grab-and-drag state
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Whether a drag operation is currently active
    pub is_dragging: bool,

    /// Pointer x where the drag started
    pub start_x: Option<f32>,

    /// Scroll offset when the drag started
    pub start_offset: Option<f32>,
}

impl DragState {
    /// Starts a drag operation
    pub fn start(&mut self, x: f32, offset: f32) {
        self.is_dragging = true;
        self.start_x = Some(x);
        self.start_offset = Some(offset);
    }

    /// Stops the drag operation
    pub fn stop(&mut self) {
        self.is_dragging = false;
        self.start_x = None;
        self.start_offset = None;
    }

    /// Pointer travel since the drag started (positive when moving right).
    #[must_use]
    pub fn delta(&self, current_x: f32) -> Option<f32> {
        if !self.is_dragging {
            return None;
        }
        Some(current_x - self.start_x?)
    }

    /// Scroll offset for the current pointer position. Moving the pointer
    /// right scrolls the content back towards the start.
    #[must_use]
    pub fn offset_at(&self, current_x: f32) -> Option<f32> {
        let delta = self.delta(current_x)?;
        Some(self.start_offset? - delta)
    }
}
