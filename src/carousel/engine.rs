// SPDX-License-Identifier: MPL-2.0
//! Carousel engine state machine.

use super::drag::DragState;
use super::options::Options;
use super::snap::{SlideMetrics, SnapLayout};
use super::{CarouselApi, CarouselEvents, EngineEvent, ListenerId};
use std::fmt;

/// Fraction of the viewport a drag must travel to advance one snap even
/// when the release point is still closest to the starting snap.
const SWIPE_THRESHOLD_RATIO: f32 = 0.2;

/// Engine lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    /// No layout yet; commands are ignored.
    #[default]
    Uninitialized,
    /// Laid out and accepting commands.
    Ready,
    /// Torn down; commands are ignored and nothing is emitted.
    Destroyed,
}

struct Listener<M> {
    id: ListenerId,
    event: EngineEvent,
    handler: M,
}

/// A single carousel: snap layout, scroll offset, selection and drag.
///
/// Events are not delivered synchronously. Each emission queues a clone of
/// the matching handlers; the owner drains them with [`Engine::take_events`]
/// after every update and feeds them back into its update loop.
pub struct Engine<M> {
    options: Options,
    lifecycle: Lifecycle,
    layout: SnapLayout,
    viewport: f32,
    selected: usize,
    offset: f32,
    drag: DragState,
    listeners: Vec<Listener<M>>,
    next_listener: u64,
    outbox: Vec<M>,
}

impl<M> fmt::Debug for Engine<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("lifecycle", &self.lifecycle)
            .field("selected", &self.selected)
            .field("offset", &self.offset)
            .field("snaps", &self.layout.snap_count())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<M: Clone> Engine<M> {
    /// Creates an uninitialized engine.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            options,
            lifecycle: Lifecycle::Uninitialized,
            layout: SnapLayout::default(),
            viewport: 0.0,
            selected: 0,
            offset: 0.0,
            drag: DragState::default(),
            listeners: Vec::new(),
            next_listener: 0,
            outbox: Vec::new(),
        }
    }

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.lifecycle == Lifecycle::Ready
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    #[must_use]
    pub fn layout(&self) -> &SnapLayout {
        &self.layout
    }

    /// Current scroll offset in pixels.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Current scroll offset as a fraction of the scrollable range.
    #[must_use]
    pub fn scroll_progress(&self) -> f32 {
        self.layout.progress(self.offset)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }

    #[must_use]
    pub fn can_scroll_prev(&self) -> bool {
        self.is_ready()
            && self.layout.snap_count() > 0
            && (self.options.loop_slides || self.selected > 0)
    }

    #[must_use]
    pub fn can_scroll_next(&self) -> bool {
        self.is_ready()
            && self.layout.snap_count() > 0
            && (self.options.loop_slides || self.selected + 1 < self.layout.snap_count())
    }

    /// Lays the engine out, keeping the current selection when possible.
    ///
    /// The first call makes the engine ready and emits [`EngineEvent::Init`]
    /// with the configured start index selected; later calls emit
    /// [`EngineEvent::ReInit`].
    pub fn reinit(&mut self, metrics: &SlideMetrics) {
        match self.lifecycle {
            Lifecycle::Destroyed => {}
            Lifecycle::Uninitialized => self.initialize(metrics),
            Lifecycle::Ready => {
                let selected = self.selected;
                self.apply_layout(metrics, selected);
                self.emit(EngineEvent::ReInit);
            }
        }
    }

    /// Lays the engine out for a replaced slide list, selecting the first
    /// snap again.
    pub fn reset(&mut self, metrics: &SlideMetrics) {
        match self.lifecycle {
            Lifecycle::Destroyed => {}
            Lifecycle::Uninitialized => self.initialize(metrics),
            Lifecycle::Ready => {
                self.apply_layout(metrics, 0);
                self.emit(EngineEvent::ReInit);
            }
        }
    }

    fn initialize(&mut self, metrics: &SlideMetrics) {
        self.lifecycle = Lifecycle::Ready;
        self.apply_layout(metrics, self.options.start_index);
        self.emit(EngineEvent::Init);
    }

    fn apply_layout(&mut self, metrics: &SlideMetrics, selected: usize) {
        self.drag.stop();
        self.viewport = metrics.viewport;
        self.layout = SnapLayout::compute(
            metrics,
            self.options.align,
            self.options.contain_scroll,
        );
        self.selected = selected.min(self.layout.snap_count().saturating_sub(1));
        self.offset = self.layout.offset_of(self.selected).unwrap_or(0.0);
    }

    /// Steps to the next snap (wrapping when looping is enabled).
    pub fn scroll_next(&mut self) {
        if !self.can_scroll_next() {
            return;
        }
        let count = self.layout.snap_count();
        self.select((self.selected + 1) % count);
    }

    /// Steps to the previous snap (wrapping when looping is enabled).
    pub fn scroll_prev(&mut self) {
        if !self.can_scroll_prev() {
            return;
        }
        let count = self.layout.snap_count();
        self.select((self.selected + count - 1) % count);
    }

    fn target_index(&self, index: usize) -> usize {
        let count = self.layout.snap_count();
        if self.options.loop_slides {
            index % count
        } else {
            index.min(count - 1)
        }
    }

    fn select(&mut self, index: usize) {
        let changed = index != self.selected;
        self.selected = index;
        self.offset = self.layout.offset_of(index).unwrap_or(self.offset);
        if changed {
            self.emit(EngineEvent::Select);
        }
        self.emit(EngineEvent::Settle);
    }

    /// Starts a drag at pointer `x`.
    pub fn drag_start(&mut self, x: f32) {
        if !self.is_ready() || self.layout.snap_count() == 0 {
            return;
        }
        self.drag.start(x, self.offset);
    }

    /// Follows the pointer while dragging.
    pub fn drag_move(&mut self, x: f32) {
        if !self.is_ready() {
            return;
        }
        if let Some(offset) = self.drag.offset_at(x) {
            self.offset = self.layout.clamp_offset(offset);
        }
    }

    /// Ends a drag and comes to rest.
    ///
    /// Snapping engines settle on the closest snap, advancing one step in the
    /// drag direction for a long enough swipe. Free engines stay where they
    /// were released and select the closest snap.
    pub fn drag_end(&mut self) {
        if !self.is_ready() || !self.drag.is_dragging {
            return;
        }
        let start_offset = self.drag.start_offset.unwrap_or(self.offset);
        self.drag.stop();

        let nearest = self.layout.nearest(self.offset);

        if self.options.drag_free {
            let changed = nearest != self.selected;
            self.selected = nearest;
            if changed {
                self.emit(EngineEvent::Select);
            }
            self.emit(EngineEvent::Settle);
            return;
        }

        let travelled = self.offset - start_offset;
        let threshold = self.viewport * SWIPE_THRESHOLD_RATIO;
        let target = if nearest == self.selected && travelled.abs() > threshold {
            if travelled > 0.0 {
                (self.selected + 1).min(self.layout.snap_count() - 1)
            } else {
                self.selected.saturating_sub(1)
            }
        } else {
            nearest
        };
        self.select(target);
    }

    /// Records an offset reported by the scrolling widget itself.
    ///
    /// Only free engines follow passive scrolling; snapping engines are
    /// driven exclusively through commands and drags.
    pub fn scrolled(&mut self, offset: f32) {
        if !self.is_ready() || !self.options.drag_free || self.drag.is_dragging {
            return;
        }
        self.offset = self.layout.clamp_offset(offset);
        let nearest = self.layout.nearest(self.offset);
        if nearest != self.selected {
            self.selected = nearest;
            self.emit(EngineEvent::Select);
        }
    }

    /// Tears the engine down. Listeners and queued events are dropped.
    pub fn destroy(&mut self) {
        self.lifecycle = Lifecycle::Destroyed;
        self.drag.stop();
        self.listeners.clear();
        self.outbox.clear();
    }

    /// Drains queued listener messages in emission order.
    pub fn take_events(&mut self) -> Vec<M> {
        std::mem::take(&mut self.outbox)
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn emit(&mut self, event: EngineEvent) {
        if self.lifecycle == Lifecycle::Destroyed {
            return;
        }
        self.outbox.extend(
            self.listeners
                .iter()
                .filter(|listener| listener.event == event)
                .map(|listener| listener.handler.clone()),
        );
    }
}

impl<M: Clone> CarouselApi for Engine<M> {
    fn scroll_to(&mut self, index: usize) {
        if !self.is_ready() || self.layout.snap_count() == 0 {
            return;
        }
        let target = self.target_index(index);
        self.select(target);
    }

    fn selected_scroll_snap(&self) -> Option<usize> {
        self.is_ready().then_some(self.selected)
    }
}

impl<M: Clone> CarouselEvents for Engine<M> {
    type Handler = M;

    fn on(&mut self, event: EngineEvent, handler: M) -> ListenerId {
        let id = ListenerId::from_raw(self.next_listener);
        self.next_listener += 1;
        if self.lifecycle != Lifecycle::Destroyed {
            self.listeners.push(Listener { id, event, handler });
        }
        id
    }

    fn off(&mut self, listener: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|registered| registered.id != listener);
        self.listeners.len() != before
    }
}
