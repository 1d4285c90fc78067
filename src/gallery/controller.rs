// SPDX-License-Identifier: MPL-2.0
//! Main → thumbs synchronization.
//!
//! The controller owns the gallery's only piece of selection state. It
//! follows the main engine: every selection or re-initialization event is
//! answered by reading the main engine's selected snap, storing it, and
//! asking the thumbs engine to follow. Thumbnail activation goes the other
//! way through [`SyncController::jump_to`], which only commands the main
//! engine; the index itself is updated once the main engine reports back.

use crate::carousel::{CarouselApi, CarouselEvents, EngineEvent, ListenerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Subscription {
    select: ListenerId,
    reinit: ListenerId,
}

/// Keeps the thumbnail strip in step with the main carousel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncController {
    selected_index: usize,
    subscription: Option<Subscription>,
}

impl SyncController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the active slide, as last reported by the main engine.
    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Subscribes `on_change` to the main engine's selection and
    /// re-initialization events, then synchronizes once.
    ///
    /// The owner routes `on_change` back to
    /// [`SyncController::on_main_selection_changed`]. Mounting an already
    /// mounted controller does nothing.
    pub fn mount<Main, Thumbs>(
        &mut self,
        main: &mut Main,
        thumbs: &mut Thumbs,
        on_change: Main::Handler,
    ) where
        Main: CarouselApi + CarouselEvents,
        Thumbs: CarouselApi,
    {
        if self.is_mounted() {
            return;
        }

        let select = main.on(EngineEvent::Select, on_change.clone());
        let reinit = main.on(EngineEvent::ReInit, on_change);
        self.subscription = Some(Subscription { select, reinit });

        self.on_main_selection_changed(main, thumbs);
    }

    /// Detaches both listeners.
    ///
    /// Safe to call repeatedly and on engines that cannot unsubscribe.
    pub fn unmount<Main>(&mut self, main: &mut Main)
    where
        Main: CarouselEvents,
    {
        if let Some(subscription) = self.subscription.take() {
            main.off(subscription.select);
            main.off(subscription.reinit);
        }
    }

    /// Adopts the main engine's selected snap and tells the thumbs engine to
    /// follow it.
    ///
    /// Does nothing while unmounted or while the main engine is not ready.
    /// The follow command is issued even when the index did not change.
    /// Returns whether the selected index changed.
    pub fn on_main_selection_changed<Main, Thumbs>(
        &mut self,
        main: &Main,
        thumbs: &mut Thumbs,
    ) -> bool
    where
        Main: CarouselApi + ?Sized,
        Thumbs: CarouselApi + ?Sized,
    {
        if !self.is_mounted() {
            return false;
        }
        let Some(index) = main.selected_scroll_snap() else {
            return false;
        };

        let changed = index != self.selected_index;
        self.selected_index = index;
        thumbs.scroll_to(index);
        changed
    }

    /// Asks the main engine to scroll to `index`.
    ///
    /// The selected index is left alone; it follows once the main engine
    /// emits its selection event.
    pub fn jump_to<Main>(&self, main: &mut Main, index: usize)
    where
        Main: CarouselApi + ?Sized,
    {
        main.scroll_to(index);
    }
}
