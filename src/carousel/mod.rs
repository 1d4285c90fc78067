// SPDX-License-Identifier: MPL-2.0
//! Carousel engine: scroll position, snap points and drag handling for one
//! horizontally scrolling strip of slides.
//!
//! The gallery runs two independent engines (main slides and thumbnails).
//! Consumers only talk to an engine through the capability traits defined
//! here, so the synchronization logic can be exercised against any engine
//! that honours the same contract.
//!
//! # Lifecycle
//!
//! Every engine moves through `Uninitialized → Ready → Destroyed`. Commands
//! issued outside `Ready` are silently ignored; this tolerates engines that
//! become ready after the component that drives them.

pub mod drag;
pub mod engine;
pub mod options;
pub mod snap;

pub use engine::{Engine, Lifecycle};
pub use options::{Align, ContainScroll, Options};
pub use snap::{SlideMetrics, SnapLayout};

/// Events an engine can emit to its listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineEvent {
    /// First successful layout; the engine just became ready.
    Init,
    /// Layout recomputed (viewport resized or slide list replaced).
    ReInit,
    /// The selected snap changed.
    Select,
    /// A scroll command or drag release came to rest.
    Settle,
}

/// Handle returned by [`CarouselEvents::on`], used to detach the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Wraps a raw listener number minted by an engine.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw listener number.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Imperative half of the engine contract.
pub trait CarouselApi {
    /// Scrolls to the snap at `index`. No-op unless the engine is ready.
    fn scroll_to(&mut self, index: usize);

    /// Currently selected snap, or `None` while the engine is not ready.
    fn selected_scroll_snap(&self) -> Option<usize>;
}

/// Event subscription half of the engine contract.
///
/// Handlers are message values: when an event fires, the engine queues a
/// clone of every handler registered for it.
pub trait CarouselEvents {
    /// Value queued for each registered listener when its event fires.
    type Handler: Clone;

    /// Registers `handler` for `event`.
    fn on(&mut self, event: EngineEvent, handler: Self::Handler) -> ListenerId;

    /// Detaches a listener, returning whether one was removed.
    ///
    /// Engines that cannot unsubscribe keep this default, which does nothing.
    fn off(&mut self, _listener: ListenerId) -> bool {
        false
    }
}
