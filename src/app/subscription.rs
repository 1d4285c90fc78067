// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window lifecycle events drive gallery layout and teardown; arrow, Home
//! and End keys step the main carousel when no widget captured them.

use super::Message;
use crate::gallery;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, window, Event, Subscription};
use std::time::Duration;

const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match event {
        Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        Event::Window(window::Event::Opened { size, .. }) => Some(Message::WindowOpened {
            id: window_id,
            size,
        }),
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. })
            if status == event::Status::Ignored =>
        {
            key_message(&key)
        }
        _ => None,
    })
}

/// Ticks only while something is waiting on time.
pub fn create_tick_subscription(active: bool) -> Subscription<Message> {
    if active {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

fn key_message(key: &Key) -> Option<Message> {
    let message = match key {
        Key::Named(Named::ArrowRight) => gallery::Message::Next,
        Key::Named(Named::ArrowLeft) => gallery::Message::Previous,
        Key::Named(Named::Home) => gallery::Message::First,
        Key::Named(Named::End) => gallery::Message::Last,
        _ => return None,
    };
    Some(Message::Gallery(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_step_the_gallery() {
        assert!(matches!(
            key_message(&Key::Named(Named::ArrowRight)),
            Some(Message::Gallery(gallery::Message::Next))
        ));
        assert!(matches!(
            key_message(&Key::Named(Named::ArrowLeft)),
            Some(Message::Gallery(gallery::Message::Previous))
        ));
        assert!(matches!(
            key_message(&Key::Named(Named::End)),
            Some(Message::Gallery(gallery::Message::Last))
        ));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert!(key_message(&Key::Named(Named::Space)).is_none());
        assert!(key_message(&Key::Character("a".into())).is_none());
    }
}
