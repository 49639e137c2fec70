// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard events are routed only for the Escape shortcut; the tick runs
//! while something on screen animates or expires.

use super::Message;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Interval of the tick driving toast expiry and the placeholder shimmer.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Listens for Escape, which closes the detail modal.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        _ => None,
    })
}

/// Creates the periodic tick subscription.
///
/// Ticks only while toasts are shown or the placeholder shimmer is visible.
pub fn create_tick_subscription(
    has_notifications: bool,
    placeholder_visible: bool,
) -> Subscription<Message> {
    if has_notifications || placeholder_visible {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
