// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events are routed by screen. Pointer and input-method events reach
//! the meme editor only while it is displayed, so leaving the editor drops
//! its keyboard registration.

use super::{Message, Screen};
use crate::ui::meme_editor;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Creates the event subscription for the current screen.
///
/// - Editor: window open and resize, file drops, pointer and input-method events
/// - Settings: window resize only
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Editor => event::listen_with(|event, _status, window_id| match event {
            event::Event::Window(
                window::Event::Opened { size, .. } | window::Event::Resized(size),
            ) => Some(Message::WindowResized(size)),
            event::Event::Window(window::Event::FileDropped(path)) => {
                Some(Message::FileDropped(path))
            }
            // Routed even when a caption field captured the event: the click
            // that focuses a field is the one focus tracking needs.
            event @ (event::Event::Mouse(
                iced::mouse::Event::CursorMoved { .. }
                | iced::mouse::Event::CursorLeft
                | iced::mouse::Event::ButtonPressed(iced::mouse::Button::Left),
            )
            | event::Event::InputMethod(
                iced_core::input_method::Event::Opened | iced_core::input_method::Event::Closed,
            )) => Some(Message::Editor(meme_editor::Message::RawEvent {
                window: window_id,
                event,
            })),
            _ => None,
        }),
        Screen::Settings => event::listen_with(|event, _status, _window_id| match event {
            event::Event::Window(window::Event::Resized(size)) => {
                Some(Message::WindowResized(size))
            }
            _ => None,
        }),
    }
}

/// Ticks only while notifications are waiting to expire.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
