// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native window events: dropped files go to the analysis workflow,
//! close requests go through `App::update` so held previews are released
//! before the window closes.

use super::Message;
use crate::ui::analysis;
use iced::{event, window, Subscription};

/// Creates the window event subscription.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(window::Event::FileDropped(path)) => {
            Some(Message::Analysis(analysis::Message::FileDropped(path)))
        }
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        _ => None,
    })
}
