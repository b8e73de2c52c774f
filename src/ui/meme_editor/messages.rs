// SPDX-License-Identifier: MPL-2.0
//! Meme editor message/event types re-exported by the facade.

use crate::domain::meme::{CaptionSlot, KeyboardHeight};
use crate::error::Error;
use crate::media::Meme;

/// Toolbar button presses.
#[derive(Debug, Clone)]
pub enum ToolbarMessage {
    PickFromAlbum,
    Share,
    SaveToLibrary,
    Cancel,
    OpenSettings,
}

/// Messages emitted directly by the editor widgets and its subscription.
#[derive(Debug, Clone)]
pub enum Message {
    Toolbar(ToolbarMessage),
    /// Full new value of a caption field.
    CaptionChanged(CaptionSlot, String),
    /// Enter pressed in a caption field.
    CaptionSubmitted(CaptionSlot),
    /// The keyboard is about to cover `height` pixels of the window bottom.
    ///
    /// Sent by the editor itself for input-method `Opened` events and, in
    /// on-screen mode, for caption focus. A host with a real touch keyboard
    /// can send it directly.
    KeyboardWillShow(KeyboardHeight),
    /// The keyboard is going away; sent for input-method `Closed`, caption
    /// submit and, in on-screen mode, focus loss.
    KeyboardWillHide,
    /// Raw window event routed while the editor is on screen.
    RawEvent {
        window: iced::window::Id,
        event: iced::Event,
    },
}

impl From<ToolbarMessage> for Message {
    fn from(message: ToolbarMessage) -> Self {
        Message::Toolbar(message)
    }
}

/// Events propagated to the parent application for side effects.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Open the image picker.
    PickImageRequested,
    /// Hand the freshly composited meme to the share surface.
    ShareRequested(Meme),
    /// Write the freshly composited meme into the photo library.
    SaveToLibraryRequested(Meme),
    /// Compositing failed; nothing was shared.
    CompositingFailed(Error),
    OpenSettingsRequested,
}
