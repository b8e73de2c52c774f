// SPDX-License-Identifier: MPL-2.0
//! Meme editor screen.
//!
//! The editor owns the background photo, the two captions, which chrome is
//! visible, which caption has focus, and the keyboard shift. It follows the
//! "state down, messages up" pattern: widgets send [`Message`]s, and side
//! effects the editor cannot perform itself (file dialogs, writing files,
//! switching screens) go back to the application as an [`Event`].
//!
//! ```text
//! {no image} --image picked--> {editing} --cancel--> {no image}
//!                               |    ^
//!                               +----+ image picked again (captions kept)
//! ```

mod keyboard;
mod messages;
mod view;

#[cfg(test)]
mod tests;

use crate::config::Config;
use crate::domain::meme::{Caption, CaptionSlot, FrameSize, KeyboardHeight};
use crate::error::{Error, Result};
use crate::media::{CaptionStyle, ImageData, Meme};
use crate::ui::design_tokens::{sizing, spacing};
use iced::{mouse, Point, Size};
use std::sync::Arc;

pub use keyboard::KeyboardAvoidance;
pub use messages::{Event, Message, ToolbarMessage};
pub use view::{render, ViewContext};

/// Id of the scrollable that carries the keyboard shift.
pub const STAGE_SCROLLABLE_ID: &str = "meme-editor-stage";

/// Inner padding of a caption text field.
const CAPTION_FIELD_PADDING: f32 = spacing::XXS;

/// Line height of caption text relative to the font size.
const CAPTION_LINE_HEIGHT: f32 = 1.3;

/// Which parts of the editor chrome are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chrome {
    /// Share, Save to Pictures and Cancel.
    pub top_toolbar: bool,
    /// Album and Settings.
    pub bottom_toolbar: bool,
    pub caption_fields: bool,
}

impl Chrome {
    /// Chrome shown before a photo is picked.
    pub const NO_IMAGE: Chrome = Chrome {
        top_toolbar: false,
        bottom_toolbar: true,
        caption_fields: false,
    };
}

/// Keyboard behavior taken from the `[keyboard]` config section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyboardSettings {
    /// Caption focus counts as the on-screen keyboard showing.
    pub on_screen: bool,
    pub height: KeyboardHeight,
}

impl KeyboardSettings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            on_screen: config.keyboard.on_screen(),
            height: config.keyboard.height(),
        }
    }
}

/// Local UI state for the meme editor screen.
#[derive(Debug, Clone)]
pub struct State {
    image: Option<ImageData>,
    top: Caption,
    bottom: Caption,
    chrome: Chrome,
    focus: Option<CaptionSlot>,
    keyboard: KeyboardAvoidance,
    keyboard_settings: KeyboardSettings,
    caption_style: CaptionStyle,
    window_size: Size,
    cursor_position: Option<Point>,
}

impl State {
    /// Creates an editor with no photo and pristine captions.
    #[must_use]
    pub fn new(config: &Config, window_size: Size) -> Self {
        Self {
            image: None,
            top: Caption::new(config.caption.top_default()),
            bottom: Caption::new(config.caption.bottom_default()),
            chrome: Chrome::NO_IMAGE,
            focus: None,
            keyboard: KeyboardAvoidance::default(),
            keyboard_settings: KeyboardSettings::from_config(config),
            caption_style: config.caption.style(),
            window_size,
            cursor_position: None,
        }
    }

    /// Update the state and emit an [`Event`] for the parent when needed.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Toolbar(msg) => self.handle_toolbar_message(msg),
            Message::CaptionChanged(slot, value) => {
                if self.chrome.caption_fields {
                    self.caption_mut(slot).edit(value);
                    self.set_focus(Some(slot));
                }
                Event::None
            }
            Message::CaptionSubmitted(slot) => {
                if self.focus == Some(slot) {
                    self.set_focus(None);
                    // The text field keeps its widget focus after Enter, so
                    // no input-method `Closed` follows.
                    self.update(Message::KeyboardWillHide);
                }
                Event::None
            }
            Message::KeyboardWillShow(height) => {
                self.keyboard.keyboard_will_show(height, self.focus);
                Event::None
            }
            Message::KeyboardWillHide => {
                self.keyboard.keyboard_will_hide();
                Event::None
            }
            Message::RawEvent { event, .. } => self.handle_raw_event(&event),
        }
    }

    fn handle_toolbar_message(&mut self, message: ToolbarMessage) -> Event {
        match message {
            ToolbarMessage::PickFromAlbum => Event::PickImageRequested,
            ToolbarMessage::Share => match self.generate_memed_image() {
                Ok(Some(meme)) => Event::ShareRequested(meme),
                Ok(None) => Event::None,
                Err(err) => Event::CompositingFailed(err),
            },
            ToolbarMessage::SaveToLibrary => match self.generate_memed_image() {
                Ok(Some(meme)) => Event::SaveToLibraryRequested(meme),
                Ok(None) => Event::None,
                Err(err) => Event::CompositingFailed(err),
            },
            ToolbarMessage::Cancel => {
                self.cancel();
                Event::None
            }
            ToolbarMessage::OpenSettings => Event::OpenSettingsRequested,
        }
    }

    fn handle_raw_event(&mut self, event: &iced::Event) -> Event {
        match event {
            iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                self.cursor_position = Some(*position);
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) => {
                self.cursor_position = None;
            }
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if self.chrome.caption_fields {
                    let slot = self.cursor_position.and_then(|p| self.slot_at(p));
                    self.set_focus(slot);
                }
            }
            iced::Event::InputMethod(iced_core::input_method::Event::Opened) => {
                return self.update(Message::KeyboardWillShow(self.keyboard_settings.height));
            }
            iced::Event::InputMethod(iced_core::input_method::Event::Closed) => {
                return self.update(Message::KeyboardWillHide);
            }
            _ => {}
        }
        Event::None
    }

    /// Stores a freshly decoded photo and reveals the caption fields and
    /// the top toolbar. Captions are kept when a photo is replaced.
    pub fn image_picked(&mut self, image: ImageData) {
        tracing::debug!(width = image.width, height = image.height, "editor image set");
        self.image = Some(image);
        self.chrome.caption_fields = true;
        self.chrome.top_toolbar = true;
    }

    /// Rasterizes the stage into a [`Meme`].
    ///
    /// The bitmap is rendered from the photo and caption state alone, so
    /// toolbar chrome never reaches it and its visibility is left as is.
    /// Returns `Ok(None)` when no photo is loaded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the stage has no visible area or the
    /// caption layer cannot be rendered.
    pub fn generate_memed_image(&self) -> Result<Option<Meme>> {
        let Some(image) = &self.image else {
            tracing::debug!("share requested without an image");
            return Ok(None);
        };
        let frame = self
            .frame_size()
            .ok_or_else(|| Error::Render("stage has no visible area".into()))?;

        Meme::compose(
            Arc::clone(image.source()),
            self.top.text(),
            self.bottom.text(),
            frame,
            &self.caption_style,
        )
        .map(Some)
    }

    /// Returns the editor to its initial state: default captions, no photo,
    /// caption fields and top toolbar hidden, no focus, no keyboard shift.
    pub fn cancel(&mut self) {
        self.top.reset();
        self.bottom.reset();
        self.image = None;
        self.chrome.caption_fields = false;
        self.chrome.top_toolbar = false;
        self.focus = None;
        self.keyboard.reset();
    }

    /// Called when the editor leaves the screen: its keyboard registration
    /// goes away, so focus and shift are dropped too.
    pub fn on_disappear(&mut self) {
        self.focus = None;
        self.cursor_position = None;
        self.keyboard.reset();
    }

    #[must_use]
    pub fn can_share(&self) -> bool {
        self.image.is_some()
    }

    fn set_focus(&mut self, focus: Option<CaptionSlot>) {
        if self.focus == focus {
            return;
        }
        let had_focus = self.focus.is_some();
        self.focus = focus;

        if self.keyboard_settings.on_screen {
            match focus {
                Some(_) => {
                    self.update(Message::KeyboardWillShow(self.keyboard_settings.height));
                }
                None if had_focus => {
                    self.update(Message::KeyboardWillHide);
                }
                None => {}
            }
        }
    }

    fn caption_mut(&mut self, slot: CaptionSlot) -> &mut Caption {
        match slot {
            CaptionSlot::Top => &mut self.top,
            CaptionSlot::Bottom => &mut self.bottom,
        }
    }

    /// Caption slot whose band contains `position` (window coordinates).
    fn slot_at(&self, position: Point) -> Option<CaptionSlot> {
        let stage = self.stage_size();
        // Window coordinates sit `shift` pixels above page coordinates.
        let y = position.y - self.keyboard.vertical_offset() - sizing::TOOLBAR_HEIGHT;
        if position.x < 0.0 || position.x > stage.width || y < 0.0 || y > stage.height {
            return None;
        }

        let band = self.caption_band_height();
        if y <= band {
            Some(CaptionSlot::Top)
        } else if y >= stage.height - band {
            Some(CaptionSlot::Bottom)
        } else {
            None
        }
    }

    /// Height of a caption text field.
    #[must_use]
    pub fn caption_field_height(&self) -> f32 {
        self.caption_style.font_size * CAPTION_LINE_HEIGHT + 2.0 * CAPTION_FIELD_PADDING
    }

    fn caption_band_height(&self) -> f32 {
        self.caption_style.margin + self.caption_field_height()
    }

    pub fn set_window_size(&mut self, size: Size) {
        self.window_size = size;
    }

    /// Applies changed settings without touching the photo or captions.
    pub fn apply_config(&mut self, config: &Config) {
        self.keyboard_settings = KeyboardSettings::from_config(config);
        self.caption_style = config.caption.style();
    }

    #[must_use]
    pub fn window_size(&self) -> Size {
        self.window_size
    }

    /// Size of the image display region between the two toolbars.
    #[must_use]
    pub fn stage_size(&self) -> Size {
        Size::new(
            self.window_size.width.max(0.0),
            (self.window_size.height - 2.0 * sizing::TOOLBAR_HEIGHT).max(0.0),
        )
    }

    /// Stage size in whole pixels, `None` if the stage has no area.
    #[must_use]
    pub fn frame_size(&self) -> Option<FrameSize> {
        let stage = self.stage_size();
        FrameSize::from_logical(stage.width, stage.height)
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn caption(&self, slot: CaptionSlot) -> &Caption {
        match slot {
            CaptionSlot::Top => &self.top,
            CaptionSlot::Bottom => &self.bottom,
        }
    }

    #[must_use]
    pub fn caption_style(&self) -> &CaptionStyle {
        &self.caption_style
    }

    #[must_use]
    pub fn chrome(&self) -> Chrome {
        self.chrome
    }

    #[must_use]
    pub fn focus(&self) -> Option<CaptionSlot> {
        self.focus
    }

    #[must_use]
    pub fn keyboard_settings(&self) -> KeyboardSettings {
        self.keyboard_settings
    }

    /// Offset of the screen's top edge; negative while shifted up.
    #[must_use]
    pub fn vertical_offset(&self) -> f32 {
        self.keyboard.vertical_offset()
    }
}
