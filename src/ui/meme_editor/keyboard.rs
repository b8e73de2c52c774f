// SPDX-License-Identifier: MPL-2.0
//! Keyboard avoidance: moving the screen up so the bottom caption stays
//! visible above the on-screen keyboard.

use crate::domain::meme::{CaptionSlot, KeyboardHeight};

/// Vertical shift applied to the whole editor while the keyboard is up.
///
/// Only a keyboard that appears while the bottom caption is focused shifts
/// the screen. The shift is remembered so that hiding the keyboard undoes
/// exactly what showing it did, even if focus moved in between.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KeyboardAvoidance {
    shift: Option<f32>,
}

impl KeyboardAvoidance {
    /// Handles the keyboard appearing with `height`.
    ///
    /// A second show replaces the stored shift; shifts never accumulate.
    pub fn keyboard_will_show(&mut self, height: KeyboardHeight, focus: Option<CaptionSlot>) {
        if focus == Some(CaptionSlot::Bottom) {
            tracing::debug!(height = height.value(), "shifting editor above keyboard");
            self.shift = Some(height.value());
        }
    }

    /// Handles the keyboard disappearing by reversing the stored shift.
    pub fn keyboard_will_hide(&mut self) {
        if let Some(shift) = self.shift.take() {
            tracing::debug!(shift, "restoring editor position");
        }
    }

    /// Offset of the screen's top edge: negative while shifted up.
    #[must_use]
    pub fn vertical_offset(&self) -> f32 {
        self.shift.map_or(0.0, |shift| -shift)
    }

    #[must_use]
    pub fn is_shifted(&self) -> bool {
        self.shift.is_some()
    }

    pub fn reset(&mut self) {
        self.shift = None;
    }
}
