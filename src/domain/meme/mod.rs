// SPDX-License-Identifier: MPL-2.0
//! Meme domain types.
//!
//! Captions, the stage the meme is composed on, and the on-screen keyboard
//! height used for keyboard avoidance.

mod newtypes;

pub use newtypes::{keyboard_bounds, FrameSize, KeyboardHeight};

/// Which of the two caption fields is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptionSlot {
    Top,
    Bottom,
}

impl CaptionSlot {
    /// Both slots in layout order.
    pub const ALL: [CaptionSlot; 2] = [CaptionSlot::Top, CaptionSlot::Bottom];
}

/// Text of one caption field.
///
/// A caption starts out *pristine*, showing its default text. The first edit
/// of a pristine caption replaces the default instead of extending it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caption {
    text: String,
    default_text: String,
    pristine: bool,
}

impl Caption {
    /// Creates a pristine caption showing `default_text`.
    pub fn new(default_text: impl Into<String>) -> Self {
        let default_text = default_text.into();
        Self {
            text: default_text.clone(),
            default_text,
            pristine: true,
        }
    }

    /// Current caption text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn default_text(&self) -> &str {
        &self.default_text
    }

    /// Whether the caption still shows its untouched default text.
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        self.pristine
    }

    /// Applies the full new value of the text field.
    ///
    /// While pristine, characters typed after the default text are kept and
    /// the default is dropped. A backspace at the end of the default clears
    /// it. Any other value (a selection replaced by typing, a paste) is kept
    /// as typed.
    pub fn edit(&mut self, value: String) {
        if self.pristine {
            self.pristine = false;
            self.text = match value.strip_prefix(self.default_text.as_str()) {
                Some(typed) => typed.to_string(),
                None if value == self.default_without_last_char() => String::new(),
                None => value,
            };
        } else {
            self.text = value;
        }
    }

    fn default_without_last_char(&self) -> &str {
        let mut chars = self.default_text.chars();
        chars.next_back();
        chars.as_str()
    }

    /// Restores the default text and the pristine flag.
    pub fn reset(&mut self) {
        self.text.clone_from(&self.default_text);
        self.pristine = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_caption_is_pristine_default() {
        let caption = Caption::new("TOP");
        assert_eq!(caption.text(), "TOP");
        assert!(caption.is_pristine());
    }

    #[test]
    fn first_edit_replaces_default_text() {
        let mut caption = Caption::new("TOP");
        caption.edit("TOPh".to_string());
        assert_eq!(caption.text(), "h");
        assert!(!caption.is_pristine());

        caption.edit("hi".to_string());
        assert_eq!(caption.text(), "hi");
    }

    #[test]
    fn deleting_from_default_clears_it() {
        let mut caption = Caption::new("BOTTOM");
        caption.edit("BOTTO".to_string());
        assert_eq!(caption.text(), "");
    }

    #[test]
    fn typing_over_selected_default_keeps_first_keystroke() {
        let mut caption = Caption::new("TOP");
        caption.edit("T".to_string());
        assert_eq!(caption.text(), "T");

        caption.edit("Th".to_string());
        caption.edit("Tha".to_string());
        caption.edit("That".to_string());
        assert_eq!(caption.text(), "That");
    }

    #[test]
    fn replacing_selected_default_with_other_prefix_is_kept() {
        let mut caption = Caption::new("BOTTOM");
        caption.edit("BO".to_string());
        assert_eq!(caption.text(), "BO");
    }

    #[test]
    fn pasted_value_over_default_is_kept_whole() {
        let mut caption = Caption::new("TOP");
        caption.edit("ONE DOES NOT SIMPLY".to_string());
        assert_eq!(caption.text(), "ONE DOES NOT SIMPLY");
    }

    #[test]
    fn reset_restores_default_and_pristine_flag() {
        let mut caption = Caption::new("TOP");
        caption.edit("TOPx".to_string());
        caption.reset();
        assert_eq!(caption.text(), "TOP");
        assert!(caption.is_pristine());
    }

    #[test]
    fn edits_after_first_are_taken_verbatim() {
        let mut caption = Caption::new("TOP");
        caption.edit("TOPa".to_string());
        caption.edit("TOP".to_string());
        assert_eq!(caption.text(), "TOP");
        assert!(!caption.is_pristine());
    }
}
