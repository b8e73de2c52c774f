// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Caption**: Default caption text and meme text styling
//! - **Keyboard**: On-screen keyboard height used for keyboard avoidance
//! - **Window**: Initial and minimum window dimensions

// ==========================================================================
// Caption Defaults
// ==========================================================================

/// Text shown in the top caption until the user edits it.
pub const DEFAULT_TOP_CAPTION: &str = "TOP";

/// Text shown in the bottom caption until the user edits it.
pub const DEFAULT_BOTTOM_CAPTION: &str = "BOTTOM";

/// Font family list used for burned-in captions.
pub const DEFAULT_CAPTION_FONT_FAMILY: &str =
    "Impact, 'Helvetica Neue Condensed Black', 'Helvetica Neue', Arial, sans-serif";

/// Caption font size in logical pixels.
pub const DEFAULT_CAPTION_FONT_SIZE: f32 = 30.0;

/// Minimum caption font size.
pub const MIN_CAPTION_FONT_SIZE: f32 = 8.0;

/// Maximum caption font size.
pub const MAX_CAPTION_FONT_SIZE: f32 = 200.0;

/// Caption outline width as a percentage of the font size.
pub const DEFAULT_CAPTION_STROKE_WIDTH_PERCENT: f32 = 2.0;

/// Maximum caption outline width percentage.
pub const MAX_CAPTION_STROKE_WIDTH_PERCENT: f32 = 25.0;

/// Distance between the stage edge and a caption (logical pixels).
pub const DEFAULT_CAPTION_MARGIN: f32 = 12.0;

/// Caption fill color.
pub const DEFAULT_CAPTION_FILL: &str = "#ffffff";

/// Caption outline color.
pub const DEFAULT_CAPTION_STROKE: &str = "#000000";

// ==========================================================================
// Keyboard Defaults
// ==========================================================================

/// Whether focusing a caption counts as the on-screen keyboard appearing.
pub const DEFAULT_ON_SCREEN_KEYBOARD: bool = false;

pub use crate::domain::meme::keyboard_bounds::DEFAULT as DEFAULT_KEYBOARD_HEIGHT;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 650.0;
pub const MIN_WINDOW_WIDTH: f32 = 400.0;
pub const MIN_WINDOW_HEIGHT: f32 = 400.0;
