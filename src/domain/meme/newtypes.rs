// SPDX-License-Identifier: MPL-2.0
//! Meme value objects.
//!
//! This module provides type-safe wrappers for stage geometry and keyboard
//! metrics, ensuring they are always within valid ranges.

// =============================================================================
// FrameSize
// =============================================================================

/// Size of the image display region in logical pixels.
///
/// Both dimensions are at least one pixel, so a rasterized meme always has a
/// valid bitmap size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameSize {
    width: u32,
    height: u32,
}

impl FrameSize {
    /// Creates a frame size, returning `None` if either dimension is zero.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Option<Self> {
        (width > 0 && height > 0).then_some(Self { width, height })
    }

    /// Creates a frame size from logical floating point dimensions.
    ///
    /// Dimensions are rounded to the nearest pixel; non-finite or
    /// non-positive values yield `None`.
    #[must_use]
    pub fn from_logical(width: f32, height: f32) -> Option<Self> {
        if !width.is_finite() || !height.is_finite() {
            return None;
        }
        // Clamped to the u32 range above, so the casts cannot truncate.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let to_px = |v: f32| v.round().clamp(0.0, u32::MAX as f32) as u32;
        Self::new(to_px(width), to_px(height))
    }

    #[must_use]
    pub fn width(self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> u32 {
        self.height
    }

    /// Places an image of the given size inside this frame, preserving its
    /// aspect ratio and centering it (aspect fit).
    ///
    /// Returns `(x, y, width, height)` of the placed image; width and height
    /// are at least one pixel.
    #[must_use]
    pub fn fit(self, image_width: u32, image_height: u32) -> (u32, u32, u32, u32) {
        if image_width == 0 || image_height == 0 {
            return (0, 0, self.width, self.height);
        }
        let scale = f64::min(
            f64::from(self.width) / f64::from(image_width),
            f64::from(self.height) / f64::from(image_height),
        );
        // Scaled sizes never exceed the frame, which fits in u32.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let fitted_w = ((f64::from(image_width) * scale).round() as u32).clamp(1, self.width);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let fitted_h = ((f64::from(image_height) * scale).round() as u32).clamp(1, self.height);
        let x = (self.width - fitted_w) / 2;
        let y = (self.height - fitted_h) / 2;
        (x, y, fitted_w, fitted_h)
    }
}

// =============================================================================
// KeyboardHeight
// =============================================================================

/// On-screen keyboard height bounds (logical pixels).
pub mod keyboard_bounds {
    /// Minimum keyboard height.
    pub const MIN: f32 = 0.0;
    /// Maximum keyboard height.
    pub const MAX: f32 = 1000.0;
    /// Default keyboard height, close to a phone-sized soft keyboard.
    pub const DEFAULT: f32 = 260.0;
}

/// Height reported for the on-screen keyboard, clamped to a sane range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyboardHeight(f32);

impl KeyboardHeight {
    /// Creates a keyboard height, clamping the value to the valid range.
    /// Non-finite values fall back to zero.
    #[must_use]
    pub fn new(height: f32) -> Self {
        if height.is_finite() {
            Self(height.clamp(keyboard_bounds::MIN, keyboard_bounds::MAX))
        } else {
            Self(keyboard_bounds::MIN)
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for KeyboardHeight {
    fn default() -> Self {
        Self(keyboard_bounds::DEFAULT)
    }
}
