// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! UI code follows the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`meme_editor`] - Photo stage with caption fields and the two toolbars
//! - [`settings`] - Language, theme and keyboard preferences
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, editor chrome)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod meme_editor;
pub mod notifications;
pub mod settings;
pub mod styles;
pub mod theming;
