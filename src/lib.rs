// SPDX-License-Identifier: MPL-2.0
//! `iced_meme` turns a photo into a meme: pick a picture, type a caption above
//! and below it, then share or save the composited image.
//!
//! It is built with the Iced GUI framework, localized with Fluent, and keeps
//! user preferences in a TOML settings file.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
