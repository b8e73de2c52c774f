// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::ImageData;
use crate::ui::meme_editor;
use crate::ui::notifications;
use crate::ui::settings;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Editor(meme_editor::Message),
    Settings(settings::Message),
    Notification(notifications::NotificationMessage),
    /// Result from the image picker; `None` when the user cancelled.
    ImagePicked(Option<PathBuf>),
    ImageLoaded(Result<ImageData, Error>),
    /// Result from the share dialog; `Ok(None)` when the user cancelled.
    ShareCompleted(Result<Option<PathBuf>, Error>),
    LibrarySaveCompleted(Result<PathBuf, Error>),
    WindowResized(iced::Size),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional image path to preload on startup.
    pub file_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_MEME_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
