// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! Each handler receives an [`UpdateContext`] borrowing the parts of the
//! [`App`](super::App) it may touch, so the main `update` stays a flat
//! dispatch table.

use super::{persistence, Message, Screen};
use crate::config::Config;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::export::{self, ExportFormat};
use crate::media::{self, extensions, ImageData, Meme};
use crate::ui::meme_editor::{self, Event as EditorEvent, STAGE_SCROLLABLE_ID};
use crate::ui::notifications::{self, Notification};
use crate::ui::settings;
use crate::ui::theming::ThemeMode;
use chrono::Local;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{Size, Task};
use std::path::PathBuf;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub config: &'a mut Config,
    pub config_dir: &'a Option<PathBuf>,
    pub editor: &'a mut meme_editor::State,
    pub theme_mode: &'a mut ThemeMode,
    pub notifications: &'a mut notifications::Manager,
}

/// Forwards a message to the editor and acts on the event it emits.
///
/// A change of keyboard shift is mirrored into the stage scrollable.
pub fn handle_editor_message(
    ctx: &mut UpdateContext<'_>,
    message: meme_editor::Message,
) -> Task<Message> {
    let offset_before = ctx.editor.vertical_offset();
    let event = ctx.editor.update(message);
    let scroll = sync_keyboard_shift(offset_before, ctx.editor.vertical_offset());

    let task = match event {
        EditorEvent::None => Task::none(),
        EditorEvent::PickImageRequested => handle_pick_image(),
        EditorEvent::ShareRequested(meme) => handle_share(ctx.config, meme),
        EditorEvent::SaveToLibraryRequested(meme) => handle_save_to_library(ctx, meme),
        EditorEvent::CompositingFailed(err) => {
            ctx.notifications.push(Notification::from_error(&err));
            Task::none()
        }
        EditorEvent::OpenSettingsRequested => switch_screen(ctx, Screen::Settings),
    };

    Task::batch([scroll, task])
}

/// Scrolls the stage so the page moves up by the keyboard shift.
pub fn sync_keyboard_shift(before: f32, after: f32) -> Task<Message> {
    if (before - after).abs() < f32::EPSILON {
        return Task::none();
    }
    scroll_to_offset(after)
}

/// The page is padded by exactly the shift, so a shifted page sits at the
/// end of its scroll range and an unshifted one at the start.
fn scroll_to_offset(vertical_offset: f32) -> Task<Message> {
    let y = if vertical_offset < 0.0 { 1.0 } else { 0.0 };
    operation::snap_to(Id::new(STAGE_SCROLLABLE_ID), RelativeOffset { x: 0.0, y })
}

/// Opens the photo picker.
fn handle_pick_image() -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter("Images", extensions::IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::ImagePicked,
    )
}

/// Handles the result of the photo picker. Cancelling is silent.
pub fn handle_image_picked(path: Option<PathBuf>) -> Task<Message> {
    match path {
        Some(path) => load_image_task(path),
        None => {
            tracing::debug!("image picker cancelled");
            Task::none()
        }
    }
}

pub fn load_image_task(path: PathBuf) -> Task<Message> {
    Task::perform(async move { media::load_image(&path) }, Message::ImageLoaded)
}

pub fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<ImageData, Error>,
) -> Task<Message> {
    match result {
        Ok(image) => {
            ctx.editor.image_picked(image);
            Task::none()
        }
        Err(err) => {
            tracing::warn!(%err, "image could not be loaded");
            ctx.notifications.push(
                Notification::warning(err.i18n_key()).with_arg("details", err.to_string()),
            );
            Task::none()
        }
    }
}

/// Presents the share surface: a save dialog prefilled with a timestamped
/// name. The meme is written once the user picks a destination.
fn handle_share(config: &Config, meme: Meme) -> Task<Message> {
    let format = config.export.format();
    let file_name = export::default_file_name(format, Local::now());
    let directory = export::library_dir(config.export.library_dir.as_deref());

    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().set_file_name(&file_name);
            for (name, exts) in share_filters(format) {
                dialog = dialog.add_filter(name, exts);
            }
            if let Some(dir) = directory.filter(|dir| dir.exists()) {
                dialog = dialog.set_directory(&dir);
            }

            let Some(handle) = dialog.save_file().await else {
                return Ok(None);
            };
            let path = handle.path().to_path_buf();
            export::save_meme(meme.meme_image(), &path, format)?;
            Ok(Some(path))
        },
        Message::ShareCompleted,
    )
}

/// Save dialog filters with the configured format listed first.
fn share_filters(format: ExportFormat) -> Vec<(&'static str, &'static [&'static str])> {
    let mut filters = extensions::MEME_SAVE_FILTERS.to_vec();
    if let Some(pos) = filters
        .iter()
        .position(|(_, exts)| exts.contains(&format.extension()))
    {
        let preferred = filters.remove(pos);
        filters.insert(0, preferred);
    }
    filters
}

pub fn handle_share_completed(
    ctx: &mut UpdateContext<'_>,
    result: Result<Option<PathBuf>, Error>,
) -> Task<Message> {
    match result {
        Ok(Some(path)) => ctx.notifications.push(
            Notification::success("notification-share-success")
                .with_arg("path", path.display().to_string()),
        ),
        Ok(None) => tracing::debug!("share dismissed"),
        Err(err) => ctx.notifications.push(Notification::from_error(&err)),
    }
    Task::none()
}

fn handle_save_to_library(ctx: &mut UpdateContext<'_>, meme: Meme) -> Task<Message> {
    let Some(library) = export::library_dir(ctx.config.export.library_dir.as_deref()) else {
        ctx.notifications
            .push(Notification::warning("notification-library-unavailable"));
        return Task::none();
    };
    let format = ctx.config.export.format();

    Task::perform(
        async move { export::save_to_library(meme.meme_image(), &library, format) },
        Message::LibrarySaveCompleted,
    )
}

pub fn handle_library_save_completed(
    ctx: &mut UpdateContext<'_>,
    result: Result<PathBuf, Error>,
) -> Task<Message> {
    match result {
        Ok(path) => ctx.notifications.push(
            Notification::success("notification-library-success")
                .with_arg("path", path.display().to_string()),
        ),
        Err(err) => ctx.notifications.push(Notification::from_error(&err)),
    }
    Task::none()
}

/// Handles a file dropped on the window while the editor is shown.
pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    if !media::is_supported_image(&path) {
        ctx.notifications.push(
            Notification::warning("notification-unsupported-file")
                .with_arg("path", path.display().to_string()),
        );
        return Task::none();
    }
    load_image_task(path)
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    ctx.editor.set_window_size(size);
    Task::none()
}

pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    match message {
        settings::Message::LanguageSelected(locale) => {
            persistence::apply_language_change(ctx.i18n, ctx.config, locale);
        }
        settings::Message::ThemeModeSelected(mode) => {
            *ctx.theme_mode = mode;
            ctx.config.general.theme_mode = mode;
        }
        settings::Message::OnScreenKeyboardToggled(on_screen) => {
            ctx.config.keyboard.on_screen = Some(on_screen);
            ctx.editor.apply_config(ctx.config);
        }
        settings::Message::Back => return switch_screen(ctx, Screen::Editor),
    }

    persistence::persist_config(ctx.config, ctx.config_dir.clone(), ctx.notifications);
    Task::none()
}

/// Changes screen. Leaving the editor drops its focus and keyboard shift;
/// returning to it resets the stage scroll position.
pub fn switch_screen(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    if *ctx.screen == target {
        return Task::none();
    }
    if *ctx.screen == Screen::Editor {
        ctx.editor.on_disappear();
    }
    *ctx.screen = target;

    if target == Screen::Editor {
        scroll_to_offset(ctx.editor.vertical_offset())
    } else {
        Task::none()
    }
}
