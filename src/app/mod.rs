// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the editor and settings.
//!
//! The `App` struct wires together localization, the persisted configuration,
//! the meme editor and toast notifications, and translates messages into side
//! effects like file dialogs, image loading or config persistence.

mod message;
pub mod paths;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::meme_editor;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    config: Config,
    /// Directory holding `settings.toml`, if overridden at startup.
    config_dir: Option<PathBuf>,
    editor: meme_editor::State,
    theme_mode: ThemeMode,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("editor_has_image", &self.editor.image().is_some())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(config::MIN_WINDOW_WIDTH, config::MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // iced 0.14 requires an `Fn` boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and optionally kicks off asynchronous
    /// image loading for a path given on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir.clone());
        let i18n = I18n::new(flags.lang, &config);

        let mut notifications = notifications::Manager::new();
        if let Some(key) = config_warning {
            notifications.push(Notification::warning(key));
        }

        let editor = meme_editor::State::new(
            &config,
            Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        );

        let app = App {
            i18n,
            screen: Screen::Editor,
            theme_mode: config.general.theme_mode,
            config,
            config_dir,
            editor,
            notifications,
        };

        let task = match flags.file_path {
            Some(path) => update::load_image_task(PathBuf::from(path)),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(self.screen),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            config: &mut self.config,
            config_dir: &self.config_dir,
            editor: &mut self.editor,
            theme_mode: &mut self.theme_mode,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Editor(msg) => update::handle_editor_message(&mut ctx, msg),
            Message::Settings(msg) => update::handle_settings_message(&mut ctx, msg),
            Message::Notification(msg) => {
                ctx.notifications.handle_message(&msg);
                Task::none()
            }
            Message::ImagePicked(path) => update::handle_image_picked(path),
            Message::ImageLoaded(result) => update::handle_image_loaded(&mut ctx, result),
            Message::ShareCompleted(result) => update::handle_share_completed(&mut ctx, result),
            Message::LibrarySaveCompleted(result) => {
                update::handle_library_save_completed(&mut ctx, result)
            }
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
            Message::Tick(_) => {
                ctx.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            editor: &self.editor,
            theme_mode: self.theme_mode,
            notifications: &self.notifications,
        })
    }
}
