// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the active screen and layers the toast overlay on top of it.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::meme_editor::{self, ViewContext as EditorViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::settings::{self, ViewContext as SettingsViewContext};
use crate::ui::theming::ThemeMode;
use iced::widget::{Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub editor: &'a meme_editor::State,
    pub theme_mode: ThemeMode,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Editor => meme_editor::render(ctx.editor, EditorViewContext { i18n: ctx.i18n })
            .map(Message::Editor),
        Screen::Settings => settings::view(SettingsViewContext {
            i18n: ctx.i18n,
            theme_mode: ctx.theme_mode,
            on_screen_keyboard: ctx.editor.keyboard_settings().on_screen,
        })
        .map(Message::Settings),
    };

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
