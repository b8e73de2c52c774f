// SPDX-License-Identifier: MPL-2.0
//! Settings screen: display language, theme, and on-screen keyboard mode.
//!
//! The screen is stateless: it renders from a [`ViewContext`] and reports
//! choices as [`Message`]s. Persisting them is up to the application.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::alignment::Horizontal;
use iced::widget::{button, container, Column, Container, Row, Text};
use iced::{Element, Length, Theme};
use unic_langid::LanguageIdentifier;

#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    OnScreenKeyboardToggled(bool),
    Back,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    pub on_screen_keyboard: bool,
}

/// Button label for a locale, e.g. `Français (fr)`.
fn language_label(i18n: &I18n, locale: &LanguageIdentifier) -> String {
    let translated = i18n.tr(&format!("language-name-{locale}"));
    if translated.starts_with("MISSING:") {
        locale.to_string()
    } else {
        format!("{translated} ({locale})")
    }
}

fn choice<'a>(label: String, selected: bool, message: Message) -> Element<'a, Message> {
    let style: fn(&Theme, button::Status) -> button::Style = if selected {
        styles::button::selected
    } else {
        styles::button::unselected
    };

    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XXS, spacing::SM])
        .style(style)
        .into()
}

fn section<'a>(title: String, options: Row<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(options.spacing(spacing::XS).wrap())
        .into()
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let languages = i18n
        .available_locales
        .iter()
        .fold(Row::new(), |row, locale| {
            row.push(choice(
                language_label(i18n, locale),
                i18n.current_locale() == locale,
                Message::LanguageSelected(locale.clone()),
            ))
        });

    let themes = ThemeMode::ALL.iter().fold(Row::new(), |row, mode| {
        row.push(choice(
            i18n.tr(mode.i18n_key()),
            ctx.theme_mode == *mode,
            Message::ThemeModeSelected(*mode),
        ))
    });

    let keyboard = Row::new()
        .push(choice(
            i18n.tr("settings-keyboard-on"),
            ctx.on_screen_keyboard,
            Message::OnScreenKeyboardToggled(true),
        ))
        .push(choice(
            i18n.tr("settings-keyboard-off"),
            !ctx.on_screen_keyboard,
            Message::OnScreenKeyboardToggled(false),
        ));

    let back = button(Text::new(format!("← {}", i18n.tr("settings-back"))).size(typography::BODY))
        .on_press(Message::Back)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::toolbar);

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .max_width(sizing::SETTINGS_WIDTH)
        .push(back)
        .push(Text::new(i18n.tr("settings-title")).size(typography::TITLE_LG))
        .push(section(i18n.tr("settings-language-label"), languages))
        .push(section(i18n.tr("settings-theme-label"), themes))
        .push(section(i18n.tr("settings-keyboard-label"), keyboard))
        .push(Text::new(i18n.tr("settings-keyboard-hint")).size(typography::CAPTION));

    Container::new(container(content).style(styles::editor::panel))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(spacing::MD)
        .into()
}
