// SPDX-License-Identifier: MPL-2.0
//! Editor view: top toolbar, stage with caption fields, bottom toolbar.
//!
//! The whole page sits in a scrollable with hidden scrollbars. Keyboard
//! avoidance pads the page by the shift and scrolls it, moving everything
//! up the way the screen frame moves on a phone.

use super::{Message, State, ToolbarMessage, CAPTION_FIELD_PADDING, STAGE_SCROLLABLE_ID};
use crate::domain::meme::CaptionSlot;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::font::{self, Font};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, container, text_input, Column, Id, Image, Row, Scrollable, Space, Stack, Text};
use iced::{Color, ContentFit, Element, Length};
use std::collections::HashSet;
use std::sync::{Mutex, OnceLock, PoisonError};

/// Contextual data needed to render the editor view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub fn render<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let chrome = state.chrome();

    let top = if chrome.top_toolbar {
        top_toolbar(state, &ctx)
    } else {
        toolbar_placeholder()
    };
    let bottom = if chrome.bottom_toolbar {
        bottom_toolbar(&ctx)
    } else {
        toolbar_placeholder()
    };

    let page = Column::new()
        .push(top)
        .push(stage(state))
        .push(bottom)
        .width(Length::Fill)
        .height(Length::Fixed(state.window_size().height));

    let shift = -state.vertical_offset();

    Scrollable::new(
        Column::new()
            .push(page)
            .push(Space::new().height(Length::Fixed(shift))),
    )
    .id(Id::new(STAGE_SCROLLABLE_ID))
    .direction(Direction::Vertical(Scrollbar::hidden()))
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn toolbar_button<'a>(label: String, message: Option<Message>) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .padding([spacing::XS, spacing::SM])
        .on_press_maybe(message)
        .style(styles::button::toolbar)
        .into()
}

fn toolbar<'a>(content: Row<'a, Message>) -> Element<'a, Message> {
    container(
        content
            .spacing(spacing::XS)
            .padding([0.0, spacing::XS])
            .align_y(Vertical::Center)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::TOOLBAR_HEIGHT))
    .style(styles::editor::toolbar)
    .into()
}

fn toolbar_placeholder<'a>() -> Element<'a, Message> {
    Space::new()
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TOOLBAR_HEIGHT))
        .into()
}

fn top_toolbar<'a>(state: &State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let can_share = state.can_share();

    toolbar(
        Row::new()
            .push(toolbar_button(
                ctx.i18n.tr("toolbar-share"),
                can_share.then_some(ToolbarMessage::Share.into()),
            ))
            .push(toolbar_button(
                ctx.i18n.tr("toolbar-save-to-library"),
                can_share.then_some(ToolbarMessage::SaveToLibrary.into()),
            ))
            .push(Space::new().width(Length::Fill))
            .push(toolbar_button(
                ctx.i18n.tr("toolbar-cancel"),
                Some(ToolbarMessage::Cancel.into()),
            )),
    )
}

fn bottom_toolbar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    toolbar(
        Row::new()
            .push(Space::new().width(Length::Fill))
            .push(toolbar_button(
                ctx.i18n.tr("toolbar-album"),
                Some(ToolbarMessage::PickFromAlbum.into()),
            ))
            .push(Space::new().width(Length::Fill))
            .push(toolbar_button(
                ctx.i18n.tr("toolbar-settings"),
                Some(ToolbarMessage::OpenSettings.into()),
            )),
    )
}

fn stage(state: &State) -> Element<'_, Message> {
    let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);

    if let Some(image) = state.image() {
        layers = layers.push(
            Image::new(image.handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill),
        );
    }

    if state.chrome().caption_fields {
        layers = layers.push(
            Column::new()
                .push(caption_field(state, CaptionSlot::Top))
                .push(Space::new().height(Length::Fill))
                .push(caption_field(state, CaptionSlot::Bottom))
                .padding(state.caption_style().margin)
                .width(Length::Fill)
                .height(Length::Fill),
        );
    }

    container(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::editor::stage)
        .into()
}

fn caption_field(state: &State, slot: CaptionSlot) -> Element<'_, Message> {
    let style = state.caption_style();
    let [r, g, b] = style.fill;

    text_input("", state.caption(slot).text())
        .on_input(move |value| Message::CaptionChanged(slot, value))
        .on_submit(Message::CaptionSubmitted(slot))
        .font(caption_font(&style.font_family))
        .size(style.font_size)
        .padding(CAPTION_FIELD_PADDING)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .style(styles::editor::caption_input(Color::from_rgb8(r, g, b)))
        .into()
}

/// Black-weight font for the first family of a CSS family list.
///
/// The outline stroke is only drawn in the exported bitmap.
fn caption_font(families: &str) -> Font {
    let first = families
        .split(',')
        .map(|name| name.trim().trim_matches(|c| c == '\'' || c == '"').trim())
        .find(|name| !name.is_empty())
        .unwrap_or("sans-serif");

    let family = match first.to_ascii_lowercase().as_str() {
        "sans-serif" => font::Family::SansSerif,
        "serif" => font::Family::Serif,
        "monospace" => font::Family::Monospace,
        "cursive" => font::Family::Cursive,
        "fantasy" => font::Family::Fantasy,
        _ => font::Family::Name(intern_family(first)),
    };

    Font {
        family,
        weight: font::Weight::Black,
        ..Font::DEFAULT
    }
}

/// `Font` wants a `&'static str`; each configured name is leaked once.
fn intern_family(name: &str) -> &'static str {
    static NAMES: OnceLock<Mutex<HashSet<&'static str>>> = OnceLock::new();

    let mut names = NAMES
        .get_or_init(Mutex::default)
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    if let Some(&interned) = names.get(name) {
        return interned;
    }
    let interned: &'static str = Box::leak(name.to_owned().into_boxed_str());
    names.insert(interned);
    interned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_font_uses_first_named_family() {
        let font = caption_font("Impact, 'Helvetica Neue', sans-serif");
        assert_eq!(font.family, font::Family::Name("Impact"));
        assert_eq!(font.weight, font::Weight::Black);
    }

    #[test]
    fn caption_font_strips_quotes() {
        let font = caption_font("\"Comic Sans MS\", cursive");
        assert_eq!(font.family, font::Family::Name("Comic Sans MS"));
    }

    #[test]
    fn caption_font_maps_generic_families() {
        assert_eq!(caption_font("serif").family, font::Family::Serif);
        assert_eq!(caption_font(" Sans-Serif ").family, font::Family::SansSerif);
        assert_eq!(caption_font("").family, font::Family::SansSerif);
    }

    #[test]
    fn family_names_are_interned_once() {
        let a = intern_family("Anton");
        let b = intern_family("Anton");
        assert!(std::ptr::eq(a, b));
    }
}
