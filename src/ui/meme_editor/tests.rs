// SPDX-License-Identifier: MPL-2.0
use super::*;
use crate::config::{Config, KeyboardConfig};
use image_rs::{DynamicImage, Rgba, RgbaImage};
use iced::window;

const WINDOW: Size = Size {
    width: 400.0,
    height: 496.0,
};

fn editor() -> State {
    State::new(&Config::default(), WINDOW)
}

fn on_screen_editor(height: f32) -> State {
    let config = Config {
        keyboard: KeyboardConfig {
            on_screen: Some(true),
            height: Some(height),
        },
        ..Config::default()
    };
    State::new(&config, WINDOW)
}

fn photo(width: u32, height: u32) -> ImageData {
    ImageData::from_dynamic(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        width,
        height,
        Rgba([30, 120, 200, 255]),
    )))
}

fn editing() -> State {
    let mut state = editor();
    state.image_picked(photo(64, 48));
    state
}

fn raw(event: iced::Event) -> Message {
    Message::RawEvent {
        window: window::Id::unique(),
        event,
    }
}

fn click_at(state: &mut State, x: f32, y: f32) {
    state.update(raw(iced::Event::Mouse(mouse::Event::CursorMoved {
        position: Point::new(x, y),
    })));
    state.update(raw(iced::Event::Mouse(mouse::Event::ButtonPressed(
        mouse::Button::Left,
    ))));
}

#[test]
fn new_editor_has_no_image_and_default_captions() {
    let state = editor();
    assert!(state.image().is_none());
    assert!(!state.can_share());
    assert_eq!(state.caption(CaptionSlot::Top).text(), "TOP");
    assert_eq!(state.caption(CaptionSlot::Bottom).text(), "BOTTOM");
    assert_eq!(state.chrome(), Chrome::NO_IMAGE);
}

#[test]
fn picking_an_image_reveals_fields_and_top_toolbar() {
    let state = editing();
    let chrome = state.chrome();
    assert!(chrome.caption_fields);
    assert!(chrome.top_toolbar);
    assert!(chrome.bottom_toolbar);
    assert!(state.can_share());
}

#[test]
fn picking_another_image_keeps_captions() {
    let mut state = editing();
    state.update(Message::CaptionChanged(CaptionSlot::Top, "TOPcat".into()));
    state.image_picked(photo(10, 10));

    assert_eq!(state.caption(CaptionSlot::Top).text(), "cat");
    assert_eq!(state.image().map(|i| i.width), Some(10));
}

#[test]
fn captions_ignore_input_while_fields_hidden() {
    let mut state = editor();
    state.update(Message::CaptionChanged(CaptionSlot::Top, "TOPx".into()));
    assert_eq!(state.caption(CaptionSlot::Top).text(), "TOP");
    assert_eq!(state.focus(), None);
}

#[test]
fn caption_input_focuses_slot_and_submit_clears_it() {
    let mut state = editing();
    state.update(Message::CaptionChanged(CaptionSlot::Bottom, "BOTTOMx".into()));
    assert_eq!(state.focus(), Some(CaptionSlot::Bottom));
    assert_eq!(state.caption(CaptionSlot::Bottom).text(), "x");

    state.update(Message::CaptionSubmitted(CaptionSlot::Bottom));
    assert_eq!(state.focus(), None);
}

#[test]
fn compositing_matches_stage_frame_size() {
    let state = editing();
    let frame = state.frame_size().expect("stage has an area");
    let meme = state
        .generate_memed_image()
        .expect("compositing should succeed")
        .expect("an image is loaded");

    assert_eq!(
        meme.meme_image().dimensions(),
        (frame.width(), frame.height())
    );
    assert_eq!(meme.top_text(), "TOP");
    assert_eq!(meme.bottom_text(), "BOTTOM");
}

#[test]
fn compositing_shares_the_original_image() {
    let state = editing();
    let meme = state.generate_memed_image().unwrap().unwrap();
    let source = state.image().unwrap().source();
    assert!(Arc::ptr_eq(meme.original_image(), source));
}

#[test]
fn compositing_restores_chrome_visibility() {
    let state = editing();
    let before = state.chrome();
    state.generate_memed_image().unwrap();
    assert_eq!(state.chrome(), before);
}

#[test]
fn compositing_restores_chrome_on_error() {
    let mut state = editing();
    state.set_window_size(Size::new(400.0, 2.0 * sizing::TOOLBAR_HEIGHT));
    let before = state.chrome();

    let result = state.generate_memed_image();
    assert!(matches!(result, Err(Error::Render(_))));
    assert_eq!(state.chrome(), before);
}

#[test]
fn compositing_without_image_returns_none() {
    let state = editor();
    assert!(state.generate_memed_image().unwrap().is_none());
}

#[test]
fn share_emits_meme_only_with_image() {
    let mut state = editor();
    assert!(matches!(
        state.update(ToolbarMessage::Share.into()),
        Event::None
    ));

    state.image_picked(photo(8, 8));
    match state.update(ToolbarMessage::Share.into()) {
        Event::ShareRequested(meme) => {
            let frame = state.frame_size().unwrap();
            assert_eq!(meme.meme_image().width(), frame.width());
        }
        other => panic!("expected ShareRequested, got {other:?}"),
    }
}

#[test]
fn save_to_library_emits_meme() {
    let mut state = editing();
    assert!(matches!(
        state.update(ToolbarMessage::SaveToLibrary.into()),
        Event::SaveToLibraryRequested(_)
    ));
}

#[test]
fn toolbar_requests_picker_and_settings() {
    let mut state = editor();
    assert!(matches!(
        state.update(ToolbarMessage::PickFromAlbum.into()),
        Event::PickImageRequested
    ));
    assert!(matches!(
        state.update(ToolbarMessage::OpenSettings.into()),
        Event::OpenSettingsRequested
    ));
}

#[test]
fn cancel_restores_initial_state_from_any_state() {
    let mut state = editing();
    state.update(Message::CaptionChanged(CaptionSlot::Top, "TOPhello".into()));
    state.update(Message::CaptionChanged(CaptionSlot::Bottom, "BOTTOMworld".into()));
    state.update(Message::KeyboardWillShow(KeyboardHeight::new(250.0)));
    assert!(state.vertical_offset() < 0.0);

    state.update(ToolbarMessage::Cancel.into());

    assert!(state.image().is_none());
    assert!(state.caption(CaptionSlot::Top).is_pristine());
    assert_eq!(state.caption(CaptionSlot::Top).text(), "TOP");
    assert_eq!(state.caption(CaptionSlot::Bottom).text(), "BOTTOM");
    assert!(!state.chrome().caption_fields);
    assert!(!state.chrome().top_toolbar);
    assert_eq!(state.focus(), None);
    assert_eq!(state.vertical_offset(), 0.0);
}

#[test]
fn cancel_without_image_is_idempotent() {
    let mut state = editor();
    state.cancel();
    state.cancel();
    assert!(state.image().is_none());
    assert!(!state.chrome().top_toolbar);
}

#[test]
fn keyboard_show_with_bottom_focus_shifts_by_height() {
    let mut state = editing();
    state.update(Message::CaptionChanged(CaptionSlot::Bottom, "BOTTOMa".into()));
    state.update(Message::KeyboardWillShow(KeyboardHeight::new(216.0)));
    assert_eq!(state.vertical_offset(), -216.0);

    state.update(Message::KeyboardWillHide);
    assert_eq!(state.vertical_offset(), 0.0);
}

#[test]
fn keyboard_show_with_top_focus_does_not_shift() {
    let mut state = editing();
    state.update(Message::CaptionChanged(CaptionSlot::Top, "TOPa".into()));
    state.update(Message::KeyboardWillShow(KeyboardHeight::new(216.0)));
    assert_eq!(state.vertical_offset(), 0.0);
}

#[test]
fn input_method_events_drive_keyboard_avoidance() {
    let mut state = editing();
    state.update(Message::CaptionChanged(CaptionSlot::Bottom, "BOTTOMa".into()));

    state.update(raw(iced::Event::InputMethod(
        iced_core::input_method::Event::Opened,
    )));
    assert_eq!(
        state.vertical_offset(),
        -state.keyboard_settings().height.value()
    );

    state.update(raw(iced::Event::InputMethod(
        iced_core::input_method::Event::Closed,
    )));
    assert_eq!(state.vertical_offset(), 0.0);
}

#[test]
fn submitting_bottom_caption_drops_input_method_shift() {
    let mut state = editing();
    state.update(Message::CaptionChanged(CaptionSlot::Bottom, "BOTTOMa".into()));
    state.update(raw(iced::Event::InputMethod(
        iced_core::input_method::Event::Opened,
    )));
    assert!(state.vertical_offset() < 0.0);

    state.update(Message::CaptionSubmitted(CaptionSlot::Bottom));
    assert_eq!(state.focus(), None);
    assert_eq!(state.vertical_offset(), 0.0);
}

#[test]
fn submitting_unfocused_caption_keeps_shift() {
    let mut state = editing();
    state.update(Message::CaptionChanged(CaptionSlot::Bottom, "BOTTOMa".into()));
    state.update(Message::KeyboardWillShow(KeyboardHeight::new(120.0)));

    state.update(Message::CaptionSubmitted(CaptionSlot::Top));
    assert_eq!(state.focus(), Some(CaptionSlot::Bottom));
    assert_eq!(state.vertical_offset(), -120.0);
}

#[test]
fn host_keyboard_messages_share_the_on_screen_shift() {
    let mut state = on_screen_editor(300.0);
    state.image_picked(photo(8, 8));
    state.update(Message::CaptionChanged(CaptionSlot::Bottom, "BOTTOMa".into()));
    assert_eq!(state.vertical_offset(), -300.0);

    // A host keyboard report replaces the shift instead of stacking on it.
    state.update(Message::KeyboardWillShow(KeyboardHeight::new(180.0)));
    assert_eq!(state.vertical_offset(), -180.0);

    state.update(Message::KeyboardWillHide);
    assert_eq!(state.vertical_offset(), 0.0);
    assert_eq!(state.focus(), Some(CaptionSlot::Bottom));
}

#[test]
fn on_screen_keyboard_follows_focus() {
    let mut state = on_screen_editor(300.0);
    state.image_picked(photo(8, 8));

    state.update(Message::CaptionChanged(CaptionSlot::Top, "TOPa".into()));
    assert_eq!(state.vertical_offset(), 0.0);

    state.update(Message::CaptionChanged(CaptionSlot::Bottom, "BOTTOMa".into()));
    assert_eq!(state.vertical_offset(), -300.0);

    state.update(Message::CaptionSubmitted(CaptionSlot::Bottom));
    assert_eq!(state.vertical_offset(), 0.0);
}

#[test]
fn clicking_caption_bands_moves_focus() {
    let mut state = editing();
    let stage = state.stage_size();
    let stage_top = sizing::TOOLBAR_HEIGHT;

    click_at(&mut state, stage.width / 2.0, stage_top + 5.0);
    assert_eq!(state.focus(), Some(CaptionSlot::Top));

    click_at(&mut state, stage.width / 2.0, stage_top + stage.height - 5.0);
    assert_eq!(state.focus(), Some(CaptionSlot::Bottom));

    click_at(&mut state, stage.width / 2.0, stage_top + stage.height / 2.0);
    assert_eq!(state.focus(), None);
}

#[test]
fn clicking_toolbar_area_clears_focus() {
    let mut state = editing();
    state.update(Message::CaptionChanged(CaptionSlot::Top, "TOPa".into()));
    click_at(&mut state, 10.0, 5.0);
    assert_eq!(state.focus(), None);
}

#[test]
fn clicks_are_ignored_without_caption_fields() {
    let mut state = editor();
    click_at(&mut state, 10.0, sizing::TOOLBAR_HEIGHT + 5.0);
    assert_eq!(state.focus(), None);
}

#[test]
fn hit_test_accounts_for_keyboard_shift() {
    let mut state = editing();
    state.update(Message::CaptionChanged(CaptionSlot::Bottom, "BOTTOMa".into()));
    state.update(Message::KeyboardWillShow(KeyboardHeight::new(100.0)));

    let stage = state.stage_size();
    let bottom_band_window_y = sizing::TOOLBAR_HEIGHT + stage.height - 5.0 - 100.0;
    click_at(&mut state, stage.width / 2.0, bottom_band_window_y);
    assert_eq!(state.focus(), Some(CaptionSlot::Bottom));
}

#[test]
fn on_disappear_drops_focus_and_shift() {
    let mut state = editing();
    state.update(Message::CaptionChanged(CaptionSlot::Bottom, "BOTTOMa".into()));
    state.update(Message::KeyboardWillShow(KeyboardHeight::new(200.0)));

    state.on_disappear();
    assert_eq!(state.focus(), None);
    assert_eq!(state.vertical_offset(), 0.0);
    assert!(state.image().is_some());
}

#[test]
fn stage_excludes_both_toolbars() {
    let state = editor();
    assert_eq!(state.stage_size().width, WINDOW.width);
    assert_eq!(
        state.stage_size().height,
        WINDOW.height - 2.0 * sizing::TOOLBAR_HEIGHT
    );
}

#[test]
fn apply_config_updates_keyboard_settings() {
    let mut state = editing();
    let mut config = Config::default();
    config.keyboard.on_screen = Some(true);
    config.keyboard.height = Some(123.0);

    state.apply_config(&config);
    assert!(state.keyboard_settings().on_screen);
    assert_eq!(state.keyboard_settings().height.value(), 123.0);
    assert!(state.image().is_some());
}

#[test]
fn render_builds_for_every_chrome_state() {
    let i18n = crate::i18n::fluent::I18n::default();
    let mut state = editor();
    let _ = render(&state, ViewContext { i18n: &i18n });

    state.image_picked(photo(4, 4));
    let _ = render(&state, ViewContext { i18n: &i18n });
}
