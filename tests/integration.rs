// SPDX-License-Identifier: MPL-2.0
use iced::Size;
use iced_meme::config::{self, Config, KeyboardConfig};
use iced_meme::domain::meme::{CaptionSlot, KeyboardHeight};
use iced_meme::i18n::fluent::I18n;
use iced_meme::media::export::{self, ExportFormat};
use iced_meme::media::{load_image, ImageData};
use iced_meme::ui::meme_editor::{Event, Message, State, ToolbarMessage};
use image_rs::{DynamicImage, Rgba, RgbaImage};
use tempfile::tempdir;

const WINDOW: Size = Size {
    width: 480.0,
    height: 600.0,
};

fn photo() -> ImageData {
    ImageData::from_dynamic(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        120,
        80,
        Rgba([90, 160, 60, 255]),
    )))
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("en-US".to_string());
    config::save_to_path(&config, &path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    config.general.language = Some("fr".to_string());
    config::save_to_path(&config, &path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("toolbar-cancel"), "Annuler");
}

#[test]
fn test_config_directory_override_round_trip() {
    let dir = tempdir().expect("temp dir");
    let config = Config {
        keyboard: KeyboardConfig {
            on_screen: Some(true),
            height: Some(180.0),
        },
        ..Config::default()
    };

    config::save_with_override(&config, Some(dir.path().to_path_buf())).expect("save config");
    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert!(loaded.keyboard.on_screen());
    assert_eq!(loaded.keyboard.height(), KeyboardHeight::new(180.0));
}

#[test]
fn test_pick_caption_share_and_export() {
    let dir = tempdir().expect("temp dir");
    let source = dir.path().join("photo.png");
    RgbaImage::from_pixel(64, 64, Rgba([10, 20, 30, 255]))
        .save(&source)
        .expect("write photo");

    let mut editor = State::new(&Config::default(), WINDOW);
    editor.image_picked(load_image(&source).expect("photo loads"));
    editor.update(Message::CaptionChanged(CaptionSlot::Top, "TOPwhen the build".into()));
    editor.update(Message::CaptionChanged(
        CaptionSlot::Bottom,
        "BOTTOMpasses first try".into(),
    ));

    let Event::ShareRequested(meme) = editor.update(ToolbarMessage::Share.into()) else {
        panic!("share should produce a meme");
    };
    assert_eq!(meme.top_text(), "when the build");
    assert_eq!(meme.bottom_text(), "passes first try");

    let frame = editor.frame_size().expect("stage has an area");
    assert_eq!(meme.meme_image().dimensions(), (frame.width(), frame.height()));

    let saved = export::save_to_library(meme.meme_image(), dir.path(), ExportFormat::Png)
        .expect("save to library");
    let reloaded = image_rs::open(&saved).expect("saved meme decodes");
    assert_eq!(reloaded.width(), frame.width());
    assert_eq!(reloaded.height(), frame.height());
}

#[test]
fn test_cancel_after_editing_restores_defaults() {
    let mut editor = State::new(&Config::default(), WINDOW);
    editor.image_picked(photo());
    editor.update(Message::CaptionChanged(CaptionSlot::Bottom, "BOTTOMhi".into()));
    editor.update(Message::KeyboardWillShow(KeyboardHeight::new(220.0)));
    assert_eq!(editor.vertical_offset(), -220.0);

    editor.update(ToolbarMessage::Cancel.into());
    assert!(editor.image().is_none());
    assert_eq!(editor.caption(CaptionSlot::Top).text(), "TOP");
    assert_eq!(editor.caption(CaptionSlot::Bottom).text(), "BOTTOM");
    assert_eq!(editor.vertical_offset(), 0.0);
    assert!(!editor.can_share());
}

#[test]
fn test_configured_caption_defaults_are_used() {
    let mut config = Config::default();
    config.caption.top_default = Some("ONE DOES NOT SIMPLY".into());
    config.caption.bottom_default = Some("WALK INTO MORDOR".into());

    let mut editor = State::new(&config, WINDOW);
    assert_eq!(editor.caption(CaptionSlot::Top).text(), "ONE DOES NOT SIMPLY");

    editor.image_picked(photo());
    editor.update(Message::CaptionChanged(
        CaptionSlot::Top,
        "ONE DOES NOT SIMPLYx".into(),
    ));
    assert_eq!(editor.caption(CaptionSlot::Top).text(), "x");
}
