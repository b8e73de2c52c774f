// SPDX-License-Identifier: MPL-2.0
//! Meme compositing.
//!
//! The stage is rasterized in two passes: the photo is fitted into the frame
//! on a black background with the `image` crate, then the captions are drawn
//! on top as an SVG text layer rendered by resvg. Captions use a filled
//! glyph with an outline stroke, the classic meme look.

use crate::domain::meme::FrameSize;
use crate::error::{Error, Result};
use image_rs::imageops::{self, FilterType};
use image_rs::{DynamicImage, GenericImageView, Rgba, RgbaImage};
use resvg::usvg;
use std::fmt::Write as _;
use std::sync::{Arc, OnceLock};

/// Visual style of the burned-in captions.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionStyle {
    /// CSS font family list, e.g. `Impact, 'Helvetica Neue', sans-serif`.
    pub font_family: String,
    /// Font size in logical pixels.
    pub font_size: f32,
    pub fill: [u8; 3],
    pub stroke: [u8; 3],
    /// Outline width as a percentage of the font size.
    pub stroke_width_percent: f32,
    /// Distance between the frame edge and the caption.
    pub margin: f32,
}

impl Default for CaptionStyle {
    fn default() -> Self {
        Self {
            font_family: crate::config::DEFAULT_CAPTION_FONT_FAMILY.to_string(),
            font_size: crate::config::DEFAULT_CAPTION_FONT_SIZE,
            fill: [255, 255, 255],
            stroke: [0, 0, 0],
            stroke_width_percent: crate::config::DEFAULT_CAPTION_STROKE_WIDTH_PERCENT,
            margin: crate::config::DEFAULT_CAPTION_MARGIN,
        }
    }
}

impl CaptionStyle {
    /// Outline width in pixels.
    #[must_use]
    pub fn stroke_width(&self) -> f32 {
        self.font_size * self.stroke_width_percent / 100.0
    }

    /// Baseline of the top caption, measured from the top of the frame.
    #[must_use]
    pub fn top_baseline(&self) -> f32 {
        self.margin + self.font_size
    }

    /// Baseline of the bottom caption, leaving room for descenders.
    #[must_use]
    pub fn bottom_baseline(&self, frame: FrameSize) -> f32 {
        frame.height() as f32 - self.margin - self.font_size * 0.25
    }
}

/// A photo with its captions burned in.
///
/// Only [`Meme::compose`] builds one; the editor never keeps it around.
#[derive(Debug, Clone)]
pub struct Meme {
    top_text: String,
    bottom_text: String,
    original_image: Arc<DynamicImage>,
    meme_image: RgbaImage,
}

impl Meme {
    /// Rasterizes the stage into a new meme.
    ///
    /// The resulting bitmap has exactly the dimensions of `frame`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the caption layer cannot be rendered.
    pub fn compose(
        original_image: Arc<DynamicImage>,
        top_text: &str,
        bottom_text: &str,
        frame: FrameSize,
        style: &CaptionStyle,
    ) -> Result<Self> {
        let meme_image = render_meme(&original_image, top_text, bottom_text, frame, style)?;
        tracing::info!(
            width = meme_image.width(),
            height = meme_image.height(),
            "meme composed"
        );
        Ok(Self {
            top_text: top_text.to_string(),
            bottom_text: bottom_text.to_string(),
            original_image,
            meme_image,
        })
    }

    #[must_use]
    pub fn top_text(&self) -> &str {
        &self.top_text
    }

    #[must_use]
    pub fn bottom_text(&self) -> &str {
        &self.bottom_text
    }

    #[must_use]
    pub fn original_image(&self) -> &Arc<DynamicImage> {
        &self.original_image
    }

    #[must_use]
    pub fn meme_image(&self) -> &RgbaImage {
        &self.meme_image
    }
}

/// Renders `image` fitted into `frame` with both captions drawn on top.
///
/// # Errors
///
/// Returns [`Error::Render`] if the caption layer cannot be parsed or the
/// frame is too large for a pixmap.
pub fn render_meme(
    image: &DynamicImage,
    top_text: &str,
    bottom_text: &str,
    frame: FrameSize,
    style: &CaptionStyle,
) -> Result<RgbaImage> {
    let mut canvas = RgbaImage::from_pixel(frame.width(), frame.height(), Rgba([0, 0, 0, 255]));

    let (image_width, image_height) = image.dimensions();
    let (x, y, fitted_width, fitted_height) = frame.fit(image_width, image_height);
    let fitted = image
        .resize_exact(fitted_width, fitted_height, FilterType::Triangle)
        .to_rgba8();
    imageops::overlay(&mut canvas, &fitted, i64::from(x), i64::from(y));

    if top_text.trim().is_empty() && bottom_text.trim().is_empty() {
        return Ok(canvas);
    }

    let svg = caption_layer_svg(top_text, bottom_text, frame, style);
    let mut options = usvg::Options::default();
    options.fontdb = font_database();
    let tree = usvg::Tree::from_str(&svg, &options).map_err(|e| Error::Render(e.to_string()))?;

    let size = tiny_skia::IntSize::from_wh(frame.width(), frame.height())
        .ok_or_else(|| Error::Render("invalid frame size".into()))?;
    // The canvas is fully opaque, so straight and premultiplied RGBA coincide.
    let mut pixmap = tiny_skia::Pixmap::from_vec(canvas.into_raw(), size)
        .ok_or_else(|| Error::Render("failed to allocate caption pixmap".into()))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    RgbaImage::from_raw(frame.width(), frame.height(), pixmap.take())
        .ok_or_else(|| Error::Render("caption pixmap size mismatch".into()))
}

/// Builds the SVG document holding the caption layer for `frame`.
#[must_use]
pub fn caption_layer_svg(
    top_text: &str,
    bottom_text: &str,
    frame: FrameSize,
    style: &CaptionStyle,
) -> String {
    let width = frame.width();
    let height = frame.height();
    let center_x = width as f32 / 2.0;

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    let _ = write!(
        svg,
        r#"<g font-family="{family}" font-size="{size}" font-weight="900" text-anchor="middle" fill="{fill}" stroke="{stroke}" stroke-width="{stroke_width}" stroke-linejoin="round" paint-order="stroke" xml:space="preserve">"#,
        family = quick_xml::escape::escape(style.font_family.as_str()),
        size = style.font_size,
        fill = hex_color(style.fill),
        stroke = hex_color(style.stroke),
        stroke_width = style.stroke_width(),
    );
    for (text, baseline) in [
        (top_text, style.top_baseline()),
        (bottom_text, style.bottom_baseline(frame)),
    ] {
        if text.trim().is_empty() {
            continue;
        }
        let _ = write!(
            svg,
            r#"<text x="{center_x}" y="{baseline}">{}</text>"#,
            quick_xml::escape::escape(text)
        );
    }
    svg.push_str("</g></svg>");
    svg
}

/// Formats an RGB triple as `#rrggbb`.
#[must_use]
pub fn hex_color([r, g, b]: [u8; 3]) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// System fonts, loaded once on first use.
fn font_database() -> Arc<usvg::fontdb::Database> {
    static FONTS: OnceLock<Arc<usvg::fontdb::Database>> = OnceLock::new();
    FONTS
        .get_or_init(|| {
            let mut db = usvg::fontdb::Database::new();
            db.load_system_fonts();
            tracing::debug!(faces = db.len(), "system fonts loaded");
            Arc::new(db)
        })
        .clone()
}
