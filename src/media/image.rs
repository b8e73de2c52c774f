// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding from various formats (PNG, JPEG, GIF, SVG, etc.).

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::{DynamicImage, GenericImageView, ImageError, RgbaImage};
use resvg::usvg;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// A decoded photo ready to be shown on the stage and composited.
///
/// The source pixels are shared: the editor session, the display handle and
/// any [`Meme`](super::Meme) built from it all point at the same image.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    source: Arc<DynamicImage>,
}

impl ImageData {
    /// Wraps a decoded image, building the display handle from its RGBA pixels.
    #[must_use]
    pub fn from_dynamic(image: DynamicImage) -> Self {
        let (width, height) = image.dimensions();
        let handle = image::Handle::from_rgba(width, height, image.to_rgba8().into_raw());
        Self {
            handle,
            width,
            height,
            source: Arc::new(image),
        }
    }

    /// Returns the shared source image.
    #[must_use]
    pub fn source(&self) -> &Arc<DynamicImage> {
        &self.source
    }
}

/// Load an image from the given path and return its data.
///
/// Supports common raster formats (PNG, JPEG, GIF, etc.) as well as SVG.
/// SVG files are rasterized at their intrinsic size using resvg.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read ([`Error::Io`])
/// - The image format is invalid or unsupported ([`Error::Decode`])
/// - For SVG files: parsing fails or dimensions are zero ([`Error::Decode`])
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

    let image = if extension.eq_ignore_ascii_case("svg") {
        let svg_data = fs::read(path)?;
        rasterize_svg(&svg_data)?
    } else {
        let img_bytes = fs::read(path)?;
        image_rs::load_from_memory(&img_bytes)?
    };

    tracing::info!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "image loaded"
    );
    Ok(ImageData::from_dynamic(image))
}

fn rasterize_svg(svg_data: &[u8]) -> Result<DynamicImage> {
    let tree = usvg::Tree::from_data(svg_data, &usvg::Options::default())
        .map_err(|e| Error::Decode(e.to_string()))?;

    let pixmap_size = tree.size().to_int_size();
    let width = pixmap_size.width();
    let height = pixmap_size.height();
    if width == 0 || height == 0 {
        return Err(Error::Decode("SVG has empty dimensions".into()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Decode("Failed to allocate SVG pixmap".into()))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let color = pixel.demultiply();
        rgba.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
    }
    RgbaImage::from_raw(width, height, rgba)
        .map(DynamicImage::ImageRgba8)
        .ok_or_else(|| Error::Decode("SVG pixel buffer size mismatch".into()))
}

impl From<ImageError> for Error {
    fn from(err: ImageError) -> Self {
        match err {
            ImageError::IoError(io) => Error::Io(io.to_string()),
            ImageError::Encoding(e) => Error::Encode(e.to_string()),
            other => Error::Decode(other.to_string()),
        }
    }
}
