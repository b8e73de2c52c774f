// SPDX-License-Identifier: MPL-2.0
//! Media handling: loading the photo, compositing the meme, exporting it.
//!
//! - [`image`] decodes the picked file into an [`ImageData`] ready for display
//! - [`compose`] rasterizes the stage (photo + captions) into a [`Meme`]
//! - [`export`] encodes the meme bitmap and writes it to disk

pub mod compose;
pub mod export;
pub mod image;

pub use compose::{CaptionStyle, Meme};
pub use export::ExportFormat;
pub use image::{load_image, ImageData};

/// Supported file extensions for the image picker and file drops.
pub mod extensions {
    /// Image file extensions accepted as meme backgrounds.
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico", "svg",
    ];

    /// Save dialog filters for the share surface (name, extensions).
    pub const MEME_SAVE_FILTERS: &[(&str, &[&str])] = &[
        ("PNG", &["png"]),
        ("JPEG", &["jpg", "jpeg"]),
        ("WebP", &["webp"]),
    ];
}

/// Returns whether the path has an extension accepted by the image picker.
#[must_use]
pub fn is_supported_image(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            extensions::IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}
