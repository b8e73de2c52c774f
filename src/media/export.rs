// SPDX-License-Identifier: MPL-2.0
//! Meme export: encoding the composited bitmap and writing it to disk.
//!
//! Used by both share paths: the Save As dialog and the direct save into the
//! photo library directory.

use crate::error::{Error, Result};
use chrono::{DateTime, Local};
use image_rs::{DynamicImage, ImageFormat, RgbaImage};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name appended to the platform pictures directory.
const LIBRARY_DIR_NAME: &str = "IcedMeme";

/// Supported export formats for memes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// PNG format (lossless, best quality).
    #[default]
    Png,
    /// JPEG format (lossy, smaller file size).
    Jpeg,
    /// WebP format (lossless).
    WebP,
}

impl ExportFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
            ExportFormat::WebP => "webp",
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            ExportFormat::Png => ImageFormat::Png,
            ExportFormat::Jpeg => ImageFormat::Jpeg,
            ExportFormat::WebP => ImageFormat::WebP,
        }
    }

    /// Detects format from file extension.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<ExportFormat> {
        match ext.to_lowercase().as_str() {
            "png" => Some(ExportFormat::Png),
            "jpg" | "jpeg" => Some(ExportFormat::Jpeg),
            "webp" => Some(ExportFormat::WebP),
            _ => None,
        }
    }

    /// Detects format from file path extension.
    pub fn from_path(path: &Path) -> Option<ExportFormat> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

/// Writes the meme bitmap to `path`.
///
/// The format is taken from the path extension, falling back to `fallback`
/// when the extension is missing or unknown.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created, the image
/// cannot be encoded or the file cannot be written.
pub fn save_meme(image: &RgbaImage, path: &Path, fallback: ExportFormat) -> Result<()> {
    let format = ExportFormat::from_path(path).unwrap_or(fallback);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    // JPEG has no alpha channel.
    let result = match format {
        ExportFormat::Jpeg => DynamicImage::ImageRgba8(image.clone())
            .to_rgb8()
            .save_with_format(path, format.image_format()),
        ExportFormat::Png | ExportFormat::WebP => image.save_with_format(path, format.image_format()),
    };
    result.map_err(Error::from)?;

    tracing::info!(path = %path.display(), ?format, "meme exported");
    Ok(())
}

/// Saves the meme into the photo library directory under a fresh,
/// timestamped file name and returns the written path.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be
/// written.
pub fn save_to_library(image: &RgbaImage, library: &Path, format: ExportFormat) -> Result<PathBuf> {
    fs::create_dir_all(library)?;
    let path = unique_path(library, &default_file_name(format, Local::now()));
    save_meme(image, &path, format)?;
    Ok(path)
}

/// Default file name offered by the share surface.
#[must_use]
pub fn default_file_name(format: ExportFormat, now: DateTime<Local>) -> String {
    format!("meme-{}.{}", now.format("%Y-%m-%d-%H%M%S"), format.extension())
}

/// Resolves the photo library directory.
///
/// An explicit configured directory wins; otherwise the platform pictures
/// directory (or the home directory) with an `IcedMeme` subfolder is used.
#[must_use]
pub fn library_dir(configured: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = configured {
        return Some(dir.to_path_buf());
    }
    dirs::picture_dir()
        .or_else(dirs::home_dir)
        .map(|base| base.join(LIBRARY_DIR_NAME))
}

/// Returns `dir/file_name`, or `dir/stem-N.ext` if that file already exists.
fn unique_path(dir: &Path, file_name: &str) -> PathBuf {
    let candidate = dir.join(file_name);
    if !candidate.exists() {
        return candidate;
    }
    let (stem, ext) = match file_name.rsplit_once('.') {
        Some((stem, ext)) => (stem, Some(ext)),
        None => (file_name, None),
    };
    (1u32..)
        .map(|n| match ext {
            Some(ext) => dir.join(format!("{stem}-{n}.{ext}")),
            None => dir.join(format!("{stem}-{n}")),
        })
        .find(|path| !path.exists())
        .unwrap_or(candidate)
}
