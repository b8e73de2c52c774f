// SPDX-License-Identifier: MPL-2.0
//! Error types shared by image loading, compositing, export and configuration.
//!
//! Payloads are plain strings so that results can be cloned into Iced
//! messages and travel back from asynchronous tasks.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// File could not be read or written.
    #[error("I/O Error: {0}")]
    Io(String),

    /// File was read but is not a decodable image.
    #[error("Decode Error: {0}")]
    Decode(String),

    /// Composited meme could not be encoded to the requested format.
    #[error("Encode Error: {0}")]
    Encode(String),

    /// Caption layer could not be parsed or rasterized.
    #[error("Render Error: {0}")]
    Render(String),

    #[error("Config Error: {0}")]
    Config(String),
}

impl Error {
    /// Returns the i18n message key used when this error is shown as a toast.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "notification-error-io",
            Error::Decode(_) => "notification-error-decode",
            Error::Encode(_) => "notification-error-encode",
            Error::Render(_) => "notification-error-render",
            Error::Config(_) => "notification-config-save-error",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
