// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! Settings changes are applied to the in-memory [`Config`] first and then
//! written to `settings.toml`. A failed write leaves the running app on the
//! new values and tells the user with a warning toast.

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

/// Writes the configuration to disk, reporting failures as a toast.
pub fn persist_config(
    config: &Config,
    config_dir: Option<PathBuf>,
    notifications: &mut notifications::Manager,
) {
    if let Err(err) = config::save_with_override(config, config_dir) {
        tracing::warn!(%err, "failed to save config");
        notifications.push(
            Notification::warning("notification-config-save-error")
                .with_arg("details", err.to_string()),
        );
    }
}

/// Switches the active locale and records it in the configuration.
pub fn apply_language_change(i18n: &mut I18n, config: &mut Config, locale: LanguageIdentifier) {
    i18n.set_locale(locale.clone());
    config.general.language = Some(locale.to_string());
}
