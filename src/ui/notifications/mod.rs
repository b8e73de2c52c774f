// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for user feedback.
//!
//! Toasts report the outcome of asynchronous work (image loading, sharing,
//! saving settings) without blocking the editor.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification, Toast};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-share-success"));
//!
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```
//!
//! - Success/info toasts last ~3s, warnings ~5s, errors until dismissed
//! - At most 3 toasts are visible; others wait in a queue
//! - Toasts stack in the bottom-right corner

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
