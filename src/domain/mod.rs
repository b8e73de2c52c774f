// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core meme-editing rules with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`meme`]: Caption slots and text ([`CaptionSlot`](meme::CaptionSlot),
//!   [`Caption`](meme::Caption)), stage geometry ([`FrameSize`](meme::FrameSize))
//!   and keyboard values ([`KeyboardHeight`](meme::KeyboardHeight))

pub mod meme;
