// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Stateless helper utilities.

pub mod coerce;
pub mod collections;
pub mod currency;
pub mod generators;
pub mod greeting;
pub mod predicates;
pub mod text;

/// JavaScript-style truthiness for Rust and JSON values.
pub use coerce::Truthy;
/// Locale-aware en-US currency rendering.
pub use currency::format_currency;
/// Make a URL-friendly slug from free text.
pub use text::slugify;
