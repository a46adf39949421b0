// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Stateless helpers for text, collections, validation, generators, currency
//! formatting, and JSON persistence over an injected key-value store.
//!
//! Every helper is independent; the only shared state is whatever
//! [`storage::KeyValueStore`] the caller hands to [`storage::LocalStorage`].

pub mod error;
pub mod models;
pub mod storage;
pub mod utils;

pub use error::{Error, Result};
pub use models::currency::{CurrencyCode, CurrencyFormat};
pub use models::validation::{
    ValidationResult, validate_email, validate_mobile_number, validate_password, validate_text,
};
pub use storage::{JsonFileStore, KeyValueStore, LocalStorage, MemoryStore};
pub use utils::collections::{
    SortDirection, compare_arrays, compare_json_arrays, group_by, remove_duplicates_from_array,
    sort_array_by_direction, sort_array_by_mode,
};
pub use utils::currency::format_currency;
pub use utils::generators::{Otp, generate_otp_with_length, generate_random_password};
pub use utils::greeting::get_greeting;
pub use utils::predicates::{
    check_not_null_and_not_empty, handle_nan, is_falsy, is_object_values_empty, is_truthy,
};
pub use utils::text::{
    capitalize_first_letter, get_initials, get_truncate_description, reverse_string, slugify,
    title_case,
};
