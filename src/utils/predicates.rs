// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Truthiness and emptiness checks for form data.

use serde_json::{Map, Value};

use crate::utils::coerce::{Truthy, to_js_string};

/// Default replacement used by [`handle_nan`].
pub const DEFAULT_NAN_FALLBACK: f64 = 0.0;

pub fn is_falsy<T: Truthy + ?Sized>(value: &T) -> bool {
    !value.is_truthy()
}

pub fn is_truthy<T: Truthy + ?Sized>(value: &T) -> bool {
    value.is_truthy()
}

/// Replace NaN with `fallback`; any other value passes through.
pub fn handle_nan(value: f64, fallback: f64) -> f64 {
    if value.is_nan() { fallback } else { value }
}

/// `true` unless the value is absent, `null`, `""`, or renders as empty text (e.g. `[]`).
pub fn check_not_null_and_not_empty(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(other) => !to_js_string(other).is_empty(),
    }
}

/// `true` when at least one field of `object` holds a falsy value.
pub fn is_object_values_empty(object: &Map<String, Value>) -> bool {
    object.values().any(|value| !value.is_truthy())
}
