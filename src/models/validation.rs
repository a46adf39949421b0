// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Form-field validators sharing one result shape.
//!
//! Every validator walks the same three states:
//! - empty (absent or blank after trimming) -> required-field error,
//! - present but failing the field's format -> format error,
//! - valid -> `is_error == false` and no message.
//!
//! A caller-supplied message replaces the default for both error states.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Default message for absent or blank input.
pub const EMPTY_FIELD_MESSAGE: &str = "This field must not be empty.";
/// Reported when a validator cannot evaluate its format rule.
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong.";
pub const INVALID_TEXT_MESSAGE: &str = "Invalid input";
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email";
pub const INVALID_PASSWORD_MESSAGE: &str = "Password must contain at least 8 characters, including at least one uppercase letter, one lowercase letter, one number, and one symbol.";
pub const INVALID_MOBILE_MESSAGE: &str = "Invalid mobile number";

/// Symbols accepted by [`validate_password`].
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*()_+[]{};':\"\\|,.<>/?";

const PASSWORD_MIN_LEN: usize = 8;
const PASSWORD_MAX_LEN: usize = 40;

static TEXT_RE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z ]+$"));
static EMAIL_RE: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| {
    Regex::new(
        r#"^(?:(?:[^<>()\[\]\\.,;:\s@"]+(?:\.[^<>()\[\]\\.,;:\s@"]+)*)|(?:".+"))@(?:(?:\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(?:(?:[a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
});
static MOBILE_RE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$"));

/// Uniform outcome of every validator, serialized as `{ "isError", "errorMessage" }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_error: bool,
    pub error_message: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_error: false,
            error_message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            is_error: true,
            error_message: Some(message.into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.is_error
    }
}

/// Accept letters and spaces only.
pub fn validate_text(value: Option<&str>, error_message: Option<&str>) -> ValidationResult {
    validate_with_pattern(value, error_message, &TEXT_RE, INVALID_TEXT_MESSAGE)
}

/// Accept a conventional `local@domain` address.
///
/// The local part may be dot-separated atoms or a quoted string; the domain is
/// either a bracketed dotted-quad literal or a dotted hostname ending in a TLD
/// of at least two letters.
pub fn validate_email(email: Option<&str>, error_message: Option<&str>) -> ValidationResult {
    validate_with_pattern(email, error_message, &EMAIL_RE, INVALID_EMAIL_MESSAGE)
}

/// Require 8 to 40 characters with at least one digit, one lowercase letter,
/// one uppercase letter, and one symbol from [`PASSWORD_SYMBOLS`].
pub fn validate_password(password: Option<&str>, error_message: Option<&str>) -> ValidationResult {
    let Some(password) = non_blank(password) else {
        return ValidationResult::error(error_message.unwrap_or(EMPTY_FIELD_MESSAGE));
    };

    if is_strong_password(password) {
        ValidationResult::valid()
    } else {
        ValidationResult::error(error_message.unwrap_or(INVALID_PASSWORD_MESSAGE))
    }
}

/// Accept exactly ten ASCII digits.
pub fn validate_mobile_number(value: Option<&str>, error_message: Option<&str>) -> ValidationResult {
    validate_with_pattern(value, error_message, &MOBILE_RE, INVALID_MOBILE_MESSAGE)
}

fn validate_with_pattern(
    value: Option<&str>,
    error_message: Option<&str>,
    pattern: &Result<Regex, regex::Error>,
    invalid_message: &str,
) -> ValidationResult {
    let Some(value) = non_blank(value) else {
        return ValidationResult::error(error_message.unwrap_or(EMPTY_FIELD_MESSAGE));
    };

    match pattern {
        Ok(re) if re.is_match(value) => ValidationResult::valid(),
        Ok(_) => ValidationResult::error(error_message.unwrap_or(invalid_message)),
        Err(err) => {
            tracing::error!(error = %err, "validation pattern failed to compile");
            ValidationResult::error(SOMETHING_WENT_WRONG)
        }
    }
}

/// Trimmed input, or `None` when absent or blank.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn is_strong_password(password: &str) -> bool {
    // Length is counted in UTF-16 units and line terminators never match.
    let units = password.encode_utf16().count();
    if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&units) {
        return false;
    }
    if password
        .chars()
        .any(|c| matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}'))
    {
        return false;
    }

    password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}
