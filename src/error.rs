// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Crate-wide error type.

/// Failures surfaced by the fallible helpers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid sort direction {0:?}, expected \"asc\" or \"desc\"")]
    InvalidSortDirection(String),

    #[error("numeric OTP length must be between 1 and {max}, got {length}")]
    InvalidOtpLength { length: usize, max: usize },

    #[error("invalid fraction digits: minimum {minimum}, maximum {maximum} (maximum allowed {limit})")]
    InvalidFractionDigits {
        minimum: usize,
        maximum: usize,
        limit: usize,
    },

    #[error("cannot group a non-array value")]
    NotAnArray,

    #[error("cannot read property {key:?} of null")]
    NullElement { key: String },

    #[error("failed to serialize value for key {key:?}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse stored value for key {key:?}")]
    Deserialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("key-value store failure: {0:#}")]
    Store(#[from] anyhow::Error),
}

/// Result alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
