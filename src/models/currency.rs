// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Supported currency codes and formatting options.

use std::fmt;
use std::str::FromStr;

/// Closed set of ISO 4217 codes the formatter knows how to render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CurrencyCode {
    #[default]
    Usd,
    Eur,
    Gbp,
    Inr,
    Jpy,
    Aud,
    Cad,
    Chf,
    Cny,
}

impl CurrencyCode {
    pub const ALL: [CurrencyCode; 9] = [
        Self::Usd,
        Self::Eur,
        Self::Gbp,
        Self::Inr,
        Self::Jpy,
        Self::Aud,
        Self::Cad,
        Self::Chf,
        Self::Cny,
    ];

    /// Three-letter code as written in ISO 4217.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Inr => "INR",
            Self::Jpy => "JPY",
            Self::Aud => "AUD",
            Self::Cad => "CAD",
            Self::Chf => "CHF",
            Self::Cny => "CNY",
        }
    }

    /// Symbol used by the en-US locale, including any trailing spacing.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Inr => "₹",
            Self::Jpy => "¥",
            Self::Aud => "A$",
            Self::Cad => "CA$",
            Self::Chf => "CHF\u{a0}",
            Self::Cny => "CN¥",
        }
    }

    /// Parse a code, falling back to USD with a warning when it is not supported.
    pub fn parse_or_default(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|_| {
            tracing::warn!(code = raw, "invalid currency code, defaulting to USD");
            Self::Usd
        })
    }
}

impl FromStr for CurrencyCode {
    type Err = UnknownCurrencyCode;

    /// Codes match exactly; `"usd"` is not `USD`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == raw)
            .ok_or_else(|| UnknownCurrencyCode(raw.to_string()))
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A currency code outside [`CurrencyCode::ALL`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown currency code {0:?}")]
pub struct UnknownCurrencyCode(pub String);

/// Options for [`crate::utils::currency::format_currency`].
///
/// `currency_code` is kept as raw text so unknown codes can fall back to USD
/// at format time instead of failing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub currency_code: String,
    pub minimum_fraction_digits: usize,
    pub maximum_fraction_digits: usize,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            currency_code: CurrencyCode::Usd.as_str().to_string(),
            minimum_fraction_digits: 2,
            maximum_fraction_digits: 2,
        }
    }
}

impl CurrencyFormat {
    pub fn with_code(code: impl Into<String>) -> Self {
        Self {
            currency_code: code.into(),
            ..Self::default()
        }
    }

    pub fn fraction_digits(mut self, minimum: usize, maximum: usize) -> Self {
        self.minimum_fraction_digits = minimum;
        self.maximum_fraction_digits = maximum;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Every code round-trips through its string form.
    #[test]
    fn codes_parse_from_their_iso_form() {
        for code in CurrencyCode::ALL {
            assert_eq!(code.as_str().parse::<CurrencyCode>(), Ok(code));
        }
    }

    // Unknown or miscased codes fall back to USD.
    #[test]
    fn unknown_codes_fall_back_to_usd() {
        assert_eq!(CurrencyCode::parse_or_default("XYZ"), CurrencyCode::Usd);
        assert_eq!(CurrencyCode::parse_or_default("eur"), CurrencyCode::Usd);
        assert_eq!(CurrencyCode::parse_or_default("EUR"), CurrencyCode::Eur);
    }

    // Defaults mirror the common two-decimal USD rendering.
    #[test]
    fn default_format_is_usd_two_decimals() {
        let format = CurrencyFormat::default();
        assert_eq!(format.currency_code, "USD");
        assert_eq!(format.minimum_fraction_digits, 2);
        assert_eq!(format.maximum_fraction_digits, 2);
        assert_eq!(
            CurrencyFormat::with_code("JPY").fraction_digits(0, 0),
            CurrencyFormat {
                currency_code: "JPY".into(),
                minimum_fraction_digits: 0,
                maximum_fraction_digits: 0,
            }
        );
    }
}
