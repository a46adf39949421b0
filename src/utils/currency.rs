// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! en-US currency rendering.

use crate::error::{Error, Result};
use crate::models::currency::{CurrencyCode, CurrencyFormat};

/// Upper bound accepted for `maximum_fraction_digits`.
pub const MAX_FRACTION_DIGITS: usize = 20;

/// Render `amount` the way the en-US locale formats currency, e.g. `$1,234.50`.
///
/// - Zero and NaN produce `Ok(None)`.
/// - Unknown codes fall back to USD with a warning.
/// - Rounding is half away from zero on the shortest decimal form of `amount`,
///   so `1.005` rounds to `1.01`.
/// - Trailing zeros are trimmed down to `minimum_fraction_digits`.
///
/// # Errors
///
/// Returns [`Error::InvalidFractionDigits`] when the minimum exceeds the
/// maximum or the maximum exceeds [`MAX_FRACTION_DIGITS`].
pub fn format_currency(amount: f64, format: &CurrencyFormat) -> Result<Option<String>> {
    let minimum = format.minimum_fraction_digits;
    let maximum = format.maximum_fraction_digits;
    if minimum > maximum || maximum > MAX_FRACTION_DIGITS {
        return Err(Error::InvalidFractionDigits {
            minimum,
            maximum,
            limit: MAX_FRACTION_DIGITS,
        });
    }

    if amount == 0.0 || amount.is_nan() {
        return Ok(None);
    }

    let code = CurrencyCode::parse_or_default(&format.currency_code);
    let sign = if amount < 0.0 { "-" } else { "" };

    if amount.is_infinite() {
        return Ok(Some(format!("{sign}{}∞", code.symbol())));
    }

    let (integer, mut fraction) = round_half_up(amount.abs(), maximum);
    while fraction.len() > minimum && fraction.ends_with('0') {
        fraction.pop();
    }
    while fraction.len() < minimum {
        fraction.push('0');
    }

    let mut out = format!("{sign}{}{}", code.symbol(), group_thousands(&integer));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(&fraction);
    }
    Ok(Some(out))
}

/// Split a non-negative finite value into integer and fraction digits,
/// rounding half up to at most `max_fraction` digits.
fn round_half_up(value: f64, max_fraction: usize) -> (String, String) {
    // `Display` for f64 prints the shortest round-trip form without exponent.
    let repr = value.to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
    if frac_part.len() <= max_fraction {
        return (int_part.to_string(), frac_part.to_string());
    }

    let round_up = frac_part.as_bytes()[max_fraction] >= b'5';
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part[..max_fraction].bytes())
        .collect();

    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - max_fraction;
    let integer = String::from_utf8_lossy(&digits[..split]).into_owned();
    let fraction = String::from_utf8_lossy(&digits[split..]).into_owned();
    (integer, fraction)
}

fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut out = String::with_capacity(len + len / 3);
    for (idx, ch) in integer.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
