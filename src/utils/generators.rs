// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! One-time passcodes and random passwords.
//!
//! The plain functions draw from the thread-local RNG; the `*_with_rng`
//! variants take any [`rand::Rng`] so callers can seed them.

use std::fmt;

use rand::Rng;

use crate::error::{Error, Result};

/// Default length for [`generate_random_password`].
pub const DEFAULT_PASSWORD_LENGTH: usize = 8;
/// Longest numeric OTP that fits in a `u64`.
pub const MAX_NUMERIC_OTP_LENGTH: usize = 19;

const OTP_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SPECIAL: &[u8] = b"!@#$%^&*()-_=+";

/// A generated passcode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Otp {
    /// Integer with exactly the requested number of digits.
    Numeric(u64),
    AlphaNumeric(String),
}

impl fmt::Display for Otp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(value) => write!(f, "{value}"),
            Self::AlphaNumeric(code) => f.write_str(code),
        }
    }
}

/// Generate an OTP of `length` characters or digits.
///
/// # Errors
///
/// Numeric codes need `1..=19` digits; other lengths return [`Error::InvalidOtpLength`].
pub fn generate_otp_with_length(length: usize, is_alpha_numeric: bool) -> Result<Otp> {
    generate_otp_with_rng(&mut rand::thread_rng(), length, is_alpha_numeric)
}

pub fn generate_otp_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    is_alpha_numeric: bool,
) -> Result<Otp> {
    if is_alpha_numeric {
        let code = (0..length).map(|_| pick(rng, OTP_ALPHABET)).collect();
        return Ok(Otp::AlphaNumeric(code));
    }

    if !(1..=MAX_NUMERIC_OTP_LENGTH).contains(&length) {
        return Err(Error::InvalidOtpLength {
            length,
            max: MAX_NUMERIC_OTP_LENGTH,
        });
    }
    // No leading zero: the value lies in [10^(n-1), 10^n).
    let low = 10_u64.pow(length as u32 - 1);
    let high = low.saturating_mul(10);
    Ok(Otp::Numeric(rng.gen_range(low..high)))
}

/// Generate a password with at least one lowercase letter, uppercase letter, and digit.
///
/// The first three characters cover those classes in that order; the rest are
/// drawn uniformly from the concatenation of lowercase, uppercase, digits, and
/// `!@#$%^&*()-_=+`. Lengths below three still produce the three guaranteed
/// characters.
pub fn generate_random_password(length: usize) -> String {
    generate_random_password_with_rng(&mut rand::thread_rng(), length)
}

pub fn generate_random_password_with_rng<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    let pool: Vec<u8> = [LOWERCASE, UPPERCASE, DIGITS, SPECIAL].concat();

    let mut password = String::with_capacity(length.max(3));
    password.push(pick(rng, LOWERCASE));
    password.push(pick(rng, UPPERCASE));
    password.push(pick(rng, DIGITS));
    for _ in password.len()..length {
        password.push(pick(rng, &pool));
    }
    password
}

fn pick<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8]) -> char {
    char::from(alphabet[rng.gen_range(0..alphabet.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // Numeric codes always have exactly the requested number of digits.
    #[test]
    fn numeric_otp_has_exact_digit_count() {
        for _ in 0..500 {
            let Otp::Numeric(value) = generate_otp_with_length(6, false).unwrap() else {
                panic!("expected a numeric OTP");
            };
            assert!((100_000..1_000_000).contains(&value), "{value}");
            assert_eq!(value.to_string().len(), 6);
        }
    }

    // The extremes of the numeric range stay representable.
    #[test]
    fn numeric_otp_length_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let one = generate_otp_with_rng(&mut rng, 1, false).unwrap();
        assert!(matches!(one, Otp::Numeric(1..=9)));
        let widest = generate_otp_with_rng(&mut rng, 19, false).unwrap();
        assert_eq!(widest.to_string().len(), 19);
        assert!(matches!(
            generate_otp_with_rng(&mut rng, 0, false),
            Err(Error::InvalidOtpLength { length: 0, .. })
        ));
        assert!(generate_otp_with_rng(&mut rng, 20, false).is_err());
    }

    // Alphanumeric codes draw from the 62-character alphabet.
    #[test]
    fn alphanumeric_otp_uses_alphabet() {
        let mut rng = StdRng::seed_from_u64(42);
        let code = generate_otp_with_rng(&mut rng, 32, true).unwrap().to_string();
        assert_eq!(code.len(), 32);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(generate_otp_with_length(0, true).unwrap().to_string(), "");
    }

    // Seeded generators are reproducible.
    #[test]
    fn seeded_generation_is_deterministic() {
        let a = generate_random_password_with_rng(&mut StdRng::seed_from_u64(1), 16);
        let b = generate_random_password_with_rng(&mut StdRng::seed_from_u64(1), 16);
        assert_eq!(a, b);
    }

    // Every password starts with lowercase, uppercase, digit, and has the right length.
    #[test]
    fn password_guarantees_character_classes() {
        for _ in 0..200 {
            let password = generate_random_password(DEFAULT_PASSWORD_LENGTH);
            let chars: Vec<char> = password.chars().collect();
            assert_eq!(chars.len(), DEFAULT_PASSWORD_LENGTH);
            assert!(chars[0].is_ascii_lowercase());
            assert!(chars[1].is_ascii_uppercase());
            assert!(chars[2].is_ascii_digit());
            assert!(
                chars[3..]
                    .iter()
                    .all(|c| c.is_ascii_alphanumeric() || SPECIAL.contains(&(*c as u8)))
            );
        }
    }

    // Short requests still carry the three guaranteed characters.
    #[test]
    fn short_password_keeps_guaranteed_prefix() {
        assert_eq!(generate_random_password(0).len(), 3);
        assert_eq!(generate_random_password(3).len(), 3);
    }
}
