//! Fixed-point decimal type with 2 decimal places, truncated toward zero.
//!
//! Every monetary value that enters or leaves aggregation goes through
//! [`Decimal2::try_new`], so a reported figure can never overstate funds.
//! Values too large to carry 2 fractional digits are rejected, never rounded.

use crate::error::ParseError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A decimal that always carries exactly 2 fractional digits.
///
/// Extra digits are truncated toward zero, never rounded:
///
/// ```
/// use std::str::FromStr;
/// use account_summary::Decimal2;
///
/// assert_eq!(Decimal2::from_str("3.339").unwrap().to_string(), "3.33");
/// assert_eq!(Decimal2::from_str("-3.336").unwrap().to_string(), "-3.33");
/// assert_eq!(Decimal2::from_str("10").unwrap().to_string(), "10.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Decimal2(Decimal);

impl Decimal2 {
    /// The number of fractional digits kept.
    pub const SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Decimal2(Decimal::ZERO);

    /// Quantizes a `Decimal` to 2 fractional digits, truncating toward zero.
    ///
    /// Returns `None` when the magnitude leaves no room for 2 fractional digits.
    pub fn try_new(value: Decimal) -> Option<Self> {
        let mut quantized = value.round_dp_with_strategy(Self::SCALE, RoundingStrategy::ToZero);
        quantized.rescale(Self::SCALE);
        if quantized.scale() != Self::SCALE {
            return None;
        }
        if quantized.is_zero() {
            quantized.set_sign_positive(true);
        }
        Some(Decimal2(quantized))
    }

    /// Returns the underlying decimal.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns `true` if the value is strictly below zero.
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative()
    }

    /// Adds two values. `None` on overflow.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).and_then(Decimal2::try_new)
    }

    /// Divides by a count and quantizes the quotient. `None` when `count == 0`.
    pub fn checked_div_count(&self, count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        self.0
            .checked_div(Decimal::from(count as u64))
            .and_then(Decimal2::try_new)
    }
}

impl FromStr for Decimal2 {
    type Err = ParseError;

    /// Parses a plain decimal literal: optional sign, digits, optional fraction.
    ///
    /// Fraction digits beyond the second are dropped before conversion, which
    /// truncates exactly however long the literal is. A value that does not
    /// fit once truncated is [`ParseError::AmountOutOfRange`].
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidAmount(s.to_string());
        let out_of_range = || ParseError::AmountOutOfRange(s.to_string());

        let trimmed = s.trim();
        let unsigned = trimmed
            .strip_prefix('-')
            .or_else(|| trimmed.strip_prefix('+'))
            .unwrap_or(trimmed);

        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (unsigned, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (int_part.is_empty() && frac_part.is_empty())
            || !all_digits(int_part)
            || !all_digits(frac_part)
        {
            return Err(invalid());
        }

        let keep = frac_part.len().min(Self::SCALE as usize);
        let literal = format!(
            "{}{}.{}",
            if trimmed.starts_with('-') { "-" } else { "" },
            if int_part.is_empty() { "0" } else { int_part },
            if keep == 0 { "0" } else { &frac_part[..keep] },
        );

        let decimal = Decimal::from_str_exact(&literal).map_err(|_| out_of_range())?;
        Decimal2::try_new(decimal).ok_or_else(out_of_range)
    }
}

impl fmt::Display for Decimal2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Serialize for Decimal2 {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Decimal2 {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Decimal2::from_str(&s).map_err(serde::de::Error::custom)
    }
}
