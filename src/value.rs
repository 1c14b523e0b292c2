// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Line values and their coercion rules.
//!
//! Writes to a form coerce leniently: booleans are stored verbatim, numbers
//! become fixed-point amounts, and text that does not read as a decimal is
//! kept unchanged rather than rejected. Reads of unset lines yield
//! [`LineValue::ZERO`].

use rust_decimal::Decimal;
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Value stored on a single form line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineValue {
    /// Fixed-point decimal amount.
    Amount(Decimal),
    /// Boolean constant, never coerced to a number.
    Flag(bool),
    /// Text that did not parse as a decimal, kept verbatim.
    Raw(String),
}

impl LineValue {
    /// The zero amount returned for unset lines.
    pub const ZERO: LineValue = LineValue::Amount(Decimal::ZERO);

    /// Returns the amount of this value, or zero for flags and raw text.
    pub fn amount(&self) -> Decimal {
        match self {
            LineValue::Amount(amount) => *amount,
            _ => Decimal::ZERO,
        }
    }

    /// Returns this value with amounts rounded to `dp` decimal places.
    /// Flags and raw text pass through unchanged.
    pub fn rounded(&self, dp: u32) -> LineValue {
        match self {
            LineValue::Amount(amount) => LineValue::Amount(amount.round_dp(dp)),
            value => value.clone(),
        }
    }
}

impl From<bool> for LineValue {
    fn from(flag: bool) -> Self {
        LineValue::Flag(flag)
    }
}

impl From<Decimal> for LineValue {
    fn from(amount: Decimal) -> Self {
        LineValue::Amount(amount)
    }
}

impl From<i32> for LineValue {
    fn from(value: i32) -> Self {
        LineValue::Amount(Decimal::from(value))
    }
}

impl From<i64> for LineValue {
    fn from(value: i64) -> Self {
        LineValue::Amount(Decimal::from(value))
    }
}

impl From<u32> for LineValue {
    fn from(value: u32) -> Self {
        LineValue::Amount(Decimal::from(value))
    }
}

impl From<f64> for LineValue {
    fn from(value: f64) -> Self {
        Decimal::try_from(value)
            .map(LineValue::Amount)
            .unwrap_or_else(|_| LineValue::Raw(value.to_string()))
    }
}

impl From<&str> for LineValue {
    fn from(text: &str) -> Self {
        let trimmed = text.trim();
        Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map(LineValue::Amount)
            .unwrap_or_else(|_| LineValue::Raw(text.to_owned()))
    }
}

impl From<String> for LineValue {
    fn from(text: String) -> Self {
        match LineValue::from(text.as_str()) {
            LineValue::Raw(_) => LineValue::Raw(text),
            value => value,
        }
    }
}

impl fmt::Display for LineValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineValue::Amount(amount) => write!(f, "{}", amount),
            LineValue::Flag(flag) => write!(f, "{}", flag),
            LineValue::Raw(text) => write!(f, "{}", text),
        }
    }
}

impl Serialize for LineValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            LineValue::Amount(amount) => Serialize::serialize(amount, serializer),
            LineValue::Flag(flag) => serializer.serialize_bool(*flag),
            LineValue::Raw(text) => serializer.serialize_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn numbers_coerce_to_amounts() {
        assert_eq!(LineValue::from(13), LineValue::Amount(dec!(13)));
        assert_eq!(LineValue::from(13.0), LineValue::Amount(dec!(13)));
        assert_eq!(LineValue::from(dec!(13)), LineValue::Amount(dec!(13)));
        assert_eq!(LineValue::from("13"), LineValue::Amount(dec!(13)));
        assert_eq!(LineValue::from(" 13.50 "), LineValue::Amount(dec!(13.50)));
        assert_eq!(LineValue::from("1e3"), LineValue::Amount(dec!(1000)));
    }

    #[test]
    fn flags_are_never_coerced() {
        assert_eq!(LineValue::from(true), LineValue::Flag(true));
        assert_eq!(LineValue::from(false), LineValue::Flag(false));
        assert_ne!(LineValue::from(true), LineValue::Amount(dec!(1)));
    }

    #[test]
    fn unparsable_text_is_kept_verbatim() {
        assert_eq!(LineValue::from("baz"), LineValue::Raw("baz".to_owned()));
        assert_eq!(LineValue::from(""), LineValue::Raw(String::new()));
        assert_eq!(
            LineValue::from("12.34.56".to_owned()),
            LineValue::Raw("12.34.56".to_owned())
        );
    }

    #[test]
    fn unrepresentable_floats_fall_back_to_raw() {
        assert_eq!(
            LineValue::from(f64::NAN),
            LineValue::Raw("NaN".to_owned())
        );
    }

    #[test]
    fn amount_reads_zero_for_non_amounts() {
        assert_eq!(LineValue::Amount(dec!(13)).amount(), dec!(13));
        assert_eq!(LineValue::Flag(true).amount(), Decimal::ZERO);
        assert_eq!(LineValue::Raw("baz".to_owned()).amount(), Decimal::ZERO);
    }

    #[test]
    fn rounding_only_touches_amounts() {
        assert_eq!(
            LineValue::Amount(dec!(13.456)).rounded(2),
            LineValue::Amount(dec!(13.46))
        );
        assert_eq!(LineValue::Flag(true).rounded(2), LineValue::Flag(true));
    }
}
