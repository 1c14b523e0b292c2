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

//! Line identifiers and their natural ordering.

use crate::error::FormError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort prefix assigned to line numbers with no leading digits.
///
/// Orders purely textual identifiers after every numbered line and keeps
/// them out of length and gap-filling calculations.
pub const MAX_LINE_NUMBER: u32 = 1000;

/// Normalized identifier for a single line on a form.
///
/// A line number is either a bare integer (`9`) or a suffixed token
/// (`"25d"`). Integers normalize to their decimal text form, so `42` and
/// `"42"` address the same line.
///
/// Ordering is natural: the longest leading digit run sorts numerically,
/// ties break on the remaining suffix, and identifiers with no leading
/// digits sort after all numbered lines, among themselves by full text.
///
/// ```
/// use form_ledger_rs::LineNumber;
///
/// let mut lines: Vec<LineNumber> =
///     ["foo", "bar", "42a", "4", "42b"].map(LineNumber::from).to_vec();
/// lines.sort();
/// assert_eq!(lines, ["4", "42a", "42b", "bar", "foo"].map(LineNumber::from));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct LineNumber(String);

impl LineNumber {
    /// Returns the identifier as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits the identifier into its natural sort key: the leading digit
    /// run as an integer, or [`MAX_LINE_NUMBER`] when there is none, plus
    /// the remaining suffix.
    pub(crate) fn sort_key(&self) -> (u32, &str) {
        let digits = self.0.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return (MAX_LINE_NUMBER, self.0.as_str());
        }
        let (prefix, suffix) = self.0.split_at(digits);
        (prefix.parse().unwrap_or(u32::MAX), suffix)
    }

    /// The numeric prefix of this identifier when it counts as a numbered
    /// line, i.e. the prefix stays below [`MAX_LINE_NUMBER`].
    pub(crate) fn numeric_prefix(&self) -> Option<u32> {
        match self.sort_key() {
            (prefix, _) if prefix < MAX_LINE_NUMBER => Some(prefix),
            _ => None,
        }
    }
}

impl Ord for LineNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        // Full text breaks residual ties ("04" vs "4") so the order stays
        // total and consistent with equality.
        self.sort_key()
            .cmp(&other.sort_key())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for LineNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<u32> for LineNumber {
    fn from(line: u32) -> Self {
        LineNumber(line.to_string())
    }
}

impl From<i32> for LineNumber {
    fn from(line: i32) -> Self {
        LineNumber(line.to_string())
    }
}

impl From<&str> for LineNumber {
    /// Converts a literal identifier.
    ///
    /// # Panics
    ///
    /// Panics if `id` is empty. Parse untrusted text with [`FromStr`] or
    /// [`TryFrom<String>`] instead.
    fn from(id: &str) -> Self {
        assert!(!id.is_empty(), "line number cannot be an empty string");
        LineNumber(id.to_owned())
    }
}

impl From<&LineNumber> for LineNumber {
    fn from(line: &LineNumber) -> Self {
        line.clone()
    }
}

impl TryFrom<String> for LineNumber {
    type Error = FormError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        if id.is_empty() {
            return Err(FormError::EmptyLineNumber);
        }
        Ok(LineNumber(id))
    }
}

impl FromStr for LineNumber {
    type Err = FormError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        LineNumber::try_from(id.to_owned())
    }
}

impl From<LineNumber> for String {
    fn from(line: LineNumber) -> Self {
        line.0
    }
}

impl fmt::Display for LineNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
