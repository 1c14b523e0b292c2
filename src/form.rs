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

//! The form container.
//!
//! A [`Form`] indexes monetary values by line number. It is deliberately not
//! a general-purpose map: its length is the highest numbered line with a
//! value set, and iteration walks every numbered line up to that length,
//! synthesizing zeros for the gaps, so a reader can display line 5 as zero
//! even if nothing ever wrote it.
//!
//! # Example
//!
//! ```
//! use form_ledger_rs::Form;
//! use rust_decimal_macros::dec;
//!
//! let mut form = Form::new("Schedule B").unwrap();
//! form.set(3, dec!(250.00));
//! assert_eq!(form.last_line(), 3);
//!
//! // Lines 1 and 2 are implicit zeros.
//! let lines: Vec<String> = form.lines().iter().map(ToString::to_string).collect();
//! assert_eq!(lines, ["1", "2", "3"]);
//! ```

use crate::base::LineNumber;
use crate::error::FormError;
use crate::value::LineValue;
use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::io::{self, Write};

/// Width of the rule printed between the form name and its lines.
const RULE_WIDTH: usize = 79;

/// A sparse, line-numbered ledger of monetary values.
///
/// Keys are [`LineNumber`]s in natural order; values are [`LineValue`]s
/// with default-zero reads and lenient write coercion. The backing store is
/// exclusively owned by the form.
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    /// Display name of the form.
    name: String,
    /// Backing store, ordered by the natural sort key.
    entries: BTreeMap<LineNumber, LineValue>,
}

impl Form {
    /// Decimal places amounts are rounded to when the form is serialized.
    pub const DECIMAL_PLACES: u32 = 2;

    /// Creates an empty form named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::EmptyName`] if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, FormError> {
        let name = name.into();
        if name.is_empty() {
            return Err(FormError::EmptyName);
        }
        Ok(Form {
            name,
            entries: BTreeMap::new(),
        })
    }

    /// Returns the name of the form.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value on `line`, or [`LineValue::ZERO`] when unset.
    pub fn get(&self, line: impl Into<LineNumber>) -> LineValue {
        self.entries
            .get(&line.into())
            .cloned()
            .unwrap_or(LineValue::ZERO)
    }

    /// Returns the amount on `line`, or zero when the line is unset or
    /// holds a non-amount value.
    pub fn amount(&self, line: impl Into<LineNumber>) -> Decimal {
        self.get(line).amount()
    }

    /// Sets the value on `line`, overwriting any prior value.
    ///
    /// Values coerce per [`LineValue`]: booleans stay booleans, numbers
    /// become fixed-point amounts, and text that does not parse as a
    /// decimal is stored verbatim rather than rejected.
    pub fn set(&mut self, line: impl Into<LineNumber>, value: impl Into<LineValue>) {
        self.entries.insert(line.into(), value.into());
    }

    /// Removes the value on `line`. Removing an unset line is a no-op.
    pub fn remove(&mut self, line: impl Into<LineNumber>) {
        self.entries.remove(&line.into());
    }

    /// Returns the largest numbered line with a value set, or 0.
    ///
    /// This is how many numbered lines the form has, not the entry count.
    /// Purely textual identifiers contribute nothing.
    pub fn last_line(&self) -> u32 {
        self.entries
            .keys()
            .filter_map(LineNumber::numeric_prefix)
            .max()
            .unwrap_or(0)
    }

    /// Returns every line the form has, in natural ascending order.
    ///
    /// The result combines the explicitly set lines with every integer up
    /// to [`last_line`](Form::last_line) whose number is not already
    /// covered by a set line. It is a fresh snapshot on every call; later
    /// mutation does not affect an already-returned sequence.
    pub fn lines(&self) -> Vec<LineNumber> {
        let covered: BTreeSet<u32> = self
            .entries
            .keys()
            .filter_map(LineNumber::numeric_prefix)
            .collect();

        let mut lines: Vec<LineNumber> = self.entries.keys().cloned().collect();
        lines.extend(
            (1..=self.last_line())
                .filter(|number| !covered.contains(number))
                .map(LineNumber::from),
        );
        lines.sort_unstable();
        lines
    }

    /// Writes the form name, a rule, and one `line: value` row per line in
    /// iteration order, right-justified to the widest line identifier.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by `out`.
    pub fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        let lines = self.lines();
        let width = lines
            .iter()
            .map(|line| line.as_str().len())
            .max()
            .unwrap_or(0);

        writeln!(out, "{}", self.name)?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
        for line in &lines {
            writeln!(out, "{:>width$}: {}", line, self.get(line), width = width)?;
        }
        Ok(())
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl Serialize for Form {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Amounts round to a fixed precision at the boundary; implicit
        // zero lines are materialized so consumers see the full iteration.
        let lines: BTreeMap<LineNumber, LineValue> = self
            .lines()
            .into_iter()
            .map(|line| {
                let value = self.get(&line).rounded(Form::DECIMAL_PLACES);
                (line, value)
            })
            .collect();

        let mut state = serializer.serialize_struct("Form", 2)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("lines", &lines)?;
        state.end()
    }
}

/// Calculation hook for forms that derive output lines from source lines.
///
/// Concrete forms override [`calculate`](Calculate::calculate) to populate
/// derived lines immediately before display; the base [`Form`] derives
/// nothing. The trait is dyn-compatible so callers can pick a form at
/// runtime.
pub trait Calculate {
    /// The underlying form holding this calculator's lines.
    fn form_mut(&mut self) -> &mut Form;

    /// Updates the form with calculations. Does nothing by default.
    fn calculate(&mut self) {}

    /// Calculates, then renders the form to `out`.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by `out`.
    fn print(&mut self, out: &mut dyn Write) -> io::Result<()> {
        self.calculate();
        self.form_mut().render(out)
    }
}

impl Calculate for Form {
    fn form_mut(&mut self) -> &mut Form {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn name_must_be_non_empty() {
        assert_eq!(Form::new(""), Err(FormError::EmptyName));

        let form = Form::new("foobar").unwrap();
        assert_eq!(form.name(), "foobar");
        assert_eq!(form.to_string(), "foobar");
        assert_eq!(form.last_line(), 0);
    }

    #[test]
    fn unset_lines_read_zero() {
        let form = Form::new("foobar").unwrap();
        assert_eq!(form.get(42), LineValue::ZERO);
        assert_eq!(form.get("25d"), LineValue::ZERO);
        assert_eq!(form.amount("foobar"), Decimal::ZERO);
    }

    #[test]
    fn set_get_remove_roundtrip() {
        let mut form = Form::new("foobar").unwrap();

        form.set(42, "baz");
        assert_eq!(form.get(42), LineValue::Raw("baz".to_owned()));
        assert_eq!(form.last_line(), 42);

        form.remove(42);
        assert_eq!(form.get(42), LineValue::ZERO);
        assert_eq!(form.last_line(), 0);

        form.set(42, 0);
        assert_eq!(form.get(42), LineValue::Amount(Decimal::ZERO));
        assert_eq!(form.last_line(), 42);

        form.set(42, 13);
        assert_eq!(form.get(42), LineValue::Amount(dec!(13)));
        form.set(42, "13");
        assert_eq!(form.get(42), LineValue::Amount(dec!(13)));
        form.set(42, dec!(13));
        assert_eq!(form.get(42), LineValue::Amount(dec!(13)));
    }

    #[test]
    fn integer_and_text_forms_address_the_same_line() {
        let mut form = Form::new("foobar").unwrap();
        form.set("42", 13);
        assert_eq!(form.get(42), LineValue::Amount(dec!(13)));
        form.set(42, 14);
        assert_eq!(form.get("42"), LineValue::Amount(dec!(14)));
    }

    #[test]
    fn removing_an_unset_line_is_a_no_op() {
        let mut form = Form::new("foobar").unwrap();
        form.set(7, 1);
        form.remove(42);
        form.remove("foo");
        assert_eq!(form.get(7), LineValue::Amount(dec!(1)));
        assert_eq!(form.last_line(), 7);
    }

    #[test]
    fn last_line_ignores_textual_identifiers() {
        let mut form = Form::new("foobar").unwrap();
        form.set(42, 13);
        assert_eq!(form.last_line(), 42);

        form.set("foobar", false);
        assert_eq!(form.last_line(), 42);

        form.remove(42);
        assert_eq!(form.last_line(), 0);
    }

    #[test]
    fn iteration_fills_gaps_with_numbered_lines() {
        let mut form = Form::new("foobar").unwrap();
        form.set(13, true);
        form.set(42, 13);

        let expected: Vec<LineNumber> = (1..=42).map(LineNumber::from).collect();
        assert_eq!(form.lines(), expected);

        form.set("foobar", false);
        let mut with_text = expected.clone();
        with_text.push(LineNumber::from("foobar"));
        assert_eq!(form.lines(), with_text);
    }

    #[test]
    fn suffixed_line_covers_its_number() {
        let mut form = Form::new("foobar").unwrap();
        form.set("3a", 5);

        // No bare "3" is synthesized alongside "3a".
        let lines: Vec<String> = form.lines().iter().map(ToString::to_string).collect();
        assert_eq!(lines, ["1", "2", "3a"]);
        assert_eq!(form.last_line(), 3);
    }

    #[test]
    fn lines_is_a_snapshot() {
        let mut form = Form::new("foobar").unwrap();
        form.set(2, 1);
        let before = form.lines();
        form.set(4, 1);
        assert_eq!(before.len(), 2);
        assert_eq!(form.lines().len(), 4);
    }

    #[test]
    fn render_right_justifies_lines() {
        let mut form = Form::new("foobar").unwrap();
        form.set(2, 13);
        form.set("2b", true);

        let mut out = Vec::new();
        form.render(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let mut expected = format!("foobar\n{}\n", "-".repeat(79));
        expected.push_str(" 1: 0\n 2: 13\n2b: true\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn render_of_an_empty_form_is_header_only() {
        let form = Form::new("foobar").unwrap();
        let mut out = Vec::new();
        form.render(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, format!("foobar\n{}\n", "-".repeat(79)));
    }

    #[test]
    fn base_form_calculate_derives_nothing() {
        let mut form = Form::new("foobar").unwrap();
        form.set(3, 1);

        let mut out = Vec::new();
        form.print(&mut out).unwrap();

        assert_eq!(form.lines().len(), 3);
        assert_eq!(form.get(3), LineValue::Amount(dec!(1)));
    }
}
