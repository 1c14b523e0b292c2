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

//! # Form Ledger
//!
//! This library models tax-return forms as sparse, line-numbered ledgers of
//! monetary values. A form maps a line number (a bare integer like `9` or a
//! suffixed identifier like `"25d"`) to a fixed-point amount. Reads of
//! unset lines yield zero, and iteration walks the numbered lines in natural
//! order, synthesizing zeros for the gaps.
//!
//! ## Core Components
//!
//! - [`Form`]: ordered, sparse, default-zero line mapping
//! - [`LineNumber`]: normalized line identifier with natural ordering
//! - [`LineValue`]: tagged line value (amount, flag, or raw text)
//! - [`Calculate`]: hook for deriving output lines before display
//! - [`f1040`]: federal 1040 calculators for tax years 2020 through 2022
//!
//! ## Example
//!
//! ```
//! use form_ledger_rs::Form;
//! use rust_decimal_macros::dec;
//!
//! let mut form = Form::new("Schedule B Interest and Ordinary Dividends").unwrap();
//! form.set(1, dec!(1200.00));
//! form.set("2b", "34.50");
//!
//! assert_eq!(form.amount(1), dec!(1200.00));
//! assert_eq!(form.amount("2b"), dec!(34.50));
//! assert_eq!(form.last_line(), 2);
//!
//! // Unset lines read as zero.
//! assert_eq!(form.amount(4), dec!(0));
//! ```
//!
//! ## Calculation
//!
//! Concrete forms own a [`Form`] and implement [`Calculate`] to populate
//! derived lines from source lines; [`Calculate::print`] runs the
//! calculation and renders the result. The [`f1040`] modules do exactly
//! this for the federal return of each supported year.

pub mod f1040;

mod base;
mod error;
mod form;
mod value;

pub use base::{LineNumber, MAX_LINE_NUMBER};
pub use error::FormError;
pub use form::{Calculate, Form};
pub use value::LineValue;
