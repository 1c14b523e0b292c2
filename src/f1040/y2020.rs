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

//! Form 1040 U.S. Individual Income Tax Return 2020.

use crate::error::FormError;
use crate::form::{Calculate, Form};
use rust_decimal::Decimal;

const TITLE: &str = "Form 1040 U.S. Individual Income Tax Return 2020.";

/// Standard deduction for a single filer, 2020.
const STANDARD_DEDUCTION: i64 = 12_400;

/// Federal income tax return for 2020.
pub struct Federal {
    form: Form,
}

impl Federal {
    /// Creates an empty 2020 return.
    ///
    /// # Errors
    ///
    /// Propagates form construction failure.
    pub fn new() -> Result<Self, FormError> {
        Ok(Federal {
            form: Form::new(TITLE)?,
        })
    }

    /// The underlying form.
    pub fn form(&self) -> &Form {
        &self.form
    }
}

impl Calculate for Federal {
    fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    fn calculate(&mut self) {
        let form = &mut self.form;

        // 9: total income, lines 1 + 2b + 3b + 4b + 5b + 6b + 7 + 8.
        let total_income = form.amount(1)
            + form.amount("2b")
            + form.amount("3b")
            + form.amount("4b")
            + form.amount("5b")
            + form.amount("6b")
            + form.amount(7)
            + form.amount(8);
        form.set(9, total_income);

        // 10c: total adjustments to income.
        let adjustments = form.amount("10a") + form.amount("10b");
        form.set("10c", adjustments);
        // 11: adjusted gross income.
        form.set(11, total_income - adjustments);

        // 12: standard deduction.
        form.set(12, STANDARD_DEDUCTION);

        // 14: deductions, lines 12 + 13.
        let deductions = form.amount(12) + form.amount(13);
        form.set(14, deductions);

        // 15: taxable income, floored at zero.
        let taxable_income = (form.amount(11) - deductions).max(Decimal::ZERO);
        form.set(15, taxable_income);

        // 18: tax plus additional taxes, lines 16 + 17.
        form.set(18, form.amount(16) + form.amount(17));

        // 21: credits, lines 19 + 20.
        form.set(21, form.amount(19) + form.amount(20));

        // 22: tax after credits, floored at zero.
        let after_credits = (form.amount(18) - form.amount(21)).max(Decimal::ZERO);
        form.set(22, after_credits);

        // 24: total tax, lines 22 + 23.
        let total_tax = after_credits + form.amount(23);
        form.set(24, total_tax);

        // 25d: withholding, lines 25a through 25c.
        let withheld = form.amount("25a") + form.amount("25b") + form.amount("25c");
        form.set("25d", withheld);

        // 32: other payments and refundable credits, lines 27 through 31.
        let other_payments = form.amount(27)
            + form.amount(28)
            + form.amount(29)
            + form.amount(30)
            + form.amount(31);
        form.set(32, other_payments);

        // 33: total payments, lines 25d + 26 + 32.
        let total_payments = withheld + form.amount(26) + other_payments;
        form.set(33, total_payments);

        // 34: amount overpaid, only when payments exceed the tax.
        if total_payments > total_tax {
            form.set(34, total_payments - total_tax);
        }

        // 37: amount owed.
        form.set(37, total_tax - total_payments);
    }
}
