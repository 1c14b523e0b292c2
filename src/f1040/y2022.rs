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

//! Form 1040 U.S. Individual Income Tax Return 2022, with the 2023
//! estimated tax worksheet derived from it.

use crate::error::FormError;
use crate::form::{Calculate, Form};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const TITLE: &str = "Form 1040 U.S. Individual Income Tax Return 2022.";

/// Standard deduction for a single filer, 2022.
const STANDARD_DEDUCTION: i64 = 12_950;

/// Wage lines aggregated into line 1z.
const WAGE_LINES: [&str; 8] = ["1a", "1b", "1c", "1d", "1e", "1f", "1g", "1h"];

/// Federal income tax return for 2022.
pub struct Federal {
    form: Form,
}

impl Federal {
    /// Creates a 2022 return with the standard deduction pre-entered.
    ///
    /// # Errors
    ///
    /// Propagates form construction failure.
    pub fn new() -> Result<Self, FormError> {
        let mut form = Form::new(TITLE)?;
        form.set(12, STANDARD_DEDUCTION);
        Ok(Federal { form })
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

        // 1z: wages, lines 1a through 1h.
        let wages: Decimal = WAGE_LINES.iter().map(|line| form.amount(*line)).sum();
        form.set("1z", wages);

        // 9: total income, lines 1z + 2b + 3b + 4b + 5b + 6b + 7 + 8.
        let total_income = wages
            + form.amount("2b")
            + form.amount("3b")
            + form.amount("4b")
            + form.amount("5b")
            + form.amount("6b")
            + form.amount(7)
            + form.amount(8);
        form.set(9, total_income);

        // 11: adjusted gross income, line 9 minus line 10.
        form.set(11, total_income - form.amount(10));

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

        // 32: other payments and refundable credits, lines 27 + 28 + 29
        // + 31.
        let other_payments =
            form.amount(27) + form.amount(28) + form.amount(29) + form.amount(31);
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

/// 2023 Estimated Tax Worksheet.
///
/// Built from an already-calculated 2022 [`Federal`] return: line 7 seeds
/// from the federal credits (line 21), line 12b from the federal total tax
/// (line 24), and the quarterly payment nets out the federal overpayment
/// applied to 2023 (line 36).
pub struct Estimated {
    form: Form,
    /// Federal line 36, the overpayment applied to 2023 estimates.
    applied_overpayment: Decimal,
}

impl Estimated {
    /// Creates the worksheet from a calculated federal return.
    ///
    /// # Errors
    ///
    /// Propagates form construction failure.
    pub fn new(federal: &Federal) -> Result<Self, FormError> {
        let mut form = Form::new("2023 Estimated Tax Worksheet")?;
        // Standard deduction for 2023.
        form.set("2a", 13_850);
        form.set(7, federal.form().amount(21));
        form.set("12b", federal.form().amount(24));
        Ok(Estimated {
            form,
            applied_overpayment: federal.form().amount(36),
        })
    }

    /// The underlying form.
    pub fn form(&self) -> &Form {
        &self.form
    }
}

impl Calculate for Estimated {
    fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    fn calculate(&mut self) {
        let form = &mut self.form;

        // 2c: deductions, lines 2a + 2b.
        let deductions = form.amount("2a") + form.amount("2b");
        form.set("2c", deductions);
        // 3: expected taxable income.
        form.set(3, form.amount(1) - deductions);

        // 6: expected taxes, lines 4 + 5.
        form.set(6, form.amount(4) + form.amount(5));

        // 8: taxes less credits, floored at zero.
        let after_credits = (form.amount(6) - form.amount(7)).max(Decimal::ZERO);
        form.set(8, after_credits);

        // 11a: lines 8 + 9 + 10.
        form.set("11a", after_credits + form.amount(9) + form.amount(10));

        // 11c: total estimated tax, floored at zero.
        let estimated_tax = (form.amount("11a") - form.amount("11b")).max(Decimal::ZERO);
        form.set("11c", estimated_tax);

        // 12a: 90% of the estimated tax.
        form.set("12a", estimated_tax * dec!(0.90));
        // 12c: required annual payment, the smaller of 12a and 12b.
        let required = form.amount("12a").min(form.amount("12b"));
        form.set("12c", required);

        // 14a: required payment after withholding.
        form.set("14a", required - form.amount(13));
        // 14b: estimated tax after withholding.
        form.set("14b", estimated_tax - form.amount(13));

        // 15: quarterly installment, net of the overpayment applied from
        // the 2022 return.
        let quarterly = form.amount("14a") / dec!(4) - self.applied_overpayment;
        form.set(15, quarterly);
    }
}
