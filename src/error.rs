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

//! Error types for form validation.

use thiserror::Error;

/// Form validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Form name is empty
    #[error("form name must be a non-empty string")]
    EmptyName,

    /// Line identifier is empty
    #[error("line number cannot be an empty string")]
    EmptyLineNumber,
}

#[cfg(test)]
mod tests {
    use super::FormError;

    #[test]
    fn error_display_messages() {
        assert_eq!(
            FormError::EmptyName.to_string(),
            "form name must be a non-empty string"
        );
        assert_eq!(
            FormError::EmptyLineNumber.to_string(),
            "line number cannot be an empty string"
        );
    }

    #[test]
    fn errors_are_cloneable() {
        let error = FormError::EmptyLineNumber;
        let cloned = error.clone();
        assert_eq!(error, cloned);
    }
}
