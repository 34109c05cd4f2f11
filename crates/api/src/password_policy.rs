// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Password rules for operator accounts.

use thiserror::Error;

/// Ways a proposed operator password can fail the policy.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    /// Fewer characters than the policy minimum.
    #[error("Password must be at least {min_length} characters long")]
    TooShort { min_length: usize },

    /// Too few character classes.
    #[error("Password needs {required} of: uppercase, lowercase, digits, symbols (has {found})")]
    InsufficientComplexity { required: usize, found: usize },

    /// Same as the login or display name, ignoring case.
    #[error("Password must not be the same as the {field}")]
    MatchesForbiddenField { field: String },

    /// The confirmation differs from the password.
    #[error("Password and confirmation do not match")]
    ConfirmationMismatch,
}

/// Password requirements for operator accounts.
pub struct PasswordPolicy {
    /// Minimum length in characters.
    pub min_length: usize,
    /// Character classes required, out of four.
    pub min_complexity: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 12,
            min_complexity: 3,
        }
    }
}

impl PasswordPolicy {
    /// Checks a proposed password.
    ///
    /// # Arguments
    ///
    /// * `password` - The proposed password
    /// * `confirmation` - The password typed a second time
    /// * `login_name` - The operator login name
    /// * `display_name` - The operator display name
    ///
    /// # Errors
    ///
    /// Returns the first rule the password breaks, checked in the order:
    /// confirmation, length, complexity, forbidden values.
    pub fn validate(
        &self,
        password: &str,
        confirmation: &str,
        login_name: &str,
        display_name: &str,
    ) -> Result<(), PasswordPolicyError> {
        if password != confirmation {
            return Err(PasswordPolicyError::ConfirmationMismatch);
        }

        if password.chars().count() < self.min_length {
            return Err(PasswordPolicyError::TooShort {
                min_length: self.min_length,
            });
        }

        let found: usize = character_classes(password);
        if found < self.min_complexity {
            return Err(PasswordPolicyError::InsufficientComplexity {
                required: self.min_complexity,
                found,
            });
        }

        let forbidden: [(&str, &str); 2] =
            [("login_name", login_name), ("display_name", display_name)];
        for (field, value) in forbidden {
            if password.eq_ignore_ascii_case(value.trim()) {
                return Err(PasswordPolicyError::MatchesForbiddenField {
                    field: field.to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Counts the character classes present: uppercase, lowercase, digit, symbol.
fn character_classes(password: &str) -> usize {
    let classes: [bool; 4] = [
        password.chars().any(char::is_uppercase),
        password.chars().any(char::is_lowercase),
        password.chars().any(|c| c.is_ascii_digit()),
        password
            .chars()
            .any(|c| !c.is_alphanumeric() && !c.is_whitespace()),
    ];
    classes.into_iter().filter(|present| *present).count()
}
