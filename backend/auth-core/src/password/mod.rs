//! Password validation with fixed strength rules.
//!
//! Runs BEFORE the register request so weak passwords fail fast without a
//! network round trip. Pure and deterministic: no side effects, no I/O.

use crate::error::{AuthError, PasswordRuleFailure};

use common::RedactedSecret;

/// Minimum password length accepted by the policy.
pub const MIN_PASSWORD_LENGTH: usize = 10;

/// The symbol set a password must draw at least one character from.
pub const REQUIRED_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Validation result for a candidate password.
#[derive(Debug)]
pub enum ValidationResult {
    Valid,
    Invalid(PasswordRuleFailure),
}

/// Fixed strength rules, checked in order; the first unmet rule wins.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    min_length: usize,
    symbols: &'static str,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: MIN_PASSWORD_LENGTH,
            symbols: REQUIRED_SYMBOLS,
        }
    }
}

impl PasswordPolicy {
    /// Validate a candidate password.
    ///
    /// Rule order is part of the contract: when several rules fail, the
    /// reported reason is the first unmet rule in the sequence
    /// length, lowercase, uppercase, digit, symbol. Failures never
    /// accumulate.
    pub fn validate(&self, password: &str) -> ValidationResult {
        let length = password.chars().count();
        if length < self.min_length {
            return ValidationResult::Invalid(PasswordRuleFailure::TooShort {
                min: self.min_length,
                actual: length,
            });
        }

        if !password.chars().any(|c| c.is_ascii_lowercase()) {
            return ValidationResult::Invalid(PasswordRuleFailure::MissingLowercase);
        }

        if !password.chars().any(|c| c.is_ascii_uppercase()) {
            return ValidationResult::Invalid(PasswordRuleFailure::MissingUppercase);
        }

        if !password.chars().any(|c| c.is_ascii_digit()) {
            return ValidationResult::Invalid(PasswordRuleFailure::MissingDigit);
        }

        if !password.chars().any(|c| self.symbols.contains(c)) {
            return ValidationResult::Invalid(PasswordRuleFailure::MissingSymbol);
        }

        ValidationResult::Valid
    }

    /// Validate and wrap in RedactedSecret if valid.
    ///
    /// Returns the password wrapped so the raw `String` stops traveling, or
    /// [`AuthError::WeakPassword`] with the first unmet rule.
    #[track_caller]
    pub fn validate_and_wrap(&self, password: String) -> Result<RedactedSecret, AuthError> {
        match self.validate(&password) {
            ValidationResult::Valid => Ok(RedactedSecret::new(password)),
            ValidationResult::Invalid(reason) => Err(AuthError::weak_password(reason)),
        }
    }
}
