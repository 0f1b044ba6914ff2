// Unit tests for the password policy
// Rule order is part of the contract: the first unmet rule wins and
// failures never accumulate.

use crate::error::{AuthError, PasswordRuleFailure};
use crate::password::{MIN_PASSWORD_LENGTH, PasswordPolicy, ValidationResult};

fn failure_of(password: &str) -> PasswordRuleFailure {
    match PasswordPolicy::default().validate(password) {
        ValidationResult::Invalid(reason) => reason,
        ValidationResult::Valid => panic!("expected {password:?} to be rejected"),
    }
}

fn assert_valid(password: &str) {
    assert!(
        matches!(
            PasswordPolicy::default().validate(password),
            ValidationResult::Valid
        ),
        "expected {password:?} to be accepted"
    );
}

#[test]
fn given_short_password_when_validated_then_reports_too_short() {
    assert_eq!(
        failure_of("abc"),
        PasswordRuleFailure::TooShort {
            min: MIN_PASSWORD_LENGTH,
            actual: 3
        }
    );
}

/// **VALUE**: Verifies the length rule wins regardless of composition.
///
/// **WHY THIS MATTERS**: The reported reason is what the user sees. A short
/// password must always be reported as short, never as "missing digit",
/// no matter which other rules it would also fail.
///
/// **BUG THIS CATCHES**: Would catch a reordering of the rule checks.
#[test]
fn given_short_password_when_validated_then_length_rule_wins_over_composition() {
    for password in ["", "A", "Ab1!", "ABCDEF", "!!!!!!!!!"] {
        assert!(
            matches!(failure_of(password), PasswordRuleFailure::TooShort { .. }),
            "password: {password:?}"
        );
    }
}

#[test]
fn given_lowercase_only_password_when_validated_then_reports_missing_uppercase() {
    // Length passes, lowercase passes; uppercase is the first unmet rule.
    assert_eq!(
        failure_of("abcdefghij"),
        PasswordRuleFailure::MissingUppercase
    );
}

#[test]
fn given_uppercase_only_password_when_validated_then_reports_missing_lowercase() {
    assert_eq!(
        failure_of("ABCDEFGHIJ"),
        PasswordRuleFailure::MissingLowercase
    );
}

#[test]
fn given_password_meeting_all_rules_when_validated_then_valid() {
    assert_valid("Abcdefghi1!");
    assert_valid("Str0ng&Secret");
    assert_valid("pa$$Word2024");
}

/// Removing any one satisfied property flips the result to the matching rule.
#[test]
fn given_strong_password_when_one_property_removed_then_matching_rule_reported() {
    // Baseline "Abcdefghi1!" is valid; each line drops exactly one property.
    assert!(matches!(
        failure_of("Abcdefg1!"),
        PasswordRuleFailure::TooShort { .. }
    ));
    assert_eq!(
        failure_of("ABCDEFGHI1!"),
        PasswordRuleFailure::MissingLowercase
    );
    assert_eq!(
        failure_of("abcdefghi1!"),
        PasswordRuleFailure::MissingUppercase
    );
    assert_eq!(failure_of("Abcdefghij!"), PasswordRuleFailure::MissingDigit);
    assert_eq!(failure_of("Abcdefghij1"), PasswordRuleFailure::MissingSymbol);
}

#[test]
fn given_rule_failures_when_displayed_then_match_ui_wording() {
    assert_eq!(
        failure_of("abc").to_string(),
        "Password must be at least 10 characters long"
    );
    assert_eq!(
        PasswordRuleFailure::MissingLowercase.to_string(),
        "Password must contain at least one lowercase letter"
    );
    assert_eq!(
        PasswordRuleFailure::MissingUppercase.to_string(),
        "Password must contain at least one uppercase letter"
    );
    assert_eq!(
        PasswordRuleFailure::MissingDigit.to_string(),
        "Password must contain at least one number"
    );
    assert_eq!(
        PasswordRuleFailure::MissingSymbol.to_string(),
        "Password must contain at least one symbol"
    );
}

#[test]
fn given_weak_password_when_wrapped_then_weak_password_error() {
    let result = PasswordPolicy::default().validate_and_wrap(String::from("abc"));

    assert!(matches!(result, Err(AuthError::WeakPassword { .. })));
}

#[test]
fn given_strong_password_when_wrapped_then_secret_redacts_value() {
    let secret = PasswordPolicy::default()
        .validate_and_wrap(String::from("Abcdefghi1!"))
        .expect("policy should accept");

    assert_eq!(secret.as_str(), "Abcdefghi1!");
    assert!(!format!("{secret:?}").contains("Abcdefghi1"));
}
