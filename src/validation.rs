//! Pure field validation for the registration form.
//!
//! Each field is checked independently and every applicable error is
//! collected; only the password sub-checks short-circuit, in the fixed order
//! length, uppercase, lowercase, digit.

use crate::domain::{FormErrors, FormInput};

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const PASSWORD_NEEDS_UPPERCASE: &str = "Password must contain at least one uppercase letter";
pub const PASSWORD_NEEDS_LOWERCASE: &str = "Password must contain at least one lowercase letter";
pub const PASSWORD_NEEDS_DIGIT: &str = "Password must contain at least one number";
pub const CONFIRM_REQUIRED: &str = "Please confirm your password";
pub const CONFIRM_MISMATCH: &str = "Passwords do not match";
pub const TERMS_REQUIRED: &str = "You must agree to the Terms of Service and Privacy Policy";

const PASSWORD_MIN_CHARS: usize = 8;

/// Maps the current field values to a fresh error record.
///
/// Total and deterministic; an empty result means the form may be submitted.
pub fn validate(input: &FormInput) -> FormErrors {
    FormErrors {
        name: validate_name(&input.name),
        email: validate_email(&input.email),
        password: validate_password(&input.password),
        confirm_password: validate_confirmation(&input.password, &input.confirm_password),
        general: validate_terms(input.agree_terms),
    }
}

fn validate_name(name: &str) -> Option<String> {
    if name.trim().is_empty() {
        Some(NAME_REQUIRED.into())
    } else {
        None
    }
}

fn validate_email(email: &str) -> Option<String> {
    if email.is_empty() {
        Some(EMAIL_REQUIRED.into())
    } else if !looks_like_email(email) {
        Some(EMAIL_INVALID.into())
    } else {
        None
    }
}

fn validate_password(password: &str) -> Option<String> {
    if password.is_empty() {
        Some(PASSWORD_REQUIRED.into())
    } else if password.chars().count() < PASSWORD_MIN_CHARS {
        Some(PASSWORD_TOO_SHORT.into())
    } else if !password.chars().any(|c| c.is_ascii_uppercase()) {
        Some(PASSWORD_NEEDS_UPPERCASE.into())
    } else if !password.chars().any(|c| c.is_ascii_lowercase()) {
        Some(PASSWORD_NEEDS_LOWERCASE.into())
    } else if !password.chars().any(|c| c.is_ascii_digit()) {
        Some(PASSWORD_NEEDS_DIGIT.into())
    } else {
        None
    }
}

fn validate_confirmation(password: &str, confirmation: &str) -> Option<String> {
    if confirmation.is_empty() {
        Some(CONFIRM_REQUIRED.into())
    } else if confirmation != password {
        Some(CONFIRM_MISMATCH.into())
    } else {
        None
    }
}

fn validate_terms(agreed: bool) -> Option<String> {
    if agreed {
        None
    } else {
        Some(TERMS_REQUIRED.into())
    }
}

/// Coarse syntactic email check: the value must contain a contiguous run of
/// non-whitespace, `@`, non-whitespace, `.`, non-whitespace. This is an
/// unanchored containment test, not RFC validation.
fn looks_like_email(value: &str) -> bool {
    let chars: Vec<char> = value.chars().collect();
    for (at, &c) in chars.iter().enumerate() {
        if c != '@' {
            continue;
        }
        let preceded = at > 0 && !chars[at - 1].is_whitespace();
        if !preceded {
            continue;
        }
        // Look for a dot after the '@' with an unbroken non-whitespace run
        // between them and at least one non-whitespace char after it.
        let mut idx = at + 1;
        while idx < chars.len() && !chars[idx].is_whitespace() {
            if chars[idx] == '.' && idx > at + 1 {
                if chars.get(idx + 1).is_some_and(|next| !next.is_whitespace()) {
                    return true;
                }
            }
            idx += 1;
        }
    }
    false
}
