use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::locale::Translations;

pub const MAX_EMAIL_LENGTH: usize = 254;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Basic shape check: non-empty local part, `@`, dotted domain.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::new("email_required"));
    }
    if email.chars().count() > MAX_EMAIL_LENGTH {
        return Err(ValidationError::new("email_too_long"));
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(ValidationError::new("invalid_email_format"));
    }
    Ok(())
}

pub fn is_valid_email(email: &str) -> bool {
    validate_email(email).is_ok()
}

/// Inline hint for the email field. Nothing is shown until the user has
/// typed something.
pub fn email_hint(email: &str, t: &Translations) -> Option<&'static str> {
    if email.is_empty() {
        return None;
    }
    match validate_email(email) {
        Ok(()) => None,
        Err(err) => Some(match err.code.as_ref() {
            "email_too_long" => t.validation.email_too_long,
            "email_required" => t.validation.email_required,
            _ => t.wheel.invalid_email,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{translations, Locale};

    #[test]
    fn test_accepts_basic_addresses() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("  user.name+tag@example.com  "));
        assert!(is_valid_email("x@sub.domain.vn"));
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        for email in ["", "   ", "plain", "@example.com", "user@", "user@domain", "us er@example.com", "a@@b.com"] {
            assert!(!is_valid_email(email), "accepted {email:?}");
        }
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(validate_email("").unwrap_err().code, "email_required");
        assert_eq!(validate_email("nope").unwrap_err().code, "invalid_email_format");
        let long = format!("{}@example.com", "a".repeat(MAX_EMAIL_LENGTH));
        assert_eq!(validate_email(&long).unwrap_err().code, "email_too_long");
    }

    #[test]
    fn test_hints_are_localized() {
        let en = translations(Locale::En);
        let vi = translations(Locale::Vi);
        assert_eq!(email_hint("", en), None);
        assert_eq!(email_hint("a@b.co", en), None);
        assert_eq!(email_hint("abc", en), Some("Please enter a valid email address"));
        assert_eq!(email_hint("abc", vi), Some("Vui lòng nhập email hợp lệ"));
        assert_eq!(email_hint("   ", en), Some("Email address is required"));
    }
}
