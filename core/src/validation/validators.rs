//! # CONCRETE FIELD CHECKS
//!
//! Predicates backing `Custom` rules, plus the mailbox-address test the OTP
//! label encoder uses to decide whether an account name needs escaping.

use crate::schema::FieldValue;
use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidateEmail;

static HTTP_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^https?://[^\s/?#]+[^\s]*$").expect("static URL pattern is valid")
});

/// Syntactically valid `local@domain` mailbox address.
pub fn is_email_address(candidate: &str) -> bool {
    !candidate.trim().is_empty() && candidate.validate_email()
}

/// Digits with optional separators and at most one leading `+`.
pub fn is_phone_number(candidate: &str) -> bool {
    let digits = candidate.trim().strip_prefix('+').unwrap_or(candidate.trim());
    digits.chars().any(|c| c.is_ascii_digit())
        && digits
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')' | '.'))
}

/// Absolute `http://` or `https://` URL with a host.
pub fn is_http_url(candidate: &str) -> bool {
    HTTP_URL.is_match(candidate)
}

/// Applies `check` to set, non-blank text; blank or unset values are left to `Required`.
fn text_passes(value: &FieldValue<'_>, check: fn(&str) -> bool) -> bool {
    match value {
        FieldValue::Text(Some(text)) if !text.trim().is_empty() => check(text),
        _ => true,
    }
}

pub fn email_field(value: &FieldValue<'_>) -> bool {
    text_passes(value, is_email_address)
}

pub fn phone_field(value: &FieldValue<'_>) -> bool {
    text_passes(value, is_phone_number)
}

pub fn http_url_field(value: &FieldValue<'_>) -> bool {
    text_passes(value, is_http_url)
}
