//! # PAYLOAD VALIDATION MODULE
//!
//! **RULE ENGINE OVER FIELD DESCRIPTOR TABLES**
//!
//! Every payload kind declares its rules once, on its field descriptors. This
//! module walks a table against a record and reports every violated rule.
//!
//! ## GUARANTEES
//!
//! 1. **NO SHORT-CIRCUIT** - all violations are collected before returning
//! 2. **STABLE ORDER** - field declaration order, then rule order within a field
//! 3. **PURE** - records are only read, never mutated
//!
//! ## USAGE
//!
//! ```rust
//! use qr_payload::payloads::OtpPayload;
//! use qr_payload::payloads::PayloadKind;
//! use qr_payload::validation::Validator;
//!
//! let otp = OtpPayload::default();
//! let violations = OtpPayload::fields().validate(&otp).unwrap_err();
//! assert!(violations.to_string().contains("Secret is required."));
//! ```

use crate::schema::{FieldDescriptor, FieldValue, RuleKind, ValidationRule};
use std::fmt;

pub mod validators;

pub use validators::{is_email_address, is_http_url, is_phone_number};

/// **CORE VALIDATOR TRAIT**
///
/// **MANDATE**: Implementations MUST report every violation, not only the first.
/// **GUARANTEE**: MUST NOT panic. Failures are returned as `Violations`.
pub trait Validator<T: ?Sized> {
    fn validate(&self, input: &T) -> Result<(), Violations>;
}

/// Ordered list of human-readable rule violations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<String>);

impl Violations {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.0.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }

    /// `Ok(())` when nothing was collected.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<Vec<String>> for Violations {
    fn from(messages: Vec<String>) -> Self {
        Self(messages)
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

/// Whether `value` satisfies `rule`. Rules that do not apply to the value's
/// type (e.g. a range on a text field) always pass.
pub fn rule_accepts(rule: &ValidationRule, value: &FieldValue<'_>) -> bool {
    match (rule.kind, value) {
        (RuleKind::Required, FieldValue::Text(text)) => {
            text.map_or(false, |text| !text.trim().is_empty())
        }
        (RuleKind::Required, _) => true,
        (RuleKind::Range, FieldValue::Integer(n)) => rule
            .bounds
            .map_or(true, |(min, max)| (min..=max).contains(n)),
        (RuleKind::Range, _) => true,
        (RuleKind::Custom, _) => rule.check.map_or(true, |check| check(value)),
    }
}

impl<R> Validator<R> for [FieldDescriptor<R>] {
    fn validate(&self, record: &R) -> Result<(), Violations> {
        let mut violations = Violations::new();

        for field in self {
            let value = field.read(record);
            for rule in field.rules {
                if !rule_accepts(rule, &value) {
                    violations.push(rule.error_message);
                }
            }
        }

        if !violations.is_empty() {
            log::debug!("validation collected {} violation(s)", violations.len());
        }
        violations.into_result()
    }
}

/// Validate `record` against its descriptor table.
pub fn validate_fields<R>(record: &R, fields: &[FieldDescriptor<R>]) -> Result<(), Violations> {
    fields.validate(record)
}
