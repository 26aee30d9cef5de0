use crate::schema::descriptor::FieldValue;
use serde::Serialize;
use std::fmt;

/// Semantic type the UI uses to pick an input control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldType {
    String,
    Integer,
    Boolean,
    Enum,
    Dropdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RuleKind {
    Required,
    Range,
    Custom,
}

/// Predicate backing a `Custom` rule.
pub type RuleCheck = fn(&FieldValue<'_>) -> bool;

/// **VALIDATION RULE**
///
/// **PURPOSE**: One declarative constraint attached to a field descriptor.
/// **GUARANTEE**: The same value drives both `describe_fields` output and the
/// validation engine, so UI hints and enforcement cannot drift apart.
#[derive(Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRule {
    pub kind: RuleKind,
    pub error_message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<(i64, i64)>,
    #[serde(skip)]
    pub(crate) check: Option<RuleCheck>,
}

impl ValidationRule {
    /// Field must be set and not blank.
    pub const fn required(error_message: &'static str) -> Self {
        Self {
            kind: RuleKind::Required,
            error_message,
            bounds: None,
            check: None,
        }
    }

    /// Integer field must lie within `min..=max`.
    pub const fn range(min: i64, max: i64, error_message: &'static str) -> Self {
        Self {
            kind: RuleKind::Range,
            error_message,
            bounds: Some((min, max)),
            check: None,
        }
    }

    /// Field value must satisfy `check`.
    pub const fn custom(error_message: &'static str, check: RuleCheck) -> Self {
        Self {
            kind: RuleKind::Custom,
            error_message,
            bounds: None,
            check: Some(check),
        }
    }
}

impl fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule")
            .field("kind", &self.kind)
            .field("error_message", &self.error_message)
            .field("bounds", &self.bounds)
            .finish()
    }
}

/// **FIELD DEFINITION**
///
/// **PURPOSE**: Introspection record consumed by form renderers.
/// **GUARANTEE**: Serializes to camelCase JSON; `dropdownOptions` only for dropdowns.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub name: String,
    pub semantic_type: FieldType,
    pub placeholder: String,
    pub description: String,
    pub validation_rules: Vec<ValidationRule>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dropdown_options: Vec<String>,
}

impl FieldDefinition {
    pub fn is_required(&self) -> bool {
        self.validation_rules
            .iter()
            .any(|rule| rule.kind == RuleKind::Required)
    }
}
