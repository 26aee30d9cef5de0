//! Field schema model: descriptor tables and the introspection records derived from them.

pub mod descriptor;
pub mod types;

pub use descriptor::{describe, find_field, snapshot, Accessor, FieldDescriptor, FieldValue, Placeholder};
pub use types::{FieldDefinition, FieldType, RuleCheck, RuleKind, ValidationRule};
