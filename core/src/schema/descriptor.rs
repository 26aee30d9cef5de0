use crate::schema::types::{FieldDefinition, FieldType, ValidationRule};
use serde_json::{Map, Value as JsonValue};

/// Borrowed view of one field's current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(Option<&'a str>),
    Integer(i64),
    Boolean(bool),
    Choice(&'static str),
}

impl FieldValue<'_> {
    pub fn to_json(&self) -> JsonValue {
        match *self {
            FieldValue::Text(Some(text)) => JsonValue::String(text.to_string()),
            FieldValue::Text(None) => JsonValue::Null,
            FieldValue::Integer(n) => JsonValue::from(n),
            FieldValue::Boolean(b) => JsonValue::Bool(b),
            FieldValue::Choice(name) => JsonValue::String(name.to_string()),
        }
    }

    /// Textual rendering used for current-value placeholders.
    pub fn render(&self) -> String {
        match *self {
            FieldValue::Text(text) => text.unwrap_or_default().to_string(),
            FieldValue::Integer(n) => n.to_string(),
            FieldValue::Boolean(b) => b.to_string(),
            FieldValue::Choice(name) => name.to_string(),
        }
    }
}

/// **TYPED FIELD ACCESSOR**
///
/// **PURPOSE**: Statically typed getter/setter pair standing in for runtime
/// property reflection. The variant doubles as the binding type tag.
pub enum Accessor<R> {
    Text {
        get: fn(&R) -> Option<&str>,
        set: fn(&mut R, String),
    },
    Integer {
        get: fn(&R) -> i64,
        set: fn(&mut R, i64),
    },
    Boolean {
        get: fn(&R) -> bool,
        set: fn(&mut R, bool),
    },
    /// Enum-typed field; `set` receives an index into `members`.
    Choice {
        type_name: &'static str,
        members: &'static [&'static str],
        get: fn(&R) -> &'static str,
        set: fn(&mut R, usize),
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Fixed(&'static str),
    /// Mirror whatever the record currently holds.
    CurrentValue,
}

/// **FIELD DESCRIPTOR**
///
/// **PURPOSE**: One row of a payload kind's ordered field table.
/// **USAGE**: Consumed uniformly by the binder, the validation engine and
/// `describe_fields`; declaration order is the order violations are reported in.
pub struct FieldDescriptor<R> {
    pub name: &'static str,
    pub field_type: FieldType,
    pub placeholder: Placeholder,
    pub description: &'static str,
    pub rules: &'static [ValidationRule],
    /// Fixed dropdown choices for non-enum dropdowns; enum fields list their members.
    pub options: &'static [&'static str],
    pub accessor: Accessor<R>,
}

impl<R> FieldDescriptor<R> {
    pub fn read<'r>(&self, record: &'r R) -> FieldValue<'r> {
        match &self.accessor {
            Accessor::Text { get, .. } => FieldValue::Text(get(record)),
            Accessor::Integer { get, .. } => FieldValue::Integer(get(record)),
            Accessor::Boolean { get, .. } => FieldValue::Boolean(get(record)),
            Accessor::Choice { get, .. } => FieldValue::Choice(get(record)),
        }
    }

    /// Type name reported when a raw value cannot be bound to this field.
    pub fn expected_type(&self) -> &'static str {
        match &self.accessor {
            Accessor::Text { .. } => "string",
            Accessor::Integer { .. } => "integer",
            Accessor::Boolean { .. } => "boolean",
            Accessor::Choice { type_name, .. } => type_name,
        }
    }

    fn dropdown_options(&self) -> Vec<String> {
        if self.field_type != FieldType::Dropdown {
            return Vec::new();
        }
        let options = match &self.accessor {
            Accessor::Choice { members, .. } if self.options.is_empty() => *members,
            _ => self.options,
        };
        options.iter().map(|option| option.to_string()).collect()
    }

    pub fn definition(&self, record: &R) -> FieldDefinition {
        let placeholder = match self.placeholder {
            Placeholder::Fixed(text) => text.to_string(),
            Placeholder::CurrentValue => self.read(record).render(),
        };

        FieldDefinition {
            name: self.name.to_string(),
            semantic_type: self.field_type,
            placeholder,
            description: self.description.to_string(),
            validation_rules: self.rules.to_vec(),
            dropdown_options: self.dropdown_options(),
        }
    }
}

pub fn find_field<'f, R>(fields: &'f [FieldDescriptor<R>], name: &str) -> Option<&'f FieldDescriptor<R>> {
    fields.iter().find(|field| field.name == name)
}

/// Field definitions in declaration order.
pub fn describe<R>(record: &R, fields: &[FieldDescriptor<R>]) -> Vec<FieldDefinition> {
    fields.iter().map(|field| field.definition(record)).collect()
}

/// JSON object of every field's current value.
pub fn snapshot<R>(record: &R, fields: &[FieldDescriptor<R>]) -> JsonValue {
    let map: Map<String, JsonValue> = fields
        .iter()
        .map(|field| (field.name.to_string(), field.read(record).to_json()))
        .collect();
    JsonValue::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default)]
    struct Sample {
        label: Option<String>,
        size: i64,
        enabled: bool,
        mode: usize,
    }

    const MODES: [&str; 2] = ["Fast", "Slow"];

    static SAMPLE_FIELDS: [FieldDescriptor<Sample>; 4] = [
        FieldDescriptor {
            name: "label",
            field_type: FieldType::String,
            placeholder: Placeholder::CurrentValue,
            description: "Free-form label",
            rules: &[ValidationRule::required("Label is required.")],
            options: &[],
            accessor: Accessor::Text {
                get: |r| r.label.as_deref(),
                set: |r, v| r.label = Some(v),
            },
        },
        FieldDescriptor {
            name: "size",
            field_type: FieldType::Dropdown,
            placeholder: Placeholder::Fixed("Size"),
            description: "",
            rules: &[],
            options: &["1", "2"],
            accessor: Accessor::Integer {
                get: |r| r.size,
                set: |r, v| r.size = v,
            },
        },
        FieldDescriptor {
            name: "enabled",
            field_type: FieldType::Boolean,
            placeholder: Placeholder::Fixed("Enabled"),
            description: "",
            rules: &[],
            options: &[],
            accessor: Accessor::Boolean {
                get: |r| r.enabled,
                set: |r, v| r.enabled = v,
            },
        },
        FieldDescriptor {
            name: "mode",
            field_type: FieldType::Dropdown,
            placeholder: Placeholder::Fixed("Mode"),
            description: "",
            rules: &[],
            options: &[],
            accessor: Accessor::Choice {
                type_name: "Mode",
                members: &MODES,
                get: |r| MODES[r.mode % MODES.len()],
                set: |r, i| r.mode = i,
            },
        },
    ];

    #[test]
    fn test_current_value_placeholder() {
        let sample = Sample {
            label: Some("kitchen".to_string()),
            ..Sample::default()
        };
        let definitions = describe(&sample, &SAMPLE_FIELDS);
        assert_eq!(definitions[0].placeholder, "kitchen");
        assert_eq!(definitions[1].placeholder, "Size");
    }

    #[test]
    fn test_dropdown_options_prefer_fixed_then_members() {
        let definitions = describe(&Sample::default(), &SAMPLE_FIELDS);
        assert_eq!(definitions[1].dropdown_options, vec!["1", "2"]);
        assert!(definitions[2].dropdown_options.is_empty());
        assert_eq!(definitions[3].dropdown_options, vec!["Fast", "Slow"]);
    }

    #[test]
    fn test_snapshot_reads_every_field() {
        let sample = Sample {
            label: None,
            size: 2,
            enabled: true,
            mode: 1,
        };
        assert_eq!(
            snapshot(&sample, &SAMPLE_FIELDS),
            json!({ "label": null, "size": 2, "enabled": true, "mode": "Slow" })
        );
    }

    #[test]
    fn test_expected_type_and_lookup() {
        assert_eq!(find_field(&SAMPLE_FIELDS, "mode").unwrap().expected_type(), "Mode");
        assert_eq!(find_field(&SAMPLE_FIELDS, "size").unwrap().expected_type(), "integer");
        assert!(find_field(&SAMPLE_FIELDS, "Mode").is_none());
    }
}
