//! Plain text, emitted verbatim.

use crate::binding::bind_fields;
use crate::config::CodecConfig;
use crate::errors::PayloadResult;
use crate::payloads::{PayloadKind, PayloadType};
use crate::schema::{Accessor, FieldDescriptor, FieldType, Placeholder, ValidationRule};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextPayload {
    pub text: Option<String>,
}

impl TextPayload {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

static TEXT_FIELDS: [FieldDescriptor<TextPayload>; 1] = [FieldDescriptor {
    name: "text",
    field_type: FieldType::String,
    placeholder: Placeholder::Fixed("Text"),
    description: "The text to embed",
    rules: &[ValidationRule::required("Text is required.")],
    options: &[],
    accessor: Accessor::Text {
        get: |r| r.text.as_deref(),
        set: |r, v| r.text = Some(v),
    },
}];

impl PayloadKind for TextPayload {
    const TYPE: PayloadType = PayloadType::Text;

    fn fields() -> &'static [FieldDescriptor<Self>] {
        &TEXT_FIELDS
    }

    fn write_payload(&self, _config: &CodecConfig) -> PayloadResult<String> {
        Ok(self.text.clone().unwrap_or_default())
    }

    fn read_payload(input: &str, _config: &CodecConfig) -> PayloadResult<Self> {
        let mut text = TextPayload::default();
        if !input.is_empty() {
            bind_fields(&mut text, &TEXT_FIELDS, [("text", input)])?;
        }
        Ok(text)
    }
}
