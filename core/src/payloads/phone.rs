//! `tel:` payloads.

use crate::binding::bind_fields;
use crate::config::CodecConfig;
use crate::errors::PayloadResult;
use crate::payloads::{missing_scheme, strip_scheme, PayloadKind, PayloadType};
use crate::schema::{Accessor, FieldDescriptor, FieldType, Placeholder, ValidationRule};
use crate::validation::validators::phone_field;

const SCHEME: &str = "tel:";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PhonePayload {
    pub number: Option<String>,
}

impl PhonePayload {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: Some(number.into()),
        }
    }
}

static PHONE_FIELDS: [FieldDescriptor<PhonePayload>; 1] = [FieldDescriptor {
    name: "number",
    field_type: FieldType::String,
    placeholder: Placeholder::Fixed("Phone Number"),
    description: "The number to dial, optionally with a leading +",
    rules: &[
        ValidationRule::required("Number is required."),
        ValidationRule::custom("Number must be a valid phone number.", phone_field),
    ],
    options: &[],
    accessor: Accessor::Text {
        get: |r| r.number.as_deref(),
        set: |r, v| r.number = Some(v),
    },
}];

impl PayloadKind for PhonePayload {
    const TYPE: PayloadType = PayloadType::Phone;

    fn fields() -> &'static [FieldDescriptor<Self>] {
        &PHONE_FIELDS
    }

    fn write_payload(&self, _config: &CodecConfig) -> PayloadResult<String> {
        Ok(format!("{}{}", SCHEME, self.number.as_deref().unwrap_or_default()))
    }

    fn read_payload(input: &str, _config: &CodecConfig) -> PayloadResult<Self> {
        let number = strip_scheme(input.trim(), SCHEME)
            .ok_or_else(|| missing_scheme(PayloadType::Phone, SCHEME))?;

        let mut phone = PhonePayload::default();
        if !number.is_empty() {
            bind_fields(&mut phone, &PHONE_FIELDS, [("number", number)])?;
        }
        Ok(phone)
    }
}
