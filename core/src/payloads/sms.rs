//! `SMSTO:number:message` payloads.

use crate::binding::bind_fields;
use crate::config::CodecConfig;
use crate::errors::PayloadResult;
use crate::payloads::{missing_scheme, strip_scheme, PayloadKind, PayloadType};
use crate::schema::{Accessor, FieldDescriptor, FieldType, Placeholder, ValidationRule};
use crate::validation::validators::phone_field;

const SCHEME: &str = "SMSTO:";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SmsPayload {
    pub number: Option<String>,
    pub message: Option<String>,
}

impl SmsPayload {
    pub fn new(number: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            number: Some(number.into()),
            message: Some(message.into()),
        }
    }
}

static SMS_FIELDS: [FieldDescriptor<SmsPayload>; 2] = [
    FieldDescriptor {
        name: "number",
        field_type: FieldType::String,
        placeholder: Placeholder::Fixed("Phone Number"),
        description: "The recipient phone number",
        rules: &[
            ValidationRule::required("Number is required."),
            ValidationRule::custom("Number must be a valid phone number.", phone_field),
        ],
        options: &[],
        accessor: Accessor::Text {
            get: |r| r.number.as_deref(),
            set: |r, v| r.number = Some(v),
        },
    },
    FieldDescriptor {
        name: "message",
        field_type: FieldType::String,
        placeholder: Placeholder::Fixed("Message"),
        description: "The prefilled message text",
        rules: &[],
        options: &[],
        accessor: Accessor::Text {
            get: |r| r.message.as_deref(),
            set: |r, v| r.message = Some(v),
        },
    },
];

impl PayloadKind for SmsPayload {
    const TYPE: PayloadType = PayloadType::Sms;

    fn fields() -> &'static [FieldDescriptor<Self>] {
        &SMS_FIELDS
    }

    fn write_payload(&self, _config: &CodecConfig) -> PayloadResult<String> {
        Ok(format!(
            "{}{}:{}",
            SCHEME,
            self.number.as_deref().unwrap_or_default(),
            self.message.as_deref().unwrap_or_default()
        ))
    }

    fn read_payload(input: &str, _config: &CodecConfig) -> PayloadResult<Self> {
        let rest = strip_scheme(input, SCHEME)
            .ok_or_else(|| missing_scheme(PayloadType::Sms, SCHEME))?;
        // The number never contains ':', so everything after the first one is message text.
        let (number, message) = rest.split_once(':').unwrap_or((rest, ""));

        let params = [("number", number), ("message", message)]
            .into_iter()
            .filter(|(_, value)| !value.is_empty());
        let mut sms = SmsPayload::default();
        bind_fields(&mut sms, &SMS_FIELDS, params)?;
        Ok(sms)
    }
}
