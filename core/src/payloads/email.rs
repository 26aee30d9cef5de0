//! `mailto:` payloads with optional subject and body.

use crate::binding::{bind_fields, parse_query_string};
use crate::config::CodecConfig;
use crate::encoding::{decode_component, encode_component};
use crate::errors::PayloadResult;
use crate::payloads::{missing_scheme, strip_scheme, PayloadKind, PayloadType};
use crate::schema::{Accessor, FieldDescriptor, FieldType, Placeholder, ValidationRule};
use crate::validation::validators::email_field;

const SCHEME: &str = "mailto:";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmailPayload {
    pub to: Option<String>,
    pub subject: Option<String>,
    pub body: Option<String>,
}

impl EmailPayload {
    pub fn new(to: impl Into<String>) -> Self {
        Self {
            to: Some(to.into()),
            ..Self::default()
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.trim().is_empty())
}

static EMAIL_FIELDS: [FieldDescriptor<EmailPayload>; 3] = [
    FieldDescriptor {
        name: "to",
        field_type: FieldType::String,
        placeholder: Placeholder::Fixed("Recipient"),
        description: "The recipient e-mail address",
        rules: &[
            ValidationRule::required("To is required."),
            ValidationRule::custom("To must be a valid e-mail address.", email_field),
        ],
        options: &[],
        accessor: Accessor::Text {
            get: |r| r.to.as_deref(),
            set: |r, v| r.to = Some(v),
        },
    },
    FieldDescriptor {
        name: "subject",
        field_type: FieldType::String,
        placeholder: Placeholder::Fixed("Subject"),
        description: "The message subject",
        rules: &[],
        options: &[],
        accessor: Accessor::Text {
            get: |r| r.subject.as_deref(),
            set: |r, v| r.subject = Some(v),
        },
    },
    FieldDescriptor {
        name: "body",
        field_type: FieldType::String,
        placeholder: Placeholder::Fixed("Body"),
        description: "The message body",
        rules: &[],
        options: &[],
        accessor: Accessor::Text {
            get: |r| r.body.as_deref(),
            set: |r, v| r.body = Some(v),
        },
    },
];

impl PayloadKind for EmailPayload {
    const TYPE: PayloadType = PayloadType::Email;

    fn fields() -> &'static [FieldDescriptor<Self>] {
        &EMAIL_FIELDS
    }

    fn write_payload(&self, _config: &CodecConfig) -> PayloadResult<String> {
        let mut uri = format!("{}{}", SCHEME, self.to.as_deref().unwrap_or_default().trim());

        let query: Vec<String> = [("subject", non_blank(&self.subject)), ("body", non_blank(&self.body))]
            .into_iter()
            .filter_map(|(key, value)| value.map(|value| format!("{}={}", key, encode_component(value))))
            .collect();
        if !query.is_empty() {
            uri.push('?');
            uri.push_str(&query.join("&"));
        }
        Ok(uri)
    }

    fn read_payload(input: &str, _config: &CodecConfig) -> PayloadResult<Self> {
        let rest = strip_scheme(input.trim(), SCHEME)
            .ok_or_else(|| missing_scheme(PayloadType::Email, SCHEME))?;
        let (address, query) = rest.split_once('?').unwrap_or((rest, ""));

        let mut params = Vec::new();
        if !address.is_empty() {
            params.push(("to".to_string(), decode_component(address)?));
        }
        params.extend(parse_query_string(query)?);

        let mut email = EmailPayload::default();
        bind_fields(&mut email, &EMAIL_FIELDS, params)?;
        Ok(email)
    }
}
