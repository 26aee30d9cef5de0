//! Bare `http(s)://` links.

use crate::binding::bind_fields;
use crate::config::CodecConfig;
use crate::errors::PayloadResult;
use crate::payloads::{PayloadKind, PayloadType};
use crate::schema::{Accessor, FieldDescriptor, FieldType, Placeholder, ValidationRule};
use crate::validation::validators::http_url_field;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UrlPayload {
    pub url: Option<String>,
}

impl UrlPayload {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }
}

static URL_FIELDS: [FieldDescriptor<UrlPayload>; 1] = [FieldDescriptor {
    name: "url",
    field_type: FieldType::String,
    placeholder: Placeholder::Fixed("https://example.com"),
    description: "The link to open",
    rules: &[
        ValidationRule::required("Url is required."),
        ValidationRule::custom("Url must start with http:// or https://.", http_url_field),
    ],
    options: &[],
    accessor: Accessor::Text {
        get: |r| r.url.as_deref(),
        set: |r, v| r.url = Some(v),
    },
}];

impl PayloadKind for UrlPayload {
    const TYPE: PayloadType = PayloadType::Url;

    fn fields() -> &'static [FieldDescriptor<Self>] {
        &URL_FIELDS
    }

    fn write_payload(&self, _config: &CodecConfig) -> PayloadResult<String> {
        Ok(self.url.as_deref().unwrap_or_default().to_string())
    }

    fn read_payload(input: &str, _config: &CodecConfig) -> PayloadResult<Self> {
        let mut url = UrlPayload::default();
        let input = input.trim();
        if !input.is_empty() {
            bind_fields(&mut url, &URL_FIELDS, [("url", input)])?;
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payloads::Payload;

    #[test]
    fn test_url_round_trip() {
        let url = UrlPayload::new("https://example.com/docs?page=2");
        let encoded = url.encode().unwrap();
        assert_eq!(encoded, "https://example.com/docs?page=2");
        assert_eq!(UrlPayload::parse(&encoded).unwrap(), url);
    }

    #[test]
    fn test_url_requires_http_scheme() {
        let err = UrlPayload::new("ftp://example.com").encode().unwrap_err();
        assert_eq!(err.to_string(), "Url must start with http:// or https://.");
    }
}
