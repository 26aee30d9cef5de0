//! # PAYLOAD KINDS
//!
//! One module per supported QR use case. Each kind is a plain record struct
//! plus an ordered field-descriptor table; the [`PayloadKind`] trait supplies
//! parsing on top of the kind's own grammar, and the object-safe [`Payload`]
//! trait exposes validate/encode/describe for every kind through a blanket
//! implementation.

use crate::binding::bind_fields;
use crate::config::CodecConfig;
use crate::errors::{error_codes, PayloadError, PayloadResult};
use crate::schema::{describe, snapshot, FieldDefinition, FieldDescriptor};
use crate::validation::{Validator, Violations};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use std::str::FromStr;

pub mod email;
pub mod otp;
pub mod phone;
pub mod registry;
pub mod sms;
pub mod text;
pub mod url;
pub mod wifi;

pub use email::EmailPayload;
pub use otp::{Algorithm, OtpPayload, OtpType};
pub use phone::PhonePayload;
pub use registry::{detect, new_payload, parse_any, parse_any_with, parse_payload, parse_payload_with};
pub use sms::SmsPayload;
pub use text::TextPayload;
pub use url::UrlPayload;
pub use wifi::{WifiPayload, WifiSecurity};

/// Discriminant of every supported payload kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadType {
    Otp,
    Wifi,
    Email,
    Phone,
    Sms,
    Url,
    Text,
}

impl PayloadType {
    pub const ALL: [PayloadType; 7] = [
        PayloadType::Otp,
        PayloadType::Wifi,
        PayloadType::Email,
        PayloadType::Phone,
        PayloadType::Sms,
        PayloadType::Url,
        PayloadType::Text,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PayloadType::Otp => "otp",
            PayloadType::Wifi => "wifi",
            PayloadType::Email => "email",
            PayloadType::Phone => "phone",
            PayloadType::Sms => "sms",
            PayloadType::Url => "url",
            PayloadType::Text => "text",
        }
    }
}

impl fmt::Display for PayloadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayloadType {
    type Err = PayloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PayloadType::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                PayloadError::malformed(
                    error_codes::UNKNOWN_KIND,
                    format!("Unknown payload kind: {}", s),
                )
            })
    }
}

/// **PAYLOAD KIND DEFINITION**
///
/// **MANDATE**: Implementors provide the field table and the two wire-format
/// directions; validation, binding and introspection are derived from the table.
/// **GUARANTEE**: `write_payload` is only ever called on a record that passed validation.
pub trait PayloadKind: Default + fmt::Debug + Send + Sync + 'static {
    const TYPE: PayloadType;

    /// Ordered field table; declaration order is violation order.
    fn fields() -> &'static [FieldDescriptor<Self>];

    /// Render a validated record in the kind's wire format.
    fn write_payload(&self, config: &CodecConfig) -> PayloadResult<String>;

    /// Split `input` per the kind's grammar and bind it onto a fresh record.
    fn read_payload(input: &str, config: &CodecConfig) -> PayloadResult<Self>;

    fn parse(input: &str) -> PayloadResult<Self> {
        Self::parse_with(input, &CodecConfig::default())
    }

    fn parse_with(input: &str, config: &CodecConfig) -> PayloadResult<Self> {
        config.check_input(input)?;
        let record = Self::read_payload(input, config)?;
        log::debug!("parsed {} payload", Self::TYPE);
        Ok(record)
    }

    /// Bind flat key/value parameters onto this record.
    fn bind<I, K, V>(&mut self, params: I) -> PayloadResult<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        bind_fields(self, Self::fields(), params)
    }
}

/// Object-safe view over any payload kind.
pub trait Payload: fmt::Debug + Send + Sync {
    fn payload_type(&self) -> PayloadType;

    fn validate(&self) -> Result<(), Violations>;

    /// Validate, then render. Fails with every violation joined by a space.
    fn encode(&self) -> PayloadResult<String> {
        self.encode_with(&CodecConfig::default())
    }

    fn encode_with(&self, config: &CodecConfig) -> PayloadResult<String>;

    fn describe_fields(&self) -> Vec<FieldDefinition>;

    fn bind_params(&mut self, params: &[(String, String)]) -> PayloadResult<()>;

    /// Current field values keyed by field name.
    fn to_json(&self) -> JsonValue;
}

impl<K: PayloadKind> Payload for K {
    fn payload_type(&self) -> PayloadType {
        K::TYPE
    }

    fn validate(&self) -> Result<(), Violations> {
        K::fields().validate(self)
    }

    fn encode_with(&self, config: &CodecConfig) -> PayloadResult<String> {
        if let Err(violations) = Payload::validate(self) {
            log::debug!("refusing to encode invalid {} payload", K::TYPE);
            return Err(violations.into());
        }
        self.write_payload(config)
    }

    fn describe_fields(&self) -> Vec<FieldDefinition> {
        describe(self, K::fields())
    }

    fn bind_params(&mut self, params: &[(String, String)]) -> PayloadResult<()> {
        self.bind(params.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    fn to_json(&self) -> JsonValue {
        snapshot(self, K::fields())
    }
}

/// Field definitions of `payload` as a JSON array for form renderers.
pub fn describe_fields_json(payload: &dyn Payload) -> serde_json::Result<JsonValue> {
    serde_json::to_value(payload.describe_fields())
}

/// Case-insensitive `strip_prefix` for scheme tokens.
pub(crate) fn strip_scheme<'a>(input: &'a str, scheme: &str) -> Option<&'a str> {
    let head = input.get(..scheme.len())?;
    if head.eq_ignore_ascii_case(scheme) {
        Some(&input[scheme.len()..])
    } else {
        None
    }
}

pub(crate) fn missing_scheme(kind: PayloadType, scheme: &str) -> PayloadError {
    PayloadError::malformed(
        error_codes::INVALID_SCHEME,
        format!("Not a {} payload: expected '{}' prefix", kind, scheme),
    )
}
