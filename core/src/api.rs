pub use crate::binding::{bind_fields, parse_query_string};
pub use crate::config::CodecConfig;
pub use crate::errors::{error_codes, PayloadError, PayloadResult};
pub use crate::payloads::{
    describe_fields_json, detect, new_payload, parse_any, parse_any_with, parse_payload,
    parse_payload_with, Algorithm, EmailPayload, OtpPayload, OtpType, Payload, PayloadKind,
    PayloadType, PhonePayload, SmsPayload, TextPayload, UrlPayload, WifiPayload, WifiSecurity,
};
pub use crate::schema::{FieldDefinition, FieldType, RuleKind, ValidationRule};
pub use crate::validation::Violations;
