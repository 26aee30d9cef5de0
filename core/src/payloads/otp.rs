//! OTP provisioning URIs (`otpauth://`), the format authenticator apps scan.

use crate::binding::{bind_fields, parse_query_string};
use crate::config::CodecConfig;
use crate::encoding::{decode_component, encode_account_name, encode_component, normalize_secret};
use crate::errors::{error_codes, PayloadError, PayloadResult};
use crate::payloads::{missing_scheme, strip_scheme, PayloadKind, PayloadType};
use crate::schema::{Accessor, FieldDescriptor, FieldType, Placeholder, ValidationRule};
use once_cell::sync::Lazy;
use regex::Regex;

const SCHEME: &str = "otpauth://";
const INT_MAX: i64 = i32::MAX as i64;

static OTPAUTH_URI: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([^/?#]+)/([^?#]*)(?:\?([^#]*))?$").expect("static otpauth pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OtpType {
    #[default]
    Totp,
    Hotp,
}

impl OtpType {
    pub const ALL: [OtpType; 2] = [OtpType::Totp, OtpType::Hotp];
    pub const NAMES: [&'static str; 2] = ["TOTP", "HOTP"];

    pub fn as_str(self) -> &'static str {
        match self {
            OtpType::Totp => "TOTP",
            OtpType::Hotp => "HOTP",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    #[default]
    Sha1,
    Sha256,
    Sha512,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Sha1, Algorithm::Sha256, Algorithm::Sha512];
    pub const NAMES: [&'static str; 3] = ["SHA1", "SHA256", "SHA512"];

    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Sha1 => "SHA1",
            Algorithm::Sha256 => "SHA256",
            Algorithm::Sha512 => "SHA512",
        }
    }
}

/// **OTP PROVISIONING RECORD**
///
/// `counter` is always present but only emitted for HOTP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpPayload {
    pub account_name: Option<String>,
    pub issuer: Option<String>,
    pub secret: Option<String>,
    pub otp_type: OtpType,
    pub algorithm: Algorithm,
    pub digits: i64,
    pub period: i64,
    pub counter: i64,
}

impl Default for OtpPayload {
    fn default() -> Self {
        Self {
            account_name: None,
            issuer: None,
            secret: None,
            otp_type: OtpType::Totp,
            algorithm: Algorithm::Sha1,
            digits: 6,
            period: 30,
            counter: 0,
        }
    }
}

impl OtpPayload {
    pub fn new(
        issuer: impl Into<String>,
        account_name: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            account_name: Some(account_name.into()),
            issuer: Some(issuer.into()),
            secret: Some(secret.into()),
            ..Self::default()
        }
    }

    /// Switch to counter-based HOTP starting at `counter`.
    pub fn with_counter(mut self, counter: i64) -> Self {
        self.otp_type = OtpType::Hotp;
        self.counter = counter;
        self
    }
}

static OTP_FIELDS: [FieldDescriptor<OtpPayload>; 8] = [
    FieldDescriptor {
        name: "accountName",
        field_type: FieldType::String,
        placeholder: Placeholder::Fixed("Account Name"),
        description: "The account name associated with the OTP",
        rules: &[ValidationRule::required("AccountName is required.")],
        options: &[],
        accessor: Accessor::Text {
            get: |r| r.account_name.as_deref(),
            set: |r, v| r.account_name = Some(v),
        },
    },
    FieldDescriptor {
        name: "issuer",
        field_type: FieldType::String,
        placeholder: Placeholder::Fixed("Issuer"),
        description: "The issuer of the OTP",
        rules: &[ValidationRule::required("Issuer is required.")],
        options: &[],
        accessor: Accessor::Text {
            get: |r| r.issuer.as_deref(),
            set: |r, v| r.issuer = Some(v),
        },
    },
    FieldDescriptor {
        name: "secret",
        field_type: FieldType::String,
        placeholder: Placeholder::Fixed("Secret"),
        description: "The secret key for the OTP",
        rules: &[ValidationRule::required("Secret is required.")],
        options: &[],
        accessor: Accessor::Text {
            get: |r| r.secret.as_deref(),
            set: |r, v| r.secret = Some(v),
        },
    },
    FieldDescriptor {
        name: "type",
        field_type: FieldType::Dropdown,
        placeholder: Placeholder::Fixed("OTPType"),
        description: "The type of OTP (TOTP or HOTP)",
        rules: &[],
        options: &[],
        accessor: Accessor::Choice {
            type_name: "OTPType",
            members: &OtpType::NAMES,
            get: |r| r.otp_type.as_str(),
            set: |r, i| {
                if let Some(otp_type) = OtpType::ALL.get(i) {
                    r.otp_type = *otp_type;
                }
            },
        },
    },
    FieldDescriptor {
        name: "algorithm",
        field_type: FieldType::Dropdown,
        placeholder: Placeholder::Fixed("Algorithm"),
        description: "The algorithm used for the OTP",
        rules: &[],
        options: &[],
        accessor: Accessor::Choice {
            type_name: "Algorithm",
            members: &Algorithm::NAMES,
            get: |r| r.algorithm.as_str(),
            set: |r, i| {
                if let Some(algorithm) = Algorithm::ALL.get(i) {
                    r.algorithm = *algorithm;
                }
            },
        },
    },
    FieldDescriptor {
        name: "digits",
        field_type: FieldType::Integer,
        placeholder: Placeholder::Fixed("Digits"),
        description: "The number of digits in the OTP",
        rules: &[ValidationRule::range(1, INT_MAX, "Digits must be greater than 0.")],
        options: &[],
        accessor: Accessor::Integer {
            get: |r| r.digits,
            set: |r, v| r.digits = v,
        },
    },
    FieldDescriptor {
        name: "period",
        field_type: FieldType::Dropdown,
        placeholder: Placeholder::Fixed("Period"),
        description: "The period for the OTP",
        rules: &[ValidationRule::range(1, INT_MAX, "Period must be greater than 0.")],
        options: &["15", "30", "60"],
        accessor: Accessor::Integer {
            get: |r| r.period,
            set: |r, v| r.period = v,
        },
    },
    FieldDescriptor {
        name: "counter",
        field_type: FieldType::Integer,
        placeholder: Placeholder::Fixed("Counter"),
        description: "The counter for HOTP",
        rules: &[ValidationRule::range(0, INT_MAX, "Counter must be non-negative for HOTP.")],
        options: &[],
        accessor: Accessor::Integer {
            get: |r| r.counter,
            set: |r, v| r.counter = v,
        },
    },
];

impl PayloadKind for OtpPayload {
    const TYPE: PayloadType = PayloadType::Otp;

    fn fields() -> &'static [FieldDescriptor<Self>] {
        &OTP_FIELDS
    }

    fn write_payload(&self, config: &CodecConfig) -> PayloadResult<String> {
        let issuer = encode_component(self.issuer.as_deref().unwrap_or_default());
        let account = encode_account_name(self.account_name.as_deref().unwrap_or_default());
        let secret = normalize_secret(
            self.secret.as_deref().unwrap_or_default(),
            config.accept_unpadded_base32,
        );

        let mut uri = format!(
            "{}{}/{}:{}",
            SCHEME,
            self.otp_type.as_str().to_lowercase(),
            issuer,
            account
        );
        uri.push_str(&format!("?secret={}", secret));
        uri.push_str(&format!("&issuer={}", issuer));
        uri.push_str(&format!("&algorithm={}", self.algorithm.as_str().to_uppercase()));
        uri.push_str(&format!("&digits={}", self.digits));
        uri.push_str(&format!("&period={}", self.period));

        if self.otp_type == OtpType::Hotp {
            uri.push_str(&format!("&counter={}", self.counter));
        }

        Ok(uri)
    }

    fn read_payload(input: &str, _config: &CodecConfig) -> PayloadResult<Self> {
        let rest = strip_scheme(input.trim(), SCHEME)
            .ok_or_else(|| missing_scheme(PayloadType::Otp, SCHEME))?;

        let captures = OTPAUTH_URI.captures(rest).ok_or_else(|| {
            PayloadError::malformed(
                error_codes::INVALID_URI,
                "Expected otpauth://{type}/{label}?{parameters}",
            )
        })?;
        let otp_type = captures.get(1).map_or("", |m| m.as_str());
        let label = captures.get(2).map_or("", |m| m.as_str());
        let query = captures.get(3).map_or("", |m| m.as_str());

        if label.is_empty() {
            return Err(PayloadError::malformed(
                error_codes::INVALID_URI,
                "otpauth URI has no account label",
            ));
        }

        // Label values first so explicit query parameters override them.
        let mut params = vec![("type".to_string(), otp_type.to_string())];
        let (label_issuer, label_account) = match label.split_once(':') {
            Some((issuer, account)) => (Some(issuer), account),
            None => (None, label),
        };
        if let Some(issuer) = label_issuer.filter(|issuer| !issuer.is_empty()) {
            params.push(("issuer".to_string(), decode_component(issuer)?));
        }
        if !label_account.is_empty() {
            params.push(("accountName".to_string(), decode_component(label_account)?));
        }
        params.extend(parse_query_string(query)?);

        let mut otp = OtpPayload::default();
        bind_fields(&mut otp, &OTP_FIELDS, params)?;
        Ok(otp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payloads::Payload;
    use crate::schema::{FieldType, RuleKind};

    fn sample() -> OtpPayload {
        OtpPayload::new("ACME Co", "john doe", "JBSWY3DPEHPK3PXP")
    }

    #[test]
    fn test_encode_totp_uri() {
        let uri = sample().encode().unwrap();
        assert_eq!(
            uri,
            "otpauth://totp/ACME%20Co:john%20doe?secret=JBSWY3DPEHPK3PXP&issuer=ACME%20Co&algorithm=SHA1&digits=6&period=30"
        );
    }

    #[test]
    fn test_encode_hotp_appends_counter() {
        let mut otp = sample().with_counter(42);
        otp.algorithm = Algorithm::Sha512;
        let uri = otp.encode().unwrap();
        assert!(uri.starts_with("otpauth://hotp/"));
        assert!(uri.contains("&algorithm=SHA512"));
        assert!(uri.ends_with("&period=30&counter=42"));
    }

    #[test]
    fn test_totp_never_emits_counter() {
        let mut otp = sample();
        otp.counter = 9;
        assert!(!otp.encode().unwrap().contains("counter"));
    }

    #[test]
    fn test_plain_secret_is_base32_encoded() {
        let mut otp = sample();
        otp.secret = Some("abc".to_string());
        assert!(otp.encode().unwrap().contains("?secret=MFRGG===&"));

        otp.secret = Some("MFRGG===".to_string());
        assert!(otp.encode().unwrap().contains("?secret=MFRGG===&"));
    }

    #[test]
    fn test_email_account_stays_unescaped() {
        let mut otp = sample();
        otp.account_name = Some("user@example.com".to_string());
        assert!(otp.encode().unwrap().contains("/ACME%20Co:user@example.com?"));
    }

    #[test]
    fn test_missing_secret_fails_validation() {
        let mut otp = sample();
        otp.secret = None;
        let err = otp.encode().unwrap_err();
        assert!(matches!(err, PayloadError::Validation(_)));
        assert_eq!(err.to_string(), "Secret is required.");
    }

    #[test]
    fn test_violations_follow_field_order() {
        let otp = OtpPayload {
            digits: 0,
            counter: -1,
            ..OtpPayload::default()
        };
        let err = otp.encode().unwrap_err();
        assert_eq!(
            err.to_string(),
            "AccountName is required. Issuer is required. Secret is required. \
             Digits must be greater than 0. Counter must be non-negative for HOTP."
        );
    }

    #[test]
    fn test_parse_totp_uri() {
        let otp = OtpPayload::parse(
            "otpauth://totp/ACME%20Co:john%20doe?secret=JBSWY3DPEHPK3PXP&issuer=ACME%20Co&algorithm=SHA256&digits=8&period=60",
        )
        .unwrap();
        assert_eq!(otp.issuer.as_deref(), Some("ACME Co"));
        assert_eq!(otp.account_name.as_deref(), Some("john doe"));
        assert_eq!(otp.secret.as_deref(), Some("JBSWY3DPEHPK3PXP"));
        assert_eq!(otp.otp_type, OtpType::Totp);
        assert_eq!(otp.algorithm, Algorithm::Sha256);
        assert_eq!(otp.digits, 8);
        assert_eq!(otp.period, 60);
    }

    #[test]
    fn test_parse_label_without_issuer() {
        let otp = OtpPayload::parse("otpauth://hotp/alice?secret=MFRGG===&counter=7").unwrap();
        assert_eq!(otp.account_name.as_deref(), Some("alice"));
        assert_eq!(otp.issuer, None);
        assert_eq!(otp.otp_type, OtpType::Hotp);
        assert_eq!(otp.counter, 7);
    }

    #[test]
    fn test_query_issuer_overrides_label() {
        let otp = OtpPayload::parse("otpauth://totp/Old:bob?secret=MFRGG===&issuer=New").unwrap();
        assert_eq!(otp.issuer.as_deref(), Some("New"));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        let err = OtpPayload::parse("https://example.com").unwrap_err();
        assert_eq!(err.code(), error_codes::INVALID_SCHEME);

        let err = OtpPayload::parse("otpauth://totp").unwrap_err();
        assert_eq!(err.code(), error_codes::INVALID_URI);

        let err = OtpPayload::parse("otpauth://totp/?secret=MFRGG===").unwrap_err();
        assert_eq!(err.code(), error_codes::INVALID_URI);
    }

    #[test]
    fn test_parse_unknown_algorithm_is_binding_error() {
        let err = OtpPayload::parse("otpauth://totp/a:b?secret=MFRGG===&algorithm=MD5").unwrap_err();
        match err {
            PayloadError::Binding { key, value, expected } => {
                assert_eq!(key, "algorithm");
                assert_eq!(value, "MD5");
                assert_eq!(expected, "Algorithm");
            }
            other => panic!("Expected binding error, got {:?}", other),
        }
    }

    #[test]
    fn test_failed_bind_keeps_previous_values() {
        let mut otp = sample();
        let err = otp.bind([("digits", "8"), ("type", "motp")]).unwrap_err();
        assert!(matches!(err, PayloadError::Binding { ref key, .. } if key == "type"));
        assert_eq!(otp, sample());
    }

    #[test]
    fn test_parse_rejects_undecodable_parameter() {
        let err = OtpPayload::parse("otpauth://totp/ACME:alice?secret=%FF&issuer=ACME").unwrap_err();
        assert_eq!(err.code(), error_codes::INVALID_ENCODING);
    }

    #[test]
    fn test_lowercase_base32_secret_is_not_reencoded() {
        let mut otp = sample();
        otp.secret = Some("jbswy3dpehpk3pxp".to_string());
        assert!(otp.encode().unwrap().contains("?secret=jbswy3dpehpk3pxp&"));
    }

    #[test]
    fn test_describe_fields_shares_rules() {
        let definitions = OtpPayload::default().describe_fields();
        let names: Vec<&str> = definitions.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["accountName", "issuer", "secret", "type", "algorithm", "digits", "period", "counter"]
        );

        let period = &definitions[6];
        assert_eq!(period.semantic_type, FieldType::Dropdown);
        assert_eq!(period.dropdown_options, vec!["15", "30", "60"]);
        assert_eq!(period.validation_rules[0].kind, RuleKind::Range);

        assert_eq!(definitions[3].dropdown_options, vec!["TOTP", "HOTP"]);
        assert_eq!(definitions[4].dropdown_options, vec!["SHA1", "SHA256", "SHA512"]);
        assert!(definitions[2].is_required());
    }
}
