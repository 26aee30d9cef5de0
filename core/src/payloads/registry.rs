//! Static registry mapping each [`PayloadType`] to its constructors, for callers
//! that only learn the kind at runtime.

use crate::config::CodecConfig;
use crate::errors::PayloadResult;
use crate::payloads::{
    EmailPayload, OtpPayload, Payload, PayloadKind, PayloadType, PhonePayload, SmsPayload,
    TextPayload, UrlPayload, WifiPayload,
};

type ParseFn = fn(&str, &CodecConfig) -> PayloadResult<Box<dyn Payload>>;

struct RegistryEntry {
    kind: PayloadType,
    /// Scheme prefixes used by `detect`, matched case-insensitively.
    prefixes: &'static [&'static str],
    parse: ParseFn,
    empty: fn() -> Box<dyn Payload>,
}

fn parse_boxed<K: PayloadKind>(input: &str, config: &CodecConfig) -> PayloadResult<Box<dyn Payload>> {
    Ok(Box::new(K::parse_with(input, config)?))
}

fn empty_boxed<K: PayloadKind>() -> Box<dyn Payload> {
    Box::new(K::default())
}

// Detection walks this table in order; Text has no prefix and must stay last.
static REGISTRY: [RegistryEntry; 7] = [
    RegistryEntry {
        kind: PayloadType::Otp,
        prefixes: &["otpauth://"],
        parse: parse_boxed::<OtpPayload>,
        empty: empty_boxed::<OtpPayload>,
    },
    RegistryEntry {
        kind: PayloadType::Wifi,
        prefixes: &["WIFI:"],
        parse: parse_boxed::<WifiPayload>,
        empty: empty_boxed::<WifiPayload>,
    },
    RegistryEntry {
        kind: PayloadType::Email,
        prefixes: &["mailto:"],
        parse: parse_boxed::<EmailPayload>,
        empty: empty_boxed::<EmailPayload>,
    },
    RegistryEntry {
        kind: PayloadType::Phone,
        prefixes: &["tel:"],
        parse: parse_boxed::<PhonePayload>,
        empty: empty_boxed::<PhonePayload>,
    },
    RegistryEntry {
        kind: PayloadType::Sms,
        prefixes: &["SMSTO:"],
        parse: parse_boxed::<SmsPayload>,
        empty: empty_boxed::<SmsPayload>,
    },
    RegistryEntry {
        kind: PayloadType::Url,
        prefixes: &["http://", "https://"],
        parse: parse_boxed::<UrlPayload>,
        empty: empty_boxed::<UrlPayload>,
    },
    RegistryEntry {
        kind: PayloadType::Text,
        prefixes: &[],
        parse: parse_boxed::<TextPayload>,
        empty: empty_boxed::<TextPayload>,
    },
];

fn entry(kind: PayloadType) -> &'static RegistryEntry {
    REGISTRY
        .iter()
        .find(|entry| entry.kind == kind)
        .unwrap_or(&REGISTRY[REGISTRY.len() - 1])
}

fn has_prefix(input: &str, prefix: &str) -> bool {
    input
        .get(..prefix.len())
        .map_or(false, |head| head.eq_ignore_ascii_case(prefix))
}

/// An empty record of `kind`, ready to be bound and encoded.
pub fn new_payload(kind: PayloadType) -> Box<dyn Payload> {
    (entry(kind).empty)()
}

pub fn parse_payload(kind: PayloadType, input: &str) -> PayloadResult<Box<dyn Payload>> {
    parse_payload_with(kind, input, &CodecConfig::default())
}

pub fn parse_payload_with(
    kind: PayloadType,
    input: &str,
    config: &CodecConfig,
) -> PayloadResult<Box<dyn Payload>> {
    (entry(kind).parse)(input, config)
}

/// Guess the kind of an encoded payload from its scheme prefix. Anything
/// unrecognised is plain text.
pub fn detect(input: &str) -> PayloadType {
    let input = input.trim_start();
    REGISTRY
        .iter()
        .find(|entry| entry.prefixes.iter().any(|prefix| has_prefix(input, prefix)))
        .map_or(PayloadType::Text, |entry| entry.kind)
}

pub fn parse_any(input: &str) -> PayloadResult<Box<dyn Payload>> {
    parse_any_with(input, &CodecConfig::default())
}

pub fn parse_any_with(input: &str, config: &CodecConfig) -> PayloadResult<Box<dyn Payload>> {
    let kind = detect(input);
    log::debug!("detected {} payload", kind);
    parse_payload_with(kind, input, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::error_codes;

    #[test]
    fn test_every_kind_is_registered() {
        for kind in PayloadType::ALL {
            assert_eq!(entry(kind).kind, kind);
            assert_eq!(new_payload(kind).payload_type(), kind);
        }
    }

    #[test]
    fn test_detect_by_prefix() {
        assert_eq!(detect("otpauth://totp/a:b?secret=MFRGG==="), PayloadType::Otp);
        assert_eq!(detect(r#"wifi:S:\"x\";T:WPA;;"#), PayloadType::Wifi);
        assert_eq!(detect("mailto:a@example.com"), PayloadType::Email);
        assert_eq!(detect("tel:+15550100"), PayloadType::Phone);
        assert_eq!(detect("SMSTO:5550100:hi"), PayloadType::Sms);
        assert_eq!(detect("HTTPS://example.com"), PayloadType::Url);
        assert_eq!(detect("just some words"), PayloadType::Text);
        assert_eq!(detect(""), PayloadType::Text);
    }

    #[test]
    fn test_parse_any_dispatches() {
        let payload = parse_any(r#"WIFI:S:\"home\";T:WPA;P:secret;;"#).unwrap();
        assert_eq!(payload.payload_type(), PayloadType::Wifi);
        assert_eq!(payload.to_json()["ssid"], "home");
    }

    #[test]
    fn test_parse_payload_with_wrong_kind() {
        let err = parse_payload(PayloadType::Otp, "tel:123").unwrap_err();
        assert_eq!(err.code(), error_codes::INVALID_SCHEME);
    }

    #[test]
    fn test_parse_respects_input_limit() {
        let config = CodecConfig {
            max_input_len: 8,
            ..CodecConfig::default()
        };
        let err = parse_any_with("https://example.com", &config).unwrap_err();
        assert_eq!(err.code(), error_codes::INPUT_TOO_LARGE);
    }
}
