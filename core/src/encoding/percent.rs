use crate::errors::{error_codes, PayloadError, PayloadResult};
use crate::validation::is_email_address;

/// RFC 3986 percent-encoding of everything outside the unreserved set.
pub fn encode_component(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

pub fn decode_component(encoded: &str) -> PayloadResult<String> {
    urlencoding::decode(encoded)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| {
            PayloadError::malformed(
                error_codes::INVALID_ENCODING,
                format!("Invalid percent-encoding in '{}': {}", encoded, e),
            )
        })
}

/// Account names that are valid mailbox addresses are emitted verbatim;
/// everything else is percent-encoded. Blank names encode to nothing.
pub fn encode_account_name(account: &str) -> String {
    if account.trim().is_empty() {
        String::new()
    } else if is_email_address(account) {
        account.to_string()
    } else {
        encode_component(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_component_reserved_characters() {
        assert_eq!(encode_component("ACME Co"), "ACME%20Co");
        assert_eq!(encode_component("a:b/c?d"), "a%3Ab%2Fc%3Fd");
        assert_eq!(encode_component("safe-_.~"), "safe-_.~");
    }

    #[test]
    fn test_account_name_email_stays_verbatim() {
        assert_eq!(encode_account_name("user@example.com"), "user@example.com");
        assert_eq!(encode_account_name("john doe"), "john%20doe");
        assert_eq!(encode_account_name("   "), "");
    }

    #[test]
    fn test_decode_component() {
        assert_eq!(decode_component("john%20doe").unwrap(), "john doe");
        assert_eq!(decode_component("plain").unwrap(), "plain");
        let err = decode_component("%FF").unwrap_err();
        assert_eq!(err.code(), error_codes::INVALID_ENCODING);
    }
}
