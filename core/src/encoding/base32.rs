use data_encoding::{BASE32, BASE32_NOPAD};

/// Whether `candidate` already is RFC 4648 Base32 text, in either letter case.
pub fn is_base32(candidate: &str, accept_unpadded: bool) -> bool {
    let upper = candidate.to_ascii_uppercase();
    BASE32.decode(upper.as_bytes()).is_ok()
        || (accept_unpadded && BASE32_NOPAD.decode(upper.as_bytes()).is_ok())
}

/// **BASE32 SECRET NORMALIZATION**
///
/// Secrets that already decode as Base32 are reused unchanged, letter case
/// included; anything else is treated as raw UTF-8 and encoded (padded).
/// Callers may pass either form.
pub fn normalize_secret(secret: &str, accept_unpadded: bool) -> String {
    if is_base32(secret, accept_unpadded) {
        secret.to_string()
    } else {
        BASE32.encode(secret.as_bytes())
    }
}
