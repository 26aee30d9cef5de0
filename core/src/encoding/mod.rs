//! # ESCAPING AND ENCODING PRIMITIVES
//!
//! Kind-specific string transformations shared by the payload codecs:
//!
//! 1. **DELIMITED ESCAPING** - `\"`-enveloped, `;`-escaped values (Wi-Fi)
//! 2. **URI COMPONENTS** - RFC 3986 percent-encoding (OTP labels, mailto)
//! 3. **BASE32 SECRETS** - RFC 4648 normalization of shared secrets

pub mod base32;
pub mod escape;
pub mod percent;

pub use base32::normalize_secret;
pub use escape::{escape_delimited, find_unescaped, unescape_delimited};
pub use percent::{decode_component, encode_account_name, encode_component};
