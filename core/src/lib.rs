//! # QR PAYLOAD CORE LIBRARY
//!
//! **STRUCTURED QR CONTENT CODECS**
//!
//! **ARCHITECTURE**: Each payload kind is a typed record plus a declarative field
//! table; binding, validation and form introspection are generic over that table
//! **GUARANTEE**: `encode` never emits a payload for a record that fails validation
//! **COMPATIBILITY**: Bit-exact `otpauth://` and `WIFI:` wire formats
//!
//! ```rust
//! use qr_payload::api::*;
//!
//! let wifi = WifiPayload::new("home", "hunter22", WifiSecurity::Wpa);
//! assert_eq!(wifi.encode().unwrap(), r#"WIFI:S:\"home\";T:WPA;P:hunter22;;"#);
//!
//! let otp = OtpPayload::parse("otpauth://totp/ACME:alice?secret=MFRGG===").unwrap();
//! assert_eq!(otp.issuer.as_deref(), Some("ACME"));
//! ```

pub mod api;
pub mod binding;
pub mod config;
pub mod encoding;
pub mod errors;
pub mod payloads;
pub mod schema;
pub mod validation;
