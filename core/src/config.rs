//! # CODEC CONFIGURATION
//!
//! Runtime knobs shared by every payload kind. Defaults match what common
//! scanners accept, so most callers never build one explicitly.

use crate::errors::{error_codes, PayloadError, PayloadResult};
use serde::{Deserialize, Serialize};

/// Byte-mode capacity of the largest QR symbol (version 40, level L).
pub const QR_BYTE_CAPACITY: usize = 2953;

/// **CODEC CONFIGURATION**
///
/// **PURPOSE**: Limits and leniency switches for parse/encode operations.
/// **USAGE**: Pass to the `*_with` variants; the plain variants use `Default`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// **MAXIMUM INPUT LENGTH** - Encoded payloads longer than this are rejected on parse
    pub max_input_len: usize,

    /// **UNPADDED BASE32** - Treat unpadded Base32 secrets as already encoded
    pub accept_unpadded_base32: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_input_len: QR_BYTE_CAPACITY,
            accept_unpadded_base32: true,
        }
    }
}

impl CodecConfig {
    pub fn from_json(json: &str) -> PayloadResult<Self> {
        serde_json::from_str(json).map_err(|e| PayloadError::Config {
            message: format!("Invalid codec configuration: {}", e),
        })
    }

    /// Reject input that could never have come out of a QR symbol.
    pub fn check_input(&self, input: &str) -> PayloadResult<()> {
        if input.len() > self.max_input_len {
            return Err(PayloadError::malformed(
                error_codes::INPUT_TOO_LARGE,
                format!(
                    "Payload size {} exceeds limit {}",
                    input.len(),
                    self.max_input_len
                ),
            ));
        }
        Ok(())
    }
}
