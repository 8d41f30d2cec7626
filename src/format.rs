//! Text representations of a secret at the I/O boundary

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use zeroize::Zeroizing;

use crate::error::{Error, Result};

/// How a secret is written on the command line or printed back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum SecretFormat {
    /// Hexadecimal, optionally prefixed with `0x`
    #[default]
    Hex,
    /// Standard base64 with padding
    Base64,
    /// UTF-8 text, taken as is
    Utf8,
}

impl SecretFormat {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Base64 => "base64",
            Self::Utf8 => "utf8",
        }
    }
}

impl std::fmt::Display for SecretFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Decodes secret text into bytes
///
/// Surrounding whitespace is trimmed. Hex input may carry a `0x`/`0X` prefix.
///
/// # Errors
/// Returns [`Error::InvalidSecretEncoding`] if the text does not match `format`
pub fn decode_secret(text: &str, format: SecretFormat) -> Result<Zeroizing<Vec<u8>>> {
    let text = text.trim();
    let invalid = |reason: String| Error::InvalidSecretEncoding {
        format: format.name(),
        reason,
    };

    let bytes = match format {
        SecretFormat::Hex => {
            let digits = text
                .strip_prefix("0x")
                .or_else(|| text.strip_prefix("0X"))
                .unwrap_or(text);
            hex::decode(digits).map_err(|e| invalid(e.to_string()))?
        }
        SecretFormat::Base64 => STANDARD.decode(text).map_err(|e| invalid(e.to_string()))?,
        SecretFormat::Utf8 => text.as_bytes().to_vec(),
    };
    Ok(Zeroizing::new(bytes))
}

/// Renders secret bytes as text
///
/// # Errors
/// Returns [`Error::InvalidSecretEncoding`] if `format` is UTF-8 and the bytes
/// are not valid UTF-8
pub fn encode_secret(secret: &[u8], format: SecretFormat) -> Result<Zeroizing<String>> {
    let text = match format {
        SecretFormat::Hex => format!("0x{}", hex::encode(secret)),
        SecretFormat::Base64 => STANDARD.encode(secret),
        SecretFormat::Utf8 => std::str::from_utf8(secret)
            .map_err(|e| Error::InvalidSecretEncoding {
                format: format.name(),
                reason: e.to_string(),
            })?
            .to_owned(),
    };
    Ok(Zeroizing::new(text))
}
