use crate::constants::{FAVICON_BASE64, ICO_SIGNATURE, PNG_SIGNATURE};
use crate::error::ProduceError;
use base64::{Engine as _, engine::general_purpose};

/// Image container recognized from the leading bytes of a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconFormat {
    Png,
    Ico,
}

impl IconFormat {
    /// Looks at the magic bytes only; nothing past the signature is checked.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(&PNG_SIGNATURE) {
            Some(IconFormat::Png)
        } else if bytes.starts_with(&ICO_SIGNATURE) {
            Some(IconFormat::Ico)
        } else {
            None
        }
    }
}

impl std::fmt::Display for IconFormat {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            IconFormat::Png => f.write_str("png"),
            IconFormat::Ico => f.write_str("ico"),
        }
    }
}

/// Decode wrapped base64 text. ASCII whitespace is skipped, anything else
/// outside the standard alphabet is an error.
pub fn decode_payload(text: &str) -> Result<Vec<u8>, ProduceError> {
    let compact: Vec<u8> = text
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    let bytes = general_purpose::STANDARD.decode(compact)?;
    Ok(bytes)
}

/// The favicon baked into the binary.
pub fn embedded_payload() -> Result<Vec<u8>, ProduceError> {
    decode_payload(FAVICON_BASE64)
}
