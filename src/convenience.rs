//! One-call helpers over the built-in encoders.
//!
//! Detection and generation share a default [`BarcodeGenerator`] that is
//! built on first use. Anything needing custom encoders or settings should
//! construct its own registry and generator instead.

use std::sync::OnceLock;

use crate::core::encoded::EncodedBarcode;
use crate::core::format::Format;
use crate::encoders::builtin_encoder;
use crate::errors::{BarcodeError, EncodingError};
use crate::generator::BarcodeGenerator;

fn default_generator() -> &'static BarcodeGenerator {
    static GENERATOR: OnceLock<BarcodeGenerator> = OnceLock::new();
    GENERATOR.get_or_init(BarcodeGenerator::default)
}

/// Encodes `content` as `format`.
///
/// # Example
/// ```
/// use barcodec::{Format, encode};
///
/// let encoded = encode("690123456789", Format::Ean13).unwrap();
/// assert_eq!(encoded.text, "6901234567892");
/// ```
pub fn encode(content: &str, format: Format) -> Result<EncodedBarcode, EncodingError> {
    builtin_encoder(format).encode(content)
}

/// Whether `content` is valid for `format`. Never fails.
pub fn validate(content: &str, format: Format) -> bool {
    builtin_encoder(format).validate(content)
}

/// First format of the detection cascade that accepts `content`.
///
/// # Example
/// ```
/// use barcodec::{Format, detect_format};
///
/// assert_eq!(detect_format("1234567890128"), Some(Format::Ean13));
/// assert_eq!(detect_format(""), None);
/// ```
pub fn detect_format(content: &str) -> Option<Format> {
    default_generator().detector().detect(content)
}

/// Every format that accepts `content`, in canonical order.
pub fn detect_all_formats(content: &str) -> Vec<Format> {
    default_generator().detector().detect_all(content)
}

/// Encodes `content`, auto-detecting the format when `format` is `None`.
pub fn generate(content: &str, format: Option<Format>) -> Result<EncodedBarcode, BarcodeError> {
    default_generator().generate(content, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_and_validate() {
        assert_eq!(encode("1234567", Format::Ean8).unwrap().text, "12345670");
        assert!(validate("6901234567892", Format::Ean13));
        assert!(!validate("6901234567891", Format::Ean13));
    }

    #[test]
    fn test_detect() {
        assert_eq!(detect_format("1234567890128"), Some(Format::Ean13));
        assert!(detect_all_formats("1234567890128").contains(&Format::Code128));
    }

    #[test]
    fn test_generate() {
        let encoded = generate("HELLO", None).unwrap();
        assert_eq!(encoded.format, Format::Code39);
        assert!(generate("", None).is_err());
    }
}
