//! Codabar.

use super::FormatEncoder;
use crate::core::encoded::EncodedBarcode;
use crate::core::format::Format;
use crate::errors::{ConfigurationError, EncodingError};

const CHARSET: &str = "0123456789-$:/.+ABCD";

/// 10-module patterns in [`CHARSET`] order.
const PATTERNS: [&str; 20] = [
    "1011011011", "1011011101", "1011101011", "1110110101", "1011010111", "1110101101",
    "1010110111", "1010111011", "1011101101", "1110101011", "1010101101", "1010110101",
    "1101010101", "1101011011", "1101101011", "1011011101", "1011010110", "1010110110",
    "1001010111", "1001011011",
];

fn is_guard(c: char) -> bool {
    matches!(c, 'A'..='D')
}

/// Codabar encoder.
///
/// Input is upper-cased. A missing start or stop letter is filled in with
/// the configured guard (default `A`); letters A-D may also appear inside.
#[derive(Debug, Clone, Copy)]
pub struct CodabarEncoder {
    start_stop: char,
}

impl Default for CodabarEncoder {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl CodabarEncoder {
    pub(crate) const DEFAULT: Self = Self { start_stop: 'A' };

    /// Encoder inserting `start_stop` when the input lacks guards.
    pub fn new(start_stop: char) -> Result<Self, ConfigurationError> {
        let start_stop = start_stop.to_ascii_uppercase();
        if !is_guard(start_stop) {
            return Err(ConfigurationError::InvalidSetting {
                key: "codabar.start_stop".to_string(),
                reason: format!("'{}' is not one of A, B, C, D", start_stop),
            });
        }
        Ok(Self { start_stop })
    }

    pub fn start_stop(&self) -> char {
        self.start_stop
    }

    /// Upper-cased input with guards in place.
    fn normalize(&self, data: &str) -> Result<String, EncodingError> {
        let format = Format::Codabar;
        let mut code = data.to_uppercase();
        if code.is_empty() {
            return Err(EncodingError::EmptyInput { format });
        }

        if !code.starts_with(is_guard) {
            code.insert(0, self.start_stop);
        }
        if !code.ends_with(is_guard) {
            code.push(self.start_stop);
        }

        let length = code.chars().count();
        if length < 3 {
            return Err(EncodingError::InvalidLength {
                format,
                expected: "at least one character between start and stop",
                actual: length,
            });
        }
        Ok(code)
    }
}

impl FormatEncoder for CodabarEncoder {
    fn encode(&self, data: &str) -> Result<EncodedBarcode, EncodingError> {
        let format = Format::Codabar;
        let code = self.normalize(data)?;

        let mut bars = String::with_capacity(code.len() * 11);
        for (position, ch) in code.chars().enumerate() {
            let index = CHARSET.find(ch).ok_or(EncodingError::UnsupportedCharacter {
                format,
                ch,
                position,
            })?;
            if position > 0 {
                bars.push('0');
            }
            bars.push_str(PATTERNS[index]);
        }

        Ok(EncodedBarcode::new(bars, code, format))
    }

    /// Guards must already be present; only `encode` inserts them.
    fn validate(&self, data: &str) -> bool {
        let code = data.to_uppercase();
        code.chars().count() >= 3
            && code.starts_with(is_guard)
            && code.ends_with(is_guard)
            && code.chars().all(|c| CHARSET.contains(c))
    }

    fn format(&self) -> Format {
        Format::Codabar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table() {
        assert_eq!(PATTERNS.len(), CHARSET.len());
        assert!(PATTERNS.iter().all(|p| p.len() == 10));
    }

    #[test]
    fn test_keeps_existing_guards() {
        let encoded = CodabarEncoder::default().encode("A123456A").unwrap();
        assert_eq!(encoded.text, "A123456A");
        assert_eq!(encoded.bars.len(), 8 * 10 + 7);
        assert!(encoded.bars.starts_with("10110101100"));
        assert!(encoded.bars.ends_with("01011010110"));
    }

    #[test]
    fn test_inserts_missing_guards() {
        let encoded = CodabarEncoder::default().encode("123456").unwrap();
        assert_eq!(encoded.text, "A123456A");

        let encoded = CodabarEncoder::new('c').unwrap().encode("123456").unwrap();
        assert_eq!(encoded.text, "C123456C");

        let encoded = CodabarEncoder::default().encode("b123").unwrap();
        assert_eq!(encoded.text, "B123A");
    }

    #[test]
    fn test_mixed_guards_and_specials() {
        let encoder = CodabarEncoder::default();
        for sample in ["B123-456C", "C123.456D", "C123:456C", "D123/456D", "A1$2+3B"] {
            let encoded = encoder.encode(sample).unwrap();
            assert_eq!(encoded.text, sample);
        }
    }

    #[test]
    fn test_rejects_bad_input() {
        let encoder = CodabarEncoder::default();
        assert!(matches!(
            encoder.encode(""),
            Err(EncodingError::EmptyInput { .. })
        ));
        assert!(matches!(
            encoder.encode("AB"),
            Err(EncodingError::InvalidLength { actual: 2, .. })
        ));
        assert!(matches!(
            encoder.encode("A12E4A"),
            Err(EncodingError::UnsupportedCharacter { ch: 'E', position: 3, .. })
        ));
    }

    #[test]
    fn test_invalid_guard_setting() {
        assert!(CodabarEncoder::new('E').is_err());
        assert_eq!(CodabarEncoder::new('d').unwrap().start_stop(), 'D');
    }

    #[test]
    fn test_validate() {
        let encoder = CodabarEncoder::default();
        assert!(encoder.validate("A123456A"));
        assert!(encoder.validate("B123-456C"));
        assert!(encoder.validate("a123d"));
        assert!(encoder.validate("A1B"));
        assert!(!encoder.validate(""));
        assert!(!encoder.validate("A"));
        assert!(!encoder.validate("AB"));
        assert!(!encoder.validate("A12#4A"));
    }

    #[test]
    fn test_validate_requires_guards() {
        let encoder = CodabarEncoder::default();
        assert!(!encoder.validate("123456"));
        assert!(!encoder.validate("A123456"));
        assert!(!encoder.validate("123456D"));
        // encode still fills them in
        assert_eq!(encoder.encode("123456").unwrap().text, "A123456A");
    }
}
