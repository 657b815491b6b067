//! Code39 (3 of 9).

use super::FormatEncoder;
use crate::checksum::{calculate_code39_checksum, code39_value};
use crate::core::encoded::EncodedBarcode;
use crate::core::format::Format;
use crate::errors::EncodingError;

/// 12-module patterns in [`crate::checksum::CODE39_CHARSET`] order.
const PATTERNS: [&str; 43] = [
    "101001101101", "110100101011", "101100101011", "110110010101", "101001101011",
    "110100110101", "101100110101", "101001011011", "110100101101", "101100101101",
    "110101001011", "101101001011", "110110100101", "101011001011", "110101100101",
    "101101100101", "101010011011", "110101001101", "101101001101", "101011001101",
    "110101010011", "101101010011", "110110101001", "101011010011", "110101101001",
    "101101101001", "101010110011", "110101011001", "101101011001", "101011011001",
    "110010101011", "100110101011", "110011010101", "100101101011", "110010110101",
    "100110110101", "100101011011", "110010101101", "100110101101", "100100100101",
    "100100101001", "100101001001", "101001001001",
];

/// `*` start/stop sentinel.
const SENTINEL: &str = "100101101101";

/// Code39 encoder.
///
/// Input is upper-cased before encoding. With `include_checksum` the
/// modulo-43 check character is appended to the data and the text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Code39Encoder {
    include_checksum: bool,
}

impl Code39Encoder {
    pub const fn new(include_checksum: bool) -> Self {
        Self { include_checksum }
    }

    pub fn include_checksum(&self) -> bool {
        self.include_checksum
    }
}

impl FormatEncoder for Code39Encoder {
    fn encode(&self, data: &str) -> Result<EncodedBarcode, EncodingError> {
        let format = Format::Code39;
        let mut text = data.to_uppercase();
        if text.is_empty() {
            return Err(EncodingError::EmptyInput { format });
        }

        let mut indices = Vec::with_capacity(text.len() + 1);
        for (position, ch) in text.chars().enumerate() {
            let index = code39_value(ch).ok_or(EncodingError::UnsupportedCharacter {
                format,
                ch,
                position,
            })?;
            indices.push(index);
        }

        if self.include_checksum {
            let check = calculate_code39_checksum(&text);
            indices.extend(code39_value(check));
            text.push(check);
        }

        let mut bars = String::with_capacity((indices.len() + 2) * 13);
        bars.push_str(SENTINEL);
        bars.push('0');
        for index in indices {
            bars.push_str(PATTERNS[index]);
            bars.push('0');
        }
        bars.push_str(SENTINEL);

        Ok(EncodedBarcode::new(bars, text, format))
    }

    /// Exact charset check; lower-case input is not valid as-is.
    fn validate(&self, data: &str) -> bool {
        !data.is_empty() && data.chars().all(|c| code39_value(c).is_some())
    }

    fn format(&self) -> Format {
        Format::Code39
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::CODE39_CHARSET;

    #[test]
    fn test_table_covers_charset() {
        assert_eq!(PATTERNS.len(), CODE39_CHARSET.len());
        assert!(PATTERNS.iter().all(|p| p.len() == 12));
    }

    #[test]
    fn test_encode_single_character() {
        let encoded = Code39Encoder::default().encode("A").unwrap();
        assert_eq!(
            encoded.bars,
            format!("{SENTINEL}0{}0{SENTINEL}", "110101001011")
        );
        assert_eq!(encoded.text, "A");
        assert_eq!(encoded.caption(), "*A*");
    }

    #[test]
    fn test_upper_cases_input() {
        let encoded = Code39Encoder::default().encode("hello").unwrap();
        assert_eq!(encoded.text, "HELLO");
        assert_eq!(encoded.bars.len(), 7 * 13 - 1);
    }

    #[test]
    fn test_checksum_lengthens_output() {
        let plain = Code39Encoder::new(false).encode("CODE39").unwrap();
        let checked = Code39Encoder::new(true).encode("CODE39").unwrap();
        assert!(checked.bars.len() > plain.bars.len());
        assert_eq!(checked.text, "CODE39W");
    }

    #[test]
    fn test_rejects_unsupported_character() {
        let err = Code39Encoder::default().encode("AB#C").unwrap_err();
        assert_eq!(
            err,
            EncodingError::UnsupportedCharacter {
                format: Format::Code39,
                ch: '#',
                position: 2
            }
        );
        assert!(Code39Encoder::default().encode("").is_err());
    }

    #[test]
    fn test_validate() {
        let encoder = Code39Encoder::default();
        assert!(encoder.validate("HELLO WORLD"));
        assert!(encoder.validate("-. $/+%"));
        assert!(!encoder.validate("hello"));
        assert!(!encoder.validate("A*B"));
        assert!(!encoder.validate(""));
    }
}
