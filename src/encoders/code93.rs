//! Code93 with its mandatory C and K check characters.

use super::FormatEncoder;
use crate::checksum::{CODE93_SYMBOL_COUNT, calculate_code93_checksum, code39_value};
use crate::core::encoded::EncodedBarcode;
use crate::core::format::Format;
use crate::errors::EncodingError;

/// 9-module patterns by symbol value. 0..43 follow the Code39 charset order,
/// 43..47 are the shift symbols ($) (%) (/) (+), which only ever appear as
/// check characters here.
const PATTERNS: [&str; CODE93_SYMBOL_COUNT] = [
    "100010100", "101001000", "101000100", "101000010", "100101000",
    "100100100", "100100010", "101010000", "100010010", "100001010",
    "110101000", "110100100", "110100010", "110010100", "110010010",
    "110001010", "101101000", "101100100", "101100010", "100110100",
    "100011010", "101011000", "101001100", "101000110", "100101100",
    "100010110", "110110100", "110110010", "110101100", "110100110",
    "110010110", "110011010", "101101100", "101100110", "100110110",
    "100111010", "100101110", "111010100", "111010010", "111001010",
    "101101110", "101110110", "110101110", "100100110", "111011010",
    "111010110", "100110010",
];

/// `*` start/stop.
const SENTINEL: &str = "101011110";

/// Code93 encoder. Upper-cases input; the check characters are encoded but
/// left out of the text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Code93Encoder;

impl Code93Encoder {
    pub fn new() -> Self {
        Self
    }
}

impl FormatEncoder for Code93Encoder {
    fn encode(&self, data: &str) -> Result<EncodedBarcode, EncodingError> {
        let format = Format::Code93;
        let text = data.to_uppercase();
        if text.is_empty() {
            return Err(EncodingError::EmptyInput { format });
        }

        let mut values = Vec::with_capacity(text.len() + 2);
        for (position, ch) in text.chars().enumerate() {
            let value = code39_value(ch).ok_or(EncodingError::UnsupportedCharacter {
                format,
                ch,
                position,
            })?;
            values.push(value);
        }
        let [c, k] = calculate_code93_checksum(&text);
        values.push(c as usize);
        values.push(k as usize);

        let mut bars = String::with_capacity((values.len() + 2) * 9 + 1);
        bars.push_str(SENTINEL);
        for value in values {
            bars.push_str(PATTERNS[value]);
        }
        bars.push_str(SENTINEL);
        bars.push('1');

        Ok(EncodedBarcode::new(bars, text, format))
    }

    /// Exact charset check, same as Code39.
    fn validate(&self, data: &str) -> bool {
        !data.is_empty() && data.chars().all(|c| code39_value(c).is_some())
    }

    fn format(&self) -> Format {
        Format::Code93
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table() {
        assert!(PATTERNS.iter().all(|p| p.len() == 9));
        let mut unique = PATTERNS.to_vec();
        unique.push(SENTINEL);
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), CODE93_SYMBOL_COUNT + 1);
    }

    #[test]
    fn test_encode_with_check_characters() {
        let encoded = Code93Encoder.encode("TEST93").unwrap();
        assert_eq!(encoded.text, "TEST93");
        assert_eq!(encoded.bars.len(), 6 * 9 + 37);
        // C = 41 ('+'), K = 6
        let tail = format!("{}{}{}1", PATTERNS[41], PATTERNS[6], SENTINEL);
        assert!(encoded.bars.ends_with(&tail));
        assert!(encoded.bars.starts_with(SENTINEL));
    }

    #[test]
    fn test_upper_cases_and_hides_checks() {
        let encoded = Code93Encoder.encode("abc").unwrap();
        assert_eq!(encoded.text, "ABC");
        assert!(encoded.bars.ends_with('1'));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(
            Code93Encoder.encode(""),
            Err(EncodingError::EmptyInput { .. })
        ));
        assert!(matches!(
            Code93Encoder.encode("AB_C"),
            Err(EncodingError::UnsupportedCharacter { ch: '_', position: 2, .. })
        ));
    }

    #[test]
    fn test_validate() {
        assert!(Code93Encoder.validate("CODE 93"));
        assert!(!Code93Encoder.validate("code93"));
        assert!(!Code93Encoder.validate(""));
        assert!(!Code93Encoder.validate("\u{e9}"));
    }
}
