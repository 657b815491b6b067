//! Code128 with automatic code set selection.
//!
//! Runs of digits are packed two per symbol in code set C; everything else
//! goes through set B (printable ASCII) or set A (control characters).

use super::FormatEncoder;
use crate::checksum::calculate_code128_checksum;
use crate::core::encoded::EncodedBarcode;
use crate::core::format::Format;
use crate::errors::EncodingError;

/// Module patterns indexed by symbol value: 0..=102 data, 103..=105 start
/// codes, 106 stop (13 modules including the termination bar).
const PATTERNS: [&str; 107] = [
    "11011001100", "11001101100", "11001100110", "10010011000", "10010001100",
    "10001001100", "10011001000", "10011000100", "10001100100", "11001001000",
    "11001000100", "11000100100", "10110011100", "10011011100", "10011001110",
    "10111001100", "10011101100", "10011100110", "11001110010", "11001011100",
    "11001001110", "11011100100", "11001110100", "11101101110", "11101001100",
    "11100101100", "11100100110", "11101100100", "11100110100", "11100110010",
    "11011011000", "11011000110", "11000110110", "10100011000", "10001011000",
    "10001000110", "10110001000", "10001101000", "10001100010", "11010001000",
    "11000101000", "11000100010", "10110111000", "10110001110", "10001101110",
    "10111011000", "10111000110", "10001110110", "11101110110", "11010001110",
    "11000101110", "11011101000", "11011100010", "11011101110", "11101011000",
    "11101000110", "11100010110", "11101101000", "11101100010", "11100011010",
    "11101111010", "11001000010", "11110001010", "10100110000", "10100001100",
    "10010110000", "10010000110", "10000101100", "10000100110", "10110010000",
    "10110000100", "10011010000", "10011000010", "10000110100", "10000110010",
    "11000010010", "11001010000", "11110111010", "11000010100", "10001111010",
    "10100111100", "10010111100", "10010011110", "10111100100", "10011110100",
    "10011110010", "11110100100", "11110010100", "11110010010", "11011011110",
    "11011110110", "11110110110", "10101111000", "10100011110", "10001011110",
    "10111101000", "10111100010", "11110101000", "11110100010", "10111011110",
    "10111101110", "11101011110", "11110101110", "11010000100", "11010010000",
    "11010011100", "1100011101011",
];

pub const START_A: u8 = 103;
pub const START_B: u8 = 104;
pub const START_C: u8 = 105;
pub const STOP: u8 = 106;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CodeSet {
    A,
    B,
    C,
}

impl CodeSet {
    fn start_code(self) -> u8 {
        match self {
            CodeSet::A => START_A,
            CodeSet::B => START_B,
            CodeSet::C => START_C,
        }
    }

    /// Value that switches into this set from another one.
    fn switch_code(self) -> u8 {
        match self {
            CodeSet::A => 101,
            CodeSet::B => 100,
            CodeSet::C => 99,
        }
    }

    /// Preferred single-character set for `byte`.
    fn for_byte(byte: u8) -> Self {
        if byte < 32 { CodeSet::A } else { CodeSet::B }
    }

    fn accepts(self, byte: u8) -> bool {
        match self {
            CodeSet::A => byte < 96,
            CodeSet::B => (32..=127).contains(&byte),
            CodeSet::C => false,
        }
    }

    fn value(self, byte: u8) -> u8 {
        match self {
            CodeSet::A if byte < 32 => byte + 64,
            _ => byte - 32,
        }
    }
}

/// True when set C should take the digit pair at `pos`: at least four
/// digits follow, or exactly the last two characters are digits.
fn digit_pair_at(bytes: &[u8], pos: usize) -> bool {
    let remaining = bytes.len() - pos;
    if remaining < 2 || !bytes[pos].is_ascii_digit() || !bytes[pos + 1].is_ascii_digit() {
        return false;
    }
    remaining == 2 || (remaining >= 4 && bytes[pos + 2..pos + 4].iter().all(u8::is_ascii_digit))
}

/// Code128 encoder. Accepts any non-empty ASCII string.
#[derive(Debug, Clone, Copy, Default)]
pub struct Code128Encoder;

impl Code128Encoder {
    pub fn new() -> Self {
        Self
    }

    /// Symbol values for `data`: start code, switches and data, without the
    /// check value or stop code.
    pub fn symbol_values(&self, data: &str) -> Result<Vec<u8>, EncodingError> {
        let format = Format::Code128;
        if data.is_empty() {
            return Err(EncodingError::EmptyInput { format });
        }
        if let Some((position, ch)) = data.chars().enumerate().find(|(_, c)| !c.is_ascii()) {
            return Err(EncodingError::UnsupportedCharacter {
                format,
                ch,
                position,
            });
        }

        let bytes = data.as_bytes();
        let mut values = Vec::with_capacity(bytes.len() + 2);
        let mut current: Option<CodeSet> = None;
        let mut i = 0;

        while i < bytes.len() {
            if digit_pair_at(bytes, i) {
                enter(&mut values, &mut current, CodeSet::C);
                values.push((bytes[i] - b'0') * 10 + (bytes[i + 1] - b'0'));
                i += 2;
                continue;
            }

            let byte = bytes[i];
            let set = match current {
                Some(set) if set.accepts(byte) => set,
                _ => CodeSet::for_byte(byte),
            };
            enter(&mut values, &mut current, set);
            values.push(set.value(byte));
            i += 1;
        }

        Ok(values)
    }
}

/// Emits a start or switch code when `next` differs from the active set.
fn enter(values: &mut Vec<u8>, current: &mut Option<CodeSet>, next: CodeSet) {
    match *current {
        Some(set) if set == next => return,
        Some(_) => values.push(next.switch_code()),
        None => values.push(next.start_code()),
    }
    *current = Some(next);
}

impl FormatEncoder for Code128Encoder {
    fn encode(&self, data: &str) -> Result<EncodedBarcode, EncodingError> {
        let values = self.symbol_values(data)?;
        let check = calculate_code128_checksum(&values);

        let mut bars = String::with_capacity((values.len() + 2) * 11 + 2);
        for &value in &values {
            bars.push_str(PATTERNS[value as usize]);
        }
        bars.push_str(PATTERNS[check as usize]);
        bars.push_str(PATTERNS[STOP as usize]);

        Ok(EncodedBarcode::new(bars, data.to_string(), Format::Code128))
    }

    fn validate(&self, data: &str) -> bool {
        !data.is_empty() && data.is_ascii()
    }

    fn format(&self) -> Format {
        Format::Code128
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(data: &str) -> Vec<u8> {
        Code128Encoder.symbol_values(data).unwrap()
    }

    #[test]
    fn test_pattern_table() {
        assert_eq!(PATTERNS.len(), 107);
        assert!(PATTERNS[..106].iter().all(|p| p.len() == 11));
        assert_eq!(PATTERNS[STOP as usize], "1100011101011");
    }

    #[test]
    fn test_code_b_text() {
        assert_eq!(values("AB"), vec![START_B, 33, 34]);
        let encoded = Code128Encoder.encode("AB").unwrap();
        let expected = [
            PATTERNS[104],
            PATTERNS[33],
            PATTERNS[34],
            PATTERNS[102],
            PATTERNS[106],
        ]
        .concat();
        assert_eq!(encoded.bars, expected);
        assert_eq!(encoded.text, "AB");
    }

    #[test]
    fn test_code_c_digits() {
        assert_eq!(values("12345678"), vec![START_C, 12, 34, 56, 78]);
        assert_eq!(values("12"), vec![START_C, 12]);
    }

    #[test]
    fn test_digit_run_is_shorter() {
        let digits = Code128Encoder.encode("12345678").unwrap();
        let letters = Code128Encoder.encode("ABCDEFGH").unwrap();
        assert!(digits.bars.len() < letters.bars.len());
        assert_eq!(digits.bars.len(), 7 * 11 + 2);
    }

    #[test]
    fn test_switches_into_code_c() {
        assert_eq!(values("A1234"), vec![START_B, 33, 99, 12, 34]);
        // three digits are not worth a switch until the final pair
        assert_eq!(values("123"), vec![START_B, 17, 99, 23]);
        assert_eq!(values("12A"), vec![START_B, 17, 18, 33]);
    }

    #[test]
    fn test_switches_out_of_code_c() {
        assert_eq!(values("1234A"), vec![START_C, 12, 34, 100, 33]);
        assert_eq!(values("1234\n"), vec![START_C, 12, 34, 101, 74]);
    }

    #[test]
    fn test_control_characters_use_code_a() {
        assert_eq!(values("\x01A"), vec![START_A, 65, 33]);
        assert_eq!(values("a\x01"), vec![START_B, 65, 101, 65]);
        assert_eq!(values("\x01a"), vec![START_A, 65, 100, 65]);
    }

    #[test]
    fn test_rejects_non_ascii() {
        let err = Code128Encoder.encode("ab\u{e9}").unwrap_err();
        assert_eq!(
            err,
            EncodingError::UnsupportedCharacter {
                format: Format::Code128,
                ch: '\u{e9}',
                position: 2
            }
        );
        assert!(matches!(
            Code128Encoder.encode(""),
            Err(EncodingError::EmptyInput { .. })
        ));
    }

    #[test]
    fn test_validate() {
        assert!(Code128Encoder.validate("Hello, World!"));
        assert!(Code128Encoder.validate("\x7f"));
        assert!(!Code128Encoder.validate(""));
        assert!(!Code128Encoder.validate("caf\u{e9}"));
    }
}
