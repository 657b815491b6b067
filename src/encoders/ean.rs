//! EAN-13 and EAN-8.
//!
//! ```text
//! EAN-13:  101 | 6 digits (L/G by first digit) | 01010 | 6 digits (R) | 101
//! EAN-8:   101 | 4 digits (L)                  | 01010 | 4 digits (R) | 101
//! ```

use super::{
    FormatEncoder, digit_at, pad_zeros, strip_non_digits, verify_check_digit, with_check_digit,
};
use crate::checksum::calculate_ean_checksum;
use crate::core::encoded::EncodedBarcode;
use crate::core::format::Format;
use crate::errors::EncodingError;

/// Odd-parity left-hand digit patterns.
pub(crate) const L_CODES: [&str; 10] = [
    "0001101", "0011001", "0010011", "0111101", "0100011", "0110001", "0101111", "0111011",
    "0110111", "0001011",
];

/// Even-parity left-hand digit patterns.
pub(crate) const G_CODES: [&str; 10] = [
    "0100111", "0110011", "0011011", "0100001", "0011101", "0111001", "0000101", "0010001",
    "0001001", "0010111",
];

/// Right-hand digit patterns.
pub(crate) const R_CODES: [&str; 10] = [
    "1110010", "1100110", "1101100", "1000010", "1011100", "1001110", "1010000", "1000100",
    "1001000", "1110100",
];

/// L/G selection for the six left digits, keyed by the EAN-13 first digit.
const FIRST_DIGIT_PARITY: [&str; 10] = [
    "LLLLLL", "LLGLGG", "LLGGLG", "LLGGGL", "LGLLGG", "LGGLLG", "LGGGLL", "LGLGLG", "LGLGGL",
    "LGGLGL",
];

pub(crate) const GUARD: &str = "101";
pub(crate) const MIDDLE_GUARD: &str = "01010";

/// Resolves a 13-digit EAN-13 code from raw input.
fn normalize_ean13(data: &str) -> Result<String, EncodingError> {
    let format = Format::Ean13;
    let code = strip_non_digits(data);

    match code.len() {
        0 => Err(EncodingError::EmptyInput { format }),
        13 => {
            verify_check_digit(format, &code, calculate_ean_checksum)?;
            Ok(code)
        }
        1..=12 => Ok(with_check_digit(pad_zeros(&code, 12), calculate_ean_checksum)),
        actual => Err(EncodingError::InvalidLength {
            format,
            expected: "at most 13 digits",
            actual,
        }),
    }
}

/// Resolves an 8-digit EAN-8 code from raw input.
fn normalize_ean8(data: &str) -> Result<String, EncodingError> {
    let format = Format::Ean8;
    let code = strip_non_digits(data);

    match code.len() {
        0 => Err(EncodingError::EmptyInput { format }),
        7 => Ok(with_check_digit(code, calculate_ean_checksum)),
        8 => {
            verify_check_digit(format, &code, calculate_ean_checksum)?;
            Ok(code)
        }
        actual => Err(EncodingError::InvalidLength {
            format,
            expected: "7 or 8 digits",
            actual,
        }),
    }
}

/// EAN-13 encoder.
///
/// Accepts 12 digits (check digit appended), 13 digits (check digit
/// verified) or fewer than 12 (zero-padded, then check digit appended).
/// Non-digit characters are stripped first.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ean13Encoder;

impl Ean13Encoder {
    pub fn new() -> Self {
        Self
    }
}

impl FormatEncoder for Ean13Encoder {
    fn encode(&self, data: &str) -> Result<EncodedBarcode, EncodingError> {
        let code = normalize_ean13(data)?;
        let parity = FIRST_DIGIT_PARITY[digit_at(&code, 0)].as_bytes();

        let mut bars = String::with_capacity(95);
        bars.push_str(GUARD);
        for i in 1..=6 {
            let digit = digit_at(&code, i);
            bars.push_str(match parity[i - 1] {
                b'L' => L_CODES[digit],
                _ => G_CODES[digit],
            });
        }
        bars.push_str(MIDDLE_GUARD);
        for i in 7..=12 {
            bars.push_str(R_CODES[digit_at(&code, i)]);
        }
        bars.push_str(GUARD);

        Ok(EncodedBarcode::new(bars, code, Format::Ean13))
    }

    fn validate(&self, data: &str) -> bool {
        let code = strip_non_digits(data);
        match code.len() {
            12 => true,
            13 => verify_check_digit(Format::Ean13, &code, calculate_ean_checksum).is_ok(),
            _ => false,
        }
    }

    fn format(&self) -> Format {
        Format::Ean13
    }
}

/// EAN-8 encoder: 7 digits (check digit appended) or 8 (verified).
#[derive(Debug, Clone, Copy, Default)]
pub struct Ean8Encoder;

impl Ean8Encoder {
    pub fn new() -> Self {
        Self
    }
}

impl FormatEncoder for Ean8Encoder {
    fn encode(&self, data: &str) -> Result<EncodedBarcode, EncodingError> {
        let code = normalize_ean8(data)?;

        let mut bars = String::with_capacity(67);
        bars.push_str(GUARD);
        for i in 0..4 {
            bars.push_str(L_CODES[digit_at(&code, i)]);
        }
        bars.push_str(MIDDLE_GUARD);
        for i in 4..8 {
            bars.push_str(R_CODES[digit_at(&code, i)]);
        }
        bars.push_str(GUARD);

        Ok(EncodedBarcode::new(bars, code, Format::Ean8))
    }

    fn validate(&self, data: &str) -> bool {
        normalize_ean8(data).is_ok()
    }

    fn format(&self) -> Format {
        Format::Ean8
    }
}
