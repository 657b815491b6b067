//! ITF-14 (Interleaved 2 of 5).

use super::{
    FormatEncoder, digit_at, pad_zeros, strip_non_digits, verify_check_digit, with_check_digit,
};
use crate::checksum::calculate_itf_checksum;
use crate::core::encoded::EncodedBarcode;
use crate::core::format::Format;
use crate::errors::EncodingError;

/// Wide (`1`) / narrow (`0`) elements per digit.
const PATTERNS: [&[u8; 5]; 10] = [
    b"00110", b"10001", b"01001", b"11000", b"00101", b"10100", b"01100", b"00011", b"10010",
    b"01010",
];

const START: &str = "1010";
const STOP: &str = "1101";

/// ITF-14 encoder.
///
/// Non-digits are stripped. 13 digits get a check digit, 14 are verified,
/// shorter input is zero-padded to 13 first.
#[derive(Debug, Clone, Copy, Default)]
pub struct Itf14Encoder;

impl Itf14Encoder {
    pub fn new() -> Self {
        Self
    }

    fn normalize(data: &str) -> Result<String, EncodingError> {
        let format = Format::Itf14;
        let code = strip_non_digits(data);

        match code.len() {
            0 => Err(EncodingError::EmptyInput { format }),
            14 => {
                verify_check_digit(format, &code, calculate_itf_checksum)?;
                Ok(code)
            }
            1..=13 => Ok(with_check_digit(pad_zeros(&code, 13), calculate_itf_checksum)),
            actual => Err(EncodingError::InvalidLength {
                format,
                expected: "at most 14 digits",
                actual,
            }),
        }
    }
}

impl FormatEncoder for Itf14Encoder {
    fn encode(&self, data: &str) -> Result<EncodedBarcode, EncodingError> {
        let code = Self::normalize(data)?;

        let mut bars = String::with_capacity(134);
        bars.push_str(START);
        for pair in (0..code.len()).step_by(2) {
            let bar_pattern = PATTERNS[digit_at(&code, pair)];
            let space_pattern = PATTERNS[digit_at(&code, pair + 1)];
            for (&bar, &space) in bar_pattern.iter().zip(space_pattern) {
                bars.push_str(if bar == b'1' { "111" } else { "1" });
                bars.push_str(if space == b'1' { "000" } else { "0" });
            }
        }
        bars.push_str(STOP);

        Ok(EncodedBarcode::new(bars, code, Format::Itf14))
    }

    fn validate(&self, data: &str) -> bool {
        Self::normalize(data).is_ok()
    }

    fn format(&self) -> Format {
        Format::Itf14
    }
}
