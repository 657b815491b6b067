//! UPC-A and UPC-E.

use super::ean::{GUARD, L_CODES, MIDDLE_GUARD, R_CODES};
use super::{FormatEncoder, digit_at, strip_non_digits, verify_check_digit, with_check_digit};
use crate::checksum::calculate_ean_checksum;
use crate::core::encoded::EncodedBarcode;
use crate::core::format::Format;
use crate::errors::EncodingError;

/// Column parity for the six UPC-E digits, keyed by check digit
/// (number system 0). `E` columns use L-codes, `O` columns R-codes.
const UPCE_PARITY: [&str; 10] = [
    "EEEOOO", "EEOEOO", "EEOOEO", "EEOOOE", "EOEEOO", "EOOEEO", "EOOOEE", "EOEOEO", "EOEOOE",
    "EOOEOE",
];

const UPCE_END_GUARD: &str = "010101";

/// UPC-A encoder: 11 digits (check digit appended) or 12 (verified).
///
/// Same layout as EAN-13 with an implicit leading zero, so every left digit
/// is L-coded.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpcaEncoder;

impl UpcaEncoder {
    pub fn new() -> Self {
        Self
    }

    fn normalize(data: &str) -> Result<String, EncodingError> {
        let format = Format::Upca;
        let code = strip_non_digits(data);

        match code.len() {
            0 => Err(EncodingError::EmptyInput { format }),
            11 => Ok(with_check_digit(code, calculate_ean_checksum)),
            12 => {
                verify_check_digit(format, &code, calculate_ean_checksum)?;
                Ok(code)
            }
            actual => Err(EncodingError::InvalidLength {
                format,
                expected: "11 or 12 digits",
                actual,
            }),
        }
    }
}

impl FormatEncoder for UpcaEncoder {
    fn encode(&self, data: &str) -> Result<EncodedBarcode, EncodingError> {
        let code = Self::normalize(data)?;

        let mut bars = String::with_capacity(95);
        bars.push_str(GUARD);
        for i in 0..6 {
            bars.push_str(L_CODES[digit_at(&code, i)]);
        }
        bars.push_str(MIDDLE_GUARD);
        for i in 6..12 {
            bars.push_str(R_CODES[digit_at(&code, i)]);
        }
        bars.push_str(GUARD);

        Ok(EncodedBarcode::new(bars, code, Format::Upca))
    }

    fn validate(&self, data: &str) -> bool {
        Self::normalize(data).is_ok()
    }

    fn format(&self) -> Format {
        Format::Upca
    }
}

/// Expands a zero-suppressed UPC-E body to the 11 UPC-A payload digits.
///
/// `number_system` is `'0'` or `'1'`; `body` is exactly six digits. The last
/// body digit says where the suppressed zeros go.
pub fn expand_upce(number_system: char, body: &str) -> String {
    let d = body.as_bytes();
    let mut upca = String::with_capacity(11);
    upca.push(number_system);

    match d[5] {
        b'0'..=b'2' => {
            upca.push_str(&body[..2]);
            upca.push(char::from(d[5]));
            upca.push_str("0000");
            upca.push_str(&body[2..5]);
        }
        b'3' => {
            upca.push_str(&body[..3]);
            upca.push_str("00000");
            upca.push_str(&body[3..5]);
        }
        b'4' => {
            upca.push_str(&body[..4]);
            upca.push_str("00000");
            upca.push_str(&body[4..5]);
        }
        _ => {
            upca.push_str(&body[..5]);
            upca.push_str("0000");
            upca.push(char::from(d[5]));
        }
    }
    upca
}

/// UPC-E encoder.
///
/// Accepts 6 digits (number system 0 implied), 7 digits (number system plus
/// body) or 8 digits (number system, body, check digit). The encoded text is
/// always the full 8-digit form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpceEncoder;

impl UpceEncoder {
    pub fn new() -> Self {
        Self
    }

    fn normalize(data: &str) -> Result<String, EncodingError> {
        let format = Format::Upce;
        let code = strip_non_digits(data);

        let (number_system, body, check) = match code.len() {
            0 => return Err(EncodingError::EmptyInput { format }),
            6 => ('0', &code[..], None),
            7 => (char::from(code.as_bytes()[0]), &code[1..], None),
            8 => (
                char::from(code.as_bytes()[0]),
                &code[1..7],
                Some(char::from(code.as_bytes()[7])),
            ),
            actual => {
                return Err(EncodingError::InvalidLength {
                    format,
                    expected: "6, 7 or 8 digits",
                    actual,
                });
            }
        };

        // Zero suppression is only defined for number systems 0 and 1.
        if number_system != '0' && number_system != '1' {
            return Err(EncodingError::InvalidNumberSystem {
                format,
                digit: number_system,
            });
        }

        let expected = char::from(b'0' + calculate_ean_checksum(&expand_upce(number_system, body)));
        if let Some(found) = check
            && found != expected
        {
            return Err(EncodingError::ChecksumMismatch {
                format,
                expected,
                found,
            });
        }

        let mut text = String::with_capacity(8);
        text.push(number_system);
        text.push_str(body);
        text.push(expected);
        Ok(text)
    }
}

impl FormatEncoder for UpceEncoder {
    fn encode(&self, data: &str) -> Result<EncodedBarcode, EncodingError> {
        let code = Self::normalize(data)?;
        let parity = UPCE_PARITY[digit_at(&code, 7)].as_bytes();
        let inverted = code.starts_with('1');

        let mut bars = String::with_capacity(51);
        bars.push_str(GUARD);
        for (i, &column) in parity.iter().enumerate() {
            let digit = digit_at(&code, i + 1);
            let even = (column == b'E') != inverted;
            bars.push_str(if even { L_CODES[digit] } else { R_CODES[digit] });
        }
        bars.push_str(UPCE_END_GUARD);

        Ok(EncodedBarcode::new(bars, code, Format::Upce))
    }

    fn validate(&self, data: &str) -> bool {
        Self::normalize(data).is_ok()
    }

    fn format(&self) -> Format {
        Format::Upce
    }
}
