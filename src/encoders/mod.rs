//! Symbology encoders.
//!
//! Every encoder implements [`FormatEncoder`]. Encoders are stateless apart
//! from fixed construction options, so one instance can be shared across
//! threads for the lifetime of the process.

pub mod codabar;
pub mod code128;
pub mod code39;
pub mod code93;
pub mod ean;
pub mod itf;
pub mod upc;

pub use codabar::CodabarEncoder;
pub use code128::Code128Encoder;
pub use code39::Code39Encoder;
pub use code93::Code93Encoder;
pub use ean::{Ean8Encoder, Ean13Encoder};
pub use itf::Itf14Encoder;
pub use upc::{UpcaEncoder, UpceEncoder};

use std::fmt::Debug;

use crate::core::encoded::EncodedBarcode;
use crate::core::format::Format;
use crate::errors::EncodingError;

/// Shared contract for all symbology encoders.
pub trait FormatEncoder: Debug + Send + Sync {
    /// Encodes `data`, failing with a typed error on anything unencodable.
    fn encode(&self, data: &str) -> Result<EncodedBarcode, EncodingError>;

    /// Total predicate: never panics, never errors.
    fn validate(&self, data: &str) -> bool;

    /// The symbology this encoder produces.
    fn format(&self) -> Format;
}

/// Built-in encoder for `format`, configured with default options.
pub fn builtin_encoder(format: Format) -> &'static dyn FormatEncoder {
    const CODE39: Code39Encoder = Code39Encoder::new(false);
    const CODABAR: CodabarEncoder = CodabarEncoder::DEFAULT;

    match format {
        Format::Ean13 => &Ean13Encoder,
        Format::Ean8 => &Ean8Encoder,
        Format::Upca => &UpcaEncoder,
        Format::Upce => &UpceEncoder,
        Format::Code128 => &Code128Encoder,
        Format::Code39 => &CODE39,
        Format::Code93 => &Code93Encoder,
        Format::Itf14 => &Itf14Encoder,
        Format::Codabar => &CODABAR,
    }
}

/// Keeps only ASCII digits.
pub(crate) fn strip_non_digits(data: &str) -> String {
    data.chars().filter(char::is_ascii_digit).collect()
}

/// Left-pads `code` with zeros up to `len`.
pub(crate) fn pad_zeros(code: &str, len: usize) -> String {
    format!("{:0>width$}", code, width = len)
}

/// Digit value of an ASCII digit byte.
pub(crate) fn digit_at(code: &str, index: usize) -> usize {
    (code.as_bytes()[index] - b'0') as usize
}

/// Checks the embedded check digit of a full-length numeric code.
pub(crate) fn verify_check_digit(
    format: Format,
    code: &str,
    compute: fn(&str) -> u8,
) -> Result<(), EncodingError> {
    let (payload, check) = code.split_at(code.len() - 1);
    let expected = compute(payload);
    let found = check.as_bytes()[0] - b'0';
    if expected == found {
        Ok(())
    } else {
        Err(EncodingError::ChecksumMismatch {
            format,
            expected: char::from(b'0' + expected),
            found: char::from(b'0' + found),
        })
    }
}

/// Appends the computed check digit.
pub(crate) fn with_check_digit(code: String, compute: fn(&str) -> u8) -> String {
    let check = compute(&code);
    let mut out = code;
    out.push(char::from(b'0' + check));
    out
}
