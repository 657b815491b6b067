//! # barcodec
//!
//! Barcode symbology engine: turns text into the bar/space module pattern of
//! a 1D barcode.
//!
//! Nine symbologies are supported (EAN-13, EAN-8, UPC-A, UPC-E, Code128,
//! Code39, Code93, ITF-14 and Codabar). Each encoder validates its input,
//! computes check characters and produces an [`EncodedBarcode`] whose `bars`
//! field is a string over `{0, 1}`. Rendering that pattern to pixels is left
//! to the caller.
//!
//! ```
//! use barcodec::{Format, encode, detect_format};
//!
//! let encoded = encode("1234567", Format::Ean8).unwrap();
//! assert_eq!(encoded.text, "12345670");
//! assert_eq!(encoded.bars.len(), 67);
//!
//! assert_eq!(detect_format("HELLO"), Some(Format::Code39));
//! ```

pub mod checksum;
pub mod convenience;
pub mod core;
pub mod encoders;
pub mod errors;
pub mod features;
pub mod generator;
pub mod prelude;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use checksum::{
    calculate_code39_checksum, calculate_code93_checksum, calculate_code128_checksum,
    calculate_ean_checksum, calculate_itf_checksum, validate_ean_checksum,
};
pub use convenience::{detect_all_formats, detect_format, encode, generate, validate};
pub use crate::core::{EncodedBarcode, Format, FormatRegistry, OutputStyle, Settings};
pub use encoders::{
    CodabarEncoder, Code39Encoder, Code93Encoder, Code128Encoder, Ean8Encoder, Ean13Encoder,
    FormatEncoder, Itf14Encoder, UpcaEncoder, UpceEncoder,
};
pub use errors::{
    BarcodeError, ConfigurationError, EncodingError, EncodingErrorKind, ValidationError,
    find_closest_format,
};
pub use features::{BarcodeValidator, BatchEncoder, BatchItem, BatchSummary, FormatDetector};
pub use generator::BarcodeGenerator;
