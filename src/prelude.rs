//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use barcodec::prelude::*;
//!
//! let generator = BarcodeGenerator::default();
//! let encoded = generator.generate("HELLO", None).unwrap();
//! assert_eq!(encoded.format, Format::Code39);
//! ```

pub use crate::{
    // Core types
    BarcodeGenerator,
    EncodedBarcode,
    Format,
    FormatEncoder,
    FormatRegistry,
    Settings,

    // Services
    BarcodeValidator,
    BatchEncoder,
    FormatDetector,

    // Errors
    BarcodeError,
    ConfigurationError,
    EncodingError,
    ValidationError,

    // Convenience functions
    detect_format,
    encode,
    generate,
    validate,
};
