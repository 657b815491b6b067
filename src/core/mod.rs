//! Core data model: formats, encoded output, the encoder registry and
//! settings.

pub mod config;
pub mod encoded;
pub mod format;
pub mod registry;

pub use config::{OutputStyle, Settings};
pub use encoded::EncodedBarcode;
pub use format::Format;
pub use registry::FormatRegistry;
