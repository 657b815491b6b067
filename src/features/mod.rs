//! Services built on top of the encoders.
//!
//! Validation and format detection borrow a [`FormatRegistry`]; batch
//! encoding drives a [`BarcodeGenerator`].
//!
//! [`FormatRegistry`]: crate::core::registry::FormatRegistry
//! [`BarcodeGenerator`]: crate::generator::BarcodeGenerator

pub mod batch;
pub mod detection;
pub mod validation;

pub use batch::{BatchEncoder, BatchItem, BatchSummary};
pub use detection::FormatDetector;
pub use validation::BarcodeValidator;
