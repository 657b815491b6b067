//! WebAssembly bindings for barcodec
//!
//! Provides a JavaScript-friendly API. Formats are passed by id (`"ean13"`)
//! or display name; encoded barcodes come back as JSON objects with `bars`,
//! `text` and `format` fields.

use wasm_bindgen::prelude::*;

use crate::core::format::Format;
use crate::errors::{BarcodeError, ConfigurationError, EncodingError};

/// Error type for WASM operations
#[wasm_bindgen]
pub struct WasmError {
    message: String,
}

#[wasm_bindgen]
impl WasmError {
    /// Get the error message
    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<String> for WasmError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<EncodingError> for WasmError {
    fn from(err: EncodingError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl From<BarcodeError> for WasmError {
    fn from(err: BarcodeError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl From<ConfigurationError> for WasmError {
    fn from(err: ConfigurationError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for WasmError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            message: format!("serialization failed: {}", err),
        }
    }
}

fn parse_format(format: &str) -> Result<Format, WasmError> {
    Ok(format.parse::<Format>()?)
}

/// Encode `content` as `format`
///
/// # Returns
///
/// JSON string of the encoded barcode
#[wasm_bindgen]
pub fn encode(content: &str, format: &str) -> Result<String, WasmError> {
    let encoded = crate::encode(content, parse_format(format)?)?;
    Ok(serde_json::to_string(&encoded)?)
}

/// Encode `content`, auto-detecting the format when `format` is omitted
#[wasm_bindgen]
pub fn generate(content: &str, format: Option<String>) -> Result<String, WasmError> {
    let format = format.as_deref().map(parse_format).transpose()?;
    let encoded = crate::generate(content, format)?;
    Ok(serde_json::to_string(&encoded)?)
}

/// Whether `content` is valid for `format`
#[wasm_bindgen]
pub fn validate(content: &str, format: &str) -> Result<bool, WasmError> {
    Ok(crate::validate(content, parse_format(format)?))
}

/// Id of the detected format, or `undefined` when nothing matches
#[wasm_bindgen(js_name = detectFormat)]
pub fn detect_format(content: &str) -> Option<String> {
    crate::detect_format(content).map(|format| format.as_str().to_string())
}

/// Ids of every format accepting `content`
#[wasm_bindgen(js_name = detectAllFormats)]
pub fn detect_all_formats(content: &str) -> Vec<String> {
    crate::detect_all_formats(content)
        .into_iter()
        .map(|format| format.as_str().to_string())
        .collect()
}

/// Ids of every supported format, in canonical order
#[wasm_bindgen(js_name = listFormats)]
pub fn list_formats() -> Vec<String> {
    Format::ALL
        .iter()
        .map(|format| format.as_str().to_string())
        .collect()
}
