//! Error types for the barcode engine.
//!
//! ```text
//! BarcodeError
//! ├── EncodingError       data does not fit the requested symbology
//! ├── ValidationError     detail-reporting validation path
//! └── ConfigurationError  unknown/unregistered format, bad settings
//! ```
//!
//! Encoding failures keep length, charset and checksum problems in separate
//! variants so callers can branch on them without parsing messages.

use std::path::PathBuf;
use thiserror::Error;

use crate::core::format::Format;

/// Invalid data for the requested format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// Nothing left to encode after normalization.
    #[error("{format} data cannot be empty")]
    EmptyInput { format: Format },

    /// Payload length outside the accepted range.
    #[error("invalid data length for {format}: expected {expected}, got {actual}")]
    InvalidLength {
        format: Format,
        expected: &'static str,
        actual: usize,
    },

    /// Character outside the symbology's charset.
    #[error("character {ch:?} at position {position} is not supported in {format}")]
    UnsupportedCharacter {
        format: Format,
        ch: char,
        position: usize,
    },

    /// Full-length input whose embedded check digit is wrong.
    #[error("invalid {format} checksum: expected {expected}, found {found}")]
    ChecksumMismatch {
        format: Format,
        expected: char,
        found: char,
    },

    /// UPC-E number system digit other than 0 or 1. Classified as
    /// [`EncodingErrorKind::Charset`]: the digit is not allowed in that position.
    #[error("invalid {format} number system {digit}: expected 0 or 1")]
    InvalidNumberSystem { format: Format, digit: char },
}

/// Flat classification of [`EncodingError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingErrorKind {
    Empty,
    Length,
    Charset,
    Checksum,
}

impl EncodingError {
    /// The format whose rules were violated.
    pub fn format(&self) -> Format {
        match self {
            EncodingError::EmptyInput { format }
            | EncodingError::InvalidLength { format, .. }
            | EncodingError::UnsupportedCharacter { format, .. }
            | EncodingError::ChecksumMismatch { format, .. }
            | EncodingError::InvalidNumberSystem { format, .. } => *format,
        }
    }

    pub fn kind(&self) -> EncodingErrorKind {
        match self {
            EncodingError::EmptyInput { .. } => EncodingErrorKind::Empty,
            EncodingError::InvalidLength { .. } => EncodingErrorKind::Length,
            EncodingError::UnsupportedCharacter { .. }
            | EncodingError::InvalidNumberSystem { .. } => EncodingErrorKind::Charset,
            EncodingError::ChecksumMismatch { .. } => EncodingErrorKind::Checksum,
        }
    }

    /// True when the data was well-formed but carried a wrong check digit.
    pub fn is_checksum_error(&self) -> bool {
        self.kind() == EncodingErrorKind::Checksum
    }
}

/// Validation failure with field/value context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Blank content.
    #[error("{field} is required")]
    Required { field: String },

    /// Content rejected by the encoder for `format`.
    #[error("{field} '{value}' is not valid for {format}: {source}")]
    Invalid {
        field: String,
        value: String,
        format: Format,
        #[source]
        source: EncodingError,
    },

    /// No registered format accepts the content.
    #[error("no barcode format matches '{value}'")]
    Undetectable { value: String },
}

/// Unsupported format requests and settings problems.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("no encoder registered for format {0}")]
    UnregisteredFormat(Format),

    #[error("unknown barcode format '{name}'{}", suggestion_hint(.suggestion))]
    UnknownFormat {
        name: String,
        suggestion: Option<String>,
    },

    #[error("invalid setting {key}: {reason}")]
    InvalidSetting { key: String, reason: String },

    #[error("failed to read configuration from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Any failure surfaced by the orchestrator.
#[derive(Debug, Error)]
pub enum BarcodeError {
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

impl BarcodeError {
    /// The underlying encoding error, if this is one.
    pub fn as_encoding(&self) -> Option<&EncodingError> {
        match self {
            BarcodeError::Encoding(e) => Some(e),
            BarcodeError::Validation(ValidationError::Invalid { source, .. }) => Some(source),
            _ => None,
        }
    }
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{}'?)", s),
        None => String::new(),
    }
}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching format id
pub fn find_closest_format(name: &str, available: &[String]) -> Option<String> {
    let mut best_match = None;
    let mut best_distance = usize::MAX;
    let threshold = if name.len() < 5 { 2 } else { 3 };

    for candidate in available {
        let distance = levenshtein_distance(name, candidate);
        if distance < best_distance && distance <= threshold {
            best_distance = distance;
            best_match = Some(candidate.clone());
        }
    }

    best_match
}
