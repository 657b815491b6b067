use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{ConfigurationError, find_closest_format};

/// The closed set of supported 1-D symbologies.
///
/// Used as the lookup key for the registry, the detector and the error types.
/// The declaration order is the canonical order used by [`Format::ALL`],
/// registry listings and collect-all detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Ean13,
    Ean8,
    Upca,
    Upce,
    Code128,
    Code39,
    Code93,
    Itf14,
    Codabar,
}

impl Format {
    /// All formats in canonical order.
    pub const ALL: [Format; 9] = [
        Format::Ean13,
        Format::Ean8,
        Format::Upca,
        Format::Upce,
        Format::Code128,
        Format::Code39,
        Format::Code93,
        Format::Itf14,
        Format::Codabar,
    ];

    /// Stable lowercase identifier, also used by serde.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Ean13 => "ean13",
            Format::Ean8 => "ean8",
            Format::Upca => "upca",
            Format::Upce => "upce",
            Format::Code128 => "code128",
            Format::Code39 => "code39",
            Format::Code93 => "code93",
            Format::Itf14 => "itf14",
            Format::Codabar => "codabar",
        }
    }

    /// Human-facing symbology name.
    pub fn name(&self) -> &'static str {
        match self {
            Format::Ean13 => "EAN-13",
            Format::Ean8 => "EAN-8",
            Format::Upca => "UPC-A",
            Format::Upce => "UPC-E",
            Format::Code128 => "Code128",
            Format::Code39 => "Code39",
            Format::Code93 => "Code93",
            Format::Itf14 => "ITF-14",
            Format::Codabar => "Codabar",
        }
    }

    /// Length of the canonical text for fixed-length symbologies.
    ///
    /// Returns `None` for the variable-length ones.
    pub fn fixed_text_len(&self) -> Option<usize> {
        match self {
            Format::Ean13 => Some(13),
            Format::Ean8 => Some(8),
            Format::Upca => Some(12),
            Format::Upce => Some(8),
            Format::Itf14 => Some(14),
            Format::Code128 | Format::Code39 | Format::Code93 | Format::Codabar => None,
        }
    }

    /// Whether the payload is restricted to decimal digits.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Format::Ean13 | Format::Ean8 | Format::Upca | Format::Upce | Format::Itf14
        )
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = ConfigurationError;

    /// Parses ids (`ean13`) and display names (`EAN-13`, `upc_a`, `ITF 14`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        Format::ALL
            .iter()
            .copied()
            .find(|format| format.as_str() == normalized)
            .ok_or_else(|| {
                let available: Vec<String> =
                    Format::ALL.iter().map(|f| f.as_str().to_string()).collect();
                ConfigurationError::UnknownFormat {
                    name: s.to_string(),
                    suggestion: find_closest_format(&normalized, &available),
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ids_and_names() {
        assert_eq!("ean13".parse::<Format>().unwrap(), Format::Ean13);
        assert_eq!("EAN-13".parse::<Format>().unwrap(), Format::Ean13);
        assert_eq!("upc_a".parse::<Format>().unwrap(), Format::Upca);
        assert_eq!("ITF 14".parse::<Format>().unwrap(), Format::Itf14);
        assert_eq!("Codabar".parse::<Format>().unwrap(), Format::Codabar);
    }

    #[test]
    fn test_parse_unknown_suggests() {
        let err = "code129".parse::<Format>().unwrap_err();
        match err {
            ConfigurationError::UnknownFormat { suggestion, .. } => {
                assert_eq!(suggestion.as_deref(), Some("code128"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for format in Format::ALL {
            assert_eq!(format.to_string().parse::<Format>().unwrap(), format);
        }
    }

    #[test]
    fn test_serde_uses_ids() {
        let json = serde_json::to_string(&Format::Itf14).unwrap();
        assert_eq!(json, "\"itf14\"");
        let back: Format = serde_json::from_str("\"upce\"").unwrap();
        assert_eq!(back, Format::Upce);
    }

    #[test]
    fn test_fixed_lengths() {
        assert_eq!(Format::Ean13.fixed_text_len(), Some(13));
        assert_eq!(Format::Ean8.fixed_text_len(), Some(8));
        assert_eq!(Format::Upca.fixed_text_len(), Some(12));
        assert_eq!(Format::Itf14.fixed_text_len(), Some(14));
        assert_eq!(Format::Code128.fixed_text_len(), None);
    }
}
