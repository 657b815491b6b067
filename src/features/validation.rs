use crate::checksum::code39_value;
use crate::core::format::Format;
use crate::core::registry::FormatRegistry;
use crate::errors::{EncodingError, ValidationError};

/// Validates content against a format through the registry.
#[derive(Debug, Clone, Copy)]
pub struct BarcodeValidator<'a> {
    registry: &'a FormatRegistry,
}

impl<'a> BarcodeValidator<'a> {
    pub fn new(registry: &'a FormatRegistry) -> Self {
        Self { registry }
    }

    /// Whether `content` is valid for `format`.
    ///
    /// Never fails: an unregistered format is simply not valid.
    pub fn validate(&self, content: &str, format: Format) -> bool {
        self.registry
            .get_encoder(format)
            .is_ok_and(|encoder| encoder.validate(content))
    }

    /// Like [`validate`](Self::validate), but says what is wrong.
    ///
    /// Fails with [`ValidationError::Required`] for blank content and
    /// [`ValidationError::Invalid`] otherwise, carrying the encoding error
    /// that explains the rejection.
    pub fn validate_detailed(&self, content: &str, format: Format) -> Result<(), ValidationError> {
        if content.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "content".to_string(),
            });
        }
        if self.validate(content, format) {
            return Ok(());
        }

        let source = match self.registry.get_encoder(format) {
            Ok(encoder) => match encoder.encode(content) {
                Err(e) => e,
                // Encodable only after normalization (padding, case folding)
                Ok(_) => strict_rejection(format, content),
            },
            Err(_) => strict_rejection(format, content),
        };

        Err(ValidationError::Invalid {
            field: "content".to_string(),
            value: content.to_string(),
            format,
            source,
        })
    }
}

/// Explains a rejection for content the encoder would still accept after
/// normalizing it.
fn strict_rejection(format: Format, content: &str) -> EncodingError {
    if matches!(format, Format::Code39 | Format::Code93)
        && let Some((position, ch)) = content
            .chars()
            .enumerate()
            .find(|(_, c)| code39_value(*c).is_none())
    {
        return EncodingError::UnsupportedCharacter {
            format,
            ch,
            position,
        };
    }

    if format == Format::Codabar {
        let guard = |c: &char| matches!(c.to_ascii_uppercase(), 'A'..='D');
        let last = content.chars().count().saturating_sub(1);
        let missing = content
            .chars()
            .next()
            .filter(|c| !guard(c))
            .map(|ch| (0, ch))
            .or_else(|| content.chars().last().filter(|c| !guard(c)).map(|ch| (last, ch)));
        if let Some((position, ch)) = missing {
            return EncodingError::UnsupportedCharacter {
                format,
                ch,
                position,
            };
        }
    }

    let expected = match format {
        Format::Ean13 => "12 or 13 digits",
        Format::Ean8 => "7 or 8 digits",
        Format::Upca => "11 or 12 digits",
        Format::Upce => "6, 7 or 8 digits",
        Format::Itf14 => "at most 14 digits",
        Format::Code128 | Format::Code39 | Format::Code93 | Format::Codabar => {
            "content accepted by the registered encoder"
        }
    };
    let actual = if format.is_numeric() {
        content.chars().filter(char::is_ascii_digit).count()
    } else {
        content.chars().count()
    };
    EncodingError::InvalidLength {
        format,
        expected,
        actual,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_delegates_to_encoder() {
        let registry = FormatRegistry::with_defaults();
        let validator = BarcodeValidator::new(&registry);

        assert!(validator.validate("6901234567892", Format::Ean13));
        assert!(!validator.validate("6901234567891", Format::Ean13));
        assert!(validator.validate("HELLO", Format::Code39));
        assert!(!validator.validate("", Format::Code128));
    }

    #[test]
    fn test_unregistered_format_is_invalid() {
        let registry = FormatRegistry::new();
        let validator = BarcodeValidator::new(&registry);
        assert!(!validator.validate("6901234567892", Format::Ean13));
    }

    #[test]
    fn test_detailed_required() {
        let registry = FormatRegistry::with_defaults();
        let validator = BarcodeValidator::new(&registry);
        assert_eq!(
            validator.validate_detailed("   ", Format::Code128),
            Err(ValidationError::Required {
                field: "content".to_string()
            })
        );
    }

    #[test]
    fn test_detailed_reports_checksum() {
        let registry = FormatRegistry::with_defaults();
        let validator = BarcodeValidator::new(&registry);

        let err = validator
            .validate_detailed("6901234567891", Format::Ean13)
            .unwrap_err();
        match err {
            ValidationError::Invalid { source, format, .. } => {
                assert_eq!(format, Format::Ean13);
                assert!(source.is_checksum_error());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_detailed_reports_lowercase_code39() {
        let registry = FormatRegistry::with_defaults();
        let validator = BarcodeValidator::new(&registry);

        let err = validator
            .validate_detailed("Hello", Format::Code39)
            .unwrap_err();
        match err {
            ValidationError::Invalid { source, .. } => assert_eq!(
                source,
                EncodingError::UnsupportedCharacter {
                    format: Format::Code39,
                    ch: 'e',
                    position: 1
                }
            ),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_detailed_reports_missing_codabar_guard() {
        let registry = FormatRegistry::with_defaults();
        let validator = BarcodeValidator::new(&registry);

        let err = validator
            .validate_detailed("A12345", Format::Codabar)
            .unwrap_err();
        match err {
            ValidationError::Invalid { source, .. } => assert_eq!(
                source,
                EncodingError::UnsupportedCharacter {
                    format: Format::Codabar,
                    ch: '5',
                    position: 5
                }
            ),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(validator.validate_detailed("A12345B", Format::Codabar).is_ok());
    }

    #[test]
    fn test_detailed_reports_short_ean13() {
        let registry = FormatRegistry::with_defaults();
        let validator = BarcodeValidator::new(&registry);

        let err = validator.validate_detailed("12345", Format::Ean13).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Invalid {
                source: EncodingError::InvalidLength { actual: 5, .. },
                ..
            }
        ));
        assert!(validator.validate_detailed("123456789012", Format::Ean13).is_ok());
    }
}
