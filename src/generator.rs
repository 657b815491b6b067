//! Orchestration: format resolution, lookup and encoding.

use tracing::debug;

use crate::core::config::{GeneratorSettings, Settings};
use crate::core::encoded::EncodedBarcode;
use crate::core::format::Format;
use crate::core::registry::FormatRegistry;
use crate::errors::{BarcodeError, ConfigurationError, ValidationError};
use crate::features::detection::FormatDetector;
use crate::features::validation::BarcodeValidator;

/// Turns raw content plus an optional format into an [`EncodedBarcode`].
///
/// Owns its registry; the validator and detector it hands out borrow it.
#[derive(Debug, Clone)]
pub struct BarcodeGenerator {
    registry: FormatRegistry,
    settings: GeneratorSettings,
}

impl Default for BarcodeGenerator {
    fn default() -> Self {
        Self::new(FormatRegistry::with_defaults())
    }
}

impl BarcodeGenerator {
    pub fn new(registry: FormatRegistry) -> Self {
        Self::with_settings(registry, GeneratorSettings::default())
    }

    pub fn with_settings(registry: FormatRegistry, settings: GeneratorSettings) -> Self {
        Self { registry, settings }
    }

    /// Generator with encoders and resolution rules taken from `settings`.
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigurationError> {
        Ok(Self::with_settings(
            FormatRegistry::from_settings(settings)?,
            settings.generator.clone(),
        ))
    }

    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut FormatRegistry {
        &mut self.registry
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    pub fn validator(&self) -> BarcodeValidator<'_> {
        BarcodeValidator::new(&self.registry)
    }

    pub fn detector(&self) -> FormatDetector<'_> {
        FormatDetector::new(&self.registry)
    }

    /// The format `generate` would use for `content`.
    ///
    /// An explicit format always wins. Otherwise the detection cascade runs
    /// (when enabled) and the configured default format is the fallback.
    pub fn resolve_format(&self, content: &str, requested: Option<Format>) -> Format {
        requested
            .or_else(|| {
                self.settings
                    .auto_detect
                    .then(|| self.detector().detect(content))
                    .flatten()
            })
            .unwrap_or(self.settings.default_format)
    }

    /// Resolves the format for `content`, validates and encodes it.
    ///
    /// Auto-detected content is encoded in the form the detector matched
    /// (trimmed, upper-cased for Code39 and Code93). When nothing is detected
    /// and the default format rejects the content too, the error is
    /// [`ValidationError::Undetectable`].
    pub fn generate(
        &self,
        content: &str,
        format: Option<Format>,
    ) -> Result<EncodedBarcode, BarcodeError> {
        if let Some(format) = format {
            return self.encode(content, format);
        }

        if !self.settings.auto_detect {
            return self.encode(content, self.settings.default_format);
        }

        if let Some((format, detected)) = self.detector().detect_with_content(content) {
            debug!(format = %format, "auto-detected format");
            return self.encode(&detected, format);
        }

        let fallback = self.settings.default_format;
        debug!(fallback = %fallback, "no format detected, using default");
        match self.encode(content, fallback) {
            Err(BarcodeError::Validation(ValidationError::Invalid { .. })) => {
                Err(ValidationError::Undetectable {
                    value: content.to_string(),
                }
                .into())
            }
            result => result,
        }
    }

    /// Validates `content` for `format` and encodes it through the registry.
    pub fn encode(&self, content: &str, format: Format) -> Result<EncodedBarcode, BarcodeError> {
        let encoder = self.registry.get_encoder(format)?;

        if let Err(e) = self.validator().validate_detailed(content, format) {
            debug!(format = %format, error = %e, "rejecting content");
            return Err(e.into());
        }

        match encoder.encode(content) {
            Ok(encoded) => {
                debug!(
                    format = %format,
                    width = encoded.width(),
                    text = %encoded.text,
                    "encoded barcode"
                );
                Ok(encoded)
            }
            Err(e) => {
                debug!(format = %format, error = %e, "encoding failed");
                Err(e.into())
            }
        }
    }
}
