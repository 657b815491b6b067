use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

use super::config::Settings;
use super::format::Format;
use crate::encoders::{
    CodabarEncoder, Code39Encoder, Code93Encoder, Code128Encoder, Ean8Encoder, Ean13Encoder,
    FormatEncoder, Itf14Encoder, UpcaEncoder, UpceEncoder,
};
use crate::errors::ConfigurationError;

/// Mapping from [`Format`] to the encoder that produces it.
///
/// Built once and shared by reference (or `Arc`) with the validator,
/// detector and generator. Encoders can be swapped with [`register`].
///
/// [`register`]: FormatRegistry::register
#[derive(Debug, Clone, Default)]
pub struct FormatRegistry {
    encoders: BTreeMap<Format, Arc<dyn FormatEncoder>>,
}

impl FormatRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the nine default encoders.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.insert(Arc::new(Ean13Encoder));
        registry.insert(Arc::new(Ean8Encoder));
        registry.insert(Arc::new(UpcaEncoder));
        registry.insert(Arc::new(UpceEncoder));
        registry.insert(Arc::new(Code128Encoder));
        registry.insert(Arc::new(Code39Encoder::default()));
        registry.insert(Arc::new(Code93Encoder));
        registry.insert(Arc::new(Itf14Encoder));
        registry.insert(Arc::new(CodabarEncoder::default()));
        registry
    }

    /// Default encoders configured from `settings`.
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigurationError> {
        let mut registry = Self::with_defaults();
        registry.insert(Arc::new(Code39Encoder::new(
            settings.code39.include_checksum,
        )));
        registry.insert(Arc::new(CodabarEncoder::new(settings.codabar.start_stop)?));
        Ok(registry)
    }

    fn insert(&mut self, encoder: Arc<dyn FormatEncoder>) {
        self.encoders.insert(encoder.format(), encoder);
    }

    /// Registers `encoder` for `format`, replacing any previous one.
    pub fn register<E>(&mut self, format: Format, encoder: E)
    where
        E: FormatEncoder + 'static,
    {
        self.register_shared(format, Arc::new(encoder));
    }

    /// Like [`register`](Self::register) for an already shared encoder.
    pub fn register_shared(&mut self, format: Format, encoder: Arc<dyn FormatEncoder>) {
        if let Some(previous) = self.encoders.insert(format, encoder) {
            debug!(format = %format, previous = ?previous, "replaced registered encoder");
        }
    }

    /// Removes the encoder for `format`, returning it.
    pub fn unregister(&mut self, format: Format) -> Option<Arc<dyn FormatEncoder>> {
        self.encoders.remove(&format)
    }

    /// The encoder for `format`.
    pub fn get_encoder(&self, format: Format) -> Result<&dyn FormatEncoder, ConfigurationError> {
        self.encoders
            .get(&format)
            .map(|encoder| encoder.as_ref())
            .ok_or(ConfigurationError::UnregisteredFormat(format))
    }

    pub fn has_encoder(&self, format: Format) -> bool {
        self.encoders.contains_key(&format)
    }

    /// Registered formats in canonical order.
    pub fn list_formats(&self) -> Vec<Format> {
        self.encoders.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.encoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encoders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::encoded::EncodedBarcode;
    use crate::errors::EncodingError;

    /// Accepts only "OK" and encodes it as a single bar.
    #[derive(Debug)]
    struct StrictEncoder;

    impl FormatEncoder for StrictEncoder {
        fn encode(&self, data: &str) -> Result<EncodedBarcode, EncodingError> {
            if data == "OK" {
                Ok(EncodedBarcode::new(
                    "1".to_string(),
                    data.to_string(),
                    Format::Code128,
                ))
            } else {
                Err(EncodingError::EmptyInput {
                    format: Format::Code128,
                })
            }
        }

        fn validate(&self, data: &str) -> bool {
            data == "OK"
        }

        fn format(&self) -> Format {
            Format::Code128
        }
    }

    #[test]
    fn test_defaults_cover_every_format() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(registry.list_formats(), Format::ALL.to_vec());
        for format in Format::ALL {
            assert!(registry.has_encoder(format));
            assert_eq!(registry.get_encoder(format).unwrap().format(), format);
        }
    }

    #[test]
    fn test_unregistered_format() {
        let registry = FormatRegistry::new();
        assert!(registry.is_empty());
        assert!(matches!(
            registry.get_encoder(Format::Upce),
            Err(ConfigurationError::UnregisteredFormat(Format::Upce))
        ));
    }

    #[test]
    fn test_register_replaces_encoder() {
        let mut registry = FormatRegistry::with_defaults();
        registry.register(Format::Code128, StrictEncoder);

        let encoder = registry.get_encoder(Format::Code128).unwrap();
        assert!(encoder.validate("OK"));
        assert!(!encoder.validate("HELLO"));
        assert_eq!(registry.len(), 9);
    }

    #[test]
    fn test_unregister() {
        let mut registry = FormatRegistry::with_defaults();
        assert!(registry.unregister(Format::Codabar).is_some());
        assert!(!registry.has_encoder(Format::Codabar));
        assert_eq!(registry.len(), 8);
    }

    #[test]
    fn test_from_settings() {
        let mut settings = Settings::default();
        settings.code39.include_checksum = true;
        settings.codabar.start_stop = 'B';
        let registry = FormatRegistry::from_settings(&settings).unwrap();

        let code39 = registry.get_encoder(Format::Code39).unwrap();
        assert_eq!(code39.encode("CODE39").unwrap().text, "CODE39W");

        let codabar = registry.get_encoder(Format::Codabar).unwrap();
        assert_eq!(codabar.encode("123").unwrap().text, "B123B");
    }
}
