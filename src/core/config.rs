use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::format::Format;
use crate::errors::ConfigurationError;

/// How the CLI prints an encoded barcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// Raw `0`/`1` module string
    #[default]
    Bits,
    /// Block characters for terminals
    Visual,
    /// The encoded barcode as JSON
    Json,
}

/// Format resolution settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Fallback when no format is given and detection finds nothing.
    pub default_format: Format,
    /// Whether to run the detection cascade when no format is given.
    pub auto_detect: bool,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            default_format: Format::Code128,
            auto_detect: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Code39Settings {
    pub include_checksum: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodabarSettings {
    /// Guard letter inserted when the input has none.
    pub start_stop: char,
}

impl Default for CodabarSettings {
    fn default() -> Self {
        Self { start_stop: 'A' }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub style: OutputStyle,
    /// Blank modules added on each side by the CLI.
    pub quiet_zone: usize,
}

/// Effective settings after layering every configuration source.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub generator: GeneratorSettings,
    pub code39: Code39Settings,
    pub codabar: CodabarSettings,
    pub output: OutputSettings,
}

impl Settings {
    /// Parses settings from TOML content. Missing keys take their defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigurationError> {
        let settings: Settings = toml::from_str(content)?;
        settings.check()?;
        Ok(settings)
    }

    /// The built-in settings bundled with the library.
    pub fn load_default() -> Result<Self, ConfigurationError> {
        Self::from_toml(DEFAULT_CONFIG)
    }

    /// Loads settings from a single file layered over the built-in ones.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigurationError> {
        let mut table = parse_table(DEFAULT_CONFIG)?;
        merge_tables(&mut table, read_table(path)?);
        Self::from_table(table)
    }

    /// Loads settings with overrides from the standard locations.
    ///
    /// Layers, later ones winning key by key:
    /// 1. Built-in defaults
    /// 2. `~/.config/barcodec/config.toml`
    /// 3. `./barcodec.toml`
    /// 4. `explicit`, when given
    ///
    /// Unreadable user or local files are skipped with a warning; an
    /// unreadable explicit file is an error.
    pub fn load_with_overrides(explicit: Option<&Path>) -> Result<Self, ConfigurationError> {
        let mut table = parse_table(DEFAULT_CONFIG)?;

        for path in override_paths() {
            if !path.exists() {
                continue;
            }
            match read_table(&path) {
                Ok(overlay) => {
                    debug!(path = %path.display(), "applying configuration override");
                    merge_tables(&mut table, overlay);
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping configuration file");
                }
            }
        }

        if let Some(path) = explicit {
            merge_tables(&mut table, read_table(path)?);
        }

        Self::from_table(table)
    }

    /// Rejects values serde accepts but the encoders cannot use.
    pub fn check(&self) -> Result<(), ConfigurationError> {
        if !matches!(self.codabar.start_stop.to_ascii_uppercase(), 'A'..='D') {
            return Err(ConfigurationError::InvalidSetting {
                key: "codabar.start_stop".to_string(),
                reason: format!("'{}' is not one of A, B, C, D", self.codabar.start_stop),
            });
        }
        Ok(())
    }

    /// Pretty TOML rendering, as shown by `config show`.
    pub fn to_toml(&self) -> Result<String, ConfigurationError> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn from_table(table: toml::Table) -> Result<Self, ConfigurationError> {
        let settings: Settings = toml::Value::Table(table).try_into()?;
        settings.check()?;
        Ok(settings)
    }
}

const DEFAULT_CONFIG: &str = include_str!("../../barcodec.toml");

fn override_paths() -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(2);
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("barcodec").join("config.toml"));
    }
    paths.push(PathBuf::from("barcodec.toml"));
    paths
}

fn parse_table(content: &str) -> Result<toml::Table, ConfigurationError> {
    Ok(toml::from_str(content)?)
}

fn read_table(path: &Path) -> Result<toml::Table, ConfigurationError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigurationError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_table(&content)
}

/// Recursively merges `overlay` into `base`. Nested tables merge key by key;
/// any other value replaces the one in `base`.
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(incoming)) => {
                merge_tables(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_config() {
        let settings = Settings::load_default().unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.generator.default_format, Format::Code128);
        assert!(settings.generator.auto_detect);
        assert_eq!(settings.codabar.start_stop, 'A');
        assert_eq!(settings.output.style, OutputStyle::Bits);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = Settings::from_toml(
            r#"
[code39]
include_checksum = true
"#,
        )
        .unwrap();
        assert!(settings.code39.include_checksum);
        assert_eq!(settings.generator.default_format, Format::Code128);
    }

    #[test]
    fn test_formats_parse_from_ids() {
        let settings = Settings::from_toml(
            r#"
[generator]
default_format = "ean13"

[output]
style = "visual"
quiet_zone = 10
"#,
        )
        .unwrap();
        assert_eq!(settings.generator.default_format, Format::Ean13);
        assert_eq!(settings.output.style, OutputStyle::Visual);
        assert_eq!(settings.output.quiet_zone, 10);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Settings::from_toml("[codabar]\nstart_stop = \"E\""),
            Err(ConfigurationError::InvalidSetting { .. })
        ));
        assert!(matches!(
            Settings::from_toml("[generator]\ndefault_format = \"qr\""),
            Err(ConfigurationError::Parse(_))
        ));
    }

    #[test]
    fn test_merge_tables_is_deep() {
        let mut base = parse_table(DEFAULT_CONFIG).unwrap();
        let overlay = parse_table("[generator]\nauto_detect = false").unwrap();
        merge_tables(&mut base, overlay);

        let settings = Settings::from_table(base).unwrap();
        assert!(!settings.generator.auto_detect);
        assert_eq!(settings.generator.default_format, Format::Code128);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("barcodec-test-{}.toml", std::process::id()));
        std::fs::write(&path, "[codabar]\nstart_stop = \"C\"\n").unwrap();

        let settings = Settings::load_from_file(&path).unwrap();
        assert_eq!(settings.codabar.start_stop, 'C');
        assert!(!settings.code39.include_checksum);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let missing = Path::new("/nonexistent/barcodec/config.toml");
        assert!(matches!(
            Settings::load_with_overrides(Some(missing)),
            Err(ConfigurationError::Read { .. })
        ));
    }

    #[test]
    fn test_to_toml_round_trip() {
        let mut settings = Settings::default();
        settings.generator.default_format = Format::Itf14;
        let rendered = settings.to_toml().unwrap();
        assert!(rendered.contains("default_format = \"itf14\""));
        assert_eq!(Settings::from_toml(&rendered).unwrap(), settings);
    }
}
