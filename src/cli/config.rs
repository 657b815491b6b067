use barcodec::{BarcodeGenerator, Settings};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use crate::cli::global::GlobalArgs;

/// Layered settings, with `--config` tilde-expanded and applied last.
pub fn load_settings(global: &GlobalArgs) -> Result<Settings, Box<dyn std::error::Error>> {
    let explicit = global
        .config
        .as_deref()
        .map(|path| PathBuf::from(shellexpand::tilde(path).as_ref()));

    Ok(Settings::load_with_overrides(explicit.as_deref())?)
}

/// Generator honoring the encoder and resolution settings.
pub fn create_generator(settings: &Settings) -> Result<BarcodeGenerator, Box<dyn std::error::Error>> {
    Ok(BarcodeGenerator::from_settings(settings)?)
}

/// The positional content, or stdin without its trailing newline.
pub fn read_content(content: Option<String>) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(content) = content {
        return Ok(content);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer.trim_end_matches(['\r', '\n']).to_string())
}

/// Every line of `file` (or stdin), skipping blank ones.
pub fn read_lines(file: Option<&PathBuf>) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let input = match file {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| format!("Cannot read '{}': {}", path.display(), e))?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    Ok(input
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}
