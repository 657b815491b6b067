use barcodec::{Format, OutputStyle};
use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Arguments for encoding one barcode
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Content to encode (reads from stdin if not provided)
    pub content: Option<String>,

    /// Barcode format (auto-detected if not provided)
    #[arg(short = 'f', long)]
    pub format: Option<Format>,

    /// Output style (defaults to [output] style)
    #[arg(long, value_enum)]
    pub style: Option<OutputStyle>,

    /// Blank modules on each side (defaults to [output] quiet_zone)
    #[arg(long, value_name = "N")]
    pub quiet_zone: Option<usize>,

    /// Append the Code39 check character
    #[arg(long)]
    pub checksum: bool,
}

/// Arguments for validating content against a format
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Content to validate
    pub content: String,

    /// Barcode format to validate against
    #[arg(short = 'f', long)]
    pub format: Format,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for detecting the format of content
#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Content to inspect
    pub content: String,

    /// List every accepting format instead of the best match
    #[arg(long)]
    pub all: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Check character algorithms
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChecksumAlgorithm {
    /// GS1 modulo 10 (EAN-13, EAN-8, UPC-A, UPC-E)
    Ean,
    /// ITF-14 modulo 10
    Itf,
    /// Code39 modulo 43
    Code39,
    /// Code93 C and K modulo 47
    Code93,
}

/// Arguments for computing a check character
#[derive(Args, Debug)]
pub struct ChecksumArgs {
    /// Algorithm to apply
    #[arg(value_enum)]
    pub algorithm: ChecksumAlgorithm,

    /// Data to compute the check character for
    pub data: String,
}

/// Arguments for encoding many contents at once
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// File with one content per line (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Barcode format for every line (auto-detected per line if not provided)
    #[arg(short = 'f', long)]
    pub format: Option<Format>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for listing formats
#[derive(Args, Debug)]
pub struct FormatsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective settings as TOML
    Show,
}
