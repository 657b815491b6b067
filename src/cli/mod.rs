mod args;
mod config;
mod global;
mod handlers;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use args::{
    BatchArgs, ChecksumArgs, ConfigAction, DetectArgs, EncodeArgs, FormatsArgs, ValidateArgs,
};
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "barcodec")]
#[command(version)]
#[command(
    about = "Encode, validate and detect 1-D barcodes (EAN, UPC, Code128, Code39, Code93, ITF-14, Codabar)",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode content into a module pattern
    Encode(EncodeArgs),

    /// Check content against a format
    Validate(ValidateArgs),

    /// Guess the format of content
    Detect(DetectArgs),

    /// Compute a check character
    Checksum(ChecksumArgs),

    /// Encode one content per line
    Batch(BatchArgs),

    /// List supported formats
    Formats(FormatsArgs),

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

pub fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    cli.global.init_logging();

    let settings = config::load_settings(&cli.global)?;

    match cli.command {
        Commands::Encode(args) => handlers::encode::handle(args, &cli.global, &settings),
        Commands::Validate(args) => handlers::validate::handle(args, &settings),
        Commands::Detect(args) => handlers::detect::handle(args, &settings),
        Commands::Checksum(args) => handlers::checksum::handle(args),
        Commands::Batch(args) => handlers::batch::handle(args, &cli.global, &settings),
        Commands::Formats(args) => handlers::formats::handle(args, &settings),
        Commands::Config { action } => handlers::config::handle(action, &settings),
    }
}
