use crate::cli::args::ConfigAction;
use barcodec::Settings;
use std::process::ExitCode;

pub fn handle(
    action: ConfigAction,
    settings: &Settings,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            print!("{}", settings.to_toml()?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
