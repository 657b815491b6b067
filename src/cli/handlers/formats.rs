use crate::cli::{args::FormatsArgs, config::create_generator};
use barcodec::Settings;
use std::process::ExitCode;

pub fn handle(args: FormatsArgs, settings: &Settings) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let generator = create_generator(settings)?;
    let formats = generator.registry().list_formats();

    if args.json {
        let output: Vec<serde_json::Value> = formats
            .iter()
            .map(|format| {
                serde_json::json!({
                    "id": format.as_str(),
                    "name": format.name(),
                    "length": format.fixed_text_len(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("Available formats:\n");
    for format in formats {
        let length = match format.fixed_text_len() {
            Some(len) => format!("{} digits", len),
            None => "variable".to_string(),
        };
        println!("  {:<10} {:<10} {}", format.as_str(), format.name(), length);
    }

    Ok(ExitCode::SUCCESS)
}
