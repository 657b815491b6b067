use crate::cli::{args::DetectArgs, config::create_generator};
use barcodec::{Format, Settings, ValidationError};
use std::process::ExitCode;

pub fn handle(args: DetectArgs, settings: &Settings) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let generator = create_generator(settings)?;
    let detector = generator.detector();

    let formats: Vec<Format> = if args.all {
        detector.detect_all(&args.content)
    } else {
        detector.detect(&args.content).into_iter().collect()
    };

    if args.json {
        let output = if args.all {
            serde_json::json!({ "formats": formats })
        } else {
            serde_json::json!({ "format": formats.first() })
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if formats.is_empty() {
        let err = ValidationError::Undetectable {
            value: args.content.clone(),
        };
        eprintln!("{}", err);
    } else {
        for format in &formats {
            println!("{:<10} {}", format.as_str(), format.name());
        }
    }

    Ok(if formats.is_empty() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
