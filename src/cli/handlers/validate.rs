use crate::cli::{args::ValidateArgs, config::create_generator};
use barcodec::Settings;
use std::process::ExitCode;

pub fn handle(
    args: ValidateArgs,
    settings: &Settings,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let generator = create_generator(settings)?;
    let result = generator
        .validator()
        .validate_detailed(&args.content, args.format);

    if args.json {
        let output = serde_json::json!({
            "format": args.format,
            "content": args.content,
            "valid": result.is_ok(),
            "error": result.as_ref().err().map(ToString::to_string),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        match &result {
            Ok(()) => println!("valid"),
            Err(e) => println!("invalid: {}", e),
        }
    }

    Ok(if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
