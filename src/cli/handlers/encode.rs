use crate::cli::{
    args::EncodeArgs,
    config::{create_generator, read_content},
    global::GlobalArgs,
};
use barcodec::{EncodedBarcode, OutputStyle, Settings};
use std::process::ExitCode;

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut settings = settings.clone();
    if args.checksum {
        settings.code39.include_checksum = true;
    }

    let generator = create_generator(&settings)?;
    let content = read_content(args.content)?;
    let encoded = generator.generate(&content, args.format)?;

    let style = args.style.unwrap_or(settings.output.style);
    let quiet_zone = args.quiet_zone.unwrap_or(settings.output.quiet_zone);

    match style {
        OutputStyle::Bits => println!("{}", encoded.with_quiet_zone(quiet_zone, quiet_zone)),
        OutputStyle::Visual => {
            println!("{}", render_visual(&encoded, quiet_zone));
            if !global.quiet {
                println!("{} ({})", encoded.caption(), encoded.format);
            }
        }
        OutputStyle::Json => {
            let output = serde_json::json!({
                "format": encoded.format,
                "text": encoded.text,
                "caption": encoded.caption(),
                "width": encoded.width(),
                "bars": encoded.with_quiet_zone(quiet_zone, quiet_zone),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn render_visual(encoded: &EncodedBarcode, quiet_zone: usize) -> String {
    let margin = " ".repeat(quiet_zone);
    format!("{margin}{}{margin}", encoded.to_visual())
}
