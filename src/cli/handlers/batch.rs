use crate::cli::{
    args::BatchArgs,
    config::{create_generator, read_lines},
    global::GlobalArgs,
};
use barcodec::{BatchEncoder, BatchSummary, Settings};
use std::process::ExitCode;

pub fn handle(
    args: BatchArgs,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let generator = create_generator(settings)?;
    let lines = read_lines(args.file.as_ref())?;

    let items = BatchEncoder::new(&generator).encode_all(&lines, args.format);
    let summary = BatchSummary::from_items(&items);

    if args.json {
        let results: Vec<serde_json::Value> = items
            .iter()
            .map(|item| match &item.result {
                Ok(encoded) => serde_json::json!({
                    "content": item.content,
                    "format": encoded.format,
                    "text": encoded.text,
                    "bars": encoded.bars,
                }),
                Err(e) => serde_json::json!({
                    "content": item.content,
                    "error": e.to_string(),
                }),
            })
            .collect();
        let output = serde_json::json!({
            "results": results,
            "total": summary.total,
            "succeeded": summary.succeeded,
            "failed": summary.failed,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for (line, item) in items.iter().enumerate() {
            match &item.result {
                Ok(encoded) => println!("{}\t{}\t{}", encoded.format.as_str(), encoded.text, encoded.bars),
                Err(e) => eprintln!("line {}: '{}': {}", line + 1, item.content, e),
            }
        }
        if !global.quiet {
            eprintln!(
                "{} encoded, {} failed, {} total",
                summary.succeeded, summary.failed, summary.total
            );
        }
    }

    Ok(if summary.failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
