use crate::cli::args::{ChecksumAlgorithm, ChecksumArgs};
use barcodec::checksum::{
    CODE39_CHARSET, calculate_code39_checksum, calculate_code93_checksum, calculate_ean_checksum,
    calculate_itf_checksum, code39_value,
};
use std::process::ExitCode;

/// Names of the Code93 shift symbols, values 43 to 46.
const CODE93_SHIFTS: [&str; 4] = ["($)", "(%)", "(/)", "(+)"];

pub fn handle(args: ChecksumArgs) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let check = match args.algorithm {
        ChecksumAlgorithm::Ean | ChecksumAlgorithm::Itf => {
            if !args.data.chars().any(|c| c.is_ascii_digit()) {
                return Err(format!("'{}' contains no digits", args.data).into());
            }
            let digit = match args.algorithm {
                ChecksumAlgorithm::Ean => calculate_ean_checksum(&args.data),
                _ => calculate_itf_checksum(&args.data),
            };
            digit.to_string()
        }
        ChecksumAlgorithm::Code39 => calculate_code39_checksum(&code39_text(&args.data)?).to_string(),
        ChecksumAlgorithm::Code93 => {
            let [c, k] = calculate_code93_checksum(&code39_text(&args.data)?);
            format!("{}{}", code93_symbol(c), code93_symbol(k))
        }
    };

    println!("{}", check);
    Ok(ExitCode::SUCCESS)
}

/// Upper-cased data, rejected when empty or outside the Code39 charset.
fn code39_text(data: &str) -> Result<String, Box<dyn std::error::Error>> {
    let text = data.to_uppercase();
    if text.is_empty() {
        return Err("no data to compute a check character for".into());
    }
    if let Some(ch) = text.chars().find(|&c| code39_value(c).is_none()) {
        return Err(format!("character '{}' is not in the Code39 charset", ch).into());
    }
    Ok(text)
}

fn code93_symbol(value: u8) -> String {
    let value = value as usize;
    match CODE39_CHARSET.chars().nth(value) {
        Some(ch) => ch.to_string(),
        None => CODE93_SHIFTS[value - CODE39_CHARSET.len()].to_string(),
    }
}
