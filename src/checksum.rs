//! Check character arithmetic for every supported symbology.
//!
//! All functions are pure. Callers filter input to the relevant charset first;
//! characters outside it are skipped rather than rejected here.

/// Code39 charset, in check-value order.
pub const CODE39_CHARSET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ-. $/+%";

/// Number of Code93 symbol values: the 43 data characters plus the four shift
/// symbols ($), (%), (/), (+) that only appear as check characters.
pub const CODE93_SYMBOL_COUNT: usize = 47;

fn digits(data: &str) -> impl DoubleEndedIterator<Item = u32> + '_ {
    data.chars().filter_map(|c| c.to_digit(10))
}

/// GS1 modulo-10 check digit (EAN-13, EAN-8, UPC-A, UPC-E).
///
/// Weights alternate 3, 1, 3, ... starting from the rightmost data digit, so
/// for the 12-digit EAN-13 payload even positions (0-indexed from the left)
/// weigh 1 and odd positions weigh 3.
pub fn calculate_ean_checksum(data: &str) -> u8 {
    let sum: u32 = digits(data)
        .rev()
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { d * 3 } else { d })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// Recomputes the check digit over all but the last digit and compares.
pub fn validate_ean_checksum(code: &str) -> bool {
    if code.len() < 2 || !code.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let (payload, check) = code.split_at(code.len() - 1);
    check.as_bytes()[0] - b'0' == calculate_ean_checksum(payload)
}

/// ITF modulo-10 check digit: position 0 weighs 3, position 1 weighs 1, ...
pub fn calculate_itf_checksum(data: &str) -> u8 {
    let sum: u32 = digits(data)
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { d * 3 } else { d })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// Code128 modulo-103 check value over start code + data values.
///
/// The start code counts once; every following value is weighted by its
/// position.
pub fn calculate_code128_checksum(values: &[u8]) -> u8 {
    let Some((&start, rest)) = values.split_first() else {
        return 0;
    };
    let sum = rest
        .iter()
        .enumerate()
        .fold(start as u32, |acc, (i, &v)| acc + v as u32 * (i as u32 + 1));
    (sum % 103) as u8
}

/// Index of `c` in the Code39 charset.
pub fn code39_value(c: char) -> Option<usize> {
    CODE39_CHARSET.find(c)
}

/// Code39 modulo-43 check character.
pub fn calculate_code39_checksum(data: &str) -> char {
    let sum: usize = data.chars().filter_map(code39_value).sum();
    CODE39_CHARSET.as_bytes()[sum % 43] as char
}

/// Code93 C and K check values (modulo 47).
///
/// Values below 43 index [`CODE39_CHARSET`]; 43..47 are the shift symbols.
pub fn calculate_code93_checksum(data: &str) -> [u8; 2] {
    let values: Vec<usize> = data.chars().filter_map(code39_value).collect();
    let c = weighted_mod47(&values, 20);
    let mut with_c = values;
    with_c.push(c);
    let k = weighted_mod47(&with_c, 15);
    [c as u8, k as u8]
}

/// Right-to-left weighted sum, weights cycling 1..=`max_weight`.
fn weighted_mod47(values: &[usize], max_weight: usize) -> usize {
    let sum: usize = values
        .iter()
        .rev()
        .enumerate()
        .map(|(i, v)| v * (i % max_weight + 1))
        .sum();
    sum % CODE93_SYMBOL_COUNT
}
