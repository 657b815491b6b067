use serde::{Deserialize, Serialize};

use super::format::Format;

/// Output of an encoder: a module pattern plus the text actually encoded.
///
/// `bars` is a string over `{0, 1}` in left-to-right order, `1` being an ink
/// module and `0` a space module. `text` is the canonical payload after
/// padding, checksum insertion and case normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EncodedBarcode {
    pub bars: String,
    pub text: String,
    pub format: Format,
}

impl EncodedBarcode {
    pub(crate) fn new(bars: String, text: String, format: Format) -> Self {
        Self { bars, text, format }
    }

    /// Number of modules in the symbol.
    pub fn width(&self) -> usize {
        self.bars.len()
    }

    /// Modules as booleans (`true` = bar).
    pub fn modules(&self) -> impl Iterator<Item = bool> + '_ {
        self.bars.bytes().map(|b| b == b'1')
    }

    /// Run-length view of the pattern: `(is_bar, width)` pairs.
    pub fn runs(&self) -> Vec<(bool, usize)> {
        let mut runs: Vec<(bool, usize)> = Vec::new();
        for module in self.modules() {
            match runs.last_mut() {
                Some((bar, width)) if *bar == module => *width += 1,
                _ => runs.push((module, 1)),
            }
        }
        runs
    }

    /// Terminal rendering: `█` for bars, space for gaps.
    pub fn to_visual(&self) -> String {
        self.modules()
            .map(|bar| if bar { '█' } else { ' ' })
            .collect()
    }

    /// The pattern surrounded by `left` and `right` blank modules.
    pub fn with_quiet_zone(&self, left: usize, right: usize) -> String {
        let mut out = String::with_capacity(left + self.bars.len() + right);
        out.extend(std::iter::repeat_n('0', left));
        out.push_str(&self.bars);
        out.extend(std::iter::repeat_n('0', right));
        out
    }

    /// Caption a renderer should print under the bars.
    ///
    /// Code39 captions carry the `*` start/stop sentinels.
    pub fn caption(&self) -> String {
        match self.format {
            Format::Code39 => format!("*{}*", self.text),
            _ => self.text.clone(),
        }
    }

    /// Whether `bars` is a non-empty string over `{0, 1}`.
    pub fn is_well_formed(&self) -> bool {
        !self.bars.is_empty() && self.bars.bytes().all(|b| b == b'0' || b == b'1')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EncodedBarcode {
        EncodedBarcode::new("1100101".to_string(), "X".to_string(), Format::Code128)
    }

    #[test]
    fn test_runs() {
        assert_eq!(
            sample().runs(),
            vec![(true, 2), (false, 2), (true, 1), (false, 1), (true, 1)]
        );
    }

    #[test]
    fn test_visual() {
        let encoded = EncodedBarcode::new("101".to_string(), "1".to_string(), Format::Ean8);
        assert_eq!(encoded.to_visual(), "█ █");
    }

    #[test]
    fn test_quiet_zone() {
        let encoded = EncodedBarcode::new("101".to_string(), "1".to_string(), Format::Ean8);
        assert_eq!(encoded.with_quiet_zone(2, 3), "00101000");
        assert_eq!(encoded.with_quiet_zone(0, 0), "101");
    }

    #[test]
    fn test_caption() {
        let code39 = EncodedBarcode::new("1".to_string(), "HELLO".to_string(), Format::Code39);
        assert_eq!(code39.caption(), "*HELLO*");
        assert_eq!(sample().caption(), "X");
    }

    #[test]
    fn test_well_formed() {
        assert!(sample().is_well_formed());
        let empty = EncodedBarcode::new(String::new(), String::new(), Format::Code128);
        assert!(!empty.is_well_formed());
    }
}
