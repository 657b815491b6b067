use crate::checksum::code39_value;
use crate::core::format::Format;
use crate::core::registry::FormatRegistry;

/// Infers the symbology of raw content from its shape.
///
/// [`detect`](Self::detect) runs an ordered cascade where the first match
/// wins; [`detect_all`](Self::detect_all) collects every format whose
/// encoder accepts the content. Formats missing from the registry are
/// never reported.
#[derive(Debug, Clone, Copy)]
pub struct FormatDetector<'a> {
    registry: &'a FormatRegistry,
}

impl<'a> FormatDetector<'a> {
    pub fn new(registry: &'a FormatRegistry) -> Self {
        Self { registry }
    }

    fn accepts(&self, format: Format, data: &str) -> bool {
        self.registry
            .get_encoder(format)
            .is_ok_and(|encoder| encoder.validate(data))
    }

    /// The most specific format for `data`, or `None`.
    ///
    /// Pure digit strings are tried as EAN-13, EAN-8, UPC-A, UPC-E and
    /// ITF-14 by length; then Codabar (A-D guards), Code39, Code93 and
    /// finally Code128 as the catch-all.
    pub fn detect(&self, data: &str) -> Option<Format> {
        self.detect_with_content(data).map(|(format, _)| format)
    }

    /// Like [`detect`](Self::detect), also returning the content in the form
    /// the format accepted: trimmed, and upper-cased for Code39 and Code93.
    pub fn detect_with_content(&self, data: &str) -> Option<(Format, String)> {
        let trimmed = data.trim();
        if trimmed.is_empty() {
            return None;
        }

        let all_digits = trimmed.bytes().all(|b| b.is_ascii_digit());
        if all_digits {
            let by_length: &[Format] = match trimmed.len() {
                13 => &[Format::Ean13],
                8 => &[Format::Ean8, Format::Upce],
                12 => &[Format::Upca],
                6 | 7 => &[Format::Upce],
                14 => &[Format::Itf14],
                _ => &[],
            };
            if let Some(&format) = by_length.iter().find(|&&f| self.accepts(f, trimmed)) {
                return Some((format, trimmed.to_string()));
            }
        }

        let guarded =
            |c: Option<char>| c.is_some_and(|c| matches!(c.to_ascii_uppercase(), 'A'..='D'));
        if guarded(trimmed.chars().next())
            && guarded(trimmed.chars().last())
            && self.accepts(Format::Codabar, trimmed)
        {
            return Some((Format::Codabar, trimmed.to_string()));
        }

        if trimmed
            .chars()
            .all(|c| code39_value(c.to_ascii_uppercase()).is_some())
        {
            let upper = trimmed.to_ascii_uppercase();
            if self.accepts(Format::Code39, &upper) {
                return Some((Format::Code39, upper));
            }
            if self.accepts(Format::Code93, &upper) {
                return Some((Format::Code93, upper));
            }
        }

        if self.accepts(Format::Code128, trimmed) {
            return Some((Format::Code128, trimmed.to_string()));
        }

        None
    }

    /// Every registered format that accepts `data` as-is, in canonical order.
    pub fn detect_all(&self, data: &str) -> Vec<Format> {
        self.registry
            .list_formats()
            .into_iter()
            .filter(|&format| self.accepts(format, data))
            .collect()
    }
}
