use std::panic;

use super::ExtractionError;

/// Ligatures and typographic glyphs that PDF fonts commonly emit in place of
/// plain letters. Left in place they break keyword matching ("Proﬁle").
const GLYPH_REPLACEMENTS: &[(char, &str)] = &[
    ('\u{FB00}', "ff"),
    ('\u{FB01}', "fi"),
    ('\u{FB02}', "fl"),
    ('\u{FB03}', "ffi"),
    ('\u{FB04}', "ffl"),
    ('\u{FB05}', "st"),
    ('\u{FB06}', "st"),
    ('\u{2018}', "'"),
    ('\u{2019}', "'"),
    ('\u{201C}', "\""),
    ('\u{201D}', "\""),
    ('\u{00A0}', " "),
    ('\0', ""),
];

/// Extracts text from an in-memory PDF.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    // pdf-extract panics on some malformed fonts and xref tables
    let raw = panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
        .map_err(|_| ExtractionError::Pdf("PDF parser aborted on malformed input".to_string()))?
        .map_err(|e| ExtractionError::Pdf(e.to_string()))?;

    Ok(normalize_pdf_text(&raw))
}

/// One trimmed, non-empty line per source line, each newline-terminated.
fn normalize_pdf_text(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    for c in raw.chars() {
        match GLYPH_REPLACEMENTS.iter().find(|(glyph, _)| *glyph == c) {
            Some((_, replacement)) => cleaned.push_str(replacement),
            None => cleaned.push(c),
        }
    }

    let mut text = String::with_capacity(cleaned.len());
    for line in cleaned.lines().map(str::trim).filter(|l| !l.is_empty()) {
        text.push_str(line);
        text.push('\n');
    }
    text
}
