use std::sync::OnceLock;

use regex::Regex;

static BOUNDARY: OnceLock<Regex> = OnceLock::new();

/// A boundary is a run of terminators followed by whitespace. The terminators
/// stay with the preceding sentence, the whitespace belongs to neither side.
fn boundary() -> &'static Regex {
    BOUNDARY.get_or_init(|| Regex::new(r"([.!?]+)(\s+)").unwrap())
}

/// Split text into sentence-like units.
///
/// No abbreviation or decimal awareness: `Dr. Smith` splits after `Dr.`.
/// Whitespace-only pieces are dropped, so empty input yields an empty vector.
pub fn split(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for caps in boundary().captures_iter(text) {
        let terminators = match caps.get(1) {
            Some(m) => m,
            None => continue,
        };
        let gap = match caps.get(2) {
            Some(m) => m,
            None => continue,
        };
        let piece = &text[start..terminators.end()];
        if !piece.trim().is_empty() {
            sentences.push(piece.to_string());
        }
        start = gap.end();
    }
    if start < text.len() {
        let rest = &text[start..];
        if !rest.trim().is_empty() {
            sentences.push(rest.to_string());
        }
    }
    sentences
}
