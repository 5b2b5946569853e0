//! Helpers for log output.

/// Single-line preview of message content, at most `max_chars` characters.
///
/// Line breaks become spaces; a trailing `…` marks a cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let mut out: String = chars
        .by_ref()
        .take(max_chars)
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if chars.next().is_some() {
        out.push('…');
    }
    out
}
