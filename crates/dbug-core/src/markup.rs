//! Overlay markup parsing
//!
//! Turns `<color=#RRGGBB>..</color>` tags back into styled segments so that
//! surfaces without rich-text support can render the merged overlay text.

use crate::types::{Color, StyledSegment};
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Errors that can occur during markup parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    #[error("Closing tag at byte {0} has no matching opening tag")]
    UnexpectedClose(usize),

    #[error("{0} color tag(s) left open at end of text")]
    Unclosed(usize),
}

/// Parse markup, rejecting unbalanced tags
pub fn parse_markup(text: &str) -> Result<Vec<StyledSegment>, MarkupError> {
    parse(text, true)
}

/// Parse markup, keeping stray closing tags as literal text and letting
/// unclosed tags run to the end of the text
pub fn parse_markup_lossy(text: &str) -> Vec<StyledSegment> {
    // Lossy parsing never reports an error
    parse(text, false).unwrap_or_else(|_| vec![StyledSegment::new(text)])
}

/// Text with all well-formed tags removed
pub fn strip_markup(text: &str) -> String {
    parse_markup_lossy(text)
        .into_iter()
        .map(|seg| seg.text)
        .collect()
}

fn tag_regex() -> &'static Regex {
    static TAG_REGEX: OnceLock<Regex> = OnceLock::new();

    TAG_REGEX.get_or_init(|| {
        // Match <color=#RRGGBB> (hash optional) or </color>
        Regex::new(r"(?i)<color=#?([0-9a-f]{6})>|</color>").unwrap()
    })
}

fn parse(text: &str, strict: bool) -> Result<Vec<StyledSegment>, MarkupError> {
    let mut segments = Vec::new();
    let mut stack: Vec<Color> = Vec::new();
    let mut pending = String::new();
    let mut cursor = 0;

    for captures in tag_regex().captures_iter(text) {
        let Some(tag) = captures.get(0) else {
            continue;
        };
        pending.push_str(&text[cursor..tag.start()]);
        cursor = tag.end();

        match captures.get(1) {
            Some(hex) => {
                flush(&mut segments, &mut pending, stack.last().copied());
                // The regex guarantees six hex digits
                let color = Color::from_hex(hex.as_str()).unwrap_or_default();
                stack.push(color);
            }
            None if stack.is_empty() => {
                if strict {
                    return Err(MarkupError::UnexpectedClose(tag.start()));
                }
                pending.push_str(tag.as_str());
            }
            None => {
                flush(&mut segments, &mut pending, stack.last().copied());
                stack.pop();
            }
        }
    }

    pending.push_str(&text[cursor..]);
    flush(&mut segments, &mut pending, stack.last().copied());

    if strict && !stack.is_empty() {
        return Err(MarkupError::Unclosed(stack.len()));
    }

    Ok(segments)
}

fn flush(segments: &mut Vec<StyledSegment>, pending: &mut String, color: Option<Color>) {
    if pending.is_empty() {
        return;
    }

    let text = std::mem::take(pending);
    // Merge with the previous run when the style did not change
    if let Some(last) = segments.last_mut() {
        if last.color == color {
            last.text.push_str(&text);
            return;
        }
    }
    segments.push(StyledSegment { text, color });
}
