//! Terminal rendering surface
//!
//! Keeps the text handed over by the last tick and turns its color markup into
//! styled ratatui lines when the frame is drawn.

use dbug_core::{Color, RenderSurface, parse_markup_lossy};
use ratatui::{
    style::{Color as TermColor, Style},
    text::{Line, Span},
};

const TAB: &str = "    ";

/// Convert an overlay color to a terminal color
pub fn to_term_color(color: Color) -> TermColor {
    let (r, g, b) = color.to_rgb8();
    TermColor::Rgb(r, g, b)
}

#[derive(Debug, Clone, Default)]
pub struct TerminalSurface {
    text: String,
    color: Color,
    visible: bool,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Styled lines of the last displayed text
    pub fn lines(&self) -> Vec<Line<'static>> {
        to_lines(&self.text, self.color)
    }
}

impl RenderSurface for TerminalSurface {
    fn display(&mut self, text: &str, color: Color) {
        self.visible = true;
        self.text.clear();
        self.text.push_str(text);
        self.color = color;
    }

    fn hide(&mut self) {
        self.visible = false;
    }
}

/// Split markup text into terminal lines, uncolored runs use `base`
pub fn to_lines(text: &str, base: Color) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();

    for segment in parse_markup_lossy(text) {
        let style = Style::default().fg(to_term_color(segment.color.unwrap_or(base)));
        let mut parts = segment.text.split('\n').peekable();

        while let Some(part) = parts.next() {
            if !part.is_empty() {
                spans.push(Span::styled(part.replace('\t', TAB), style));
            }
            // Every part but the last ends a line
            if parts.peek().is_some() {
                lines.push(Line::from(std::mem::take(&mut spans)));
            }
        }
    }

    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_lines_follow_newlines() {
        let lines = to_lines("a\tb\t\nc\n", Color::WHITE);
        assert_eq!(lines.len(), 2);
        assert_eq!(plain(&lines[0]), "a    b    ");
        assert_eq!(plain(&lines[1]), "c");
    }

    #[test]
    fn test_markup_colors_spans() {
        let lines = to_lines("hp: <color=#00FF00>true</color>\n", Color::WHITE);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans.len(), 2);
        assert_eq!(lines[0].spans[0].style.fg, Some(TermColor::Rgb(255, 255, 255)));
        assert_eq!(lines[0].spans[1].style.fg, Some(TermColor::Rgb(0, 255, 0)));
        assert_eq!(lines[0].spans[1].content, "true");
    }

    #[test]
    fn test_empty_producer_line_is_kept() {
        let lines = to_lines("\nx\n", Color::BLACK);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].spans.is_empty());
    }

    #[test]
    fn test_display_and_hide() {
        let mut surface = TerminalSurface::new();
        surface.display("x\n", Color::RED);
        assert!(surface.is_visible());
        assert_eq!(surface.lines().len(), 1);

        surface.hide();
        assert!(!surface.is_visible());
    }
}
