//! Rendering surface abstraction

use crate::types::Color;

/// Sink for the merged overlay text
///
/// The aggregator calls [`display`](RenderSurface::display) at most once per
/// tick. Text may contain `<color=#RRGGBB>` markup; surfaces without rich-text
/// support can use [`crate::parse_markup_lossy`].
pub trait RenderSurface {
    /// Show `text` in the given foreground color
    fn display(&mut self, text: &str, color: Color);

    /// Hide the overlay
    fn hide(&mut self) {}
}

/// Surface that records every frame it receives
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub frames: Vec<(String, Color)>,
    pub visible: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the most recent frame
    pub fn last_text(&self) -> Option<&str> {
        self.frames.last().map(|(text, _)| text.as_str())
    }
}

impl RenderSurface for RecordingSurface {
    fn display(&mut self, text: &str, color: Color) {
        self.visible = true;
        self.frames.push((text.to_string(), color));
    }

    fn hide(&mut self) {
        self.visible = false;
    }
}

impl<S: RenderSurface + ?Sized> RenderSurface for &mut S {
    fn display(&mut self, text: &str, color: Color) {
        (**self).display(text, color);
    }

    fn hide(&mut self) {
        (**self).hide();
    }
}
