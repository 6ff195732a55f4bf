//! Tick driver
//!
//! The aggregator is the single reader of the line buffer. Once per tick it
//! applies the current settings, advances the grace period and, when ready,
//! drains every producer's line into one text block for the surface.

use crate::overlay::{Overlay, Phase};
use crate::registry::Registry;
use crate::surface::RenderSurface;
use crate::types::TickSettings;

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still inside the grace period; nothing was drained
    Initializing,
    /// Disabled; buffered text was discarded and the surface hidden
    Hidden,
    /// Merged text for this many producers was displayed
    Rendered { lines: usize },
}

pub struct Aggregator {
    overlay: Overlay,
}

impl Aggregator {
    pub fn new(overlay: Overlay) -> Self {
        Self { overlay }
    }

    /// Context shared with the producers
    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// Run one tick
    ///
    /// Settings take effect before anything else, so precision changes apply
    /// to every formatting call made after this tick.
    pub fn tick<S>(&mut self, settings: &TickSettings, surface: &mut S) -> TickOutcome
    where
        S: RenderSurface + ?Sized,
    {
        let mut state = self.overlay.lock();
        state.apply(settings);

        let was_initializing = match state.phase {
            Phase::Initializing { remaining_ticks } => {
                let remaining_ticks = remaining_ticks.saturating_sub(1);
                if remaining_ticks == 0 {
                    state.become_ready();
                } else {
                    state.phase = Phase::Initializing { remaining_ticks };
                }
                true
            }
            Phase::Ready => false,
        };

        if !settings.enabled {
            state.buffer.reset();
            drop(state);
            surface.hide();
            return TickOutcome::Hidden;
        }

        if was_initializing {
            return TickOutcome::Initializing;
        }

        let lines = state.buffer.take_all();
        let text = merge_lines(&lines, &state.registry, settings.show_names);
        let count = state.registry.len();
        drop(state);

        log::trace!("Drained {} producer line(s), {} bytes", count, text.len());
        surface.display(&text, settings.text_color);

        TickOutcome::Rendered { lines: count }
    }
}

/// Join drained lines in handle order, one terminated line per producer
///
/// Slots beyond the registered producers are skipped.
pub fn merge_lines(lines: &[String], registry: &Registry, show_names: bool) -> String {
    let mut merged = String::new();

    for (info, line) in registry.iter().zip(lines) {
        if show_names {
            merged.push('[');
            merged.push_str(&info.name);
            merged.push_str("]\t");
        }
        merged.push_str(line);
        merged.push('\n');
    }

    merged
}
