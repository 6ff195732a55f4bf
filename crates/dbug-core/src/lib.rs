//! Debug Overlay Core
//!
//! A per-frame debug text aggregator. Independent producers register once,
//! write rich-text fragments to their own line during a tick, and an
//! [`Aggregator`] merges all lines into one block for a [`RenderSurface`]
//! before clearing them for the next tick.
//!
//! # Example
//!
//! ```
//! use dbug_core::{Aggregator, Overlay, OverlayOptions, RecordingSurface, TickSettings};
//!
//! let overlay = Overlay::new(OverlayOptions::default());
//! let player = overlay.register("Player");
//! overlay.mark_ready();
//!
//! player.log_value("grounded", &true);
//! player.log_value("speed", &4.25f32);
//!
//! let mut aggregator = Aggregator::new(overlay);
//! let mut surface = RecordingSurface::new();
//! aggregator.tick(&TickSettings::default(), &mut surface);
//!
//! assert!(surface.last_text().unwrap().contains("speed: 4.25"));
//! ```

mod aggregator;
pub mod format;
mod line_buffer;
pub mod markup;
mod overlay;
mod registry;
mod surface;
mod types;

pub use aggregator::{Aggregator, TickOutcome, merge_lines};
pub use format::Loggable;
pub use line_buffer::{LINE_BREAK, LineBuffer, SEPARATOR};
pub use markup::{MarkupError, parse_markup, parse_markup_lossy, strip_markup};
pub use overlay::{Overlay, OverlayOptions, Phase, Producer};
pub use registry::{ProducerInfo, Registry};
pub use surface::{RecordingSurface, RenderSurface};
pub use types::*;
