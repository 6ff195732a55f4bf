//! Shared overlay context and producer handles
//!
//! An [`Overlay`] owns the registry, the line buffer and the settings in effect
//! for the current tick. Producers never touch it directly: registering returns
//! a [`Producer`] bound to the context, and every log call goes through that.

use crate::format::{Loggable, format_color_tag};
use crate::line_buffer::LineBuffer;
use crate::registry::Registry;
use crate::types::{Color, Precision, ProducerHandle, TickSettings};
use std::sync::{Arc, Mutex, MutexGuard};

/// Construction options for an [`Overlay`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayOptions {
    /// Ticks to wait before draining starts; 0 means ready immediately
    pub grace_ticks: u32,

    /// Buffer writes made before readiness and replay them on the transition
    /// instead of dropping them
    pub queue_until_ready: bool,

    /// Reserve line buffer room for this many producers
    pub expected_producers: usize,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            grace_ticks: 1,
            queue_until_ready: false,
            expected_producers: 0,
        }
    }
}

/// Readiness of the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting registrations, producing no output
    Initializing { remaining_ticks: u32 },
    /// Draining and rendering every tick
    Ready,
}

#[derive(Debug, Clone)]
enum Fragment {
    Text(String),
    Newline,
}

#[derive(Debug)]
pub(crate) struct OverlayState {
    pub(crate) registry: Registry,
    pub(crate) buffer: LineBuffer,
    pub(crate) phase: Phase,
    pub(crate) settings: TickSettings,
    queue_until_ready: bool,
    pending: Vec<(ProducerHandle, Fragment)>,
}

impl OverlayState {
    fn write(&mut self, handle: ProducerHandle, fragment: Fragment) {
        if !self.settings.enabled {
            return;
        }

        match self.phase {
            Phase::Ready => {
                let stored = match &fragment {
                    Fragment::Text(text) => self.buffer.append(handle, text),
                    Fragment::Newline => self.buffer.newline(handle),
                };
                if !stored {
                    log::trace!("Dropped write for unknown producer {}", handle);
                }
            }
            Phase::Initializing { .. } if self.queue_until_ready => {
                self.pending.push((handle, fragment));
            }
            Phase::Initializing { .. } => {}
        }
    }

    /// Switch to Ready, replaying queued writes
    pub(crate) fn become_ready(&mut self) {
        if self.phase == Phase::Ready {
            return;
        }

        self.phase = Phase::Ready;
        self.buffer.ensure_len(self.registry.len());

        let pending = std::mem::take(&mut self.pending);
        log::debug!(
            "Overlay ready with {} producer(s), replaying {} queued write(s)",
            self.registry.len(),
            pending.len()
        );
        for (handle, fragment) in pending {
            self.write(handle, fragment);
        }
    }

    /// Apply the settings of a new tick
    pub(crate) fn apply(&mut self, settings: &TickSettings) {
        if settings.enabled != self.settings.enabled {
            log::debug!("Overlay enabled: {}", settings.enabled);
        }
        self.settings = settings.clone();
        if !self.settings.enabled {
            self.pending.clear();
        }
    }
}

/// Handle to the shared overlay context
///
/// Cloning is cheap; all clones see the same registry and buffer.
#[derive(Debug, Clone)]
pub struct Overlay {
    inner: Arc<Mutex<OverlayState>>,
}

impl Overlay {
    pub fn new(options: OverlayOptions) -> Self {
        let phase = if options.grace_ticks == 0 {
            Phase::Ready
        } else {
            Phase::Initializing {
                remaining_ticks: options.grace_ticks,
            }
        };

        Self {
            inner: Arc::new(Mutex::new(OverlayState {
                registry: Registry::new(),
                buffer: LineBuffer::with_capacity(options.expected_producers),
                phase,
                settings: TickSettings::default(),
                queue_until_ready: options.queue_until_ready,
                pending: Vec::new(),
            })),
        }
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, OverlayState> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            log::warn!("Overlay lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Register a producer under a display name
    ///
    /// Call once per producer. The buffer grows to fit the new handle without
    /// touching text already written this tick.
    pub fn register(&self, name: impl Into<String>) -> Producer {
        let mut state = self.lock();
        let name = name.into();
        let handle = state.registry.register(name.clone());
        let len = state.registry.len();
        state.buffer.ensure_len(len);
        log::debug!("Registered producer {} as {}", name, handle);

        Producer {
            overlay: self.clone(),
            handle,
        }
    }

    /// Append a fragment for a producer
    ///
    /// Dropped silently while initializing (unless queueing) or disabled.
    pub fn append(&self, handle: ProducerHandle, text: impl Into<String>) {
        self.lock().write(handle, Fragment::Text(text.into()));
    }

    /// Start a new line for a producer
    pub fn newline(&self, handle: ProducerHandle) {
        self.lock().write(handle, Fragment::Newline);
    }

    /// Skip the remaining grace period
    ///
    /// Hosts that know every producer has registered call this before the
    /// first tick instead of relying on the grace timer.
    pub fn mark_ready(&self) {
        self.lock().become_ready();
    }

    pub fn phase(&self) -> Phase {
        self.lock().phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase() == Phase::Ready
    }

    pub fn is_enabled(&self) -> bool {
        self.lock().settings.enabled
    }

    /// Precision applied to formatting calls right now
    pub fn precision(&self) -> Precision {
        self.lock().settings.precision
    }

    pub fn producer_count(&self) -> usize {
        self.lock().registry.len()
    }

    /// Display name of a registered producer
    pub fn producer_name(&self, handle: ProducerHandle) -> Option<String> {
        self.lock().registry.name(handle).map(str::to_string)
    }

    /// Snapshot of every line without clearing
    pub fn drain_all(&self) -> Vec<String> {
        self.lock().buffer.drain_all()
    }

    /// Clear every line
    pub fn reset(&self) {
        self.lock().buffer.reset();
    }
}

/// A registered producer's write handle
#[derive(Debug, Clone)]
pub struct Producer {
    overlay: Overlay,
    handle: ProducerHandle,
}

impl Producer {
    pub fn handle(&self) -> ProducerHandle {
        self.handle
    }

    /// Log a plain message
    pub fn log(&self, message: impl Into<String>) {
        self.overlay.append(self.handle, message);
    }

    /// Log a message in a color
    pub fn log_colored(&self, message: &str, color: Color) {
        self.overlay.append(self.handle, format_color_tag(message, color));
    }

    /// Log a labeled value with the precision currently in effect
    ///
    /// Formatting runs without the lock held, so a [`Loggable`] impl may log
    /// through other producers.
    pub fn log_value<T: Loggable + ?Sized>(&self, label: &str, value: &T) {
        let precision = self.overlay.precision();
        let text = value.format_labeled(label, &precision);
        self.overlay.append(self.handle, text);
    }

    /// Following log calls start on a new line
    pub fn newline(&self) {
        self.overlay.newline(self.handle);
    }
}
