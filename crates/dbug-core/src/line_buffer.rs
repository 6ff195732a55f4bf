//! Per-tick line buffer
//!
//! One slot per producer handle. Slots only grow, so registering a producer
//! late never discards text other producers already wrote this tick.

use crate::types::ProducerHandle;

/// Appended after every logged fragment
pub const SEPARATOR: char = '\t';

/// Inserted by an explicit newline
pub const LINE_BREAK: char = '\n';

#[derive(Debug, Clone, Default)]
pub struct LineBuffer {
    slots: Vec<String>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer pre-sized for `len` producers
    pub fn with_len(len: usize) -> Self {
        Self {
            slots: vec![String::new(); len],
        }
    }

    /// Empty buffer with room for `capacity` producers
    ///
    /// Slots are still created one per registration.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Grow to at least `len` slots, keeping existing content
    pub fn ensure_len(&mut self, len: usize) {
        if len > self.slots.len() {
            self.slots.resize_with(len, String::new);
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Append `text` and a separator to the handle's slot
    ///
    /// Returns false when the handle has no slot.
    pub fn append(&mut self, handle: ProducerHandle, text: &str) -> bool {
        match self.slots.get_mut(handle.index()) {
            Some(slot) => {
                slot.push_str(text);
                slot.push(SEPARATOR);
                true
            }
            None => false,
        }
    }

    /// Append a line break to the handle's slot
    pub fn newline(&mut self, handle: ProducerHandle) -> bool {
        match self.slots.get_mut(handle.index()) {
            Some(slot) => {
                slot.push(LINE_BREAK);
                true
            }
            None => false,
        }
    }

    /// Current content of a single slot
    pub fn line(&self, handle: ProducerHandle) -> Option<&str> {
        self.slots.get(handle.index()).map(String::as_str)
    }

    /// Snapshot of every slot in handle order
    pub fn drain_all(&self) -> Vec<String> {
        self.slots.clone()
    }

    /// Clear every slot
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
        }
    }

    /// Snapshot and clear in one step
    pub fn take_all(&mut self) -> Vec<String> {
        self.slots.iter_mut().map(std::mem::take).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(index: usize) -> ProducerHandle {
        ProducerHandle::new(index)
    }

    #[test]
    fn test_appends_concatenate_in_call_order() {
        let mut buffer = LineBuffer::with_len(1);
        buffer.append(handle(0), "a");
        buffer.append(handle(0), "b");
        buffer.newline(handle(0));
        buffer.append(handle(0), "c");

        assert_eq!(buffer.line(handle(0)), Some("a\tb\t\nc\t"));
    }

    #[test]
    fn test_drain_then_reset_leaves_empty_slots() {
        let mut buffer = LineBuffer::with_len(3);
        buffer.append(handle(0), "x");
        buffer.append(handle(2), "z");

        assert_eq!(buffer.drain_all(), vec!["x\t", "", "z\t"]);
        buffer.reset();
        assert_eq!(buffer.drain_all(), vec!["", "", ""]);
    }

    #[test]
    fn test_take_all_clears() {
        let mut buffer = LineBuffer::with_len(2);
        buffer.append(handle(1), "y");

        assert_eq!(buffer.take_all(), vec!["", "y\t"]);
        assert_eq!(buffer.take_all(), vec!["", ""]);
    }

    #[test]
    fn test_growth_preserves_content() {
        let mut buffer = LineBuffer::with_len(1);
        buffer.append(handle(0), "kept");
        buffer.ensure_len(3);
        buffer.ensure_len(2);

        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.line(handle(0)), Some("kept\t"));
    }

    #[test]
    fn test_capacity_creates_no_slots() {
        let mut buffer = LineBuffer::with_capacity(4);
        assert!(buffer.is_empty());
        assert!(!buffer.append(handle(0), "lost"));

        buffer.ensure_len(1);
        assert_eq!(buffer.take_all(), vec![""]);
    }

    #[test]
    fn test_unknown_handle_is_dropped() {
        let mut buffer = LineBuffer::new();
        assert!(!buffer.append(handle(0), "lost"));
        assert!(!buffer.newline(handle(0)));
        assert!(buffer.is_empty());
    }
}
