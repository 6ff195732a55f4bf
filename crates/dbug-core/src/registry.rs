//! Producer registry

use crate::types::ProducerHandle;

/// A registered producer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProducerInfo {
    pub handle: ProducerHandle,
    /// Display name shown in front of the producer's line
    pub name: String,
}

/// Hands out handles in registration order
///
/// Registering the same identity twice yields two handles; callers are
/// expected to register exactly once.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    producers: Vec<ProducerInfo>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a producer and return its handle
    pub fn register(&mut self, name: impl Into<String>) -> ProducerHandle {
        let handle = ProducerHandle::new(self.producers.len());
        self.producers.push(ProducerInfo {
            handle,
            name: name.into(),
        });
        handle
    }

    /// Display name of a producer
    pub fn name(&self, handle: ProducerHandle) -> Option<&str> {
        self.producers
            .get(handle.index())
            .map(|info| info.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.producers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.producers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProducerInfo> {
        self.producers.iter()
    }
}
