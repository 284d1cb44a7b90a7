use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Opaque reference to a byte buffer held by a [`PreviewStore`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreviewHandle(u64);

/// Registry of renderable byte buffers.
///
/// Handles stay resolvable until released; releasing is observable exactly
/// once per handle, and resolving a released handle yields `None`.
#[derive(Debug, Default)]
pub struct PreviewStore {
    entries: Mutex<HashMap<u64, Arc<[u8]>>>,
    next_id: AtomicU64,
}

impl PreviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register bytes and hand out a live handle
    pub fn create<B: Into<Arc<[u8]>>>(&self, bytes: B) -> PreviewHandle {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.entries.lock().insert(id, bytes.into());
        PreviewHandle(id)
    }

    pub fn resolve(&self, handle: PreviewHandle) -> Option<Arc<[u8]>> {
        self.entries.lock().get(&handle.0).cloned()
    }

    /// Drop the bytes behind `handle`. Returns `true` only the first time a
    /// live handle is released.
    pub fn release(&self, handle: PreviewHandle) -> bool {
        self.entries.lock().remove(&handle.0).is_some()
    }

    /// Number of live handles
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_resolve() {
        let store = PreviewStore::new();
        let handle = store.create(vec![1u8, 2, 3]);

        let bytes = store.resolve(handle).unwrap();
        assert_eq!(&bytes[..], &[1, 2, 3]);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_release_exactly_once() {
        let store = PreviewStore::new();
        let handle = store.create(vec![0u8; 16]);

        assert!(store.release(handle));
        assert!(!store.release(handle));
        assert!(store.resolve(handle).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_handles_are_distinct() {
        let store = PreviewStore::new();
        let a = store.create(vec![1u8]);
        let b = store.create(vec![2u8]);

        assert_ne!(a, b);
        store.release(a);
        assert_eq!(&store.resolve(b).unwrap()[..], &[2]);
    }
}
