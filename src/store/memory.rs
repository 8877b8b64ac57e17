use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{CompletionStore, StoreError};

/// In-memory completion set; clones share the same entries
#[derive(Debug, Clone, Default)]
pub struct InMemoryCompletionStore {
    entries: Rc<RefCell<HashMap<String, bool>>>,
}

impl InMemoryCompletionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw entry, distinguishing an absent key from `false`
    pub fn entry(&self, key: &str) -> Option<bool> {
        self.entries.borrow().get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl CompletionStore for InMemoryCompletionStore {
    fn get(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.entry(key).unwrap_or(false))
    }

    fn set(&mut self, key: &str, completed: bool) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), completed);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_key_reads_false() {
        let store = InMemoryCompletionStore::new();
        assert!(!store.get("missing").unwrap());
        assert_eq!(store.entry("missing"), None);
    }

    #[test]
    fn test_clones_share_entries() {
        let store = InMemoryCompletionStore::new();
        let mut handle = store.clone();
        handle.set("intro", true).unwrap();

        assert!(store.get("intro").unwrap());
        assert_eq!(store.len(), 1);

        handle.remove("intro").unwrap();
        assert!(store.is_empty());
    }
}
