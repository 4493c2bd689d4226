// Path: crates/api/src/state/memory.rs
//! A BTreeMap-backed `StateAccess` implementation.

use crate::state::{StateAccess, StateScanIter};
use attest_types::error::StateError;
use std::collections::BTreeMap;

/// An in-memory state backend with ordered keys.
///
/// Suitable for tests and for embedders that keep the whole registry state
/// resident; durability is the host's concern, not this crate's.
#[derive(Debug, Clone, Default)]
pub struct MemoryState {
    data: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl MemoryState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of stored entries. Mostly useful in tests.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl StateAccess for MemoryState {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StateError> {
        Ok(self.data.get(key).cloned())
    }

    fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<(), StateError> {
        self.data.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), StateError> {
        self.data.remove(key);
        Ok(())
    }

    fn prefix_scan(&self, prefix: &[u8]) -> Result<StateScanIter<'_>, StateError> {
        let iter = self
            .data
            .range(prefix.to_vec()..)
            .take_while({
                let prefix = prefix.to_vec();
                move |(k, _)| k.starts_with(&prefix)
            })
            .map(|(k, v)| Ok((k.clone(), v.clone())));
        Ok(Box::new(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_get_delete() {
        let mut state = MemoryState::new();
        assert!(state.get(b"a").unwrap().is_none());
        state.insert(b"a", b"1").unwrap();
        assert_eq!(state.get(b"a").unwrap(), Some(b"1".to_vec()));
        state.insert(b"a", b"2").unwrap();
        assert_eq!(state.get(b"a").unwrap(), Some(b"2".to_vec()));
        state.delete(b"a").unwrap();
        assert!(state.get(b"a").unwrap().is_none());
    }

    #[test]
    fn prefix_scan_is_bounded_and_ordered() {
        let mut state = MemoryState::new();
        state.insert(b"oracle::record::a", b"1").unwrap();
        state.insert(b"oracle::record::b", b"2").unwrap();
        state.insert(b"product::verdict::a", b"3").unwrap();

        let hits: Vec<_> = state
            .prefix_scan(b"oracle::record::")
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].0, b"oracle::record::a".to_vec());
        assert_eq!(hits[1].0, b"oracle::record::b".to_vec());
    }
}
