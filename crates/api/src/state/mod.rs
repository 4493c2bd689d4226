// Path: crates/api/src/state/mod.rs
//! Core traits for state management.
//!
//! This module defines `StateAccess`, the dyn-safe key-value interface the
//! registry mutates through, plus the owned iterator aliases used by prefix
//! scans. The host substrate supplies the real backend; `memory::MemoryState`
//! is a reference implementation for tests and standalone embedding.

use attest_types::error::StateError;

mod memory;

pub use memory::MemoryState;

/// An owned key-value pair returned from a prefix scan.
pub type StateKVPair = (Vec<u8>, Vec<u8>);
/// A streaming iterator over key-value pairs from the state. `Send`-safe so
/// it can cross task boundaries; `Sync` is omitted as iterators are stateful.
pub type StateScanIter<'a> = Box<dyn Iterator<Item = Result<StateKVPair, StateError>> + Send + 'a>;

/// A dyn-safe trait providing key-value storage operations.
///
/// The registry performs each public operation as one uninterrupted
/// read-validate-write sequence against a `&mut dyn StateAccess`, so a host
/// that serializes calls (or wraps the state in a single mutex) gets the
/// registry's atomicity guarantees for free.
pub trait StateAccess: Send + Sync {
    /// Gets a value by key.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StateError>;

    /// Inserts a key-value pair, overwriting any existing value.
    fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<(), StateError>;

    /// Deletes a key-value pair.
    fn delete(&mut self, key: &[u8]) -> Result<(), StateError>;

    /// Scans for all key-value pairs starting with the given prefix, in
    /// ascending key order.
    fn prefix_scan(&self, prefix: &[u8]) -> Result<StateScanIter<'_>, StateError>;
}

// Blanket implementation to allow `StateAccess` to be used behind a `Box` trait object.
impl<T: StateAccess + ?Sized> StateAccess for Box<T> {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StateError> {
        (**self).get(key)
    }

    fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<(), StateError> {
        (**self).insert(key, value)
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), StateError> {
        (**self).delete(key)
    }

    fn prefix_scan(&self, prefix: &[u8]) -> Result<StateScanIter<'_>, StateError> {
        (**self).prefix_scan(prefix)
    }
}
