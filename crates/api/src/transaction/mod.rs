// Path: crates/api/src/transaction/mod.rs
//! Types describing a single authenticated call into the registry.

/// The stable, read-only execution context.
pub mod context;

pub use context::TxContext;
