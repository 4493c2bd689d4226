// Path: crates/types/src/app/mod.rs
//! Core application-level data structures for the attestation registry.

/// Data structures for on-chain identity, including the canonical AccountId.
pub mod identity;
/// Data structures owned by the registry: oracles, verdicts, batches, roles.
pub mod registry;

pub use identity::AccountId;
pub use registry::{
    BatchVerification, Oracle, ProductMetadata, VerificationResult, VerifierRole,
};
