// Path: crates/api/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]

//! # Attestation Registry API
//!
//! Trait seams between the registry's state-transition logic and the host
//! substrate that sequences calls, authenticates principals, and moves value.
//!
//! The registry core is a plain sequential state machine: every public
//! operation is a single read-validate-write step over a `&mut dyn
//! StateAccess`, with the caller's identity and the current block height
//! supplied through [`transaction::context::TxContext`]. Nothing in this
//! crate performs I/O; the traits exist so hosts can plug in their own
//! storage, fee transfer, and dispatch plumbing.

/// The black-box value-transfer seam used to collect verification fees.
pub mod fees;
/// The dispatchable service trait implemented by the registry.
pub mod services;
/// Key-value state access traits and the in-memory reference backend.
pub mod state;
/// The authenticated, read-only call context.
pub mod transaction;
