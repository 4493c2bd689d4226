// Path: crates/registry/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]

//! # Attestation Registry
//!
//! A trust registry for product-authenticity attestations. A closed set of
//! authorized oracles submit signed verdicts (authentic/counterfeit plus a
//! confidence score) about products; each verdict is backed by a payable fee
//! and a content-addressed metadata reference. The registry enforces who may
//! register as an oracle, who may submit verdicts, how verdicts expire, and
//! how an administrator governs oracle reputation and system parameters.
//!
//! ## Architecture
//!
//! The crate is a plain sequential state machine over a key-value
//! [`StateAccess`](attest_api::state::StateAccess) backend:
//!
//! - [`validation`] holds the pure input predicates,
//! - [`oracles`] owns the oracle identity and fee tables,
//! - [`ledger`] owns verdicts, product metadata, and expiry enforcement,
//! - [`batch`] orchestrates multi-item submissions with partial-commit
//!   semantics,
//! - [`governance`] gates and applies all administrative mutations,
//! - [`service`] exposes everything as a `method@v1` dispatch surface.
//!
//! The host substrate authenticates callers, serializes calls into a single
//! total order, and supplies logical time as the block height. Fee movement
//! is delegated to the host through
//! [`FeeCollector`](attest_api::fees::FeeCollector).

/// Batch submission orchestration.
pub mod batch;
/// Administrative governance operations.
pub mod governance;
/// Verdict storage and expiry enforcement.
pub mod ledger;
/// Oracle lifecycle and identity resolution.
pub mod oracles;
/// The dispatchable service surface.
pub mod service;
/// Pure input validation predicates.
pub mod validation;

pub use service::AttestationService;
