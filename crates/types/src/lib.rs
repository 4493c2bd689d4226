// Path: crates/types/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]

//! # Attestation Registry Types
//!
//! This crate is the foundational library for the attestation registry,
//! containing all core data structures, error types, and configuration
//! objects.
//!
//! ## Architectural Role
//!
//! As the base crate, `attest-types` has minimal dependencies and is itself a
//! dependency for every other crate in the workspace. This structure prevents
//! circular dependencies and provides a stable, canonical definition for
//! shared types like `AccountId`, `Oracle`, `VerificationResult`, and the
//! registry error enums.

/// Core application-level data structures like `AccountId` and `Oracle`.
pub mod app;
/// The canonical, deterministic binary codec for consensus-critical state.
pub mod codec;
/// A unified set of all error types used across the workspace.
pub mod error;
/// Constants for well-known state keys used for accessing data in the state manager.
pub mod keys;
/// Configuration structures for the registry service.
pub mod service_configs;
