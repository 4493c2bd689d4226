// Path: crates/types/src/keys/mod.rs
//! Defines constants for well-known state keys.
//!
//! These constants provide a single source of truth for the keys used to
//! store registry data in the state manager. Using these constants prevents
//! typos and ensures consistency across the modules that access the same
//! state entries.

/// The state key for the administrative principal.
pub const ADMIN_KEY: &[u8] = b"system::admin";
/// The state key for the current verification fee.
pub const VERIFICATION_FEE_KEY: &[u8] = b"system::verification_fee";
/// The state key for the next available oracle id.
pub const ORACLE_NEXT_ID_KEY: &[u8] = b"oracle::next_id";

/// The state key prefix for oracle records, keyed by oracle id.
pub const ORACLE_RECORD_PREFIX: &[u8] = b"oracle::record::";
/// The state key prefix for per-oracle registration fees, keyed by oracle id.
pub const ORACLE_FEE_PREFIX: &[u8] = b"oracle::fee::";

/// The state key prefix for verdicts, keyed by product id.
pub const PRODUCT_VERDICT_PREFIX: &[u8] = b"product::verdict::";
/// The state key prefix for product metadata, keyed by product id.
pub const PRODUCT_METADATA_PREFIX: &[u8] = b"product::metadata::";
/// The state key prefix for content references, keyed by product id.
pub const PRODUCT_CONTENT_REF_PREFIX: &[u8] = b"product::content_ref::";

/// The state key for the count of processed batches.
pub const BATCH_COUNT_KEY: &[u8] = b"batch::count";
/// The state key prefix for batch records, keyed by batch id.
pub const BATCH_RECORD_PREFIX: &[u8] = b"batch::record::";

/// The state key prefix for detection methods, keyed by method id.
pub const DETECTION_METHOD_PREFIX: &[u8] = b"detection::method::";
/// The state key prefix for verifier role assignments, keyed by principal.
pub const VERIFIER_ROLE_PREFIX: &[u8] = b"role::";
