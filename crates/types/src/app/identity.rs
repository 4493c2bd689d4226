// Path: crates/types/src/app/identity.rs

//! Defines the canonical `AccountId` used to identify every principal that
//! interacts with the registry.
//!
//! The host substrate authenticates callers and hands the registry an already
//! verified `AccountId`; this crate never sees keys or signatures. The id is
//! stable across key rotations on the host side, so it is the right value to
//! persist in oracle records and role assignments.

use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// A unique, stable identifier for a principal, represented as a 32-byte array.
#[derive(
    Encode,
    Decode,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Debug,
    Default,
    Hash,
)]
pub struct AccountId(pub [u8; 32]);

impl AsRef<[u8]> for AccountId {
    /// Allows treating the `AccountId` as a byte slice.
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for AccountId {
    /// Allows creating an `AccountId` directly from a 32-byte array.
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Render a short prefix; full ids are noisy in logs.
        for b in &self.0[..4] {
            write!(f, "{:02x}", b)?;
        }
        write!(f, "..")
    }
}
