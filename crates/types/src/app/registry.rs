// Path: crates/types/src/app/registry.rs

//! Canonical records persisted by the attestation registry.
//!
//! Every struct here is written to state through the canonical SCALE codec
//! (`crate::codec`), so field order is consensus-critical: reordering fields
//! changes the binary representation of existing state.

use crate::app::identity::AccountId;
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// An authorized verdict submitter.
///
/// Oracle ids are dense and monotonically assigned at registration. Records
/// are never deleted; deactivation flips `active` and leaves everything else,
/// including already submitted verdicts, intact.
#[derive(Encode, Decode, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Oracle {
    /// The authenticated principal this oracle submits under.
    pub principal: AccountId,
    /// Reputation score in `0..=100`, adjusted only by governance.
    pub score: u8,
    /// Soft lifecycle flag. A deactivated oracle keeps its id and record.
    pub active: bool,
    /// Block height at which the oracle was registered.
    pub registered_at: u64,
}

/// A single authenticity verdict for one product.
///
/// At most one verdict exists per product id; a later submission overwrites
/// the prior one (last-write-wins, no versioning).
#[derive(Encode, Decode, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    /// The product this verdict applies to. Always positive.
    pub product_id: u64,
    /// The verdict itself: authentic or counterfeit.
    pub is_authentic: bool,
    /// Block height at which the verdict was submitted.
    pub timestamp: u64,
    /// The id of the submitting oracle.
    pub oracle_id: u64,
    /// Confidence level in `0..=100`.
    pub confidence: u8,
}

/// Evidentiary metadata stored alongside a verdict.
///
/// Created atomically with its `VerificationResult` and overwritten under the
/// same last-write-wins policy. `expiry` is recomputed on every overwrite.
#[derive(Encode, Decode, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProductMetadata {
    /// Content hash of the off-system evidence (non-empty, typically 32 bytes).
    pub content_hash: Vec<u8>,
    /// Human-readable description. Never empty.
    pub description: String,
    /// Block height after which the verdict is considered stale.
    pub expiry: u64,
    /// Verdict liveness flag.
    pub status: bool,
}

/// The recorded contents of one batch submission.
///
/// Batch ids are derived from the batch count at creation time, so they are
/// dense and monotonic. The record is written before any item is processed
/// and is not removed when an item fails.
#[derive(Encode, Decode, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BatchVerification {
    /// The ordered product ids this batch attempted to submit.
    pub product_ids: Vec<u64>,
}

/// The closed enumeration of advisory verifier roles.
///
/// Role assignments are governance-managed metadata; they do not by
/// themselves grant any admin-gated operation.
#[derive(Encode, Decode, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifierRole {
    /// Administrative principal (advisory tag only).
    Admin,
    /// Verdict-submitting oracle.
    Oracle,
    /// Passive verifier.
    Verifier,
}

impl VerifierRole {
    /// Parses a wire-format role string into the closed enumeration.
    pub fn parse(role: &str) -> Option<Self> {
        match role {
            "admin" => Some(Self::Admin),
            "oracle" => Some(Self::Oracle),
            "verifier" => Some(Self::Verifier),
            _ => None,
        }
    }

    /// The canonical wire-format spelling of this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Oracle => "oracle",
            Self::Verifier => "verifier",
        }
    }
}
