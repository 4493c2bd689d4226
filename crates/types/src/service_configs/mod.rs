// Path: crates/types/src/service_configs/mod.rs
//! Configuration structures for the registry service.

use serde::{Deserialize, Serialize};

/// Configuration parameters for the attestation registry service.
///
/// These are host-supplied constants fixed at service construction; the only
/// runtime-mutable economic parameter is the verification fee, which lives in
/// state and is merely seeded from `verification_fee` at genesis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryParams {
    /// The maximum number of oracles that may ever be registered.
    pub max_oracles: u64,
    /// The fee, in base units, charged per verdict submission. Seeds the
    /// mutable on-state fee at genesis.
    pub verification_fee: u64,
    /// The number of blocks a stored verdict remains valid.
    pub expiry_window_blocks: u64,
    /// The maximum number of items in a batch submission.
    pub max_batch_size: usize,
}

impl Default for RegistryParams {
    fn default() -> Self {
        Self {
            max_oracles: 50,
            verification_fee: 500,
            expiry_window_blocks: 144, // ~24h at 10min/block
            max_batch_size: 10,
        }
    }
}
