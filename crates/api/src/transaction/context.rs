// Path: crates/api/src/transaction/context.rs
//! Defines the stable context for a single registry call.

use attest_types::app::AccountId;

/// Provides stable, read-only context to the registry during one call.
///
/// The host substrate fills this in after authenticating the caller; the
/// registry treats both fields as trusted inputs. `block_height` is the only
/// source of logical time in the system and is assumed monotonic across
/// calls.
#[derive(Debug, Clone, Copy)]
pub struct TxContext {
    /// The current block height being processed.
    pub block_height: u64,
    /// The `AccountId` of the entity that signed the current call.
    /// This is the authoritative source for permission checks.
    pub signer_account_id: AccountId,
}

impl TxContext {
    /// Builds a context for the given caller at the given height.
    pub fn new(signer_account_id: AccountId, block_height: u64) -> Self {
        Self {
            block_height,
            signer_account_id,
        }
    }
}
