// Path: crates/registry/src/oracles.rs
//! Oracle lifecycle: registration, identity resolution, reputation updates,
//! and deactivation.
//!
//! Oracle ids are dense and monotonically assigned; the id space is
//! append-only and bounded by `RegistryParams::max_oracles`. Records are
//! never deleted. Deactivation is a soft flag and, by contract, does not
//! block a deactivated oracle from submitting new verdicts; submission
//! gating only checks identity-to-id resolution.

use attest_api::state::StateAccess;
use attest_api::transaction::context::TxContext;
use attest_types::app::{AccountId, Oracle};
use attest_types::codec;
use attest_types::error::{RegistryError, StateError};
use attest_types::keys::{ORACLE_FEE_PREFIX, ORACLE_NEXT_ID_KEY, ORACLE_RECORD_PREFIX};
use attest_types::service_configs::RegistryParams;

use crate::governance::GovernanceController;
use crate::validation;

/// Owns the oracle identity table and the per-oracle registration fee table.
pub struct OracleRegistry<'a> {
    params: &'a RegistryParams,
}

impl<'a> OracleRegistry<'a> {
    /// Binds the registry to the service configuration.
    pub fn new(params: &'a RegistryParams) -> Self {
        Self { params }
    }

    fn record_key(oracle_id: u64) -> Vec<u8> {
        [ORACLE_RECORD_PREFIX, &oracle_id.to_le_bytes()].concat()
    }

    fn fee_key(oracle_id: u64) -> Vec<u8> {
        [ORACLE_FEE_PREFIX, &oracle_id.to_le_bytes()].concat()
    }

    fn next_id<S: StateAccess + ?Sized>(state: &S) -> Result<u64, RegistryError> {
        let bytes = state
            .get(ORACLE_NEXT_ID_KEY)?
            .unwrap_or_else(|| 0u64.to_le_bytes().to_vec());
        let raw: [u8; 8] = bytes
            .try_into()
            .map_err(|_| StateError::InvalidValue("Invalid oracle id bytes".into()))?;
        Ok(u64::from_le_bytes(raw))
    }

    /// Registers a new oracle on behalf of a distinct sponsoring caller.
    ///
    /// Allocates the next dense id, stores the record with `active = true`
    /// at the current block height, stores the registration fee, and bumps
    /// the id counter. Returns the new id.
    pub fn register<S: StateAccess + ?Sized>(
        &self,
        state: &mut S,
        ctx: &TxContext,
        candidate: AccountId,
        initial_score: u8,
        fee: u64,
    ) -> Result<u64, RegistryError> {
        let id = Self::next_id(state)?;
        if id >= self.params.max_oracles {
            return Err(RegistryError::CapacityExceeded);
        }
        // Registration models delegated onboarding: an oracle cannot
        // register its own principal.
        if candidate == ctx.signer_account_id {
            return Err(RegistryError::SelfRegistrationForbidden);
        }
        if !validation::score_in_range(initial_score) {
            return Err(RegistryError::InvalidScore(initial_score));
        }

        let record = Oracle {
            principal: candidate,
            score: initial_score,
            active: true,
            registered_at: ctx.block_height,
        };
        state.insert(&Self::record_key(id), &codec::to_bytes_canonical(&record)?)?;
        state.insert(&Self::fee_key(id), &fee.to_le_bytes())?;
        state.insert(ORACLE_NEXT_ID_KEY, &(id + 1).to_le_bytes())?;

        log::info!(
            "[Oracles] Registered oracle {} for {} (score {}, fee {})",
            id,
            candidate,
            initial_score,
            fee
        );
        Ok(id)
    }

    /// Loads an oracle record by id.
    pub fn load<S: StateAccess + ?Sized>(
        state: &S,
        oracle_id: u64,
    ) -> Result<Option<Oracle>, RegistryError> {
        match state.get(&Self::record_key(oracle_id))? {
            Some(bytes) => Ok(Some(codec::from_bytes_canonical(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Loads the fee recorded for an oracle at registration time.
    pub fn fee_of<S: StateAccess + ?Sized>(
        state: &S,
        oracle_id: u64,
    ) -> Result<Option<u64>, RegistryError> {
        match state.get(&Self::fee_key(oracle_id))? {
            Some(bytes) => {
                let raw: [u8; 8] = bytes
                    .try_into()
                    .map_err(|_| StateError::InvalidValue("Invalid oracle fee bytes".into()))?;
                Ok(Some(u64::from_le_bytes(raw)))
            }
            None => Ok(None),
        }
    }

    /// Resolves a principal to its oracle id by scanning all records.
    ///
    /// The linear scan is acceptable at the bounded `max_oracles` scale and
    /// keeps the identity table free of secondary indices.
    pub fn lookup_by_identity<S: StateAccess + ?Sized>(
        state: &S,
        principal: &AccountId,
    ) -> Result<Option<u64>, RegistryError> {
        for item in state.prefix_scan(ORACLE_RECORD_PREFIX)? {
            let (key, value) = item?;
            let record: Oracle = codec::from_bytes_canonical(&value)?;
            if record.principal == *principal {
                let suffix = key
                    .len()
                    .checked_sub(8)
                    .and_then(|at| key.get(at..))
                    .ok_or_else(|| {
                        StateError::InvalidValue("Malformed oracle record key".into())
                    })?;
                let raw: [u8; 8] = suffix
                    .try_into()
                    .map_err(|_| StateError::InvalidValue("Malformed oracle record key".into()))?;
                return Ok(Some(u64::from_le_bytes(raw)));
            }
        }
        Ok(None)
    }

    /// Replaces an oracle's reputation score, preserving all other fields.
    /// Admin-only.
    pub fn update_score<S: StateAccess + ?Sized>(
        &self,
        state: &mut S,
        ctx: &TxContext,
        oracle_id: u64,
        new_score: u8,
    ) -> Result<(), RegistryError> {
        GovernanceController::require_admin(state, ctx)?;
        if !validation::score_in_range(new_score) {
            return Err(RegistryError::InvalidScore(new_score));
        }
        let mut record =
            Self::load(state, oracle_id)?.ok_or(RegistryError::OracleNotFound(oracle_id))?;
        record.score = new_score;
        state.insert(&Self::record_key(oracle_id), &codec::to_bytes_canonical(&record)?)?;
        log::debug!("[Oracles] Oracle {} score set to {}", oracle_id, new_score);
        Ok(())
    }

    /// Flips an oracle's `active` flag to false. Admin-only.
    ///
    /// Past verdicts stay valid and the oracle may still submit; the flag is
    /// advisory reputation state, not a submission gate.
    pub fn deactivate<S: StateAccess + ?Sized>(
        &self,
        state: &mut S,
        ctx: &TxContext,
        oracle_id: u64,
    ) -> Result<(), RegistryError> {
        GovernanceController::require_admin(state, ctx)?;
        let mut record =
            Self::load(state, oracle_id)?.ok_or(RegistryError::OracleNotFound(oracle_id))?;
        record.active = false;
        state.insert(&Self::record_key(oracle_id), &codec::to_bytes_canonical(&record)?)?;
        log::info!("[Oracles] Oracle {} deactivated", oracle_id);
        Ok(())
    }
}
