// Path: crates/registry/src/batch.rs
//! Batch submission: multiple verdicts processed as one logical call.
//!
//! Batch processing is deliberately not transactional across its items. The
//! batch record is written first, then items are submitted in order; the
//! first item failure is returned verbatim and previously applied items stay
//! committed. Callers that need all-or-nothing semantics must submit items
//! individually and reconcile on their side.

use attest_api::fees::FeeCollector;
use attest_api::state::StateAccess;
use attest_api::transaction::context::TxContext;
use attest_types::app::BatchVerification;
use attest_types::codec;
use attest_types::error::{RegistryError, StateError};
use attest_types::keys::{BATCH_COUNT_KEY, BATCH_RECORD_PREFIX};
use attest_types::service_configs::RegistryParams;

use crate::ledger::VerificationLedger;
use crate::validation;

/// The evidence hash recorded for batch items.
pub const BATCH_CONTENT_HASH: [u8; 32] = [0u8; 32];
/// The description recorded for batch items.
pub const BATCH_DESCRIPTION: &str = "batch submission";
/// The content reference recorded for batch items. 46 characters, the fixed
/// length the ledger requires.
pub const BATCH_CONTENT_REF: &str = "Qm00000000000000000000000000000000000000000000";

/// Orchestrates multi-item submissions, delegating each item to the ledger.
pub struct BatchProcessor<'a> {
    params: &'a RegistryParams,
}

impl<'a> BatchProcessor<'a> {
    /// Binds the processor to the service configuration.
    pub fn new(params: &'a RegistryParams) -> Self {
        Self { params }
    }

    fn record_key(batch_id: u64) -> Vec<u8> {
        [BATCH_RECORD_PREFIX, &batch_id.to_le_bytes()].concat()
    }

    fn count<S: StateAccess + ?Sized>(state: &S) -> Result<u64, RegistryError> {
        let bytes = state
            .get(BATCH_COUNT_KEY)?
            .unwrap_or_else(|| 0u64.to_le_bytes().to_vec());
        let raw: [u8; 8] = bytes
            .try_into()
            .map_err(|_| StateError::InvalidValue("Invalid batch count bytes".into()))?;
        Ok(u64::from_le_bytes(raw))
    }

    /// Submits up to `max_batch_size` verdicts as one logical call.
    ///
    /// The batch id is derived from the current batch count, so ids are dense
    /// and monotonic; the `BatchAlreadyProcessed` guard is defensive and only
    /// reachable if storage is corrupted. Returns the batch id on full
    /// success, or the first failing item's error with prior items left
    /// committed.
    pub fn submit_batch<S: StateAccess + ?Sized>(
        &self,
        state: &mut S,
        fees: &mut dyn FeeCollector,
        ctx: &TxContext,
        product_ids: Vec<u64>,
        authentic_flags: Vec<bool>,
        confidences: Vec<u8>,
    ) -> Result<u64, RegistryError> {
        if !validation::batch_shape_valid(
            product_ids.len(),
            authentic_flags.len(),
            confidences.len(),
            self.params.max_batch_size,
        ) {
            return Err(RegistryError::InvalidBatchSize(product_ids.len()));
        }

        let batch_id = Self::count(state)?;
        if state.get(&Self::record_key(batch_id))?.is_some() {
            return Err(RegistryError::BatchAlreadyProcessed(batch_id));
        }

        // Record the batch before processing any item; the record survives
        // partial failure.
        let record = BatchVerification {
            product_ids: product_ids.clone(),
        };
        state.insert(&Self::record_key(batch_id), &codec::to_bytes_canonical(&record)?)?;
        state.insert(BATCH_COUNT_KEY, &(batch_id + 1).to_le_bytes())?;

        let ledger = VerificationLedger::new(self.params);
        for ((product_id, is_authentic), confidence) in product_ids
            .into_iter()
            .zip(authentic_flags)
            .zip(confidences)
        {
            ledger.submit(
                state,
                fees,
                ctx,
                product_id,
                is_authentic,
                confidence,
                BATCH_CONTENT_HASH.to_vec(),
                BATCH_DESCRIPTION.to_string(),
                BATCH_CONTENT_REF.to_string(),
            )?;
        }

        log::info!("[Batch] Batch {} processed", batch_id);
        Ok(batch_id)
    }

    /// Loads a recorded batch by id.
    pub fn load<S: StateAccess + ?Sized>(
        state: &S,
        batch_id: u64,
    ) -> Result<Option<BatchVerification>, RegistryError> {
        match state.get(&Self::record_key(batch_id))? {
            Some(bytes) => Ok(Some(codec::from_bytes_canonical(&bytes)?)),
            None => Ok(None),
        }
    }
}
