// Path: crates/registry/src/ledger.rs
//! The verification ledger: verdict submission and expiry enforcement.
//!
//! One verdict may exist per product id; a later submission for the same
//! product overwrites the prior one (last-write-wins, no versioning). The
//! verdict, its metadata, and its content reference are written together in
//! one uninterrupted step, after the fee transfer has succeeded.

use attest_api::fees::FeeCollector;
use attest_api::state::StateAccess;
use attest_api::transaction::context::TxContext;
use attest_types::app::{ProductMetadata, VerificationResult};
use attest_types::codec;
use attest_types::error::RegistryError;
use attest_types::keys::{
    PRODUCT_CONTENT_REF_PREFIX, PRODUCT_METADATA_PREFIX, PRODUCT_VERDICT_PREFIX,
};
use attest_types::service_configs::RegistryParams;

use crate::governance::GovernanceController;
use crate::oracles::OracleRegistry;
use crate::validation;

/// Owns submitted verdicts and their product metadata records.
pub struct VerificationLedger<'a> {
    params: &'a RegistryParams,
}

impl<'a> VerificationLedger<'a> {
    /// Binds the ledger to the service configuration.
    pub fn new(params: &'a RegistryParams) -> Self {
        Self { params }
    }

    fn verdict_key(product_id: u64) -> Vec<u8> {
        [PRODUCT_VERDICT_PREFIX, &product_id.to_le_bytes()].concat()
    }

    fn metadata_key(product_id: u64) -> Vec<u8> {
        [PRODUCT_METADATA_PREFIX, &product_id.to_le_bytes()].concat()
    }

    fn content_ref_key(product_id: u64) -> Vec<u8> {
        [PRODUCT_CONTENT_REF_PREFIX, &product_id.to_le_bytes()].concat()
    }

    /// Submits a verdict on behalf of the calling oracle.
    ///
    /// Validation order: caller resolution, product id, confidence, evidence
    /// presence, content reference length. An empty content hash or
    /// description fails `NotAuthorized`; the contract reuses the
    /// authorization code for this input check and the quirk is preserved.
    ///
    /// The current verification fee is collected from the caller before any
    /// state is written; a failed transfer aborts the submission with no
    /// ledger mutation.
    #[allow(clippy::too_many_arguments)]
    pub fn submit<S: StateAccess + ?Sized>(
        &self,
        state: &mut S,
        fees: &mut dyn FeeCollector,
        ctx: &TxContext,
        product_id: u64,
        is_authentic: bool,
        confidence: u8,
        content_hash: Vec<u8>,
        description: String,
        content_ref: String,
    ) -> Result<(), RegistryError> {
        let oracle_id = OracleRegistry::lookup_by_identity(state, &ctx.signer_account_id)?
            .ok_or(RegistryError::OracleNotRegistered)?;
        if !validation::product_id_valid(product_id) {
            return Err(RegistryError::InvalidProductId);
        }
        if !validation::confidence_in_range(confidence) {
            return Err(RegistryError::InvalidConfidence(confidence));
        }
        if !validation::evidence_present(&content_hash, &description) {
            return Err(RegistryError::NotAuthorized);
        }
        if !validation::content_reference_valid(&content_ref) {
            return Err(RegistryError::InvalidContentReference {
                expected: validation::CONTENT_REFERENCE_LEN,
                got: content_ref.len(),
            });
        }

        let fee = GovernanceController::new(self.params).current_fee(state)?;
        fees.collect(&ctx.signer_account_id, fee)
            .map_err(RegistryError::FeeTransfer)?;

        let verdict = VerificationResult {
            product_id,
            is_authentic,
            timestamp: ctx.block_height,
            oracle_id,
            confidence,
        };
        let metadata = ProductMetadata {
            content_hash,
            description,
            expiry: ctx.block_height + self.params.expiry_window_blocks,
            status: true,
        };

        log::debug!(
            "[Ledger] Oracle {} verdict on product {}: authentic={} confidence={} hash={}",
            oracle_id,
            product_id,
            is_authentic,
            confidence,
            hex::encode(&metadata.content_hash)
        );

        state.insert(
            &Self::verdict_key(product_id),
            &codec::to_bytes_canonical(&verdict)?,
        )?;
        state.insert(
            &Self::metadata_key(product_id),
            &codec::to_bytes_canonical(&metadata)?,
        )?;
        state.insert(
            &Self::content_ref_key(product_id),
            &codec::to_bytes_canonical(&content_ref)?,
        )?;
        Ok(())
    }

    /// Checks that a stored verdict exists and has not passed its expiry.
    pub fn verify_expiry<S: StateAccess + ?Sized>(
        &self,
        state: &S,
        ctx: &TxContext,
        product_id: u64,
    ) -> Result<(), RegistryError> {
        let metadata =
            Self::load_metadata(state, product_id)?.ok_or(RegistryError::ProductNotFound(product_id))?;
        if ctx.block_height > metadata.expiry {
            return Err(RegistryError::VerificationExpired(product_id));
        }
        Ok(())
    }

    /// Loads the verdict stored for a product, if any.
    pub fn load_verdict<S: StateAccess + ?Sized>(
        state: &S,
        product_id: u64,
    ) -> Result<Option<VerificationResult>, RegistryError> {
        match state.get(&Self::verdict_key(product_id))? {
            Some(bytes) => Ok(Some(codec::from_bytes_canonical(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Loads the metadata stored for a product, if any.
    pub fn load_metadata<S: StateAccess + ?Sized>(
        state: &S,
        product_id: u64,
    ) -> Result<Option<ProductMetadata>, RegistryError> {
        match state.get(&Self::metadata_key(product_id))? {
            Some(bytes) => Ok(Some(codec::from_bytes_canonical(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Loads the content reference stored for a product, if any.
    pub fn load_content_ref<S: StateAccess + ?Sized>(
        state: &S,
        product_id: u64,
    ) -> Result<Option<String>, RegistryError> {
        match state.get(&Self::content_ref_key(product_id))? {
            Some(bytes) => Ok(Some(codec::from_bytes_canonical(&bytes)?)),
            None => Ok(None),
        }
    }
}
