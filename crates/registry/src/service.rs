// Path: crates/registry/src/service.rs
//! The dispatchable service surface of the attestation registry.
//!
//! Methods follow the `name@v1` convention. Parameters and success payloads
//! are canonical SCALE bytes; the structs below are the service's public ABI
//! and their field order must stay stable.

use async_trait::async_trait;
use attest_api::fees::FeeCollector;
use attest_api::services::RegistryService;
use attest_api::state::StateAccess;
use attest_api::transaction::context::TxContext;
use attest_types::app::AccountId;
use attest_types::codec;
use attest_types::error::RegistryError;
use attest_types::service_configs::RegistryParams;
use parity_scale_codec::{Decode, Encode};
use std::any::Any;

use crate::batch::BatchProcessor;
use crate::governance::GovernanceController;
use crate::ledger::VerificationLedger;
use crate::oracles::OracleRegistry;

// --- Service Method Parameter Structs (The Service's Public ABI) ---

/// Parameters for `register_oracle@v1`.
#[derive(Encode, Decode)]
pub struct RegisterOracleParams {
    /// The principal being onboarded. Must differ from the caller.
    pub candidate: AccountId,
    /// Starting reputation score, `0..=100`.
    pub initial_score: u8,
    /// The registration fee recorded for this oracle.
    pub fee: u64,
}

/// Parameters for `submit_verification@v1`.
#[derive(Encode, Decode)]
pub struct SubmitVerificationParams {
    /// The product being judged. Must be positive.
    pub product_id: u64,
    /// The verdict.
    pub is_authentic: bool,
    /// Confidence level, `0..=100`.
    pub confidence: u8,
    /// Non-empty content hash of the evidence.
    pub content_hash: Vec<u8>,
    /// Non-empty description of the evidence.
    pub description: String,
    /// 46-character content-addressing string.
    pub content_ref: String,
}

/// Parameters for `batch_submit@v1`. The three sequences are parallel.
#[derive(Encode, Decode)]
pub struct BatchSubmitParams {
    /// Ordered product ids.
    pub product_ids: Vec<u64>,
    /// Verdict per product.
    pub authentic_flags: Vec<bool>,
    /// Confidence per product.
    pub confidences: Vec<u8>,
}

/// Parameters for `update_oracle_score@v1`.
#[derive(Encode, Decode)]
pub struct UpdateOracleScoreParams {
    /// The oracle whose score is replaced.
    pub oracle_id: u64,
    /// The new score, `0..=100`.
    pub new_score: u8,
}

/// Parameters for `deactivate_oracle@v1`.
#[derive(Encode, Decode)]
pub struct DeactivateOracleParams {
    /// The oracle being deactivated.
    pub oracle_id: u64,
}

/// Parameters for `set_verification_fee@v1`.
#[derive(Encode, Decode)]
pub struct SetVerificationFeeParams {
    /// The fee charged by future submissions.
    pub new_fee: u64,
}

/// Parameters for `register_detection_method@v1`.
#[derive(Encode, Decode)]
pub struct RegisterDetectionMethodParams {
    /// Catalog key; insert-or-overwrite.
    pub method_id: u64,
    /// Non-empty descriptive text.
    pub method: String,
}

/// Parameters for `assign_verifier_role@v1`.
#[derive(Encode, Decode)]
pub struct AssignVerifierRoleParams {
    /// The principal the role is assigned to.
    pub verifier: AccountId,
    /// One of `admin`, `oracle`, `verifier`.
    pub role: String,
}

/// Parameters for `verify_expiry@v1`.
#[derive(Encode, Decode)]
pub struct VerifyExpiryParams {
    /// The product whose stored verdict is checked.
    pub product_id: u64,
}

/// Parameters for `transfer_admin@v1`.
#[derive(Encode, Decode)]
pub struct TransferAdminParams {
    /// The new admin principal. Accepted without validation and effective
    /// immediately.
    pub new_admin: AccountId,
}

// --- The Service ---

/// The attestation registry service.
///
/// Holds only the immutable configuration; all mutable state lives behind
/// the `StateAccess` handle passed into each call, so one service value can
/// serve any number of state backends.
#[derive(Debug, Clone, Default)]
pub struct AttestationService {
    params: RegistryParams,
}

impl AttestationService {
    /// Builds the service with the given configuration.
    pub fn new(params: RegistryParams) -> Self {
        Self { params }
    }

    /// The service configuration.
    pub fn params(&self) -> &RegistryParams {
        &self.params
    }

    /// Seeds the governance singleton. Called once by the host at system
    /// initialization, before any dispatched call.
    pub fn init_genesis<S: StateAccess + ?Sized>(
        &self,
        state: &mut S,
        admin: AccountId,
    ) -> Result<(), RegistryError> {
        GovernanceController::new(&self.params).init_genesis(state, admin)
    }
}

#[async_trait]
impl RegistryService for AttestationService {
    fn id(&self) -> &str {
        "attestation"
    }

    fn abi_version(&self) -> u32 {
        1
    }

    fn state_schema(&self) -> &str {
        "v1"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    async fn handle_service_call(
        &self,
        state: &mut dyn StateAccess,
        fees: &mut dyn FeeCollector,
        method: &str,
        params: &[u8],
        ctx: &TxContext,
    ) -> Result<Vec<u8>, RegistryError> {
        match method {
            "register_oracle@v1" => {
                let p: RegisterOracleParams = codec::from_bytes_canonical(params)?;
                let id = OracleRegistry::new(&self.params).register(
                    state,
                    ctx,
                    p.candidate,
                    p.initial_score,
                    p.fee,
                )?;
                Ok(codec::to_bytes_canonical(&id)?)
            }

            "submit_verification@v1" => {
                let p: SubmitVerificationParams = codec::from_bytes_canonical(params)?;
                VerificationLedger::new(&self.params).submit(
                    state,
                    fees,
                    ctx,
                    p.product_id,
                    p.is_authentic,
                    p.confidence,
                    p.content_hash,
                    p.description,
                    p.content_ref,
                )?;
                Ok(codec::to_bytes_canonical(&true)?)
            }

            "batch_submit@v1" => {
                let p: BatchSubmitParams = codec::from_bytes_canonical(params)?;
                let batch_id = BatchProcessor::new(&self.params).submit_batch(
                    state,
                    fees,
                    ctx,
                    p.product_ids,
                    p.authentic_flags,
                    p.confidences,
                )?;
                Ok(codec::to_bytes_canonical(&batch_id)?)
            }

            "update_oracle_score@v1" => {
                let p: UpdateOracleScoreParams = codec::from_bytes_canonical(params)?;
                OracleRegistry::new(&self.params).update_score(
                    state,
                    ctx,
                    p.oracle_id,
                    p.new_score,
                )?;
                Ok(codec::to_bytes_canonical(&true)?)
            }

            "deactivate_oracle@v1" => {
                let p: DeactivateOracleParams = codec::from_bytes_canonical(params)?;
                OracleRegistry::new(&self.params).deactivate(state, ctx, p.oracle_id)?;
                Ok(codec::to_bytes_canonical(&true)?)
            }

            "set_verification_fee@v1" => {
                let p: SetVerificationFeeParams = codec::from_bytes_canonical(params)?;
                GovernanceController::new(&self.params)
                    .set_verification_fee(state, ctx, p.new_fee)?;
                Ok(codec::to_bytes_canonical(&true)?)
            }

            "register_detection_method@v1" => {
                let p: RegisterDetectionMethodParams = codec::from_bytes_canonical(params)?;
                GovernanceController::new(&self.params).register_detection_method(
                    state,
                    ctx,
                    p.method_id,
                    &p.method,
                )?;
                Ok(codec::to_bytes_canonical(&true)?)
            }

            "assign_verifier_role@v1" => {
                let p: AssignVerifierRoleParams = codec::from_bytes_canonical(params)?;
                GovernanceController::new(&self.params).assign_verifier_role(
                    state,
                    ctx,
                    p.verifier,
                    &p.role,
                )?;
                Ok(codec::to_bytes_canonical(&true)?)
            }

            "verify_expiry@v1" => {
                let p: VerifyExpiryParams = codec::from_bytes_canonical(params)?;
                VerificationLedger::new(&self.params).verify_expiry(state, ctx, p.product_id)?;
                Ok(codec::to_bytes_canonical(&true)?)
            }

            "get_admin@v1" => {
                let admin = GovernanceController::admin(state)?;
                Ok(codec::to_bytes_canonical(&admin)?)
            }

            "transfer_admin@v1" => {
                let p: TransferAdminParams = codec::from_bytes_canonical(params)?;
                GovernanceController::new(&self.params).transfer_admin(state, ctx, p.new_admin)?;
                Ok(codec::to_bytes_canonical(&true)?)
            }

            _ => Err(RegistryError::Unsupported(format!(
                "Attestation registry does not support method '{}'",
                method
            ))),
        }
    }
}
