// Path: crates/registry/tests/registry_flow.rs
//! End-to-end scenarios through the dispatched service surface.

use attest_api::fees::RecordingFeeCollector;
use attest_api::services::RegistryService;
use attest_api::state::MemoryState;
use attest_api::transaction::context::TxContext;
use attest_registry::ledger::VerificationLedger;
use attest_registry::service::{
    AssignVerifierRoleParams, BatchSubmitParams, RegisterOracleParams,
    SubmitVerificationParams, TransferAdminParams, UpdateOracleScoreParams, VerifyExpiryParams,
};
use attest_registry::AttestationService;
use attest_types::app::AccountId;
use attest_types::codec;
use attest_types::error::{ErrorCode, RegistryError};
use attest_types::service_configs::RegistryParams;
use parity_scale_codec::Encode;

const ADMIN: AccountId = AccountId([1u8; 32]);
const ORACLE_A: AccountId = AccountId([2u8; 32]);
const STRANGER: AccountId = AccountId([9u8; 32]);

struct Harness {
    service: AttestationService,
    state: MemoryState,
    fees: RecordingFeeCollector,
}

impl Harness {
    fn new() -> Self {
        let service = AttestationService::new(RegistryParams::default());
        let mut state = MemoryState::new();
        service.init_genesis(&mut state, ADMIN).unwrap();
        Self {
            service,
            state,
            fees: RecordingFeeCollector::new(),
        }
    }

    async fn call<P: Encode>(
        &mut self,
        caller: AccountId,
        height: u64,
        method: &str,
        params: &P,
    ) -> Result<Vec<u8>, RegistryError> {
        let ctx = TxContext::new(caller, height);
        self.service
            .handle_service_call(
                &mut self.state,
                &mut self.fees,
                method,
                &params.encode(),
                &ctx,
            )
            .await
    }

    async fn register_oracle_a(&mut self) -> u64 {
        let payload = self
            .call(
                ADMIN,
                0,
                "register_oracle@v1",
                &RegisterOracleParams {
                    candidate: ORACLE_A,
                    initial_score: 80,
                    fee: 100,
                },
            )
            .await
            .unwrap();
        codec::from_bytes_canonical(&payload).unwrap()
    }
}

fn content_ref() -> String {
    "Qm".to_string() + &"1".repeat(44)
}

fn submit_params(product_id: u64, confidence: u8) -> SubmitVerificationParams {
    SubmitVerificationParams {
        product_id,
        is_authentic: true,
        confidence,
        content_hash: vec![0u8; 32],
        description: "Product desc".into(),
        content_ref: content_ref(),
    }
}

#[tokio::test]
async fn register_submit_and_expiry_scenario() {
    let mut h = Harness::new();

    // register(oracleA, score=80, fee=100) -> id 0
    let id = h.register_oracle_a().await;
    assert_eq!(id, 0);

    // oracleA submits productId=1, confidence=95 -> success
    let payload = h
        .call(ORACLE_A, 0, "submit_verification@v1", &submit_params(1, 95))
        .await
        .unwrap();
    assert!(codec::from_bytes_canonical::<bool>(&payload).unwrap());

    // The fee-transfer record shows the default fee of 500 from oracleA.
    assert_eq!(h.fees.transfers.len(), 1);
    assert_eq!(h.fees.transfers[0].from, ORACLE_A);
    assert_eq!(h.fees.transfers[0].amount, 500);

    // checkNotExpired(1) holds at height 0 and fails at height 145.
    h.call(STRANGER, 0, "verify_expiry@v1", &VerifyExpiryParams { product_id: 1 })
        .await
        .unwrap();
    let err = h
        .call(STRANGER, 145, "verify_expiry@v1", &VerifyExpiryParams { product_id: 1 })
        .await
        .unwrap_err();
    assert_eq!(err.code(), "VERIFICATION_EXPIRED");
}

#[tokio::test]
async fn unregistered_submitter_is_rejected() {
    let mut h = Harness::new();
    let err = h
        .call(STRANGER, 0, "submit_verification@v1", &submit_params(1, 95))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "ORACLE_NOT_REGISTERED");
    assert!(h.fees.transfers.is_empty());
}

#[tokio::test]
async fn overwrite_keeps_only_the_second_verdict() {
    let mut h = Harness::new();
    h.register_oracle_a().await;

    h.call(ORACLE_A, 0, "submit_verification@v1", &submit_params(1, 95))
        .await
        .unwrap();
    h.call(ORACLE_A, 3, "submit_verification@v1", &submit_params(1, 40))
        .await
        .unwrap();

    let verdict = VerificationLedger::load_verdict(&h.state, 1).unwrap().unwrap();
    assert_eq!(verdict.confidence, 40);
    assert_eq!(verdict.timestamp, 3);
}

#[tokio::test]
async fn batch_dispatch_roundtrip() {
    let mut h = Harness::new();
    h.register_oracle_a().await;

    let payload = h
        .call(
            ORACLE_A,
            0,
            "batch_submit@v1",
            &BatchSubmitParams {
                product_ids: vec![1, 2],
                authentic_flags: vec![true, false],
                confidences: vec![95, 80],
            },
        )
        .await
        .unwrap();
    assert_eq!(codec::from_bytes_canonical::<u64>(&payload).unwrap(), 0);

    let err = h
        .call(
            ORACLE_A,
            0,
            "batch_submit@v1",
            &BatchSubmitParams {
                product_ids: vec![1; 11],
                authentic_flags: vec![true; 11],
                confidences: vec![95; 11],
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), "INVALID_BATCH_SIZE");
}

#[tokio::test]
async fn non_admin_score_update_is_rejected_and_harmless() {
    let mut h = Harness::new();
    h.register_oracle_a().await;

    let err = h
        .call(
            STRANGER,
            0,
            "update_oracle_score@v1",
            &UpdateOracleScoreParams {
                oracle_id: 0,
                new_score: 1,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), "NOT_AUTHORIZED");

    let payload = h
        .call(
            ADMIN,
            0,
            "update_oracle_score@v1",
            &UpdateOracleScoreParams {
                oracle_id: 0,
                new_score: 90,
            },
        )
        .await
        .unwrap();
    assert!(codec::from_bytes_canonical::<bool>(&payload).unwrap());
}

#[tokio::test]
async fn role_assignment_rejects_unknown_role_strings() {
    let mut h = Harness::new();
    let err = h
        .call(
            ADMIN,
            0,
            "assign_verifier_role@v1",
            &AssignVerifierRoleParams {
                verifier: STRANGER,
                role: "root".into(),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), "INVALID_ROLE");
}

#[tokio::test]
async fn admin_transfer_round_trip() {
    let mut h = Harness::new();

    let payload = h.call(STRANGER, 0, "get_admin@v1", &()).await.unwrap();
    assert_eq!(
        codec::from_bytes_canonical::<AccountId>(&payload).unwrap(),
        ADMIN
    );

    let err = h
        .call(
            STRANGER,
            0,
            "transfer_admin@v1",
            &TransferAdminParams { new_admin: STRANGER },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), "NOT_AUTHORIZED");

    h.call(
        ADMIN,
        0,
        "transfer_admin@v1",
        &TransferAdminParams { new_admin: STRANGER },
    )
    .await
    .unwrap();

    let payload = h.call(ADMIN, 0, "get_admin@v1", &()).await.unwrap();
    assert_eq!(
        codec::from_bytes_canonical::<AccountId>(&payload).unwrap(),
        STRANGER
    );
}

#[tokio::test]
async fn unknown_method_and_malformed_params() {
    let mut h = Harness::new();

    let err = h.call(ADMIN, 0, "mint@v1", &()).await.unwrap_err();
    assert_eq!(err.code(), "UNSUPPORTED_METHOD");

    // Truncated parameter payloads fail canonical decoding, not validation.
    let ctx = TxContext::new(ADMIN, 0);
    let err = h
        .service
        .handle_service_call(
            &mut h.state,
            &mut h.fees,
            "update_oracle_score@v1",
            &[0x01],
            &ctx,
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), "CODEC_ERROR");
}
