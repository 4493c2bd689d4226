// Path: crates/types/src/error/mod.rs
//! Core error types for the attestation registry.

use thiserror::Error;

/// A trait for assigning a stable, machine-readable string code to an error.
pub trait ErrorCode {
    /// Returns the unique, stable string identifier for this error variant.
    fn code(&self) -> &'static str;
}

/// Errors related to the state backend.
#[derive(Error, Debug)]
pub enum StateError {
    /// The requested key was not found in the state.
    #[error("Key not found in state")]
    KeyNotFound,
    /// An error occurred in the state backend.
    #[error("State backend error: {0}")]
    Backend(String),
    /// The stored value could not be interpreted.
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

impl ErrorCode for StateError {
    fn code(&self) -> &'static str {
        match self {
            Self::KeyNotFound => "STATE_KEY_NOT_FOUND",
            Self::Backend(_) => "STATE_BACKEND_ERROR",
            Self::InvalidValue(_) => "STATE_INVALID_VALUE",
        }
    }
}

/// The flat failure enumeration returned by every registry operation.
///
/// Domain variants map one-to-one onto the registry's public failure codes;
/// `State`, `Codec`, `FeeTransfer`, and `Unsupported` carry substrate-level
/// failures. Propagation is immediate and local: the first failing check
/// aborts the operation, and batch processing forwards an item's error
/// verbatim without wrapping.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The caller is not authorized for this operation. Also returned, as a
    /// preserved contract quirk, when a submission carries an empty content
    /// hash or description.
    #[error("Caller is not authorized")]
    NotAuthorized,
    /// An oracle cannot register itself; registration is sponsored by a
    /// distinct party.
    #[error("An oracle cannot register its own principal")]
    SelfRegistrationForbidden,
    /// The caller does not resolve to a registered oracle.
    #[error("Caller is not a registered oracle")]
    OracleNotRegistered,
    /// No oracle record exists for the given id.
    #[error("Oracle {0} not found")]
    OracleNotFound(u64),
    /// The registry has reached its configured oracle capacity.
    #[error("Maximum number of oracles exceeded")]
    CapacityExceeded,
    /// The batch exceeds the maximum item count.
    #[error("Batch size {0} exceeds the maximum")]
    InvalidBatchSize(usize),
    /// The derived batch id already exists. Not reachable under the derived-id
    /// scheme unless storage is corrupted.
    #[error("Batch {0} was already processed")]
    BatchAlreadyProcessed(u64),
    /// A reputation score outside `0..=100`.
    #[error("Score {0} is out of range")]
    InvalidScore(u8),
    /// A confidence level outside `0..=100`.
    #[error("Confidence {0} is out of range")]
    InvalidConfidence(u8),
    /// A negative or otherwise unacceptable fee amount.
    #[error("Invalid fee amount")]
    InvalidFee,
    /// A non-positive product id.
    #[error("Product id must be positive")]
    InvalidProductId,
    /// A content reference whose length is not exactly 46 characters.
    #[error("Content reference must be exactly {expected} characters, got {got}")]
    InvalidContentReference {
        /// The required length.
        expected: usize,
        /// The length of the supplied reference.
        got: usize,
    },
    /// An empty detection method description.
    #[error("Detection method description must not be empty")]
    InvalidDetectionMethod,
    /// A role string outside the closed enumeration.
    #[error("Invalid verifier role: {0}")]
    InvalidRole(String),
    /// No verdict metadata exists for the given product.
    #[error("No verification found for product {0}")]
    ProductNotFound(u64),
    /// The stored verdict's expiry window has elapsed.
    #[error("Verification for product {0} has expired")]
    VerificationExpired(u64),

    /// An error originating from the state backend.
    #[error("State error: {0}")]
    State(#[from] StateError),
    /// A parameter or record payload failed canonical decoding.
    #[error("Codec error: {0}")]
    Codec(String),
    /// The external fee transfer could not be completed. The enclosing
    /// submission is aborted with no ledger mutation.
    #[error("Fee transfer failed: {0}")]
    FeeTransfer(String),
    /// The requested method is not part of the service ABI.
    #[error("Unsupported method: {0}")]
    Unsupported(String),
}

impl ErrorCode for RegistryError {
    fn code(&self) -> &'static str {
        match self {
            Self::NotAuthorized => "NOT_AUTHORIZED",
            Self::SelfRegistrationForbidden => "SELF_REGISTRATION_FORBIDDEN",
            Self::OracleNotRegistered => "ORACLE_NOT_REGISTERED",
            Self::OracleNotFound(_) => "ORACLE_NOT_FOUND",
            Self::CapacityExceeded => "CAPACITY_EXCEEDED",
            Self::InvalidBatchSize(_) => "INVALID_BATCH_SIZE",
            Self::BatchAlreadyProcessed(_) => "BATCH_ALREADY_PROCESSED",
            Self::InvalidScore(_) => "INVALID_SCORE",
            Self::InvalidConfidence(_) => "INVALID_CONFIDENCE",
            Self::InvalidFee => "INVALID_FEE",
            Self::InvalidProductId => "INVALID_PRODUCT_ID",
            Self::InvalidContentReference { .. } => "INVALID_CONTENT_REFERENCE",
            Self::InvalidDetectionMethod => "INVALID_DETECTION_METHOD",
            Self::InvalidRole(_) => "INVALID_ROLE",
            Self::ProductNotFound(_) => "PRODUCT_NOT_FOUND",
            Self::VerificationExpired(_) => "VERIFICATION_EXPIRED",
            Self::State(_) => "STATE_ERROR",
            Self::Codec(_) => "CODEC_ERROR",
            Self::FeeTransfer(_) => "FEE_TRANSFER_FAILED",
            Self::Unsupported(_) => "UNSUPPORTED_METHOD",
        }
    }
}

impl From<String> for RegistryError {
    fn from(s: String) -> Self {
        RegistryError::Codec(s)
    }
}
