// Path: crates/api/src/fees.rs
//! The value-transfer seam used to collect verification fees.
//!
//! The registry treats fee collection as a black box: one synchronous,
//! all-or-nothing "debit caller, credit registry" operation per successful
//! submission. When the transfer fails, the enclosing submission aborts with
//! no ledger mutation, so implementations must not apply partial effects.

use attest_types::app::AccountId;

/// A single completed fee transfer, as observed by a collector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeTransfer {
    /// The debited principal.
    pub from: AccountId,
    /// The amount moved, in base units.
    pub amount: u64,
}

/// Moves the verification fee from the caller to the registry.
pub trait FeeCollector: Send + Sync {
    /// Debits `amount` from `from`, crediting the registry. Either fully
    /// succeeds or fully fails with a human-readable reason.
    fn collect(&mut self, from: &AccountId, amount: u64) -> Result<(), String>;
}

/// A collector that accepts every transfer and records it.
///
/// The reference collector for tests and offline audit: assertions can
/// inspect the exact sequence of transfers a scenario produced.
#[derive(Debug, Default)]
pub struct RecordingFeeCollector {
    /// Every transfer accepted so far, in order.
    pub transfers: Vec<FeeTransfer>,
}

impl RecordingFeeCollector {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }
}

impl FeeCollector for RecordingFeeCollector {
    fn collect(&mut self, from: &AccountId, amount: u64) -> Result<(), String> {
        self.transfers.push(FeeTransfer {
            from: *from,
            amount,
        });
        Ok(())
    }
}

/// A collector that rejects every transfer with the given reason.
///
/// Used to exercise the all-or-nothing abort path in tests.
#[derive(Debug)]
pub struct FailingFeeCollector(pub String);

impl FeeCollector for FailingFeeCollector {
    fn collect(&mut self, _from: &AccountId, _amount: u64) -> Result<(), String> {
        Err(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_collector_keeps_order() {
        let a = AccountId([1u8; 32]);
        let b = AccountId([2u8; 32]);
        let mut collector = RecordingFeeCollector::new();
        collector.collect(&a, 500).unwrap();
        collector.collect(&b, 600).unwrap();
        assert_eq!(
            collector.transfers,
            vec![
                FeeTransfer { from: a, amount: 500 },
                FeeTransfer { from: b, amount: 600 },
            ]
        );
    }

    #[test]
    fn failing_collector_reports_reason() {
        let mut collector = FailingFeeCollector("insufficient funds".into());
        let err = collector.collect(&AccountId([1u8; 32]), 500).unwrap_err();
        assert_eq!(err, "insufficient funds");
    }
}
