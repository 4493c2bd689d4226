// Path: crates/registry/src/validation.rs
//! Pure predicates validating operation inputs. No state access.

/// The inclusive upper bound for reputation scores and confidence levels.
pub const MAX_PERCENT: u8 = 100;

/// The exact required length of a content reference, in bytes. Matches the
/// base58 length of a CIDv0 IPFS address.
pub const CONTENT_REFERENCE_LEN: usize = 46;

/// True when a reputation score is within `0..=100`.
pub fn score_in_range(score: u8) -> bool {
    score <= MAX_PERCENT
}

/// True when a confidence level is within `0..=100`.
pub fn confidence_in_range(confidence: u8) -> bool {
    confidence <= MAX_PERCENT
}

/// True when a product id is positive.
pub fn product_id_valid(product_id: u64) -> bool {
    product_id > 0
}

/// True when both evidence fields of a submission are present.
pub fn evidence_present(content_hash: &[u8], description: &str) -> bool {
    !content_hash.is_empty() && !description.is_empty()
}

/// True when a content reference has the exact required length.
pub fn content_reference_valid(content_ref: &str) -> bool {
    content_ref.len() == CONTENT_REFERENCE_LEN
}

/// True when a batch of `len` items fits within `max` and its parallel
/// sequences agree on that length.
pub fn batch_shape_valid(ids: usize, flags: usize, confidences: usize, max: usize) -> bool {
    ids <= max && ids == flags && ids == confidences
}

/// True when a detection method description is present.
pub fn detection_method_valid(method: &str) -> bool {
    !method.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_and_confidence_boundaries() {
        // Negative values are unrepresentable by u8; test the upper boundary.
        for value in [0u8, 1, 50, 99, 100] {
            assert!(score_in_range(value));
            assert!(confidence_in_range(value));
        }
        for value in [101u8, 102, 200, u8::MAX] {
            assert!(!score_in_range(value));
            assert!(!confidence_in_range(value));
        }
    }

    #[test]
    fn product_id_must_be_positive() {
        assert!(!product_id_valid(0));
        assert!(product_id_valid(1));
        assert!(product_id_valid(u64::MAX));
    }

    #[test]
    fn evidence_requires_both_fields() {
        assert!(evidence_present(&[0u8; 32], "desc"));
        assert!(!evidence_present(&[], "desc"));
        assert!(!evidence_present(&[0u8; 32], ""));
        assert!(!evidence_present(&[], ""));
    }

    #[test]
    fn content_reference_length_is_exact() {
        assert!(content_reference_valid(&"a".repeat(46)));
        assert!(!content_reference_valid(&"a".repeat(45)));
        assert!(!content_reference_valid(&"a".repeat(47)));
        assert!(!content_reference_valid(""));
    }

    #[test]
    fn batch_shape() {
        assert!(batch_shape_valid(10, 10, 10, 10));
        assert!(batch_shape_valid(0, 0, 0, 10));
        assert!(!batch_shape_valid(11, 11, 11, 10));
        assert!(!batch_shape_valid(2, 3, 2, 10));
        assert!(!batch_shape_valid(2, 2, 1, 10));
    }

    #[test]
    fn detection_method_text() {
        assert!(detection_method_valid("AI Scan"));
        assert!(!detection_method_valid(""));
    }
}
