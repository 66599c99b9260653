//! Custom Test Assertions
//!
//! Specialized assertion helpers for domain types that give more meaningful
//! failure messages than bare assert macros.

use domain_claims::{AuditEntry, Claim, ClaimStatus};

/// Asserts a claim is in the expected status
///
/// # Panics
///
/// Panics with the claim number and both statuses on mismatch.
pub fn assert_claim_status(claim: &Claim, expected: ClaimStatus) {
    assert_eq!(
        claim.status, expected,
        "claim {} expected status {}, got {}",
        claim.claim_number, expected, claim.status
    );
}

/// Asserts the newest audit entry for a claim has the given action code
///
/// Expects `entries` as returned by the store: newest first.
pub fn assert_latest_audit(entries: &[AuditEntry], claim: &Claim, code: &str) {
    let latest = entries.first().unwrap_or_else(|| {
        panic!(
            "expected an audit entry for claim {}, log is empty",
            claim.claim_number
        )
    });
    assert_eq!(
        latest.claim_id, claim.id,
        "latest audit entry belongs to a different claim"
    );
    assert_eq!(
        latest.action.code(),
        code,
        "claim {} expected latest audit action {code}, got {}",
        claim.claim_number,
        latest.action.code()
    );
}

/// Asserts audit entries are ordered newest first
pub fn assert_audit_newest_first(entries: &[AuditEntry]) {
    for pair in entries.windows(2) {
        let (newer, older) = (&pair[0], &pair[1]);
        assert!(
            (newer.timestamp, newer.seq) >= (older.timestamp, older.seq),
            "audit entries out of order: seq {} before seq {}",
            newer.seq,
            older.seq
        );
    }
}

/// Asserts exactly `expected` audit entries exist for the claim
pub fn assert_audit_count(entries: &[AuditEntry], claim: &Claim, expected: usize) {
    assert_eq!(
        entries.len(),
        expected,
        "claim {} expected {expected} audit entries, got {}",
        claim.claim_number,
        entries.len()
    );
}
