//! Workflow engine tests over the in-memory store
//!
//! These cover the end-to-end review scenarios: every transition is paired
//! with exactly one audit entry, failed operations leave the store
//! untouched, and batch approval only moves the matching claims.

use rust_decimal_macros::dec;

use core_kernel::{Money, ShopId};
use domain_claims::{
    ClaimError, ClaimPatch, ClaimStatus, ClaimStore, ConfidenceTier, Priority, WorkflowEngine,
};
use infra_store::MemoryStore;
use test_utils::assertions::{
    assert_audit_count, assert_audit_newest_first, assert_claim_status, assert_latest_audit,
};
use test_utils::builders::ClaimIntakeBuilder;
use test_utils::fixtures;

const AGENT: &str = "Sarah Johnson";
const ADJUSTER: &str = "Michael Chen";

fn engine_with_pending_claim(number: &str) -> (WorkflowEngine<MemoryStore>, core_kernel::ClaimId) {
    let mut store = MemoryStore::empty();
    let claim = store.create_claim(
        ClaimIntakeBuilder::new()
            .with_claim_number(number)
            .with_confidence(ConfidenceTier::High)
            .build(),
    );
    (WorkflowEngine::new(store), claim.id)
}

// ============================================================================
// Approve
// ============================================================================

mod approve {
    use super::*;

    #[test]
    fn test_approve_pending_claim() {
        let (mut engine, id) = engine_with_pending_claim("CLM-TEST-1");

        let claim = engine
            .approve(id, Some("looks good".to_string()), AGENT)
            .unwrap();

        assert_claim_status(&claim, ClaimStatus::Approved);
        assert_eq!(claim.agent_notes.as_deref(), Some("looks good"));

        let entries = engine.store().audit_log_for(id);
        assert_audit_count(&entries, &claim, 1);
        assert_latest_audit(&entries, &claim, "claim_approved");
        assert_eq!(entries[0].performed_by, AGENT);
    }

    #[test]
    fn test_approve_records_estimate_in_metadata() {
        let (mut engine, id) = engine_with_pending_claim("CLM-TEST-1");

        let claim = engine.approve(id, None, AGENT).unwrap();

        let entries = engine.store().audit_log_for(id);
        let metadata = serde_json::to_value(&entries[0].action).unwrap();
        assert_eq!(
            metadata["metadata"]["estimateAmount"],
            serde_json::to_value(claim.total_estimate.unwrap()).unwrap()
        );
    }

    #[test]
    fn test_approve_unknown_claim_is_not_found() {
        let mut engine = WorkflowEngine::new(MemoryStore::empty());
        let id = fixtures::missing_claim_id();

        let err = engine.approve(id, None, AGENT).unwrap_err();

        assert_eq!(err, ClaimError::NotFound(id));
    }

    #[test]
    fn test_reapprove_is_a_state_conflict() {
        let (mut engine, id) = engine_with_pending_claim("CLM-TEST-1");
        engine.approve(id, None, AGENT).unwrap();

        let err = engine.approve(id, None, AGENT).unwrap_err();

        assert_eq!(
            err,
            ClaimError::StateConflict {
                from: ClaimStatus::Approved,
                to: ClaimStatus::Approved,
            }
        );
        // the failed attempt left no trace
        let claim = engine.store().claim(id).unwrap();
        assert_audit_count(&engine.store().audit_log_for(id), &claim, 1);
    }
}

// ============================================================================
// Reject
// ============================================================================

mod reject {
    use super::*;

    #[test]
    fn test_reject_pending_claim() {
        let (mut engine, id) = engine_with_pending_claim("CLM-TEST-1");

        let claim = engine.reject(id, "photos inconclusive", AGENT).unwrap();

        assert_claim_status(&claim, ClaimStatus::Rejected);
        assert_eq!(claim.agent_notes.as_deref(), Some("photos inconclusive"));

        let entries = engine.store().audit_log_for(id);
        assert_audit_count(&entries, &claim, 1);
        assert_latest_audit(&entries, &claim, "claim_rejected");
    }

    #[test]
    fn test_blank_reason_never_mutates() {
        for reason in ["", "   ", "\t\n"] {
            let (mut engine, id) = engine_with_pending_claim("CLM-TEST-1");

            let err = engine.reject(id, reason, AGENT).unwrap_err();

            assert!(matches!(err, ClaimError::Validation(_)));
            let claim = engine.store().claim(id).unwrap();
            assert_claim_status(&claim, ClaimStatus::PendingReview);
            assert!(claim.agent_notes.is_none());
            assert!(engine.store().audit_log_for(id).is_empty());
        }
    }

    #[test]
    fn test_reject_after_approval_is_a_state_conflict() {
        let (mut engine, id) = engine_with_pending_claim("CLM-TEST-1");
        engine.approve(id, None, AGENT).unwrap();

        let err = engine.reject(id, "changed my mind", AGENT).unwrap_err();

        assert_eq!(
            err,
            ClaimError::StateConflict {
                from: ClaimStatus::Approved,
                to: ClaimStatus::Rejected,
            }
        );
    }
}

// ============================================================================
// Field Updates
// ============================================================================

mod update_fields {
    use super::*;

    #[test]
    fn test_patch_overrides_estimate_and_priority() {
        let (mut engine, id) = engine_with_pending_claim("CLM-TEST-1");

        let patch = ClaimPatch {
            total_estimate: Some(Money::new(dec!(3200.00)).unwrap()),
            priority: Some(Priority::Low),
            ..Default::default()
        };
        let claim = engine.update_fields(id, patch, AGENT).unwrap();

        assert_eq!(claim.total_estimate, Some(Money::new(dec!(3200.00)).unwrap()));
        assert_eq!(claim.priority, Priority::Low);
        // a patch is not a transition
        assert_claim_status(&claim, ClaimStatus::PendingReview);

        let entries = engine.store().audit_log_for(id);
        assert_latest_audit(&entries, &claim, "claim_updated");
    }

    #[test]
    fn test_patch_metadata_carries_the_updates() {
        let (mut engine, id) = engine_with_pending_claim("CLM-TEST-1");

        let patch = ClaimPatch {
            agent_notes: Some("estimate revised after shop call".to_string()),
            ..Default::default()
        };
        engine.update_fields(id, patch, AGENT).unwrap();

        let entries = engine.store().audit_log_for(id);
        let value = serde_json::to_value(&entries[0].action).unwrap();
        assert_eq!(
            value["metadata"]["updates"]["agentNotes"],
            "estimate revised after shop call"
        );
    }

    #[test]
    fn test_patch_unknown_claim_is_not_found() {
        let mut engine = WorkflowEngine::new(MemoryStore::empty());
        let id = fixtures::missing_claim_id();

        let err = engine
            .update_fields(id, ClaimPatch::default(), AGENT)
            .unwrap_err();

        assert_eq!(err, ClaimError::NotFound(id));
    }
}

// ============================================================================
// Send To Shop
// ============================================================================

mod send_to_shop {
    use super::*;

    #[test]
    fn test_send_approved_claim_to_shop() {
        let (mut engine, id) = engine_with_pending_claim("CLM-TEST-2");
        engine.approve(id, None, AGENT).unwrap();

        let claim = engine
            .send_to_shop(
                id,
                ShopId::new("shop-1"),
                Some("rush job".to_string()),
                ADJUSTER,
            )
            .unwrap();

        assert_claim_status(&claim, ClaimStatus::SentToShop);
        assert_eq!(claim.assigned_shop_id, Some(ShopId::new("shop-1")));
        assert_eq!(claim.adjuster_notes.as_deref(), Some("rush job"));

        let entries = engine.store().audit_log_for(id);
        assert_audit_count(&entries, &claim, 2);
        assert_latest_audit(&entries, &claim, "sent_to_shop");
        assert_eq!(entries[0].performed_by, ADJUSTER);
    }

    #[test]
    fn test_pending_claim_cannot_be_sent() {
        let (mut engine, id) = engine_with_pending_claim("CLM-TEST-2");

        let err = engine
            .send_to_shop(id, fixtures::repair_shop(), None, ADJUSTER)
            .unwrap_err();

        assert_eq!(
            err,
            ClaimError::StateConflict {
                from: ClaimStatus::PendingReview,
                to: ClaimStatus::SentToShop,
            }
        );
        assert!(engine.store().audit_log_for(id).is_empty());
    }

    #[test]
    fn test_blank_shop_id_never_mutates() {
        let (mut engine, id) = engine_with_pending_claim("CLM-TEST-2");
        engine.approve(id, None, AGENT).unwrap();

        let err = engine
            .send_to_shop(id, ShopId::new("  "), None, ADJUSTER)
            .unwrap_err();

        assert!(matches!(err, ClaimError::Validation(_)));
        let claim = engine.store().claim(id).unwrap();
        assert_claim_status(&claim, ClaimStatus::Approved);
        assert!(claim.assigned_shop_id.is_none());
    }
}

// ============================================================================
// Batch Approval
// ============================================================================

mod batch_approve {
    use super::*;

    fn engine_with_tiers(tiers: &[ConfidenceTier]) -> WorkflowEngine<MemoryStore> {
        let mut store = MemoryStore::empty();
        for (i, tier) in tiers.iter().enumerate() {
            store.create_claim(
                ClaimIntakeBuilder::new()
                    .with_claim_number(fixtures::claim_number(i as u32 + 1))
                    .with_confidence(*tier)
                    .build(),
            );
        }
        WorkflowEngine::new(store)
    }

    #[test]
    fn test_only_matching_tier_is_approved() {
        let mut engine = engine_with_tiers(&[
            ConfidenceTier::High,
            ConfidenceTier::High,
            ConfidenceTier::Medium,
        ]);

        let outcome = engine.batch_approve(ConfidenceTier::High, AGENT);

        assert_eq!(outcome.approved_count(), 2);
        assert!(outcome.failures.is_empty());

        for claim in engine.store().claims() {
            match claim.ai_confidence {
                Some(ConfidenceTier::High) => {
                    assert_claim_status(&claim, ClaimStatus::Approved);
                    let entries = engine.store().audit_log_for(claim.id);
                    assert_audit_count(&entries, &claim, 1);
                    assert_latest_audit(&entries, &claim, "claim_batch_approved");
                }
                _ => assert_claim_status(&claim, ClaimStatus::PendingReview),
            }
        }
    }

    #[test]
    fn test_batch_metadata_and_standardized_note() {
        let mut engine = engine_with_tiers(&[ConfidenceTier::High, ConfidenceTier::High]);

        let outcome = engine.batch_approve(ConfidenceTier::High, AGENT);

        for claim in &outcome.approved {
            assert_eq!(
                claim.agent_notes.as_deref(),
                Some("Auto-approved via batch approval for high confidence claims")
            );
            let entries = engine.store().audit_log_for(claim.id);
            let value = serde_json::to_value(&entries[0].action).unwrap();
            assert_eq!(value["metadata"]["confidence"], "high");
            assert_eq!(value["metadata"]["batchSize"], 2);
        }
    }

    #[test]
    fn test_zero_candidates_is_an_empty_outcome() {
        let mut engine = engine_with_tiers(&[ConfidenceTier::Medium, ConfidenceTier::Low]);

        let outcome = engine.batch_approve(ConfidenceTier::High, AGENT);

        assert_eq!(outcome.approved_count(), 0);
        assert!(outcome.approved.is_empty());
        assert!(outcome.failures.is_empty());
    }

    #[test]
    fn test_already_reviewed_claims_are_not_candidates() {
        let mut engine = engine_with_tiers(&[ConfidenceTier::High, ConfidenceTier::High]);
        let first = engine.store().claims()[0].clone();
        engine.approve(first.id, None, AGENT).unwrap();

        let outcome = engine.batch_approve(ConfidenceTier::High, AGENT);

        // the manually approved claim is skipped entirely, not re-approved
        assert_eq!(outcome.approved_count(), 1);
        let entries = engine.store().audit_log_for(first.id);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].action.code(), "claim_approved");
    }

    #[test]
    fn test_claims_without_confidence_are_never_candidates() {
        let mut store = MemoryStore::empty();
        store.create_claim(
            ClaimIntakeBuilder::new()
                .with_claim_number("CLM-TEST-0001")
                .without_confidence()
                .build(),
        );
        let mut engine = WorkflowEngine::new(store);

        let outcome = engine.batch_approve(ConfidenceTier::High, AGENT);

        assert_eq!(outcome.approved_count(), 0);
    }
}

// ============================================================================
// Full Lifecycle & Reset
// ============================================================================

mod lifecycle {
    use super::*;

    #[test]
    fn test_full_review_lifecycle_builds_ordered_history() {
        let (mut engine, id) = engine_with_pending_claim("CLM-TEST-1");

        engine
            .update_fields(
                id,
                ClaimPatch {
                    total_estimate: Some(Money::new(dec!(2950.00)).unwrap()),
                    ..Default::default()
                },
                AGENT,
            )
            .unwrap();
        engine.approve(id, Some("verified".to_string()), AGENT).unwrap();
        let claim = engine
            .send_to_shop(id, fixtures::repair_shop(), None, ADJUSTER)
            .unwrap();

        let entries = engine.store().audit_log_for(id);
        assert_audit_count(&entries, &claim, 3);
        assert_audit_newest_first(&entries);

        let codes: Vec<&str> = entries.iter().map(|e| e.action.code()).collect();
        assert_eq!(codes, vec!["sent_to_shop", "claim_approved", "claim_updated"]);
    }

    #[test]
    fn test_reset_restores_seed_after_mutations() {
        let mut engine = WorkflowEngine::new(MemoryStore::seeded());

        let outcome = engine.batch_approve(ConfidenceTier::High, AGENT);
        assert_eq!(outcome.approved_count(), 2);

        engine.reset_demo_data();

        let claims = engine.store().claims();
        assert_eq!(claims.len(), 5);
        let pending_high = claims
            .iter()
            .filter(|c| {
                c.status == ClaimStatus::PendingReview
                    && c.ai_confidence == Some(ConfidenceTier::High)
            })
            .count();
        assert_eq!(pending_high, 2);
    }
}
