//! Claim status workflow
//!
//! The engine owns all status transitions and guarantees each applied
//! transition is paired with exactly one audit entry. Failed operations
//! leave the store untouched: preconditions are checked before any
//! mutation, and the store itself is assumed infallible for the process
//! lifetime.

use tracing::{info, warn};

use core_kernel::{ClaimId, ShopId};

use crate::audit::AuditAction;
use crate::claim::{Claim, ClaimPatch, ClaimStatus, ClaimUpdate, ConfidenceTier};
use crate::error::ClaimError;
use crate::store::ClaimStore;

/// Result of a batch approval run
///
/// Candidates are processed independently; a failure on one claim never
/// aborts the batch, it is recorded here instead.
#[derive(Debug)]
pub struct BatchApprovalOutcome {
    pub confidence: ConfidenceTier,
    pub approved: Vec<Claim>,
    pub failures: Vec<BatchFailure>,
}

/// One claim the batch attempted but could not approve
#[derive(Debug)]
pub struct BatchFailure {
    pub claim_id: ClaimId,
    pub error: ClaimError,
}

impl BatchApprovalOutcome {
    pub fn approved_count(&self) -> usize {
        self.approved.len()
    }
}

/// Enforces the claim status state machine over an injected store
pub struct WorkflowEngine<S> {
    store: S,
}

impl<S: ClaimStore> WorkflowEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read access to the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the engine, returning the store
    pub fn into_store(self) -> S {
        self.store
    }

    /// Approves a pending claim, storing the agent's notes
    pub fn approve(
        &mut self,
        id: ClaimId,
        notes: Option<String>,
        actor: &str,
    ) -> Result<Claim, ClaimError> {
        let updated = self.transition(
            id,
            ClaimStatus::Approved,
            ClaimUpdate {
                status: Some(ClaimStatus::Approved),
                agent_notes: notes.clone(),
                ..Default::default()
            },
        )?;

        self.store.append_audit(
            id,
            AuditAction::ClaimApproved {
                notes,
                estimate_amount: updated.total_estimate,
            },
            actor,
        );

        info!(claim = %updated.claim_number, %actor, "claim approved");
        Ok(updated)
    }

    /// Rejects a pending claim, storing the reason as agent notes
    ///
    /// The reason must be non-blank; validation happens before any
    /// mutation.
    pub fn reject(&mut self, id: ClaimId, reason: &str, actor: &str) -> Result<Claim, ClaimError> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(ClaimError::validation("rejection reason must not be blank"));
        }

        let updated = self.transition(
            id,
            ClaimStatus::Rejected,
            ClaimUpdate {
                status: Some(ClaimStatus::Rejected),
                agent_notes: Some(reason.to_string()),
                ..Default::default()
            },
        )?;

        self.store.append_audit(
            id,
            AuditAction::ClaimRejected {
                reason: reason.to_string(),
            },
            actor,
        );

        info!(claim = %updated.claim_number, %actor, "claim rejected");
        Ok(updated)
    }

    /// Patches agent-editable fields without transitioning status
    pub fn update_fields(
        &mut self,
        id: ClaimId,
        patch: ClaimPatch,
        actor: &str,
    ) -> Result<Claim, ClaimError> {
        let updated = self
            .store
            .update_claim(id, ClaimUpdate::from(patch.clone()))
            .ok_or(ClaimError::NotFound(id))?;

        self.store
            .append_audit(id, AuditAction::ClaimUpdated { updates: patch }, actor);

        info!(claim = %updated.claim_number, %actor, "claim fields updated");
        Ok(updated)
    }

    /// Routes an approved claim to a repair shop
    pub fn send_to_shop(
        &mut self,
        id: ClaimId,
        shop_id: ShopId,
        notes: Option<String>,
        actor: &str,
    ) -> Result<Claim, ClaimError> {
        if shop_id.is_blank() {
            return Err(ClaimError::validation("shop id must not be blank"));
        }

        let updated = self.transition(
            id,
            ClaimStatus::SentToShop,
            ClaimUpdate {
                status: Some(ClaimStatus::SentToShop),
                adjuster_notes: notes.clone(),
                assigned_shop_id: Some(shop_id.clone()),
                ..Default::default()
            },
        )?;

        self.store
            .append_audit(id, AuditAction::SentToShop { shop_id, notes }, actor);

        info!(claim = %updated.claim_number, %actor, "claim sent to shop");
        Ok(updated)
    }

    /// Approves every pending claim in the given confidence tier
    ///
    /// Candidates are taken in store enumeration order and processed
    /// independently: each approved claim gets its own audit entry, and a
    /// failure is recorded in the outcome without aborting the rest. Zero
    /// candidates is a valid outcome, not an error.
    pub fn batch_approve(&mut self, tier: ConfidenceTier, actor: &str) -> BatchApprovalOutcome {
        let candidates: Vec<Claim> = self
            .store
            .claims()
            .into_iter()
            .filter(|c| c.status == ClaimStatus::PendingReview && c.ai_confidence == Some(tier))
            .collect();
        let batch_size = candidates.len() as u32;

        let note = format!("Auto-approved via batch approval for {tier} confidence claims");

        let mut outcome = BatchApprovalOutcome {
            confidence: tier,
            approved: Vec::new(),
            failures: Vec::new(),
        };

        for candidate in candidates {
            let applied = self
                .transition(
                    candidate.id,
                    ClaimStatus::Approved,
                    ClaimUpdate {
                        status: Some(ClaimStatus::Approved),
                        agent_notes: Some(note.clone()),
                        ..Default::default()
                    },
                )
                .map(|updated| {
                    self.store.append_audit(
                        candidate.id,
                        AuditAction::ClaimBatchApproved {
                            confidence: tier,
                            batch_size,
                            estimate_amount: updated.total_estimate,
                        },
                        actor,
                    );
                    updated
                });

            match applied {
                Ok(updated) => outcome.approved.push(updated),
                Err(error) => {
                    warn!(claim_id = %candidate.id, %error, "batch approval skipped claim");
                    outcome.failures.push(BatchFailure {
                        claim_id: candidate.id,
                        error,
                    });
                }
            }
        }

        info!(
            confidence = %tier,
            approved = outcome.approved_count(),
            failed = outcome.failures.len(),
            %actor,
            "batch approval finished"
        );
        outcome
    }

    /// Reinitializes the store to its seed state
    ///
    /// No audit entries survive; the store contents are replaced outright.
    pub fn reset_demo_data(&mut self) {
        self.store.reset_to_seed();
        info!("store reset to seed data");
    }

    /// Applies a guarded status transition
    ///
    /// Checks existence and the state machine before mutating; the caller
    /// appends the paired audit entry after this returns.
    fn transition(
        &mut self,
        id: ClaimId,
        target: ClaimStatus,
        update: ClaimUpdate,
    ) -> Result<Claim, ClaimError> {
        let current = self.store.claim(id).ok_or(ClaimError::NotFound(id))?;

        if !current.status.can_transition_to(target) {
            return Err(ClaimError::StateConflict {
                from: current.status,
                to: target,
            });
        }

        // Existence was just checked; the store is single-writer
        self.store
            .update_claim(id, update)
            .ok_or(ClaimError::NotFound(id))
    }
}
