//! Entity store port
//!
//! The store holds claims and their child records and knows nothing about
//! workflow rules. It is constructed explicitly and handed to the
//! [`WorkflowEngine`](crate::engine::WorkflowEngine), so tests can run each
//! case against an isolated instance. The trait is synchronous: the store
//! does no I/O, and hosts that serve concurrent requests are responsible
//! for wrapping it in mutual exclusion (batch approval and reset
//! read-then-write in multiple steps).
//!
//! Read paths return plain snapshots; write paths return the stored copy.

use core_kernel::ClaimId;

use crate::audit::{AuditAction, AuditEntry};
use crate::claim::{Claim, ClaimUpdate, NewClaim};
use crate::cost::{CostLine, NewCostLine};
use crate::damage::{DamageItem, NewDamageItem};
use crate::photo::{NewPhoto, Photo};

/// Storage and retrieval of claims and their child records
pub trait ClaimStore {
    /// Looks up a claim by identifier
    fn claim(&self, id: ClaimId) -> Option<Claim>;

    /// Looks up a claim by its human-facing claim number
    fn claim_by_number(&self, claim_number: &str) -> Option<Claim>;

    /// Returns all claims in enumeration order
    ///
    /// The order is deterministic for a given store but unspecified;
    /// callers must not assume anything about it.
    fn claims(&self) -> Vec<Claim>;

    /// Creates a claim with a fresh identifier, `pending_review` status,
    /// and the current submission time
    fn create_claim(&mut self, intake: NewClaim) -> Claim;

    /// Merges the supplied fields into an existing claim
    fn update_claim(&mut self, id: ClaimId, update: ClaimUpdate) -> Option<Claim>;

    /// Damage items belonging to a claim; empty for unknown claims
    fn damage_items_for(&self, claim_id: ClaimId) -> Vec<DamageItem>;

    fn create_damage_item(&mut self, insert: NewDamageItem) -> DamageItem;

    /// Photos belonging to a claim; empty for unknown claims
    fn photos_for(&self, claim_id: ClaimId) -> Vec<Photo>;

    fn create_photo(&mut self, insert: NewPhoto) -> Photo;

    /// Cost breakdown lines belonging to a claim; empty for unknown claims
    fn cost_lines_for(&self, claim_id: ClaimId) -> Vec<CostLine>;

    fn create_cost_line(&mut self, insert: NewCostLine) -> CostLine;

    /// Audit entries for a claim, newest first (timestamp descending,
    /// sequence number as tie-break)
    fn audit_log_for(&self, claim_id: ClaimId) -> Vec<AuditEntry>;

    /// Appends an immutable audit entry with a store-assigned sequence
    /// number and the current timestamp
    fn append_audit(
        &mut self,
        claim_id: ClaimId,
        action: AuditAction,
        performed_by: &str,
    ) -> AuditEntry;

    /// Replaces the entire store contents with the canonical seed dataset
    fn reset_to_seed(&mut self);
}
