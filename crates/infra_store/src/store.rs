//! In-memory claim storage
//!
//! Collections are `BTreeMap`s keyed by entity id, so enumeration order is
//! deterministic for a given store without promising anything to callers.
//! Child lookups are linear scans, which is adequate at demo scale; a
//! deployment at realistic volume would index children by claim id.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::warn;

use core_kernel::{ClaimId, CostLineId, DamageItemId, PhotoId};
use domain_claims::{
    AuditAction, AuditEntry, Claim, ClaimStore, ClaimUpdate, CostLine, DamageItem, NewClaim,
    NewCostLine, NewDamageItem, NewPhoto, Photo,
};

use crate::seed;

/// Process-lifetime storage for claims and their child records
#[derive(Debug, Default)]
pub struct MemoryStore {
    claims: BTreeMap<ClaimId, Claim>,
    damage_items: BTreeMap<DamageItemId, DamageItem>,
    photos: BTreeMap<PhotoId, Photo>,
    cost_lines: BTreeMap<CostLineId, CostLine>,
    audit_log: Vec<AuditEntry>,
    next_seq: u64,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the canonical seed dataset
    pub fn seeded() -> Self {
        let mut store = Self::empty();
        seed::populate(&mut store);
        store
    }

    /// Appends an audit entry with an explicit timestamp
    ///
    /// Used by the seed to backdate history; sequence numbers still come
    /// from the store counter so per-claim ordering stays reconstructable.
    pub(crate) fn append_audit_at(
        &mut self,
        claim_id: ClaimId,
        action: AuditAction,
        performed_by: &str,
        timestamp: DateTime<Utc>,
    ) -> AuditEntry {
        self.next_seq += 1;
        let entry = AuditEntry::new(claim_id, action, performed_by, self.next_seq, timestamp);
        self.audit_log.push(entry.clone());
        entry
    }

    pub(crate) fn insert_claim(&mut self, claim: Claim) {
        debug_assert!(
            !self
                .claims
                .values()
                .any(|c| c.claim_number == claim.claim_number),
            "duplicate claim number {}",
            claim.claim_number
        );
        self.claims.insert(claim.id, claim);
    }
}

impl ClaimStore for MemoryStore {
    fn claim(&self, id: ClaimId) -> Option<Claim> {
        self.claims.get(&id).cloned()
    }

    fn claim_by_number(&self, claim_number: &str) -> Option<Claim> {
        self.claims
            .values()
            .find(|c| c.claim_number == claim_number)
            .cloned()
    }

    fn claims(&self) -> Vec<Claim> {
        self.claims.values().cloned().collect()
    }

    fn create_claim(&mut self, intake: NewClaim) -> Claim {
        let claim = Claim::new(intake);
        self.insert_claim(claim.clone());
        claim
    }

    fn update_claim(&mut self, id: ClaimId, update: ClaimUpdate) -> Option<Claim> {
        let claim = self.claims.get_mut(&id)?;
        update.apply(claim);
        Some(claim.clone())
    }

    fn damage_items_for(&self, claim_id: ClaimId) -> Vec<DamageItem> {
        self.damage_items
            .values()
            .filter(|item| item.claim_id == claim_id)
            .cloned()
            .collect()
    }

    fn create_damage_item(&mut self, insert: NewDamageItem) -> DamageItem {
        let item = DamageItem::new(insert);
        self.damage_items.insert(item.id, item.clone());
        item
    }

    fn photos_for(&self, claim_id: ClaimId) -> Vec<Photo> {
        self.photos
            .values()
            .filter(|photo| photo.claim_id == claim_id)
            .cloned()
            .collect()
    }

    fn create_photo(&mut self, insert: NewPhoto) -> Photo {
        let photo = Photo::new(insert);
        self.photos.insert(photo.id, photo.clone());
        photo
    }

    fn cost_lines_for(&self, claim_id: ClaimId) -> Vec<CostLine> {
        self.cost_lines
            .values()
            .filter(|line| line.claim_id == claim_id)
            .cloned()
            .collect()
    }

    fn create_cost_line(&mut self, insert: NewCostLine) -> CostLine {
        let line = CostLine::new(insert);
        if !line.is_consistent() {
            warn!(
                cost_line = %line.id,
                claim = %line.claim_id,
                "cost line amount does not match hours x rate"
            );
        }
        self.cost_lines.insert(line.id, line.clone());
        line
    }

    fn audit_log_for(&self, claim_id: ClaimId) -> Vec<AuditEntry> {
        let mut entries: Vec<AuditEntry> = self
            .audit_log
            .iter()
            .filter(|entry| entry.claim_id == claim_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| (b.timestamp, b.seq).cmp(&(a.timestamp, a.seq)));
        entries
    }

    fn append_audit(
        &mut self,
        claim_id: ClaimId,
        action: AuditAction,
        performed_by: &str,
    ) -> AuditEntry {
        self.append_audit_at(claim_id, action, performed_by, Utc::now())
    }

    fn reset_to_seed(&mut self) {
        *self = Self::empty();
        seed::populate(self);
    }
}
