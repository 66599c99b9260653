//! Append-only audit trail
//!
//! Every action taken against a claim is recorded as one immutable
//! `AuditEntry`. The action itself is a tagged union: each action code
//! carries its own typed payload, and the pair serializes as
//! `{"action": "...", "metadata": {...}}` on the wire.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{AuditEntryId, ClaimId, Money, ShopId};

use crate::claim::{ClaimPatch, ConfidenceTier};

/// An action recorded against a claim, with its typed metadata payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "action",
    content = "metadata",
    rename_all = "snake_case",
    rename_all_fields = "camelCase"
)]
pub enum AuditAction {
    /// Claim entered the system
    ClaimSubmitted {},
    /// Damage photos were attached and run through the detection pipeline
    PhotosUploaded {
        photo_count: u32,
        processed_by_cv: bool,
    },
    /// The damage-detection pipeline finished its assessment
    AiAnalysisCompleted {
        confidence_pct: Decimal,
        areas_identified: u32,
    },
    /// An agent patched claim fields outside a status transition
    ClaimUpdated { updates: ClaimPatch },
    /// An agent approved the claim
    ClaimApproved {
        notes: Option<String>,
        estimate_amount: Option<Money>,
    },
    /// The claim was approved as part of a confidence-tier batch
    ClaimBatchApproved {
        confidence: ConfidenceTier,
        batch_size: u32,
        estimate_amount: Option<Money>,
    },
    /// An agent rejected the claim
    ClaimRejected { reason: String },
    /// An adjuster routed the approved claim to a repair shop
    SentToShop {
        shop_id: ShopId,
        notes: Option<String>,
    },
}

impl AuditAction {
    /// Stable action code, as stored and exposed on the wire
    pub fn code(&self) -> &'static str {
        match self {
            AuditAction::ClaimSubmitted {} => "claim_submitted",
            AuditAction::PhotosUploaded { .. } => "photos_uploaded",
            AuditAction::AiAnalysisCompleted { .. } => "ai_analysis_completed",
            AuditAction::ClaimUpdated { .. } => "claim_updated",
            AuditAction::ClaimApproved { .. } => "claim_approved",
            AuditAction::ClaimBatchApproved { .. } => "claim_batch_approved",
            AuditAction::ClaimRejected { .. } => "claim_rejected",
            AuditAction::SentToShop { .. } => "sent_to_shop",
        }
    }

    /// Human-readable description shown in the audit trail panel
    pub fn description(&self) -> String {
        match self {
            AuditAction::ClaimSubmitted {} => "Claim Submitted".to_string(),
            AuditAction::PhotosUploaded { .. } => "Photos Uploaded".to_string(),
            AuditAction::AiAnalysisCompleted { .. } => "AI Analysis Completed".to_string(),
            AuditAction::ClaimUpdated { .. } => "Claim updated by agent".to_string(),
            AuditAction::ClaimApproved { .. } => "Claim approved by agent".to_string(),
            AuditAction::ClaimBatchApproved { confidence, .. } => {
                format!("Claim batch-approved for {confidence} confidence")
            }
            AuditAction::ClaimRejected { .. } => "Claim rejected by agent".to_string(),
            AuditAction::SentToShop { shop_id, .. } => {
                format!("Claim sent to repair shop (ID: {shop_id})")
            }
        }
    }
}

/// One immutable record of an action taken on a claim
///
/// Entries are never mutated or deleted. `seq` is assigned by the store and
/// increases monotonically across the whole log, so per-claim history is
/// reconstructable even when consecutive transitions share a timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: AuditEntryId,
    pub claim_id: ClaimId,
    #[serde(flatten)]
    pub action: AuditAction,
    pub description: String,
    pub performed_by: String,
    pub timestamp: DateTime<Utc>,
    pub seq: u64,
}

impl AuditEntry {
    /// Creates an entry for `action`, deriving the display description
    pub fn new(
        claim_id: ClaimId,
        action: AuditAction,
        performed_by: impl Into<String>,
        seq: u64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let description = action.description();
        Self {
            id: AuditEntryId::new_v7(),
            claim_id,
            action,
            description,
            performed_by: performed_by.into(),
            timestamp,
            seq,
        }
    }
}
