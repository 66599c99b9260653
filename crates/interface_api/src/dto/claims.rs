//! Claims DTOs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use core_kernel::Money;
use domain_claims::{
    AuditAction, AuditEntry, BoundingBox, Claim, ClaimPatch, ClaimStatus, ConfidenceTier,
    CostCategory, CostLine, DamageItem, Photo, Priority, Severity,
};

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproveClaimRequest {
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RejectClaimRequest {
    #[validate(length(min = 1, message = "reason must not be empty"))]
    pub reason: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendToShopRequest {
    #[validate(length(min = 1, message = "shopId must not be empty"))]
    pub shop_id: String,
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchApproveRequest {
    /// Confidence tier to approve; defaults to `high`
    pub confidence: Option<ConfidenceTier>,
}

/// PATCH body for agent field edits
///
/// The field set mirrors [`ClaimPatch`]; unknown fields are rejected so a
/// typo cannot silently drop an edit.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct UpdateClaimRequest {
    pub total_estimate: Option<Money>,
    pub priority: Option<Priority>,
    pub agent_notes: Option<String>,
    pub adjuster_notes: Option<String>,
    pub assigned_agent: Option<String>,
}

impl From<UpdateClaimRequest> for ClaimPatch {
    fn from(request: UpdateClaimRequest) -> Self {
        ClaimPatch {
            total_estimate: request.total_estimate,
            priority: request.priority,
            agent_notes: request.agent_notes,
            adjuster_notes: request.adjuster_notes,
            assigned_agent: request.assigned_agent,
        }
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponse {
    pub id: Uuid,
    pub claim_number: String,
    pub policyholder_name: String,
    pub vehicle_info: String,
    pub vin: String,
    pub incident_date: NaiveDate,
    pub incident_description: String,
    pub status: ClaimStatus,
    pub priority: Priority,
    pub ai_confidence: Option<ConfidenceTier>,
    pub submitted_at: DateTime<Utc>,
    pub total_estimate: Option<Money>,
    pub agent_notes: Option<String>,
    pub adjuster_notes: Option<String>,
    pub assigned_agent: Option<String>,
    pub assigned_shop_id: Option<String>,
}

impl From<Claim> for ClaimResponse {
    fn from(claim: Claim) -> Self {
        Self {
            id: *claim.id.as_uuid(),
            claim_number: claim.claim_number,
            policyholder_name: claim.policyholder_name,
            vehicle_info: claim.vehicle_info,
            vin: claim.vin,
            incident_date: claim.incident_date,
            incident_description: claim.incident_description,
            status: claim.status,
            priority: claim.priority,
            ai_confidence: claim.ai_confidence,
            submitted_at: claim.submitted_at,
            total_estimate: claim.total_estimate,
            agent_notes: claim.agent_notes,
            adjuster_notes: claim.adjuster_notes,
            assigned_agent: claim.assigned_agent,
            assigned_shop_id: claim.assigned_shop_id.map(|id| id.as_str().to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageItemResponse {
    pub id: Uuid,
    pub claim_id: Uuid,
    #[serde(rename = "type")]
    pub damage_type: String,
    pub severity: Severity,
    pub location: String,
    pub description: String,
    pub area: Option<String>,
    pub depth: Option<String>,
    pub repair_type: Option<String>,
    pub confidence: Decimal,
    pub coordinates: BoundingBox,
}

impl From<DamageItem> for DamageItemResponse {
    fn from(item: DamageItem) -> Self {
        Self {
            id: *item.id.as_uuid(),
            claim_id: *item.claim_id.as_uuid(),
            damage_type: item.damage_type,
            severity: item.severity,
            location: item.location,
            description: item.description,
            area: item.area,
            depth: item.depth,
            repair_type: item.repair_type,
            confidence: item.confidence,
            coordinates: item.coordinates,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoResponse {
    pub id: Uuid,
    pub claim_id: Uuid,
    pub category: String,
    pub url: String,
    pub thumbnail_url: Option<String>,
    pub is_primary: bool,
    pub uploaded_at: DateTime<Utc>,
}

impl From<Photo> for PhotoResponse {
    fn from(photo: Photo) -> Self {
        Self {
            id: *photo.id.as_uuid(),
            claim_id: *photo.claim_id.as_uuid(),
            category: photo.category,
            url: photo.url,
            thumbnail_url: photo.thumbnail_url,
            is_primary: photo.is_primary,
            uploaded_at: photo.uploaded_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostLineResponse {
    pub id: Uuid,
    pub claim_id: Uuid,
    pub category: CostCategory,
    pub description: String,
    pub amount: Money,
    pub hours: Option<Decimal>,
    pub rate: Option<Money>,
}

impl From<CostLine> for CostLineResponse {
    fn from(line: CostLine) -> Self {
        Self {
            id: *line.id.as_uuid(),
            claim_id: *line.claim_id.as_uuid(),
            category: line.category,
            description: line.description,
            amount: line.amount,
            hours: line.hours,
            rate: line.rate,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntryResponse {
    pub id: Uuid,
    pub claim_id: Uuid,
    #[serde(flatten)]
    pub action: AuditAction,
    pub description: String,
    pub performed_by: String,
    pub timestamp: DateTime<Utc>,
}

impl From<AuditEntry> for AuditEntryResponse {
    fn from(entry: AuditEntry) -> Self {
        Self {
            id: *entry.id.as_uuid(),
            claim_id: *entry.claim_id.as_uuid(),
            action: entry.action,
            description: entry.description,
            performed_by: entry.performed_by,
            timestamp: entry.timestamp,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchApproveResponse {
    pub message: String,
    pub approved_claims: usize,
    pub confidence: ConfidenceTier,
    pub claims: Vec<ClaimResponse>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
