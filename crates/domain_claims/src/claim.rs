//! Claim aggregate

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{ClaimId, Money, ShopId};

/// Claim review status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    /// Awaiting agent review
    PendingReview,
    /// Approved by an agent
    Approved,
    /// Rejected by an agent
    Rejected,
    /// Routed to a repair shop
    SentToShop,
}

impl ClaimStatus {
    /// Checks if a transition to `target` is valid
    pub fn can_transition_to(self, target: ClaimStatus) -> bool {
        use ClaimStatus::*;
        matches!(
            (self, target),
            (PendingReview, Approved) | (PendingReview, Rejected) | (Approved, SentToShop)
        )
    }

    /// Returns true if no transition leaves this status
    pub fn is_terminal(self) -> bool {
        matches!(self, ClaimStatus::Rejected | ClaimStatus::SentToShop)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ClaimStatus::PendingReview => "pending_review",
            ClaimStatus::Approved => "approved",
            ClaimStatus::Rejected => "rejected",
            ClaimStatus::SentToShop => "sent_to_shop",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Review priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Confidence tier assigned by the (external) damage-detection pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    pub fn as_str(self) -> &'static str {
        match self {
            ConfidenceTier::High => "high",
            ConfidenceTier::Medium => "medium",
            ConfidenceTier::Low => "low",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An insurance claim under review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,
    /// Human-facing claim number, unique across the store
    pub claim_number: String,
    pub policyholder_name: String,
    /// Vehicle description, e.g. "2022 Toyota Camry"
    pub vehicle_info: String,
    pub vin: String,
    pub incident_date: NaiveDate,
    pub incident_description: String,
    pub status: ClaimStatus,
    pub priority: Priority,
    /// Confidence tier of the AI assessment, absent when no analysis ran
    pub ai_confidence: Option<ConfidenceTier>,
    pub submitted_at: DateTime<Utc>,
    pub total_estimate: Option<Money>,
    pub agent_notes: Option<String>,
    pub adjuster_notes: Option<String>,
    pub assigned_agent: Option<String>,
    pub assigned_shop_id: Option<ShopId>,
}

impl Claim {
    /// Creates a claim from intake data with a fresh identifier,
    /// `pending_review` status, and the current submission time
    pub fn new(intake: NewClaim) -> Self {
        Self {
            id: ClaimId::new_v7(),
            claim_number: intake.claim_number,
            policyholder_name: intake.policyholder_name,
            vehicle_info: intake.vehicle_info,
            vin: intake.vin,
            incident_date: intake.incident_date,
            incident_description: intake.incident_description,
            status: ClaimStatus::PendingReview,
            priority: intake.priority,
            ai_confidence: intake.ai_confidence,
            submitted_at: Utc::now(),
            total_estimate: intake.total_estimate,
            agent_notes: None,
            adjuster_notes: None,
            assigned_agent: intake.assigned_agent,
            assigned_shop_id: None,
        }
    }
}

/// Intake data for a new claim
///
/// Identifier, status, and submission time are assigned at creation.
#[derive(Debug, Clone)]
pub struct NewClaim {
    pub claim_number: String,
    pub policyholder_name: String,
    pub vehicle_info: String,
    pub vin: String,
    pub incident_date: NaiveDate,
    pub incident_description: String,
    pub priority: Priority,
    pub ai_confidence: Option<ConfidenceTier>,
    pub total_estimate: Option<Money>,
    pub assigned_agent: Option<String>,
}

/// Store-level field merge for a claim
///
/// `Some` fields overwrite the stored value; `None` fields are left
/// untouched. The workflow engine is the only writer, so enum domains are
/// guaranteed by construction rather than checked here.
#[derive(Debug, Clone, Default)]
pub struct ClaimUpdate {
    pub status: Option<ClaimStatus>,
    pub priority: Option<Priority>,
    pub total_estimate: Option<Money>,
    pub agent_notes: Option<String>,
    pub adjuster_notes: Option<String>,
    pub assigned_agent: Option<String>,
    pub assigned_shop_id: Option<ShopId>,
}

impl ClaimUpdate {
    /// Merges this update into the claim
    pub fn apply(self, claim: &mut Claim) {
        if let Some(status) = self.status {
            claim.status = status;
        }
        if let Some(priority) = self.priority {
            claim.priority = priority;
        }
        if let Some(estimate) = self.total_estimate {
            claim.total_estimate = Some(estimate);
        }
        if let Some(notes) = self.agent_notes {
            claim.agent_notes = Some(notes);
        }
        if let Some(notes) = self.adjuster_notes {
            claim.adjuster_notes = Some(notes);
        }
        if let Some(agent) = self.assigned_agent {
            claim.assigned_agent = Some(agent);
        }
        if let Some(shop_id) = self.assigned_shop_id {
            claim.assigned_shop_id = Some(shop_id);
        }
    }
}

/// Agent-facing field patch
///
/// The subset of claim fields an agent may edit outside a status
/// transition (estimate override, priority change, note edits). The
/// applied patch is recorded verbatim in the `claim_updated` audit entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClaimPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_estimate: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjuster_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_agent: Option<String>,
}

impl From<ClaimPatch> for ClaimUpdate {
    fn from(patch: ClaimPatch) -> Self {
        ClaimUpdate {
            status: None,
            priority: patch.priority,
            total_estimate: patch.total_estimate,
            agent_notes: patch.agent_notes,
            adjuster_notes: patch.adjuster_notes,
            assigned_agent: patch.assigned_agent,
            assigned_shop_id: None,
        }
    }
}
