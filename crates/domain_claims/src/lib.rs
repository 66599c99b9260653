//! Claims-Review Domain
//!
//! This crate implements the claims-review workflow: claim entities with
//! their AI-assessed child records, the status state machine, and the
//! append-only audit trail that records every action taken on a claim.
//!
//! # Claim Lifecycle
//!
//! ```text
//! pending_review -> approved -> sent_to_shop
//!                -> rejected
//! ```
//!
//! `approved` only moves forward to `sent_to_shop`; `rejected` and
//! `sent_to_shop` are terminal.

pub mod audit;
pub mod claim;
pub mod cost;
pub mod damage;
pub mod engine;
pub mod error;
pub mod photo;
pub mod store;

pub use audit::{AuditAction, AuditEntry};
pub use claim::{Claim, ClaimPatch, ClaimStatus, ClaimUpdate, ConfidenceTier, NewClaim, Priority};
pub use cost::{CostCategory, CostLine, NewCostLine};
pub use damage::{BoundingBox, DamageItem, NewDamageItem, Severity};
pub use engine::{BatchApprovalOutcome, BatchFailure, WorkflowEngine};
pub use error::ClaimError;
pub use photo::{NewPhoto, Photo};
pub use store::ClaimStore;
