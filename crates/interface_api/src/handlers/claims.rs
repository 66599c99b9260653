//! Claims handlers
//!
//! Thin translation layer: extract inputs, resolve the actor, call the
//! workflow engine or store, convert the result to a wire DTO. All policy
//! lives in the engine.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use tracing::info;
use validator::Validate;

use core_kernel::{ClaimId, ShopId};
use domain_claims::{ClaimStatus, ClaimStore, ConfidenceTier};

use crate::actor;
use crate::dto::claims::*;
use crate::error::ApiError;
use crate::AppState;

/// Lists all claims
pub async fn list_claims(State(state): State<AppState>) -> Result<Json<Vec<ClaimResponse>>, ApiError> {
    let engine = state.engine()?;
    let claims = engine
        .store()
        .claims()
        .into_iter()
        .map(ClaimResponse::from)
        .collect();
    Ok(Json(claims))
}

/// Gets a claim by ID
pub async fn get_claim(
    State(state): State<AppState>,
    Path(id): Path<ClaimId>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let engine = state.engine()?;
    let claim = engine
        .store()
        .claim(id)
        .ok_or_else(|| ApiError::NotFound("Claim not found".to_string()))?;
    Ok(Json(claim.into()))
}

/// Gets a claim by its human-facing claim number
pub async fn get_claim_by_number(
    State(state): State<AppState>,
    Path(claim_number): Path<String>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let engine = state.engine()?;
    let claim = engine
        .store()
        .claim_by_number(&claim_number)
        .ok_or_else(|| ApiError::NotFound("Claim not found".to_string()))?;
    Ok(Json(claim.into()))
}

/// Patches agent-editable claim fields
pub async fn update_claim(
    State(state): State<AppState>,
    Path(id): Path<ClaimId>,
    headers: HeaderMap,
    Json(request): Json<UpdateClaimRequest>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let performed_by = actor::from_headers(&headers, &state.config);
    let mut engine = state.engine()?;
    let claim = engine.update_fields(id, request.into(), &performed_by)?;
    Ok(Json(claim.into()))
}

/// Approves a claim
pub async fn approve_claim(
    State(state): State<AppState>,
    Path(id): Path<ClaimId>,
    headers: HeaderMap,
    Json(request): Json<ApproveClaimRequest>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let performed_by = actor::from_headers(&headers, &state.config);
    let mut engine = state.engine()?;
    let claim = engine.approve(id, request.notes, &performed_by)?;
    Ok(Json(claim.into()))
}

/// Rejects a claim
pub async fn reject_claim(
    State(state): State<AppState>,
    Path(id): Path<ClaimId>,
    headers: HeaderMap,
    Json(request): Json<RejectClaimRequest>,
) -> Result<Json<ClaimResponse>, ApiError> {
    request.validate()?;
    let performed_by = actor::from_headers(&headers, &state.config);
    let mut engine = state.engine()?;
    let claim = engine.reject(id, &request.reason, &performed_by)?;
    Ok(Json(claim.into()))
}

/// Routes an approved claim to a repair shop
pub async fn send_to_shop(
    State(state): State<AppState>,
    Path(id): Path<ClaimId>,
    headers: HeaderMap,
    Json(request): Json<SendToShopRequest>,
) -> Result<Json<ClaimResponse>, ApiError> {
    request.validate()?;
    let performed_by = actor::from_headers(&headers, &state.config);
    let mut engine = state.engine()?;
    let claim = engine.send_to_shop(
        id,
        ShopId::new(request.shop_id),
        request.notes,
        &performed_by,
    )?;
    Ok(Json(claim.into()))
}

/// Approves all pending claims in a confidence tier
///
/// Partial success always returns 200; per-claim failures are logged by the
/// engine and excluded from the returned list.
pub async fn batch_approve(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<BatchApproveRequest>,
) -> Result<Json<BatchApproveResponse>, ApiError> {
    let confidence = request.confidence.unwrap_or(ConfidenceTier::High);
    let performed_by = actor::from_headers(&headers, &state.config);

    let mut engine = state.engine()?;
    let outcome = engine.batch_approve(confidence, &performed_by);

    Ok(Json(BatchApproveResponse {
        message: format!(
            "Batch approved {} {confidence} confidence claims",
            outcome.approved_count()
        ),
        approved_claims: outcome.approved_count(),
        confidence: outcome.confidence,
        claims: outcome.approved.into_iter().map(ClaimResponse::from).collect(),
    }))
}

/// Lists damage items for a claim
pub async fn list_damage_items(
    State(state): State<AppState>,
    Path(id): Path<ClaimId>,
) -> Result<Json<Vec<DamageItemResponse>>, ApiError> {
    let engine = state.engine()?;
    let items = engine
        .store()
        .damage_items_for(id)
        .into_iter()
        .map(DamageItemResponse::from)
        .collect();
    Ok(Json(items))
}

/// Lists photos for a claim
pub async fn list_photos(
    State(state): State<AppState>,
    Path(id): Path<ClaimId>,
) -> Result<Json<Vec<PhotoResponse>>, ApiError> {
    let engine = state.engine()?;
    let photos = engine
        .store()
        .photos_for(id)
        .into_iter()
        .map(PhotoResponse::from)
        .collect();
    Ok(Json(photos))
}

/// Lists the cost breakdown for a claim
pub async fn list_cost_breakdown(
    State(state): State<AppState>,
    Path(id): Path<ClaimId>,
) -> Result<Json<Vec<CostLineResponse>>, ApiError> {
    let engine = state.engine()?;
    let lines = engine
        .store()
        .cost_lines_for(id)
        .into_iter()
        .map(CostLineResponse::from)
        .collect();
    Ok(Json(lines))
}

/// Lists the audit log for a claim, newest first
pub async fn list_audit_log(
    State(state): State<AppState>,
    Path(id): Path<ClaimId>,
) -> Result<Json<Vec<AuditEntryResponse>>, ApiError> {
    let engine = state.engine()?;
    let entries = engine
        .store()
        .audit_log_for(id)
        .into_iter()
        .map(AuditEntryResponse::from)
        .collect();
    Ok(Json(entries))
}

/// Resets the store to the canonical seed dataset
pub async fn reset_data(State(state): State<AppState>) -> Result<Json<MessageResponse>, ApiError> {
    let mut engine = state.engine()?;

    let before = engine.store().claims();
    info!(
        claims = before.len(),
        high_confidence_pending = count_high_pending(&before),
        "resetting demo data"
    );

    engine.reset_demo_data();

    let after = engine.store().claims();
    info!(
        claims = after.len(),
        high_confidence_pending = count_high_pending(&after),
        "demo data reset complete"
    );

    Ok(Json(MessageResponse {
        message: "Data reset to initial state successfully".to_string(),
    }))
}

fn count_high_pending(claims: &[domain_claims::Claim]) -> usize {
    claims
        .iter()
        .filter(|c| {
            c.status == ClaimStatus::PendingReview && c.ai_confidence == Some(ConfidenceTier::High)
        })
        .count()
}
