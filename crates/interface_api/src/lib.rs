//! HTTP API Layer
//!
//! This crate provides the REST API for the claims-review core using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for claims and health
//! - **Middleware**: Request logging and tracing
//! - **DTOs**: Request/Response data transfer objects (camelCase wire format)
//! - **Error Handling**: Workflow errors mapped onto HTTP status codes
//!
//! The workflow engine and its store are wrapped in a mutex: the store
//! read-then-writes in multiple steps (batch approval, reset), so every
//! operation must hold exclusive access for its duration.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let engine = WorkflowEngine::new(MemoryStore::seeded());
//! let app = create_router(engine, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod actor;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_claims::WorkflowEngine;
use infra_store::MemoryStore;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::handlers::{claims, health};
use crate::middleware::request_log_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    engine: Arc<Mutex<WorkflowEngine<MemoryStore>>>,
    pub config: ApiConfig,
}

impl AppState {
    pub fn new(engine: WorkflowEngine<MemoryStore>, config: ApiConfig) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
            config,
        }
    }

    /// Exclusive access to the workflow engine for the current request
    pub fn engine(&self) -> Result<MutexGuard<'_, WorkflowEngine<MemoryStore>>, ApiError> {
        self.engine
            .lock()
            .map_err(|_| ApiError::Internal("workflow engine lock poisoned".to_string()))
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `engine` - Workflow engine over its entity store
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(engine: WorkflowEngine<MemoryStore>, config: ApiConfig) -> Router {
    let state = AppState::new(engine, config);

    let claims_routes = Router::new()
        .route("/", get(claims::list_claims))
        .route("/batch-approve", post(claims::batch_approve))
        .route("/number/:claim_number", get(claims::get_claim_by_number))
        .route("/:id", get(claims::get_claim).patch(claims::update_claim))
        .route("/:id/approve", post(claims::approve_claim))
        .route("/:id/reject", post(claims::reject_claim))
        .route("/:id/send-to-shop", post(claims::send_to_shop))
        .route("/:id/damage-items", get(claims::list_damage_items))
        .route("/:id/photos", get(claims::list_photos))
        .route("/:id/cost-breakdown", get(claims::list_cost_breakdown))
        .route("/:id/audit-log", get(claims::list_audit_log));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/claims", claims_routes)
        .route("/api/reset-data", post(claims::reset_data))
        .layer(axum_middleware::from_fn(request_log_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
