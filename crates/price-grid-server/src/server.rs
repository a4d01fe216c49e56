// crates/price-grid-server/src/server.rs
// ============================================================================
// Module: Pricing API Server
// Description: axum HTTP server for matrix load and save endpoints.
// Purpose: Expose the validate-and-store contract over HTTP.
// Dependencies: price-grid-config, price-grid-core, axum, tokio
// ============================================================================

//! ## Overview
//! The API server exposes two endpoints: `GET /api/pricing` returns the full
//! persisted matrix (all-zero when no record exists) and
//! `POST /api/save-pricing` runs the save cycle over the request body.
//! Payloads are untrusted; rejected payloads answer 422 with the first
//! collected validation message, and internal failures answer a generic 500
//! that never leaks detail.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::routing::post;
use price_grid_config::AuditMode;
use price_grid_config::PriceGridConfig;
use price_grid_config::StoreType;
use price_grid_core::InMemoryMatrixStore;
use price_grid_core::SharedMatrixStore;
use price_grid_core::StoreError;
use price_grid_store_file::FileMatrixStore;
use serde_json::Value;
use serde_json::json;
use thiserror::Error;

use crate::audit::ApiAuditEvent;
use crate::audit::ApiAuditSink;
use crate::audit::ApiMethod;
use crate::audit::ApiOutcome;
use crate::audit::NoopAuditSink;
use crate::audit::StderrAuditSink;
use crate::service::PricingService;
use crate::service::SaveError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Generic error message for unexpected failures.
pub const UNKNOWN_ERROR: &str = "Unknown Error";

// ============================================================================
// SECTION: API Server
// ============================================================================

/// Pricing API server.
pub struct ApiServer {
    /// Bind address for the listener.
    bind: String,
    /// Shared request handling state.
    state: Arc<ServerState>,
}

impl ApiServer {
    /// Builds an API server from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiServerError`] when configuration is invalid or the store
    /// cannot be initialized.
    pub fn from_config(config: &PriceGridConfig) -> Result<Self, ApiServerError> {
        config.validate().map_err(|err| ApiServerError::Config(err.to_string()))?;
        let store = build_matrix_store(config);
        let service =
            PricingService::new(store).map_err(|err| ApiServerError::Init(err.to_string()))?;
        let audit: Arc<dyn ApiAuditSink> = match config.server.audit {
            AuditMode::Off => Arc::new(NoopAuditSink),
            AuditMode::Stderr => Arc::new(StderrAuditSink),
        };
        Ok(Self {
            bind: config.server.bind.clone(),
            state: Arc::new(ServerState {
                service,
                audit,
                max_body_bytes: config.server.max_body_bytes,
            }),
        })
    }

    /// Returns the axum router serving the pricing API.
    #[must_use]
    pub fn router(&self) -> Router {
        Router::new()
            .route("/api/pricing", get(handle_load_pricing))
            .route("/api/save-pricing", post(handle_save_pricing))
            .with_state(Arc::clone(&self.state))
    }

    /// Serves requests until the listener fails.
    ///
    /// # Errors
    ///
    /// Returns [`ApiServerError`] when binding or serving fails.
    pub async fn serve(self) -> Result<(), ApiServerError> {
        let addr: SocketAddr = self
            .bind
            .parse()
            .map_err(|_| ApiServerError::Config("invalid bind address".to_string()))?;
        let app = self.router();
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|_| ApiServerError::Transport("http bind failed".to_string()))?;
        axum::serve(listener, app)
            .await
            .map_err(|_| ApiServerError::Transport("http server failed".to_string()))
    }
}

/// Builds the matrix store selected by configuration.
fn build_matrix_store(config: &PriceGridConfig) -> SharedMatrixStore {
    match config.store.store_type {
        StoreType::Memory => SharedMatrixStore::from_store(InMemoryMatrixStore::new()),
        StoreType::File => {
            SharedMatrixStore::from_store(FileMatrixStore::open(config.store.path.clone()))
        }
    }
}

/// Shared server state for request handlers.
struct ServerState {
    /// Save-cycle service over the configured store.
    service: PricingService,
    /// Audit sink for request events.
    audit: Arc<dyn ApiAuditSink>,
    /// Maximum allowed request body size.
    max_body_bytes: usize,
}

// ============================================================================
// SECTION: Handlers
// ============================================================================

/// Handles `GET /api/pricing`.
async fn handle_load_pricing(
    State(state): State<Arc<ServerState>>,
) -> (StatusCode, Json<Value>) {
    let (status, outcome, error_kind, body) = match state.service.load_pricing() {
        Ok(matrix) => match serde_json::to_value(matrix) {
            Ok(value) => (StatusCode::OK, ApiOutcome::Ok, None, value),
            Err(_) => internal_failure("serialize"),
        },
        Err(err) => internal_failure(store_error_kind(&err)),
    };
    record_request(&state, ApiMethod::LoadPricing, outcome, status, error_kind, 0, &body);
    (status, Json(body))
}

/// Handles `POST /api/save-pricing`.
async fn handle_save_pricing(
    State(state): State<Arc<ServerState>>,
    bytes: Bytes,
) -> (StatusCode, Json<Value>) {
    let request_bytes = bytes.len();
    let (status, outcome, error_kind, body) = save_response(&state, &bytes);
    record_request(
        &state,
        ApiMethod::SavePricing,
        outcome,
        status,
        error_kind,
        request_bytes,
        &body,
    );
    (status, Json(body))
}

/// Runs the save cycle for a raw request body.
fn save_response(
    state: &ServerState,
    bytes: &Bytes,
) -> (StatusCode, ApiOutcome, Option<&'static str>, Value) {
    if bytes.len() > state.max_body_bytes {
        return (
            StatusCode::PAYLOAD_TOO_LARGE,
            ApiOutcome::Rejected,
            Some("too_large"),
            json!({ "error": "payload too large" }),
        );
    }
    let Ok(payload) = serde_json::from_slice::<Value>(bytes) else {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            ApiOutcome::Rejected,
            Some("malformed_json"),
            json!({ "error": "payload is not valid json" }),
        );
    };
    match state.service.validate_and_store(&payload) {
        Ok(matrix) => match serde_json::to_value(matrix) {
            Ok(value) => (StatusCode::OK, ApiOutcome::Ok, None, value),
            Err(_) => internal_failure("serialize"),
        },
        Err(SaveError::Rejected(rejection)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            ApiOutcome::Rejected,
            Some("schema"),
            json!({ "error": rejection.first_message() }),
        ),
        Err(SaveError::Store(err)) => internal_failure(store_error_kind(&err)),
    }
}

/// Builds the generic internal-failure response.
fn internal_failure(
    error_kind: &'static str,
) -> (StatusCode, ApiOutcome, Option<&'static str>, Value) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        ApiOutcome::Error,
        Some(error_kind),
        json!({ "error": UNKNOWN_ERROR }),
    )
}

/// Returns a stable label for a store error variant.
const fn store_error_kind(err: &StoreError) -> &'static str {
    match err {
        StoreError::Io(_) => "store_io",
        StoreError::Corrupt(_) => "store_corrupt",
        StoreError::Invalid(_) => "store_invalid",
        StoreError::Store(_) => "store",
    }
}

/// Records one request event through the audit sink.
fn record_request(
    state: &ServerState,
    method: ApiMethod,
    outcome: ApiOutcome,
    status: StatusCode,
    error_kind: Option<&'static str>,
    request_bytes: usize,
    body: &Value,
) {
    let mut event = ApiAuditEvent::request(method, outcome, status.as_u16());
    event.error_kind = error_kind;
    event.request_bytes = request_bytes;
    event.response_bytes = serde_json::to_vec(body).map_or(0, |encoded| encoded.len());
    state.audit.record(&event);
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// API server errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ApiServerError {
    /// Invalid configuration.
    #[error("config error: {0}")]
    Config(String),
    /// Initialization failure.
    #[error("init error: {0}")]
    Init(String),
    /// Transport failure.
    #[error("transport error: {0}")]
    Transport(String),
}
