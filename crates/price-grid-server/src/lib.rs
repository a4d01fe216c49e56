// crates/price-grid-server/src/lib.rs
// ============================================================================
// Module: Price Grid Server Library
// Description: HTTP API, persistence validator, and save-cycle service.
// Purpose: Expose the pricing matrix over load and save endpoints.
// Dependencies: price-grid-core, price-grid-config, axum, tokio
// ============================================================================

//! ## Overview
//! The server crate hosts the validate-and-store contract: a small axum API
//! that loads the persisted matrix and accepts full-matrix save payloads.
//! Payloads are untrusted and pass through the schema validator before any
//! write; storage failures never leak internal detail to callers.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
pub mod server;
pub mod service;
pub mod validation;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::ApiAuditEvent;
pub use audit::ApiAuditSink;
pub use audit::ApiMethod;
pub use audit::ApiOutcome;
pub use audit::NoopAuditSink;
pub use audit::StderrAuditSink;
pub use server::ApiServer;
pub use server::ApiServerError;
pub use service::PricingService;
pub use service::SaveError;
pub use validation::FieldError;
pub use validation::MatrixValidationError;
pub use validation::MatrixValidator;
pub use validation::SchemaBuildError;
