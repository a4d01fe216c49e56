// crates/price-grid-server/src/audit.rs
// ============================================================================
// Module: API Audit Logging
// Description: Structured audit events for pricing API requests.
// Purpose: Emit JSON-line audit logs without hard logging dependencies.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! This module defines audit event payloads and sinks for API request
//! logging. It is intentionally lightweight so deployments can route events
//! to their preferred logging pipeline without redesign. Events carry stable
//! labels and byte counts only; payload contents are never logged.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io;
use std::io::Write;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;

// ============================================================================
// SECTION: Labels
// ============================================================================

/// API request classification.
///
/// # Invariants
/// - Variants are stable for audit labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiMethod {
    /// GET of the persisted matrix.
    LoadPricing,
    /// POST of a full save payload.
    SavePricing,
}

impl ApiMethod {
    /// Returns a stable label for the method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LoadPricing => "load_pricing",
            Self::SavePricing => "save_pricing",
        }
    }
}

/// API request outcome classification.
///
/// # Invariants
/// - Variants are stable for audit labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiOutcome {
    /// Successful request.
    Ok,
    /// Payload rejected by validation.
    Rejected,
    /// Internal failure.
    Error,
}

impl ApiOutcome {
    /// Returns a stable label for the outcome.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Rejected => "rejected",
            Self::Error => "error",
        }
    }
}

// ============================================================================
// SECTION: Events
// ============================================================================

/// API audit event payload.
///
/// # Invariants
/// - Optional fields are `None` when the metadata is unavailable.
#[derive(Debug, Clone, Serialize)]
pub struct ApiAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Request classification.
    pub method: ApiMethod,
    /// Request outcome.
    pub outcome: ApiOutcome,
    /// HTTP status code returned.
    pub status: u16,
    /// Normalized error kind label.
    pub error_kind: Option<&'static str>,
    /// Request body size in bytes.
    pub request_bytes: usize,
    /// Response body size in bytes.
    pub response_bytes: usize,
}

impl ApiAuditEvent {
    /// Builds a request event with the current timestamp.
    #[must_use]
    pub fn request(method: ApiMethod, outcome: ApiOutcome, status: u16) -> Self {
        Self {
            event: "api_request",
            timestamp_ms: now_ms(),
            method,
            outcome,
            status,
            error_kind: None,
            request_bytes: 0,
            response_bytes: 0,
        }
    }
}

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Audit sink for API request events.
pub trait ApiAuditSink: Send + Sync {
    /// Records one audit event.
    fn record(&self, event: &ApiAuditEvent);
}

/// Audit sink that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAuditSink;

impl ApiAuditSink for NoopAuditSink {
    fn record(&self, _event: &ApiAuditEvent) {}
}

/// Audit sink writing JSON lines to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrAuditSink;

impl ApiAuditSink for StderrAuditSink {
    fn record(&self, event: &ApiAuditEvent) {
        let Ok(mut line) = serde_json::to_vec(event) else {
            return;
        };
        line.push(b'\n');
        // Audit failures must never fail the request path.
        let _ = io::stderr().lock().write_all(&line);
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns milliseconds since the Unix epoch.
fn now_ms() -> u128 {
    SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |elapsed| elapsed.as_millis())
}
