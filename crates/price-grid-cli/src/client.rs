// crates/price-grid-cli/src/client.rs
// ============================================================================
// Module: Pricing API Client
// Description: HTTP client for the pricing load and save endpoints.
// Purpose: Drive remote edit workflows from the CLI.
// Dependencies: price-grid-core, reqwest, serde_json, thiserror
// ============================================================================

//! ## Overview
//! A thin client over the pricing API. Loads answer the full persisted
//! matrix; saves post a full matrix and adopt the echoed canonical record.
//! Rejections carry the server's surfaced message so callers can show it
//! verbatim.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use price_grid_core::Matrix;
use serde_json::Value;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Pricing client errors.
///
/// # Invariants
/// - `Rejected` carries the status and message the server answered with.
#[derive(Debug, Error)]
pub enum PricingClientError {
    /// Transport-level failure before a response was received.
    #[error("transport error: {0}")]
    Transport(String),
    /// The server rejected the request.
    #[error("server rejected request ({status}): {message}")]
    Rejected {
        /// HTTP status code of the rejection.
        status: u16,
        /// Error message surfaced by the server.
        message: String,
    },
    /// The response body could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),
}

// ============================================================================
// SECTION: Client
// ============================================================================

/// HTTP client for the pricing API.
pub struct PricingClient {
    /// Base URL of the pricing server.
    base_url: String,
    /// Underlying HTTP client.
    http: reqwest::Client,
}

impl PricingClient {
    /// Builds a client for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns [`PricingClientError::Transport`] when the HTTP client cannot
    /// be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, PricingClientError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| PricingClientError::Transport(err.to_string()))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Fetches the persisted matrix.
    ///
    /// # Errors
    ///
    /// Returns [`PricingClientError`] on transport failure, rejection, or an
    /// undecodable body.
    pub async fn fetch_matrix(&self) -> Result<Matrix, PricingClientError> {
        let url = format!("{}/api/pricing", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|err| PricingClientError::Transport(err.to_string()))?;
        decode_matrix(response).await
    }

    /// Posts a full matrix and returns the echoed canonical record.
    ///
    /// # Errors
    ///
    /// Returns [`PricingClientError::Rejected`] with the server's message when
    /// the payload fails validation, and [`PricingClientError`] transport or
    /// decode variants otherwise.
    pub async fn save_matrix(&self, matrix: &Matrix) -> Result<Matrix, PricingClientError> {
        let url = format!("{}/api/save-pricing", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(matrix)
            .send()
            .await
            .map_err(|err| PricingClientError::Transport(err.to_string()))?;
        decode_matrix(response).await
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Decodes a matrix response, mapping non-success statuses to rejections.
async fn decode_matrix(response: reqwest::Response) -> Result<Matrix, PricingClientError> {
    let status = response.status();
    if status.is_success() {
        return response
            .json::<Matrix>()
            .await
            .map_err(|err| PricingClientError::Decode(err.to_string()));
    }
    let message = response.json::<Value>().await.ok().map_or_else(
        || status.to_string(),
        |body| {
            body.get("error")
                .and_then(Value::as_str)
                .map_or_else(|| status.to_string(), ToString::to_string)
        },
    );
    Err(PricingClientError::Rejected {
        status: status.as_u16(),
        message,
    })
}
