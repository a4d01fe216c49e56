// crates/price-grid-config/src/lib.rs
// ============================================================================
// Module: Price Grid Config Library
// Description: Configuration loading and validation for Price Grid.
// Purpose: Expose the canonical configuration model.
// Dependencies: crate::config
// ============================================================================

//! ## Overview
//! This crate owns the Price Grid configuration model: strict TOML loading
//! with hard limits and fail-closed validation. Servers and tools consume
//! configuration only through this crate.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::AuditMode;
pub use config::ConfigError;
pub use config::PriceGridConfig;
pub use config::ServerConfig;
pub use config::StoreConfig;
pub use config::StoreType;
