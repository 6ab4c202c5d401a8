//! # API Shared
//!
//! Shared request/response types for the drugcheck JSON API.
//!
//! Contains:
//! - JSON DTOs (`dto` module) with OpenAPI schemas
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` for the JSON endpoints and the OpenAPI document.

pub mod dto;
pub mod health;

pub use dto::*;
pub use health::HealthService;
