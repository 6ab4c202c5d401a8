//! openFDA boundary support for drugcheck.
//!
//! This crate provides **wire models**, **query construction** and an **HTTP client** for the
//! two openFDA endpoints drugcheck talks to:
//! - `drug/label.json` (structured product labels)
//! - `drug/event.json` (adverse event reports)
//!
//! This crate focuses on:
//! - building request URLs exactly the way the service expects them
//! - strict deserialisation of the fields drugcheck reads
//! - translation from wire structs to plain domain values
//!
//! It deliberately knows nothing about conditions, forms or HTML; orchestration belongs in
//! `drugcheck-core`.

pub mod client;
pub mod envelope;
pub mod event;
pub mod label;
pub mod query;

// Re-export facades
pub use client::OpenFdaClient;
pub use event::DrugEvent;
pub use label::DrugLabel;

// Re-export public domain-level types
pub use event::ReactionCount;
pub use query::union_term;

/// Default base URL of the public openFDA API.
pub const DEFAULT_BASE_URL: &str = "https://api.fda.gov";

/// Errors returned by the `openfda` boundary crate.
#[derive(Debug, thiserror::Error)]
pub enum OpenFdaError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{endpoint} returned error {code}: {message}")]
    Api {
        endpoint: &'static str,
        code: String,
        message: String,
    },

    #[error("{endpoint} response schema mismatch at {path}: {message}")]
    Decode {
        endpoint: &'static str,
        path: String,
        message: String,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Type alias for Results that can fail with an [`OpenFdaError`].
pub type OpenFdaResult<T> = Result<T, OpenFdaError>;
