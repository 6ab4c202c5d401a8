//! # drugcheck Core
//!
//! Core business logic for drugcheck.
//!
//! This crate contains the lookup pipeline and the data it works with:
//! - The fixed list of selectable medical conditions
//! - Medication lookup orchestration (conditions -> brand names -> interactions and side effects)
//! - Startup configuration and error types
//!
//! **No API concerns**: HTML rendering, HTTP routing and CLI parsing belong in `api-rest`,
//! `api-shared` or `drugcheck-cli`. openFDA wire formats belong in the `openfda` crate.

pub mod conditions;
pub mod config;
pub mod constants;
pub mod error;
pub mod lookup;

pub use conditions::{is_known_condition, CONDITIONS};
pub use config::CoreConfig;
pub use constants::*;
pub use error::{LookupError, LookupResult};
pub use lookup::{DrugDataSource, MedicationLookupService, ResultPayload};

/// Lookup service backed by the live openFDA client.
pub type OpenFdaLookupService = MedicationLookupService<openfda::OpenFdaClient>;

impl OpenFdaLookupService {
    /// Build the production lookup service from startup configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::OpenFda`] if the HTTP client cannot be built.
    pub fn from_config(cfg: &CoreConfig) -> LookupResult<Self> {
        Ok(Self::new(cfg.openfda_client()?))
    }
}
