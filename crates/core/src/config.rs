//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. Request handling never reads process-wide environment
//! variables; binaries read them once and hand the parsed values in here.

use crate::constants::{DEFAULT_TIMEOUT_SECS, DEFAULT_WORKERS};
use crate::{LookupError, LookupResult};
use std::time::Duration;

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    openfda_base_url: String,
    request_timeout: Duration,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::InvalidInput`] if the base URL is empty or not `http(s)://`, or
    /// if the timeout is zero.
    pub fn new(openfda_base_url: String, request_timeout: Duration) -> LookupResult<Self> {
        let openfda_base_url = openfda_base_url.trim().trim_end_matches('/').to_string();

        if openfda_base_url.is_empty() {
            return Err(LookupError::InvalidInput(
                "openFDA base URL cannot be empty".into(),
            ));
        }
        if !(openfda_base_url.starts_with("http://") || openfda_base_url.starts_with("https://"))
        {
            return Err(LookupError::InvalidInput(format!(
                "openFDA base URL must start with http:// or https://: {openfda_base_url}"
            )));
        }
        if request_timeout.is_zero() {
            return Err(LookupError::InvalidInput(
                "openFDA request timeout must be greater than zero".into(),
            ));
        }

        Ok(Self {
            openfda_base_url,
            request_timeout,
        })
    }

    pub fn openfda_base_url(&self) -> &str {
        &self.openfda_base_url
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Build the openFDA client described by this configuration.
    pub fn openfda_client(&self) -> LookupResult<openfda::OpenFdaClient> {
        Ok(openfda::OpenFdaClient::new(
            &self.openfda_base_url,
            self.request_timeout,
        )?)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse the openFDA timeout from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the default.
pub fn timeout_from_env_value(value: Option<String>) -> LookupResult<Duration> {
    let secs = match non_empty(value) {
        Some(v) => v.parse::<u64>().map_err(|_| {
            LookupError::InvalidInput(format!("OPENFDA_TIMEOUT_SECS is not a number: {v}"))
        })?,
        None => DEFAULT_TIMEOUT_SECS,
    };
    Ok(Duration::from_secs(secs))
}

/// Parse the worker thread count from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the default.
pub fn workers_from_env_value(value: Option<String>) -> LookupResult<usize> {
    let Some(v) = non_empty(value) else {
        return Ok(DEFAULT_WORKERS);
    };

    match v.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(LookupError::InvalidInput(format!(
            "DRUGCHECK_WORKERS must be a positive integer: {v}"
        ))),
    }
}
