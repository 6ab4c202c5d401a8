//! Constants used throughout the drugcheck core crate.
//!
//! Query limits and configuration defaults live here so the HTTP server, the CLI and the
//! tests agree on them.

/// Maximum number of label records fetched per selected condition.
pub const LABEL_LIMIT: usize = 10;

/// Number of reaction terms requested from the adverse event count query.
pub const REACTION_LIMIT: usize = 10;

/// Default bind address for the HTTP server.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Default number of tokio worker threads serving requests.
pub const DEFAULT_WORKERS: usize = 4;

/// Default openFDA request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default openFDA base URL.
pub const DEFAULT_OPENFDA_BASE_URL: &str = openfda::DEFAULT_BASE_URL;
