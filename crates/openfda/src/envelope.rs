//! The JSON envelope shared by every openFDA endpoint.
//!
//! Every response is an object with an optional `results` array. When a search matches
//! nothing the service answers `404` with an `error` object instead:
//!
//! ```json
//! {"error": {"code": "NOT_FOUND", "message": "No matches found!"}}
//! ```
//!
//! Both "no `results` key" and a `NOT_FOUND` error object are reported as `None` so callers
//! can fall back to an empty list. Any other error object (rate limiting, server errors, bad
//! requests) is an [`OpenFdaError::Api`]. Anything that does not fit the envelope (or the
//! record type inside it) is a [`OpenFdaError::Decode`] carrying the JSON path of the
//! mismatch.

use crate::{OpenFdaError, OpenFdaResult};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Error code openFDA uses when a search matches nothing.
const NOT_FOUND_CODE: &str = "NOT_FOUND";

/// Wire representation of an openFDA response body.
#[derive(Debug, Deserialize)]
#[serde(bound = "T: DeserializeOwned")]
struct EnvelopeWire<T> {
    #[serde(default)]
    results: Option<Vec<T>>,
    #[serde(default)]
    error: Option<ApiErrorWire>,
}

/// Wire representation of the `error` object.
#[derive(Debug, Deserialize)]
struct ApiErrorWire {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

/// Decode an openFDA response body into its `results` records.
///
/// This uses `serde_path_to_error` to surface the path (e.g. `results[0].patient.drug`) of
/// the first field that does not match the wire schema.
///
/// # Arguments
///
/// * `endpoint` - Short endpoint name used in error messages and logs.
/// * `body` - Raw response text.
///
/// # Returns
///
/// `Some(records)` when a `results` array is present, `None` when it is absent.
///
/// # Errors
///
/// Returns [`OpenFdaError::Decode`] if the body is not JSON or does not match the schema,
/// and [`OpenFdaError::Api`] for any error object other than `NOT_FOUND`.
pub fn decode_results<T: DeserializeOwned>(
    endpoint: &'static str,
    body: &str,
) -> OpenFdaResult<Option<Vec<T>>> {
    let mut deserializer = serde_json::Deserializer::from_str(body);

    let wire = match serde_path_to_error::deserialize::<_, EnvelopeWire<T>>(&mut deserializer) {
        Ok(parsed) => parsed,
        Err(err) => {
            let path = err.path().to_string();
            let source = err.into_inner();
            let path = if path.is_empty() || path == "." {
                "<root>".to_string()
            } else {
                path
            };
            return Err(OpenFdaError::Decode {
                endpoint,
                path,
                message: source.to_string(),
            });
        }
    };

    if let Some(error) = wire.error {
        if error.code != NOT_FOUND_CODE {
            tracing::warn!(
                endpoint,
                code = %error.code,
                message = %error.message,
                "openFDA returned an error object"
            );
            return Err(OpenFdaError::Api {
                endpoint,
                code: error.code,
                message: error.message,
            });
        }
        tracing::debug!(endpoint, message = %error.message, "openFDA found no matches");
    }

    Ok(wire.results)
}
