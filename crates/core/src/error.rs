//! Error types for the medication lookup pipeline.

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("openFDA error: {0}")]
    OpenFda(#[from] openfda::OpenFdaError),
}

pub type LookupResult<T> = std::result::Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;
    use openfda::OpenFdaError;

    #[test]
    fn openfda_api_errors_convert_and_keep_their_code() {
        fn rate_limited() -> LookupResult<()> {
            Err(OpenFdaError::Api {
                endpoint: "drug/event",
                code: "OVER_RATE_LIMIT".into(),
                message: "API rate limit exceeded".into(),
            })?
        }

        let err = rate_limited().expect_err("should fail");
        assert!(matches!(err, LookupError::OpenFda(OpenFdaError::Api { .. })));
        assert_eq!(
            err.to_string(),
            "openFDA error: drug/event returned error OVER_RATE_LIMIT: API rate limit exceeded"
        );
    }
}
