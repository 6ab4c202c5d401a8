//! HTTP client for the openFDA API.

use crate::event::{DrugEvent, ReactionCount};
use crate::label::DrugLabel;
use crate::query::{interaction_search_url, label_search_url, reaction_count_url};
use crate::{OpenFdaError, OpenFdaResult};
use std::time::Duration;
use tracing::debug;

/// HTTP client for the openFDA drug label and adverse event endpoints.
///
/// Response status codes are not treated as failures on their own: openFDA reports
/// "no matches" as a `404` with a `NOT_FOUND` error body, which decodes to an empty result.
/// Any other error body (such as `OVER_RATE_LIMIT`) is an [`OpenFdaError::Api`]. Transport
/// errors and bodies that do not decode are returned as errors.
#[derive(Clone, Debug)]
pub struct OpenFdaClient {
    http: reqwest::Client,
    base_url: String,
}

impl OpenFdaClient {
    /// Create a new client for the given base URL.
    ///
    /// `base_url` should be like `https://api.fda.gov` (a trailing slash is trimmed).
    ///
    /// # Errors
    ///
    /// Returns [`OpenFdaError::InvalidInput`] for an empty base URL, or
    /// [`OpenFdaError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(base_url: &str, timeout: Duration) -> OpenFdaResult<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(OpenFdaError::InvalidInput(
                "openFDA base URL cannot be empty".into(),
            ));
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("drugcheck/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.to_string(),
        })
    }

    /// Search labels whose indications mention `condition` and return one brand name per
    /// record (first brand name only).
    pub async fn search_brand_names(
        &self,
        condition: &str,
        limit: usize,
    ) -> OpenFdaResult<Vec<String>> {
        let url = label_search_url(&self.base_url, condition, limit);
        let body = self.fetch(&url).await?;
        DrugLabel::parse_brand_names(&body)
    }

    /// Fetch drug-interaction descriptions for the medication union.
    pub async fn search_interactions(&self, medications: &[String]) -> OpenFdaResult<Vec<String>> {
        let url = interaction_search_url(&self.base_url, medications);
        let body = self.fetch(&url).await?;
        DrugLabel::parse_interactions(&body)
    }

    /// Fetch the most frequently reported reactions for the medication union.
    pub async fn count_reactions(
        &self,
        medications: &[String],
        limit: usize,
    ) -> OpenFdaResult<Vec<ReactionCount>> {
        let url = reaction_count_url(&self.base_url, medications, limit);
        let body = self.fetch(&url).await?;
        DrugEvent::parse_reaction_counts(&body)
    }

    async fn fetch(&self, url: &str) -> OpenFdaResult<String> {
        debug!(url = %url, "querying openFDA");
        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "openFDA responded");
        Ok(body)
    }
}
