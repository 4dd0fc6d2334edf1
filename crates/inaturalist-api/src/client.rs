//! iNaturalist API HTTP client

use crate::error::{InatError, Result};
use crate::retry::RetryPolicy;
use crate::types::*;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Client for the iNaturalist v1 API
///
/// Every request carries the configured `locale` so that
/// `preferred_common_name` comes back in the wanted language.
pub struct InatClient {
    http: reqwest::Client,
    base_url: String,
    locale: String,
}

/// Filters for `/observations` when looking for an example photo
#[derive(Debug, Clone)]
pub struct ObservationQuery<'a> {
    pub taxon_id: u64,
    pub project_id: &'a str,
    pub per_page: u32,
}

impl InatClient {
    /// Base URL for the public iNaturalist API v1
    pub const DEFAULT_BASE_URL: &'static str = "https://api.inaturalist.org/v1";
    pub const DEFAULT_LOCALE: &'static str = "sv";
    const USER_AGENT: &'static str = concat!("inaturalist-api-rs/", env!("CARGO_PKG_VERSION"));

    /// Create a client against the public API (30 second timeout)
    pub fn new() -> Result<Self> {
        Self::with_base_url(Self::DEFAULT_BASE_URL)
    }

    /// Create a client against a custom API root, e.g. a local stand-in
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(Self::USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            locale: Self::DEFAULT_LOCALE.to_string(),
        })
    }

    /// Override the response locale
    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = locale.to_string();
        self
    }

    /// GET `path` with `params` and decode the JSON body
    ///
    /// 429 responses are retried according to `policy`; once the budget is
    /// spent this fails with [`InatError::RateLimitExceeded`] naming `context`.
    /// Any other non-success status fails immediately with [`InatError::Http`].
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
        context: &str,
        policy: &RetryPolicy,
    ) -> Result<T> {
        let url = self.build_url(path, params)?;
        let mut attempt = 0;

        loop {
            debug!(url = %url, attempt, "GET");
            let response = self.http.get(url.clone()).send().await?;
            let status = response.status();

            if status == StatusCode::TOO_MANY_REQUESTS {
                attempt += 1;
                let Some(wait) = policy.delay_for(attempt) else {
                    return Err(InatError::RateLimitExceeded {
                        context: context.to_string(),
                        retries: policy.max_retries,
                    });
                };
                warn!(
                    context,
                    attempt,
                    wait_secs = wait.as_secs_f64(),
                    "429 throttling, sleeping before retry"
                );
                tokio::time::sleep(wait).await;
                continue;
            }

            if !status.is_success() {
                return Err(InatError::Http {
                    status,
                    context: context.to_string(),
                });
            }

            return Ok(response.json().await?);
        }
    }

    /// One page of `/observations/species_counts` for a project, most observed first
    pub async fn species_counts(
        &self,
        project_id: &str,
        page: u32,
        per_page: u32,
        policy: &RetryPolicy,
    ) -> Result<ListResponse<SpeciesCount>> {
        let params = [
            ("project_id", project_id.to_string()),
            ("per_page", per_page.to_string()),
            ("page", page.to_string()),
            ("verifiable", "true".to_string()),
            ("order_by", "observations_count".to_string()),
            ("order", "desc".to_string()),
        ];
        let context = format!("project_id={}, page={}", project_id, page);
        self.get_json("/observations/species_counts", &params, &context, policy)
            .await
    }

    /// Detailed taxa (with ancestors) for a batch of ids via `/taxa/{id,id,...}`
    ///
    /// Ids the API does not know are simply missing from the result.
    pub async fn taxa(&self, ids: &[u64], policy: &RetryPolicy) -> Result<Vec<Taxon>> {
        let (Some(first), Some(last)) = (ids.first(), ids.last()) else {
            return Ok(vec![]);
        };
        let joined = ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let context = format!("taxon_ids {}..{}", first, last);
        let data: ListResponse<Taxon> = self
            .get_json(&format!("/taxa/{}", joined), &[], &context, policy)
            .await?;
        Ok(data.results)
    }

    /// Research-grade, photographed observations of one taxon inside a
    /// project, newest first
    pub async fn observations(
        &self,
        query: &ObservationQuery<'_>,
        policy: &RetryPolicy,
    ) -> Result<Vec<Observation>> {
        let params = [
            ("taxon_id", query.taxon_id.to_string()),
            ("project_id", query.project_id.to_string()),
            ("photos", "true".to_string()),
            ("per_page", query.per_page.to_string()),
            ("order", "desc".to_string()),
            ("order_by", "created_at".to_string()),
            ("quality_grade", "research".to_string()),
        ];
        let context = format!(
            "taxon_id={}, project_id={}",
            query.taxon_id, query.project_id
        );
        let data: ListResponse<Observation> = self
            .get_json("/observations", &params, &context, policy)
            .await?;
        Ok(data.results)
    }

    fn build_url(&self, path: &str, params: &[(&str, String)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))?;
        url.query_pairs_mut()
            .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())))
            .append_pair("locale", &self.locale);
        Ok(url)
    }
}
