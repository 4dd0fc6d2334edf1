//! In-process stand-in for the iNaturalist API, served by axum on a random port

use crate::config::Config;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use inaturalist_api::{InatClient, RetryPolicy};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(Default)]
pub struct FakeInat {
    /// Rows served per page, page 1 first
    pub species_pages: Vec<Vec<Value>>,
    pub species_total: u64,
    /// `/taxa` results keyed by id
    pub taxa: HashMap<u64, Value>,
    /// `/observations` results keyed by `taxon_id`
    pub observations: HashMap<u64, Vec<Value>>,
    /// Number of leading `/observations` requests answered with 429
    pub observations_throttled: u32,
    /// Taxon ids whose `/observations` request fails with 500
    pub observations_failing: Vec<u64>,
    pub species_hits: AtomicU32,
    pub taxa_hits: AtomicU32,
    pub observation_hits: AtomicU32,
}

impl FakeInat {
    pub async fn spawn(self) -> (Arc<Self>, Config) {
        let state = Arc::new(self);
        let router = Router::new()
            .route("/observations/species_counts", get(species_counts))
            .route("/taxa/{ids}", get(taxa))
            .route("/observations", get(observations))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        (state, test_config(&format!("http://{}", addr)))
    }
}

pub fn test_config(base_url: &str) -> Config {
    Config {
        base_url: base_url.to_string(),
        project_id: "test-project".to_string(),
        request_pause: Duration::ZERO,
        retry: RetryPolicy::exponential(2, Duration::from_millis(1)),
        example_retry: RetryPolicy::single_retry(Duration::from_millis(1)),
        ..Config::default()
    }
}

pub fn client(config: &Config) -> InatClient {
    config.client().unwrap()
}

pub fn taxon(id: u64, name: &str, common: Option<&str>) -> Value {
    json!({"id": id, "name": name, "preferred_common_name": common, "rank": "species"})
}

pub fn species_row(id: u64, name: &str, count: u64) -> Value {
    json!({"count": count, "taxon": taxon(id, name, None)})
}

pub fn observation(id: u64, photos: Value) -> Value {
    json!({
        "id": id,
        "license_code": "cc-by",
        "user": {"login": format!("observer{id}")},
        "photos": photos,
    })
}

pub fn photo(url: &str, license: Option<&str>) -> Value {
    json!({"id": 1, "url": url, "license_code": license})
}

async fn species_counts(
    State(fake): State<Arc<FakeInat>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    fake.species_hits.fetch_add(1, Ordering::SeqCst);
    let page: usize = params
        .get("page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(1);
    let rows = fake
        .species_pages
        .get(page.saturating_sub(1))
        .cloned()
        .unwrap_or_default();
    Json(json!({
        "total_results": fake.species_total,
        "page": page,
        "per_page": params.get("per_page").and_then(|p| p.parse::<u64>().ok()),
        "results": rows,
    }))
}

async fn taxa(State(fake): State<Arc<FakeInat>>, Path(ids): Path<String>) -> Json<Value> {
    fake.taxa_hits.fetch_add(1, Ordering::SeqCst);
    let results: Vec<Value> = ids
        .split(',')
        .filter_map(|id| id.parse::<u64>().ok())
        .filter_map(|id| fake.taxa.get(&id).cloned())
        .collect();
    Json(json!({"total_results": results.len(), "results": results}))
}

async fn observations(
    State(fake): State<Arc<FakeInat>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let n = fake.observation_hits.fetch_add(1, Ordering::SeqCst);
    if n < fake.observations_throttled {
        return StatusCode::TOO_MANY_REQUESTS.into_response();
    }
    let taxon_id: u64 = params
        .get("taxon_id")
        .and_then(|t| t.parse().ok())
        .unwrap_or_default();
    if fake.observations_failing.contains(&taxon_id) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    let results = fake.observations.get(&taxon_id).cloned().unwrap_or_default();
    Json(json!({"total_results": results.len(), "results": results})).into_response()
}
