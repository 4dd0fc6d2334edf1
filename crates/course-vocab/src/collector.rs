//! Paginated collection of per-species observation counts for a project

use crate::config::Config;
use crate::error::Result;
use inaturalist_api::{InatClient, SpeciesCount};
use tracing::info;

/// Fetch every species-count row of `project_id`, page by page.
///
/// Stops on an empty page, once `page * per_page` covers `total_results`, or
/// when `max_species_pages` pages have been fetched (logged, not an error).
pub async fn fetch_species_counts(
    client: &InatClient,
    config: &Config,
    project_id: &str,
) -> Result<Vec<SpeciesCount>> {
    let per_page = config.per_page;
    let mut results = Vec::new();
    let mut page: u32 = 1;

    loop {
        if page > config.max_species_pages {
            info!(
                max_pages = config.max_species_pages,
                "Reached species page cap, stopping"
            );
            break;
        }

        info!(project_id, page, per_page, "Requesting project species_counts");
        let data = client
            .species_counts(project_id, page, per_page, &config.retry)
            .await?;

        if data.results.is_empty() {
            break;
        }
        results.extend(data.results);

        if u64::from(page) * u64::from(per_page) >= data.total_results {
            break;
        }

        page += 1;
        tokio::time::sleep(config.request_pause).await;
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{client, species_row, FakeInat};
    use std::sync::atomic::Ordering;

    fn rows(start: u64, n: u64) -> Vec<serde_json::Value> {
        (start..start + n)
            .map(|id| species_row(id, &format!("Genus species{id}"), id % 50 + 1))
            .collect()
    }

    #[tokio::test]
    async fn test_stops_when_total_reached() {
        let fake = FakeInat {
            species_total: 450,
            species_pages: vec![rows(1, 200), rows(201, 200), rows(401, 50), rows(451, 10)],
            ..Default::default()
        };
        let (fake, config) = fake.spawn().await;

        let results = fetch_species_counts(&client(&config), &config, "test-project")
            .await
            .unwrap();

        assert_eq!(fake.species_hits.load(Ordering::SeqCst), 3);
        assert_eq!(results.len(), 450);
    }

    #[tokio::test]
    async fn test_stops_on_empty_page() {
        let fake = FakeInat {
            species_total: 1000,
            species_pages: vec![rows(1, 200)],
            ..Default::default()
        };
        let (fake, config) = fake.spawn().await;

        let results = fetch_species_counts(&client(&config), &config, "test-project")
            .await
            .unwrap();

        assert_eq!(fake.species_hits.load(Ordering::SeqCst), 2);
        assert_eq!(results.len(), 200);
    }

    #[tokio::test]
    async fn test_page_cap_stops_pagination() {
        let fake = FakeInat {
            species_total: 10_000,
            species_pages: (0..10).map(|p| rows(p * 200 + 1, 200)).collect(),
            ..Default::default()
        };
        let (fake, config) = fake.spawn().await;

        let results = fetch_species_counts(&client(&config), &config, "test-project")
            .await
            .unwrap();

        assert_eq!(fake.species_hits.load(Ordering::SeqCst), 5);
        assert_eq!(results.len(), 1000);
    }

    #[tokio::test]
    async fn test_rows_pass_through_in_order() {
        let fake = FakeInat {
            species_total: 2,
            species_pages: vec![vec![
                species_row(9, "Bombus terrestris", 4),
                species_row(9, "Bombus terrestris", 7),
            ]],
            ..Default::default()
        };
        let (_, config) = fake.spawn().await;

        let results = fetch_species_counts(&client(&config), &config, "test-project")
            .await
            .unwrap();

        let counts: Vec<_> = results.iter().map(|r| r.count).collect();
        assert_eq!(counts, vec![4, 7]);
    }
}
