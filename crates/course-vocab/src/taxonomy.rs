//! Taxonomy enrichment: batched ancestor lookups and rank resolution

use crate::config::Config;
use crate::error::Result;
use inaturalist_api::{InatClient, Taxon};
use std::collections::HashMap;
use tracing::info;

/// Nearest family/order/class names found in an ancestor chain
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AncestorNames {
    pub family: RankName,
    pub order: RankName,
    pub class: RankName,
}

/// Scientific and common name of a resolved ancestor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankName {
    pub scientific: Option<String>,
    pub common: Option<String>,
}

impl RankName {
    fn is_resolved(&self) -> bool {
        self.scientific.is_some()
    }

    fn from_taxon(taxon: &Taxon) -> Self {
        Self {
            scientific: taxon.name.clone(),
            common: taxon.preferred_common_name.clone(),
        }
    }
}

/// Fetch detailed taxa for `taxon_ids` in chunks of `taxa_chunk_size`.
///
/// Ids the API does not return are absent from the map.
pub async fn fetch_taxon_details(
    client: &InatClient,
    config: &Config,
    taxon_ids: &[u64],
) -> Result<HashMap<u64, Taxon>> {
    let mut details = HashMap::with_capacity(taxon_ids.len());

    for chunk in taxon_ids.chunks(config.taxa_chunk_size.max(1)) {
        if let (Some(first), Some(last)) = (chunk.first(), chunk.last()) {
            info!(first, last, "Enriching taxonomy for taxon_ids");
        }

        for taxon in client.taxa(chunk, &config.retry).await? {
            if let Some(id) = taxon.id {
                details.insert(id, taxon);
            }
        }

        tokio::time::sleep(config.request_pause).await;
    }

    Ok(details)
}

/// Resolve the nearest family, order and class ancestors; the first match
/// per rank wins
pub fn nearest_ancestors(taxon: &Taxon) -> AncestorNames {
    let mut names = AncestorNames::default();

    for ancestor in taxon.ancestors() {
        let slot = match ancestor.rank.as_deref() {
            Some("family") => &mut names.family,
            Some("order") => &mut names.order,
            Some("class") => &mut names.class,
            _ => continue,
        };
        if !slot.is_resolved() {
            *slot = RankName::from_taxon(ancestor);
        }
    }

    names
}

/// Genus is the first whitespace-delimited token of the scientific name
pub fn genus_of(scientific_name: &str) -> &str {
    scientific_name
        .split_whitespace()
        .next()
        .unwrap_or(scientific_name)
}
