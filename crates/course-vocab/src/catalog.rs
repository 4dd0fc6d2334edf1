//! Catalog assembly: dedup, sort, enrich and attach an example per species

use crate::collector::fetch_species_counts;
use crate::config::Config;
use crate::error::Result;
use crate::example_obs::{fetch_example_observation, non_empty};
use crate::taxonomy::{fetch_taxon_details, genus_of, nearest_ancestors};
use crate::types::{CatalogRecord, CatalogSummary, ExampleObservation, SpeciesEntry};
use inaturalist_api::{InatClient, SpeciesCount, Taxon};
use std::collections::HashMap;
use tracing::info;

/// Build the vocabulary for `config.project_id`, most observed species first
pub async fn build_catalog(
    client: &InatClient,
    config: &Config,
) -> Result<(Vec<CatalogRecord>, CatalogSummary)> {
    let project_id = config.project_id.as_str();
    let mut summary = CatalogSummary::default();

    let rows = fetch_species_counts(client, config, project_id).await?;
    summary.rows_fetched = rows.len();
    info!(rows = rows.len(), "Got species-level rows from project");

    let species = dedupe_species(rows);
    summary.unique_species = species.len();
    info!(species = species.len(), "Unique species in project");

    let taxon_ids: Vec<u64> = species.iter().map(|s| s.taxon_id).collect();
    let details = fetch_taxon_details(client, config, &taxon_ids).await?;

    let mut records = Vec::with_capacity(species.len());
    for entry in &species {
        let Some(scientific_name) = non_empty(entry.taxon.name.as_deref()) else {
            summary.skipped_missing_name += 1;
            info!(taxon_id = entry.taxon_id, "No scientific name, skipping");
            continue;
        };

        let Some(example) =
            fetch_example_observation(client, config, entry.taxon_id, project_id).await?
        else {
            summary.skipped_no_example += 1;
            info!(
                taxon_id = entry.taxon_id,
                name = scientific_name,
                "No usable project observation found, skipping"
            );
            continue;
        };

        let enriched = details.get(&entry.taxon_id).unwrap_or(&entry.taxon);
        records.push(build_record(entry, scientific_name, enriched, example));
    }

    summary.records = records.len();
    info!(records = records.len(), "Built course vocab");
    Ok((records, summary))
}

/// Keep one row per taxon id with the highest count (first seen wins ties),
/// ordered by count descending. Rows without a taxon id are dropped.
pub fn dedupe_species(rows: Vec<SpeciesCount>) -> Vec<SpeciesEntry> {
    let mut species: Vec<SpeciesEntry> = Vec::new();
    let mut index: HashMap<u64, usize> = HashMap::new();

    for row in rows {
        let Some(taxon) = row.taxon else { continue };
        let Some(taxon_id) = taxon.id.filter(|id| *id != 0) else {
            continue;
        };

        match index.get(&taxon_id) {
            Some(&i) => {
                if row.count > species[i].count {
                    species[i] = SpeciesEntry {
                        taxon_id,
                        taxon,
                        count: row.count,
                    };
                }
            }
            None => {
                index.insert(taxon_id, species.len());
                species.push(SpeciesEntry {
                    taxon_id,
                    taxon,
                    count: row.count,
                });
            }
        }
    }

    // stable: ties keep first-seen order
    species.sort_by(|a, b| b.count.cmp(&a.count));
    species
}

/// Merge a species row, its enriched taxon and the example into a record.
///
/// Common name comes from the species-count taxon; rank and ancestors from
/// the enriched taxon.
pub fn build_record(
    entry: &SpeciesEntry,
    scientific_name: &str,
    enriched: &Taxon,
    example: ExampleObservation,
) -> CatalogRecord {
    let ancestors = nearest_ancestors(enriched);

    CatalogRecord {
        scientific_name: scientific_name.to_string(),
        swedish_name: entry.taxon.preferred_common_name.clone(),
        genus_name: genus_of(scientific_name).to_string(),
        family_name: ancestors.family.scientific.clone(),
        family_scientific_name: ancestors.family.scientific,
        family_swedish_name: ancestors.family.common,
        order_scientific_name: ancestors.order.scientific,
        order_swedish_name: ancestors.order.common,
        class_scientific_name: ancestors.class.scientific,
        class_swedish_name: ancestors.class.common,
        rank: enriched.rank.clone(),
        taxon_id: entry.taxon_id,
        obs_count: entry.count,
        example_observation: Some(example),
    }
}
