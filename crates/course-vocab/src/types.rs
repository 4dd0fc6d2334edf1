//! Catalog types written to the vocabulary file

use inaturalist_api::Taxon;
use serde::{Deserialize, Serialize};

/// One species row after deduplication
#[derive(Debug, Clone)]
pub struct SpeciesEntry {
    pub taxon_id: u64,
    pub taxon: Taxon,
    pub count: u64,
}

/// Representative photographed observation for a species
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleObservation {
    pub obs_id: u64,
    pub photo_url: String,
    pub observer: String,
    pub license_code: Option<String>,
    pub obs_url: String,
}

/// One vocabulary entry. Optional fields serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecord {
    pub scientific_name: String,
    pub swedish_name: Option<String>,
    pub genus_name: String,
    /// Same as `family_scientific_name`; kept for older readers
    pub family_name: Option<String>,
    pub family_scientific_name: Option<String>,
    pub family_swedish_name: Option<String>,
    pub order_scientific_name: Option<String>,
    pub order_swedish_name: Option<String>,
    pub class_scientific_name: Option<String>,
    pub class_swedish_name: Option<String>,
    pub rank: Option<String>,
    pub taxon_id: u64,
    pub obs_count: u64,
    pub example_observation: Option<ExampleObservation>,
}

/// Counters reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogSummary {
    pub rows_fetched: usize,
    pub unique_species: usize,
    pub skipped_missing_name: usize,
    pub skipped_no_example: usize,
    pub records: usize,
}
