//! Data types for iNaturalist API responses
//!
//! Only the fields the vocabulary builder reads are modelled. Everything is
//! optional because the API omits fields freely.

use serde::{Deserialize, Deserializer};

/// Generic paginated list response (`total_results`, `results`)
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListResponse<T> {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_results: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<T>,
}

/// Row from `/observations/species_counts`
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesCount {
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u64,
    pub taxon: Option<Taxon>,
}

/// Taxon record, used both for the slim species-count taxa and for the
/// detailed `/taxa/{ids}` results that carry an ancestor chain
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Taxon {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub preferred_common_name: Option<String>,
    pub rank: Option<String>,
    pub ancestors: Option<Vec<Taxon>>,
}

impl Taxon {
    /// Ancestor chain, root first; empty when the record was not enriched
    pub fn ancestors(&self) -> &[Taxon] {
        self.ancestors.as_deref().unwrap_or_default()
    }
}

/// Observation from `/observations`
#[derive(Debug, Clone, Deserialize)]
pub struct Observation {
    pub id: Option<u64>,
    pub license_code: Option<String>,
    pub user: Option<User>,
    pub photos: Option<Vec<Photo>>,
}

/// Observer account attached to an observation
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub login: Option<String>,
}

/// Photo attached to an observation
#[derive(Debug, Clone, Deserialize)]
pub struct Photo {
    pub url: Option<String>,
    pub license_code: Option<String>,
}

/// Explicit `null` decodes like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
