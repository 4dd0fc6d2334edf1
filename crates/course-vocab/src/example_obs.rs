//! Selection of one representative photographed observation per species

use crate::config::{Config, ALLOWED_LICENSES};
use crate::error::Result;
use crate::types::ExampleObservation;
use inaturalist_api::{InatClient, Observation, ObservationQuery, Photo};
use tracing::info;

const OBSERVATION_URL_BASE: &str = "https://www.inaturalist.org/observations";

/// Newest research-grade photographed observation of `taxon_id` inside
/// `project_id`, turned into an [`ExampleObservation`]
pub async fn fetch_example_observation(
    client: &InatClient,
    config: &Config,
    taxon_id: u64,
    project_id: &str,
) -> Result<Option<ExampleObservation>> {
    info!(taxon_id, "Fetching example observation in project");

    let query = ObservationQuery {
        taxon_id,
        project_id,
        per_page: config.example_candidates,
    };
    let observations = client.observations(&query, &config.example_retry).await?;

    Ok(observations.first().and_then(select_example))
}

/// Build the example from an observation, or `None` when it has no usable photo
pub fn select_example(observation: &Observation) -> Option<ExampleObservation> {
    let obs_id = observation.id?;
    let photos = observation.photos.as_deref().unwrap_or_default();
    let observation_license = non_empty(observation.license_code.as_deref());
    let photo = pick_photo(photos, observation_license)?;
    let url = non_empty(photo.url.as_deref())?;

    let observer = observation
        .user
        .as_ref()
        .and_then(|u| non_empty(u.login.as_deref()))
        .unwrap_or("unknown");

    Some(ExampleObservation {
        obs_id,
        photo_url: large_photo_url(url),
        observer: observer.to_string(),
        license_code: non_empty(photo.license_code.as_deref())
            .or(observation_license)
            .map(str::to_string),
        obs_url: format!("{}/{}", OBSERVATION_URL_BASE, obs_id),
    })
}

/// First photo whose license (falling back to the observation's) is allowed,
/// otherwise the first photo
pub fn pick_photo<'a>(
    photos: &'a [Photo],
    observation_license: Option<&str>,
) -> Option<&'a Photo> {
    photos
        .iter()
        .find(|photo| {
            non_empty(photo.license_code.as_deref())
                .or(observation_license)
                .is_some_and(is_allowed_license)
        })
        .or_else(|| photos.first())
}

/// Empty strings from the API count as missing
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn is_allowed_license(code: &str) -> bool {
    ALLOWED_LICENSES
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(code))
}

/// Ask for the large rendition instead of the square thumbnail
pub fn large_photo_url(url: &str) -> String {
    url.replace("square.", "large.")
}
