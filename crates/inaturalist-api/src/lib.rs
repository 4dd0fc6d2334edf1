//! Rust client for the iNaturalist v1 API
//!
//! Covers the three read endpoints needed to build a species vocabulary for
//! an iNaturalist project, with retries when the API throttles (HTTP 429).
//!
//! # Example
//!
//! ```no_run
//! use inaturalist_api::{InatClient, RetryPolicy};
//!
//! # async fn example() -> Result<(), inaturalist_api::InatError> {
//! let client = InatClient::new()?;
//! let policy = RetryPolicy::default();
//!
//! let page = client.species_counts("my-project", 1, 200, &policy).await?;
//! println!("{} species in project", page.total_results);
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - `GET /observations/species_counts` - Species with observation counts for a project
//! - `GET /taxa/{ids}` - Batch taxon details including the ancestor chain
//! - `GET /observations` - Observation search

mod client;
mod error;
mod retry;
mod types;

pub use client::{InatClient, ObservationQuery};
pub use error::{InatError, Result};
pub use retry::{Backoff, RetryPolicy};
pub use types::{ListResponse, Observation, Photo, SpeciesCount, Taxon, User};
