//! Course vocabulary builder
//!
//! Pulls the species of one iNaturalist project, enriches them with their
//! family/order/class ancestry, attaches one research-grade photographed
//! observation per species and writes the result as a JSON vocabulary.

pub mod catalog;
pub mod collector;
pub mod config;
pub mod error;
pub mod example_obs;
pub mod output;
pub mod taxonomy;
pub mod types;

#[cfg(test)]
mod test_support;

pub use catalog::build_catalog;
pub use config::Config;
pub use error::{Result, VocabError};
pub use output::write_catalog;
pub use types::{CatalogRecord, CatalogSummary, ExampleObservation};
