//! Course vocabulary builder - iNaturalist project to JSON species vocabulary

use course_vocab::{build_catalog, write_catalog, Config, Result};
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging
    let env_filter = EnvFilter::from_default_env()
        .add_directive("course_vocab=info".parse()?)
        .add_directive("inaturalist_api=info".parse()?);

    // Use JSON format for GCP Cloud Logging when LOG_FORMAT=json
    if std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false)
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_stackdriver::layer())
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    };

    let config = Config::from_env();
    info!(project_id = %config.project_id, "Building course vocab");

    let client = config.client()?;
    let (records, summary) = build_catalog(&client, &config).await?;

    let output_file = config.output_file();
    write_catalog(&output_file, &records).await?;

    info!(
        entries = records.len(),
        rows_fetched = summary.rows_fetched,
        unique_species = summary.unique_species,
        skipped_no_example = summary.skipped_no_example,
        skipped_missing_name = summary.skipped_missing_name,
        path = %output_file.display(),
        "Done"
    );

    Ok(())
}
