use inaturalist_api::{InatClient, RetryPolicy};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Project slug of the 2025 floristik & faunistik course (works as `project_id`)
pub const COURSE_PROJECT_SLUG: &str = "2025-floristik-och-faunistik-pa-kau-big001-bigbi1-bign10";
pub const COURSE_KEY: &str = "course_2025";

/// Licenses a photo may carry to be preferred as the example image
pub const ALLOWED_LICENSES: [&str; 3] = ["cc0", "cc-by", "cc-by-nc"];

/// Run configuration. Defaults are the fixed constants of the course build.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub project_id: String,
    /// Names the output file: `{course_key}_vocab.json`
    pub course_key: String,
    pub output_dir: PathBuf,
    pub locale: String,
    pub per_page: u32,
    pub max_species_pages: u32,
    pub taxa_chunk_size: usize,
    pub example_candidates: u32,
    /// Politeness delay between consecutive page/chunk requests
    pub request_pause: Duration,
    pub retry: RetryPolicy,
    pub example_retry: RetryPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: InatClient::DEFAULT_BASE_URL.to_string(),
            project_id: COURSE_PROJECT_SLUG.to_string(),
            course_key: COURSE_KEY.to_string(),
            output_dir: PathBuf::from("data").join(COURSE_KEY),
            locale: InatClient::DEFAULT_LOCALE.to_string(),
            per_page: 200,
            max_species_pages: 5,
            taxa_chunk_size: 30,
            example_candidates: 30,
            request_pause: Duration::from_millis(200),
            retry: RetryPolicy::default(),
            example_retry: RetryPolicy::single_retry(RetryPolicy::SINGLE_RETRY_PAUSE),
        }
    }
}

impl Config {
    /// Defaults, with optional overrides from `INAT_BASE_URL`, `COURSE_PROJECT`
    /// and `OUTPUT_DIR`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = env::var("INAT_BASE_URL") {
            config.base_url = url;
        }
        if let Ok(project) = env::var("COURSE_PROJECT") {
            config.project_id = project;
        }
        if let Ok(dir) = env::var("OUTPUT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }

        config
    }

    pub fn output_file(&self) -> PathBuf {
        self.output_dir.join(format!("{}_vocab.json", self.course_key))
    }

    pub fn client(&self) -> inaturalist_api::Result<InatClient> {
        Ok(InatClient::with_base_url(&self.base_url)?.with_locale(&self.locale))
    }
}
