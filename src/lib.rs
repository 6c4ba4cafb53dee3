// Re-export modules
pub mod assemble;
pub mod config;
pub mod error;
pub mod fetch;
pub mod ids;
pub mod lp;
pub mod sanitize;
pub mod sections;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::ImportConfig;
pub use error::ImportError;
pub use lp::{Confidence, Lp, LpMeta, LpStatus};
pub use sections::{Section, SectionData, SectionKind};

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::path::Path;

use scraper::Html;
use serde::{Deserialize, Serialize};

use crate::ids::{IdSource, SystemIds};

/// Boundary request: the page to import
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// Boundary response: either a complete LP or a single flat error message
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ImportResponse {
    Success { lp: Lp },
    Failure { error: String },
}

/// Builder for configuring and running page imports
pub struct Importer {
    config: ImportConfig,
    ids: Box<dyn IdSource>,
}

impl Importer {
    /// Create an importer with default configuration and system ids
    pub fn new() -> Self {
        Self {
            config: ImportConfig::default(),
            ids: Box::new(SystemIds),
        }
    }

    /// Apply a configuration
    pub fn with_config(mut self, config: ImportConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file<P: AsRef<Path>>(
        mut self,
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        self.config = ImportConfig::from_file(path)?;
        Ok(self)
    }

    /// Override the User-Agent header sent with the fetch
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.config.user_agent = user_agent.to_string();
        self
    }

    /// Substitute the identifier/clock source (deterministic ids in tests)
    pub fn with_ids(mut self, ids: Box<dyn IdSource>) -> Self {
        self.ids = ids;
        self
    }

    /// Fetch a page and decompose it into landing-page sections
    pub async fn import(&mut self, url: &str) -> Result<Lp, ImportError> {
        let html = fetch::fetch_html(url, &self.config.user_agent).await?;
        Ok(self.import_html(url, &html))
    }

    /// Decompose already-fetched HTML into landing-page sections.
    ///
    /// This is the network-free tail of the pipeline: parse, sanitize,
    /// extract, assemble. It never fails; pages with no matchable content
    /// still produce a wrapped LP with zero sections and low confidence.
    pub fn import_html(&mut self, source_url: &str, html: &str) -> Lp {
        let mut doc = Html::parse_document(html);
        sanitize::sanitize(&mut doc);
        assemble::assemble(&doc, source_url, self.ids.as_mut())
    }

    /// Serve one boundary request.
    ///
    /// Maps every failure to its generic message; a panic anywhere in the
    /// parse/extract stage is contained here and reported as a parse
    /// failure, so nothing propagates past the boundary unhandled.
    pub async fn handle(&mut self, request: ImportRequest) -> ImportResponse {
        let Some(url) = request.url else {
            return ImportResponse::Failure {
                error: ImportError::MissingUrl.to_string(),
            };
        };

        let html = match fetch::fetch_html(&url, &self.config.user_agent).await {
            Ok(html) => html,
            Err(e) => {
                return ImportResponse::Failure {
                    error: e.to_string(),
                };
            }
        };

        match catch_unwind(AssertUnwindSafe(|| self.import_html(&url, &html))) {
            Ok(lp) => ImportResponse::Success { lp },
            Err(_) => {
                ::log::error!("Import pipeline panicked for {}", url);
                ImportResponse::Failure {
                    error: ImportError::Parse.to_string(),
                }
            }
        }
    }
}

impl Default for Importer {
    fn default() -> Self {
        Self::new()
    }
}
