use std::path::PathBuf;

use ai_client::AiError;
use apify_client::ApifyError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ResearchError>;

#[derive(Debug, Error)]
pub enum ResearchError {
    #[error("{0} not found in environment or .env")]
    MissingEnv(&'static str),

    #[error("Scrape failed: {0}")]
    Scrape(#[from] ApifyError),

    #[error("Content generation failed: {0}")]
    Generate(#[from] AiError),

    #[error("Draft generation requires a text generator")]
    NoGenerator,

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
