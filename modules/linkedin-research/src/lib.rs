pub mod config;
pub mod error;
pub mod flatten;
pub mod generate;
pub mod persist;
pub mod pipeline;
pub mod profile;
pub mod query;
pub mod scrape;

pub use config::ResearchConfig;
pub use error::{ResearchError, Result};
pub use flatten::{flatten, ResultRecord};
pub use generate::{build_prompt, BlogDraft, PROMPT_RECORD_LIMIT};
pub use pipeline::{run, RunOutcome};
pub use profile::{ResearchProfile, Variant};
pub use query::{build_query_batch, SearchQuery};
pub use scrape::{ScrapeOptions, ScrapeRun, SearchScraper};
