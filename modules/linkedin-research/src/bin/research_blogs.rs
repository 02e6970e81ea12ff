use std::path::Path;

use anyhow::Result;
use apify_client::ApifyClient;
use tracing_subscriber::EnvFilter;

use linkedin_research::{pipeline, ResearchConfig, Variant};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("linkedin_research=info".parse()?)
                .add_directive("apify_client=info".parse()?),
        )
        .init();

    let variant = Variant::AutomationResearch;
    let config = ResearchConfig::from_env(variant)?;

    let scraper = ApifyClient::new(config.apify_api_token.clone());
    let outcome = pipeline::run(&variant.profile(), &scraper, None, Path::new(".")).await?;

    tracing::info!(
        count = outcome.records.len(),
        path = %outcome.records_path.display(),
        "Saved results"
    );
    Ok(())
}
