use std::path::Path;

use ai_client::TextGenerator;
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
                .add_directive("apify_client=info".parse()?)
                .add_directive("ai_client=info".parse()?),
        )
        .init();

    let variant = Variant::PrivacyResearch;
    let config = ResearchConfig::from_env(variant)?;

    let scraper = ApifyClient::new(config.apify_api_token.clone());
    // from_env has already rejected a missing GEMINI_API_KEY for this variant.
    let generator = config.text_generator();
    let generator = generator.as_ref().map(|g| g as &dyn TextGenerator);

    pipeline::run(&variant.profile(), &scraper, generator, Path::new(".")).await?;

    tracing::info!("Research and content generation complete");
    Ok(())
}
