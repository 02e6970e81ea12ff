use ai_client::gemini::DEFAULT_MODEL;
use ai_client::{truncate_to_char_boundary, Gemini};

use crate::error::{ResearchError, Result};
use crate::profile::Variant;

/// Secrets and overrides for one research run, loaded from the environment.
#[derive(Debug, Clone)]
pub struct ResearchConfig {
    pub apify_api_token: String,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
}

impl ResearchConfig {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env(variant: Variant) -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(variant, |key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as missing.
    /// Fails on the first required key that is absent.
    pub fn from_lookup(variant: Variant, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let apify_api_token =
            get("APIFY_API_TOKEN").ok_or(ResearchError::MissingEnv("APIFY_API_TOKEN"))?;

        let gemini_api_key = match get("GEMINI_API_KEY") {
            Some(key) => Some(key),
            None if variant.requires_generator() => {
                return Err(ResearchError::MissingEnv("GEMINI_API_KEY"))
            }
            None => None,
        };

        let config = Self {
            apify_api_token,
            gemini_api_key,
            gemini_model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        };

        config.log_keys();
        Ok(config)
    }

    /// Gemini client for draft generation; `None` when no key was configured.
    pub fn text_generator(&self) -> Option<Gemini> {
        let key = self.gemini_api_key.as_deref()?;
        Some(Gemini::new(key, self.gemini_model.as_str()))
    }

    fn log_keys(&self) {
        fn preview(val: &str) -> String {
            format!("{}...({} chars)", truncate_to_char_boundary(val, 5), val.len())
        }

        tracing::info!("Config loaded:");
        tracing::info!("  APIFY_API_TOKEN: {}", preview(&self.apify_api_token));
        tracing::info!(
            "  GEMINI_API_KEY: {}",
            self.gemini_api_key
                .as_deref()
                .map(preview)
                .unwrap_or_else(|| "<not set>".to_string())
        );
        tracing::info!("  GEMINI_MODEL: {}", self.gemini_model);
    }
}
