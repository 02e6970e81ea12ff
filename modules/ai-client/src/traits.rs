use async_trait::async_trait;

use crate::error::Result;

// =============================================================================
// TextGenerator Trait
// =============================================================================

/// Single-shot text completion: one prompt in, one generated text out.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}
