// Scrape runner: submits a query batch to the search-scraping actor and pulls
// back its dataset. SearchScraper is the seam the pipeline depends on, so runs
// can be driven by an in-memory fake in tests.

use apify_client::{ApifyClient, GoogleSearchInput, RunData, SearchResultPage};
use async_trait::async_trait;

/// Fixed per-variant actor options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub country_code: String,
    pub language_code: String,
    pub results_per_page: u32,
    pub max_pages_per_query: u32,
}

impl ScrapeOptions {
    pub fn new(results_per_page: u32) -> Self {
        Self {
            country_code: "us".to_string(),
            language_code: "en".to_string(),
            results_per_page,
            max_pages_per_query: 1,
        }
    }

    pub fn input(&self, queries: String) -> GoogleSearchInput {
        GoogleSearchInput {
            queries,
            max_pages_per_query: self.max_pages_per_query,
            results_per_page: self.results_per_page,
            country_code: self.country_code.clone(),
            language_code: self.language_code.clone(),
        }
    }
}

/// A finished actor run, addressed by its dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeRun {
    pub run_id: String,
    pub dataset_id: String,
}

impl From<RunData> for ScrapeRun {
    fn from(run: RunData) -> Self {
        Self {
            run_id: run.id,
            dataset_id: run.default_dataset_id,
        }
    }
}

#[async_trait]
pub trait SearchScraper: Send + Sync {
    /// Run the search actor and block until it reaches a terminal state.
    async fn run_search(&self, input: &GoogleSearchInput) -> apify_client::Result<ScrapeRun>;

    /// Pull every results page of a finished run, in dataset order.
    async fn result_pages(&self, dataset_id: &str) -> apify_client::Result<Vec<SearchResultPage>>;
}

#[async_trait]
impl SearchScraper for ApifyClient {
    async fn run_search(&self, input: &GoogleSearchInput) -> apify_client::Result<ScrapeRun> {
        Ok(self.run_google_search(input).await?.into())
    }

    async fn result_pages(&self, dataset_id: &str) -> apify_client::Result<Vec<SearchResultPage>> {
        self.search_result_pages(dataset_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_build_actor_input() {
        let input = ScrapeOptions::new(10).input("q1\nq2".to_string());
        assert_eq!(input.queries, "q1\nq2");
        assert_eq!(input.results_per_page, 10);
        assert_eq!(input.max_pages_per_query, 1);
        assert_eq!(input.country_code, "us");
        assert_eq!(input.language_code, "en");
    }
}
