pub mod error;
pub mod types;

pub use error::{ApifyError, Result};
pub use types::{
    GoogleSearchInput, RunData, SearchQueryInfo, SearchResultEntry, SearchResultPage,
};

use serde::de::DeserializeOwned;
use serde::Serialize;
use types::ApiResponse;

const BASE_URL: &str = "https://api.apify.com/v2";

/// Actor ID for apify/google-search-scraper.
pub const GOOGLE_SEARCH_SCRAPER: &str = "apify~google-search-scraper";

/// Items requested per dataset page.
const DATASET_PAGE_SIZE: usize = 1000;

pub struct ApifyClient {
    client: reqwest::Client,
    token: String,
    base_url: String,
}

impl ApifyClient {
    pub fn new(token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            token,
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Start an actor run. Returns immediately with run metadata.
    pub async fn start_run<I: Serialize + ?Sized>(
        &self,
        actor_id: &str,
        input: &I,
    ) -> Result<RunData> {
        let url = format!("{}/acts/{}/runs", self.base_url, actor_id);
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(input)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApifyError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let api_resp: ApiResponse<RunData> = resp.json().await?;
        Ok(api_resp.data)
    }

    /// Poll until a run completes. Uses `waitForFinish=60` for efficient long-polling.
    pub async fn wait_for_run(&self, run_id: &str) -> Result<RunData> {
        loop {
            let url = format!("{}/actor-runs/{}?waitForFinish=60", self.base_url, run_id);
            let resp = self
                .client
                .get(&url)
                .bearer_auth(&self.token)
                .send()
                .await?;

            let status = resp.status();
            if !status.is_success() {
                let body = resp.text().await.unwrap_or_default();
                return Err(ApifyError::Api {
                    status: status.as_u16(),
                    message: body,
                });
            }

            let run = resp.json::<ApiResponse<RunData>>().await?.data;
            if run.succeeded() {
                return Ok(run);
            }
            if run.is_terminal() {
                return Err(ApifyError::RunFailed {
                    run_id: run.id,
                    status: run.status,
                });
            }
            tracing::debug!(run_id, status = %run.status, "Run still in progress");
        }
    }

    /// Start an actor run and block until it finishes successfully.
    pub async fn call_actor<I: Serialize + ?Sized>(
        &self,
        actor_id: &str,
        input: &I,
    ) -> Result<RunData> {
        let run = self.start_run(actor_id, input).await?;
        tracing::info!(run_id = %run.id, actor_id, "Apify run started, polling for completion");

        if run.succeeded() {
            return Ok(run);
        }

        let completed = self.wait_for_run(&run.id).await?;
        tracing::info!(
            run_id = %completed.id,
            dataset_id = %completed.default_dataset_id,
            started_at = ?completed.started_at,
            finished_at = ?completed.finished_at,
            "Run completed"
        );
        Ok(completed)
    }

    /// Fetch one page of dataset items.
    pub async fn get_dataset_items<T: DeserializeOwned>(
        &self,
        dataset_id: &str,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<T>> {
        let url = format!(
            "{}/datasets/{}/items?format=json&offset={}&limit={}",
            self.base_url, dataset_id, offset, limit
        );
        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApifyError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let items: Vec<T> = resp.json().await?;
        Ok(items)
    }

    /// Fetch every item of a dataset, in dataset order, one page at a time.
    /// Items are not cleaned, so the offset tracks the raw dataset position.
    /// A short page does not end the dataset; only an empty one does.
    pub async fn iterate_dataset_items<T: DeserializeOwned>(
        &self,
        dataset_id: &str,
    ) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut offset = 0;
        loop {
            let page: Vec<T> = self
                .get_dataset_items(dataset_id, offset, DATASET_PAGE_SIZE)
                .await?;
            if page.is_empty() {
                return Ok(items);
            }
            offset += page.len();
            tracing::debug!(dataset_id, fetched = page.len(), offset, "Fetched dataset page");
            items.extend(page);
        }
    }

    /// Run the Google search scraper and block until its dataset is ready.
    pub async fn run_google_search(&self, input: &GoogleSearchInput) -> Result<RunData> {
        tracing::info!(
            queries = input.queries.lines().count(),
            results_per_page = input.results_per_page,
            "Starting Google search scrape"
        );
        self.call_actor(GOOGLE_SEARCH_SCRAPER, input).await
    }

    /// Fetch all results pages produced by a Google search scraper run.
    pub async fn search_result_pages(&self, dataset_id: &str) -> Result<Vec<SearchResultPage>> {
        let pages: Vec<SearchResultPage> = self.iterate_dataset_items(dataset_id).await?;
        tracing::info!(count = pages.len(), dataset_id, "Fetched search result pages");
        Ok(pages)
    }
}
