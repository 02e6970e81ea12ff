use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// --- Google search scraper types ---

/// Input for the apify/google-search-scraper actor.
///
/// `queries` is a single newline-delimited string; the actor runs one search
/// per line.
#[derive(Debug, Clone, Serialize)]
pub struct GoogleSearchInput {
    pub queries: String,
    #[serde(rename = "maxPagesPerQuery")]
    pub max_pages_per_query: u32,
    #[serde(rename = "resultsPerPage")]
    pub results_per_page: u32,
    #[serde(rename = "countryCode")]
    pub country_code: String,
    #[serde(rename = "languageCode")]
    pub language_code: String,
}

/// One results page from the google-search-scraper dataset.
/// The actor emits one item per query per page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResultPage {
    #[serde(rename = "searchQuery")]
    pub search_query: Option<SearchQueryInfo>,
    #[serde(rename = "organicResults")]
    pub organic_results: Option<Vec<SearchResultEntry>>,
    #[serde(rename = "suggestedResults")]
    pub suggested_results: Option<Vec<SearchResultEntry>>,
}

impl SearchResultPage {
    /// The search term that produced this page, if the actor reported one.
    pub fn term(&self) -> Option<&str> {
        self.search_query.as_ref()?.term.as_deref()
    }

    pub fn organic(&self) -> &[SearchResultEntry] {
        self.organic_results.as_deref().unwrap_or_default()
    }

    pub fn suggested(&self) -> &[SearchResultEntry] {
        self.suggested_results.as_deref().unwrap_or_default()
    }
}

/// The `searchQuery` block of a results page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQueryInfo {
    pub term: Option<String>,
}

/// A single organic or suggested search hit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResultEntry {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
}

/// Wrapper for Apify API responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

/// Apify actor run metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct RunData {
    pub id: String,
    pub status: String,
    #[serde(rename = "defaultDatasetId")]
    pub default_dataset_id: String,
    #[serde(rename = "startedAt")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(rename = "finishedAt")]
    pub finished_at: Option<DateTime<Utc>>,
}

impl RunData {
    /// Apify marks a run terminal once it can no longer change status.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.status.as_str(),
            "SUCCEEDED" | "FAILED" | "ABORTED" | "TIMED-OUT"
        )
    }

    pub fn succeeded(&self) -> bool {
        self.status == "SUCCEEDED"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_uses_actor_field_names() {
        let input = GoogleSearchInput {
            queries: "a\nb".to_string(),
            max_pages_per_query: 1,
            results_per_page: 10,
            country_code: "us".to_string(),
            language_code: "en".to_string(),
        };
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "queries": "a\nb",
                "maxPagesPerQuery": 1,
                "resultsPerPage": 10,
                "countryCode": "us",
                "languageCode": "en",
            })
        );
    }

    #[test]
    fn page_tolerates_missing_and_null_fields() {
        let page: SearchResultPage = serde_json::from_str(
            r#"{"searchQuery": null, "organicResults": [{"title": null, "url": "https://x"}]}"#,
        )
        .unwrap();
        assert_eq!(page.term(), None);
        assert_eq!(page.organic().len(), 1);
        assert_eq!(page.organic()[0].title, None);
        assert!(page.suggested().is_empty());
    }

    #[test]
    fn page_ignores_unknown_fields() {
        let page: SearchResultPage = serde_json::from_str(
            r#"{
                "searchQuery": {"term": "q", "page": "1", "countryCode": 7, "type": "SEARCH"},
                "paidResults": [],
                "organicResults": [{"title": "t", "url": "u", "description": "d", "position": 1}]
            }"#,
        )
        .unwrap();
        assert_eq!(page.term(), Some("q"));
        assert_eq!(page.organic()[0].description.as_deref(), Some("d"));
    }

    #[test]
    fn run_status_classification() {
        let mut run: RunData = serde_json::from_str(
            r#"{"id": "r1", "status": "RUNNING", "defaultDatasetId": "d1"}"#,
        )
        .unwrap();
        assert!(!run.is_terminal());
        run.status = "TIMED-OUT".to_string();
        assert!(run.is_terminal());
        assert!(!run.succeeded());
        run.status = "SUCCEEDED".to_string();
        assert!(run.succeeded());
    }
}
