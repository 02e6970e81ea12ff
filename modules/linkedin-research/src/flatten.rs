//! Flattening of search result pages into one record per hit.

use apify_client::{SearchResultEntry, SearchResultPage};
use serde::{Deserialize, Serialize};

/// One search hit, with every field present (empty when the source omitted it).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub title: String,
    pub url: String,
    pub description: String,
    pub query: String,
}

impl ResultRecord {
    fn from_entry(entry: &SearchResultEntry, query: &str) -> Self {
        Self {
            title: entry.title.clone().unwrap_or_default(),
            url: entry.url.clone().unwrap_or_default(),
            description: entry.description.clone().unwrap_or_default(),
            query: query.to_string(),
        }
    }
}

/// The hits of a page: organic first, then suggested when requested.
pub fn page_entries(
    page: &SearchResultPage,
    include_suggested: bool,
) -> impl Iterator<Item = &SearchResultEntry> {
    let suggested = if include_suggested {
        page.suggested()
    } else {
        &[]
    };
    page.organic().iter().chain(suggested)
}

/// Flatten pages in dataset order. No de-duplication across queries.
pub fn flatten(pages: &[SearchResultPage], include_suggested: bool) -> Vec<ResultRecord> {
    pages
        .iter()
        .flat_map(|page| {
            let query = page.term().unwrap_or_default();
            page_entries(page, include_suggested)
                .map(move |entry| ResultRecord::from_entry(entry, query))
        })
        .collect()
}
