//! Search query construction: topic phrases wrapped in the LinkedIn site filter.

/// Restricts Google results to LinkedIn posts and Pulse articles.
pub const SITE_FILTER: &str = "site:linkedin.com/posts/ OR site:linkedin.com/pulse/";

/// Topics for the automation blog research run.
pub const AUTOMATION_TOPICS: &[&str] = &[
    "Future of AI Automation 2026",
    "Low-Code Solutions Scale Better",
    "Signs You Need Systems Automation",
];

/// Topics for the data privacy research run.
pub const PRIVACY_TOPICS: &[&str] = &[
    "HIPAA compliance data privacy healthcare",
    "PIPEDA data protection Canada privacy",
    "FIPPA privacy act information protection",
    "client data privacy on-premise hosting",
    "data sovereignty client controlled servers",
    "healthcare data privacy regulations compliance",
    "private practice data security HIPAA",
    "patient data privacy best practices",
    "secure client data hosting solutions",
    "privacy regulations healthcare technology",
];

/// A topic phrase bound to the site filter, as sent to the search engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn for_topic(topic: &str) -> Self {
        Self(format!("{SITE_FILTER} \"{topic}\""))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One query per topic, newline-joined, in topic order.
pub fn build_query_batch(topics: &[&str]) -> String {
    topics
        .iter()
        .map(|topic| SearchQuery::for_topic(topic).to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
