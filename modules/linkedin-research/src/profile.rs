use crate::query::{AUTOMATION_TOPICS, PRIVACY_TOPICS};
use crate::scrape::ScrapeOptions;

/// The two research runs this crate ships as binaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Automation topics; raw research only, suggested results included.
    AutomationResearch,
    /// Data privacy topics; research plus a generated blog draft.
    PrivacyResearch,
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Variant::AutomationResearch => "automation-research",
            Variant::PrivacyResearch => "privacy-research",
        }
    }

    pub fn requires_generator(self) -> bool {
        matches!(self, Variant::PrivacyResearch)
    }

    pub fn profile(self) -> ResearchProfile {
        match self {
            Variant::AutomationResearch => ResearchProfile {
                variant: self,
                topics: AUTOMATION_TOPICS,
                options: ScrapeOptions::new(3),
                include_suggested: true,
                records_path: "research_results.json",
                draft_path: None,
                summary_top: Some(3),
            },
            Variant::PrivacyResearch => ResearchProfile {
                variant: self,
                topics: PRIVACY_TOPICS,
                options: ScrapeOptions::new(10),
                include_suggested: false,
                records_path: ".tmp/privacy_research.json",
                draft_path: Some(".tmp/blog_content.txt"),
                summary_top: None,
            },
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything fixed about one run: what to search, how, and where output goes.
/// Paths are relative to the run's output root.
#[derive(Debug, Clone)]
pub struct ResearchProfile {
    pub variant: Variant,
    pub topics: &'static [&'static str],
    pub options: ScrapeOptions,
    pub include_suggested: bool,
    pub records_path: &'static str,
    pub draft_path: Option<&'static str>,
    /// Hits per query to log after the run, if any.
    pub summary_top: Option<usize>,
}
