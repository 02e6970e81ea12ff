//! The research run: build → scrape → flatten → persist → (generate → persist).
//!
//! Each step runs once, in order, and the first error ends the run.

use std::path::{Path, PathBuf};

use ai_client::TextGenerator;
use apify_client::SearchResultPage;
use tracing::info;

use crate::error::{ResearchError, Result};
use crate::flatten::{flatten, page_entries, ResultRecord};
use crate::generate::{generate_draft, BlogDraft};
use crate::persist::{write_draft, write_records};
use crate::profile::ResearchProfile;
use crate::query::build_query_batch;
use crate::scrape::{ScrapeRun, SearchScraper};

/// Characters of the draft shown in the log after generation.
const PREVIEW_CHARS: usize = 500;

/// What a finished run produced.
#[derive(Debug)]
pub struct RunOutcome {
    pub run: ScrapeRun,
    pub records: Vec<ResultRecord>,
    pub records_path: PathBuf,
    pub draft: Option<(BlogDraft, PathBuf)>,
}

/// Execute one research run. Output paths in `profile` resolve against
/// `output_root`.
pub async fn run(
    profile: &ResearchProfile,
    scraper: &dyn SearchScraper,
    generator: Option<&dyn TextGenerator>,
    output_root: &Path,
) -> Result<RunOutcome> {
    if profile.draft_path.is_some() && generator.is_none() {
        return Err(ResearchError::NoGenerator);
    }

    info!(variant = %profile.variant, "Research run starting");

    let queries = build_query_batch(profile.topics);
    info!(
        queries = profile.topics.len(),
        "Searching LinkedIn posts via Google search scraper"
    );

    let run: ScrapeRun = scraper.run_search(&profile.options.input(queries)).await?;
    info!(run_id = %run.run_id, dataset_id = %run.dataset_id, "Scraper finished");

    let pages = scraper.result_pages(&run.dataset_id).await?;
    let records = flatten(&pages, profile.include_suggested);
    info!(pages = pages.len(), count = records.len(), "Found LinkedIn posts");

    let records_path = output_root.join(profile.records_path);
    write_records(&records_path, &records)?;
    info!(path = %records_path.display(), count = records.len(), "Saved research data");

    if let Some(top) = profile.summary_top {
        log_summary(&pages, profile.include_suggested, top);
    }

    let draft = match (profile.draft_path, generator) {
        (Some(draft_path), Some(generator)) => {
            info!("Generating blog content");
            let draft = generate_draft(generator, &records).await?;

            let draft_path = output_root.join(draft_path);
            write_draft(&draft_path, &draft)?;
            info!(
                chars = draft.char_count(),
                path = %draft_path.display(),
                "Saved blog content"
            );

            log_preview(&draft, &draft_path, &records_path);
            Some((draft, draft_path))
        }
        _ => None,
    };

    info!(variant = %profile.variant, "Research run complete");

    Ok(RunOutcome {
        run,
        records,
        records_path,
        draft,
    })
}

/// Log the top hits per query, organic before suggested.
fn log_summary(pages: &[SearchResultPage], include_suggested: bool, top: usize) {
    for page in pages {
        info!("--- Results for: {} ---", page.term().unwrap_or("Unknown Query"));
        for entry in page_entries(page, include_suggested).take(top) {
            info!("Title: {}", entry.title.as_deref().unwrap_or_default());
            info!("Link: {}", entry.url.as_deref().unwrap_or_default());
            info!("Snippet: {}", entry.description.as_deref().unwrap_or_default());
        }
    }
}

fn log_preview(draft: &BlogDraft, draft_path: &Path, records_path: &Path) {
    info!("Content preview:");
    info!("{}...", preview(&draft.text, PREVIEW_CHARS));
    info!("Next steps:");
    info!("  1. Review content in: {}", draft_path.display());
    info!("  2. Review research in: {}", records_path.display());
    info!("  3. Create HTML blog file with this content");
}

/// The first `max_chars` characters of `text`.
fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
