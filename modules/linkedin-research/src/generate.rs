//! Blog draft generation from research records.

use ai_client::TextGenerator;

use crate::error::Result;
use crate::flatten::ResultRecord;

/// Records embedded in the generation prompt; the rest are only persisted.
pub const PROMPT_RECORD_LIMIT: usize = 15;

const PROMPT_HEADER: &str = "You are a professional content writer creating a blog post about client data privacy for a business automation consultancy website.

Based on the following LinkedIn research about data privacy regulations and solutions, write a comprehensive, professional blog post.";

const PROMPT_REQUIREMENTS: &str = r#"REQUIREMENTS:
1. **Tone**: Spartan, professional, and human-like. Write like you're explaining to a business owner, not a lawyer.
2. **Style**: Accessible and clear. Avoid heavy jargon. If you use a technical term, explain it briefly.
3. **Content Focus**:
   - Address major data privacy regulations: HIPAA (healthcare), PIPEDA (Canada), FIPPA (information protection)
   - Explain what these regulations mean for businesses in practical terms
   - Provide solutions: on-premise hosting, client-controlled servers, data sovereignty
   - Include actionable advice businesses can implement

4. **Structure**: 
   - Engaging introduction that states why this matters
   - 3-4 main sections covering regulations and solutions
   - Practical takeaways
   - Strong conclusion

5. **Length**: 800-1200 words
6. **Voice**: Direct, confident, helpful. Avoid being preachy or alarmist.

Do NOT include a title or meta description - just the body content. Use HTML tags for structure: <p>, <h2>, <h3>, <div class="highlight-box"> for important callouts.

Write the blog post now:"#;

/// Generated blog body, stored exactly as the model returned it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogDraft {
    pub text: String,
}

impl BlogDraft {
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Numbered summary of the first `PROMPT_RECORD_LIMIT` records.
pub fn research_summary(records: &[ResultRecord]) -> String {
    records
        .iter()
        .take(PROMPT_RECORD_LIMIT)
        .enumerate()
        .map(|(i, r)| {
            format!(
                "Post {}:\nTitle: {}\nDescription: {}\nURL: {}",
                i + 1,
                r.title,
                r.description,
                r.url
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn build_prompt(records: &[ResultRecord]) -> String {
    format!(
        "{PROMPT_HEADER}\n\nRESEARCH DATA:\n{summary}\n\n{PROMPT_REQUIREMENTS}",
        summary = research_summary(records),
    )
}

/// One completion call; the response text is taken verbatim.
pub async fn generate_draft(
    generator: &dyn TextGenerator,
    records: &[ResultRecord],
) -> Result<BlogDraft> {
    let prompt = build_prompt(records);
    tracing::debug!(
        prompt_chars = prompt.len(),
        records = records.len().min(PROMPT_RECORD_LIMIT),
        "Built generation prompt"
    );
    let text = generator.generate(&prompt).await?;
    Ok(BlogDraft { text })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(n: usize) -> ResultRecord {
        ResultRecord {
            title: format!("Title {n}"),
            url: format!("https://www.linkedin.com/posts/p{n}"),
            description: format!("Description {n}"),
            query: "q".to_string(),
        }
    }

    #[test]
    fn summary_numbers_posts_from_one() {
        let summary = research_summary(&[record(0), record(1)]);
        assert_eq!(
            summary,
            "Post 1:\nTitle: Title 0\nDescription: Description 0\nURL: https://www.linkedin.com/posts/p0\n\n\
             Post 2:\nTitle: Title 1\nDescription: Description 1\nURL: https://www.linkedin.com/posts/p1"
        );
    }

    #[test]
    fn prompt_embeds_at_most_fifteen_records() {
        let records: Vec<_> = (0..20).map(record).collect();
        let prompt = build_prompt(&records);

        assert!(prompt.contains("Post 15:"));
        assert!(prompt.contains("https://www.linkedin.com/posts/p14\n"));
        assert!(!prompt.contains("Post 16:"));
        assert!(!prompt.contains("Title 15"));
    }

    #[test]
    fn prompt_wraps_research_in_instructions() {
        let prompt = build_prompt(&[record(0)]);
        assert!(prompt.starts_with("You are a professional content writer"));
        assert!(prompt.contains("RESEARCH DATA:\nPost 1:"));
        assert!(prompt.contains("**Length**: 800-1200 words"));
        assert!(prompt.ends_with("Write the blog post now:"));
    }

    #[test]
    fn empty_research_still_builds_prompt() {
        let prompt = build_prompt(&[]);
        assert!(prompt.contains("RESEARCH DATA:\n\n\nREQUIREMENTS:"));
    }
}
