//! Writing research output to disk. Existing files are overwritten; parent
//! directories are not created.

use std::path::Path;

use crate::error::{ResearchError, Result};
use crate::flatten::ResultRecord;
use crate::generate::BlogDraft;

/// Write records as an indented JSON array.
pub fn write_records(path: &Path, records: &[ResultRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    write(path, json.as_bytes())
}

pub fn write_draft(path: &Path, draft: &BlogDraft) -> Result<()> {
    write(path, draft.text.as_bytes())
}

fn write(path: &Path, contents: &[u8]) -> Result<()> {
    std::fs::write(path, contents).map_err(|source| ResearchError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str) -> ResultRecord {
        ResultRecord {
            title: title.to_string(),
            url: "https://www.linkedin.com/pulse/x".to_string(),
            description: String::new(),
            query: "q".to_string(),
        }
    }

    #[test]
    fn records_round_trip_with_four_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("research.json");

        write_records(&path, &[record("a"), record("b")]).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\n  {"), "expected indented output: {raw}");

        let values: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
        assert_eq!(values.len(), 2);
        for value in &values {
            let obj = value.as_object().unwrap();
            assert_eq!(obj.len(), 4);
            for key in ["title", "url", "description", "query"] {
                assert!(obj[key].is_string(), "{key} should be a string");
            }
        }

        let records: Vec<ResultRecord> = serde_json::from_str(&raw).unwrap();
        assert_eq!(records[1].title, "b");
    }

    #[test]
    fn existing_file_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("research.json");
        std::fs::write(&path, "stale contents that are longer than the new ones").unwrap();

        write_records(&path, &[]).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn missing_parent_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("blog_content.txt");

        let err = write_draft(&path, &BlogDraft { text: "x".into() }).unwrap_err();

        match err {
            ResearchError::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn draft_is_written_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blog_content.txt");
        let text = "<p>Body</p>\n<h2>Section</h2>\n";

        write_draft(&path, &BlogDraft { text: text.into() }).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), text);
    }
}
