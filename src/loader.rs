//! Read site collections from a content directory.
//!
//! Each collection lives in its own JSON array file, the way a static-site
//! export lays them out. A missing file means the site has no entries of
//! that kind. A file that fails to parse as an array is an error, but a
//! malformed entry inside an otherwise valid array is skipped with a
//! warning so one bad export line cannot blank the whole index.

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use wayfinder_engine::SiteContent;

pub fn load_content(dir: &Path) -> Result<SiteContent> {
    if !dir.is_dir() {
        tracing::warn!(dir = %dir.display(), "content directory not found, starting empty");
        return Ok(SiteContent::default());
    }

    let content = SiteContent {
        solutions: read_collection(dir, "solutions.json")?,
        services: read_collection(dir, "services.json")?,
        products: read_collection(dir, "products.json")?,
        blog_posts: read_collection(dir, "blog.json")?,
        case_studies: read_collection(dir, "case-studies.json")?,
        whitepapers: read_collection(dir, "whitepapers.json")?,
        events: read_collection(dir, "events.json")?,
        docs: read_collection(dir, "docs.json")?,
        pages: read_collection(dir, "pages.json")?,
    };
    Ok(content)
}

fn read_collection<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<Vec<T>> {
    let path = dir.join(file);
    if !path.exists() {
        return Ok(Vec::new());
    }

    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let entries: Vec<serde_json::Value> = serde_json::from_str(&text)
        .with_context(|| format!("{} is not a JSON array", path.display()))?;

    let mut items = Vec::with_capacity(entries.len());
    for (position, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value(entry) {
            Ok(item) => items.push(item),
            Err(err) => {
                tracing::warn!(%file, position, error = %err, "skipping malformed entry");
            }
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_directory_yields_an_empty_site() {
        let dir = tempfile::tempdir().expect("tempdir");
        let content = load_content(&dir.path().join("nope")).expect("load");
        assert!(content.solutions.is_empty());
        assert!(content.pages.is_empty());
    }

    #[test]
    fn absent_files_are_empty_collections() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join("services.json"),
            r#"[{"slug": "support", "name": "Support"}]"#,
        )
        .expect("write");

        let content = load_content(dir.path()).expect("load");
        assert_eq!(content.services.len(), 1);
        assert_eq!(content.services[0].name, "Support");
        assert!(content.blog_posts.is_empty());
    }

    #[test]
    fn malformed_entries_are_skipped_not_fatal() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join("blog.json"),
            r#"[
                {"slug": "good", "title": "Good Post"},
                {"slug": ["not", "a", "string"]},
                {"slug": "also-good", "title": "Also Good"}
            ]"#,
        )
        .expect("write");

        let content = load_content(dir.path()).expect("load");
        let titles: Vec<&str> = content
            .blog_posts
            .iter()
            .map(|post| post.title.as_str())
            .collect();
        assert_eq!(titles, ["Good Post", "Also Good"]);
    }

    #[test]
    fn a_file_that_is_not_an_array_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("pages.json"), r#"{"path": "/"}"#).expect("write");

        let err = load_content(dir.path()).expect_err("should fail");
        assert!(err.to_string().contains("pages.json"));
    }
}
