//! Static resources exposed by the expense server

use rmcp::model::{AnnotateAble, RawResource, Resource, ResourceContents};
use std::path::PathBuf;

use crate::types::{ExpenseError, ExpenseResult};

/// URI of the category list resource
pub const CATEGORIES_URI: &str = "expense://categories";

pub const JSON_MIME_TYPE: &str = "application/json";

/// Read-only category document living on disk
///
/// The file is re-read on every request so edits show up immediately.
#[derive(Debug, Clone)]
pub struct CategoryDocument {
    path: PathBuf,
}

impl CategoryDocument {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Raw file contents, unparsed
    pub async fn read(&self) -> ExpenseResult<String> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| ExpenseError::ResourceRead {
                path: self.path.display().to_string(),
                source,
            })
    }

    /// Listing entry for `resources/list`
    pub fn describe(&self) -> Resource {
        let mut raw = RawResource::new(CATEGORIES_URI, "categories");
        raw.description = Some("Curated expense categories and subcategories".to_string());
        raw.mime_type = Some(JSON_MIME_TYPE.to_string());
        raw.no_annotation()
    }

    /// Contents for `resources/read`
    pub async fn contents(&self) -> ExpenseResult<ResourceContents> {
        let text = self.read().await?;
        let mut contents = ResourceContents::text(text, CATEGORIES_URI);
        if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
            *mime_type = Some(JSON_MIME_TYPE.to_string());
        }
        Ok(contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_read_returns_raw_text() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        // Deliberately odd formatting: contents must pass through untouched
        writeln!(file, "{{\"categories\":  [\"food\" ,\"rent\"]}}").unwrap();

        let doc = CategoryDocument::new(file.path().to_path_buf());
        let first = doc.read().await.unwrap();
        let second = doc.read().await.unwrap();
        assert_eq!(first, "{\"categories\":  [\"food\" ,\"rent\"]}\n");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_missing_file_is_resource_error() {
        let dir = tempfile::tempdir().unwrap();
        let doc = CategoryDocument::new(dir.path().join("absent.json"));
        let err = doc.read().await.unwrap_err();
        assert!(matches!(err, ExpenseError::ResourceRead { .. }));
    }

    #[tokio::test]
    async fn test_contents_carry_uri_and_mime() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();

        let doc = CategoryDocument::new(file.path().to_path_buf());
        match doc.contents().await.unwrap() {
            ResourceContents::TextResourceContents {
                uri, mime_type, text, ..
            } => {
                assert_eq!(uri, CATEGORIES_URI);
                assert_eq!(mime_type.as_deref(), Some(JSON_MIME_TYPE));
                assert_eq!(text, "[]");
            }
            other => panic!("unexpected contents: {:?}", other),
        }
    }

    #[test]
    fn test_describe() {
        let doc = CategoryDocument::new(PathBuf::from("category.json"));
        let resource = doc.describe();
        assert_eq!(resource.raw.uri, CATEGORIES_URI);
        assert_eq!(resource.raw.mime_type.as_deref(), Some(JSON_MIME_TYPE));
    }
}
