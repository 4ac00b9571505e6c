use crate::DocumentSource;
use crate::extract::extract_article;
use async_trait::async_trait;
use precis_core::{Document, PrecisError};
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

const STDIN: &str = "-";

/// A UTF-8 file on disk, or stdin when the path is `-`.
///
/// Files ending in `.html` or `.htm` go through article extraction.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    label: String,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let label = path.display().to_string();
        Self { path, label }
    }

    pub fn stdin() -> Self {
        Self::new(STDIN)
    }

    fn is_stdin(&self) -> bool {
        self.label == STDIN
    }

    fn is_html(&self) -> bool {
        self.path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("html") || e.eq_ignore_ascii_case("htm"))
    }

    async fn read(&self) -> Result<String, PrecisError> {
        if self.is_stdin() {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .map_err(|e| PrecisError::Io(format!("stdin: {e}")))?;
            return Ok(buf);
        }
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| PrecisError::Io(format!("{}: {e}", self.label)))
    }
}

#[async_trait]
impl DocumentSource for FileSource {
    async fn load(&self) -> Result<Document, PrecisError> {
        let raw = self.read().await?;
        tracing::debug!(source = %self.label, bytes = raw.len(), "read file");

        if self.is_html() {
            let article = extract_article(&raw)?;
            return Ok(Document::new(self.label.clone(), article.title, article.text));
        }
        Ok(Document::new(self.label.clone(), None, raw))
    }

    fn describe(&self) -> &str {
        &self.label
    }
}
