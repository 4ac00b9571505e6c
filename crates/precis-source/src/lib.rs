//! Document sources: literal text, files and stdin, and HTTP with article
//! extraction.

mod config;
mod extract;
mod file;
mod http;
mod text;

pub use config::FetchConfig;
pub use extract::{Article, extract_article};
pub use file::FileSource;
pub use http::HttpSource;
pub use text::TextSource;

use async_trait::async_trait;
use precis_core::{Document, PrecisError};

/// Something that can produce a [`Document`] to summarize.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn load(&self) -> Result<Document, PrecisError>;

    /// Where the document comes from, for logs and output headers.
    fn describe(&self) -> &str;
}

/// Pick a source for a command-line input: URLs are fetched over HTTP,
/// anything else is a file path (`-` reads stdin).
pub fn source_for(input: &str, cfg: &FetchConfig) -> Result<Box<dyn DocumentSource>, PrecisError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(PrecisError::InvalidInput("no input given".to_string()));
    }
    let lower = input.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Ok(Box::new(HttpSource::new(input, cfg)?))
    } else {
        Ok(Box::new(FileSource::new(input)))
    }
}
