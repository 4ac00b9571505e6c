use crate::DocumentSource;
use async_trait::async_trait;
use precis_core::{Document, PrecisError};

/// In-memory text, e.g. from `--text`.
#[derive(Debug, Clone)]
pub struct TextSource {
    text: String,
    label: String,
}

impl TextSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: "<text>".to_string(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

#[async_trait]
impl DocumentSource for TextSource {
    async fn load(&self) -> Result<Document, PrecisError> {
        Ok(Document::new(self.label.clone(), None, self.text.clone()))
    }

    fn describe(&self) -> &str {
        &self.label
    }
}
