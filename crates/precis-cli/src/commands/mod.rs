pub mod inspect;
pub mod stopwords;
pub mod summarize;

use anyhow::{Context, Result};
use clap::Args;
use precis_core::Document;
use precis_source::{DocumentSource, FetchConfig, TextSource, source_for};

/// Where the document comes from.
#[derive(Args, Debug, Default)]
pub struct InputArgs {
    /// URL, file path, or `-` for stdin
    #[arg(required_unless_present = "text")]
    pub input: Option<String>,

    /// Summarize this text instead of reading INPUT
    #[arg(long, conflicts_with = "input")]
    pub text: Option<String>,
}

/// Stopword overrides shared by every command.
#[derive(Args, Debug, Default)]
pub struct StopwordArgs {
    /// Extra stopword (repeatable)
    #[arg(long = "stopword", value_name = "WORD")]
    pub stopword: Vec<String>,

    /// Disable the built-in stopword list
    #[arg(long)]
    pub no_stopwords: bool,
}

impl StopwordArgs {
    pub fn apply(&self, config: &mut crate::config::Config) {
        if self.no_stopwords {
            config.use_stopwords = false;
        }
        config
            .extra_stopwords
            .extend(self.stopword.iter().cloned());
    }
}

/// Load the document named by `input`, driving async sources on a
/// current-thread runtime.
pub fn load_document(input: &InputArgs, fetch: &FetchConfig) -> Result<Document> {
    let source: Box<dyn DocumentSource> = match (&input.text, &input.input) {
        (Some(text), _) => Box::new(TextSource::new(text.clone())),
        (None, Some(input)) => source_for(input, fetch)?,
        (None, None) => anyhow::bail!("no input given: pass INPUT or --text"),
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let doc = runtime.block_on(source.load())?;
    tracing::info!(source = %doc.source, chars = doc.body.len(), "loaded document");
    Ok(doc)
}
