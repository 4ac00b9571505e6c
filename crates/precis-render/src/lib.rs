//! Output formats for summaries: plain text, a single JSON object, and JSONL.

mod json;
mod jsonl;
mod text;

pub use json::JsonWriter;
pub use jsonl::JsonlWriter;
pub use text::TextWriter;

use precis_core::{Document, Summary};

/// Output format selected on the command line or in config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Jsonl,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "jsonl" => Ok(OutputFormat::Jsonl),
            other => Err(format!("unknown format '{other}' (expected text, json or jsonl)")),
        }
    }
}

/// Render `summary` of `doc` in the given format.
pub fn render(
    format: OutputFormat,
    doc: &Document,
    summary: &Summary,
    quiet: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => TextWriter::new().quiet(quiet).render(doc, summary),
        OutputFormat::Json => JsonWriter::new().render(doc, summary),
        OutputFormat::Jsonl => JsonlWriter::new().render(doc, summary),
    }
}
