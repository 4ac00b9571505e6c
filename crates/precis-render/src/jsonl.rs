use precis_core::{Document, Summary};
use serde::Serialize;
use std::io::Write;

const FORMAT_VERSION: &str = "0.1";

/// Writes a summary in JSONL: a header line, one line per selected
/// sentence in document order, and a footer line.
#[derive(Debug, Clone, Default)]
pub struct JsonlWriter;

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Header<'a> {
    version: &'a str,
    source: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    ratio: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SentenceEntry<'a> {
    index: usize,
    score: f64,
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Footer {
    selected: usize,
    total: usize,
    chars: usize,
}

impl JsonlWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, doc: &Document, summary: &Summary) -> anyhow::Result<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf, doc, summary)?;
        Ok(String::from_utf8(buf)?)
    }

    pub fn write_to(
        &self,
        writer: &mut dyn Write,
        doc: &Document,
        summary: &Summary,
    ) -> anyhow::Result<()> {
        let header = Header {
            version: FORMAT_VERSION,
            source: &doc.source,
            title: doc.title.as_deref(),
            ratio: summary.ratio,
        };
        serde_json::to_writer(&mut *writer, &header)?;
        writeln!(writer)?;

        for sentence in &summary.sentences {
            let entry = SentenceEntry {
                index: sentence.index,
                score: sentence.score,
                text: &sentence.text,
            };
            serde_json::to_writer(&mut *writer, &entry)?;
            writeln!(writer)?;
        }

        let footer = Footer {
            selected: summary.selected,
            total: summary.total,
            chars: summary.text.chars().count(),
        };
        serde_json::to_writer(&mut *writer, &footer)?;
        writeln!(writer)?;

        Ok(())
    }
}
