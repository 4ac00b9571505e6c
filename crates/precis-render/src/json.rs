use precis_core::{Document, Summary};
use serde::Serialize;
use std::io::Write;

/// Writes the summary as one pretty-printed JSON object.
#[derive(Debug, Clone, Default)]
pub struct JsonWriter;

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Output<'a> {
    title: Option<&'a str>,
    source: &'a str,
    ratio: f64,
    selected: usize,
    total: usize,
    summary: &'a str,
    sentences: Vec<Entry<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Entry<'a> {
    index: usize,
    score: f64,
    text: &'a str,
}

impl JsonWriter {
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
        let output = Output {
            title: doc.title.as_deref(),
            source: &doc.source,
            ratio: summary.ratio,
            selected: summary.selected,
            total: summary.total,
            summary: &summary.text,
            sentences: summary
                .sentences
                .iter()
                .map(|s| Entry {
                    index: s.index,
                    score: s.score,
                    text: &s.text,
                })
                .collect(),
        };
        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn json_object_fields() {
        let out = JsonWriter::new()
            .render(&fixtures::document(), &fixtures::summary())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["Title"], "Pets");
        assert_eq!(value["Source"], "https://example.com/pets");
        assert_eq!(value["Selected"], 1);
        assert_eq!(value["Total"], 3);
        assert_eq!(value["Summary"], "Cats are great.");
        assert_eq!(value["Sentences"][0]["Index"], 0);
        assert_eq!(value["Sentences"][0]["Score"], 2.0);
    }

    #[test]
    fn json_missing_title_is_null() {
        let doc = Document::new("-", None, "x");
        let out = JsonWriter::new().render(&doc, &fixtures::summary()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value["Title"].is_null());
    }
}
