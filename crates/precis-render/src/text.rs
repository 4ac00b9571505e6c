use precis_core::{Document, Summary};
use std::io::Write;

/// Human-readable output: optional title heading, the summary text, and a
/// selection footer.
#[derive(Debug, Clone, Default)]
pub struct TextWriter {
    quiet: bool,
}

impl TextWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress the `k/N sentences` footer.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
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
        if let Some(title) = doc.title.as_deref().filter(|t| !t.trim().is_empty()) {
            writeln!(writer, "## {}", title.trim())?;
            writeln!(writer)?;
        }
        writeln!(writer, "{}", summary.text)?;
        if !self.quiet {
            writeln!(writer)?;
            writeln!(
                writer,
                "{}/{} sentences (ratio {})",
                summary.selected, summary.total, summary.ratio
            )?;
        }
        Ok(())
    }
}
