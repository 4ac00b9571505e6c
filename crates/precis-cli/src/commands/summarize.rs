use super::{InputArgs, StopwordArgs, load_document};
use crate::Cli;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use precis_core::{KeyMode, Ratio};
use precis_render::OutputFormat;
use precis_segment::{Segmenter, UnicodeSegmenter};
use std::io::{self, Write};

#[derive(Args, Debug)]
pub struct SummarizeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Fraction of sentences to keep, between 0 and 1 (default 0.3)
    #[arg(short, long)]
    pub ratio: Option<f64>,

    /// Output format: text, json, or jsonl
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Count words by exact surface text instead of lower-cased form
    #[arg(long)]
    pub exact_case: bool,

    #[command(flatten)]
    pub stopwords: StopwordArgs,

    /// HTTP request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

impl SummarizeArgs {
    /// Fold command-line overrides into the loaded config.
    fn apply(&self, config: &mut Config) -> Result<()> {
        if let Some(r) = self.ratio {
            config.ratio = Ratio::new(r)?;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if self.exact_case {
            config.key_mode = KeyMode::Exact;
        }
        if let Some(secs) = self.timeout_secs {
            config.fetch.timeout_secs = secs;
            config.fetch.validate()?;
        }
        self.stopwords.apply(config);
        Ok(())
    }
}

pub fn run(cli: &Cli, mut config: Config, args: &SummarizeArgs) -> Result<()> {
    args.apply(&mut config)?;

    let doc = load_document(&args.input, &config.fetch)?;
    if doc.is_blank() {
        anyhow::bail!("no text found in document");
    }

    let sentences = UnicodeSegmenter::new().segment(&doc.body);
    let summary = config.summarizer().summarize(&sentences, config.ratio);

    if !cli.is_quiet() {
        eprintln!(
            "Selected {} of {} sentences from {}",
            summary.selected, summary.total, doc.source
        );
    }

    let output = precis_render::render(config.format, &doc, &summary, cli.is_quiet())?;
    io::stdout().lock().write_all(output.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(ratio: Option<f64>) -> SummarizeArgs {
        SummarizeArgs {
            input: InputArgs {
                input: None,
                text: Some("Cats are great.".to_string()),
            },
            ratio,
            format: Some(OutputFormat::Json),
            exact_case: true,
            stopwords: StopwordArgs {
                stopword: vec!["said".to_string()],
                no_stopwords: false,
            },
            timeout_secs: Some(3),
        }
    }

    #[test]
    fn flags_override_config() {
        let mut config = Config::default();
        args(Some(0.5)).apply(&mut config).unwrap();
        assert_eq!(config.ratio.get(), 0.5);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.key_mode, KeyMode::Exact);
        assert_eq!(config.fetch.timeout_secs, 3);
        assert_eq!(config.extra_stopwords, vec!["said"]);
    }

    #[test]
    fn invalid_ratio_flag_is_rejected() {
        let mut config = Config::default();
        let err = args(Some(1.5)).apply(&mut config).unwrap_err();
        assert!(err.to_string().contains("invalid ratio 1.5"));
    }

    #[test]
    fn missing_ratio_keeps_config_value() {
        let mut config = Config::default();
        args(None).apply(&mut config).unwrap();
        assert_eq!(config.ratio, Ratio::DEFAULT);
    }
}
