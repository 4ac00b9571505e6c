use super::{InputArgs, StopwordArgs, load_document};
use crate::Cli;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use precis_core::KeyMode;
use precis_segment::{Segmenter, UnicodeSegmenter};

#[derive(Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Number of frequency-table entries to show
    #[arg(long, default_value_t = 10)]
    pub top: usize,

    /// Count words by exact surface text instead of lower-cased form
    #[arg(long)]
    pub exact_case: bool,

    #[command(flatten)]
    pub stopwords: StopwordArgs,
}

pub fn run(cli: &Cli, mut config: Config, args: &InspectArgs) -> Result<()> {
    if args.exact_case {
        config.key_mode = KeyMode::Exact;
    }
    args.stopwords.apply(&mut config);

    let doc = load_document(&args.input, &config.fetch)?;
    if doc.is_blank() {
        anyhow::bail!("no text found in document");
    }

    let sentences = UnicodeSegmenter::new().segment(&doc.body);
    let analysis = config.summarizer().analyze(&sentences);

    println!("Source: {}", doc.source);
    if let Some(title) = &doc.title {
        println!("Title: {title}");
    }
    println!("Sentences: {}", sentences.len());
    println!("Distinct words: {}", analysis.table.len());
    println!("Key mode: {}", config.key_mode);
    println!();

    let ranked = analysis.table.iter_ranked();
    println!("Top words:");
    for (word, count, weight) in ranked.iter().take(args.top) {
        println!("  {word:<20} {count:>5} {weight:>6.3}");
    }
    if ranked.len() > args.top && !cli.is_quiet() {
        println!("  ({} more)", ranked.len() - args.top);
    }
    println!();

    println!("Sentence scores:");
    for (sentence, score) in sentences.iter().zip(analysis.scores.as_slice()) {
        println!("  [{:>3}] {score:>7.3}  {}", sentence.index, preview(&sentence.text, 70));
    }

    Ok(())
}

/// First `max` characters of `text`, with an ellipsis when cut.
fn preview(text: &str, max: usize) -> String {
    let mut out: String = text.chars().take(max).collect();
    if text.chars().count() > max {
        out.push_str("...");
    }
    out
}
