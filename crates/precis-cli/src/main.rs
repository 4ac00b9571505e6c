mod commands;
mod config;
mod logging;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Precis: extractive summaries of articles, files, and text.
#[derive(Parser, Debug)]
#[command(name = "precis", version, about)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to a precis.toml config file
    #[arg(long, env = "PRECIS_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize a URL, a file, stdin (`-`), or literal text
    Summarize(commands::summarize::SummarizeArgs),
    /// Show word weights and sentence scores for a document
    Inspect(commands::inspect::InspectArgs),
    /// List the effective stopword set
    Stopwords(commands::StopwordArgs),
}

impl Cli {
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let config = config::Config::load(cli.config.as_deref())?;

    match &cli.command {
        Command::Summarize(args) => commands::summarize::run(&cli, config, args),
        Command::Inspect(args) => commands::inspect::run(&cli, config, args),
        Command::Stopwords(args) => commands::stopwords::run(config, args),
    }
}
