use super::StopwordArgs;
use crate::config::Config;
use anyhow::Result;
use std::io::{self, Write};

pub fn run(mut config: Config, args: &StopwordArgs) -> Result<()> {
    args.apply(&mut config);
    let filter = config.stopword_filter();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for word in filter.words() {
        writeln!(out, "{word}")?;
    }
    Ok(())
}
