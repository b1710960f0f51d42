use std::io::Write;

use anyhow::Result;
use lib::cli::{error_context, Opts, Output};
use lib::prelude::*;

fn main() -> Result<()> {
    let opts = Opts::parse()?;
    let path = opts.path.display().to_string();
    log::info!("reading {path}");
    let input = lib::input(&opts.path)?;

    let answer = match solve(input) {
        Ok(answer) => answer,
        Err(error) => return Err(error_context(&path, input, error)),
    };

    let stdout = std::io::stdout();
    let mut o = Output::new(stdout.lock());
    o.answer(&answer)?;
    o.into_inner().flush()?;
    Ok(())
}

/// Parse the two columns and compute both aggregates.
fn solve(mut input: IStr) -> Result<Answer> {
    let mut lists = Lists::parse(&mut input)?;
    Ok(lists.answer()?)
}
