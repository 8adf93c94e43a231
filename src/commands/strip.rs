//! Strip subcommand handler

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use colorstr::strip_styling;

/// Strip SGR sequences from `text`, or from stdin line by line.
#[cfg(not(tarpaulin_include))]
pub fn handle(text: Option<&str>) -> Result<()> {
    if let Some(text) = text {
        println!("{}", strip_styling(text));
        return Ok(());
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        writeln!(stdout, "{}", strip_styling(&line))?;
    }
    Ok(())
}
