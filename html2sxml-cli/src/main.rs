//! html2sxml
//!
//! Reads an HTML document from stdin and prints its sxml form on one line.

use std::io::{self, Read, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};

// Command-line arguments are not inspected; stdin is always converted.
fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("html2sxml: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let mut input = Vec::new();
    let _ = io::stdin()
        .read_to_end(&mut input)
        .context("error reading from stdin")?;

    let sxml = html2sxml_core::convert(&input)?;

    // Nothing is written until the whole expression is built.
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{sxml}").context("error writing to stdout")?;
    stdout.flush().context("error writing to stdout")?;

    Ok(())
}
