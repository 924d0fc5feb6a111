use anyhow::Result;
use std::io::{self, Write};

use tally::cli;
use tally::utils::OutputStyle;

fn main() -> Result<()> {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    let code = cli::run(std::env::args_os(), &mut stdout, &mut stderr, &OutputStyle::stderr())?;

    // process::exit skips destructors
    stdout.flush()?;
    stderr.flush()?;
    std::process::exit(code);
}
