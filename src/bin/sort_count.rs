//! sort-count - count distinct lines of standard input

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = tracefold::cli::CountCli::parse();
    tracefold::cli::run_count(cli)
}
