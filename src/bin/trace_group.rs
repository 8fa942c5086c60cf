//! trace-group - fold repeated instruction records of a trace log

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = tracefold::cli::GroupCli::parse();
    tracefold::cli::run_group(cli)
}
