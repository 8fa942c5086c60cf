//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Args, Parser};
use std::io::IsTerminal;
use std::path::PathBuf;

use crate::core::diag::Diagnostics;
use crate::core::input::InputSource;
use crate::core::render::{OutputFormat, RenderConfig};
use crate::grouper::parse::{GroupConfig, DEFAULT_CONTEXT, DEFAULT_MAX_LINES, SEPARATOR};

/// Output and diagnostic options shared by both tools.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format (text/jsonl/json).
    #[arg(
        long,
        default_value = "text",
        value_parser = ["text", "jsonl", "json"],
        value_name = "FORMAT",
        long_help = "Select the output format.\n\n\
Supported values:\n\
- text (default): the plain line-oriented layout\n\
- jsonl: one JSON object per line\n\
- json: a single JSON array, written once all input is read"
    )]
    pub format: String,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(
        long,
        long_help = "Pretty-print JSON and JSONL output with indentation for human readability.\n\n\
Has no effect on text output."
    )]
    pub pretty: bool,

    /// Disable colored output (when applicable).
    #[arg(
        long,
        long_help = "Disable colored annotations. Color is only used for text output written\n\
to a terminal, so piped output is always plain."
    )]
    pub no_color: bool,

    /// Quiet mode (no warnings).
    #[arg(
        short,
        long,
        long_help = "Suppress warnings on stderr, such as lossy UTF-8 decoding.\n\
Results are still printed to stdout."
    )]
    pub quiet: bool,

    /// Verbose mode (per-input statistics).
    #[arg(
        short,
        long,
        long_help = "Print per-input statistics on stderr: lines read, records kept and\n\
discarded, groups or distinct lines."
    )]
    pub verbose: bool,
}

impl OutputArgs {
    pub fn render_config(&self) -> RenderConfig {
        let format: OutputFormat = self.format.parse().unwrap_or_default();
        let color = !self.no_color && std::io::stdout().is_terminal();
        RenderConfig::new(format)
            .with_pretty(self.pretty)
            .with_color(color)
    }

    pub fn diagnostics(&self) -> Diagnostics {
        Diagnostics::new(self.quiet, self.verbose)
    }
}

/// trace-group - fold repeated instruction records of a trace log.
#[derive(Parser, Debug)]
#[command(name = "trace-group")]
#[command(
    version,
    about = "Fold repeated instruction records of a trace log",
    long_about = r#"Read trace logs made of instruction records separated by a line of 35
hyphens, group the records by their first line, and print one sample per
group followed by annotations:

    > Count N          number of records in the group
    > Always taken     conditional branch (Bcc) taken in every sample
    > Never taken      conditional branch (Bcc) taken in no sample

Only records with more than one line whose first line starts with '0' are
kept. Groups are printed in key order, one input at a time.

With no FILE, or when FILE is -, read standard input.

Examples:
    trace-group trace.log
    emulator --verbose | trace-group
    trace-group --format jsonl a.log b.log
"#
)]
pub struct GroupCli {
    /// Trace files to read (stdin when omitted).
    #[arg(value_name = "FILE", num_args = 0..)]
    pub files: Vec<PathBuf>,

    /// Line separating instruction records.
    #[arg(
        long,
        default_value = SEPARATOR,
        value_name = "TEXT",
        allow_hyphen_values = true,
        long_help = "Line separating instruction records. Lines are trimmed before they are\n\
compared against it."
    )]
    pub separator: String,

    /// Elide sample records with at least this many lines.
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_LINES,
        value_name = "N",
        value_parser = clap::value_parser!(usize),
        long_help = "Sample records with at least N lines are shown as their first and last\n\
--context lines around a '...' line."
    )]
    pub max_lines: usize,

    /// Lines kept at each end of an elided record.
    #[arg(long, default_value_t = DEFAULT_CONTEXT, value_name = "N")]
    pub context: usize,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl GroupCli {
    pub fn group_config(&self) -> GroupConfig {
        GroupConfig {
            separator: self.separator.clone(),
            max_lines: self.max_lines,
            context: self.context,
            ..Default::default()
        }
    }
}

/// sort-count - count distinct lines of standard input.
#[derive(Parser, Debug)]
#[command(name = "sort-count")]
#[command(
    version,
    about = "Count distinct lines of standard input",
    long_about = r#"Count how often each distinct line (ignoring surrounding whitespace)
occurs on standard input, then print one line per distinct input line,
least frequent first:

            1 rarely seen
           12 seen often

Ties are ordered by line text.

Examples:
    grep '^0x' trace.log | sort-count
    sort-count --format jsonl < words.txt
"#
)]
pub struct CountCli {
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Run the instruction grouper with parsed arguments
pub fn run_group(cli: GroupCli) -> Result<()> {
    let config = cli.group_config();
    let sources = InputSource::from_args(&cli.files);
    crate::grouper::run_group(
        &sources,
        &config,
        cli.output.render_config(),
        &cli.output.diagnostics(),
    )
}

/// Run the line counter with parsed arguments
pub fn run_count(cli: CountCli) -> Result<()> {
    crate::counter::run_count(cli.output.render_config(), &cli.output.diagnostics())
}
