//! Instruction grouper
//!
//! Reads traces made of separator-delimited instruction records, folds
//! repeated records together by their first line and prints one annotated
//! sample per distinct instruction. Each source is grouped and printed on
//! its own; groups are never merged across sources.

pub mod annotate;
pub mod parse;
pub mod report;

use anyhow::Result;
use std::io::{self, BufRead, BufWriter, Write};

use crate::core::diag::Diagnostics;
use crate::core::input::{InputSource, Lines};
use crate::core::render::{RenderConfig, Renderer};
use crate::grouper::parse::{GroupBuilder, GroupConfig, Grouping};
use crate::grouper::report::build_reports;

/// Group every line of `reader`
pub fn group_reader<R: BufRead>(
    reader: R,
    source_name: &str,
    config: &GroupConfig,
    diag: &Diagnostics,
) -> Result<Grouping> {
    let mut lines = Lines::new(reader, source_name);
    let mut builder = GroupBuilder::new(config);
    for line in &mut lines {
        builder.push_line(&line?);
    }
    diag.report_lossy(source_name, lines.lossy_lines());
    Ok(builder.finish())
}

fn log_stats(diag: &Diagnostics, source_name: &str, grouping: &Grouping) {
    let stats = &grouping.stats;
    diag.info(format_args!(
        "{}: {} lines, {} records ({} kept, {} discarded), {} groups",
        source_name,
        stats.lines,
        stats.records,
        stats.kept,
        stats.discarded,
        grouping.len()
    ));
    if stats.trailing_lines > 0 {
        diag.info(format_args!(
            "{}: dropped unterminated trailing record ({} lines)",
            source_name, stats.trailing_lines
        ));
    }
}

/// Group and print each source in turn to `out`.
///
/// Output for a source is flushed before the next one is opened, so a
/// failing source leaves the earlier results in place.
pub fn process_sources<W: Write>(
    sources: &[InputSource],
    config: &GroupConfig,
    render_config: RenderConfig,
    diag: &Diagnostics,
    out: W,
) -> Result<W> {
    let mut renderer = Renderer::new(render_config, out);

    for source in sources {
        let source_name = source.name();
        let reader = source.open()?;
        let grouping = group_reader(reader, &source_name, config, diag)?;
        log_stats(diag, &source_name, &grouping);

        for report in build_reports(&grouping, &source_name, config) {
            renderer.emit(&report)?;
        }
        renderer.flush()?;
    }

    renderer.finish()
}

/// Run the grouper against stdout
pub fn run_group(
    sources: &[InputSource],
    config: &GroupConfig,
    render_config: RenderConfig,
    diag: &Diagnostics,
) -> Result<()> {
    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());
    process_sources(sources, config, render_config, diag, out)?;
    Ok(())
}
