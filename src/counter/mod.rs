//! Line counter
//!
//! Counts distinct trimmed lines of a stream and prints them least frequent
//! first, in the classic `sort | uniq -c | sort -n` layout.

pub mod tally;

use anyhow::Result;
use std::io::{self, BufRead, BufWriter, Write};

use crate::core::diag::Diagnostics;
use crate::core::input::{Lines, STDIN_LABEL};
use crate::core::render::{RenderConfig, Renderer};
use crate::counter::tally::LineCounts;

/// Count every line of `reader`
pub fn count_reader<R: BufRead>(
    reader: R,
    source_name: &str,
    diag: &Diagnostics,
) -> Result<LineCounts> {
    let mut lines = Lines::new(reader, source_name);
    let mut counts = LineCounts::new();
    for line in &mut lines {
        counts.add(&line?);
    }
    diag.report_lossy(source_name, lines.lossy_lines());
    Ok(counts)
}

/// Count `reader` to completion, then print the sorted tally to `out`
pub fn process<R: BufRead, W: Write>(
    reader: R,
    render_config: RenderConfig,
    diag: &Diagnostics,
    out: W,
) -> Result<W> {
    let counts = count_reader(reader, STDIN_LABEL, diag)?;
    diag.info(format_args!(
        "{}: {} lines, {} distinct",
        STDIN_LABEL,
        counts.total(),
        counts.distinct()
    ));

    let mut renderer = Renderer::new(render_config, out);
    for entry in counts.into_sorted() {
        renderer.emit(&entry)?;
    }
    renderer.finish()
}

/// Run the counter over stdin
pub fn run_count(render_config: RenderConfig, diag: &Diagnostics) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());
    process(stdin.lock(), render_config, diag, out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::OutputFormat;
    use std::io::Cursor;

    fn run(input: &str, render_config: RenderConfig) -> String {
        let out = process(
            Cursor::new(input.to_string()),
            render_config,
            &Diagnostics::new(true, false),
            Vec::new(),
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_output() {
        let out = run("a\nb\na\n a \n", RenderConfig::default());
        assert_eq!(out, "        1 b\n        3 a\n");
    }

    #[test]
    fn test_empty_input_prints_nothing() {
        assert_eq!(run("", RenderConfig::default()), "");
    }

    #[test]
    fn test_output_is_not_idempotent() {
        let first = run("x\nx\ny\n", RenderConfig::default());
        let second = run(&first, RenderConfig::default());
        assert_ne!(first, second);
        assert_eq!(second, "        1 1 y\n        1 2 x\n");
    }

    #[test]
    fn test_json_output() {
        let out = run("x\ny\ny\n", RenderConfig::new(OutputFormat::Json));
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["line"], "x");
        assert_eq!(value[1]["count"], 2);
    }
}
