//! Diagnostics on stderr
//!
//! Results always go to stdout; everything here goes to stderr so that piped
//! output stays clean.

use std::fmt::Display;

/// Verbosity-gated stderr reporter
#[derive(Debug, Clone, Copy, Default)]
pub struct Diagnostics {
    quiet: bool,
    verbose: bool,
}

impl Diagnostics {
    /// `quiet` wins over `verbose`
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self {
            quiet,
            verbose: verbose && !quiet,
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Print a warning unless running quietly
    pub fn warn(&self, message: impl Display) {
        if !self.quiet {
            eprintln!("warning: {}", message);
        }
    }

    /// Print a detail line in verbose mode
    pub fn info(&self, message: impl Display) {
        if self.verbose {
            eprintln!("{}", message);
        }
    }

    /// Warn about lines that needed lossy UTF-8 conversion
    pub fn report_lossy(&self, source_name: &str, lossy_lines: usize) {
        if lossy_lines > 0 {
            self.warn(format_args!(
                "{}: {} line(s) contained invalid UTF-8 and were decoded lossily",
                source_name, lossy_lines
            ));
        }
    }
}
