//! Input sources and line reading
//!
//! Lines are decoded lossily: invalid UTF-8 is replaced rather than aborting
//! the run, and the number of affected lines is tracked so callers can warn.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Label used for standard input in diagnostics and reports
pub const STDIN_LABEL: &str = "<stdin>";

/// Errors raised while opening or reading an input source
#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {source_name}")]
    Read {
        source_name: String,
        #[source]
        source: io::Error,
    },
}

/// Where a filter reads its lines from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Map positional arguments to sources. No arguments means stdin, and a
    /// lone `-` also names stdin.
    pub fn from_args(files: &[PathBuf]) -> Vec<InputSource> {
        if files.is_empty() {
            return vec![InputSource::Stdin];
        }

        files
            .iter()
            .map(|path| {
                if path.as_os_str() == "-" {
                    InputSource::Stdin
                } else {
                    InputSource::File(path.clone())
                }
            })
            .collect()
    }

    /// Human-readable name for diagnostics
    pub fn name(&self) -> String {
        match self {
            InputSource::Stdin => STDIN_LABEL.to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }

    /// Open the source for buffered reading
    pub fn open(&self) -> Result<Box<dyn BufRead>, InputError> {
        match self {
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
            InputSource::File(path) => open_file(path),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

fn open_file(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Box::new(BufReader::new(file)))
}

/// Iterator over the lines of a reader, without their terminators
pub struct Lines<R> {
    reader: R,
    source_name: String,
    buf: Vec<u8>,
    lossy_lines: usize,
}

impl<R: BufRead> Lines<R> {
    pub fn new(reader: R, source_name: impl Into<String>) -> Self {
        Self {
            reader,
            source_name: source_name.into(),
            buf: Vec::new(),
            lossy_lines: 0,
        }
    }

    /// Number of lines that contained invalid UTF-8
    pub fn lossy_lines(&self) -> usize {
        self.lossy_lines
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = Result<String, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                }
                let line = match String::from_utf8(std::mem::take(&mut self.buf)) {
                    Ok(line) => line,
                    Err(err) => {
                        self.lossy_lines += 1;
                        String::from_utf8_lossy(err.as_bytes()).into_owned()
                    }
                };
                Some(Ok(line))
            }
            Err(source) => Some(Err(InputError::Read {
                source_name: self.source_name.clone(),
                source,
            })),
        }
    }
}
