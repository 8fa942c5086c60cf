//! Report Model
//!
//! Both filters map their results to these types before rendering, so the
//! text and JSON outputs are produced from the same data.

use serde::{Serialize, Serializer};
use std::fmt;

/// An annotation printed after a group's sample record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Annotation {
    /// Number of records in the group
    Count(usize),
    /// Every sample of a conditional branch was taken
    AlwaysTaken,
    /// No sample of a conditional branch was taken
    NeverTaken,
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Annotation::Count(n) => write!(f, "> Count {}", n),
            Annotation::AlwaysTaken => f.write_str("> Always taken"),
            Annotation::NeverTaken => f.write_str("> Never taken"),
        }
    }
}

impl Serialize for Annotation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One printed group of the instruction grouper
#[derive(Debug, Clone, Serialize)]
pub struct GroupReport {
    /// Input the group was collected from
    pub source: String,

    /// Grouping key (first line of every record in the group)
    pub key: String,

    /// Number of records sharing the key
    pub count: usize,

    /// Lines of the first record, possibly elided
    pub lines: Vec<String>,

    /// Whether the middle of the sample record was elided
    pub truncated: bool,

    pub annotations: Vec<Annotation>,

    /// Record separator written ahead of the group in text output
    #[serde(skip)]
    pub separator: String,
}

/// One distinct line and how often it occurred
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountEntry {
    pub count: u64,
    pub line: String,
}

impl CountEntry {
    pub fn new(line: impl Into<String>, count: u64) -> Self {
        Self {
            count,
            line: line.into(),
        }
    }
}
