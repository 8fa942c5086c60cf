//! Record parsing - split a trace into separator-delimited records and group
//! the qualifying ones by their first line.

use std::collections::BTreeMap;

/// Separator line between records in a trace
pub const SEPARATOR: &str = "-----------------------------------";

/// Records whose first line doesn't start with this are dropped
pub const KEY_PREFIX: &str = "0";

/// Sample records with at least this many lines are elided when displayed
pub const DEFAULT_MAX_LINES: usize = 40;

/// Lines kept on each side of an elided sample record
pub const DEFAULT_CONTEXT: usize = 20;

/// Grouping and display parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupConfig {
    pub separator: String,
    pub key_prefix: String,
    pub max_lines: usize,
    pub context: usize,
    /// Keys containing this are conditional branches
    pub branch_marker: String,
    /// Keys containing this are branches whose condition is always true
    pub unconditional_marker: String,
    /// A record containing a line with this took the branch
    pub taken_marker: String,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            separator: SEPARATOR.to_string(),
            key_prefix: KEY_PREFIX.to_string(),
            max_lines: DEFAULT_MAX_LINES,
            context: DEFAULT_CONTEXT,
            branch_marker: "Bcc ".to_string(),
            unconditional_marker: "cond:True".to_string(),
            taken_marker: "Branch taken".to_string(),
        }
    }
}

/// A block of trimmed lines between two separators
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub lines: Vec<String>,
}

impl Record {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// The grouping key: the record's first line
    pub fn key(&self) -> Option<&str> {
        self.lines.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// More than one line, and a first line with the key prefix
    pub fn qualifies(&self, config: &GroupConfig) -> bool {
        self.len() > 1
            && self
                .key()
                .is_some_and(|key| key.starts_with(config.key_prefix.as_str()))
    }

    /// Whether any line contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

/// Counters collected while parsing one source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub lines: usize,
    /// Records closed by a separator
    pub records: usize,
    pub kept: usize,
    pub discarded: usize,
    /// Length of the unterminated record dropped at end of input
    pub trailing_lines: usize,
}

/// Qualifying records of one source, grouped by key in sorted order
#[derive(Debug, Clone, Default)]
pub struct Grouping {
    pub groups: BTreeMap<String, Vec<Record>>,
    pub stats: ParseStats,
}

impl Grouping {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Incremental record grouper, fed one raw line at a time
pub struct GroupBuilder<'a> {
    config: &'a GroupConfig,
    current: Vec<String>,
    grouping: Grouping,
}

impl<'a> GroupBuilder<'a> {
    pub fn new(config: &'a GroupConfig) -> Self {
        Self {
            config,
            current: Vec::new(),
            grouping: Grouping::default(),
        }
    }

    pub fn push_line(&mut self, raw: &str) {
        self.grouping.stats.lines += 1;
        let line = raw.trim();
        if line == self.config.separator {
            self.close_record();
        } else {
            self.current.push(line.to_string());
        }
    }

    fn close_record(&mut self) {
        let record = Record::new(std::mem::take(&mut self.current));
        let stats = &mut self.grouping.stats;
        stats.records += 1;

        if !record.qualifies(self.config) {
            stats.discarded += 1;
            return;
        }

        stats.kept += 1;
        let key = record.lines[0].clone();
        self.grouping.groups.entry(key).or_default().push(record);
    }

    /// Finish the source. An unterminated trailing record is dropped.
    pub fn finish(mut self) -> Grouping {
        self.grouping.stats.trailing_lines = self.current.len();
        self.grouping
    }
}

/// Group all lines of one source
pub fn group_lines<I, S>(lines: I, config: &GroupConfig) -> Grouping
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = GroupBuilder::new(config);
    for line in lines {
        builder.push_line(line.as_ref());
    }
    builder.finish()
}
