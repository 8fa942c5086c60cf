//! Turn a grouping into printable reports

use crate::core::model::GroupReport;
use crate::grouper::annotate::annotate;
use crate::grouper::parse::{GroupConfig, Grouping};

/// Line standing in for the elided middle of a long record
pub const ELISION: &str = "...";

/// Lines of a sample record as displayed: everything when shorter than
/// `max_lines`, otherwise `context` lines from each end around [`ELISION`].
pub fn display_lines(lines: &[String], config: &GroupConfig) -> (Vec<String>, bool) {
    if lines.len() < config.max_lines {
        return (lines.to_vec(), false);
    }

    let head = &lines[..config.context.min(lines.len())];
    let tail = &lines[lines.len().saturating_sub(config.context)..];

    let mut shown = Vec::with_capacity(head.len() + tail.len() + 1);
    shown.extend_from_slice(head);
    shown.push(ELISION.to_string());
    shown.extend_from_slice(tail);
    (shown, true)
}

/// One report per key, in key order. Only the first record of each group is
/// shown.
pub fn build_reports(grouping: &Grouping, source: &str, config: &GroupConfig) -> Vec<GroupReport> {
    grouping
        .groups
        .iter()
        .filter_map(|(key, records)| {
            let first = records.first()?;
            let (lines, truncated) = display_lines(&first.lines, config);
            Some(GroupReport {
                source: source.to_string(),
                key: key.clone(),
                count: records.len(),
                lines,
                truncated,
                annotations: annotate(key, records, config),
                separator: config.separator.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Annotation;
    use crate::grouper::parse::{group_lines, SEPARATOR};

    fn numbered(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("line {}", i)).collect()
    }

    #[test]
    fn test_short_record_shown_in_full() {
        let lines = numbered(39);
        let (shown, truncated) = display_lines(&lines, &GroupConfig::default());
        assert_eq!(shown, lines);
        assert!(!truncated);
    }

    #[test]
    fn test_record_at_threshold_is_elided() {
        let lines = numbered(40);
        let (shown, truncated) = display_lines(&lines, &GroupConfig::default());
        assert!(truncated);
        assert_eq!(shown.len(), 41);
        assert_eq!(shown[0], "line 1");
        assert_eq!(shown[19], "line 20");
        assert_eq!(shown[20], ELISION);
        assert_eq!(shown[21], "line 21");
        assert_eq!(shown[40], "line 40");
    }

    #[test]
    fn test_long_record_keeps_head_and_tail() {
        let lines = numbered(100);
        let (shown, _) = display_lines(&lines, &GroupConfig::default());
        assert_eq!(shown.len(), 41);
        assert_eq!(shown[19], "line 20");
        assert_eq!(shown[21], "line 81");
        assert_eq!(shown[40], "line 100");
    }

    #[test]
    fn test_context_larger_than_record() {
        let config = GroupConfig {
            max_lines: 3,
            context: 5,
            ..Default::default()
        };
        let lines = numbered(4);
        let (shown, truncated) = display_lines(&lines, &config);
        assert!(truncated);
        assert_eq!(shown.len(), 9);
        assert_eq!(shown[4], ELISION);
    }

    #[test]
    fn test_build_reports_uses_first_record() {
        let input = format!(
            "{s}\n0x2 BRA\nfirst\n{s}\n0x1 NOP\nonly\n{s}\n0x2 BRA\nsecond\n{s}\n",
            s = SEPARATOR
        );
        let config = GroupConfig::default();
        let grouping = group_lines(input.lines(), &config);
        let reports = build_reports(&grouping, "trace.log", &config);

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].key, "0x1 NOP");
        assert_eq!(reports[1].key, "0x2 BRA");
        assert_eq!(reports[1].count, 2);
        assert_eq!(reports[1].lines, vec!["0x2 BRA", "first"]);
        assert_eq!(reports[1].annotations, vec![Annotation::Count(2)]);
        assert_eq!(reports[1].source, "trace.log");
        assert_eq!(reports[1].separator, SEPARATOR);
    }
}
