//! Group annotations - occurrence counts and branch summaries

use crate::core::model::Annotation;
use crate::grouper::parse::{GroupConfig, Record};

/// How the samples of a conditional branch behaved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchSummary {
    AlwaysTaken,
    NeverTaken,
    Mixed,
    /// Not a conditional branch, or too few samples to say
    NotApplicable,
}

impl BranchSummary {
    /// Classify a group.
    ///
    /// Only keys containing the branch marker, without the unconditional
    /// marker, with more than one sample are considered. A sample without a
    /// taken-marker line counts as not taken.
    pub fn classify(key: &str, records: &[Record], config: &GroupConfig) -> Self {
        if !key.contains(config.branch_marker.as_str())
            || key.contains(config.unconditional_marker.as_str())
            || records.len() <= 1
        {
            return BranchSummary::NotApplicable;
        }

        let mut ever_taken = false;
        let mut ever_not_taken = false;
        for record in records {
            if record.contains(&config.taken_marker) {
                ever_taken = true;
            } else {
                ever_not_taken = true;
            }
        }

        match (ever_taken, ever_not_taken) {
            (true, false) => BranchSummary::AlwaysTaken,
            (false, true) => BranchSummary::NeverTaken,
            (true, true) => BranchSummary::Mixed,
            (false, false) => BranchSummary::NotApplicable,
        }
    }

    pub fn annotation(self) -> Option<Annotation> {
        match self {
            BranchSummary::AlwaysTaken => Some(Annotation::AlwaysTaken),
            BranchSummary::NeverTaken => Some(Annotation::NeverTaken),
            BranchSummary::Mixed | BranchSummary::NotApplicable => None,
        }
    }
}

/// Annotations for a group, in print order
pub fn annotate(key: &str, records: &[Record], config: &GroupConfig) -> Vec<Annotation> {
    let mut annotations = vec![Annotation::Count(records.len())];
    if let Some(branch) = BranchSummary::classify(key, records, config).annotation() {
        annotations.push(branch);
    }
    annotations
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "0x00001234 Bcc cond:NE";

    fn sample(taken: bool) -> Record {
        let mut lines = vec![KEY.to_string(), "SR=2700".to_string()];
        if taken {
            lines.push("Branch taken".to_string());
        }
        Record::new(lines)
    }

    fn classify(key: &str, taken: &[bool]) -> BranchSummary {
        let records: Vec<Record> = taken.iter().map(|&t| sample(t)).collect();
        BranchSummary::classify(key, &records, &GroupConfig::default())
    }

    #[test]
    fn test_always_taken() {
        assert_eq!(classify(KEY, &[true, true, true]), BranchSummary::AlwaysTaken);
    }

    #[test]
    fn test_never_taken() {
        assert_eq!(classify(KEY, &[false, false, false]), BranchSummary::NeverTaken);
    }

    #[test]
    fn test_mixed() {
        assert_eq!(classify(KEY, &[true, false, true]), BranchSummary::Mixed);
        assert_eq!(BranchSummary::Mixed.annotation(), None);
    }

    #[test]
    fn test_single_sample_not_applicable() {
        assert_eq!(classify(KEY, &[true]), BranchSummary::NotApplicable);
    }

    #[test]
    fn test_unconditional_branch_not_applicable() {
        let key = "0x00001234 Bcc cond:True";
        assert_eq!(classify(key, &[true, true]), BranchSummary::NotApplicable);
    }

    #[test]
    fn test_non_branch_not_applicable() {
        assert_eq!(
            classify("0x00001234 MOVE.L", &[false, false]),
            BranchSummary::NotApplicable
        );
    }

    #[test]
    fn test_marker_matches_as_substring() {
        let records = vec![
            Record::new(vec![KEY.into(), "  -> Branch taken to 0x2000".into()]),
            Record::new(vec![KEY.into(), "Branch taken".into()]),
        ];
        assert_eq!(
            BranchSummary::classify(KEY, &records, &GroupConfig::default()),
            BranchSummary::AlwaysTaken
        );
    }

    #[test]
    fn test_annotate_order() {
        let records = vec![sample(false), sample(false)];
        let annotations = annotate(KEY, &records, &GroupConfig::default());
        assert_eq!(
            annotations,
            vec![Annotation::Count(2), Annotation::NeverTaken]
        );
    }

    #[test]
    fn test_annotate_count_only() {
        let records = vec![sample(true)];
        let annotations = annotate(KEY, &records, &GroupConfig::default());
        assert_eq!(annotations, vec![Annotation::Count(1)]);
    }
}
