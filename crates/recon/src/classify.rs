use serde::Serialize;

use crate::model::ReportResult;

/// Semantic category of a report outcome, used for downstream annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Pass,
    Fail,
    Inconclusive,
    Missing,
}

impl Outcome {
    pub const ALL: [Outcome; 4] = [Self::Pass, Self::Fail, Self::Inconclusive, Self::Missing];

    /// Case-insensitive label lookup. The label is not trimmed; anything
    /// unrecognized, padded labels included, is uncategorized.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|outcome| label.eq_ignore_ascii_case(outcome.as_str()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
            Self::Inconclusive => "inconclusive",
            Self::Missing => "missing",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categorize a row's report result.
///
/// The `Missing` sentinel always maps to [`Outcome::Missing`]; reported labels
/// go through [`Outcome::from_label`], so a literal "missing" string coming
/// from a report is coloured the same way the sentinel is.
pub fn classify(report: &ReportResult) -> Option<Outcome> {
    match report {
        ReportResult::Missing => Some(Outcome::Missing),
        ReportResult::Found(label) => Outcome::from_label(label),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_case_insensitive() {
        assert_eq!(Outcome::from_label("Pass"), Some(Outcome::Pass));
        assert_eq!(Outcome::from_label("PASS"), Some(Outcome::Pass));
        assert_eq!(Outcome::from_label("fail"), Some(Outcome::Fail));
        assert_eq!(Outcome::from_label("InConclusive"), Some(Outcome::Inconclusive));
    }

    #[test]
    fn unknown_labels_are_uncategorized() {
        assert_eq!(Outcome::from_label("Skipped"), None);
        assert_eq!(Outcome::from_label(" pass "), None);
        assert_eq!(Outcome::from_label("Fail\n"), None);
        assert_eq!(Outcome::from_label(""), None);
        assert_eq!(Outcome::from_label("passed"), None);
    }

    #[test]
    fn sentinel_is_missing() {
        assert_eq!(classify(&ReportResult::Missing), Some(Outcome::Missing));
        assert_eq!(
            classify(&ReportResult::Found("MISSING".into())),
            Some(Outcome::Missing)
        );
        assert_eq!(classify(&ReportResult::Found("Blocked".into())), None);
    }
}
