//! Per-step reports handed from an engine to the renderer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Role of a highlighted position in the latest unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightRole {
    /// The element that moved into its new slot.
    Primary,
    /// The element it was exchanged with.
    Secondary,
}

/// Outcome of one `advance` call.
///
/// A fresh report is built on every call; nothing is carried over between
/// steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepReport {
    /// Sequence index → role, for the renderer to highlight.
    pub highlights: BTreeMap<usize, HighlightRole>,
    /// True once the algorithm needs no further mutations.
    pub finished: bool,
}

impl StepReport {
    /// A report with no highlights.
    #[must_use]
    pub fn idle(finished: bool) -> Self {
        Self {
            highlights: BTreeMap::new(),
            finished,
        }
    }

    /// A report for a swap of `secondary` and `primary`.
    #[must_use]
    pub fn swapped(secondary: usize, primary: usize, finished: bool) -> Self {
        let mut highlights = BTreeMap::new();
        highlights.insert(secondary, HighlightRole::Secondary);
        highlights.insert(primary, HighlightRole::Primary);
        Self {
            highlights,
            finished,
        }
    }

    /// Whether this step exchanged two elements.
    #[must_use]
    pub fn is_swap(&self) -> bool {
        !self.highlights.is_empty()
    }

    /// Role of `index`, if highlighted.
    #[must_use]
    pub fn role_of(&self, index: usize) -> Option<HighlightRole> {
        self.highlights.get(&index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_report() {
        let report = StepReport::idle(false);
        assert!(report.highlights.is_empty());
        assert!(!report.finished);
        assert!(!report.is_swap());
    }

    #[test]
    fn test_swapped_report_roles() {
        let report = StepReport::swapped(2, 3, false);
        assert!(report.is_swap());
        assert_eq!(report.role_of(2), Some(HighlightRole::Secondary));
        assert_eq!(report.role_of(3), Some(HighlightRole::Primary));
        assert_eq!(report.role_of(4), None);
    }

    #[test]
    fn test_default_is_unfinished_idle() {
        assert_eq!(StepReport::default(), StepReport::idle(false));
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&HighlightRole::Primary).expect("serialize");
        assert_eq!(json, "\"primary\"");
        let report = StepReport::swapped(0, 1, true);
        let json = serde_json::to_string(&report).expect("serialize");
        assert!(json.contains("\"0\":\"secondary\""));
        assert!(json.contains("\"finished\":true"));
    }
}
