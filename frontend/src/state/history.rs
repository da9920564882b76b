//! History view state and aggregates.

use crate::config::SKILL_PREVIEW_COUNT;
use crate::{AppError, HistoryEntry};

/// Loading lifecycle of the history list.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum HistoryState {
    #[default]
    Loading,
    Loaded(Vec<HistoryEntry>),
    Failed(AppError),
}

impl HistoryState {
    pub fn entries(&self) -> &[HistoryEntry] {
        match self {
            HistoryState::Loaded(entries) => entries,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, HistoryState::Loading)
    }

    /// True once loading finished with nothing to show.
    pub fn is_empty(&self) -> bool {
        matches!(self, HistoryState::Loaded(entries) if entries.is_empty())
    }

    pub fn stats(&self) -> HistoryStats {
        HistoryStats::from_entries(self.entries())
    }
}

/// Aggregates shown above the history list.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryStats {
    pub count: usize,
    pub highest: Option<f64>,
    pub average: Option<f64>,
}

impl HistoryStats {
    pub fn from_entries(entries: &[HistoryEntry]) -> Self {
        let ratings = entries.iter().map(|e| e.rating().value());
        let highest = ratings.clone().reduce(f64::max);
        let average = (!entries.is_empty())
            .then(|| ratings.sum::<f64>() / entries.len() as f64);

        Self {
            count: entries.len(),
            highest,
            average,
        }
    }

    pub fn highest_display(&self) -> String {
        one_decimal(self.highest)
    }

    pub fn average_display(&self) -> String {
        one_decimal(self.average)
    }
}

fn one_decimal(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.1}", v))
        .unwrap_or_else(|| "—".to_string())
}

/// Leading core skills for a summary row and how many were left out.
pub fn skill_preview(entry: &HistoryEntry) -> (&[String], usize) {
    let skills = &entry.record.extracted_data.core_skills;
    let shown = skills.len().min(SKILL_PREVIEW_COUNT);
    (&skills[..shown], skills.len() - shown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{AnalysisService, MockAnalysisService};
    use futures::executor::block_on;

    fn loaded() -> HistoryState {
        let entries = block_on(MockAnalysisService::instant().history()).unwrap();
        HistoryState::Loaded(entries)
    }

    #[test]
    fn test_mock_history_stats() {
        let state = loaded();
        let stats = state.stats();

        assert_eq!(state.entries().len(), 3);
        assert_eq!(stats.count, 3);
        assert_eq!(stats.highest_display(), "9.1");
        assert_eq!(stats.average_display(), "8.3");
    }

    #[test]
    fn test_loading_state_has_no_entries() {
        let state = HistoryState::default();
        assert!(state.is_loading());
        assert!(!state.is_empty());
        assert_eq!(state.stats().count, 0);
    }

    #[test]
    fn test_empty_history_stats() {
        let state = HistoryState::Loaded(vec![]);
        let stats = state.stats();

        assert!(state.is_empty());
        assert_eq!(stats.highest, None);
        assert_eq!(stats.highest_display(), "—");
        assert_eq!(stats.average_display(), "—");
    }

    #[test]
    fn test_skill_preview() {
        let state = loaded();
        let first = &state.entries()[0];

        let (shown, more) = skill_preview(first);
        assert_eq!(shown, &["React", "TypeScript", "Node.js"]);
        assert_eq!(more, 3);
    }
}
