//! Built-in analysis data.
//!
//! Stands in for a backend: the records are compiled-in JSON fixtures in the
//! same wire format [`super::HttpAnalysisService`] expects, parsed and
//! validated the same way.

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;

use super::AnalysisService;
use crate::config::HISTORY_LOAD_DELAY_MS;
use crate::{validate_history, AnalysisRecord, AppError, AppResult, HistoryEntry, UploadedFile};

const ANALYSIS_FIXTURE: &str = include_str!("fixtures/analysis.json");
const HISTORY_FIXTURE: &str = include_str!("fixtures/history.json");

/// Mock data source with simulated history latency.
#[derive(Clone, Debug)]
pub struct MockAnalysisService {
    history_delay_ms: u32,
}

impl MockAnalysisService {
    pub fn new() -> Self {
        Self {
            history_delay_ms: HISTORY_LOAD_DELAY_MS,
        }
    }

    /// No artificial delay; for tests.
    pub fn instant() -> Self {
        Self { history_delay_ms: 0 }
    }
}

impl Default for MockAnalysisService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl AnalysisService for MockAnalysisService {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn analyze(&self, file: &UploadedFile) -> AppResult<AnalysisRecord> {
        log::debug!("🧪 Returning mock analysis for '{}'", file.name);
        let record: AnalysisRecord = serde_json::from_str(ANALYSIS_FIXTURE)
            .map_err(|e| AppError::Validation(format!("mock analysis fixture: {}", e)))?;
        record.validate()?;
        Ok(record)
    }

    async fn history(&self) -> AppResult<Vec<HistoryEntry>> {
        if self.history_delay_ms > 0 {
            TimeoutFuture::new(self.history_delay_ms).await;
        }
        let entries: Vec<HistoryEntry> = serde_json::from_str(HISTORY_FIXTURE)
            .map_err(|e| AppError::Validation(format!("mock history fixture: {}", e)))?;
        validate_history(&entries)?;
        log::debug!("🧪 Returning {} mock history entries", entries.len());
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use futures::executor::block_on;

    #[test]
    fn test_mock_analysis_record() {
        let file = UploadedFile::new("resume.pdf", "application/pdf", 42);
        let record = block_on(MockAnalysisService::instant().analyze(&file)).unwrap();

        assert_eq!(record.name, "Sarah Johnson");
        assert_eq!(record.rating().to_string(), "8.5/10");
        assert_eq!(record.extracted_data.core_skills.len(), 6);
        assert_eq!(record.extracted_data.soft_skills.len(), 4);
        assert_eq!(record.extracted_data.certifications.as_ref().map(Vec::len), Some(2));
        assert_eq!(record.analysis.upskill_suggestions.len(), 4);
    }

    #[test]
    fn test_mock_history_entries() {
        let entries = block_on(MockAnalysisService::instant().history()).unwrap();

        let ids: Vec<u32> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let ratings: Vec<f64> = entries.iter().map(|e| e.rating().value()).collect();
        assert_eq!(ratings, vec![8.5, 7.2, 9.1]);

        assert_eq!(entries[1].filename, "michael_chen_resume_v2.pdf");
        assert_eq!(
            entries[0].uploaded_at,
            Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
        );
        assert!(entries.iter().all(|e| e.record.extracted_data.certifications.is_none()));
    }
}
