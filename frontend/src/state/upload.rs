//! Upload flow state: drop zone, simulated progress and analysis result.

use std::future::Future;

use crate::config::{ACCEPTED_MIME_TYPE, MAX_FILE_SIZE, PROGRESS_STEPS, PROGRESS_STEP_DELAY_MS};
use crate::{AnalysisRecord, AppError, AppResult, UploadedFile};

/// Where the upload flow currently is.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum UploadPhase {
    /// Drop zone is shown.
    #[default]
    Idle,
    /// Progress simulation running.
    Analyzing { progress: u8 },
    /// Result view is shown.
    Complete(AnalysisRecord),
    /// The data source failed.
    Failed(AppError),
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct UploadState {
    phase: UploadPhase,
    drag_over: bool,
}

impl UploadState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &UploadPhase {
        &self.phase
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, UploadPhase::Idle)
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self.phase, UploadPhase::Analyzing { .. })
    }

    pub fn progress(&self) -> u8 {
        match self.phase {
            UploadPhase::Analyzing { progress } => progress,
            UploadPhase::Complete(_) => 100,
            UploadPhase::Idle | UploadPhase::Failed(_) => 0,
        }
    }

    pub fn result(&self) -> Option<&AnalysisRecord> {
        match &self.phase {
            UploadPhase::Complete(record) => Some(record),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&AppError> {
        match &self.phase {
            UploadPhase::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_drag_over(&self) -> bool {
        self.drag_over
    }

    pub fn set_drag_over(&mut self, drag_over: bool) {
        self.drag_over = drag_over;
    }

    /// Accepts a file from the drop zone.
    ///
    /// Returns `Ok(true)` when the analysis started, `Ok(false)` when the file
    /// was ignored because the flow is not idle. An invalid file leaves the
    /// phase untouched.
    pub fn begin(&mut self, file: &UploadedFile) -> AppResult<bool> {
        self.drag_over = false;
        if !self.is_idle() {
            log::warn!("⚠️ Ignoring '{}': an analysis is already shown", file.name);
            return Ok(false);
        }
        validate_upload(file)?;

        log::info!("📄 Accepted '{}' ({} bytes)", file.name, file.size);
        self.phase = UploadPhase::Analyzing { progress: 0 };
        Ok(true)
    }

    /// Moves to the next progress step and returns it.
    pub fn advance(&mut self) -> Option<u8> {
        let UploadPhase::Analyzing { progress } = &mut self.phase else {
            return None;
        };
        let next = PROGRESS_STEPS.iter().copied().find(|step| *step > *progress)?;
        *progress = next;
        Some(next)
    }

    pub fn complete(&mut self, record: AnalysisRecord) {
        log::info!("✅ Analysis complete for {} ({})", record.name, record.rating());
        self.phase = UploadPhase::Complete(record);
    }

    pub fn fail(&mut self, err: AppError) {
        log::error!("❌ Analysis failed: {}", err);
        self.phase = UploadPhase::Failed(err);
    }

    /// Discards any result and returns to the drop zone.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn status_label(&self) -> &'static str {
        status_label_for(self.progress())
    }
}

/// Checks the declared type and size of a file before analysis.
pub fn validate_upload(file: &UploadedFile) -> AppResult<()> {
    if file.mime_type != ACCEPTED_MIME_TYPE {
        return Err(AppError::InvalidFileType(file.mime_type.clone()));
    }
    if file.size > MAX_FILE_SIZE {
        return Err(AppError::FileTooLarge {
            size: file.size,
            max: MAX_FILE_SIZE,
        });
    }
    Ok(())
}

/// Status text for a progress percentage.
pub fn status_label_for(progress: u8) -> &'static str {
    match progress {
        0..=19 => "Uploading file...",
        20..=39 => "Extracting text...",
        40..=59 => "Analyzing content...",
        60..=79 => "Generating insights...",
        _ => "Almost done!",
    }
}

/// Plays the scripted progress sequence.
///
/// `sleep` is awaited for [`PROGRESS_STEP_DELAY_MS`] before every step and
/// `on_step` receives each percentage in order.
pub async fn simulate_progress<S, Fut, F>(mut sleep: S, mut on_step: F)
where
    S: FnMut(u32) -> Fut,
    Fut: Future<Output = ()>,
    F: FnMut(u8),
{
    for step in PROGRESS_STEPS {
        sleep(PROGRESS_STEP_DELAY_MS).await;
        on_step(step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{AnalysisService, MockAnalysisService};
    use futures::executor::block_on;
    use futures::future::ready;

    fn pdf() -> UploadedFile {
        UploadedFile::new("resume.pdf", "application/pdf", 120_000)
    }

    #[test]
    fn test_non_pdf_leaves_drop_zone_unchanged() {
        let mut state = UploadState::new();
        let before = state.clone();

        let err = state
            .begin(&UploadedFile::new("photo.png", "image/png", 1_000))
            .unwrap_err();

        assert_eq!(err, AppError::InvalidFileType("image/png".into()));
        assert_eq!(state, before);
        assert_eq!(state.progress(), 0);
    }

    #[test]
    fn test_oversized_pdf_is_rejected() {
        let mut state = UploadState::new();
        let file = UploadedFile::new("big.pdf", "application/pdf", MAX_FILE_SIZE + 1);

        assert!(matches!(state.begin(&file), Err(AppError::FileTooLarge { .. })));
        assert!(state.is_idle());
    }

    #[test]
    fn test_progress_steps_in_order() {
        let mut state = UploadState::new();
        assert!(state.begin(&pdf()).unwrap());

        let mut seen = Vec::new();
        let mut delays = Vec::new();
        block_on(simulate_progress(
            |ms| {
                delays.push(ms);
                ready(())
            },
            |_| seen.extend(state.advance()),
        ));

        assert_eq!(seen, vec![20, 40, 60, 80, 100]);
        assert_eq!(delays, vec![PROGRESS_STEP_DELAY_MS; 5]);
        assert_eq!(state.progress(), 100);
        assert_eq!(state.advance(), None);
    }

    #[test]
    fn test_status_label_thresholds() {
        assert_eq!(status_label_for(0), "Uploading file...");
        assert_eq!(status_label_for(20), "Extracting text...");
        assert_eq!(status_label_for(40), "Analyzing content...");
        assert_eq!(status_label_for(60), "Generating insights...");
        assert_eq!(status_label_for(80), "Almost done!");
        assert_eq!(status_label_for(100), "Almost done!");
    }

    #[test]
    fn test_completed_result_then_reset() {
        let mut state = UploadState::new();
        state.begin(&pdf()).unwrap();
        while state.advance().is_some() {}

        let record = block_on(MockAnalysisService::instant().analyze(&pdf())).unwrap();
        state.complete(record);

        let result = state.result().unwrap();
        assert_eq!(result.rating().to_string(), "8.5/10");
        assert_eq!(result.extracted_data.core_skills.len(), 6);
        assert_eq!(result.extracted_data.soft_skills.len(), 4);

        state.reset();
        assert!(state.is_idle());
        assert_eq!(state.progress(), 0);
        assert!(state.result().is_none());
    }

    #[test]
    fn test_file_ignored_while_busy() {
        let mut state = UploadState::new();
        state.begin(&pdf()).unwrap();
        state.advance();

        assert!(!state.begin(&pdf()).unwrap());
        assert_eq!(state.progress(), 20);
    }

    #[test]
    fn test_failure_can_be_reset() {
        let mut state = UploadState::new();
        state.begin(&pdf()).unwrap();
        state.fail(AppError::Timeout);

        assert_eq!(state.error(), Some(&AppError::Timeout));
        state.reset();
        assert!(state.is_idle());
    }

    #[test]
    fn test_drag_over_cleared_on_drop() {
        let mut state = UploadState::new();
        state.set_drag_over(true);
        assert!(state.is_drag_over());

        let _ = state.begin(&UploadedFile::new("notes.txt", "text/plain", 10));
        assert!(!state.is_drag_over());
    }
}
