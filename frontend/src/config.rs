//! Application configuration.
//!
//! Centralized configuration for the Smart Resume Analyzer frontend.
//! Everything is fixed at compile time; the only knob read from the
//! build environment is the optional backend URL.

/// Application name, used for the document title and branding.
pub const APP_NAME: &str = "Smart Resume Analyzer";

/// Backend API base URL.
///
/// Set `RESUME_ANALYZER_BACKEND_URL` when building to talk to a real
/// analysis backend. When unset, the built-in mock data source is used.
pub const BACKEND_URL: Option<&str> = option_env!("RESUME_ANALYZER_BACKEND_URL");

/// The only MIME type accepted by the upload flow.
pub const ACCEPTED_MIME_TYPE: &str = "application/pdf";

/// Maximum resume size accepted for upload (in bytes).
///
/// 10 MB limit.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Progress percentages shown while a resume is being analyzed.
pub const PROGRESS_STEPS: [u8; 5] = [20, 40, 60, 80, 100];

/// Delay before each progress step (ms).
pub const PROGRESS_STEP_DELAY_MS: u32 = 800;

/// Pause between reaching 100% and revealing the result (ms).
pub const RESULT_REVEAL_DELAY_MS: u32 = 500;

/// Simulated latency of the mock history endpoint (ms).
pub const HISTORY_LOAD_DELAY_MS: u32 = 1000;

/// Timeout applied to backend HTTP requests (ms).
pub const REQUEST_TIMEOUT_MS: u32 = 30_000;

/// Number of core skills previewed on a history row before "+N more".
pub const SKILL_PREVIEW_COUNT: usize = 3;
