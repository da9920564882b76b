//! HTTP client for a resume analysis backend.
//!
//! Endpoints:
//! - `POST {base}/api/analyze` - multipart upload (`file` field), returns an analysis record
//! - `GET {base}/api/history` - ordered list of history entries

use std::future::Future;

use async_trait::async_trait;
use futures::future::{select, Either};
use futures::pin_mut;
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use web_sys::FormData;

use super::AnalysisService;
use crate::config::{MAX_FILE_SIZE, REQUEST_TIMEOUT_MS};
use crate::{validate_history, AnalysisRecord, AppError, AppResult, HistoryEntry, UploadedFile};

pub struct HttpAnalysisService {
    base_url: String,
    timeout_ms: u32,
}

impl HttpAnalysisService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_ms: REQUEST_TIMEOUT_MS,
        }
    }

    pub fn with_timeout(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }
}

#[async_trait(?Send)]
impl AnalysisService for HttpAnalysisService {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn analyze(&self, file: &UploadedFile) -> AppResult<AnalysisRecord> {
        let blob = file
            .handle()
            .ok_or_else(|| AppError::Upload(format!("no contents available for '{}'", file.name)))?;

        let form_data =
            FormData::new().map_err(|e| AppError::Upload(format!("Failed to create FormData: {:?}", e)))?;
        form_data
            .append_with_blob_and_filename("file", blob, &file.name)
            .map_err(|e| AppError::Upload(format!("Failed to append file: {:?}", e)))?;

        let request = Request::post(&self.endpoint("analyze"))
            .body(form_data)
            .map_err(|e| AppError::Upload(format!("Failed to build request: {}", e)))?;

        log::info!("📤 Uploading '{}' to {}", file.name, self.base_url);
        let response = with_timeout(request.send(), self.timeout_ms)
            .await?
            .map_err(|e| AppError::Network(e.to_string()))?;

        let record: AnalysisRecord = decode(response, Some(file.size)).await?;
        record.validate()?;
        Ok(record)
    }

    async fn history(&self) -> AppResult<Vec<HistoryEntry>> {
        let response = with_timeout(Request::get(&self.endpoint("history")).send(), self.timeout_ms)
            .await?
            .map_err(|e| AppError::Network(e.to_string()))?;

        let entries: Vec<HistoryEntry> = decode(response, None).await?;
        validate_history(&entries)?;
        log::info!("📚 Loaded {} history entries", entries.len());
        Ok(entries)
    }
}

/// Checks the status and parses the JSON body.
///
/// `upload_size` is the size of the file sent with the request, if any.
async fn decode<T: DeserializeOwned>(response: Response, upload_size: Option<u64>) -> AppResult<T> {
    if !response.ok() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(error_for_status(response.status(), body, upload_size));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to parse response: {}", e)))
}

/// Maps a non-success HTTP status onto the error taxonomy.
///
/// A 413 only becomes `FileTooLarge` when the rejected upload's size is known.
pub fn error_for_status(status: u16, body: String, upload_size: Option<u64>) -> AppError {
    match (status, upload_size) {
        (408 | 504, _) => AppError::Timeout,
        (413, Some(size)) => AppError::FileTooLarge {
            size,
            max: MAX_FILE_SIZE,
        },
        (415, _) => AppError::InvalidFileType(body),
        _ => AppError::Server {
            status,
            message: body,
        },
    }
}

async fn with_timeout<F: Future>(fut: F, timeout_ms: u32) -> AppResult<F::Output> {
    let timer = TimeoutFuture::new(timeout_ms);
    pin_mut!(fut);
    pin_mut!(timer);

    match select(fut, timer).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(_) => {
            log::warn!("⏱️ Request timed out after {} ms", timeout_ms);
            Err(AppError::Timeout)
        }
    }
}
