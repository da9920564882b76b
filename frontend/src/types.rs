//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Rating Types** - Validated 0–10 score and its display helpers
//! - **Record Types** - Analysis records and history entries (wire format)
//! - **File Types** - Metadata about a resume picked by the user
//! - **Error Types** - Frontend error handling

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Rating Types
// =============================================================================

/// Resume score between 0 and 10.
///
/// Construction (including deserialization) rejects values outside the range,
/// so every `Rating` in the application is known to be displayable.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Rating(f64);

impl Rating {
    pub const MAX: f64 = 10.0;

    pub fn new(value: f64) -> AppResult<Self> {
        if value.is_finite() && (0.0..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(AppError::Validation(format!(
                "rating {} is outside 0-{}",
                value,
                Self::MAX
            )))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Width of the proportional progress bar, in percent.
    pub fn percent(self) -> f64 {
        self.0 * 10.0
    }

    /// Verdict shown under the score on a fresh analysis.
    pub fn verdict(self) -> &'static str {
        if self.0 >= 8.0 {
            "Excellent"
        } else if self.0 >= 6.0 {
            "Good"
        } else {
            "Needs Improvement"
        }
    }

    /// Badge used in the history list (stricter thresholds than [`Rating::verdict`]).
    pub fn badge(self) -> RatingBadge {
        if self.0 >= 8.5 {
            RatingBadge::Excellent
        } else if self.0 >= 7.0 {
            RatingBadge::Good
        } else {
            RatingBadge::NeedsWork
        }
    }
}

impl TryFrom<f64> for Rating {
    type Error = AppError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for f64 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/10", self.0)
    }
}

/// History list badge for a rating.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RatingBadge {
    Excellent,
    Good,
    NeedsWork,
}

impl RatingBadge {
    pub fn label(&self) -> &'static str {
        match self {
            RatingBadge::Excellent => "Excellent",
            RatingBadge::Good => "Good",
            RatingBadge::NeedsWork => "Needs Work",
        }
    }

    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            RatingBadge::Excellent => "tone-excellent",
            RatingBadge::Good => "tone-good",
            RatingBadge::NeedsWork => "tone-poor",
        }
    }
}

// =============================================================================
// Record Types
// =============================================================================

/// Data extracted from the resume itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExtractedData {
    pub core_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub experience_years: u32,
    pub education: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<String>>,
}

/// A skill worth learning next, with the reasoning behind it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpskillSuggestion {
    pub skill: String,
    pub reason: String,
}

/// Model-produced assessment of the resume.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LlmAnalysis {
    #[serde(rename = "resume_rating")]
    pub rating: Rating,
    pub improvement_areas: String,
    pub upskill_suggestions: Vec<UpskillSuggestion>,
}

/// Structured result of evaluating one resume.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub extracted_data: ExtractedData,
    #[serde(rename = "llm_analysis")]
    pub analysis: LlmAnalysis,
}

impl AnalysisRecord {
    pub fn rating(&self) -> Rating {
        self.analysis.rating
    }

    /// Checks the invariants serde cannot express on its own.
    pub fn validate(&self) -> AppResult<()> {
        if self.extracted_data.core_skills.is_empty() {
            return Err(AppError::Validation(format!(
                "analysis for '{}' has no core skills",
                self.name
            )));
        }
        if self.extracted_data.soft_skills.is_empty() {
            return Err(AppError::Validation(format!(
                "analysis for '{}' has no soft skills",
                self.name
            )));
        }
        Ok(())
    }
}

/// An analysis record annotated with upload metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: u32,
    pub filename: String,
    pub uploaded_at: DateTime<Utc>,
    /// Summary rating some listings repeat next to the analysis.
    /// `llm_analysis.resume_rating` stays authoritative; the two must agree.
    #[serde(rename = "rating", default, skip_serializing_if = "Option::is_none")]
    pub listed_rating: Option<Rating>,
    #[serde(flatten)]
    pub record: AnalysisRecord,
}

impl HistoryEntry {
    pub fn rating(&self) -> Rating {
        self.record.rating()
    }
}

/// Validates every entry and rejects duplicate ids.
pub fn validate_history(entries: &[HistoryEntry]) -> AppResult<()> {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        entry.record.validate()?;
        if let Some(listed) = entry.listed_rating.filter(|listed| *listed != entry.rating()) {
            return Err(AppError::Validation(format!(
                "history id {} lists rating {} but its analysis rates {}",
                entry.id,
                listed,
                entry.rating()
            )));
        }
        if !seen.insert(entry.id) {
            return Err(AppError::Validation(format!(
                "duplicate history id {}",
                entry.id
            )));
        }
    }
    Ok(())
}

/// Formats an upload timestamp like `January 15, 2024 at 10:30 AM`.
pub fn format_upload_date<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    at.format("%B %-d, %Y at %I:%M %p").to_string()
}

// =============================================================================
// File Types
// =============================================================================

/// A file offered by the user through drag & drop or the file picker.
///
/// Only the declared metadata is inspected by the UI; the browser handle is
/// kept so a real backend can receive the contents.
#[derive(Clone, Debug)]
pub struct UploadedFile {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
    handle: Option<web_sys::File>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
            handle: None,
        }
    }

    pub fn from_web(file: web_sys::File) -> Self {
        Self {
            name: file.name(),
            mime_type: file.type_(),
            size: file.size() as u64,
            handle: Some(file),
        }
    }

    pub fn handle(&self) -> Option<&web_sys::File> {
        self.handle.as_ref()
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AppError {
    /// The file is not a PDF.
    #[error("Please upload a PDF file")]
    InvalidFileType(String),

    /// The file exceeds the upload limit.
    #[error("File is too large ({size} bytes, maximum is {max} bytes)")]
    FileTooLarge { size: u64, max: u64 },

    /// The upload could not be prepared.
    #[error("Upload error: {0}")]
    Upload(String),

    /// Network/HTTP error.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with an error status.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The backend did not answer in time.
    #[error("Request timed out")]
    Timeout,

    /// Invalid data format.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn record(core: &[&str], soft: &[&str], rating: f64) -> AnalysisRecord {
        AnalysisRecord {
            name: "Test Person".into(),
            email: "test@example.com".into(),
            phone: "+1 (555) 000-0000".into(),
            extracted_data: ExtractedData {
                core_skills: core.iter().map(|s| s.to_string()).collect(),
                soft_skills: soft.iter().map(|s| s.to_string()).collect(),
                experience_years: 2,
                education: "BSc".into(),
                certifications: None,
            },
            analysis: LlmAnalysis {
                rating: Rating::new(rating).unwrap(),
                improvement_areas: "More numbers".into(),
                upskill_suggestions: vec![],
            },
        }
    }

    #[test]
    fn test_rating_display_and_percent() {
        let rating = Rating::new(8.5).unwrap();
        assert_eq!(rating.to_string(), "8.5/10");
        assert_eq!(rating.percent(), 85.0);
        assert_eq!(Rating::new(7.2).unwrap().to_string(), "7.2/10");
    }

    #[test]
    fn test_rating_rejects_out_of_range() {
        assert!(Rating::new(-0.1).is_err());
        assert!(Rating::new(10.5).is_err());
        assert!(Rating::new(f64::NAN).is_err());
        assert!(Rating::new(0.0).is_ok());
        assert!(Rating::new(10.0).is_ok());
    }

    #[test]
    fn test_rating_thresholds() {
        assert_eq!(Rating::new(8.0).unwrap().verdict(), "Excellent");
        assert_eq!(Rating::new(6.0).unwrap().verdict(), "Good");
        assert_eq!(Rating::new(5.9).unwrap().verdict(), "Needs Improvement");

        assert_eq!(Rating::new(8.5).unwrap().badge(), RatingBadge::Excellent);
        assert_eq!(Rating::new(8.4).unwrap().badge(), RatingBadge::Good);
        assert_eq!(Rating::new(6.9).unwrap().badge().label(), "Needs Work");
    }

    #[test]
    fn test_out_of_range_rating_fails_deserialization() {
        let json = r#"{
            "name": "A", "email": "a@b.c", "phone": "1",
            "extracted_data": {
                "core_skills": ["Rust"], "soft_skills": ["Focus"],
                "experience_years": 1, "education": "None"
            },
            "llm_analysis": {
                "resume_rating": 11.0,
                "improvement_areas": "",
                "upskill_suggestions": []
            }
        }"#;

        let result: Result<AnalysisRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_requires_skills() {
        assert!(record(&["Rust"], &["Focus"], 5.0).validate().is_ok());
        assert!(matches!(
            record(&[], &["Focus"], 5.0).validate(),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            record(&["Rust"], &[], 5.0).validate(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_history_rejects_duplicate_ids() {
        let entry = |id| HistoryEntry {
            id,
            filename: format!("{}.pdf", id),
            uploaded_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            listed_rating: None,
            record: record(&["Rust"], &["Focus"], 7.0),
        };

        assert!(validate_history(&[entry(1), entry(2)]).is_ok());
        let err = validate_history(&[entry(1), entry(1)]).unwrap_err();
        assert!(err.to_string().contains("duplicate history id 1"));
    }

    #[test]
    fn test_listed_rating_must_match_analysis() {
        let entry = |listed: Option<f64>| HistoryEntry {
            id: 4,
            filename: "4.pdf".into(),
            uploaded_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            listed_rating: listed.map(|value| Rating::new(value).unwrap()),
            record: record(&["Rust"], &["Focus"], 7.0),
        };

        assert!(validate_history(&[entry(None)]).is_ok());
        assert!(validate_history(&[entry(Some(7.0))]).is_ok());

        let err = validate_history(&[entry(Some(9.5))]).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(err.to_string().contains("lists rating 9.5/10"));
    }

    #[test]
    fn test_format_upload_date() {
        let at = Utc.with_ymd_and_hms(2024, 1, 8, 9, 15, 0).unwrap();
        assert_eq!(format_upload_date(&at), "January 8, 2024 at 09:15 AM");

        let at = Utc.with_ymd_and_hms(2024, 1, 10, 14, 45, 0).unwrap();
        assert_eq!(format_upload_date(&at), "January 10, 2024 at 02:45 PM");
    }

    #[test]
    fn test_invalid_file_type_message() {
        let err = AppError::InvalidFileType("image/png".into());
        assert_eq!(err.to_string(), "Please upload a PDF file");
    }
}
