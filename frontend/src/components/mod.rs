//! UI Components for the Smart Resume Analyzer.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Navigation bar
//! - [`TabBar`] - Upload / History selector
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - PDF upload with drag & drop and simulated progress
//! - [`HistorySection`] - Past analyses with aggregate stats
//! - `HistoryDetail` - Modal with the full analysis of a past entry
//! - [`AnalysisReport`] - Detailed view of one analysis record
//! - [`ProgressBar`] - Proportional progress indicator

mod header;
mod hero;
mod upload;
mod analysis;
mod history;
mod history_detail;
mod progress;
mod footer;

pub use header::*;
pub use hero::*;
pub use upload::*;
pub use analysis::*;
pub use history::*;
pub use history_detail::*;
pub use progress::*;
pub use footer::*;
