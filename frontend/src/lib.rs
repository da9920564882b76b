//! Smart Resume Analyzer - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading resumes and browsing past
//! AI-assisted analyses.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (brand, static links)                                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── TabBar (upload | history)                              │
//! │  └── UploadSection or HistorySection                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Records, ratings and errors
//! - [`state`] - UI state machines (upload flow, history, tabs)
//! - [`components`] - UI components (Upload, History, AnalysisReport, etc.)
//! - [`services`] - Data sources (mock, HTTP) and scoped tasks

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Rating
    Rating, RatingBadge,
    // Records
    AnalysisRecord, ExtractedData, HistoryEntry, LlmAnalysis, UpskillSuggestion,
    validate_history, format_upload_date,
    // Files
    UploadedFile,
    // Errors
    AppError, AppResult,
};

// State
pub use state::{change_tab, select_resume, Tab};

// Components
pub use components::*;

// Services
pub use services::{AnalysisClient, AnalysisService};

// =============================================================================
// Application Entry Point
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    AnalysisClient::from_config().provide();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <Routes>
                <Route path="/" view=MainContent/>
            </Routes>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let (active_tab, set_active_tab) = create_signal(Tab::Upload);
    // Views remount only when the tab really changes
    let shown_tab = create_memo(move |_| active_tab.get());

    let on_analysis_complete = Callback::new(|record: AnalysisRecord| {
        log::info!(
            "🎉 Analysis completed for {} with rating {}",
            record.name,
            record.rating()
        );
    });

    let on_select_resume = Callback::new(move |resume_id: u32| {
        let current = active_tab.get_untracked();
        if let Some(next) = change_tab(current, select_resume(current, resume_id)) {
            set_active_tab.set(next);
        }
    });

    view! {
        <Header/>

        <main class="container">
            <TabBar active=active_tab set_active=set_active_tab/>

            // Only the active view is mounted; switching away cancels its pending tasks
            {move || match shown_tab.get() {
                Tab::Upload => view! {
                    <UploadSection on_analysis_complete=on_analysis_complete/>
                }.into_view(),
                Tab::History => view! {
                    <HistorySection on_select_resume=on_select_resume/>
                }.into_view(),
            }}
        </main>

        <Footer/>
    }
}
