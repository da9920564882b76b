//! Resume upload component with drag & drop support.
//!
//! Handles file selection and validation, plays the progress simulation
//! and shows the resulting analysis.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, HtmlInputElement};

use crate::components::{AnalysisReport, FeatureHighlights, Hero, ProgressBar};
use crate::config::RESULT_REVEAL_DELAY_MS;
use crate::services::{AnalysisClient, TaskScope};
use crate::state::{simulate_progress, UploadState};
use crate::{AnalysisRecord, AppError, UploadedFile};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Screen {
    Upload,
    Result,
    Failed,
}

#[component]
pub fn UploadSection(
    /// Invoked with the record once an analysis completes
    #[prop(optional, into)]
    on_analysis_complete: Option<Callback<AnalysisRecord>>,
) -> impl IntoView {
    let state = create_rw_signal(UploadState::new());
    let client = store_value(AnalysisClient::use_client());
    let tasks = store_value(TaskScope::new());

    let screen = create_memo(move |_| {
        state.with(|s| {
            if s.result().is_some() {
                Screen::Result
            } else if s.error().is_some() {
                Screen::Failed
            } else {
                Screen::Upload
            }
        })
    });

    let on_file = Callback::new(move |file: UploadedFile| {
        let mut outcome = Ok(false);
        state.update(|s| outcome = s.begin(&file));

        match outcome {
            Err(err) => alert_user(&err),
            Ok(false) => {}
            Ok(true) => {
                let client = client.get_value();
                tasks.with_value(|scope| {
                    scope.spawn(run_analysis(state, client, file, on_analysis_complete))
                });
            }
        }
    });

    let on_reset = move |_| {
        log::info!("🔄 Resetting upload flow");
        state.update(|s| s.reset());
    };

    view! {
        <div class="upload-flow">
            {move || match screen.get() {
                Screen::Upload => view! {
                    <Hero/>
                    <div class="card upload-card">
                        <h2 class="card-title centered">"Upload Your Resume"</h2>
                        <p class="muted centered">
                            "Upload a PDF file to get detailed analysis and personalized recommendations."
                        </p>
                        <Show
                            when=move || state.with(|s| s.is_analyzing())
                            fallback=move || view! { <DropZone state=state on_file=on_file/> }
                        >
                            <AnalyzingPanel state=state/>
                        </Show>
                    </div>
                    <FeatureHighlights/>
                }.into_view(),
                Screen::Result => state
                    .with_untracked(|s| s.result().cloned())
                    .map(|record| view! {
                        <div class="result-header centered">
                            <div class="success-icon">"✅"</div>
                            <h2>"Analysis Complete!"</h2>
                            <p class="muted">"Your resume has been thoroughly analyzed by our AI system."</p>
                            <button class="btn btn-secondary" on:click=on_reset>"Upload Another Resume"</button>
                        </div>
                        <AnalysisReport record=record/>
                    })
                    .into_view(),
                Screen::Failed => view! {
                    <div class="card error-card centered">
                        <div class="error-icon">"❌"</div>
                        <h2>"Analysis Failed"</h2>
                        <p class="error-message">
                            {move || state.with(|s| s.error().map(ToString::to_string).unwrap_or_default())}
                        </p>
                        <button class="btn btn-primary" on:click=on_reset>"Try Again"</button>
                    </div>
                }.into_view(),
            }}
        </div>
    }
}

#[component]
fn DropZone(state: RwSignal<UploadState>, on_file: Callback<UploadedFile>) -> impl IntoView {
    let zone = create_node_ref::<html::Div>();

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        if !state.with_untracked(|s| s.is_drag_over()) {
            state.update(|s| s.set_drag_over(true));
        }
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        // Moving onto a child element also fires dragleave
        let still_inside = match (zone.get_untracked(), ev.related_target()) {
            (Some(zone), Some(target)) => target
                .dyn_ref::<web_sys::Node>()
                .map(|node| zone.contains(Some(node)))
                .unwrap_or(false),
            _ => false,
        };
        if !still_inside {
            state.update(|s| s.set_drag_over(false));
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        state.update(|s| s.set_drag_over(false));

        let file = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            on_file.call(UploadedFile::from_web(file));
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_file.call(UploadedFile::from_web(file));
        }
        // Allow picking the same file again after a rejection
        input.set_value("");
    };

    view! {
        <div
            class="upload-section"
            class:drag-over=move || state.with(|s| s.is_drag_over())
            node_ref=zone
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            <div class="upload-icon">"📤"</div>
            <div class="upload-text">"Drag and drop your resume here"</div>
            <div class="upload-hint">"or click to browse files"</div>

            <input
                type="file"
                id="resumeInput"
                accept=".pdf"
                style="display:none"
                on:change=on_file_change
            />
            <label for="resumeInput" class="upload-button">
                "Choose PDF File"
            </label>
            <div class="upload-hint">"Supports PDF files up to 10MB"</div>
        </div>
    }
}

#[component]
fn AnalyzingPanel(state: RwSignal<UploadState>) -> impl IntoView {
    view! {
        <div class="analyzing">
            <div class="upload-pulse">"📄"</div>
            <h3>"Analyzing Your Resume..."</h3>
            <p class="muted">"This may take a few moments"</p>
            <ProgressBar percent=Signal::derive(move || state.with(|s| s.progress() as f64))/>
            <p class="muted centered">{move || state.with(|s| s.status_label())}</p>
        </div>
    }
}

/// Progress simulation followed by the data source call.
async fn run_analysis(
    state: RwSignal<UploadState>,
    client: AnalysisClient,
    file: UploadedFile,
    on_complete: Option<Callback<AnalysisRecord>>,
) {
    simulate_progress(TimeoutFuture::new, |step| {
        log::debug!("⏳ Progress {}%", step);
        state.update(|s| {
            s.advance();
        });
    })
    .await;

    TimeoutFuture::new(RESULT_REVEAL_DELAY_MS).await;

    match client.analyze(&file).await {
        Ok(record) => {
            state.update(|s| s.complete(record.clone()));
            if let Some(callback) = on_complete {
                callback.call(record);
            }
        }
        Err(err) => state.update(|s| s.fail(err)),
    }
}

/// Blocking browser alert for a rejected file.
fn alert_user(err: &AppError) {
    log::warn!("⚠️ Rejected file: {}", err);
    if let Err(e) = gloo_utils::window().alert_with_message(&err.to_string()) {
        log::error!("Failed to show alert: {:?}", e);
    }
}
