//! Resume analysis history with aggregate stats and per-entry details.

use chrono::Local;
use leptos::*;

use crate::components::{HistoryDetail, SkillBadges};
use crate::services::{AnalysisClient, TaskScope};
use crate::state::{skill_preview, HistoryState, UPLOAD_SENTINEL_ID};
use crate::{format_upload_date, HistoryEntry};

#[component]
pub fn HistorySection(
    /// Invoked with a resume id; `0` asks the page to show the upload view
    #[prop(optional, into)]
    on_select_resume: Option<Callback<u32>>,
) -> impl IntoView {
    let state = create_rw_signal(HistoryState::default());
    let selected = create_rw_signal(None::<HistoryEntry>);

    let client = AnalysisClient::use_client();
    let tasks = TaskScope::new();

    log::info!("📚 Loading resume history from {} source", client.name());
    tasks.spawn(async move {
        let loaded = match client.history().await {
            Ok(entries) => HistoryState::Loaded(entries),
            Err(err) => {
                log::error!("❌ Failed to load history: {}", err);
                HistoryState::Failed(err)
            }
        };
        state.set(loaded);
    });

    let stats = create_memo(move |_| state.with(|s| s.stats()));

    let on_upload_instead = move |_| {
        log::info!("📤 Empty history, switching to upload");
        if let Some(callback) = on_select_resume {
            callback.call(UPLOAD_SENTINEL_ID);
        }
    };

    view! {
        <div class="history">
            <Show
                when=move || !state.with(|s| s.is_loading())
                fallback=|| view! { <HistorySkeleton/> }
            >
                <div class="section-header centered">
                    <div class="section-icon">"🕘"</div>
                    <h2>"Resume Analysis History"</h2>
                    <p class="muted">"View and compare your previous resume analyses"</p>
                </div>

                <div class="stats-grid">
                    <div class="card stat">
                        <div class="stat-value">{move || stats.with(|s| s.count)}</div>
                        <div class="muted">"Total Analyses"</div>
                    </div>
                    <div class="card stat">
                        <div class="stat-value">{move || stats.with(|s| s.highest_display())}</div>
                        <div class="muted">"Highest Rating"</div>
                    </div>
                    <div class="card stat">
                        <div class="stat-value">{move || stats.with(|s| s.average_display())}</div>
                        <div class="muted">"Average Rating"</div>
                    </div>
                </div>

                <div class="history-list">
                    <h3>"Your Resume Analyses"</h3>
                    {move || state.with(|s| {
                        if let HistoryState::Failed(err) = s {
                            view! { <div class="card error-message">{err.to_string()}</div> }.into_view()
                        } else if s.is_empty() {
                            view! {
                                <div class="card empty-state centered">
                                    <div class="empty-icon">"📄"</div>
                                    <h3>"No Resumes Analyzed Yet"</h3>
                                    <p class="muted">"Upload your first resume to get started with AI-powered analysis"</p>
                                    <button class="btn btn-primary" on:click=on_upload_instead>"Upload Resume"</button>
                                </div>
                            }.into_view()
                        } else {
                            s.entries()
                                .iter()
                                .cloned()
                                .map(|entry| view! { <HistoryRow entry=entry selected=selected/> })
                                .collect_view()
                        }
                    })}
                </div>
            </Show>

            <HistoryDetail selected=selected/>
        </div>
    }
}

#[component]
fn HistoryRow(entry: HistoryEntry, selected: RwSignal<Option<HistoryEntry>>) -> impl IntoView {
    let rating = entry.rating();
    let badge = rating.badge();
    let uploaded = format_upload_date(&entry.uploaded_at.with_timezone(&Local));
    let (preview, more) = skill_preview(&entry);
    let preview = preview.to_vec();

    let on_view = {
        let entry = entry.clone();
        move |_| {
            log::debug!("🔍 Opening details for #{}", entry.id);
            selected.set(Some(entry.clone()));
        }
    };

    view! {
        <div class="card history-row">
            <div class="history-summary">
                <div class="history-title">
                    <span>"📄"</span>
                    <h3>{entry.filename}</h3>
                    <span class=format!("badge {}", badge.css_class())>{badge.label()}</span>
                </div>
                <div class="info-grid muted">
                    <div class="info-row">"👤 " {entry.record.name}</div>
                    <div class="info-row">"📅 " {uploaded}</div>
                    <div class="info-row">"✉️ " {entry.record.email}</div>
                    <div class="info-row">
                        "⭐ " <span class=format!("strong {}", badge.css_class())>{rating.to_string()}</span>
                    </div>
                </div>
                <div class="skill-preview">
                    <SkillBadges skills=preview variant="badge-outline badge-small"/>
                    {(more > 0).then(|| view! {
                        <span class="badge badge-outline badge-small">"+" {more} " more"</span>
                    })}
                </div>
            </div>
            <button class="btn btn-secondary" on:click=on_view>"👁 View Details"</button>
        </div>
    }
}

#[component]
fn HistorySkeleton() -> impl IntoView {
    view! {
        <div class="section-header centered">
            <div class="section-icon">"🕘"</div>
            <h2>"Loading Resume History..."</h2>
            <p class="muted">"Fetching your previous analyses"</p>
        </div>
        <div class="history-list">
            {(0..3).map(|_| view! {
                <div class="card history-row skeleton">
                    <div class="skeleton-lines">
                        <div class="skeleton-line w-third"></div>
                        <div class="skeleton-line w-half"></div>
                        <div class="skeleton-line w-quarter"></div>
                    </div>
                    <div class="skeleton-button"></div>
                </div>
            }).collect_view()}
        </div>
    }
}
