//! Modal with the full analysis of a history entry.

use chrono::Local;
use leptos::*;

use crate::components::AnalysisReport;
use crate::{format_upload_date, HistoryEntry};

/// Shown while `selected` holds an entry; closing clears it.
#[component]
pub fn HistoryDetail(selected: RwSignal<Option<HistoryEntry>>) -> impl IntoView {
    let close = move |_| selected.set(None);

    view! {
        {move || selected.get().map(|entry| {
            let uploaded = format_upload_date(&entry.uploaded_at.with_timezone(&Local));
            view! {
                <div class="modal-backdrop" on:click=close>
                    <div
                        class="modal"
                        role="dialog"
                        aria-modal="true"
                        on:click=|ev| ev.stop_propagation()
                    >
                        <div class="modal-header">
                            <div>
                                <h2 class="modal-title">"📄 " {entry.filename}</h2>
                                <p class="muted">"Detailed analysis from " {uploaded}</p>
                            </div>
                            <button class="btn btn-ghost modal-close" on:click=close>"✕"</button>
                        </div>
                        <AnalysisReport record=entry.record compact=true/>
                    </div>
                </div>
            }
        })}
    }
}
