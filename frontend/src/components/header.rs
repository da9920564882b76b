use leptos::*;

use crate::state::change_tab;
use crate::{Tab, APP_NAME};

/// Top navigation bar. Static apart from the brand.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <span class="logo">"🧠"</span>
                <span class="brand">{APP_NAME}</span>
            </div>
            <div class="header-right">
                <button class="btn btn-ghost">"About"</button>
                <button class="btn btn-ghost">"Help"</button>
            </div>
        </header>
    }
}

/// Upload / History selector.
#[component]
pub fn TabBar(active: ReadSignal<Tab>, set_active: WriteSignal<Tab>) -> impl IntoView {
    view! {
        <nav class="tab-bar">
            {Tab::ALL.into_iter().map(|tab| view! {
                <button
                    class="tab"
                    class:active=move || active.get() == tab
                    on:click=move |_| {
                        if let Some(next) = change_tab(active.get_untracked(), tab) {
                            log::debug!("🗂️ Switching to {:?}", next);
                            set_active.set(next);
                        }
                    }
                >
                    {tab.icon()} " " {tab.label()}
                </button>
            }).collect_view()}
        </nav>
    }
}
