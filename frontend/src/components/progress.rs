//! Horizontal progress bar.

use leptos::*;

/// Bar filled to `percent` (0–100).
#[component]
pub fn ProgressBar(
    #[prop(into)] percent: Signal<f64>,
    #[prop(optional)] thin: bool,
) -> impl IntoView {
    view! {
        <div class="progress-bar" class:thin=thin>
            <div
                class="progress-fill"
                style:width=move || format!("{:.0}%", percent.get().clamp(0.0, 100.0))
            ></div>
        </div>
    }
}
