//! Hero section and feature highlights

use leptos::*;

use crate::APP_NAME;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>{APP_NAME}</h1>
            <p class="subtitle">
                "Get AI-powered insights to improve your resume and advance your career"
            </p>
        </div>
    }
}

#[component]
pub fn FeatureHighlights() -> impl IntoView {
    let features = [
        ("📄", "Smart Extraction", "Automatically extracts and organizes your information"),
        ("📈", "AI Analysis", "Get personalized feedback from advanced AI models"),
        ("💡", "Career Guidance", "Receive actionable recommendations for improvement"),
    ];

    view! {
        <div class="feature-grid">
            {features.into_iter().map(|(icon, title, text)| view! {
                <div class="card feature-card">
                    <div class="feature-icon">{icon}</div>
                    <h3>{title}</h3>
                    <p class="muted">{text}</p>
                </div>
            }).collect_view()}
        </div>
    }
}
