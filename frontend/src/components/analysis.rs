//! Detailed view of one analysis record.
//!
//! Shared by the upload result page and the history detail modal; the modal
//! uses the compact variant with shorter headings and no verdict line.

use leptos::*;

use crate::components::ProgressBar;
use crate::{AnalysisRecord, UpskillSuggestion};

#[component]
pub fn AnalysisReport(
    record: AnalysisRecord,
    #[prop(optional)] compact: bool,
) -> impl IntoView {
    let rating = record.rating();
    let data = record.extracted_data;
    let analysis = record.analysis;

    let (improvement_title, suggestions_title) = if compact {
        ("Improvement Areas", "Recommended Skills")
    } else {
        ("Areas for Improvement", "Recommended Skills to Learn")
    };

    view! {
        <div class="analysis-report" class:compact=compact>
            // Personal information
            <section class="card">
                <h3 class="card-title">"👤 Personal Information"</h3>
                <div class="info-grid">
                    <div class="info-row"><span class="info-icon">"👤"</span><span class="strong">{record.name}</span></div>
                    <div class="info-row"><span class="info-icon">"✉️"</span><span class="muted">{record.email}</span></div>
                    <div class="info-row"><span class="info-icon">"📞"</span><span class="muted">{record.phone}</span></div>
                </div>
            </section>

            // Rating
            <section class="card">
                <h3 class="card-title">"⭐ Resume Rating"</h3>
                <div class="rating-row">
                    <div class="rating-score">{rating.to_string()}</div>
                    <div class="rating-bar">
                        <ProgressBar percent=Signal::derive(move || rating.percent()) thin=compact/>
                        {(!compact).then(|| view! {
                            <p class="muted rating-verdict">{rating.verdict()}</p>
                        })}
                    </div>
                </div>
            </section>

            // Skills
            <div class="skills-grid">
                <section class="card">
                    <h3 class="card-title">"🏅 Technical Skills"</h3>
                    <SkillBadges skills=data.core_skills variant="badge-secondary"/>
                </section>
                <section class="card">
                    <h3 class="card-title">"📈 Soft Skills"</h3>
                    <SkillBadges skills=data.soft_skills variant="badge-outline"/>
                </section>
            </div>

            {data.certifications.filter(|c| !c.is_empty()).map(|certs| view! {
                <section class="card">
                    <h3 class="card-title">"🎓 Certifications"</h3>
                    <SkillBadges skills=certs variant="badge-outline"/>
                </section>
            })}

            <section class="card">
                <h3 class="card-title">"📈 " {improvement_title}</h3>
                <p class="muted improvement-text">{analysis.improvement_areas}</p>
            </section>

            <section class="card">
                <h3 class="card-title">"💡 " {suggestions_title}</h3>
                <SuggestionList suggestions=analysis.upskill_suggestions/>
            </section>
        </div>
    }
}

#[component]
pub fn SkillBadges(skills: Vec<String>, variant: &'static str) -> impl IntoView {
    view! {
        <div class="badge-list">
            {skills.into_iter().map(|skill| view! {
                <span class=format!("badge {}", variant)>{skill}</span>
            }).collect_view()}
        </div>
    }
}

#[component]
fn SuggestionList(suggestions: Vec<UpskillSuggestion>) -> impl IntoView {
    view! {
        <div class="suggestion-list">
            {suggestions.into_iter().map(|s| view! {
                <div class="suggestion">
                    <h4>{s.skill}</h4>
                    <p class="muted">{s.reason}</p>
                </div>
            }).collect_view()}
        </div>
    }
}
