//! Footer component

use leptos::*;

use crate::APP_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div class="footer-grid">
                <div class="footer-column">
                    <div class="brand">"🧠 " {APP_NAME}</div>
                    <p class="muted">"AI-powered resume analysis to help you land your dream job."</p>
                </div>
                <div class="footer-column">
                    <h3>"Features"</h3>
                    <ul>
                        <li>"⭐ AI-Powered Analysis"</li>
                        <li>"📈 Skill Assessment"</li>
                        <li>"💡 Career Guidance"</li>
                    </ul>
                </div>
                <div class="footer-column">
                    <h3>"Technology"</h3>
                    <ul>
                        <li>"Rust + WebAssembly"</li>
                        <li>"Leptos"</li>
                        <li>"Pluggable analysis backend"</li>
                    </ul>
                </div>
                <div class="footer-column">
                    <h3>"Support"</h3>
                    <ul>
                        <li><a href="#" class="footer-link">"Documentation"</a></li>
                        <li><a href="#" class="footer-link">"Contact Us"</a></li>
                        <li><a href="#" class="footer-link">"Privacy Policy"</a></li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                "© 2024 " {APP_NAME} " • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span>
            </div>
        </footer>
    }
}
