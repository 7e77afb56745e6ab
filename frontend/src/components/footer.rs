//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"Images go straight from your browser to Cloudinary • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-links">
                <a href="https://cloudinary.com/documentation/image_upload_api_reference" class="footer-link" target="_blank">
                    "Upload API"
                </a>
                <a href="https://console.cloudinary.com/settings/api-keys" class="footer-link" target="_blank">
                    "API keys"
                </a>
            </div>
        </footer>
    }
}
