//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Blodinary"</h1>
            <p class="subtitle">"Upload blob file to Claudinary"</p>
        </div>
    }
}
