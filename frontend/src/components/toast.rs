//! Toast notifications.
//!
//! Every toast is mirrored to the browser console and removed after
//! [`TOAST_DURATION_MS`], or earlier when clicked.

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::{ToastLevel, Toasts, TOAST_DURATION_MS};

/// Show a toast and schedule its dismissal.
pub fn notify(toasts: RwSignal<Toasts>, level: ToastLevel, message: impl Into<String>) {
    let message = message.into();
    log::log!(level.log_level(), "{}", message);

    let mut id = 0;
    toasts.update(|queue| id = queue.push(level, message));
    schedule_dismiss(toasts, id);
}

/// Remove toast `id` once [`TOAST_DURATION_MS`] has passed.
pub fn schedule_dismiss(toasts: RwSignal<Toasts>, id: u64) {
    Timeout::new(TOAST_DURATION_MS, move || {
        toasts.update(|queue| {
            queue.dismiss(id);
        });
    })
    .forget();
}

#[component]
pub fn ToastStack(toasts: RwSignal<Toasts>) -> impl IntoView {
    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.with(|queue| queue.items().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=toast.level.css_class()
                            on:click=move |_| toasts.update(|queue| {
                                queue.dismiss(id);
                            })
                        >
                            <span class="toast-time">{toast.timestamp}</span>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
