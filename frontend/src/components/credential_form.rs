//! API key entry form.

use leptos::ev::SubmitEvent;
use leptos::*;

use crate::services::{save_credential, LocalStorageKeyStore};
use crate::{notify, ToastLevel, Toasts};

/// Shown while no API key is stored. Submitting persists the key and hides
/// the form.
#[component]
pub fn CredentialForm(
    credential: RwSignal<Option<String>>,
    toasts: RwSignal<Toasts>,
) -> impl IntoView {
    let input_ref = create_node_ref::<leptos::html::Input>();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(input) = input_ref.get() else {
            return;
        };

        match save_credential(&LocalStorageKeyStore::default(), &input.value()) {
            Ok(key) => {
                credential.set(Some(key));
                notify(toasts, ToastLevel::Success, "API key successfully set up!");
            }
            Err(e) => notify(toasts, ToastLevel::Error, e.to_string()),
        }
    };

    view! {
        <div class="credential-panel">
            <p class="credential-warning">"Please add claudinary apikey!"</p>
            <form class="credential-form" on:submit=on_submit>
                <input
                    node_ref=input_ref
                    class="credential-input"
                    type="password"
                    placeholder="RqgsQ_y6J..."
                    autocomplete="off"
                />
                <button type="submit" class="primary-button">"Submit"</button>
            </form>
        </div>
    }
}
