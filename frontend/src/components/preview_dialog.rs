//! Enlarged preview of one upload list entry.
//!
//! The dialog shows whichever entry `dialog_entry` points at and reads its
//! preview from the list at render time, so it never shows another file's
//! image. Closing it or deleting the entry hides it.

use leptos::*;

use crate::file_list::{BrowserFileList, EntryId};

#[component]
pub fn PreviewDialog(
    files: RwSignal<BrowserFileList>,
    dialog_entry: RwSignal<Option<EntryId>>,
) -> impl IntoView {
    // (name, preview)
    let selected = create_memo(move |_| {
        let id = dialog_entry.get()?;
        files.with(|list| list.get(id).map(|entry| (entry.name.clone(), entry.preview.clone())))
    });

    let close = move |_| dialog_entry.set(None);

    view! {
        <Show
            when=move || selected.with(Option::is_some)
            fallback=|| view! { }
        >
            <div class="dialog-backdrop" on:click=close>
                <div class="dialog" on:click=|ev| ev.stop_propagation()>
                    <div class="dialog-header">
                        <h2 class="dialog-title">
                            {move || selected.get().map(|(name, _)| name).unwrap_or_default()}
                        </h2>
                        <button type="button" class="icon-button" title="Close" on:click=close>"✕"</button>
                    </div>
                    <div class="dialog-body">
                        {move || match selected.get().and_then(|(_, preview)| preview) {
                            Some(src) => view! {
                                <img class="dialog-image" src=src alt="Preview"/>
                            }.into_view(),
                            None => view! { <span class="spinner"></span> }.into_view(),
                        }}
                    </div>
                </div>
            </div>
        </Show>
    }
}
