//! Image upload card with drag & drop support.
//!
//! Owns the upload list. Each accepted file gets two fire-and-forget tasks:
//! a preview read and the upload itself. Both report back by entry id.

use leptos::*;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use crate::file_list::{BrowserFileList, EntryId, FileList, SelectedFile};
use crate::services::{
    apply_upload_outcome, read_as_data_url, upload_image, upload_with_store, KeyStore,
    LocalStorageKeyStore,
};
use crate::{
    notify, schedule_dismiss, CredentialForm, FileRow, PreviewDialog, ToastLevel, Toasts, CLOUD_NAME,
};

#[component]
pub fn UploadSection(
    credential: RwSignal<Option<String>>,
    toasts: RwSignal<Toasts>,
) -> impl IntoView {
    let files = create_rw_signal(BrowserFileList::new());
    let dialog_entry = create_rw_signal(None::<EntryId>);
    let (drag_over, set_drag_over) = create_signal(false);
    let (drop_error, set_drop_error) = create_signal(None::<String>);

    let add_files = move |selected: Vec<File>| {
        let batch: Vec<_> = selected.into_iter().map(SelectedFile::from_web_file).collect();
        let count = batch.len();

        let mut outcome = Ok(Vec::new());
        files.update(|list| outcome = list.accept_batch(batch));

        match outcome {
            Ok(ids) => {
                set_drop_error.set(None);
                if count > 0 {
                    log::info!("📥 {} file(s) accepted", count);
                }
                for id in ids {
                    start_entry_tasks(files, toasts, id);
                }
            }
            Err(e) => {
                log::warn!("🚫 Batch rejected: {:?}", e);
                set_drop_error.set(Some(e.to_string()));
            }
        }
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_over.set(true);
    };

    let on_drag_leave = move |_: DragEvent| set_drag_over.set(false);

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_over.set(false);

        if let Some(list) = ev.data_transfer().and_then(|transfer| transfer.files()) {
            add_files(collect_files(&list));
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(list) = input.files() {
            add_files(collect_files(&list));
        }
        // Picking the same file again must fire `change` again.
        input.set_value("");
    };

    let on_forget_key = move |_| match LocalStorageKeyStore::default().clear() {
        Ok(()) => {
            credential.set(None);
            notify(toasts, ToastLevel::Info, "API key removed");
        }
        Err(e) => notify(toasts, ToastLevel::Error, e.to_string()),
    };

    view! {
        <div class="upload-card">
            <div class="card-header">
                <div class="card-icon">"☁️"</div>
                <div>
                    <p class="card-title">"Upload files"</p>
                    <p class="card-subtitle">"Drag and drop your files. Will not be saved."</p>
                </div>
            </div>

            <form on:submit=|ev| ev.prevent_default()>
                <label
                    for="fileInput"
                    on:dragover=on_drag_over
                    on:dragleave=on_drag_leave
                    on:drop=on_drop
                >
                    <div class="drop-zone" class:drag-over=move || drag_over.get()>
                        <div class="drop-icon" class:drag-over=move || drag_over.get()>"⬆"</div>
                        <p class="drop-title">"Choose a file or drag & drop it here"</p>
                        <p class="drop-hint">"JPEG, PNG formats. Up to 50 MB."</p>
                        <div class="select-button">"Select files"</div>
                    </div>
                </label>
                <input
                    type="file"
                    name="file"
                    id="fileInput"
                    class="hidden"
                    multiple=true
                    on:change=on_file_change
                />
            </form>

            <Show
                when=move || credential.with(Option::is_none)
                fallback=move || view! {
                    <div class="credential-set">
                        <span>"API key stored in this browser"</span>
                        <button type="button" class="link-button" on:click=on_forget_key>
                            "Forget API key"
                        </button>
                    </div>
                }
            >
                <CredentialForm credential=credential toasts=toasts/>
            </Show>

            <Show
                when=move || !files.with(FileList::is_empty)
                fallback=|| view! { }
            >
                <div class="file-list">
                    <div class="file-list-summary">
                        {move || {
                            let (total, uploading) = files.with(|list| (list.len(), list.uploading_count()));
                            if uploading > 0 {
                                format!("{} files • {} uploading", total, uploading)
                            } else {
                                format!("{} files", total)
                            }
                        }}
                    </div>
                    <For
                        each=move || files.with(FileList::ids)
                        key=|id| *id
                        children=move |id| view! {
                            <FileRow id=id files=files toasts=toasts dialog_entry=dialog_entry/>
                        }
                    />
                </div>
            </Show>

            <Show
                when=move || drop_error.get().is_some()
                fallback=|| view! { }
            >
                <p class="drop-error">{move || drop_error.get().unwrap_or_default()}</p>
            </Show>
        </div>

        <PreviewDialog files=files dialog_entry=dialog_entry/>
    }
}

fn collect_files(list: &web_sys::FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Start the preview read and the upload for a freshly accepted entry.
fn start_entry_tasks(files: RwSignal<BrowserFileList>, toasts: RwSignal<Toasts>, id: EntryId) {
    let Some((file, name)) =
        files.with_untracked(|list| list.get(id).map(|entry| (entry.handle.clone(), entry.name.clone())))
    else {
        return;
    };

    let preview_file = file.clone();
    let preview_name = name.clone();
    spawn_local(async move {
        match read_as_data_url(&preview_file).await {
            Ok(data_url) => files.update(|list| {
                list.set_preview(id, data_url);
            }),
            Err(e) => log::warn!("Could not preview {}: {}", preview_name, e),
        }
    });

    spawn_local(async move {
        log::info!("📤 Uploading {}...", name);
        let store = LocalStorageKeyStore::default();
        let outcome = upload_with_store(&store, move |api_key| async move {
            upload_image(CLOUD_NAME, &api_key, &file).await
        })
        .await;

        // Batched so no effect observes `files` while `toasts` is being written.
        let mut error_toast = None;
        batch(|| {
            files.update(|list| {
                toasts.update(|queue| error_toast = apply_upload_outcome(list, queue, id, outcome));
            })
        });
        if let Some(toast_id) = error_toast {
            schedule_dismiss(toasts, toast_id);
        }
    });
}
