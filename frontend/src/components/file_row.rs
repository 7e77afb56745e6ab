//! A single entry of the upload list.

use std::rc::Rc;

use leptos::*;

use crate::file_list::{BrowserFileList, EntryId, FileEntry, UploadStatus};
use crate::format::{format_bytes_grouped, truncate_display};
use crate::services::copy_text;
use crate::{notify, ToastLevel, Toasts, URL_DISPLAY_MAX_CHARS};

/// What a row renders, detached from the file handle.
#[derive(Clone, Debug, PartialEq)]
struct RowView {
    name: String,
    size: u64,
    url: Option<String>,
    status: UploadStatus,
    preview: Option<Rc<str>>,
}

impl RowView {
    fn of(entry: &FileEntry<web_sys::File>) -> Self {
        Self {
            name: entry.name.clone(),
            size: entry.size,
            url: entry.url.clone(),
            status: entry.status,
            preview: entry.preview.clone(),
        }
    }
}

#[component]
pub fn FileRow(
    id: EntryId,
    files: RwSignal<BrowserFileList>,
    toasts: RwSignal<Toasts>,
    /// Entry currently shown in the preview dialog
    dialog_entry: RwSignal<Option<EntryId>>,
) -> impl IntoView {
    let row = create_memo(move |_| files.with(|list| list.get(id).map(RowView::of)));

    // No URL yet: nothing to copy, no toast.
    let on_copy = move |_| {
        let Some(url) = files.with_untracked(|list| list.copy_target(id).map(str::to_owned)) else {
            return;
        };
        spawn_local(async move {
            match copy_text(&url).await {
                Ok(()) => notify(toasts, ToastLevel::Success, "Copied to clipboard!"),
                Err(e) => notify(toasts, ToastLevel::Error, e.to_string()),
            }
        });
    };

    let on_expand = move |_| dialog_entry.set(Some(id));

    let on_delete = move |_| {
        if dialog_entry.get_untracked() == Some(id) {
            dialog_entry.set(None);
        }
        files.update(|list| {
            list.remove(id);
        });
    };

    view! {
        <div class="file-row">
            <div class="file-row-main">
                <div class="file-thumb">
                    {move || match row.get() {
                        Some(RowView { status: UploadStatus::Uploading, .. }) => view! {
                            <div class="spinner-box"><span class="spinner"></span></div>
                        }.into_view(),
                        Some(RowView { preview: Some(src), .. }) => view! {
                            <img class="thumbnail" src=src alt="Preview"/>
                        }.into_view(),
                        _ => view! {}.into_view(),
                    }}
                </div>
                <div class="file-info">
                    <p class="file-name">{move || row.get().map(|r| r.name).unwrap_or_default()}</p>
                    {move || row.get().and_then(|r| r.url).map(|url| view! {
                        <p class="file-url">
                            <a href=url.clone() target="_blank" rel="noopener">
                                {truncate_display(&url, URL_DISPLAY_MAX_CHARS)}
                            </a>
                        </p>
                    })}
                    <p class="file-size">
                        {move || row.get().map(|r| format!("{} Bytes", format_bytes_grouped(r.size))).unwrap_or_default()}
                        <Show
                            when=move || row.get().map(|r| r.status == UploadStatus::Failed).unwrap_or(false)
                            fallback=|| view! { }
                        >
                            <span class="file-failed">" • upload failed"</span>
                        </Show>
                    </p>
                </div>
            </div>
            <div class="file-actions">
                <button type="button" class="icon-button" title="Copy URL" on:click=on_copy>"⧉"</button>
                <button type="button" class="icon-button" title="Expand" on:click=on_expand>"⤢"</button>
                <button type="button" class="icon-button" title="Delete" on:click=on_delete>"🗑"</button>
            </div>
        </div>
    }
}
