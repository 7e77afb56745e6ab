//! Upload list state.
//!
//! Ordered collection of selected files and what happened to them. Every
//! entry gets an [`EntryId`] when it is accepted; completions, previews and
//! deletions all address entries by that id, so two files sharing a name
//! never step on each other and upload completion order does not matter.
//!
//! The list is generic over the file handle so the logic can be exercised
//! without a browser. In the app `F` is [`web_sys::File`].
//!
//! ```text
//! accept_batch ──▶ Uploading ──┬──▶ Uploaded(url)
//!                              └──▶ Failed
//! ```

use std::rc::Rc;

use crate::{AppError, AppResult};

/// Unique identifier of a list entry, never reused within one list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl EntryId {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Upload progress of a single entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadStatus {
    /// Request in flight
    Uploading,
    /// Remote URL known
    Uploaded,
    /// Request or response failed; no URL
    Failed,
}

/// A file picked or dropped by the user, before it enters the list.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile<F> {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub handle: F,
}

impl SelectedFile<web_sys::File> {
    pub fn from_web_file(file: web_sys::File) -> Self {
        Self {
            name: file.name(),
            // Browsers report sizes as f64; they are whole, non-negative numbers.
            size: file.size() as u64,
            mime_type: file.type_(),
            handle: file,
        }
    }
}

/// One tracked file.
#[derive(Clone, Debug, PartialEq)]
pub struct FileEntry<F> {
    pub id: EntryId,
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub url: Option<String>,
    pub status: UploadStatus,
    /// `data:` URL of the file contents, once read. Shared so rows can hold
    /// it without copying the encoded image.
    pub preview: Option<Rc<str>>,
    pub handle: F,
}

impl<F> FileEntry<F> {
    pub fn is_uploading(&self) -> bool {
        self.status == UploadStatus::Uploading
    }
}

/// Whether a MIME type has the top-level type `image`.
pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type.split('/').next() == Some("image")
}

/// Check a batch before accepting it. The first non-image file fails the
/// whole batch.
pub fn validate_batch<F>(files: &[SelectedFile<F>]) -> AppResult<()> {
    match files.iter().find(|file| !is_image_mime(&file.mime_type)) {
        Some(file) => Err(AppError::InvalidFileType {
            name: file.name.clone(),
            mime_type: file.mime_type.clone(),
        }),
        None => Ok(()),
    }
}

/// The upload list as used by the browser app.
pub type BrowserFileList = FileList<web_sys::File>;

/// The upload list.
#[derive(Clone, Debug)]
pub struct FileList<F> {
    next_id: u64,
    entries: Vec<FileEntry<F>>,
}

impl<F> Default for FileList<F> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<F> FileList<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a batch of files, all or nothing.
    ///
    /// Accepted entries start out [`UploadStatus::Uploading`]; the returned
    /// ids are in submission order and the caller is expected to start a
    /// preview read and an upload for each.
    pub fn accept_batch(&mut self, files: Vec<SelectedFile<F>>) -> AppResult<Vec<EntryId>> {
        validate_batch(&files)?;

        let mut ids = Vec::with_capacity(files.len());
        for file in files {
            let id = EntryId(self.next_id);
            self.next_id += 1;
            self.entries.push(FileEntry {
                id,
                name: file.name,
                size: file.size,
                mime_type: file.mime_type,
                url: None,
                status: UploadStatus::Uploading,
                preview: None,
                handle: file.handle,
            });
            ids.push(id);
        }
        Ok(ids)
    }

    /// Record a successful upload. Returns `false` when the entry is gone
    /// (deleted while its request was in flight) or already settled.
    pub fn complete_upload(&mut self, id: EntryId, url: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(entry) if entry.is_uploading() => {
                entry.url = Some(url.into());
                entry.status = UploadStatus::Uploaded;
                true
            }
            _ => false,
        }
    }

    /// Record a failed upload. The entry keeps no URL.
    pub fn fail_upload(&mut self, id: EntryId) -> bool {
        match self.get_mut(id) {
            Some(entry) if entry.is_uploading() => {
                entry.status = UploadStatus::Failed;
                true
            }
            _ => false,
        }
    }

    /// Attach a thumbnail. A later read for the same entry overwrites it.
    pub fn set_preview(&mut self, id: EntryId, data_url: impl Into<Rc<str>>) -> bool {
        match self.get_mut(id) {
            Some(entry) => {
                entry.preview = Some(data_url.into());
                true
            }
            None => false,
        }
    }

    /// Delete a single entry.
    pub fn remove(&mut self, id: EntryId) -> Option<FileEntry<F>> {
        let pos = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(pos))
    }

    /// Delete every entry carrying `name`. Returns how many were removed.
    ///
    /// Not used by the UI, which deletes single entries with [`Self::remove`];
    /// names are not unique, so this drops every same-named file at once.
    pub fn remove_by_name(&mut self, name: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.name != name);
        before - self.entries.len()
    }

    /// URL to put on the clipboard, if the entry has one yet.
    pub fn copy_target(&self, id: EntryId) -> Option<&str> {
        self.get(id)?.url.as_deref()
    }

    pub fn get(&self, id: EntryId) -> Option<&FileEntry<F>> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    fn get_mut(&mut self, id: EntryId) -> Option<&mut FileEntry<F>> {
        self.entries.iter_mut().find(|entry| entry.id == id)
    }

    pub fn entries(&self) -> &[FileEntry<F>] {
        &self.entries
    }

    pub fn ids(&self) -> Vec<EntryId> {
        self.entries.iter().map(|entry| entry.id).collect()
    }

    pub fn uploading_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_uploading()).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(name: &str, size: u64) -> SelectedFile<()> {
        SelectedFile {
            name: name.to_string(),
            size,
            mime_type: "image/jpeg".to_string(),
            handle: (),
        }
    }

    fn other(name: &str, mime_type: &str) -> SelectedFile<()> {
        SelectedFile {
            name: name.to_string(),
            size: 10,
            mime_type: mime_type.to_string(),
            handle: (),
        }
    }

    fn names(list: &FileList<()>) -> Vec<&str> {
        list.entries().iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_image_mime_detection() {
        assert!(is_image_mime("image/png"));
        assert!(is_image_mime("image/svg+xml"));
        assert!(is_image_mime("image"));
        assert!(!is_image_mime(""));
        assert!(!is_image_mime("application/pdf"));
        assert!(!is_image_mime("text/image"));
    }

    #[test]
    fn test_batch_with_non_image_adds_nothing() {
        let mut list = FileList::new();
        list.accept_batch(vec![image("kept.png", 1)]).unwrap();

        let err = list
            .accept_batch(vec![
                image("a.jpg", 1),
                other("notes.txt", "text/plain"),
                image("b.jpg", 2),
            ])
            .unwrap_err();

        assert_eq!(
            err,
            AppError::InvalidFileType {
                name: "notes.txt".into(),
                mime_type: "text/plain".into(),
            }
        );
        assert_eq!(err.to_string(), "Please provide only image files to upload!");
        assert_eq!(names(&list), vec!["kept.png"]);
    }

    #[test]
    fn test_file_without_mime_type_is_rejected() {
        let mut list = FileList::new();
        assert!(list.accept_batch(vec![other("mystery", "")]).is_err());
        assert!(list.is_empty());
    }

    #[test]
    fn test_image_batch_appends_in_order() {
        let mut list = FileList::new();
        let first = list.accept_batch(vec![image("a.jpg", 1), image("b.jpg", 2)]).unwrap();
        let second = list.accept_batch(vec![image("c.jpg", 3)]).unwrap();

        assert_eq!(names(&list), vec!["a.jpg", "b.jpg", "c.jpg"]);
        assert_eq!(list.ids(), [first, second].concat());
        assert!(list.entries().iter().all(|e| e.status == UploadStatus::Uploading));
        assert!(list.entries().iter().all(|e| e.url.is_none()));
        assert_eq!(list.uploading_count(), 3);
    }

    #[test]
    fn test_same_name_files_get_distinct_entries() {
        let mut list = FileList::new();
        let ids = list
            .accept_batch(vec![image("photo.jpg", 1), image("photo.jpg", 2)])
            .unwrap();

        assert_eq!(list.len(), 2);
        assert_ne!(ids[0], ids[1]);

        list.complete_upload(ids[1], "https://res.cloudinary.com/x/second.jpg");
        assert_eq!(list.get(ids[0]).unwrap().url, None);
        assert_eq!(
            list.copy_target(ids[1]),
            Some("https://res.cloudinary.com/x/second.jpg")
        );
    }

    #[test]
    fn test_single_upload_scenario() {
        let mut list = FileList::new();
        let ids = list.accept_batch(vec![image("a.jpg", 2 * 1024 * 1024)]).unwrap();
        let id = ids[0];

        assert!(list.get(id).unwrap().is_uploading());

        assert!(list.complete_upload(id, "https://res.cloudinary.com/demo/a.jpg"));
        let entry = list.get(id).unwrap();
        assert_eq!(entry.url.as_deref(), Some("https://res.cloudinary.com/demo/a.jpg"));
        assert_eq!(entry.status, UploadStatus::Uploaded);
        assert!(!entry.is_uploading());
    }

    #[test]
    fn test_failed_upload_clears_loading_without_url() {
        let mut list = FileList::new();
        let id = list.accept_batch(vec![image("a.jpg", 1)]).unwrap()[0];

        assert!(list.fail_upload(id));
        let entry = list.get(id).unwrap();
        assert_eq!(entry.status, UploadStatus::Failed);
        assert_eq!(entry.url, None);
        assert_eq!(list.uploading_count(), 0);
        // No way back from a terminal state.
        assert!(!list.complete_upload(id, "https://late"));
        assert_eq!(list.get(id).unwrap().url, None);
    }

    #[test]
    fn test_out_of_order_completion_updates_matching_entry() {
        let mut list = FileList::new();
        let slow = list.accept_batch(vec![image("a-large.jpg", 9_000_000)]).unwrap()[0];
        let fast = list.accept_batch(vec![image("b-small.jpg", 1_000)]).unwrap()[0];

        // B answers first.
        list.complete_upload(fast, "https://res.cloudinary.com/demo/b.jpg");
        assert_eq!(list.get(slow).unwrap().url, None);
        assert!(list.get(slow).unwrap().is_uploading());
        assert_eq!(
            list.get(fast).unwrap().url.as_deref(),
            Some("https://res.cloudinary.com/demo/b.jpg")
        );

        list.complete_upload(slow, "https://res.cloudinary.com/demo/a.jpg");
        assert_eq!(
            list.get(slow).unwrap().url.as_deref(),
            Some("https://res.cloudinary.com/demo/a.jpg")
        );
        assert_eq!(
            list.get(fast).unwrap().url.as_deref(),
            Some("https://res.cloudinary.com/demo/b.jpg")
        );
    }

    #[test]
    fn test_completion_after_delete_is_ignored() {
        let mut list = FileList::new();
        let ids = list.accept_batch(vec![image("a.jpg", 1), image("b.jpg", 1)]).unwrap();

        assert!(list.remove(ids[0]).is_some());
        assert!(!list.complete_upload(ids[0], "https://late/a.jpg"));
        assert!(!list.set_preview(ids[0], "data:image/jpeg;base64,AAAA"));

        let survivor = list.get(ids[1]).unwrap();
        assert_eq!(survivor.url, None);
        assert_eq!(survivor.preview, None);
    }

    #[test]
    fn test_remove_by_name_removes_all_matches_only() {
        let mut list = FileList::new();
        list.accept_batch(vec![
            image("dup.png", 1),
            image("keep.png", 2),
            image("dup.png", 3),
            image("dup.png.bak.png", 4),
        ])
        .unwrap();

        assert_eq!(list.remove_by_name("dup.png"), 2);
        assert_eq!(names(&list), vec!["keep.png", "dup.png.bak.png"]);
        assert_eq!(list.remove_by_name("missing.png"), 0);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_remove_by_id_removes_exactly_one() {
        let mut list = FileList::new();
        let ids = list
            .accept_batch(vec![image("dup.png", 1), image("dup.png", 2)])
            .unwrap();

        let removed = list.remove(ids[0]).unwrap();
        assert_eq!(removed.size, 1);
        assert_eq!(list.ids(), vec![ids[1]]);
        assert!(list.remove(ids[0]).is_none());
    }

    #[test]
    fn test_copy_target_requires_url() {
        let mut list = FileList::new();
        let id = list.accept_batch(vec![image("a.jpg", 1)]).unwrap()[0];

        assert_eq!(list.copy_target(id), None);
        list.complete_upload(id, "https://res.cloudinary.com/demo/a.jpg");
        assert_eq!(list.copy_target(id), Some("https://res.cloudinary.com/demo/a.jpg"));
    }

    #[test]
    fn test_preview_is_bound_to_its_entry() {
        let mut list = FileList::new();
        let ids = list.accept_batch(vec![image("a.jpg", 1), image("b.jpg", 1)]).unwrap();

        list.set_preview(ids[1], "data:image/jpeg;base64,BBBB");
        assert_eq!(list.get(ids[0]).unwrap().preview, None);
        assert_eq!(
            list.get(ids[1]).unwrap().preview.as_deref(),
            Some("data:image/jpeg;base64,BBBB")
        );

        list.set_preview(ids[1], "data:image/jpeg;base64,CCCC");
        assert_eq!(
            list.get(ids[1]).unwrap().preview.as_deref(),
            Some("data:image/jpeg;base64,CCCC")
        );
    }

    #[test]
    fn test_preview_clones_share_the_data_url() {
        let mut list = FileList::new();
        let id = list.accept_batch(vec![image("a.jpg", 1)]).unwrap()[0];
        list.set_preview(id, format!("data:image/jpeg;base64,{}", "A".repeat(4096)));

        let first = list.get(id).unwrap().preview.clone().unwrap();
        let second = list.clone().get(id).unwrap().preview.clone().unwrap();
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(Rc::strong_count(&first), 3);
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut list = FileList::new();
        let first = list.accept_batch(vec![image("a.jpg", 1)]).unwrap()[0];
        list.remove(first);
        let second = list.accept_batch(vec![image("a.jpg", 1)]).unwrap()[0];
        assert_ne!(first, second);
        assert!(second.get() > first.get());
    }
}
