//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Toast Types** - User-facing notifications
//! - **API Types** - Cloudinary response structures
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Toast Types
// =============================================================================

/// Toast severity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    /// Operation completed
    Success,
    /// Something went wrong
    Error,
    /// Informational message
    Info,
}

impl ToastLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastLevel::Success => "toast toast-success",
            ToastLevel::Error => "toast toast-error",
            ToastLevel::Info => "toast toast-info",
        }
    }

    /// Console level the toast is mirrored at.
    pub fn log_level(&self) -> log::Level {
        match self {
            ToastLevel::Success | ToastLevel::Info => log::Level::Info,
            ToastLevel::Error => log::Level::Error,
        }
    }
}

/// A single notification shown in the toast stack.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    /// Identifier used for dismissal
    pub id: u64,
    /// Severity level
    pub level: ToastLevel,
    /// Message shown to the user
    pub message: String,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

/// Ordered queue of visible toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Toasts {
    next_id: u64,
    items: Vec<Toast>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a toast stamped with the current local time.
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> u64 {
        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        self.push_at(level, message, timestamp)
    }

    /// Push a toast with an explicit timestamp. Returns its id.
    pub fn push_at(
        &mut self,
        level: ToastLevel,
        message: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            level,
            message: message.into(),
            timestamp: timestamp.into(),
        });
        id
    }

    /// Remove a toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|toast| toast.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// Successful response from the Cloudinary upload endpoint.
///
/// Only `url` is required; the rest is informational and tolerated when absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadedAsset {
    /// Public URL of the stored image
    pub url: String,
    /// HTTPS variant of `url`
    #[serde(default)]
    pub secure_url: Option<String>,
    /// Cloudinary asset identifier
    #[serde(default)]
    pub public_id: Option<String>,
    /// Detected format ("jpg", "png", ...)
    #[serde(default)]
    pub format: Option<String>,
    /// Stored size in bytes
    #[serde(default)]
    pub bytes: Option<u64>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations. The `Display` text is
/// what ends up in toasts and inline messages.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AppError {
    /// No API key stored.
    #[error("Please set up your Cloudinary API key first!")]
    MissingCredential,

    /// Submitted API key was blank.
    #[error("API key cannot be empty")]
    EmptyCredential,

    /// A selected file is not an image. Blocks the whole batch.
    #[error("Please provide only image files to upload!")]
    InvalidFileType { name: String, mime_type: String },

    /// Local storage unavailable or failing.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Network/HTTP error.
    #[error("Network error: {0}")]
    Network(String),

    /// Cloudinary answered with an error payload.
    #[error("Upload rejected: {0}")]
    Remote(String),

    /// Response body did not have the expected shape.
    #[error("Invalid upload response: {0}")]
    Parse(String),

    /// Reading the file for a thumbnail failed.
    #[error("Preview error: {0}")]
    Preview(String),

    /// Clipboard write failed.
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_push_and_dismiss() {
        let mut toasts = Toasts::new();
        let first = toasts.push_at(ToastLevel::Success, "Copied to clipboard!", "10:00:00");
        let second = toasts.push_at(ToastLevel::Error, "boom", "10:00:01");
        assert_ne!(first, second);
        assert_eq!(toasts.items().len(), 2);

        assert!(toasts.dismiss(first));
        assert!(!toasts.dismiss(first));
        assert_eq!(toasts.items()[0].message, "boom");
        assert_eq!(toasts.items()[0].level, ToastLevel::Error);
    }

    #[test]
    fn test_toast_ids_are_not_reused() {
        let mut toasts = Toasts::new();
        let id = toasts.push_at(ToastLevel::Info, "a", "00:00:00");
        toasts.dismiss(id);
        let next = toasts.push_at(ToastLevel::Info, "b", "00:00:00");
        assert!(next > id);
        assert!(!toasts.is_empty());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AppError::MissingCredential.to_string(),
            "Please set up your Cloudinary API key first!"
        );
        let err = AppError::InvalidFileType {
            name: "notes.txt".into(),
            mime_type: "text/plain".into(),
        };
        assert_eq!(err.to_string(), "Please provide only image files to upload!");
        assert_eq!(
            AppError::Remote("Invalid api_key".into()).to_string(),
            "Upload rejected: Invalid api_key"
        );
    }

    #[test]
    fn test_asset_deserialization_with_extra_fields() {
        let json = r#"{
            "asset_id": "b5e6d2b39ba3e0869d67141ba7dba6cf",
            "public_id": "eneivicys42bq5f2jpn2",
            "version": 1570979139,
            "width": 864,
            "height": 576,
            "format": "jpg",
            "resource_type": "image",
            "bytes": 120253,
            "url": "http://res.cloudinary.com/demo/image/upload/v1570979139/eneivicys42bq5f2jpn2.jpg",
            "secure_url": "https://res.cloudinary.com/demo/image/upload/v1570979139/eneivicys42bq5f2jpn2.jpg"
        }"#;

        let asset: UploadedAsset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.format.as_deref(), Some("jpg"));
        assert_eq!(asset.bytes, Some(120253));
        assert_eq!(asset.width, Some(864));
        assert!(asset.url.starts_with("http://res.cloudinary.com/"));
    }
}
