//! UI Components for the Blodinary widget.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Hero`] - Title and tagline
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - Drop zone, file picker and the upload list
//! - [`FileRow`] - One entry of the upload list
//! - [`PreviewDialog`] - Enlarged preview of one entry
//! - [`CredentialForm`] - API key entry, shown while no key is stored
//! - [`ToastStack`] - Transient notifications

mod hero;
mod upload;
mod file_row;
mod preview_dialog;
mod credential_form;
mod toast;
mod footer;

pub use hero::*;
pub use upload::*;
pub use file_row::*;
pub use preview_dialog::*;
pub use credential_form::*;
pub use toast::*;
pub use footer::*;
