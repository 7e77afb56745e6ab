//! Browser and Cloudinary services.
//!
//! This module provides everything that talks to something outside the
//! Leptos component tree:
//!
//! # Services
//!
//! - [`key_store`] - API key persisted in local storage
//! - [`upload`] - Multipart upload to the Cloudinary REST API
//! - [`preview`] - `FileReader` thumbnails as `data:` URLs
//! - [`clipboard`] - Async clipboard writes

pub mod key_store;
pub mod upload;
pub mod preview;
pub mod clipboard;

pub use key_store::*;
pub use upload::*;
pub use preview::*;
pub use clipboard::*;
