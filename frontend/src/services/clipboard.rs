//! Clipboard access.

use wasm_bindgen_futures::JsFuture;

use crate::{AppError, AppResult};

/// Write `text` to the system clipboard.
pub async fn copy_text(text: &str) -> AppResult<()> {
    let clipboard = gloo_utils::window().navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map_err(|e| AppError::Clipboard(format!("{:?}", e)))?;
    Ok(())
}
