//! Thumbnails via `FileReader`.

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileReader};

use crate::{AppError, AppResult};

/// Read the whole file into a `data:` URL suitable for an `<img src>`.
pub async fn read_as_data_url(file: &File) -> AppResult<String> {
    let reader = FileReader::new().map_err(|e| AppError::Preview(format!("{:?}", e)))?;

    // Handlers are installed before the read starts so a fast read cannot be missed.
    let promise = Promise::new(&mut |resolve: js_sys::Function, reject: js_sys::Function| {
        let loaded = reader.clone();
        let onload = Closure::once_into_js(move || {
            let result = loaded.result().unwrap_or(JsValue::NULL);
            let _ = resolve.call1(&JsValue::NULL, &result);
        });
        let onerror = Closure::once_into_js(move || {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("failed to read file"));
        });
        reader.set_onload(Some(onload.unchecked_ref()));
        reader.set_onerror(Some(onerror.unchecked_ref()));
    });

    reader
        .read_as_data_url(file)
        .map_err(|e| AppError::Preview(format!("{:?}", e)))?;

    let result = JsFuture::from(promise)
        .await
        .map_err(|e| AppError::Preview(format!("{:?}", e)))?;

    result
        .as_string()
        .ok_or_else(|| AppError::Preview("reader returned no data URL".into()))
}
