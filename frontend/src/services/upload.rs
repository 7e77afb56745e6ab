//! Image upload to Cloudinary.
//!
//! One unsigned multipart POST per file to
//! `https://api.cloudinary.com/v1_1/{cloud}/image/upload` with the fields
//! `file`, `api_key` and `upload_preset`. No retry, no timeout: a failed or
//! stalled request surfaces as a single error to the caller.

use std::future::Future;

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::{upload_url, UPLOAD_PRESET};
use crate::file_list::{EntryId, FileList};
use crate::services::key_store::{require_credential, KeyStore};
use crate::{AppError, AppResult, ToastLevel, Toasts, UploadedAsset};

/// Run `send` with the key held by `store`.
///
/// Fails with [`AppError::MissingCredential`] without calling `send` when no
/// key is stored. In the app `send` is [`upload_image`] for one file.
pub async fn upload_with_store<S, F, Fut>(store: &S, send: F) -> AppResult<UploadedAsset>
where
    S: KeyStore,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = AppResult<UploadedAsset>>,
{
    let api_key = require_credential(store)?;
    send(api_key).await
}

/// Record how an entry's upload ended.
///
/// Success stores the URL on the entry. Failure clears its loading state
/// and queues an error toast, whose id is returned so the caller can
/// schedule its dismissal. Results for deleted entries change nothing in
/// the list.
pub fn apply_upload_outcome<F>(
    list: &mut FileList<F>,
    toasts: &mut Toasts,
    id: EntryId,
    outcome: AppResult<UploadedAsset>,
) -> Option<u64> {
    match outcome {
        Ok(asset) => {
            log::info!("✅ Upload finished: {}", asset.url);
            if !list.complete_upload(id, asset.url) {
                log::debug!("Entry {} was removed before its upload finished", id.get());
            }
            None
        }
        Err(e) => {
            log::error!("❌ Upload failed: {:?}", e);
            list.fail_upload(id);
            Some(toasts.push(ToastLevel::Error, e.to_string()))
        }
    }
}

/// Upload `file` to the given Cloudinary account.
pub async fn upload_image(cloud_name: &str, api_key: &str, file: &File) -> AppResult<UploadedAsset> {
    let form_data = FormData::new()
        .map_err(|e| AppError::Network(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob("file", file)
        .map_err(|e| AppError::Network(format!("Failed to append file: {:?}", e)))?;
    form_data
        .append_with_str("api_key", api_key)
        .map_err(|e| AppError::Network(format!("Failed to append api_key: {:?}", e)))?;
    form_data
        .append_with_str("upload_preset", UPLOAD_PRESET)
        .map_err(|e| AppError::Network(format!("Failed to append upload_preset: {:?}", e)))?;

    let request = Request::post(&upload_url(cloud_name))
        .body(form_data)
        .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

    let body = response
        .text()
        .await
        .map_err(|e| AppError::Network(format!("Failed to read response: {}", e)))?;

    interpret_response(response.status(), response.ok(), &body)
}

/// Turn a raw HTTP answer into an asset or an error.
///
/// Cloudinary reports failures as `{"error": {"message": "..."}}`, usually
/// with a 4xx status; that message is passed through. Bodies that are not
/// JSON at all are reported with their status.
pub fn interpret_response(status: u16, ok: bool, body: &str) -> AppResult<UploadedAsset> {
    match parse_upload_response(body) {
        Err(AppError::Parse(_)) if !ok => {
            Err(AppError::Network(format!("Server error ({}): {}", status, body.trim())))
        }
        other => other,
    }
}

/// Parse an upload response body. A string `url` field means success.
pub fn parse_upload_response(body: &str) -> AppResult<UploadedAsset> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| AppError::Parse(e.to_string()))?;

    if let Some(message) = value
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Err(AppError::Remote(message.to_string()));
    }

    serde_json::from_value(value).map_err(|e| AppError::Parse(e.to_string()))
}
