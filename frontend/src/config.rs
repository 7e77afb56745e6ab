//! Application configuration.
//!
//! Centralized configuration for the Blodinary frontend.
//! Everything here is compiled in: the destination account is fixed and
//! the only user-provided value is the API key (see [`crate::services::key_store`]).

/// Cloudinary account that receives every upload.
pub const CLOUD_NAME: &str = "dr15yjl8w";

/// Unsigned upload preset configured on the Cloudinary account.
pub const UPLOAD_PRESET: &str = "public";

/// Cloudinary REST API base URL.
pub const UPLOAD_API_BASE: &str = "https://api.cloudinary.com/v1_1";

/// Local storage key holding the API key.
pub const CREDENTIAL_STORAGE_KEY: &str = "CLAUDINARY_API_KEY";

/// How long a toast stays on screen (in milliseconds).
pub const TOAST_DURATION_MS: u32 = 4_000;

/// Maximum number of characters of an uploaded URL shown in a row.
pub const URL_DISPLAY_MAX_CHARS: usize = 40;

/// Upload endpoint for a given Cloudinary account.
pub fn upload_url(cloud_name: &str) -> String {
    format!("{}/{}/image/upload", UPLOAD_API_BASE, cloud_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_url_embeds_cloud_name() {
        assert_eq!(
            upload_url(CLOUD_NAME),
            "https://api.cloudinary.com/v1_1/dr15yjl8w/image/upload"
        );
    }
}
