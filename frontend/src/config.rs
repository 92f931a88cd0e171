//! Upload configuration.
//!
//! Compile-time defaults for the upload form plus the [`UploadConfig`]
//! bundle handed to the reconciler. A host page can override the defaults
//! with a JSON or JS object (camelCase keys, missing keys fall back to the
//! defaults below).

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::{AppError, AppResult};

/// Application name, used for the document title.
pub const APP_NAME: &str = "File Upload";

/// Label displayed above the drop zone.
pub const UPLOAD_LABEL: &str = "Upload Files";

/// Maximum number of files held at once.
pub const MAX_FILES: usize = 5;

/// Maximum file size (in bytes).
///
/// 50 MB limit.
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// MIME types accepted by default.
pub const ACCEPTED_MIME_TYPES: &[&str] = &[
    // Documents
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.ms-powerpoint",
    "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    "application/rtf",
    "text/plain",
    "text/csv",
    // Images
    "image/png",
    "image/jpeg",
    "image/gif",
    "image/webp",
    "image/svg+xml",
    // Audio / video
    "audio/mpeg",
    "audio/wav",
    "video/mp4",
    "video/quicktime",
    // Archives
    "application/zip",
    "application/x-7z-compressed",
];

/// Constraints applied to every candidate file.
///
/// Immutable for the lifetime of a mounted upload form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UploadConfig {
    /// MIME allow-list. Entries may use `type/*` wildcards; an empty list
    /// accepts every type.
    pub accepted_mime_types: Vec<String>,
    /// Maximum number of accepted files.
    pub max_files: usize,
    /// Maximum size per file, in bytes.
    pub max_size_in_bytes: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            accepted_mime_types: ACCEPTED_MIME_TYPES.iter().map(|t| t.to_string()).collect(),
            max_files: MAX_FILES,
            max_size_in_bytes: MAX_FILE_SIZE,
        }
    }
}

impl UploadConfig {
    /// Parse a configuration from a JSON document.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| AppError::Config(format!("invalid JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration from a JS object handed over by the host page.
    ///
    /// `undefined` and `null` yield the defaults.
    pub fn from_js(value: JsValue) -> AppResult<Self> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        let config: Self = serde_wasm_bindgen::from_value(value)
            .map_err(|e| AppError::Config(format!("invalid config object: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations no file could ever satisfy.
    pub fn validate(&self) -> AppResult<()> {
        if self.max_files == 0 {
            return Err(AppError::Config("maxFiles must be at least 1".to_string()));
        }
        if let Some(bad) = self
            .accepted_mime_types
            .iter()
            .find(|t| !t.contains('/'))
        {
            return Err(AppError::Config(format!("invalid MIME type pattern: {:?}", bad)));
        }
        Ok(())
    }

    /// Helper text shown under the label.
    pub fn description(&self) -> String {
        format!(
            "You can upload up to {} {}. Files can be up to {}.",
            self.max_files,
            if self.max_files == 1 { "file" } else { "files" },
            compact_size(self.max_size_in_bytes),
        )
    }
}

/// Whole-unit size, e.g. `50MB`, used in the description line.
fn compact_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes;
    let mut unit = 0;
    while value >= 1024 && value % 1024 == 0 && unit < UNITS.len() - 1 {
        value /= 1024;
        unit += 1;
    }
    format!("{}{}", value, UNITS[unit])
}
