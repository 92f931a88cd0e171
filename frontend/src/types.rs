//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **File Types** - candidate files and their identity
//! - **Rejection Types** - why a file was not accepted
//! - **Error Types** - frontend error handling

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

// =============================================================================
// File Types
// =============================================================================

static NEXT_FILE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a candidate file.
///
/// Assigned once when the file is submitted. Two picks of files with the
/// same name, size and type still get distinct ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(u64);

impl FileId {
    /// Allocate a fresh id.
    pub fn next() -> Self {
        Self(NEXT_FILE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file-{}", self.0)
    }
}

/// A user-selected file.
///
/// Metadata is copied out of the browser `File` at submission time; the
/// handle itself is kept only so the host can read the bytes later.
#[derive(Clone, Debug)]
pub struct CandidateFile {
    id: FileId,
    name: String,
    size: u64,
    mime_type: String,
    handle: Option<web_sys::File>,
}

impl CandidateFile {
    /// Build a candidate without a browser handle.
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            id: FileId::next(),
            name: name.into(),
            size,
            mime_type: mime_type.into(),
            handle: None,
        }
    }

    /// Wrap a browser `File`.
    pub fn from_file(file: web_sys::File) -> Self {
        Self {
            id: FileId::next(),
            name: file.name(),
            // Blob sizes are integral doubles
            size: file.size() as u64,
            mime_type: file.type_(),
            handle: Some(file),
        }
    }

    pub fn id(&self) -> FileId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// MIME type as reported by the browser (may be empty).
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Underlying browser file, if any.
    pub fn handle(&self) -> Option<&web_sys::File> {
        self.handle.as_ref()
    }
}

/// Files are the same only if they share an id.
impl PartialEq for CandidateFile {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CandidateFile {}

/// Human-readable size for file cards, e.g. `2.4 MB`.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

// =============================================================================
// Rejection Types
// =============================================================================

/// Why a candidate file was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectionReason {
    /// File is bigger than the per-file limit.
    FileTooLarge,
    /// MIME type is not in the allow-list.
    FileTypeNotAccepted,
    /// File arrived after the count limit was reached.
    OverFileLimit,
}

impl RejectionReason {
    /// Count-limit rejections are reported in the aggregate banner rather
    /// than on each card.
    pub fn is_count_limit(&self) -> bool {
        matches!(self, RejectionReason::OverFileLimit)
    }
}

/// A rejected file with its reason and message.
#[derive(Clone, Debug, PartialEq)]
pub struct FileRejection {
    pub file: CandidateFile,
    pub reason: RejectionReason,
    pub message: String,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// File validation outcomes are not errors; they are [`FileRejection`]s.
#[derive(Clone, Debug)]
pub enum AppError {
    /// A browser event did not carry a usable file list.
    Selection(String),
    /// Invalid host configuration.
    Config(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Selection(msg) => write!(f, "Selection error: {}", msg),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
