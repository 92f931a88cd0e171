//! Accept/reject classification of candidate files.
//!
//! Classification is a pure function of the full candidate list and the
//! configuration. The count limit is relative to the whole list, so callers
//! always classify everything they hold, never just the delta.

use crate::types::format_size;
use crate::{CandidateFile, FileRejection, RejectionReason, UploadConfig};

/// Result of classifying a list of candidates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Partition {
    /// Files passing every constraint, in arrival order.
    pub accepted: Vec<CandidateFile>,
    /// Per-file rejections in arrival order, then count-limit rejections.
    pub rejected: Vec<FileRejection>,
}

/// Partition `files` into accepted and rejected.
///
/// Type is checked before size. Files that pass both checks beyond the
/// first `max_files` are rejected for the count limit.
pub fn rebase_files(files: Vec<CandidateFile>, config: &UploadConfig) -> Partition {
    let mut accepted = Vec::with_capacity(files.len().min(config.max_files));
    let mut rejected = Vec::new();
    let mut overflow = Vec::new();

    for file in files {
        if let Some((reason, message)) = check_file(&file, config) {
            rejected.push(FileRejection { file, reason, message });
        } else if accepted.len() < config.max_files {
            accepted.push(file);
        } else {
            overflow.push(FileRejection {
                file,
                reason: RejectionReason::OverFileLimit,
                message: format!("You can upload up to {} files.", config.max_files),
            });
        }
    }

    rejected.extend(overflow);
    Partition { accepted, rejected }
}

/// Classify what is already held plus a new selection.
///
/// New files queue behind the held ones, so a fresh pick never displaces a
/// file that is already accepted.
pub fn classify_selection(
    held: &[CandidateFile],
    incoming: Vec<CandidateFile>,
    config: &UploadConfig,
) -> Partition {
    let mut files = held.to_vec();
    files.extend(incoming);
    rebase_files(files, config)
}

/// Per-file checks, independent of the other candidates.
fn check_file(file: &CandidateFile, config: &UploadConfig) -> Option<(RejectionReason, String)> {
    if !is_accepted_type(file.mime_type(), &config.accepted_mime_types) {
        let shown = if file.mime_type().is_empty() { "unknown" } else { file.mime_type() };
        return Some((
            RejectionReason::FileTypeNotAccepted,
            format!("File type \"{}\" is not accepted.", shown),
        ));
    }
    if file.size() > config.max_size_in_bytes {
        return Some((
            RejectionReason::FileTooLarge,
            format!("File exceeds the maximum size of {}.", format_size(config.max_size_in_bytes)),
        ));
    }
    None
}

/// Whether `mime_type` is allowed by the allow-list. An empty list allows
/// everything.
pub fn is_accepted_type(mime_type: &str, accepted: &[String]) -> bool {
    accepted.is_empty() || accepted.iter().any(|pattern| mime_type_matches(pattern, mime_type))
}

/// Match a MIME type against a pattern such as `image/png` or `image/*`.
///
/// Case-insensitive; parameters (`; charset=utf-8`) are ignored.
pub fn mime_type_matches(pattern: &str, mime_type: &str) -> bool {
    let essence = |s: &str| s.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
    let pattern = essence(pattern);
    let mime_type = essence(mime_type);
    if mime_type.is_empty() {
        return false;
    }

    match pattern.strip_suffix("/*") {
        Some("*") => true,
        Some(top_level) => mime_type
            .split_once('/')
            .map(|(ty, _)| ty == top_level)
            .unwrap_or(false),
        None => pattern == mime_type,
    }
}
