//! Reading user selections out of browser events.

use web_sys::{DragEvent, FileList, HtmlInputElement};

use crate::{AppError, AppResult, CandidateFile};

/// Wrap every file of a `FileList` as a fresh candidate, in list order.
pub fn candidates_from_file_list(files: &FileList) -> Vec<CandidateFile> {
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(CandidateFile::from_file)
        .collect()
}

/// Files picked through the `<input type="file">`.
///
/// Clears the input afterwards so picking the same file again still fires
/// `change`.
pub fn candidates_from_input(input: &HtmlInputElement) -> AppResult<Vec<CandidateFile>> {
    let files = input
        .files()
        .ok_or_else(|| AppError::Selection("file input has no file list".to_string()))?;
    let candidates = candidates_from_file_list(&files);
    input.set_value("");
    Ok(candidates)
}

/// Files dropped on the drop zone.
pub fn candidates_from_drop(ev: &DragEvent) -> AppResult<Vec<CandidateFile>> {
    let files = ev
        .data_transfer()
        .and_then(|dt| dt.files())
        .ok_or_else(|| AppError::Selection("drop event carried no files".to_string()))?;
    Ok(candidates_from_file_list(&files))
}
