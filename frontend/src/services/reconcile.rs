//! Accepted/rejected state held by the upload form.
//!
//! [`UploadState`] is the single source of truth for which files are held.
//! Every mutation replaces both lists with a fresh [`Partition`], so a file
//! rejected only for the count limit is picked up again as soon as another
//! file makes room for it.

use crate::services::classify::{rebase_files, Partition};
use crate::{CandidateFile, FileId, FileRejection, UploadConfig};

/// Files currently held by the form.
///
/// Invariant: every held file is in exactly one of `accepted` and
/// `rejected`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadState {
    accepted: Vec<CandidateFile>,
    rejected: Vec<FileRejection>,
}

/// What a single file card should display.
#[derive(Clone, Debug, PartialEq)]
pub struct FileCardState {
    /// Card is marked invalid (type or size rejection).
    pub is_invalid: bool,
    /// Inline validation message for type or size rejections.
    pub validation_message: Option<String>,
    /// Aggregate "too many files" banner to show above this card.
    pub count_error: Option<String>,
}

impl UploadState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accepted(&self) -> &[CandidateFile] {
        &self.accepted
    }

    pub fn rejected(&self) -> &[FileRejection] {
        &self.rejected
    }

    /// Number of files held, accepted or not.
    pub fn total(&self) -> usize {
        self.accepted.len() + self.rejected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn contains(&self, id: FileId) -> bool {
        self.accepted.iter().any(|f| f.id() == id) || self.rejected.iter().any(|r| r.file.id() == id)
    }

    /// All held files for display: accepted first, then rejected.
    pub fn values(&self) -> Vec<CandidateFile> {
        self.accepted
            .iter()
            .cloned()
            .chain(self.rejected.iter().map(|r| r.file.clone()))
            .collect()
    }

    /// Replace both lists with a freshly classified partition.
    pub fn apply(&mut self, partition: Partition) {
        self.accepted = partition.accepted;
        self.rejected = partition.rejected;
    }

    /// Replace the accepted list, as reported by the picker.
    pub fn replace_accepted(&mut self, accepted: Vec<CandidateFile>) {
        self.accepted = accepted;
    }

    /// Replace the rejected list, as reported by the picker.
    pub fn replace_rejected(&mut self, rejected: Vec<FileRejection>) {
        self.rejected = rejected;
    }

    /// Remove a file and reclassify everything that is left.
    ///
    /// Returns `false` (and leaves the state untouched) if the file is not
    /// held.
    pub fn remove(&mut self, id: FileId, config: &UploadConfig) -> bool {
        if !self.contains(id) {
            return false;
        }

        let remaining: Vec<CandidateFile> = self
            .accepted
            .iter()
            .filter(|f| f.id() != id)
            .cloned()
            .chain(
                self.rejected
                    .iter()
                    .filter(|r| r.file.id() != id)
                    .map(|r| r.file.clone()),
            )
            .collect();

        self.apply(rebase_files(remaining, config));
        true
    }

    /// How many files must be removed to get back under the count limit.
    pub fn overflow_count(&self, config: &UploadConfig) -> usize {
        self.total().saturating_sub(config.max_files)
    }

    /// Aggregate banner text, if over the count limit.
    pub fn file_count_error(&self, config: &UploadConfig) -> Option<String> {
        match self.overflow_count(config) {
            0 => None,
            over => Some(file_count_message(config.max_files, over)),
        }
    }

    /// The picker stops taking new files once the limit is reached.
    pub fn is_full(&self, config: &UploadConfig) -> bool {
        self.total() >= config.max_files
    }

    /// Display decision for the card at `index` in [`values`](Self::values).
    pub fn card_state(&self, file: &CandidateFile, index: usize, config: &UploadConfig) -> FileCardState {
        let rejection = self
            .rejected
            .iter()
            .find(|r| r.file == *file && !r.reason.is_count_limit());

        FileCardState {
            is_invalid: rejection.is_some(),
            validation_message: rejection.map(|r| r.message.clone()),
            count_error: if index == 0 { self.file_count_error(config) } else { None },
        }
    }
}

/// `"You can upload up to 5 files. Please remove 2 files."`
pub fn file_count_message(max_files: usize, over: usize) -> String {
    format!(
        "You can upload up to {} files. Please remove {} {}.",
        max_files,
        over,
        if over == 1 { "file" } else { "files" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::classify::classify_selection;
    use crate::RejectionReason;

    fn config(max_files: usize) -> UploadConfig {
        UploadConfig {
            accepted_mime_types: vec!["application/pdf".to_string()],
            max_files,
            max_size_in_bytes: 1000,
        }
    }

    fn pdf(name: &str) -> CandidateFile {
        CandidateFile::new(name, 100, "application/pdf")
    }

    fn submit(state: &mut UploadState, incoming: Vec<CandidateFile>, config: &UploadConfig) {
        let partition = classify_selection(&state.values(), incoming, config);
        state.apply(partition);
    }

    fn assert_partitioned(state: &UploadState) {
        let values = state.values();
        for file in &values {
            let in_accepted = state.accepted().iter().filter(|f| *f == file).count();
            let in_rejected = state.rejected().iter().filter(|r| r.file == *file).count();
            assert_eq!(in_accepted + in_rejected, 1, "{} held twice", file.name());
        }
        assert_eq!(values.len(), state.total());
    }

    fn count_limited(state: &UploadState) -> Vec<CandidateFile> {
        state
            .rejected()
            .iter()
            .filter(|r| r.reason == RejectionReason::OverFileLimit)
            .map(|r| r.file.clone())
            .collect()
    }

    #[test]
    fn test_starts_empty() {
        let state = UploadState::new();
        assert!(state.is_empty());
        assert!(state.values().is_empty());
        assert_eq!(state.file_count_error(&config(5)), None);
    }

    #[test]
    fn test_partition_holds_across_operations() {
        let config = config(3);
        let mut state = UploadState::new();
        let files: Vec<_> = (0..4).map(|i| pdf(&format!("{}.pdf", i))).collect();
        let big = CandidateFile::new("big.pdf", 5000, "application/pdf");
        let text = CandidateFile::new("notes.txt", 10, "text/plain");

        submit(&mut state, files[..2].to_vec(), &config);
        assert_partitioned(&state);
        submit(&mut state, vec![big.clone(), files[2].clone(), text.clone()], &config);
        assert_partitioned(&state);
        submit(&mut state, vec![files[3].clone()], &config);
        assert_partitioned(&state);
        assert_eq!(state.total(), 6);

        for id in [files[1].id(), big.id(), files[0].id(), text.id()] {
            assert!(state.remove(id, &config));
            assert!(!state.contains(id));
            assert_partitioned(&state);
        }
        assert_eq!(state.accepted(), &[files[2].clone(), files[3].clone()]);
    }

    #[test]
    fn test_overflow_recomputed_on_removal() {
        let config = config(5);
        let mut state = UploadState::new();
        let files: Vec<_> = (0..7).map(|i| pdf(&format!("{}.pdf", i))).collect();
        submit(&mut state, files.clone(), &config);
        assert_eq!(state.overflow_count(&config), 2);
        assert_eq!(count_limited(&state), files[5..].to_vec());

        assert!(state.remove(files[2].id(), &config));

        assert_eq!(state.overflow_count(&config), 1);
        assert_eq!(count_limited(&state), vec![files[6].clone()]);
        assert_eq!(
            state.accepted(),
            &[files[0].clone(), files[1].clone(), files[3].clone(), files[4].clone(), files[5].clone()]
        );
    }

    #[test]
    fn test_count_rejection_resurrected() {
        let config = config(2);
        let (a, b, c) = (pdf("a.pdf"), pdf("b.pdf"), pdf("c.pdf"));
        let mut state = UploadState::new();
        submit(&mut state, vec![a.clone(), b.clone(), c.clone()], &config);
        assert_eq!(count_limited(&state), vec![c.clone()]);

        state.remove(a.id(), &config);

        assert_eq!(state.accepted(), &[b, c]);
        assert!(state.rejected().is_empty());
    }

    #[test]
    fn test_removing_absent_file_is_noop() {
        let config = config(2);
        let mut state = UploadState::new();
        submit(&mut state, vec![pdf("a.pdf"), pdf("b.pdf"), pdf("c.pdf")], &config);
        let before = state.clone();

        let stranger = pdf("a.pdf");
        assert!(!state.remove(stranger.id(), &config));
        assert_eq!(state, before);
        assert_eq!(state.rejected(), before.rejected());
    }

    #[test]
    fn test_size_rejection_survives_unrelated_removal() {
        let config = config(5);
        let big = CandidateFile::new("big.pdf", 5000, "application/pdf");
        let text = CandidateFile::new("notes.txt", 10, "text/plain");
        let a = pdf("a.pdf");
        let mut state = UploadState::new();
        submit(&mut state, vec![a.clone(), big.clone(), text.clone()], &config);

        state.remove(a.id(), &config);

        let reasons: Vec<_> = state.rejected().iter().map(|r| (r.file.clone(), r.reason)).collect();
        assert_eq!(
            reasons,
            vec![
                (big, RejectionReason::FileTooLarge),
                (text, RejectionReason::FileTypeNotAccepted),
            ]
        );
    }

    #[test]
    fn test_file_count_message_plurals() {
        assert_eq!(file_count_message(5, 3), "You can upload up to 5 files. Please remove 3 files.");
        assert_eq!(file_count_message(5, 1), "You can upload up to 5 files. Please remove 1 file.");
    }

    #[test]
    fn test_banner_only_on_first_card() {
        let config = config(5);
        let files: Vec<_> = (0..8).map(|i| pdf(&format!("{}.pdf", i))).collect();
        let mut state = UploadState::new();
        submit(&mut state, files, &config);

        let cards: Vec<_> = state
            .values()
            .iter()
            .enumerate()
            .map(|(i, f)| state.card_state(f, i, &config))
            .collect();

        assert_eq!(
            cards[0].count_error.as_deref(),
            Some("You can upload up to 5 files. Please remove 3 files.")
        );
        assert!(cards[1..].iter().all(|c| c.count_error.is_none()));
        // Count-limit rejections are not flagged per card
        assert!(cards.iter().all(|c| !c.is_invalid));
    }

    #[test]
    fn test_card_shows_per_file_rejection() {
        let config = config(5);
        let big = CandidateFile::new("big.pdf", 5000, "application/pdf");
        let mut state = UploadState::new();
        submit(&mut state, vec![pdf("a.pdf"), big.clone()], &config);

        let card = state.card_state(&big, 1, &config);
        assert!(card.is_invalid);
        assert_eq!(card.validation_message.as_deref(), Some("File exceeds the maximum size of 1000 B."));
        assert_eq!(card.count_error, None);
    }

    #[test]
    fn test_is_full() {
        let config = config(2);
        let mut state = UploadState::new();
        submit(&mut state, vec![pdf("a.pdf")], &config);
        assert!(!state.is_full(&config));
        submit(&mut state, vec![CandidateFile::new("x.txt", 1, "text/plain")], &config);
        assert!(state.is_full(&config));
    }

    #[test]
    fn test_duplicate_metadata_kept_apart() {
        let config = config(5);
        let first = pdf("same.pdf");
        let second = pdf("same.pdf");
        let mut state = UploadState::new();
        submit(&mut state, vec![first.clone(), second.clone()], &config);

        state.remove(first.id(), &config);
        assert_eq!(state.accepted(), &[second]);
    }
}
