//! Multi-file upload form.
//!
//! Owns the accepted/rejected state and keeps it consistent: new selections
//! arrive already classified from the picker, removals are reclassified
//! here over everything that is left.

use leptos::*;

use crate::components::{Alert, FileCard, FileUploadField};
use crate::services::UploadState;
use crate::{CandidateFile, FileId, FileRejection, UploadConfig, UPLOAD_LABEL};

#[component]
pub fn FileUpload(
    /// Limits and allow-list; defaults to [`UploadConfig::default`]
    #[prop(optional)]
    config: Option<UploadConfig>,
    /// Called with the accepted files whenever they change
    #[prop(optional)]
    on_change: Option<Callback<Vec<CandidateFile>>>,
) -> impl IntoView {
    let config = store_value(config.unwrap_or_default());
    let state = create_rw_signal(UploadState::new());

    let values = create_memo(move |_| state.with(UploadState::values));
    let disabled = Signal::derive(move || config.with_value(|c| state.with(|s| s.is_full(c))));

    if let Some(on_change) = on_change {
        create_effect(move |_| {
            let accepted = state.with(|s| s.accepted().to_vec());
            on_change.call(accepted);
        });
    }

    let on_accepted = Callback::new(move |files: Vec<CandidateFile>| {
        log::info!("✅ {} file(s) accepted", files.len());
        state.update(|s| s.replace_accepted(files));
    });

    let on_rejected = Callback::new(move |rejections: Vec<FileRejection>| {
        for rejection in &rejections {
            log::debug!("Rejected {}: {}", rejection.file.name(), rejection.message);
        }
        state.update(|s| s.replace_rejected(rejections));
    });

    let handle_remove = move |id: FileId| {
        if !state.with_untracked(|s| s.contains(id)) {
            log::debug!("Remove ignored: {} is not held", id);
            return;
        }
        log::info!("🗑️ Removing {}", id);
        state.update(|s| {
            config.with_value(|c| s.remove(id, c));
        });
    };

    let render_file = Callback::new(move |(file, index): (CandidateFile, usize)| {
        let card = state.with(|s| config.with_value(|c| s.card_state(&file, index, c)));
        let id = file.id();

        view! {
            {card.count_error.map(|title| view! { <Alert intent="danger" title=title/> })}
            <FileCard
                name=file.name()
                size_in_bytes=file.size()
                mime_type=file.mime_type()
                is_invalid=card.is_invalid
                validation_message=card.validation_message
                on_remove=move |_| handle_remove(id)
            />
        }
        .into_view()
    });

    let (description, max_files, max_size_in_bytes, accepted_mime_types) = config.with_value(|c| {
        (c.description(), c.max_files, c.max_size_in_bytes, c.accepted_mime_types.clone())
    });

    view! {
        <div class="upload-root">
            <div class="upload-paper">
                <FileUploadField
                    label=UPLOAD_LABEL
                    description=description
                    max_size_in_bytes=max_size_in_bytes
                    max_files=max_files
                    accepted_mime_types=accepted_mime_types
                    disabled=disabled
                    value=values
                    on_change=on_accepted
                    on_rejected=on_rejected
                    render_file=render_file
                />
            </div>
        </div>
    }
}
