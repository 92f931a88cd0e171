//! Thin wrapper forwarding the form's props to [`FileUploader`].

use leptos::*;

use crate::components::FileUploader;
use crate::{CandidateFile, FileRejection};

#[component]
pub fn FileUploadField(
    #[prop(into)]
    label: String,
    #[prop(into)]
    description: String,
    max_size_in_bytes: u64,
    max_files: usize,
    accepted_mime_types: Vec<String>,
    #[prop(into)]
    disabled: Signal<bool>,
    #[prop(into)]
    value: Signal<Vec<CandidateFile>>,
    #[prop(into)]
    on_change: Callback<Vec<CandidateFile>>,
    #[prop(into)]
    on_rejected: Callback<Vec<FileRejection>>,
    #[prop(into)]
    render_file: Callback<(CandidateFile, usize), View>,
) -> impl IntoView {
    view! {
        <div class="pane">
            <FileUploader
                label=label
                description=description
                accepted_mime_types=accepted_mime_types
                max_files=max_files
                max_size_in_bytes=max_size_in_bytes
                disabled=disabled
                values=value
                on_accepted=on_change
                on_rejected=on_rejected
                render_file=render_file
            />
        </div>
    }
}
