//! File picker with drag & drop support.
//!
//! Turns clicks and drops into candidate files, classifies them together
//! with the files already held, and reports the new partition through
//! `on_accepted` / `on_rejected`. Holds no file state of its own.

use leptos::*;
use web_sys::{DragEvent, Event, HtmlInputElement};

use crate::services::{candidates_from_drop, candidates_from_input, classify_selection};
use crate::{CandidateFile, FileRejection, UploadConfig};

#[component]
pub fn FileUploader(
    #[prop(into)]
    label: String,
    #[prop(into)]
    description: String,
    accepted_mime_types: Vec<String>,
    max_files: usize,
    max_size_in_bytes: u64,
    /// Ignore clicks and drops while true
    #[prop(into)]
    disabled: Signal<bool>,
    /// Files currently held, in display order
    #[prop(into)]
    values: Signal<Vec<CandidateFile>>,
    #[prop(into)]
    on_accepted: Callback<Vec<CandidateFile>>,
    #[prop(into)]
    on_rejected: Callback<Vec<FileRejection>>,
    /// Renders the file at the given index of `values`
    #[prop(into)]
    render_file: Callback<(CandidateFile, usize), View>,
) -> impl IntoView {
    let accept = accepted_mime_types.join(",");
    let config = store_value(UploadConfig {
        accepted_mime_types,
        max_files,
        max_size_in_bytes,
    });
    let (dragging, set_dragging) = create_signal(false);
    let input_ref = create_node_ref::<html::Input>();

    let submit = move |incoming: Vec<CandidateFile>| {
        if incoming.is_empty() {
            return;
        }
        log::info!("📥 {} file(s) selected", incoming.len());

        let partition = config.with_value(|config| {
            classify_selection(&values.get_untracked(), incoming, config)
        });
        log::debug!(
            "Classified: {} accepted, {} rejected",
            partition.accepted.len(),
            partition.rejected.len()
        );

        // Both halves land before anything re-renders
        batch(move || {
            on_accepted.call(partition.accepted);
            on_rejected.call(partition.rejected);
        });
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        match candidates_from_input(&input) {
            Ok(files) => submit(files),
            Err(e) => log::warn!("{}", e),
        }
    };

    let trigger_file_input = move |_| {
        if disabled.get_untracked() {
            return;
        }
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        if !disabled.get_untracked() {
            set_dragging.set(true);
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_dragging.set(false);
        if disabled.get_untracked() {
            log::warn!("Drop ignored: file limit reached");
            return;
        }
        match candidates_from_drop(&ev) {
            Ok(files) => submit(files),
            Err(e) => log::warn!("{}", e),
        }
    };

    view! {
        <div class="file-uploader">
            <div class="file-uploader-label">{label}</div>
            <div class="file-uploader-description">{description}</div>

            <div
                class="upload-zone"
                class:dragging=move || dragging.get()
                class:disabled=move || disabled.get()
                on:click=trigger_file_input
                on:dragover=on_drag_over
                on:dragleave=move |_| set_dragging.set(false)
                on:drop=on_drop
            >
                <div class="upload-icon">"📤"</div>
                <div class="upload-text">
                    {move || if disabled.get() {
                        "Maximum number of files reached"
                    } else if dragging.get() {
                        "Drop files to add them"
                    } else {
                        "Drag files here or click to browse"
                    }}
                </div>
            </div>

            <input
                type="file"
                multiple=true
                accept=accept
                style="display:none"
                disabled=move || disabled.get()
                node_ref=input_ref
                on:change=on_file_change
            />

            <div class="file-list">
                {move || {
                    values
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, file)| render_file.call((file, index)))
                        .collect_view()
                }}
            </div>
        </div>
    }
}
