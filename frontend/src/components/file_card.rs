//! Card displaying one held file with its remove control.

use leptos::*;
use crate::types::format_size;

#[component]
pub fn FileCard(
    #[prop(into)]
    name: String,
    size_in_bytes: u64,
    #[prop(into)]
    mime_type: String,
    /// Marks the card as failing validation
    #[prop(optional)]
    is_invalid: bool,
    /// Inline message for type or size rejections
    validation_message: Option<String>,
    #[prop(into)]
    on_remove: Callback<()>,
) -> impl IntoView {
    let icon = file_icon(&mime_type);
    let mime_label = if mime_type.is_empty() { "unknown type".to_string() } else { mime_type };

    view! {
        <div class="file-card" class:invalid=is_invalid>
            <div class="file-card-icon">{icon}</div>
            <div class="file-card-body">
                <div class="file-card-name" title=name.clone()>{name}</div>
                <div class="file-card-details">
                    {format_size(size_in_bytes)} " • " {mime_label}
                </div>
                {validation_message.map(|message| view! {
                    <div class="file-card-error">{message}</div>
                })}
            </div>
            <button
                class="file-card-remove"
                title="Remove"
                on:click=move |_| on_remove.call(())
            >
                "✕"
            </button>
        </div>
    }
}

fn file_icon(mime_type: &str) -> &'static str {
    match mime_type.split('/').next().unwrap_or("") {
        "image" => "🖼️",
        "audio" => "🎵",
        "video" => "🎬",
        "text" => "📝",
        _ if mime_type.contains("zip") || mime_type.contains("compressed") => "🗜️",
        _ => "📄",
    }
}
