//! Inline alert banner

use leptos::*;

#[component]
pub fn Alert(
    /// Banner text
    #[prop(into)]
    title: String,
    /// One of `danger`, `warning`, `success`
    #[prop(default = "danger")]
    intent: &'static str,
) -> impl IntoView {
    let icon = match intent {
        "success" => "✅",
        "warning" => "⚠️",
        _ => "❌",
    };

    view! {
        <div class=format!("alert alert-{}", intent) role="alert">
            <span class="alert-icon">{icon}</span>
            <span class="alert-title">{title}</span>
        </div>
    }
}
