use leptos::prelude::*;

/// Colored status pill; `tone` is one of success, warning, error, info, neutral
pub fn status_badge(label: &str, tone: &'static str) -> AnyView {
    let class = format!("badge badge--{}", tone);
    view! { <span class=class>{label.to_string()}</span> }.into_any()
}
