use leptos::prelude::*;

use super::context::use_session;

/// Renders its children only while a session is present
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! {
                <div class="page page--empty">
                    <h2>"Not signed in"</h2>
                    <p>"Sign in to the storefront admin to manage the catalog."</p>
                </div>
            }
        >
            {children()}
        </Show>
    }
}
