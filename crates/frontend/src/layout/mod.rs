pub mod left;

use crate::shared::toast::ToastHost;
use crate::system::auth::context::use_session;
use leptos::prelude::*;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |  Sidebar  |           Content            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let session = use_session();

    view! {
        <div class="app-layout">
            <header class="app-header">
                <span class="app-header__title">"Storefront Admin"</span>
                <span class="app-header__user">{move || session.display_name()}</span>
            </header>

            <div class="app-body">
                <aside class="app-sidebar">
                    <left::sidebar::Sidebar />
                </aside>

                <main class="app-main">
                    {children()}
                </main>
            </div>

            <ToastHost />
        </div>
    }
}
