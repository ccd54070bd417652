use contracts::system::auth::Session;
use leptos::prelude::*;

use super::storage;

/// Session of the signed-in administrator, read once when the app mounts.
///
/// Every list page takes its bearer token from here instead of reaching into
/// storage on each request.
#[derive(Clone, Copy)]
pub struct SessionContext {
    session: RwSignal<Option<Session>>,
}

impl SessionContext {
    pub fn get(&self) -> Option<Session> {
        self.session.get()
    }

    pub fn get_untracked(&self) -> Option<Session> {
        self.session.get_untracked()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_some())
    }

    pub fn is_admin(&self) -> bool {
        self.session.with(|s| {
            s.as_ref()
                .and_then(|s| s.user.as_ref())
                .map(|u| u.is_admin())
                .unwrap_or(false)
        })
    }

    pub fn display_name(&self) -> String {
        self.session.with(|s| {
            s.as_ref()
                .map(|s| s.display_name().to_string())
                .unwrap_or_default()
        })
    }

    /// Forget the session, e.g. after the API answered 401
    pub fn sign_out(&self) {
        storage::clear_session();
        self.session.set(None);
    }
}

/// Session context provider component
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let session = storage::load_session();
    match &session {
        Some(s) => log::info!("session restored for {}", s.display_name()),
        None => log::warn!("no stored session, API calls will be rejected"),
    }

    provide_context(SessionContext {
        session: RwSignal::new(session),
    });

    children()
}

/// Hook to access the session
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionProvider not found in component tree")
}
