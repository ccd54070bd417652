use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use uuid::Uuid;

use super::config::config;
use super::icons::icon;

/// At most this many toasts are on screen; older ones make room
const MAX_VISIBLE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

/// Transient notifications for action outcomes
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }

    fn push(&self, kind: ToastKind, message: String) {
        let toast = Toast {
            id: Uuid::new_v4(),
            kind,
            message,
        };
        let id = toast.id;
        self.toasts.update(|list| push_capped(list, toast, MAX_VISIBLE));

        let service = *self;
        Timeout::new(config().toasts.timeout_ms, move || service.dismiss(id)).forget();
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

fn push_capped(list: &mut Vec<Toast>, toast: Toast, max: usize) {
    list.push(toast);
    if list.len() > max {
        let overflow = list.len() - max;
        list.drain(..overflow);
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// Renders the toast stack in the corner of the screen
#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_toasts();

    view! {
        <div class="toast-stack">
            <For
                each=move || service.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                        ToastKind::Info => "toast",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class role="status">
                            {match toast.kind {
                                ToastKind::Success => icon("check"),
                                _ => icon("alert"),
                            }}
                            <span class="toast__message">{toast.message}</span>
                            <button class="toast__close" on:click=move |_| service.dismiss(id) title="Dismiss">
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
