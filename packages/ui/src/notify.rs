//! One-shot notices (toasts) and the overlay that renders them.
//!
//! Notices are keyed: pushing a notice whose id is already on screen is a
//! no-op, which gives redirect flows their one-notification-per-transition
//! behavior without extra bookkeeping at the call sites.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: String,
    pub kind: NoticeKind,
    pub message: String,
}

/// Handle to the notice list. `Copy`, so callbacks can capture it freely.
#[derive(Clone, Copy)]
pub struct Notices {
    entries: Signal<Vec<Notice>>,
}

impl Notices {
    /// Push a notice unless one with the same id is already visible.
    pub fn push_unique(&mut self, id: &str, kind: NoticeKind, message: impl Into<String>) {
        let mut entries = self.entries.write();
        if entries.iter().any(|notice| notice.id == id) {
            return;
        }
        entries.push(Notice {
            id: id.to_string(),
            kind,
            message: message.into(),
        });
    }

    pub fn error(&mut self, id: &str, message: impl Into<String>) {
        self.push_unique(id, NoticeKind::Error, message);
    }

    pub fn success(&mut self, id: &str, message: impl Into<String>) {
        self.push_unique(id, NoticeKind::Success, message);
    }

    pub fn dismiss(&mut self, id: &str) {
        self.entries.write().retain(|notice| notice.id != id);
    }
}

pub fn use_notices() -> Notices {
    use_context::<Notices>()
}

/// Provides the notice context and renders the stacked notice overlay.
/// Wrap the router with this, inside the auth provider.
#[component]
pub fn NoticeProvider(children: Element) -> Element {
    let notices = use_context_provider(|| Notices {
        entries: Signal::new(Vec::new()),
    });
    let entries = (notices.entries)();

    rsx! {
        {children}
        if !entries.is_empty() {
            div {
                class: "fixed top-4 right-4 flex flex-col gap-2",
                style: "z-index: 3000",
                for notice in entries {
                    NoticeCard { key: "{notice.id}", notice }
                }
            }
        }
    }
}

#[component]
fn NoticeCard(notice: Notice) -> Element {
    let mut notices = use_notices();
    let tone = match notice.kind {
        NoticeKind::Info => "bg-blue-50 border-blue-200 text-blue-800",
        NoticeKind::Success => "bg-green-50 border-green-200 text-green-800",
        NoticeKind::Error => "bg-red-50 border-red-200 text-red-800",
    };
    let id = notice.id.clone();

    rsx! {
        div {
            class: "flex items-center gap-3 px-4 py-3 border rounded shadow {tone}",
            span { class: "text-sm", "{notice.message}" }
            button {
                class: "text-sm font-bold cursor-pointer",
                onclick: move |_| notices.dismiss(&id),
                "\u{2715}"
            }
        }
    }
}
