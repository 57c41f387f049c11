use crate::config::AppConfig;
use crate::session::{SessionStore, Thread};
use crate::types::current_time;
use crate::views::shared::format_thread_timestamp;
use dioxus::prelude::*;
use time::OffsetDateTime;

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

#[component]
pub fn ChatSidebar(store: Signal<SessionStore>, is_open: Signal<bool>) -> Element {
    let mut store = store;
    let mut is_open = is_open;
    let repository_url = use_context::<AppConfig>().repository_url;
    let now = current_time();
    let snapshot = store.read().clone();

    rsx! {
        div { class: format_args!("chat-sidebar {}", if is_open() { "open" } else { "" }),
            div { class: "sidebar-header",
                h1 { class: "app-title", "BenAI" }
                button {
                    class: "new-chat-button",
                    r#type: "button",
                    onclick: move |_| {
                        store.with_mut(|s| {
                            s.create_thread();
                        });
                        is_open.set(true);
                    },
                    span { class: "new-chat-icon", "+" }
                    span { class: "new-chat-text", "New Chat" }
                }
            }

            div { class: "chats-list",
                if snapshot.is_empty() {
                    div { class: "no-chats-message", "No chats yet. Start a new conversation!" }
                }
                for thread in snapshot.threads() {
                    ThreadItem {
                        key: "{thread.id()}",
                        thread: thread.clone(),
                        store,
                        now,
                    }
                }
            }

            div { class: "sidebar-footer",
                div { class: "app-version", "BenAI v{APP_VERSION}" }
                a {
                    class: "github-link",
                    href: "{repository_url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    span { "GitHub" }
                }
            }
        }
    }
}

#[component]
fn ThreadItem(
    store: Signal<SessionStore>,
    thread: Thread,
    now: OffsetDateTime,
) -> Element {
    let mut store = store;
    let thread_id = thread.id().clone();
    let active = store.read().active_id() == Some(thread.id());
    let stamp = format_thread_timestamp(thread.updated_at(), now);

    rsx! {
        div {
            class: if active { "chat-item active" } else { "chat-item" },
            onclick: move |_| {
                store.with_mut(|s| {
                    s.select_thread(&thread_id);
                });
            },
            div { class: "chat-item-content",
                div { class: "chat-icon", "\u{1F5E8}" }
                div { class: "chat-details",
                    div { class: "chat-title", "{thread.title()}" }
                    div { class: "chat-timestamp", "{stamp}" }
                }
            }
        }
    }
}
