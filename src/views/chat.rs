use crate::config::AppConfig;
use crate::session::SessionStore;
use crate::simulator::ReplySimulator;
use crate::types::{ChatMessage, Role, ThemeMode};
use crate::ui::{AppView, ThemeToggle};
use crate::views::ChatSidebar;
use crate::views::shared::{format_message_content, format_message_timestamp};
use dioxus::events::Key;
use dioxus::prelude::*;
use std::time::Duration;

const SLIDE_OUT_DELAY: Duration = Duration::from_millis(300);
const MESSAGES_END_ID: &str = "messages-end";
const SCROLL_TO_END_JS: &str = r#"
const end = document.getElementById("messages-end");
if (end) { end.scrollIntoView({ behavior: "smooth" }); }
"#;

fn role_class(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Assistant => "bot",
    }
}

#[component]
pub fn ChatView(view: Signal<AppView>, theme: Signal<ThemeMode>) -> Element {
    let config = use_context::<AppConfig>();
    let simulator = use_signal(|| ReplySimulator::from_config(&config));
    let store = use_signal(SessionStore::with_initial_thread);
    let mut input = use_signal(String::new);
    let mut sidebar_open = use_signal(|| false);
    let leaving = use_signal(|| false);

    use_effect(move || {
        let _ = store.read();
        let _ = document::eval(SCROLL_TO_END_JS);
    });

    let mut send_message = {
        let mut store = store;
        let mut input_signal = input;
        move |text: String| {
            let Some(pending) = store.with_mut(|s| simulator.read().begin_send(s, &text)) else {
                return;
            };
            input_signal.set(String::new());

            spawn(async move {
                let reply = pending.wait().await;
                store.with_mut(|s| {
                    reply.apply(s);
                });
            });
        }
    };

    let mut go_back = {
        let mut leaving = leaving;
        let mut view = view;
        move || {
            leaving.set(true);
            spawn(async move {
                tokio::time::sleep(SLIDE_OUT_DELAY).await;
                view.set(AppView::Home);
            });
        }
    };

    let snapshot = store.read();
    let title = snapshot.active_title().to_string();
    let active_id = snapshot.active_id().cloned();
    // The composer stays locked until the pending reply lands.
    let sending = snapshot.is_awaiting_reply();
    let typing_here = sending && snapshot.awaiting_reply_in() == active_id.as_ref();
    let messages: Vec<ChatMessage> = snapshot
        .active_thread()
        .map(|thread| thread.messages().to_vec())
        .unwrap_or_default();
    drop(snapshot);

    let show_welcome = active_id.is_none() || messages.is_empty();

    rsx! {
        div { class: if leaving() { "chat-container slide-out" } else { "chat-container" },
            ChatSidebar { store, is_open: sidebar_open }

            div { class: "chat-interface",
                div { class: "chat-header",
                    div { class: "header-left",
                        button {
                            class: "menu-toggle",
                            r#type: "button",
                            aria_label: "Toggle sidebar",
                            onclick: move |_| sidebar_open.set(!sidebar_open()),
                            "\u{2630}"
                        }
                        button {
                            class: "back-button",
                            r#type: "button",
                            aria_label: "Go back",
                            onclick: move |_| go_back(),
                            "\u{2190}"
                        }
                    }
                    div { class: "header-center",
                        h2 { class: "chat-title", "{title}" }
                    }
                    div { class: "header-right",
                        div { class: "model-indicator",
                            div { class: "model-dot" }
                            span { "BenAI Assistant" }
                        }
                        ThemeToggle { theme }
                    }
                }

                div { class: "messages-container",
                    if show_welcome {
                        div { class: "welcome-message",
                            div { class: "ai-orb-small" }
                            h3 { "Hello! I'm BenAI." }
                            p { "How can I assist you today? Ask me anything!" }
                        }
                    }
                    for (i, msg) in messages.iter().enumerate() {
                        div { key: "{i}", class: format_args!("message-wrapper {}", role_class(msg.role)),
                            div { class: "message",
                                div {
                                    class: "message-content",
                                    dangerous_inner_html: "{format_message_content(&msg.content)}",
                                }
                                div { class: "message-timestamp", "{format_message_timestamp(msg.created_at)}" }
                            }
                        }
                    }
                    if typing_here {
                        div { class: "message-wrapper bot",
                            div { class: "message",
                                div { class: "typing-indicator",
                                    span {}
                                    span {}
                                    span {}
                                }
                            }
                        }
                    }
                    div { id: MESSAGES_END_ID }
                }

                div { class: "input-container",
                    textarea {
                        class: "chat-input",
                        rows: "1",
                        placeholder: "Type your message...",
                        value: "{input}",
                        disabled: sending,
                        oninput: move |ev| input.set(ev.value()),
                        onkeydown: move |ev| {
                            if ev.key() == Key::Enter && !ev.modifiers().shift() {
                                ev.prevent_default();
                                let text = input();
                                send_message(text);
                            }
                        },
                    }
                    button {
                        class: "send-button",
                        r#type: "button",
                        aria_label: "Send message",
                        disabled: sending || input().trim().is_empty(),
                        onclick: move |_| {
                            let text = input();
                            send_message(text);
                        },
                        if sending {
                            div { class: "loading-spinner" }
                        } else {
                            "\u{27A4}"
                        }
                    }
                }
            }
        }
    }
}
