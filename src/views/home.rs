use crate::types::ThemeMode;
use crate::ui::{AppView, ThemeToggle};
use dioxus::prelude::*;

const FEATURES: &[(&str, &str, &str)] = &[
    (
        "\u{1F4AC}",
        "Natural Conversations",
        "Chat naturally with an AI that understands context and nuance",
    ),
    (
        "\u{1F9E0}",
        "Knowledge Base",
        "Access a vast knowledge base spanning diverse topics",
    ),
    (
        "\u{26A1}",
        "Instant Responses",
        "Get immediate, thoughtful answers to your questions",
    ),
];

/// Landing page with the call to action into the chat screen.
#[component]
pub fn HomeView(view: Signal<AppView>, theme: Signal<ThemeMode>) -> Element {
    let mut view = view;
    rsx! {
        div { class: "home",
            div { class: "theme-toggle-container",
                ThemeToggle { theme }
            }
            div { class: "hero-content",
                div { class: "logo-container",
                    div { class: "ai-orb" }
                }
                h1 { "BenAI" }
                button {
                    class: "cta-button",
                    r#type: "button",
                    onclick: move |_| view.set(AppView::Chat),
                    span { class: "button-text", "Launch AI Chat" }
                    span { class: "button-icon", "\u{2192}" }
                }
                p { class: "tagline", "Experience the future of conversation" }
                p { class: "subtitle",
                    "Powered by advanced artificial intelligence to help you solve problems, answer questions, and spark creativity."
                }
                div { class: "features-grid",
                    for (icon, heading, blurb) in FEATURES.iter() {
                        div { class: "feature-card", key: "{heading}",
                            div { class: "feature-icon", "{icon}" }
                            h3 { "{heading}" }
                            p { "{blurb}" }
                        }
                    }
                }
            }
        }
    }
}
