use crate::theme::theme_definition;
use crate::types::ThemeMode;
use crate::views::{ChatView, HomeView};
use dioxus::prelude::*;

const BENAI_CSS: Asset = asset!("/assets/benai.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppView {
    Home,
    Chat,
}

/// Root component. Expects an [`AppConfig`](crate::config::AppConfig) in the
/// launch context.
#[component]
pub fn App() -> Element {
    let view = use_signal(|| AppView::Home);
    let theme = use_signal(ThemeMode::default);

    rsx! {
        ThemeStyles { theme: theme() }
        div { class: "App",
            if view() == AppView::Home {
                HomeView { view, theme }
            } else {
                ChatView { view, theme }
            }
        }
    }
}

#[component]
fn ThemeStyles(theme: ThemeMode) -> Element {
    let definition = theme_definition(theme);
    rsx! {
        document::Link { rel: "stylesheet", href: BENAI_CSS }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
pub fn ThemeToggle(theme: Signal<ThemeMode>) -> Element {
    let mut theme = theme;
    let definition = theme_definition(theme());
    rsx! {
        button {
            class: "theme-toggle-button",
            r#type: "button",
            aria_label: definition.toggle_label,
            title: definition.toggle_label,
            onclick: move |_| {
                let next = theme().toggled();
                tracing::debug!(?next, "theme toggled");
                theme.set(next);
            },
            "{definition.toggle_glyph}"
        }
    }
}
