use crate::types::ThemeMode;

pub struct ThemeDefinition {
    pub css: &'static str,
    pub toggle_label: &'static str,
    pub toggle_glyph: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Dark => ThemeDefinition {
            css: DARK_THEME,
            toggle_label: "Switch to light mode",
            toggle_glyph: "\u{2600}",
        },
        ThemeMode::Light => ThemeDefinition {
            css: LIGHT_THEME,
            toggle_label: "Switch to dark mode",
            toggle_glyph: "\u{263E}",
        },
    }
}

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #0d0f14;
    --color-bg-secondary: #151821;
    --color-bg-sidebar: #10131a;
    --color-text-primary: #f2f4f8;
    --color-text-muted: #9aa3b2;
    --color-border: #262b36;
    --color-accent: #6c8cff;
    --color-accent-soft: rgba(108, 140, 255, 0.16);
    --color-user-bg: #6c8cff;
    --color-user-text: #ffffff;
    --color-bot-bg: #1b1f2a;
    --color-bot-text: #e6e9ef;
    --color-input-bg: #151821;
    --color-timestamp: #7d8595;
    --color-orb-start: #6c8cff;
    --color-orb-end: #b46cff;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.chat-sidebar { background: var(--color-bg-sidebar); border-right-color: var(--color-border); }
.chat-item.active { background: var(--color-accent-soft); }
.chat-input { background: var(--color-input-bg); color: var(--color-text-primary); }
"#;

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #f7f8fb;
    --color-bg-secondary: #ffffff;
    --color-bg-sidebar: #eef0f5;
    --color-text-primary: #151821;
    --color-text-muted: #5a6170;
    --color-border: #d9dde6;
    --color-accent: #3f63f0;
    --color-accent-soft: rgba(63, 99, 240, 0.12);
    --color-user-bg: #3f63f0;
    --color-user-text: #ffffff;
    --color-bot-bg: #ffffff;
    --color-bot-text: #1f2330;
    --color-input-bg: #ffffff;
    --color-timestamp: #7a8090;
    --color-orb-start: #3f63f0;
    --color-orb-end: #9a4df0;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.chat-sidebar { background: var(--color-bg-sidebar); border-right-color: var(--color-border); }
.chat-item.active { background: var(--color-accent-soft); }
.chat-input { background: var(--color-input-bg); color: var(--color-text-primary); }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_offers_the_other_mode() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(
            theme_definition(ThemeMode::Dark).toggle_label,
            "Switch to light mode"
        );
    }
}
