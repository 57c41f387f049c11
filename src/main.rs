use anyhow::Context;
use benai::config::AppConfig;
use tracing_subscriber::EnvFilter;

/// Bundled config for builds that ship without a `.env` file
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv() -> Result<(), dotenvy::Error> {
    // First try to load from .env file (desktop dev)
    if dotenvy::dotenv().is_ok() {
        return Ok(());
    }

    load_bundled_config()
}

#[cfg(target_arch = "wasm32")]
fn load_dotenv() -> Result<(), dotenvy::Error> {
    load_bundled_config()
}

fn load_bundled_config() -> Result<(), dotenvy::Error> {
    // Existing variables are never overridden
    dotenvy::from_read(BUNDLED_CONFIG.as_bytes())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("benai=info"));
    // The renderer may install its own subscriber later; first one wins.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn load_config() -> anyhow::Result<AppConfig> {
    AppConfig::from_env().context("invalid BENAI_* configuration")
}

fn main() {
    // RUST_LOG may come from .env, so the environment is loaded first.
    let dotenv_result = load_dotenv();
    init_tracing();
    if let Err(err) = dotenv_result {
        tracing::warn!(error = %err, "failed to load environment file");
    }

    let config = load_config().unwrap_or_else(|err| {
        tracing::warn!("{err:#}, using defaults");
        AppConfig::default()
    });
    tracing::info!(
        reply_delay_ms = config.reply_delay.as_millis(),
        "configuration loaded"
    );

    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(benai::ui::App);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn bundled_config_is_valid() {
        let vars: HashMap<String, String> = dotenvy::from_read_iter(BUNDLED_CONFIG.as_bytes())
            .collect::<Result<_, _>>()
            .expect("bundled config parses");

        let config =
            AppConfig::from_lookup(|key| vars.get(key).cloned()).expect("bundled values are valid");
        assert_eq!(config, AppConfig::default());
    }
}
