use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
#[cfg(not(target_arch = "wasm32"))]
const CONFIG_PATH: &str = "config.toml";

/// Copy of the workspace `config.toml` captured at build time. Web builds
/// have no filesystem, so this is their only source.
const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

/// Parse a config document, falling back to defaults on any error.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to parse config, using defaults");
        AppConfig::default()
    })
}

/// Load the config into the global `OnceLock`. Safe to call multiple times;
/// only the first call has effect.
///
/// Native builds prefer `config.toml` in the working directory and fall
/// back to the embedded copy when it is missing.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let config = parse_config(&read_config_source());
        tracing::info!(
            webhook_configured = !config.lead_capture.webhook_url.is_empty(),
            redirect_configured = !config.lead_capture.redirect_url.is_empty(),
            redirect_delay_ms = config.lead_capture.redirect_delay_ms,
            "Lead capture config loaded"
        );
        config
    })
}

/// Get the loaded config. Returns defaults if `load_config()` hasn't been
/// called yet.
pub fn config() -> &'static AppConfig {
    static DEFAULT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(AppConfig::default))
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config_source() -> String {
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => contents,
        Err(e) => {
            tracing::debug!(error = %e, "{CONFIG_PATH} not readable, using embedded config");
            EMBEDDED_CONFIG.to_string()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn read_config_source() -> String {
    EMBEDDED_CONFIG.to_string()
}
