pub mod types;

use anyhow::{Context, Result};
use config::{Config, File};
use std::path::Path;
pub use types::*;

/// Load configuration from a TOML file. A missing file yields the defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<BridgeConfig> {
    let path = path.as_ref();

    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .build()
        .with_context(|| format!("Failed to load config from: {}", path.display()))?;

    let bridge_config: BridgeConfig = config
        .try_deserialize()
        .context("Failed to deserialize configuration")?;

    validate_config(&bridge_config)?;

    Ok(bridge_config)
}

/// Validate the loaded configuration
fn validate_config(config: &BridgeConfig) -> Result<()> {
    let url = reqwest::Url::parse(&config.downstream.base_url).with_context(|| {
        format!(
            "Invalid downstream base_url '{}'",
            config.downstream.base_url
        )
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        anyhow::bail!(
            "Downstream base_url '{}' must use http or https",
            config.downstream.base_url
        );
    }

    if config.server.name.trim().is_empty() {
        anyhow::bail!("Server name must not be empty");
    }

    // Validate log level
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.logging.level.as_str()) {
        anyhow::bail!(
            "Invalid log level '{}'. Valid levels: {}",
            config.logging.level,
            valid_levels.join(", ")
        );
    }

    // Validate log format
    let valid_formats = ["pretty", "json"];
    if !valid_formats.contains(&config.logging.format.as_str()) {
        anyhow::bail!(
            "Invalid log format '{}'. Valid formats: {}",
            config.logging.format,
            valid_formats.join(", ")
        );
    }

    Ok(())
}
