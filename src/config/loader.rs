// Configuration loader
// Loads the API key from ~/.triad/config.toml or an environment variable

use anyhow::{bail, Context, Result};
use std::fs;

use super::settings::Config;

/// Load configuration from the config file or environment.
pub fn load_config() -> Result<Config> {
    // Try loading from ~/.triad/config.toml first
    if let Some(config) = try_load_from_config_file()? {
        return Ok(config);
    }

    // Fall back to environment variable
    if let Ok(api_key) = std::env::var("OPENAI_API_KEY") {
        if !api_key.is_empty() {
            return Ok(Config::with_api_key(api_key));
        }
    }

    // No config found - explain how to create one
    bail!(
        "No configuration found. Create ~/.triad/config.toml containing:\n\n\
        api_key = \"sk-...\"\n\n\
        Optional keys: model, base_url, service_label.\n\n\
        Alternatively, set environment variable:\n\
        export OPENAI_API_KEY=\"sk-...\""
    );
}

fn try_load_from_config_file() -> Result<Option<Config>> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    let config_path = home.join(".triad/config.toml");

    if !config_path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;

    #[derive(serde::Deserialize)]
    struct TomlConfig {
        api_key: String,
        #[serde(default)]
        model: Option<String>,
        #[serde(default)]
        base_url: Option<String>,
        #[serde(default)]
        service_label: Option<String>,
    }

    let toml_config: TomlConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;

    let mut config = Config::with_api_key(toml_config.api_key);

    // Apply scalar overrides
    if let Some(model) = toml_config.model {
        config.model = model;
    }
    if let Some(base_url) = toml_config.base_url {
        config.base_url = base_url;
    }
    if let Some(service_label) = toml_config.service_label {
        config.service_label = service_label;
    }

    // Validate configuration
    config
        .validate()
        .context("Configuration validation failed")?;

    Ok(Some(config))
}

#[cfg(test)]
mod tests {
    // Config loading tests rely on filesystem state; see integration tests.
}
