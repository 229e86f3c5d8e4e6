mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, io::ErrorKind, path::Path};
use tracing::debug;

pub const ENV_ENDPOINT: &str = "AZURE_CLU_ENDPOINT";
pub const ENV_API_KEY: &str = "AZURE_CLU_KEY";
pub const ENV_PROJECT_NAME: &str = "CLU_PROJECT_NAME";
pub const ENV_DEPLOYMENT_NAME: &str = "CLU_DEPLOYMENT_NAME";

/// Loads the configuration from `CONFIG_PATH` (default `config.yaml`),
/// applies the CLU secrets from the environment and validates the result.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    load_from(&config_path, |key| env::var(key).ok()).await
}

pub async fn load_from<F>(config_path: impl AsRef<Path>, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let config_path = config_path.as_ref();
    debug!("Loading configuration from: {}", config_path.display());

    let mut config = match tokio::fs::read_to_string(config_path).await {
        Ok(config_str) => Config::from_yaml_str(&config_str)?,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No configuration file found, relying on environment");
            Config::default()
        }
        Err(e) => return Err(e.into()),
    };

    config.apply_overrides(lookup);
    config.validate()?;

    Ok(config)
}

impl Config {
    pub fn from_yaml_str(config_str: &str) -> Result<Self> {
        if config_str.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(config_str)?)
    }

    /// Overwrites CLU settings with any non-empty value returned by `lookup`
    /// for the well-known secret names.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let fields: [(&str, &mut String); 4] = [
            (ENV_ENDPOINT, &mut self.clu.endpoint),
            (ENV_API_KEY, &mut self.clu.api_key),
            (ENV_PROJECT_NAME, &mut self.clu.project_name),
            (ENV_DEPLOYMENT_NAME, &mut self.clu.deployment_name),
        ];

        for (key, field) in fields {
            if let Some(value) = lookup(key).filter(|v| !v.trim().is_empty()) {
                debug!("Applying {} from environment", key);
                *field = value;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let required = [
            (ENV_ENDPOINT, &self.clu.endpoint),
            (ENV_API_KEY, &self.clu.api_key),
            (ENV_PROJECT_NAME, &self.clu.project_name),
            (ENV_DEPLOYMENT_NAME, &self.clu.deployment_name),
        ];

        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(key, _)| *key)
            .collect();

        if !missing.is_empty() {
            return Err(Error::config(format!(
                "missing required CLU settings: {}",
                missing.join(", ")
            )));
        }

        Ok(())
    }
}
