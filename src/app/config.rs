use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{
    CONFIG_DIR_NAME, DEFAULT_LOCATION, DEFAULT_MODEL_ID, DEFAULT_TOKEN_ENV, ENV_PREFIX,
    LOCAL_CONFIG_PATH,
};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Vertex AI target settings
    #[serde(default)]
    pub vertex: VertexSettings,
}

/// Where probes are sent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VertexSettings {
    /// Cloud project identifier
    pub project: Option<String>,
    /// Region code (e.g. us-central1)
    pub location: String,
    /// Model used by the generation probe
    pub model: String,
    /// Environment variable holding the bearer token
    pub token_env: String,
    /// Replaces `https://{location}-aiplatform.googleapis.com` when set
    pub base_url: Option<String>,
}

impl Default for VertexSettings {
    fn default() -> Self {
        Self {
            project: None,
            location: DEFAULT_LOCATION.to_string(),
            model: DEFAULT_MODEL_ID.to_string(),
            token_env: DEFAULT_TOKEN_ENV.to_string(),
            base_url: None,
        }
    }
}

/// Load configuration from multiple sources
///
/// Later sources win: defaults, global file, `.vertex-probe/config.toml`,
/// the explicit file, then `VERTEX_PROBE_*` variables (`__` separates
/// nested keys, e.g. `VERTEX_PROBE_VERTEX__PROJECT`).
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let global_config = get_config_dir().ok().map(|dir| dir.join("config.toml"));
    let local_config = PathBuf::from(LOCAL_CONFIG_PATH);

    let mut files: Vec<PathBuf> = global_config.into_iter().collect();
    files.push(local_config);

    if let Some(path) = explicit {
        if !path.exists() {
            bail!("Configuration file not found: {}", path.display());
        }
        files.push(path.to_path_buf());
    }

    build_figment(&files)
        .extract()
        .context("Failed to load configuration")
}

fn build_figment(files: &[PathBuf]) -> Figment {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    for file in files.iter().filter(|f| f.exists()) {
        figment = figment.merge(Toml::file(file));
    }

    figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
}

/// Get the configuration directory
pub fn get_config_dir() -> Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", CONFIG_DIR_NAME) {
        Ok(proj_dirs.config_dir().to_path_buf())
    } else {
        // Fallback to home directory
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .context("Could not determine home directory")?;
        Ok(PathBuf::from(home).join(".config").join(CONFIG_DIR_NAME))
    }
}

/// Save configuration to file
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml_string = toml::to_string_pretty(config)?;
    std::fs::write(path, toml_string)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    Ok(())
}

/// Create a default configuration file if it doesn't exist
///
/// Returns the path of the global config file.
pub fn init_config() -> Result<PathBuf> {
    let config_file = get_config_dir()?.join("config.toml");

    if config_file.exists() {
        tracing::info!(path = %config_file.display(), "configuration already present");
    } else {
        save_config(&Config::default(), &config_file)?;
    }

    Ok(config_file)
}
