use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::error::{GitSemversError, Result};

/// Name of the per-repository configuration file.
pub const REPO_CONFIG_FILE: &str = ".gitsemvers.toml";

/// Name of the per-user configuration file inside the user config directory.
pub const USER_CONFIG_FILE: &str = "git-semvers.toml";

/// Returns the default version prefix.
fn default_prefix() -> String {
    "v".to_string()
}

/// Selection settings for one invocation.
///
/// Controls which tags count as release versions: the prefix that must sit
/// directly before the numeric part, and whether pre-release or
/// build-metadata versions are kept.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_prefix")]
    pub prefix: String,

    #[serde(default)]
    pub include_pre_release: bool,

    #[serde(default)]
    pub include_build_metadata: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prefix: default_prefix(),
            include_pre_release: false,
            include_build_metadata: false,
        }
    }
}

/// Where configuration files are looked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSources {
    /// Explicit file; when set nothing else is consulted
    pub config_path: Option<PathBuf>,

    /// Work-tree root searched for `.gitsemvers.toml`
    pub repo_root: PathBuf,

    /// Directory searched for `git-semvers.toml`
    pub user_config_dir: Option<PathBuf>,
}

/// The platform's per-user configuration directory.
pub fn default_user_config_dir() -> Option<PathBuf> {
    dirs::config_dir()
}

/// Finds the configuration file to use, if any.
///
/// Lookup order:
/// 1. Custom path provided as parameter
/// 2. `.gitsemvers.toml` in the repository root
/// 3. `git-semvers.toml` in the user config directory
fn locate_config(sources: &ConfigSources) -> Option<PathBuf> {
    if let Some(path) = &sources.config_path {
        return Some(path.clone());
    }

    let repo_config = sources.repo_root.join(REPO_CONFIG_FILE);
    if repo_config.exists() {
        return Some(repo_config);
    }

    sources
        .user_config_dir
        .as_ref()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}

/// Loads configuration from file or returns defaults.
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file was selected but cannot be read or parsed
pub fn load_config(sources: &ConfigSources) -> Result<Config> {
    let Some(path) = locate_config(sources) else {
        tracing::debug!("no configuration file found, using defaults");
        return Ok(Config::default());
    };

    tracing::debug!(path = %path.display(), "loading configuration");
    let config_str = fs::read_to_string(&path).map_err(|e| {
        GitSemversError::config(format!("cannot read '{}': {}", path.display(), e))
    })?;

    toml::from_str(&config_str).map_err(|e| {
        GitSemversError::config(format!("cannot parse '{}': {}", path.display(), e))
    })
}
