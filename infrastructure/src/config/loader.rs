//! Configuration loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order
const PROJECT_CONFIG_FILES: [&str; 2] = ["home-relay.toml", ".home-relay.toml"];

/// Prefix for environment overrides (`RELAY_MODEL__NAME` → `model.name`)
const ENV_PREFIX: &str = "RELAY_";

/// Variable names understood for compatibility with existing deployments
const LEGACY_ENV: [(&str, &str); 6] = [
    ("VSHOME_URL", "devices.base_url"),
    ("OLLAMA_URL", "model.base_url"),
    ("OLLAMA_MODEL", "model.name"),
    ("SYSTEM_PROMPT", "model.system_prompt"),
    ("PORT", "server.port"),
    ("STATIC_DIR", "server.static_dir"),
];

/// Map a legacy environment variable to its config key
pub fn legacy_env_key(var: &str) -> Option<&'static str> {
    LEGACY_ENV
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(var))
        .map(|(_, key)| *key)
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `RELAY_*` environment variables
    /// 2. Legacy environment variables (`OLLAMA_URL`, `PORT`, ...)
    /// 3. Explicit config path (if provided)
    /// 4. Project root: `./home-relay.toml` or `./.home-relay.toml`
    /// 5. Global: `$XDG_CONFIG_HOME/home-relay/config.toml`
    /// 6. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let figment = Self::file_figment(config_path)
            .merge(Self::legacy_env())
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        Self::extract(figment)
    }

    /// Load only default configuration (for --no-config)
    ///
    /// Environment overrides still apply.
    pub fn load_defaults() -> Result<FileConfig, Box<figment::Error>> {
        let figment = Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Self::legacy_env())
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        Self::extract(figment)
    }

    /// Load from defaults and the given file only, ignoring discovery and
    /// the environment
    pub fn load_file(path: &Path) -> Result<FileConfig, Box<figment::Error>> {
        let figment = Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Toml::file(path));

        Self::extract(figment)
    }

    fn file_figment(config_path: Option<&PathBuf>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment
    }

    fn legacy_env() -> Env {
        Env::raw().filter_map(|key| legacy_env_key(key.as_str()).map(Into::into))
    }

    fn extract(figment: Figment) -> Result<FileConfig, Box<figment::Error>> {
        figment
            .extract::<FileConfig>()
            .map(FileConfig::normalized)
            .map_err(Box::new)
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/home-relay/config.toml if set,
    /// otherwise falls back to ~/.config/home-relay/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("home-relay").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Environment: {}* and legacy variables", ENV_PREFIX);

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./home-relay.toml or ./.home-relay.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}
