//! Configuration service for managing application config.

use std::path::{Path, PathBuf};
use std::sync::{LazyLock, RwLock};

use super::types::AppConfig;
use crate::error::ConfigError;

/// Global config instance (mutable via RwLock).
static CONFIG: LazyLock<RwLock<AppConfig>> = LazyLock::new(|| RwLock::new(AppConfig::default()));

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("keycalc"))
}

/// Path of the default config file.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

/// Check if the config file exists.
pub fn config_file_exists() -> bool {
    config_path().map(|p| p.exists()).unwrap_or(false)
}

/// Load and parse a config file from an explicit path.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFailed)?;
    toml::from_str::<AppConfig>(&content).map_err(ConfigError::ParseFailed)
}

/// Load application config from `~/.config/keycalc/config.toml`.
///
/// Returns `None` if the config file doesn't exist.
/// Logs warning and returns `None` if reading or parsing fails.
fn load_app_config() -> Option<AppConfig> {
    let config_path = config_path()?;

    if !config_path.exists() {
        tracing::debug!("Config file not found at {:?}, using defaults", config_path);
        return None;
    }

    match load_config_from(&config_path) {
        Ok(config) => {
            tracing::info!("Loaded app config from {:?}", config_path);
            Some(config)
        }
        Err(e) => {
            tracing::warn!("{} ({:?}), using defaults", e, config_path);
            None
        }
    }
}

/// Validate a config, log any warnings and make it the global config.
fn install_config(loaded: AppConfig) {
    let warnings = super::validation::validate_config(&loaded);
    for warning in warnings {
        tracing::warn!("Config validation: {} - {}", warning.field, warning.message);
    }

    let mut config = CONFIG.write().unwrap_or_else(|e| e.into_inner());
    *config = loaded;
}

/// Initialize config from the default file (call once at startup).
pub fn init_config() {
    install_config(load_app_config().unwrap_or_default());
}

/// Initialize config from an explicit file.
///
/// Unlike `init_config`, a missing or broken file is an error.
pub fn init_config_from(path: &Path) -> Result<(), ConfigError> {
    let loaded = load_config_from(path)?;
    tracing::info!("Loaded app config from {:?}", path);
    install_config(loaded);
    Ok(())
}

/// Get a clone of the current config.
pub fn config() -> AppConfig {
    CONFIG.read().unwrap_or_else(|e| e.into_inner()).clone()
}

/// Update config in memory and persist to disk if config file exists.
pub fn update_config(f: impl FnOnce(&mut AppConfig)) {
    let mut config = CONFIG.write().unwrap_or_else(|e| e.into_inner());
    f(&mut config);

    // Only save if config file already exists
    if config_file_exists()
        && let Err(e) = save_config_to_file(&config)
    {
        tracing::warn!("Failed to save config: {}", e);
    }
}

/// Save config to the default file.
fn save_config_to_file(config: &AppConfig) -> Result<(), ConfigError> {
    let config_path = config_path().ok_or(ConfigError::NoDirFound)?;
    save_config_to(&config_path, config)?;
    tracing::debug!("Saved config to {:?}", config_path);
    Ok(())
}

/// Serialize a config to the given path.
pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(config).map_err(ConfigError::SerializeFailed)?;
    std::fs::write(path, content).map_err(ConfigError::SaveFailed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::DivisionMode;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("keycalc-{}-{}.toml", name, std::process::id()))
    }

    #[test]
    fn test_load_config_from_file() {
        let path = temp_file("load");
        std::fs::write(&path, "significant_digits = 5\ndivision = \"checked\"\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.significant_digits, 5);
        assert_eq!(config.division, DivisionMode::Checked);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config_from(Path::new("/nonexistent/keycalc/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFailed(_)));
    }

    #[test]
    fn test_load_config_parse_error() {
        let path = temp_file("broken");
        std::fs::write(&path, "significant_digits = \"many\"").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseFailed(_)));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_save_and_reload() {
        let path = temp_file("save");
        let config = AppConfig {
            thousands_separators: true,
            error_marker: "oops".to_string(),
            ..AppConfig::default()
        };

        save_config_to(&path, &config).unwrap();
        assert_eq!(load_config_from(&path).unwrap(), config);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_config_dir_name() {
        if let Some(dir) = config_dir() {
            assert!(dir.ends_with("keycalc"));
        }
    }
}
