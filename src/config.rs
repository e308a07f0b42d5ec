//! Application-level configuration loading, including the default team names
//! given to every new game.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "QUIZ_BUZZ_BACK_CONFIG_PATH";

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    team_names: IndexMap<String, String>,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to the
    /// baked-in two-team default.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    let app_config: Self = raw.into();
                    info!(
                        path = %path.display(),
                        teams = app_config.team_names.len(),
                        "loaded default team names from config"
                    );
                    app_config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Team-name map seeded into every freshly created game.
    pub fn default_team_names(&self) -> &IndexMap<String, String> {
        &self.team_names
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            team_names: default_team_names(),
        }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    team_names: IndexMap<String, String>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        if value.team_names.is_empty() {
            // Every game needs at least the two default buckets to be usable.
            warn!("config declares no team names; using built-in defaults");
            return Self::default();
        }
        Self {
            team_names: value.team_names,
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Built-in team names shipped with the binary.
fn default_team_names() -> IndexMap<String, String> {
    IndexMap::from([
        ("Team A".to_owned(), "Team A".to_owned()),
        ("Team B".to_owned(), "Team B".to_owned()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_ship_two_teams() {
        let config = AppConfig::default();
        assert_eq!(config.default_team_names().len(), 2);
        assert!(config.default_team_names().contains_key("Team A"));
        assert!(config.default_team_names().contains_key("Team B"));
    }

    #[test]
    fn raw_config_overrides_team_names() {
        let raw: RawConfig =
            serde_json::from_str(r#"{"team_names":{"red":"Les Rouges","blue":"Les Bleus"}}"#)
                .unwrap();
        let config: AppConfig = raw.into();
        assert_eq!(config.default_team_names().get("red").unwrap(), "Les Rouges");
    }

    #[test]
    fn empty_team_names_fall_back_to_defaults() {
        let raw: RawConfig = serde_json::from_str(r#"{"team_names":{}}"#).unwrap();
        let config: AppConfig = raw.into();
        assert_eq!(config.default_team_names().len(), 2);
    }
}
