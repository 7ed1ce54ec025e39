// SPDX-FileCopyrightText: 2026 evman contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use evman_client::StoreConfig;

const EVMAN_CONFIG_ENV: &str = "EVMAN_CONFIG";

/// Application directory name under the user config dir.
pub const APP_NAME: &str = "evman";

/// Resolve and parse the configuration file.
///
/// Priority: explicit `--config` path, then the `EVMAN_CONFIG`
/// environment variable, then `<config dir>/evman/config.toml`. A
/// missing file at the default location yields the built-in defaults
/// (local store at `http://localhost:1337/api`); an explicitly named
/// file that cannot be read is an error.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(EVMAN_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        config
    };

    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse()
}

/// Configuration for the evman application.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Config {
    /// Remote store settings.
    #[serde(default)]
    pub store: StoreConfig,
}

impl FromStr for Config {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

pub fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::OnceLock;
    use tempfile::TempDir;
    use tokio::sync::Mutex;

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn env_lock() -> &'static Mutex<()> {
        ENV_LOCK.get_or_init(|| Mutex::new(()))
    }

    fn write_config(dir: &TempDir, name: &str, base_url: &str) -> PathBuf {
        let path = dir.path().join(name);
        let toml_content = format!(
            r#"
[store]
base_url = "{base_url}"
"#
        );
        fs::write(&path, toml_content).unwrap();
        path
    }

    #[tokio::test]
    async fn cli_flag_overrides_env_var() {
        let temp_dir = TempDir::new().unwrap();
        let cli_path = write_config(&temp_dir, "config.toml", "http://cli:1337/api");
        let env_path = write_config(&temp_dir, "env_config.toml", "http://env:1337/api");

        {
            let _guard = env_lock().lock().await;
            unsafe {
                std::env::set_var(EVMAN_CONFIG_ENV, env_path.to_str().unwrap());
            }

            let config = parse_config(Some(cli_path)).await.unwrap();
            assert_eq!(config.store.base_url, "http://cli:1337/api");

            unsafe {
                std::env::remove_var(EVMAN_CONFIG_ENV);
            }
        }
    }

    #[tokio::test]
    async fn env_var_overrides_default_config() {
        let temp_dir = TempDir::new().unwrap();
        let env_path = write_config(&temp_dir, "env_config.toml", "http://env:1337/api");

        {
            let _guard = env_lock().lock().await;
            unsafe {
                std::env::set_var(EVMAN_CONFIG_ENV, env_path.to_str().unwrap());
            }

            let config = parse_config(None).await.unwrap();
            assert_eq!(config.store.base_url, "http://env:1337/api");

            unsafe {
                std::env::remove_var(EVMAN_CONFIG_ENV);
            }
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn missing_default_config_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let empty_dir = temp_dir.path().join("empty");
        fs::create_dir(&empty_dir).unwrap();

        {
            let _guard = env_lock().lock().await;
            unsafe {
                std::env::remove_var(EVMAN_CONFIG_ENV);
                std::env::set_var("XDG_CONFIG_HOME", empty_dir.to_str().unwrap());
            }

            let config = parse_config(None).await.unwrap();
            assert_eq!(config.store.base_url, "http://localhost:1337/api");

            unsafe {
                std::env::remove_var("XDG_CONFIG_HOME");
            }
        }
    }

    #[tokio::test]
    async fn explicit_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");

        let _guard = env_lock().lock().await;
        let result = parse_config(Some(missing)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn bearer_auth_parses_from_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[store]
base_url = "https://events.example.com/api"
timeout_secs = 5

[store.auth]
type = "bearer"
token = "abc"
"#,
        )
        .unwrap();

        let _guard = env_lock().lock().await;
        let config = parse_config(Some(path)).await.unwrap();
        assert_eq!(config.store.timeout_secs, 5);
        assert!(matches!(
            config.store.auth,
            evman_client::AuthMethod::Bearer { ref token } if token == "abc"
        ));
    }
}
