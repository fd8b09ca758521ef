use anyhow::Result;
use config::Config;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    pub schedule: ScheduleConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the bind address in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Simulated latency before a login attempt resolves.
    pub login_delay_ms: u64,
    /// Simulated latency before a logout resolves.
    pub logout_delay_ms: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON file backing the session store; in-memory when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// How far a weekday recurrence reaches when resolving a calendar day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurrenceScope {
    /// Recurring events only expand inside the month being displayed.
    #[default]
    DisplayedMonth,
    /// Recurring events expand on every matching weekday from their own start date on.
    FromStart,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    pub recurrence_scope: RecurrenceScope,
    /// Number of event titles shown inside a month cell before "+N more".
    pub preview_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8700,
            },
            logging: LoggingConfig {
                level: "debug".to_string(),
            },
            auth: AuthConfig {
                login_delay_ms: 800,
                logout_delay_ms: 300,
            },
            storage: StorageConfig { path: None },
            schedule: ScheduleConfig {
                recurrence_scope: RecurrenceScope::DisplayedMonth,
                preview_limit: 2,
            },
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and `config.toml` over
    /// [`Settings::default`]. Environment variables (`CAMPUS__SECTION__KEY`)
    /// take precedence over the file.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env
            .add_source(
                config::Environment::with_prefix("CAMPUS")
                    .prefix_separator("__")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env"),
        Err(err) if err.not_found() => tracing::trace!("No .env file"),
        Err(err) => tracing::warn!(error = %err, "Ignoring unreadable .env"),
    }

    let settings = Settings::load()?;
    tracing::debug!(
        bind_addr = %settings.server.bind_addr(),
        session_file = settings.storage.path.as_deref().unwrap_or("<memory>"),
        recurrence_scope = ?settings.schedule.recurrence_scope,
        "Settings resolved"
    );
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn test_defaults_load_without_sources() {
        let settings = Settings::load().expect("defaults should deserialize");

        assert_eq!(settings.server.port, 8700);
        assert_eq!(settings.auth.login_delay_ms, 800);
        assert_eq!(settings.auth.logout_delay_ms, 300);
        assert!(settings.storage.path.is_none());
        assert_eq!(
            settings.schedule.recurrence_scope,
            RecurrenceScope::DisplayedMonth
        );
        assert_eq!(settings.schedule.preview_limit, 2);
    }

    #[test]
    fn test_bind_addr() {
        let server = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 9000,
        };
        assert_eq!(server.bind_addr(), "0.0.0.0:9000");
    }

    #[test]
    fn test_recurrence_scope_deserializes_snake_case() {
        let scope: RecurrenceScope = serde_json::from_str("\"from_start\"").unwrap();
        assert_eq!(scope, RecurrenceScope::FromStart);
    }

    #[test_log::test]
    fn test_loader_starts_from_settings_default() {
        let loaded = Settings::load().expect("defaults should deserialize");
        assert_eq!(format!("{loaded:?}"), format!("{:?}", Settings::default()));
    }

    #[test_log::test]
    fn test_load_config_logs_and_resolves() {
        let settings = load_config().expect("settings should resolve");
        assert_eq!(settings.schedule.preview_limit, 2);
    }

    #[test]
    fn test_default_bind_addr_and_level() {
        let settings = Settings::default();
        assert_eq!(settings.server.bind_addr(), "127.0.0.1:8700");
        assert_eq!(settings.logging.level, "debug");
    }
}
