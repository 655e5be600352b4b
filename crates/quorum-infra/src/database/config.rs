use std::env;
use std::time::Duration;

/// Default store: a SQLite file in the working directory, created on demand.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://questions.db?mode=rwc";

/// Configuration for the store behind the gateway.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    /// Log every statement through sqlx.
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 1,
            min_connections: 1,
            connect_timeout: Duration::from_secs(10),
            sqlx_logging: false,
        }
    }
}

impl DatabaseConfig {
    /// Load configuration from environment variables.
    ///
    /// `DATABASE_URL`, `DB_MAX_CONNECTIONS`, `DB_MIN_CONNECTIONS` and
    /// `DB_SQL_LOGGING` override the defaults; unparsable values fall back.
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            url: var("DATABASE_URL").unwrap_or(defaults.url),
            max_connections: var("DB_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_connections),
            min_connections: var("DB_MIN_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.min_connections),
            connect_timeout: defaults.connect_timeout,
            sqlx_logging: var("DB_SQL_LOGGING")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(defaults.sqlx_logging),
        }
    }

    /// A private in-memory SQLite store. One connection only: every new
    /// connection to `:memory:` opens a separate, empty database.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_in_memory_uses_single_connection() {
        let config = DatabaseConfig::in_memory();
        assert_eq!(config.url, "sqlite::memory:");
        assert_eq!(config.max_connections, 1);
        assert_eq!(config.min_connections, 1);
    }

    #[test]
    fn test_default_points_at_questions_db() {
        assert_eq!(DatabaseConfig::default().url, DEFAULT_DATABASE_URL);
    }

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_vars_override_defaults() {
        let env = vars(&[
            ("DATABASE_URL", "sqlite://other.db"),
            ("DB_MAX_CONNECTIONS", "4"),
            ("DB_MIN_CONNECTIONS", "2"),
            ("DB_SQL_LOGGING", "true"),
        ]);
        let config = DatabaseConfig::from_vars(|key| env.get(key).cloned());

        assert_eq!(config.url, "sqlite://other.db");
        assert_eq!(config.max_connections, 4);
        assert_eq!(config.min_connections, 2);
        assert!(config.sqlx_logging);
    }

    #[test]
    fn test_unparsable_vars_fall_back() {
        let env = vars(&[
            ("DB_MAX_CONNECTIONS", "many"),
            ("DB_MIN_CONNECTIONS", "-1"),
            ("DB_SQL_LOGGING", "0"),
        ]);
        let config = DatabaseConfig::from_vars(|key| env.get(key).cloned());

        assert_eq!(config.url, DEFAULT_DATABASE_URL);
        assert_eq!(config.max_connections, 1);
        assert_eq!(config.min_connections, 1);
        assert!(!config.sqlx_logging);
    }
}
