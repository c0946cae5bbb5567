use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_DATABASE_PATH: &str = "../../.openclaw/workspace/polymarket_trades.db";
const DEFAULT_REFRESH_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,

    /// SQLite file written by the external trade monitor.
    pub database_path: PathBuf,
    pub static_dir: PathBuf,

    /// Browser polling interval for the dashboard page.
    pub refresh_interval_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".into())
                .parse()?,
            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| DEFAULT_DATABASE_PATH.into())
                .into(),
            static_dir: env::var("STATIC_DIR")
                .unwrap_or_else(|_| "public".into())
                .into(),
            refresh_interval_secs: env::var("REFRESH_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_REFRESH_SECS),
        })
    }

    /// Settings pointing at a specific database file, everything else default.
    pub fn with_database(database_path: impl Into<PathBuf>) -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 3000,
            database_path: database_path.into(),
            static_dir: PathBuf::from("public"),
            refresh_interval_secs: DEFAULT_REFRESH_SECS,
        }
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_database_defaults() {
        let config = AppConfig::with_database("/tmp/trades.db");
        assert_eq!(config.database_path, PathBuf::from("/tmp/trades.db"));
        assert_eq!(config.refresh_interval(), Duration::from_secs(30));
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
    }
}
