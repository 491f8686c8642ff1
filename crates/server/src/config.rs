use std::{env, net::SocketAddr};
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DATABASE_URL must be set")]
    MissingDatabaseUrl,

    #[error("invalid BIND_ADDR {0:?}")]
    InvalidBindAddr(String),

    #[error("invalid RUN_MIGRATIONS {0:?}, expected true or false")]
    InvalidRunMigrations(String),
}

/// Runtime settings read from the environment (and `.env`)
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    /// Apply pending migrations before serving
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::MissingDatabaseUrl)?;

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = bind_addr
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_addr))?;

        let run_migrations = match env::var("RUN_MIGRATIONS") {
            Ok(value) => parse_flag(&value).ok_or(ConfigError::InvalidRunMigrations(value))?,
            Err(_) => true,
        };

        Ok(Self {
            database_url,
            bind_addr,
            run_migrations,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag(" ON "), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("False"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
