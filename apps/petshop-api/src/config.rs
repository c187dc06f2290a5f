//! Configuration for the pet shop API

use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use database::{RetryConfig, postgres::PostgresConfig};

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub postgres: PostgresConfig,
    pub retry: RetryConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Apply pending migrations before serving
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let postgres = PostgresConfig::from_env()?;
        let server = ServerConfig::from_env()?;
        let run_migrations = core_config::env_parse("RUN_MIGRATIONS", "true")?;
        let retry = RetryConfig::default()
            .with_max_retries(core_config::env_parse("DATABASE_CONNECT_RETRIES", "5")?);

        Ok(Self {
            app: app_info!(),
            postgres,
            retry,
            server,
            environment,
            run_migrations,
        })
    }
}
