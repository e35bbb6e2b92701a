use std::net::SocketAddr;
use std::path::PathBuf;

use airline_core::db::DbOpenConfig;
use anyhow::Context;

use crate::env_var;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub sqlite: DbOpenConfig,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env_var("AIRLINE_HOST", "127.0.0.1");
        let port = std::env::var("AIRLINE_PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(3000);
        let db_path = PathBuf::from(env_var("AIRLINE_DB", "airline.db"));

        Ok(Self {
            host,
            port,
            db_path,
            sqlite: DbOpenConfig::from_env(),
        })
    }

    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}
