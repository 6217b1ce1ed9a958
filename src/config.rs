// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    database_url: Option<String>,
    database_max_connections: u32,
    public_base_url: String,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:3000".into()
}

fn default_public_base_url() -> String {
    "http://localhost:3000".into()
}

const fn default_max_connections() -> u32 {
    16
}

fn default_allowed_origins() -> Vec<String> {
    vec!["*".into()]
}

fn non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for everything. Without `DATABASE_URL` the server keeps its
    /// data in memory.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let listen_addr = match (non_empty("LISTEN_ADDR"), non_empty("PORT")) {
            (Some(addr), _) => addr,
            (None, Some(port)) => {
                let port: u16 = port
                    .parse()
                    .map_err(|_| ConfigError::Invalid(format!("PORT must be a port number, got {port}")))?;
                format!("0.0.0.0:{port}")
            }
            (None, None) => default_listen_addr(),
        };

        let database_max_connections = match non_empty("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw.parse::<u32>().ok().filter(|n| *n > 0).ok_or_else(|| {
                ConfigError::Invalid(format!(
                    "DATABASE_MAX_CONNECTIONS must be a positive integer, got {raw}"
                ))
            })?,
            None => default_max_connections(),
        };

        let public_base_url = non_empty("PUBLIC_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(default_public_base_url);

        let allowed_origins = non_empty("ALLOWED_ORIGINS")
            .map(|s| s.split(',').map(|p| p.trim().to_string()).collect())
            .unwrap_or_else(default_allowed_origins);

        Ok(Self {
            listen_addr,
            database_url: non_empty("DATABASE_URL"),
            database_max_connections,
            public_base_url,
            allowed_origins,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    pub const fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    /// Origin used to build absolute media URLs such as the default avatar.
    pub fn public_base_url(&self) -> &str {
        &self.public_base_url
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}
