use std::fs::File;

use serde::Deserialize;

pub use crate::{
    api::{ApiConfig, ApiRestConfig, ApiWebSocketConfig},
    app::AppConfig,
    auth::AuthConfig,
    db::{DbConfig, DbPostgresConfig},
    hash::{Argon2HashConfig, HashConfig},
    log::LogConfig,
    mailer::MailerConfig,
    storage::StorageConfig,
    token::{JwtTokenConfig, TokenConfig},
};

mod api;
mod app;
mod auth;
mod db;
mod hash;
mod log;
mod mailer;
mod storage;
mod token;

#[derive(Deserialize)]
pub struct Config {
    app: AppConfig,
    log: LogConfig,
    hash: HashConfig,
    token: TokenConfig,
    auth: AuthConfig,
    mailer: Option<MailerConfig>,
    db: DbConfig,
    api: ApiConfig,
    storage: StorageConfig,
}

impl Config {
    pub fn app(&self) -> &AppConfig {
        &self.app
    }

    pub fn log(&self) -> &LogConfig {
        &self.log
    }

    pub fn hash(&self) -> &HashConfig {
        &self.hash
    }

    pub fn token(&self) -> &TokenConfig {
        &self.token
    }

    pub fn auth(&self) -> &AuthConfig {
        &self.auth
    }

    pub fn mailer(&self) -> &Option<MailerConfig> {
        &self.mailer
    }

    pub fn db(&self) -> &DbConfig {
        &self.db
    }

    pub fn api(&self) -> &ApiConfig {
        &self.api
    }

    pub fn storage(&self) -> &StorageConfig {
        &self.storage
    }
}

pub fn from_path(path: &str) -> Config {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => panic!("Failed to open configuration file '{path}': {err}"),
    };
    match serde_yaml::from_reader::<_, Config>(file) {
        Ok(config) => config,
        Err(err) => panic!("Failed to parse configuration file '{path}': {err}"),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    const CONFIG_YAML: &str = r#"
app:
  mode: "development"
log:
  display_level: true
  level_filter: "info"
hash:
  argon2:
    algorithm: "Argon2id"
    version: "V0x13"
    salt: "cGxlYXNlY2hhbmdlbWU"
token:
  jwt:
    secret: "secret"
    expiry_duration: 604800
auth:
  registration: true
  registration_ttl: 600
  reset_password_ttl: 600
db:
  postgres:
    user: "taskbase"
    password: "taskbase"
    host: "localhost"
    port: "5432"
    db_name: "taskbase"
    max_connections: 20
api:
  rest:
    host: "0.0.0.0"
    port: 8080
  websocket:
    heartbeat_interval: 10s
    client_timeout: 30s
storage:
  path: "./data/files"
"#;

    #[test]
    fn parses_a_full_config() {
        let config = serde_yaml::from_str::<Config>(CONFIG_YAML).unwrap();

        assert_eq!(config.app().mode(), "development");
        assert_eq!(config.log().level_filter(), "info");
        assert_eq!(config.hash().argon2().algorithm(), "Argon2id");
        assert_eq!(*config.token().jwt().expiry_duration(), 604800);
        assert!(*config.auth().registration());
        assert!(config.mailer().is_none());
        assert_eq!(config.db().postgres().port(), "5432");
        assert_eq!(*config.api().rest().port(), 8080);
        assert!(config.api().rest().allowed_origin().is_none());
        assert_eq!(
            *config.api().websocket().heartbeat_interval(),
            Duration::from_secs(10)
        );
        assert_eq!(config.storage().path(), "./data/files");
    }
}
