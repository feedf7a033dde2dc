use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8000";

/// Credentials for the account created at startup when no primary user exists.
pub struct PrimaryUserConfig {
    pub username: String,
    pub email: String,
    pub password: String,
}

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,
    pub primary_user: Option<PrimaryUserConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let raw_bind = std::env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = raw_bind
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url,
            bind_address,
            primary_user: primary_user_from_env()?,
        })
    }
}

fn primary_user_from_env() -> Result<Option<PrimaryUserConfig>, ConfigError> {
    let vars = [
        "PRIMARY_USER_USERNAME",
        "PRIMARY_USER_EMAIL",
        "PRIMARY_USER_PASSWORD",
    ]
    .map(|name| (name, std::env::var(name).ok().filter(|v| !v.is_empty())));

    let missing: Vec<&str> = vars
        .iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| *name)
        .collect();

    if missing.len() == vars.len() {
        return Ok(None);
    }
    if !missing.is_empty() {
        return Err(ConfigError::IncompletePrimaryUser(missing.join(", ")));
    }

    let [(_, Some(username)), (_, Some(email)), (_, Some(password))] = vars else {
        return Ok(None);
    };

    Ok(Some(PrimaryUserConfig {
        username,
        email,
        password,
    }))
}
