use std::{env, fmt::Display, fs::read_to_string, path::PathBuf, str::FromStr};

use anyhow::{Context, Result};
use tracing::{info, warn};

pub const SECRET_NAME: &str = "WEBHOOK_SECRET";
pub const TOKEN_HEADER: &str = "x-webhook-token";

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub webhook_secret: Option<String>,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Self {
            port: try_load("PORT", "8080")?,
            webhook_secret: load_secret(SECRET_NAME),
            static_dir: try_load("STATIC_DIR", "static")?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            webhook_secret: None,
            static_dir: PathBuf::from("static"),
        }
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    let raw = var(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse()
        .map_err(|e| anyhow::anyhow!("Invalid {key} value {raw:?}: {e}"))
        .with_context(|| "Environment misconfigured!")
}

/// Environment first, then the docker secret file. Blank values disable auth.
fn load_secret(secret_name: &str) -> Option<String> {
    let secret = var(secret_name).or_else(|| read_secret(secret_name));

    match secret.map(|s| s.trim().to_string()) {
        Some(s) if !s.is_empty() => Some(s),
        _ => {
            warn!("{secret_name} not configured, payment endpoint is open");
            None
        }
    }
}

fn read_secret(secret_name: &str) -> Option<String> {
    let path = format!("/run/secrets/{secret_name}");

    read_to_string(&path)
        .map_err(|e| {
            info!("No secret file for {secret_name}: {e}");
        })
        .ok()
}
