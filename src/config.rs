//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::modules::blog::application::domain::upload_policy::UploadPolicy;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_UPLOAD_DIR: &str = "uploads";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} has an invalid value: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("DATABASE_URL is required when STORAGE_BACKEND=postgres")]
    MissingDatabaseUrl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Postgres {
        database_url: String,
        max_connections: u32,
    },
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageBackend,
    pub upload_dir: PathBuf,
    pub upload_max_bytes: u64,
    pub seed_sample_data: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unset or blank keys take
    /// their default; set keys must parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let storage = match get("STORAGE_BACKEND").as_deref().map(str::trim) {
            None | Some("memory") => StorageBackend::Memory,
            Some("postgres") => StorageBackend::Postgres {
                database_url: get("DATABASE_URL").ok_or(ConfigError::MissingDatabaseUrl)?,
                max_connections: parse_or(
                    "DB_MAX_CONNECTIONS",
                    get("DB_MAX_CONNECTIONS"),
                    DEFAULT_DB_MAX_CONNECTIONS,
                )?,
            },
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    key: "STORAGE_BACKEND",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or("PORT", get("PORT"), DEFAULT_PORT)?,
            storage,
            upload_dir: get("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR)),
            upload_max_bytes: parse_or(
                "UPLOAD_MAX_BYTES",
                get("UPLOAD_MAX_BYTES"),
                UploadPolicy::DEFAULT_MAX_FILE_SIZE_BYTES,
            )?,
            seed_sample_data: parse_bool_or("SEED_SAMPLE_DATA", get("SEED_SAMPLE_DATA"), true)?,
        })
    }

    pub fn upload_policy(&self) -> UploadPolicy {
        UploadPolicy::new(self.upload_max_bytes)
    }
}

fn parse_or<T: FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}

fn parse_bool_or(
    key: &'static str,
    raw: Option<String>,
    default: bool,
) -> Result<bool, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => match value.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(ConfigError::InvalidValue { key, value }),
        },
    }
}
