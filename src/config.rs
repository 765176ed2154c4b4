use std::env;
use std::path::PathBuf;

use serde::Serialize;

const ENV_URL: &str = "DIRECTUS_URL_SYNC";
const ENV_EMAIL: &str = "DIRECTUS_EMAIL_SYNC";
const ENV_PASSWORD: &str = "DIRECTUS_PASSWORD_SYNC";

const DEFAULT_URL: &str = "http://directus:8055";
const DEFAULT_EMAIL: &str = "admin@example.com";
const DEFAULT_PASSWORD: &str = "d1r3ctu5";
const DEFAULT_DUMP_PATH: &str = "./directus-config";

/// Settings consumed by directus-sync. The serialized field names are the
/// ones the tool expects in its config file.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub debug: bool,
    pub dump_path: PathBuf,
    pub directus_url: String,
    pub directus_email: String,
    pub directus_password: String,
}

impl Config {
    /// Resolve settings from the process environment. `debug` and
    /// `dump_path` have no environment override.
    pub fn from_env() -> Self {
        Config {
            debug: true,
            dump_path: PathBuf::from(DEFAULT_DUMP_PATH),
            directus_url: env_or(ENV_URL, DEFAULT_URL),
            directus_email: env_or(ENV_EMAIL, DEFAULT_EMAIL),
            directus_password: env_or(ENV_PASSWORD, DEFAULT_PASSWORD),
        }
    }
}

/// An environment value counts only when it is set and non-empty.
fn env_or(name: &str, fallback: &str) -> String {
    match env::var(name) {
        Ok(value) if !value.is_empty() => value,
        _ => fallback.to_string(),
    }
}
