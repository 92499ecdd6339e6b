//! Profile configuration for `cf-client` consumers.
//!
//! TOML profiles, token resolution (env + keyring + plaintext), and
//! translation to `cf_client::ConnectionConfig`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use cf_client::{CloudFoundryClient, ConnectionConfig, StaticTokenProvider, TlsMode, TransportConfig};

const KEYRING_SERVICE: &str = "cf-client";
const CONFIG_FILE: &str = "config.toml";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no token configured for profile '{profile}'")]
    NoToken { profile: String },

    #[error("unknown profile '{profile}'")]
    UnknownProfile { profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Client(#[from] cf_client::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Profile used when the caller does not name one.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named platform profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default)]
    pub skip_ssl_validation: bool,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            skip_ssl_validation: false,
            timeout: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

/// A named platform profile.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Profile {
    /// Cloud controller root URL (e.g., "https://api.sys.example.com").
    pub api: String,

    /// Networking API root, when it is not served from `api`.
    pub networking: Option<String>,

    /// Access token (plaintext -- prefer keyring or env var).
    pub token: Option<String>,

    /// Environment variable name containing the access token.
    pub token_env: Option<String>,

    /// Accept any server certificate.
    pub skip_ssl_validation: Option<bool>,

    /// Path to custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Override timeout (seconds).
    pub timeout: Option<u64>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
///
/// Falls back to `cf-client.toml` in the working directory when no home
/// directory can be determined.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("org", "cf-rs", "cf-client").map_or_else(
        || PathBuf::from("cf-client.toml"),
        |dirs| dirs.config_dir().join(CONFIG_FILE),
    )
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
///
/// A missing file is not an error; the defaults and environment still apply.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit file, then `CF_`-prefixed environment variables.
///
/// Nested keys use a double underscore: `CF_PROFILES__PROD__API`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("CF_").split("__"));

    let config: Config = figment.extract()?;
    debug!(path = %path.display(), profiles = config.profiles.len(), "loaded config");
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Profile selection ───────────────────────────────────────────────

/// Pick `requested`, else the config's default profile.
pub fn select_profile<'a>(
    cfg: &'a Config,
    requested: Option<&'a str>,
) -> Result<(&'a str, &'a Profile), ConfigError> {
    let name = requested
        .or(cfg.default_profile.as_deref())
        .unwrap_or("default");
    cfg.profiles
        .get(name)
        .map(|profile| (name, profile))
        .ok_or_else(|| ConfigError::UnknownProfile {
            profile: name.into(),
        })
}

// ── Token resolution ────────────────────────────────────────────────

/// Resolve the access token from the credential chain.
///
/// Order: `token_env` variable, system keyring (`cf-client/<profile>/token`),
/// plaintext `token`.
pub fn resolve_token(profile: &Profile, profile_name: &str) -> Result<SecretString, ConfigError> {
    // 1. Profile's token_env → env var lookup
    if let Some(ref env_name) = profile.token_env {
        if let Ok(val) = std::env::var(env_name) {
            debug!(profile = profile_name, "token from environment");
            return Ok(SecretString::from(val));
        }
    }

    // 2. System keyring
    if let Ok(entry) = keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/token")) {
        if let Ok(secret) = entry.get_password() {
            debug!(profile = profile_name, "token from keyring");
            return Ok(SecretString::from(secret));
        }
    }

    // 3. Plaintext in config
    if let Some(ref token) = profile.token {
        debug!(profile = profile_name, "token from config file");
        return Ok(SecretString::from(token.clone()));
    }

    Err(ConfigError::NoToken {
        profile: profile_name.into(),
    })
}

// ── Translation to cf-client ────────────────────────────────────────

fn parse_root(field: &str, raw: &str) -> Result<url::Url, ConfigError> {
    raw.parse().map_err(|_| ConfigError::Validation {
        field: field.into(),
        reason: format!("invalid URL: {raw}"),
    })
}

/// Build a `ConnectionConfig` from a profile, falling back to `defaults`.
pub fn profile_to_connection_config(
    profile: &Profile,
    defaults: &Defaults,
) -> Result<ConnectionConfig, ConfigError> {
    let api_root = parse_root("api", &profile.api)?;
    let networking_root = profile
        .networking
        .as_deref()
        .map(|raw| parse_root("networking", raw))
        .transpose()?;

    let tls = if profile
        .skip_ssl_validation
        .unwrap_or(defaults.skip_ssl_validation)
    {
        TlsMode::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsMode::CustomCa(ca_path.clone())
    } else {
        TlsMode::System
    };

    let transport = TransportConfig {
        tls,
        ..TransportConfig::default()
    }
    .with_timeout(Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout)));

    Ok(ConnectionConfig {
        api_root,
        networking_root,
        transport,
    })
}

/// Build a ready client for a profile with its resolved token.
pub fn client_for_profile(
    cfg: &Config,
    requested: Option<&str>,
) -> Result<CloudFoundryClient, ConfigError> {
    let (name, profile) = select_profile(cfg, requested)?;
    let connection = profile_to_connection_config(profile, &cfg.defaults)?;
    let token = resolve_token(profile, name)?;
    let provider = Arc::new(StaticTokenProvider::from_secret(token));
    Ok(CloudFoundryClient::new(&connection, provider)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(api: &str) -> Profile {
        Profile {
            api: api.into(),
            ..Profile::default()
        }
    }

    #[test]
    fn networking_root_defaults_to_api() {
        let config =
            profile_to_connection_config(&profile("https://api.example.com"), &Defaults::default());
        let config = match config {
            Ok(c) => c,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(config.networking_root(), &config.api_root);
        assert_eq!(config.transport.timeout, Duration::from_secs(30));
        assert!(matches!(config.transport.tls, TlsMode::System));
    }

    #[test]
    fn bad_api_url_is_a_validation_error() {
        let result = profile_to_connection_config(&profile("not a url"), &Defaults::default());
        assert!(matches!(
            result,
            Err(ConfigError::Validation { ref field, .. }) if field == "api"
        ));
    }

    #[test]
    fn skip_ssl_validation_wins_over_ca_cert() {
        let p = Profile {
            skip_ssl_validation: Some(true),
            ca_cert: Some(PathBuf::from("/etc/ca.pem")),
            timeout: Some(5),
            ..profile("https://api.example.com")
        };
        match profile_to_connection_config(&p, &Defaults::default()) {
            Ok(config) => {
                assert!(matches!(config.transport.tls, TlsMode::DangerAcceptInvalid));
                assert_eq!(config.transport.timeout, Duration::from_secs(5));
            }
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    #[test]
    fn unknown_profile() {
        let cfg = Config::default();
        assert!(matches!(
            select_profile(&cfg, Some("prod")),
            Err(ConfigError::UnknownProfile { ref profile }) if profile == "prod"
        ));
    }
}
