#![allow(clippy::unwrap_used)]
// Config loading and token resolution, isolated with `figment::Jail`.

use std::path::Path;
use std::time::Duration;

use figment::Jail;
use secrecy::ExposeSecret;

use cf_config::{
    Config, ConfigError, Profile, client_for_profile, config_path, load_config, load_config_from,
    profile_to_connection_config, resolve_token, save_config, save_config_to, select_profile,
};

const CONFIG: &str = r#"
default_profile = "prod"

[defaults]
timeout = 10

[profiles.prod]
api = "https://api.sys.example.com"
token_env = "PROD_CF_TOKEN"

[profiles.lab]
api = "https://api.lab.example.com"
networking = "https://api.lab.example.com/networking"
skip_ssl_validation = true
token = "lab-token"
"#;

#[test]
fn test_load_profiles_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", CONFIG)?;

        let cfg = load_config_from(Path::new("config.toml")).map_err(|e| e.to_string())?;

        assert_eq!(cfg.default_profile.as_deref(), Some("prod"));
        assert_eq!(cfg.defaults.timeout, 10);
        assert_eq!(cfg.profiles.len(), 2);

        let (name, prod) = select_profile(&cfg, None).map_err(|e| e.to_string())?;
        assert_eq!(name, "prod");
        assert_eq!(prod.api, "https://api.sys.example.com");

        let connection =
            profile_to_connection_config(prod, &cfg.defaults).map_err(|e| e.to_string())?;
        assert_eq!(connection.transport.timeout, Duration::from_secs(10));
        assert_eq!(
            connection.networking_root().as_str(),
            "https://api.sys.example.com/"
        );
        Ok(())
    });
}

#[test]
fn test_load_config_from_home() {
    Jail::expect_with(|jail| {
        let home = jail.directory().to_path_buf();
        jail.set_env("HOME", home.display());
        jail.set_env("XDG_CONFIG_HOME", home.join(".config").display());

        let path = config_path();
        assert!(path.starts_with(&home), "{} not under {}", path.display(), home.display());

        // No file yet: defaults only.
        let cfg = load_config().map_err(|e| e.to_string())?;
        assert_eq!(cfg.default_profile.as_deref(), Some("default"));
        assert_eq!(cfg.defaults.timeout, 30);
        assert!(cfg.profiles.is_empty());

        std::fs::create_dir_all(path.parent().unwrap()).map_err(|e| e.to_string())?;
        std::fs::write(&path, CONFIG).map_err(|e| e.to_string())?;

        let cfg = load_config().map_err(|e| e.to_string())?;
        assert_eq!(cfg.default_profile.as_deref(), Some("prod"));
        assert_eq!(cfg.profiles["lab"].token.as_deref(), Some("lab-token"));
        Ok(())
    });
}

#[test]
fn test_load_config_rejects_malformed_file() {
    Jail::expect_with(|jail| {
        let home = jail.directory().to_path_buf();
        jail.set_env("HOME", home.display());
        jail.set_env("XDG_CONFIG_HOME", home.join(".config").display());

        let path = config_path();
        std::fs::create_dir_all(path.parent().unwrap()).map_err(|e| e.to_string())?;
        std::fs::write(&path, "[defaults]\ntimeout = \"soon\"\n").map_err(|e| e.to_string())?;

        let result = load_config();
        assert!(
            matches!(result, Err(ConfigError::Figment(_))),
            "expected figment error, got: {result:?}"
        );
        Ok(())
    });
}

#[test]
fn test_save_config_to_home() {
    Jail::expect_with(|jail| {
        let home = jail.directory().to_path_buf();
        jail.set_env("HOME", home.display());
        jail.set_env("XDG_CONFIG_HOME", home.join(".config").display());

        let mut cfg = Config::default();
        cfg.profiles.insert(
            "default".into(),
            Profile {
                api: "https://api.home.example.com".into(),
                ..Profile::default()
            },
        );
        save_config(&cfg).map_err(|e| e.to_string())?;
        assert!(config_path().is_file());

        let loaded = load_config().map_err(|e| e.to_string())?;
        assert_eq!(loaded.profiles["default"].api, "https://api.home.example.com");
        Ok(())
    });
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", CONFIG)?;
        jail.set_env("CF_DEFAULT_PROFILE", "lab");
        jail.set_env("CF_PROFILES__PROD__NETWORKING", "https://net.sys.example.com");

        let cfg = load_config_from(Path::new("config.toml")).map_err(|e| e.to_string())?;

        assert_eq!(cfg.default_profile.as_deref(), Some("lab"));
        assert_eq!(
            cfg.profiles["prod"].networking.as_deref(),
            Some("https://net.sys.example.com")
        );
        Ok(())
    });
}

#[test]
fn test_token_resolution_order() {
    Jail::expect_with(|jail| {
        let profile = Profile {
            api: "https://api.sys.example.com".into(),
            token_env: Some("PROD_CF_TOKEN".into()),
            token: Some("plaintext-token".into()),
            ..Profile::default()
        };

        let token = resolve_token(&profile, "token-order-test").map_err(|e| e.to_string())?;
        assert_eq!(token.expose_secret(), "plaintext-token");

        jail.set_env("PROD_CF_TOKEN", "env-token");
        let token = resolve_token(&profile, "token-order-test").map_err(|e| e.to_string())?;
        assert_eq!(token.expose_secret(), "env-token");
        Ok(())
    });
}

#[test]
fn test_missing_token() {
    let profile = Profile {
        api: "https://api.sys.example.com".into(),
        ..Profile::default()
    };

    let result = resolve_token(&profile, "missing-token-test");

    assert!(
        matches!(result, Err(ConfigError::NoToken { ref profile }) if profile == "missing-token-test"),
        "expected NoToken, got: {result:?}"
    );
}

#[test]
fn test_save_then_load() {
    Jail::expect_with(|jail| {
        let path = jail.directory().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.profiles.insert(
            "default".into(),
            Profile {
                api: "https://api.local.example.com".into(),
                timeout: Some(45),
                ..Profile::default()
            },
        );
        save_config_to(&cfg, &path).map_err(|e| e.to_string())?;

        let loaded = load_config_from(&path).map_err(|e| e.to_string())?;
        let (name, profile) = select_profile(&loaded, None).map_err(|e| e.to_string())?;
        assert_eq!(name, "default");
        assert_eq!(profile.api, "https://api.local.example.com");
        assert_eq!(profile.timeout, Some(45));
        Ok(())
    });
}

#[test]
fn test_client_for_profile() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", CONFIG)?;

        let cfg = load_config_from(Path::new("config.toml")).map_err(|e| e.to_string())?;
        let client = client_for_profile(&cfg, Some("lab"));
        assert!(client.is_ok(), "expected client, got: {:?}", client.err());
        Ok(())
    });
}
