use std::env;
use std::sync::LazyLock;

use secrecy::SecretString;
use types::{Result, err};

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().unwrap_or_else(|error| {
        tracing::warn!(%error, "invalid configuration, falling back to defaults");
        Config::default()
    })
});

/// An account registered at startup so a fresh install can sign in.
#[derive(Clone, Debug)]
pub struct DemoAccount {
    pub display_name: String,
    pub email: String,
    pub password: SecretString,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub app_name: String,
    /// Viewport widths below this many pixels get the compact layout.
    pub mobile_breakpoint: f64,
    pub storage_prefix: String,
    pub demo_account: Option<DemoAccount>,
    pub seed_directory: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: "People HQ".into(),
            mobile_breakpoint: 768.0,
            storage_prefix: "hris".into(),
            demo_account: Some(DemoAccount {
                display_name: "HR Admin".into(),
                email: "admin@peoplehq.test".into(),
                password: "peoplehq-demo".to_string().into(),
            }),
            seed_directory: true,
        }
    }
}

impl Config {
    /// Read `HRIS_*` variables. Targets without an environment get the defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let mobile_breakpoint = match lookup("HRIS_MOBILE_BREAKPOINT") {
            Some(raw) => match raw.trim().parse::<f64>() {
                Ok(px) if px.is_finite() && px > 0.0 => px,
                _ => {
                    return Err(
                        err!("HRIS_MOBILE_BREAKPOINT must be a positive number, got '{raw}'")
                            .into(),
                    );
                }
            },
            None => defaults.mobile_breakpoint,
        };

        let demo_enabled = lookup("HRIS_DEMO_ACCOUNT")
            .map(|raw| parse_bool("HRIS_DEMO_ACCOUNT", &raw))
            .transpose()?
            .unwrap_or(true);
        let demo_account = match (demo_enabled, defaults.demo_account) {
            (true, Some(demo)) => Some(DemoAccount {
                email: lookup("HRIS_DEMO_EMAIL").unwrap_or(demo.email),
                password: lookup("HRIS_DEMO_PASSWORD")
                    .map(SecretString::from)
                    .unwrap_or(demo.password),
                display_name: demo.display_name,
            }),
            _ => None,
        };

        Ok(Self {
            app_name: lookup("HRIS_APP_NAME").unwrap_or(defaults.app_name),
            mobile_breakpoint,
            storage_prefix: lookup("HRIS_STORAGE_PREFIX").unwrap_or(defaults.storage_prefix),
            demo_account,
            seed_directory: lookup("HRIS_SEED_DIRECTORY")
                .map(|raw| parse_bool("HRIS_SEED_DIRECTORY", &raw))
                .transpose()?
                .unwrap_or(defaults.seed_directory),
        })
    }
}

fn parse_bool(name: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(err!("{name} must be true or false, got '{raw}'").into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.app_name, "People HQ");
        assert_eq!(config.mobile_breakpoint, 768.0);
        assert!(config.seed_directory);
        assert!(config.demo_account.is_some());
    }

    #[test]
    fn variables_override_defaults() {
        let config = config_from(&[
            ("HRIS_APP_NAME", "Acme HR"),
            ("HRIS_MOBILE_BREAKPOINT", "640"),
            ("HRIS_DEMO_EMAIL", "demo@acme.test"),
            ("HRIS_DEMO_PASSWORD", "acme-password"),
            ("HRIS_SEED_DIRECTORY", "off"),
        ])
        .unwrap();

        assert_eq!(config.app_name, "Acme HR");
        assert_eq!(config.mobile_breakpoint, 640.0);
        assert!(!config.seed_directory);
        let demo = config.demo_account.unwrap();
        assert_eq!(demo.email, "demo@acme.test");
        assert_eq!(demo.password.expose_secret(), "acme-password");
    }

    #[test]
    fn demo_account_can_be_disabled() {
        let config = config_from(&[("HRIS_DEMO_ACCOUNT", "false")]).unwrap();
        assert!(config.demo_account.is_none());
    }

    #[test]
    fn malformed_values_are_rejected() {
        let error = config_from(&[("HRIS_MOBILE_BREAKPOINT", "wide")]).unwrap_err();
        assert!(error.message.contains("HRIS_MOBILE_BREAKPOINT"));

        assert!(config_from(&[("HRIS_SEED_DIRECTORY", "maybe")]).is_err());
    }
}
