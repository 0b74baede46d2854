//! Wall updater configuration.
//!
//! Layered: struct defaults -> optional YAML file -> process environment.
//! Only the variables in [`ENV_KEYS`] are read from the environment.

use std::path::Path;
use std::time::Duration;

use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use secrecy::SecretString;
use serde::{Deserialize, Deserializer, Serialize, de};
use wall_updater_sdk::WallUpdaterError;

/// Environment variables that feed [`WallUpdaterConfig`].
pub const ENV_KEYS: [&str; 5] = [
    "RAILS_INTERNAL_URL",
    "ENVIRONMENT",
    "PADLET_AI_TOKEN",
    "REQUEST_TIMEOUT_MS",
    "ENFORCE_MAP_LOCATIONS",
];

/// Deployment mode. Anything other than `development` reads as production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentMode {
    Development,
    #[default]
    #[serde(other)]
    Production,
}

impl DeploymentMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

/// Configuration for the wall updater.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WallUpdaterConfig {
    /// Base URL of the wall service. Required to send updates; no default.
    pub rails_internal_url: Option<String>,
    /// Development mode enables operator diagnostics.
    pub environment: DeploymentMode,
    /// Fallback credential for local use when the call context has none.
    #[serde(deserialize_with = "deserialize_secret")]
    pub padlet_ai_token: Option<SecretString>,
    /// Timeout for the whole update request in milliseconds.
    pub request_timeout_ms: u64,
    /// Reject map-format updates whose new posts lack location data.
    #[serde(deserialize_with = "deserialize_flag")]
    pub enforce_map_locations: bool,
}

impl Default for WallUpdaterConfig {
    fn default() -> Self {
        Self {
            rails_internal_url: None,
            environment: DeploymentMode::Production,
            padlet_ai_token: None,
            request_timeout_ms: 30_000,
            enforce_map_locations: false,
        }
    }
}

impl WallUpdaterConfig {
    /// Load configuration from an optional YAML file and the environment.
    ///
    /// # Errors
    /// Returns [`WallUpdaterError::Config`] if a source holds a value of the
    /// wrong type or the request timeout is zero.
    pub fn load(path: Option<&Path>) -> Result<Self, WallUpdaterError> {
        let mut figment = Figment::new();
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        let config: Self = figment
            .merge(Env::raw().only(&ENV_KEYS))
            .extract()
            .map_err(|e| WallUpdaterError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), WallUpdaterError> {
        if self.request_timeout_ms == 0 {
            return Err(WallUpdaterError::config(
                "request_timeout_ms must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Configuration read from the environment only.
    ///
    /// # Errors
    /// See [`load`](Self::load).
    pub fn from_env() -> Result<Self, WallUpdaterError> {
        Self::load(None)
    }

    /// The configured base URL, ignoring blank values.
    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.rails_internal_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        self.environment == DeploymentMode::Development
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

/// Scalar as read from YAML or the environment. Environment values that
/// look like numbers or booleans arrive already typed.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Bool(bool),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Text(String),
}

/// Empty strings count as unset. Typed scalars are read back as their text.
fn deserialize_secret<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Option::<RawScalar>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(RawScalar::Text(s)) => s,
        Some(RawScalar::Unsigned(n)) => n.to_string(),
        Some(RawScalar::Signed(n)) => n.to_string(),
        Some(RawScalar::Float(n)) => n.to_string(),
        Some(RawScalar::Bool(b)) => b.to_string(),
    };
    Ok(Some(text).filter(|s| !s.is_empty()).map(SecretString::from))
}

/// Accepts `true`/`false`, `1`/`0`, or those spelled as strings.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match RawScalar::deserialize(deserializer)? {
        RawScalar::Bool(b) => Ok(b),
        RawScalar::Unsigned(1) | RawScalar::Signed(1) => Ok(true),
        RawScalar::Unsigned(0) | RawScalar::Signed(0) => Ok(false),
        RawScalar::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" | "" => Ok(false),
            other => Err(de::Error::custom(format!("invalid flag value `{other}`"))),
        },
        _ => Err(de::Error::custom("flag must be true, false, 1 or 0")),
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::io::Write;

    /// Every known key: set to the given value or unset.
    fn env_vars(set: &[(&str, &'static str)]) -> Vec<(&'static str, Option<&'static str>)> {
        ENV_KEYS
            .iter()
            .map(|key| {
                let value = set.iter().find(|(name, _)| name == key).map(|(_, v)| *v);
                (*key, value)
            })
            .collect()
    }

    #[test]
    fn defaults_without_environment() {
        temp_env::with_vars(env_vars(&[]), || {
            let config = WallUpdaterConfig::from_env().unwrap();
            assert_eq!(config.base_url(), None);
            assert_eq!(config.environment, DeploymentMode::Production);
            assert!(config.padlet_ai_token.is_none());
            assert_eq!(config.request_timeout(), Duration::from_secs(30));
            assert!(!config.enforce_map_locations);
        });
    }

    #[test]
    fn reads_environment_variables() {
        let vars = env_vars(&[
            ("RAILS_INTERNAL_URL", "http://rails.internal:3000/"),
            ("ENVIRONMENT", "development"),
            ("PADLET_AI_TOKEN", "env-token"),
            ("REQUEST_TIMEOUT_MS", "1500"),
        ]);

        temp_env::with_vars(vars, || {
            let config = WallUpdaterConfig::from_env().unwrap();
            assert_eq!(config.base_url(), Some("http://rails.internal:3000/"));
            assert!(config.is_development());
            assert_eq!(
                config.padlet_ai_token.as_ref().unwrap().expose_secret(),
                "env-token"
            );
            assert_eq!(config.request_timeout(), Duration::from_millis(1500));
        });
    }

    #[test]
    fn unknown_environment_reads_as_production() {
        let vars = env_vars(&[("ENVIRONMENT", "staging")]);

        temp_env::with_vars(vars, || {
            let config = WallUpdaterConfig::from_env().unwrap();
            assert_eq!(config.environment, DeploymentMode::Production);
        });
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = WallUpdaterConfig {
            rails_internal_url: Some("   ".to_owned()),
            ..Default::default()
        };
        assert_eq!(config.base_url(), None);

        let vars = env_vars(&[("PADLET_AI_TOKEN", "")]);
        temp_env::with_vars(vars, || {
            let config = WallUpdaterConfig::from_env().unwrap();
            assert!(config.padlet_ai_token.is_none());
        });
    }

    #[test]
    fn environment_overrides_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "rails_internal_url: http://from-yaml\nenforce_map_locations: true\nrequest_timeout_ms: 2000"
        )
        .unwrap();

        let vars = env_vars(&[("RAILS_INTERNAL_URL", "http://from-env")]);

        temp_env::with_vars(vars, || {
            let config = WallUpdaterConfig::load(Some(file.path())).unwrap();
            assert_eq!(config.base_url(), Some("http://from-env"));
            assert!(config.enforce_map_locations);
            assert_eq!(config.request_timeout_ms, 2000);
        });
    }

    #[test]
    fn wrong_type_is_a_config_error() {
        let vars = env_vars(&[("REQUEST_TIMEOUT_MS", "soon")]);

        temp_env::with_vars(vars, || {
            let err = WallUpdaterConfig::from_env().unwrap_err();
            assert!(matches!(err, WallUpdaterError::Config { .. }));
        });
    }

    #[test]
    fn numeric_token_is_kept_as_digits() {
        let vars = env_vars(&[("PADLET_AI_TOKEN", "123456")]);

        temp_env::with_vars(vars, || {
            let config = WallUpdaterConfig::from_env().unwrap();
            assert_eq!(
                config.padlet_ai_token.as_ref().unwrap().expose_secret(),
                "123456"
            );
        });
    }

    #[test]
    fn map_flag_accepts_numeric_and_text_forms() {
        for (raw, expected) in [("1", true), ("0", false), ("true", true), ("false", false)] {
            let vars = env_vars(&[("ENFORCE_MAP_LOCATIONS", raw)]);
            temp_env::with_vars(vars, || {
                let config = WallUpdaterConfig::from_env().unwrap();
                assert_eq!(config.enforce_map_locations, expected, "value {raw}");
            });
        }

        let vars = env_vars(&[("ENFORCE_MAP_LOCATIONS", "sometimes")]);
        temp_env::with_vars(vars, || {
            let err = WallUpdaterConfig::from_env().unwrap_err();
            assert!(matches!(err, WallUpdaterError::Config { .. }));
        });
    }

    #[test]
    fn zero_timeout_is_a_config_error() {
        let vars = env_vars(&[("REQUEST_TIMEOUT_MS", "0")]);

        temp_env::with_vars(vars, || {
            let err = WallUpdaterConfig::from_env().unwrap_err();
            assert!(matches!(err, WallUpdaterError::Config { .. }));
            assert!(err.to_string().contains("request_timeout_ms"));
        });
    }

    #[test]
    fn debug_redacts_token() {
        let config = WallUpdaterConfig {
            padlet_ai_token: Some(SecretString::from("hunter2".to_owned())),
            ..Default::default()
        };
        assert!(!format!("{config:?}").contains("hunter2"));
    }
}
