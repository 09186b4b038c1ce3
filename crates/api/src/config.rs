use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::auth::session::SessionConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the session secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Session cookie signing and lifetime.
    pub session: SessionConfig,
    /// Push webhook settings.
    pub webhook: WebhookConfig,
}

/// Settings for the `/update_server` push webhook.
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    /// Shared secret used to verify `X-Hub-Signature`. When unset every
    /// webhook call is refused.
    pub secret: Option<String>,
    /// Git checkout pulled after a verified push.
    pub repo_path: PathBuf,
    /// Upper bound on the `git pull` child process, in seconds.
    pub pull_timeout_secs: u64,
}

impl WebhookConfig {
    /// HMAC key for signature checks: the secret's UTF-8 bytes, as GitHub
    /// keys it.
    pub fn secret_key(&self) -> Option<&[u8]> {
        self.secret.as_deref().map(str::as_bytes)
    }

    /// Deadline for a whole `/update_server` request.
    ///
    /// The webhook route is exempt from the page timeout; it gets the pull
    /// bound plus [`WEBHOOK_TIMEOUT_GRACE_SECS`] so the pull's own timeout
    /// always fires first and is reported as a failed update.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.pull_timeout_secs + WEBHOOK_TIMEOUT_GRACE_SECS)
    }
}

/// Startup configuration problems.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set in the environment")]
    Missing(&'static str),

    #[error("{name} has an invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Default session lifetime: one week.
const DEFAULT_SESSION_EXPIRY_HOURS: i64 = 168;
/// Longest accepted session lifetime: one year.
pub const MAX_SESSION_EXPIRY_HOURS: i64 = 24 * 366;
/// Default bound on the webhook pull.
const DEFAULT_PULL_TIMEOUT_SECS: u64 = 60;
/// Longest accepted webhook pull bound: one hour.
pub const MAX_PULL_TIMEOUT_SECS: u64 = 3600;
/// Time the webhook request may run past the pull bound.
pub const WEBHOOK_TIMEOUT_GRACE_SECS: u64 = 5;

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default     |
    /// |-------------------------|-------------|
    /// | `HOST`                  | `0.0.0.0`   |
    /// | `PORT`                  | `3000`      |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`        |
    /// | `SESSION_SECRET`        | **required**|
    /// | `SESSION_EXPIRY_HOURS`  | `168`       |
    /// | `SESSION_COOKIE_SECURE` | `false`     |
    /// | `W_SECRET`              | unset       |
    /// | `DEPLOY_REPO_PATH`      | `./mysite`  |
    /// | `GIT_PULL_TIMEOUT_SECS` | `60`        |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&lookup, "PORT", 3000u16)?;
        let request_timeout_secs = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30u64)?;
        if request_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                name: "REQUEST_TIMEOUT_SECS",
                value: request_timeout_secs.to_string(),
            });
        }

        let secret = lookup("SESSION_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("SESSION_SECRET"))?;
        let expiry_hours = parse_or(&lookup, "SESSION_EXPIRY_HOURS", DEFAULT_SESSION_EXPIRY_HOURS)?;
        if !(1..=MAX_SESSION_EXPIRY_HOURS).contains(&expiry_hours) {
            return Err(ConfigError::Invalid {
                name: "SESSION_EXPIRY_HOURS",
                value: expiry_hours.to_string(),
            });
        }
        let secure_cookie = parse_or(&lookup, "SESSION_COOKIE_SECURE", false)?;

        let pull_timeout_secs =
            parse_or(&lookup, "GIT_PULL_TIMEOUT_SECS", DEFAULT_PULL_TIMEOUT_SECS)?;
        if !(1..=MAX_PULL_TIMEOUT_SECS).contains(&pull_timeout_secs) {
            return Err(ConfigError::Invalid {
                name: "GIT_PULL_TIMEOUT_SECS",
                value: pull_timeout_secs.to_string(),
            });
        }

        let webhook = WebhookConfig {
            secret: lookup("W_SECRET").filter(|s| !s.is_empty()),
            repo_path: lookup("DEPLOY_REPO_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./mysite")),
            pull_timeout_secs,
        };

        Ok(Self {
            host,
            port,
            request_timeout_secs,
            session: SessionConfig {
                secret,
                expiry_hours,
                secure_cookie,
            },
            webhook,
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_apply() {
        let config = ServerConfig::from_lookup(lookup_from(&[("SESSION_SECRET", "s3cret")]))
            .expect("config should load");

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.session.expiry_hours, 168);
        assert!(!config.session.secure_cookie);
        assert_eq!(config.webhook.secret, None);
        assert_eq!(config.webhook.repo_path, PathBuf::from("./mysite"));
        assert_eq!(config.webhook.pull_timeout_secs, 60);
    }

    #[test]
    fn test_overrides_apply() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("SESSION_SECRET", "s3cret"),
            ("PORT", "8080"),
            ("SESSION_COOKIE_SECURE", "true"),
            ("W_SECRET", "hook"),
            ("DEPLOY_REPO_PATH", "/srv/app"),
        ]))
        .expect("config should load");

        assert_eq!(config.port, 8080);
        assert!(config.session.secure_cookie);
        assert_eq!(config.webhook.secret.as_deref(), Some("hook"));
        assert_eq!(config.webhook.repo_path, PathBuf::from("/srv/app"));
    }

    #[test]
    fn test_session_secret_is_required() {
        assert_matches!(
            ServerConfig::from_lookup(lookup_from(&[])),
            Err(ConfigError::Missing("SESSION_SECRET"))
        );
        assert_matches!(
            ServerConfig::from_lookup(lookup_from(&[("SESSION_SECRET", "")])),
            Err(ConfigError::Missing("SESSION_SECRET"))
        );
    }

    #[test]
    fn test_invalid_port_names_the_variable() {
        let result = ServerConfig::from_lookup(lookup_from(&[
            ("SESSION_SECRET", "s3cret"),
            ("PORT", "eighty"),
        ]));
        assert_matches!(result, Err(ConfigError::Invalid { name: "PORT", .. }));
    }

    #[test]
    fn test_empty_webhook_secret_counts_as_unset() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("SESSION_SECRET", "s3cret"),
            ("W_SECRET", ""),
        ]))
        .expect("config should load");
        assert_eq!(config.webhook.secret, None);
    }

    #[test]
    fn test_session_expiry_is_bounded() {
        for value in ["0", "-3", "8785", "9223372036854775807"] {
            let result = ServerConfig::from_lookup(lookup_from(&[
                ("SESSION_SECRET", "s3cret"),
                ("SESSION_EXPIRY_HOURS", value),
            ]));
            assert_matches!(
                result,
                Err(ConfigError::Invalid { name: "SESSION_EXPIRY_HOURS", .. }),
                "expiry {value} must be refused"
            );
        }

        let config = ServerConfig::from_lookup(lookup_from(&[
            ("SESSION_SECRET", "s3cret"),
            ("SESSION_EXPIRY_HOURS", "8784"),
        ]))
        .expect("one year is accepted");
        assert_eq!(config.session.expiry_hours, MAX_SESSION_EXPIRY_HOURS);
    }

    #[test]
    fn test_pull_timeout_is_bounded() {
        for value in ["0", "3601", "18446744073709551615"] {
            let result = ServerConfig::from_lookup(lookup_from(&[
                ("SESSION_SECRET", "s3cret"),
                ("GIT_PULL_TIMEOUT_SECS", value),
            ]));
            assert_matches!(
                result,
                Err(ConfigError::Invalid { name: "GIT_PULL_TIMEOUT_SECS", .. }),
                "pull timeout {value} must be refused"
            );
        }
    }

    #[test]
    fn test_zero_request_timeout_is_refused() {
        let result = ServerConfig::from_lookup(lookup_from(&[
            ("SESSION_SECRET", "s3cret"),
            ("REQUEST_TIMEOUT_SECS", "0"),
        ]));
        assert_matches!(result, Err(ConfigError::Invalid { name: "REQUEST_TIMEOUT_SECS", .. }));
    }

    #[test]
    fn test_webhook_deadline_outlasts_pull_bound() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("SESSION_SECRET", "s3cret"),
            ("REQUEST_TIMEOUT_SECS", "10"),
            ("GIT_PULL_TIMEOUT_SECS", "120"),
        ]))
        .expect("a pull bound above the page timeout is fine");

        let pull = Duration::from_secs(config.webhook.pull_timeout_secs);
        assert!(config.webhook.request_timeout() > pull);
        assert_eq!(config.webhook.request_timeout(), Duration::from_secs(125));
    }
}
