//! Process settings read from the environment.

use crate::auth::MAX_TOKEN_TTL_SECS;
use crate::error::ConfigError;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/holocron";
const DEFAULT_SCHEMA: &str = "holocron";
const DEV_JWT_SECRET: &str = "dev-secret-key-change-in-production";

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    /// Schema holding every table. Plain identifier only (letters, digits, underscore).
    pub schema: String,
    pub bind_addr: SocketAddr,
    pub jwt_secret: String,
    pub token_ttl_secs: i64,
    pub db_max_connections: u32,
    /// Allowed CORS origin; `*` allows any.
    pub frontend_url: String,
    pub body_limit_bytes: usize,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let schema = get("HOLOCRON_SCHEMA").unwrap_or_else(|| DEFAULT_SCHEMA.into());
        if !is_plain_identifier(&schema) {
            return Err(ConfigError::Invalid {
                key: "HOLOCRON_SCHEMA",
                value: schema,
            });
        }

        let host = get("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let host = IpAddr::from_str(&host).map_err(|_| ConfigError::Invalid { key: "HOST", value: host })?;
        let port: u16 = parse_or("PORT", get("PORT"), 3000)?;

        let jwt_secret = match get("JWT_SECRET") {
            Some(s) => s,
            None => {
                tracing::warn!("JWT_SECRET not set, using the development secret");
                DEV_JWT_SECRET.into()
            }
        };

        let token_ttl_secs: i64 = parse_or("TOKEN_TTL_SECS", get("TOKEN_TTL_SECS"), 3600)?;
        if !(1..=MAX_TOKEN_TTL_SECS).contains(&token_ttl_secs) {
            return Err(ConfigError::Invalid {
                key: "TOKEN_TTL_SECS",
                value: token_ttl_secs.to_string(),
            });
        }

        Ok(Settings {
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
            schema,
            bind_addr: SocketAddr::new(host, port),
            jwt_secret,
            token_ttl_secs,
            db_max_connections: parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), 5)?,
            frontend_url: get("FRONTEND_URL").unwrap_or_else(|| "*".into()),
            body_limit_bytes: parse_or("BODY_LIMIT_BYTES", get("BODY_LIMIT_BYTES"), 64 * 1024)?,
        })
    }
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { key, value }),
    }
}

fn is_plain_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Settings::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let s = settings(&[]).unwrap();
        assert_eq!(s.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(s.schema, "holocron");
        assert_eq!(s.bind_addr.port(), 3000);
        assert_eq!(s.token_ttl_secs, 3600);
        assert_eq!(s.db_max_connections, 5);
        assert_eq!(s.frontend_url, "*");
        assert_eq!(s.jwt_secret, DEV_JWT_SECRET);
    }

    #[test]
    fn overrides_are_read() {
        let s = settings(&[
            ("PORT", "5000"),
            ("HOST", "127.0.0.1"),
            ("HOLOCRON_SCHEMA", "star_wars"),
            ("JWT_SECRET", "s3cret"),
            ("TOKEN_TTL_SECS", "60"),
        ])
        .unwrap();
        assert_eq!(s.bind_addr.to_string(), "127.0.0.1:5000");
        assert_eq!(s.schema, "star_wars");
        assert_eq!(s.jwt_secret, "s3cret");
        assert_eq!(s.token_ttl_secs, 60);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let s = settings(&[("PORT", "  "), ("DATABASE_URL", "")]).unwrap();
        assert_eq!(s.bind_addr.port(), 3000);
        assert_eq!(s.database_url, DEFAULT_DATABASE_URL);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(settings(&[("PORT", "abc")]), Err(ConfigError::Invalid { key: "PORT", .. })));
        assert!(matches!(
            settings(&[("HOLOCRON_SCHEMA", "bad-name;drop")]),
            Err(ConfigError::Invalid { key: "HOLOCRON_SCHEMA", .. })
        ));
        assert!(matches!(
            settings(&[("TOKEN_TTL_SECS", "0")]),
            Err(ConfigError::Invalid { key: "TOKEN_TTL_SECS", .. })
        ));
        assert!(matches!(
            settings(&[("TOKEN_TTL_SECS", "10000000000000000")]),
            Err(ConfigError::Invalid { key: "TOKEN_TTL_SECS", .. })
        ));
        let over_a_year = (MAX_TOKEN_TTL_SECS + 1).to_string();
        assert!(matches!(
            settings(&[("TOKEN_TTL_SECS", over_a_year.as_str())]),
            Err(ConfigError::Invalid { key: "TOKEN_TTL_SECS", .. })
        ));
        let a_year = MAX_TOKEN_TTL_SECS.to_string();
        assert!(settings(&[("TOKEN_TTL_SECS", a_year.as_str())]).is_ok());
        assert!(matches!(settings(&[("HOST", "localhost")]), Err(ConfigError::Invalid { key: "HOST", .. })));
    }
}
