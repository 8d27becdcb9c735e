use chrono::Duration;
use std::env;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} not set")]
    Missing(&'static str),
    #[error("environment variable {key} has invalid value {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub db_url: String,
    pub secret_key: String,
    pub auth: AuthConfig,
}

#[derive(Clone, Debug)]
pub struct AuthConfig {
    /// Argon2 iteration count used when hashing new passwords.
    pub work_factor: u32,
    pub token_ttl_hours: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            work_factor: 2,
            token_ttl_hours: 24,
        }
    }
}

impl EnvConfig {
    fn get_env(key: &'static str) -> Result<String, ConfigError> {
        env::var(key).map_err(|_| ConfigError::Missing(key))
    }

    fn parse_env<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
        match env::var(key) {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { key, value }),
            Err(_) => Ok(default),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let defaults = AuthConfig::default();
        let work_factor: u32 = Self::parse_env("PASSWORD_WORK_FACTOR", defaults.work_factor)?;
        if work_factor == 0 {
            return Err(ConfigError::Invalid {
                key: "PASSWORD_WORK_FACTOR",
                value: work_factor.to_string(),
            });
        }

        let token_ttl_hours: i64 = Self::parse_env("TOKEN_TTL_HOURS", defaults.token_ttl_hours)?;
        if token_ttl_hours <= 0 || Duration::try_hours(token_ttl_hours).is_none() {
            return Err(ConfigError::Invalid {
                key: "TOKEN_TTL_HOURS",
                value: token_ttl_hours.to_string(),
            });
        }

        Ok(EnvConfig {
            port: Self::parse_env("PORT", 8080)?,
            db_url: Self::get_env("POSTGRES_URI")?,
            secret_key: Self::get_env("SECRET_KEY")?,
            auth: AuthConfig {
                work_factor,
                token_ttl_hours,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test touches the process environment so nothing races on it.
    #[test]
    fn from_env_reads_required_and_defaults() {
        env::remove_var("POSTGRES_URI");
        env::set_var("SECRET_KEY", "shh");
        assert!(matches!(
            EnvConfig::from_env(),
            Err(ConfigError::Missing("POSTGRES_URI"))
        ));

        env::set_var("POSTGRES_URI", "postgresql://localhost/messagely");
        env::remove_var("PORT");
        env::remove_var("PASSWORD_WORK_FACTOR");
        env::remove_var("TOKEN_TTL_HOURS");
        let config = EnvConfig::from_env().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.secret_key, "shh");
        assert_eq!(config.auth.work_factor, 2);
        assert_eq!(config.auth.token_ttl_hours, 24);

        env::set_var("PASSWORD_WORK_FACTOR", "lots");
        assert!(matches!(
            EnvConfig::from_env(),
            Err(ConfigError::Invalid { key: "PASSWORD_WORK_FACTOR", .. })
        ));

        env::set_var("PASSWORD_WORK_FACTOR", "0");
        assert!(EnvConfig::from_env().is_err());
        env::remove_var("PASSWORD_WORK_FACTOR");

        for ttl in ["0", "-5", "9223372036854775807"] {
            env::set_var("TOKEN_TTL_HOURS", ttl);
            assert!(matches!(
                EnvConfig::from_env(),
                Err(ConfigError::Invalid { key: "TOKEN_TTL_HOURS", .. })
            ));
        }
        env::remove_var("TOKEN_TTL_HOURS");
    }
}
