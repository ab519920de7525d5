use std::{net::SocketAddr, time::Duration};

use crate::server::{
    error::{config::ConfigError, AppError},
    service::order_status::guard::TransitionPolicy,
};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_OVERDUE_SWEEP_SCHEDULE: &str = "0 */5 * * * *";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,

    pub transition_policy: TransitionPolicy,
    /// Cron expression for the overdue sweep, `None` when disabled.
    pub overdue_sweep_schedule: Option<String>,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, `None` if unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvVar)` - A variable is set to an unusable value
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address = parse_var(
            "BIND_ADDRESS",
            lookup("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            |value| value.parse::<SocketAddr>().map_err(|e| e.to_string()),
        )?;

        let transition_policy = match lookup("STATUS_TRANSITION_POLICY") {
            Some(value) => parse_var("STATUS_TRANSITION_POLICY", value, |value| {
                value.parse::<TransitionPolicy>()
            })?,
            None => TransitionPolicy::default(),
        };

        let overdue_sweep_schedule = match lookup("OVERDUE_SWEEP_SCHEDULE") {
            Some(value) if value == "off" => None,
            Some(value) => Some(value),
            None => Some(DEFAULT_OVERDUE_SWEEP_SCHEDULE.to_string()),
        };

        let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(value) => parse_var("REQUEST_TIMEOUT_SECS", value, |value| {
                match value.parse::<u64>() {
                    Ok(0) => Err("must be greater than zero".to_string()),
                    Ok(secs) => Ok(Duration::from_secs(secs)),
                    Err(e) => Err(e.to_string()),
                }
            })?,
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        Ok(Self {
            database_url,
            bind_address,
            transition_policy,
            overdue_sweep_schedule,
            request_timeout,
        })
    }
}

fn parse_var<T>(
    name: &str,
    value: String,
    parse: impl FnOnce(&str) -> Result<T, String>,
) -> Result<T, ConfigError> {
    parse(&value).map_err(|reason| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn applies_defaults() {
        let config = config_from(&[("DATABASE_URL", "sqlite://rental.db")]).unwrap();

        assert_eq!(config.database_url, "sqlite://rental.db");
        assert_eq!(config.bind_address, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.transition_policy, TransitionPolicy::Strict);
        assert_eq!(
            config.overdue_sweep_schedule.as_deref(),
            Some("0 */5 * * * *")
        );
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("BIND_ADDRESS", "127.0.0.1:3000"),
            ("STATUS_TRANSITION_POLICY", "staff-override"),
            ("OVERDUE_SWEEP_SCHEDULE", "off"),
            ("REQUEST_TIMEOUT_SECS", "5"),
        ])
        .unwrap();

        assert_eq!(config.bind_address, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.transition_policy, TransitionPolicy::StaffOverride);
        assert_eq!(config.overdue_sweep_schedule, None);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn requires_database_url() {
        let result = config_from(&[]);

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(name))) if name == "DATABASE_URL"
        ));
    }

    #[test]
    fn rejects_invalid_values() {
        for (name, value) in [
            ("STATUS_TRANSITION_POLICY", "permissive"),
            ("REQUEST_TIMEOUT_SECS", "0"),
            ("REQUEST_TIMEOUT_SECS", "soon"),
            ("BIND_ADDRESS", "localhost"),
        ] {
            let result = config_from(&[("DATABASE_URL", "sqlite::memory:"), (name, value)]);

            assert!(
                matches!(
                    &result,
                    Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { name: n, .. })) if n == name
                ),
                "{name}={value}"
            );
        }
    }
}
