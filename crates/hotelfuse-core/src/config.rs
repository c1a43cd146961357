use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// All variables have defaults, so this only fails on unparseable values.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric env var cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup
/// function.
///
/// The parsing logic is decoupled from the actual environment so it can be
/// tested with a pure `HashMap` lookup, no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let suppliers_path = PathBuf::from(or_default(
        "HOTELFUSE_SUPPLIERS_PATH",
        "./config/suppliers.yaml",
    ));
    let log_level = or_default("HOTELFUSE_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("HOTELFUSE_REQUEST_TIMEOUT_SECS", "10")?;
    let user_agent = or_default(
        "HOTELFUSE_USER_AGENT",
        "hotelfuse/0.1 (hotel-aggregation)",
    );
    let max_retries = parse_u32("HOTELFUSE_MAX_RETRIES", "2")?;
    let backoff_base_ms = parse_u64("HOTELFUSE_BACKOFF_BASE_MS", "1000")?;

    Ok(AppConfig {
        suppliers_path,
        log_level,
        request_timeout_secs,
        user_agent,
        max_retries,
        backoff_base_ms,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn build_app_config_succeeds_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.suppliers_path, PathBuf::from("./config/suppliers.yaml"));
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.request_timeout_secs, 10);
        assert_eq!(cfg.user_agent, "hotelfuse/0.1 (hotel-aggregation)");
        assert_eq!(cfg.max_retries, 2);
        assert_eq!(cfg.backoff_base_ms, 1000);
    }

    #[test]
    fn build_app_config_honors_overrides() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("HOTELFUSE_SUPPLIERS_PATH", "/etc/hotelfuse/suppliers.yaml");
        map.insert("HOTELFUSE_REQUEST_TIMEOUT_SECS", "30");
        map.insert("HOTELFUSE_MAX_RETRIES", "5");
        map.insert("HOTELFUSE_BACKOFF_BASE_MS", "250");
        map.insert("HOTELFUSE_LOG_LEVEL", "debug");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(
            cfg.suppliers_path,
            PathBuf::from("/etc/hotelfuse/suppliers.yaml")
        );
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.max_retries, 5);
        assert_eq!(cfg.backoff_base_ms, 250);
        assert_eq!(cfg.log_level, "debug");
    }

    #[test]
    fn build_app_config_fails_on_invalid_timeout() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("HOTELFUSE_REQUEST_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "HOTELFUSE_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(HOTELFUSE_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_on_invalid_max_retries() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("HOTELFUSE_MAX_RETRIES", "-1");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "HOTELFUSE_MAX_RETRIES"),
            "expected InvalidEnvVar(HOTELFUSE_MAX_RETRIES), got: {result:?}"
        );
    }
}
