/// Application configuration module
use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: String,
    pub telemetry: TelemetryConfig,
    pub weather_seed: Option<u64>,
    pub seed_fleet: bool,
}

#[derive(Clone, Debug)]
pub struct TelemetryConfig {
    /// Endpoint receiving launch records; log-only when absent
    pub url: Option<String>,
    pub timeout_seconds: u64,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let telemetry = TelemetryConfig {
            url: env::var("TELEMETRY_URL").ok().filter(|s| !s.trim().is_empty()),
            timeout_seconds: env_u64("TELEMETRY_TIMEOUT_SECONDS", 30),
        };

        let weather_seed = env::var("WEATHER_SEED").ok().and_then(|s| s.parse().ok());

        Ok(Self {
            bind_addr,
            telemetry,
            weather_seed,
            seed_fleet: env_bool("SEED_FLEET", true),
        })
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn env_bool(key: &str, default: bool) -> bool {
    env::var(key)
        .ok()
        .and_then(|s| parse_bool(&s))
        .unwrap_or(default)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_accepts_common_spellings() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool(" YES "), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("off"), Some(false));
    }

    #[test]
    fn test_parse_bool_rejects_garbage() {
        assert_eq!(parse_bool("maybe"), None);
        assert_eq!(parse_bool(""), None);
    }

    #[test]
    fn test_env_u64_falls_back_on_missing_key() {
        assert_eq!(env_u64("MISSION_CONTROL_TEST_UNSET_KEY", 42), 42);
    }
}
