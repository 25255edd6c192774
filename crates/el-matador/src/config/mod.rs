use crate::finance::health::InsightSettings;
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

const MAX_EMERGENCY_TARGET_MONTHS: u8 = 24;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the scoring service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub insights: InsightSettings,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("MATADOR_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("MATADOR_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("MATADOR_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("MATADOR_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let emergency_target_months = match env::var("MATADOR_EMERGENCY_TARGET_MONTHS") {
            Ok(raw) => parse_target_months(&raw)?,
            Err(_) => InsightSettings::default().emergency_target_months,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig {
                log_level,
                ansi: environment == AppEnvironment::Development,
            },
            insights: InsightSettings {
                emergency_target_months,
            },
        })
    }
}

fn parse_target_months(raw: &str) -> Result<u8, ConfigError> {
    match raw.trim().parse::<u8>() {
        Ok(months) if (1..=MAX_EMERGENCY_TARGET_MONTHS).contains(&months) => Ok(months),
        _ => Err(ConfigError::InvalidTargetMonths {
            value: raw.to_string(),
        }),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Log filtering and formatting.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub ansi: bool,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidTargetMonths { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "MATADOR_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "MATADOR_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidTargetMonths { value } => write!(
                f,
                "MATADOR_EMERGENCY_TARGET_MONTHS must be between 1 and {MAX_EMERGENCY_TARGET_MONTHS} (got '{value}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidTargetMonths { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for key in [
            "MATADOR_ENV",
            "MATADOR_HOST",
            "MATADOR_PORT",
            "MATADOR_LOG_LEVEL",
            "MATADOR_EMERGENCY_TARGET_MONTHS",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.insights.emergency_target_months, 6);
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("MATADOR_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn rejects_out_of_range_target_months() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("MATADOR_EMERGENCY_TARGET_MONTHS", "0");
        let err = AppConfig::load().expect_err("zero months rejected");
        assert!(matches!(err, ConfigError::InvalidTargetMonths { .. }));

        env::set_var("MATADOR_EMERGENCY_TARGET_MONTHS", "3");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.insights.emergency_target_months, 3);
        reset_env();
    }

    #[test]
    fn production_disables_ansi_logs() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("MATADOR_ENV", "prod");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
        assert!(!config.telemetry.ansi);
        reset_env();
    }
}
