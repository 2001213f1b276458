use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::wardrobe::{ClimateProfile, ColorPalette, DEFAULT_CAPSULE_OUTFITS};

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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub styling: StylingConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            styling: StylingConfig::from_env()?,
        })
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

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Palette, climate and capsule defaults applied to every styling request.
#[derive(Debug, Clone, PartialEq)]
pub struct StylingConfig {
    pub season: String,
    pub neutrals: Vec<String>,
    pub accents: Vec<String>,
    pub typical_temp_c: f64,
    pub rainy: bool,
    pub capsule_outfits: usize,
}

impl Default for StylingConfig {
    fn default() -> Self {
        Self {
            season: "spring".to_string(),
            neutrals: ["black", "white", "beige", "camel", "navy", "ivory"]
                .map(String::from)
                .to_vec(),
            accents: ["pink", "red", "olive", "rust", "forest"]
                .map(String::from)
                .to_vec(),
            typical_temp_c: 18.0,
            rainy: false,
            capsule_outfits: DEFAULT_CAPSULE_OUTFITS,
        }
    }
}

impl StylingConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let season = env::var("STYLIST_SEASON").unwrap_or(defaults.season);
        let neutrals = env::var("STYLIST_NEUTRALS")
            .map(|raw| split_list(&raw))
            .unwrap_or(defaults.neutrals);
        let accents = env::var("STYLIST_ACCENTS")
            .map(|raw| split_list(&raw))
            .unwrap_or(defaults.accents);

        let typical_temp_c = match env::var("STYLIST_TEMP_C") {
            Ok(raw) => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or(ConfigError::InvalidTemperature(raw))?,
            Err(_) => defaults.typical_temp_c,
        };

        let rainy = match env::var("STYLIST_RAINY") {
            Ok(raw) => parse_flag(&raw).ok_or(ConfigError::InvalidRainFlag(raw))?,
            Err(_) => defaults.rainy,
        };

        let capsule_outfits = match env::var("STYLIST_CAPSULE_OUTFITS") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|value| *value > 0)
                .ok_or(ConfigError::InvalidCapsuleSize(raw))?,
            Err(_) => defaults.capsule_outfits,
        };

        Ok(Self {
            season,
            neutrals,
            accents,
            typical_temp_c,
            rainy,
            capsule_outfits,
        })
    }

    pub fn palette(&self) -> ColorPalette {
        ColorPalette::new(self.season.clone(), &self.neutrals, &self.accents)
    }

    pub fn climate(&self) -> ClimateProfile {
        ClimateProfile {
            typical_temp_c: self.typical_temp_c,
            rainy: self.rainy,
        }
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|item| item.trim().to_lowercase())
        .filter(|item| !item.is_empty())
        .collect()
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidTemperature(String),
    InvalidRainFlag(String),
    InvalidCapsuleSize(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidTemperature(raw) => {
                write!(f, "STYLIST_TEMP_C must be a number of degrees, got '{raw}'")
            }
            ConfigError::InvalidRainFlag(raw) => {
                write!(f, "STYLIST_RAINY must be true or false, got '{raw}'")
            }
            ConfigError::InvalidCapsuleSize(raw) => {
                write!(f, "STYLIST_CAPSULE_OUTFITS must be a positive integer, got '{raw}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            _ => None,
        }
    }
}
