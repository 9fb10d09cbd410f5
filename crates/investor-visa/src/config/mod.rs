use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

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

/// Top-level configuration for the assessment service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub reports: ReportConfig,
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
            reports: ReportConfig::from_env()?,
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

/// Branding and delivery settings handed to report rendering.
///
/// The evaluators never read this; it only shapes the rendered report and the
/// outgoing envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub app_name: String,
    pub firm_name: String,
    pub support_email: String,
    pub from_email: String,
    pub from_name: String,
    pub subject: String,
    pub disclaimer_short: String,
    pub disclaimer_full: String,
    pub emails_enabled: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            app_name: "NZ Visa Assessment Tool".to_string(),
            firm_name: "Your Law Firm".to_string(),
            support_email: "support@yoursite.com".to_string(),
            from_email: "onboarding@resend.dev".to_string(),
            from_name: "NZ Visa Assessment".to_string(),
            subject: "Your NZ Business Investor Visa Assessment Results".to_string(),
            disclaimer_short: "This assessment provides preliminary guidance only and does not constitute legal advice.".to_string(),
            disclaimer_full: "This tool provides preliminary assessment only and does not constitute legal advice. Immigration New Zealand makes final decisions. Results are based on information you provide. We recommend professional legal advice before making investment decisions. No guarantee of visa approval.".to_string(),
            emails_enabled: true,
        }
    }
}

impl ReportConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let emails_enabled = match env::var("APP_EMAIL_ENABLED") {
            Ok(raw) => parse_flag(&raw).ok_or(ConfigError::InvalidFlag {
                name: "APP_EMAIL_ENABLED",
            })?,
            Err(_) => defaults.emails_enabled,
        };

        Ok(Self {
            app_name: env::var("APP_NAME").unwrap_or(defaults.app_name),
            firm_name: env::var("APP_FIRM_NAME").unwrap_or(defaults.firm_name),
            support_email: env::var("APP_SUPPORT_EMAIL").unwrap_or(defaults.support_email),
            from_email: env::var("APP_EMAIL_FROM").unwrap_or(defaults.from_email),
            from_name: env::var("APP_EMAIL_FROM_NAME").unwrap_or(defaults.from_name),
            subject: defaults.subject,
            disclaimer_short: defaults.disclaimer_short,
            disclaimer_full: defaults.disclaimer_full,
            emails_enabled,
        })
    }

    /// `"Name <address>"` sender line.
    pub fn sender(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }
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
    InvalidFlag { name: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidFlag { name } => {
                write!(f, "{name} must be one of true/false/1/0/yes/no/on/off")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidFlag { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
