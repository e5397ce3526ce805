use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the tooling.
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
    pub telemetry: TelemetryConfig,
    pub evaluation: EvaluationDefaults,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let financial_weight = env::var("APP_FINANCIAL_WEIGHT")
            .unwrap_or_else(|_| "60".to_string())
            .parse::<f64>()
            .map_err(|_| ConfigError::InvalidFinancialWeight)?;
        if !(0.0..=100.0).contains(&financial_weight) {
            return Err(ConfigError::InvalidFinancialWeight);
        }

        let vat_rate = env::var("APP_VAT_RATE")
            .unwrap_or_else(|_| "0.2".to_string())
            .parse::<f64>()
            .map_err(|_| ConfigError::InvalidVatRate)?;
        if vat_rate < 0.0 {
            return Err(ConfigError::InvalidVatRate);
        }

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            evaluation: EvaluationDefaults {
                financial_weight,
                vat_rate,
            },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Weighting defaults applied when a caller has no case file of its own, e.g. the demo.
#[derive(Debug, Clone, Copy)]
pub struct EvaluationDefaults {
    pub financial_weight: f64,
    pub vat_rate: f64,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidFinancialWeight,
    InvalidVatRate,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidFinancialWeight => {
                write!(f, "APP_FINANCIAL_WEIGHT must be a number between 0 and 100")
            }
            ConfigError::InvalidVatRate => {
                write!(f, "APP_VAT_RATE must be a non-negative number")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
