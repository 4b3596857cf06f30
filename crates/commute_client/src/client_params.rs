use reqwest::Url;
use thiserror::Error;
use tracing::debug;

pub const API_URL_ENV_VAR: &str = "COMMUTE_API_URL";
pub const FROM_ADDRESSES_ENV_VAR: &str = "COMMUTE_FROM_ADDRESSES";
pub const TO_ADDRESS_ENV_VAR: &str = "COMMUTE_TO_ADDRESS";
pub const INFRASTRUCTURE_COST_FACTOR_ENV_VAR: &str = "COMMUTE_INFRASTRUCTURE_COST_FACTOR";

pub const DEFAULT_API_URL: &str = "http://localhost:5000/recommend-team-travel";
pub const DEFAULT_INFRASTRUCTURE_COST_FACTOR: f64 = 0.5;

/// Separator between addresses in `COMMUTE_FROM_ADDRESSES`
pub const ADDRESS_SEPARATOR: char = ';';

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid API URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid infrastructure cost factor {0}, expected a finite number")]
    InvalidCostFactor(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommuteClientParams {
    pub api_url: Url,
    pub from_addresses: Vec<String>,
    pub to_address: String,
    pub infrastructure_cost_factor: f64,
}

impl CommuteClientParams {
    pub fn new(api_url: Url) -> Self {
        Self {
            api_url,
            from_addresses: Vec::new(),
            to_address: String::new(),
            infrastructure_cost_factor: DEFAULT_INFRASTRUCTURE_COST_FACTOR,
        }
    }

    /// Reads `.env.local` and `.env` if present, then the process
    /// environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::from_filename(".env.local") {
            debug!("Loaded {}", path.display());
        }
        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded {}", path.display());
        }

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = parse_api_url(
            lookup(API_URL_ENV_VAR)
                .as_deref()
                .unwrap_or(DEFAULT_API_URL),
        )?;

        let mut params = Self::new(api_url);

        if let Some(from_addresses) = lookup(FROM_ADDRESSES_ENV_VAR) {
            params.from_addresses = split_addresses(&from_addresses);
        }

        if let Some(to_address) = lookup(TO_ADDRESS_ENV_VAR) {
            params.to_address = to_address.trim().to_owned();
        }

        if let Some(factor) = lookup(INFRASTRUCTURE_COST_FACTOR_ENV_VAR) {
            params.infrastructure_cost_factor = parse_cost_factor(&factor)?;
        }

        Ok(params)
    }

    pub fn with_api_url(mut self, api_url: Url) -> Self {
        self.api_url = api_url;
        self
    }

    pub fn with_from_addresses(mut self, from_addresses: Vec<String>) -> Self {
        self.from_addresses = from_addresses;
        self
    }

    pub fn with_to_address(mut self, to_address: impl Into<String>) -> Self {
        self.to_address = to_address.into();
        self
    }

    pub fn with_infrastructure_cost_factor(mut self, factor: f64) -> Self {
        self.infrastructure_cost_factor = factor;
        self
    }

    /// At least one origin, and no blank origin or destination.
    pub fn has_valid_addresses(&self) -> bool {
        !self.from_addresses.is_empty()
            && self
                .from_addresses
                .iter()
                .all(|address| !address.trim().is_empty())
            && !self.to_address.trim().is_empty()
    }
}

pub fn parse_api_url(input: &str) -> Result<Url, ConfigError> {
    Url::parse(input).map_err(|e| ConfigError::InvalidUrl {
        url: input.to_owned(),
        reason: e.to_string(),
    })
}

pub fn parse_cost_factor(input: &str) -> Result<f64, ConfigError> {
    match input.trim().parse::<f64>() {
        Ok(factor) if factor.is_finite() => Ok(factor),
        _ => Err(ConfigError::InvalidCostFactor(input.to_owned())),
    }
}

fn split_addresses(input: &str) -> Vec<String> {
    input
        .split(ADDRESS_SEPARATOR)
        .map(str::trim)
        .filter(|address| !address.is_empty())
        .map(str::to_owned)
        .collect()
}
