use std::path::PathBuf;

use config::{Environment, File};
use error_stack::{Report, ResultExt};
use paytpv_env::{env, logger, logger::config::Log};
use serde::Deserialize;

use crate::{consts, types::MerchantCredentials};

#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    #[error("Failed to load configuration: {0}")]
    ConfigurationError(String),
    #[error("Invalid configuration value provided: {0}")]
    InvalidConfigurationValueError(String),
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Settings {
    pub log: Log,
    pub gateway: GatewaySettings,
    pub merchant: MerchantCredentials,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GatewaySettings {
    /// Endpoint handed to the RPC collaborator.
    pub rpc_endpoint: String,
    /// Hosted page URL the redirect query is appended to.
    pub redirect_url: String,
    pub probe_timeout_secs: u64,
}

impl Settings {
    pub fn new() -> Result<Self, Report<ApplicationError>> {
        Self::with_config_path(None)
    }

    /// Load `config/<env>.toml`, or `config_path` when given, then apply `PAYTPV__*`
    /// environment overrides.
    pub fn with_config_path(config_path: Option<PathBuf>) -> Result<Self, Report<ApplicationError>> {
        let environment = env::which();
        let config_path = config_path.unwrap_or_else(|| {
            PathBuf::from("config").join(format!("{}.toml", environment.config_file_stem()))
        });

        let config = config::Config::builder()
            .add_source(File::from(config_path).required(false))
            .add_source(
                Environment::with_prefix(consts::ENV_PREFIX)
                    .try_parsing(true)
                    .separator("__"),
            )
            .build()
            .map_err(|error| ApplicationError::ConfigurationError(error.to_string()))?;

        let settings: Self = config.try_deserialize().map_err(|error| {
            logger::error!(%error, "Unable to deserialize application configuration");
            ApplicationError::ConfigurationError(error.to_string())
        })?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), Report<ApplicationError>> {
        self.gateway
            .validate()
            .attach_printable("Invalid gateway settings")?;
        super::validations::validate_merchant(&self.merchant)
            .attach_printable("Invalid merchant settings")
    }
}
