use common_utils::fp_utils::when;
use error_stack::Report;

use super::settings::{ApplicationError, GatewaySettings};
use crate::types::MerchantCredentials;

impl GatewaySettings {
    pub fn validate(&self) -> Result<(), Report<ApplicationError>> {
        url::Url::parse(&self.rpc_endpoint).map_err(|error| {
            ApplicationError::InvalidConfigurationValueError(format!(
                "gateway RPC endpoint is not a valid URL: {error}"
            ))
        })?;

        url::Url::parse(&self.redirect_url).map_err(|error| {
            ApplicationError::InvalidConfigurationValueError(format!(
                "gateway redirect URL is not a valid URL: {error}"
            ))
        })?;

        when(self.probe_timeout_secs == 0, || {
            Err(ApplicationError::InvalidConfigurationValueError(
                "probe timeout must be greater than zero".into(),
            ))
        })
        .map_err(Report::from)
    }
}

pub(super) fn validate_merchant(
    merchant: &MerchantCredentials,
) -> Result<(), Report<ApplicationError>> {
    use masking::PeekInterface;

    when(merchant.merchant_code().is_empty(), || {
        Err(ApplicationError::InvalidConfigurationValueError(
            "merchant code must not be empty".into(),
        ))
    })?;

    when(merchant.terminal().is_empty(), || {
        Err(ApplicationError::InvalidConfigurationValueError(
            "merchant terminal must not be empty".into(),
        ))
    })?;

    when(merchant.password().peek().is_empty(), || {
        Err(ApplicationError::InvalidConfigurationValueError(
            "merchant password must not be empty".into(),
        ))
    })
    .map_err(Report::from)
}
