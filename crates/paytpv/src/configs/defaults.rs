use masking::Secret;

use super::settings::{GatewaySettings, Settings};
use crate::{consts, types::MerchantCredentials};

impl Default for Settings {
    fn default() -> Self {
        Self {
            log: Default::default(),
            gateway: GatewaySettings::default(),
            merchant: MerchantCredentials::new("", "", Secret::default(), ""),
        }
    }
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            rpc_endpoint: String::new(),
            redirect_url: String::new(),
            probe_timeout_secs: consts::DEFAULT_PROBE_TIMEOUT_SECS,
        }
    }
}
