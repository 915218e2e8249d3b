use masking::Secret;
use serde::Deserialize;

/// Merchant account identity used for every operation.
///
/// The password only ever enters digests; it is neither transmitted nor logged.
#[derive(Clone, Debug, Deserialize)]
pub struct MerchantCredentials {
    merchant_code: String,
    terminal: String,
    password: Secret<String>,
    #[serde(default)]
    ip_address: String,
    #[serde(default)]
    jet_id: Option<String>,
}

impl MerchantCredentials {
    pub fn new(
        merchant_code: impl Into<String>,
        terminal: impl Into<String>,
        password: Secret<String>,
        ip_address: impl Into<String>,
    ) -> Self {
        Self {
            merchant_code: merchant_code.into(),
            terminal: terminal.into(),
            password,
            ip_address: ip_address.into(),
            jet_id: None,
        }
    }

    pub fn with_jet_id(mut self, jet_id: impl Into<String>) -> Self {
        self.jet_id = Some(jet_id.into());
        self
    }

    pub fn merchant_code(&self) -> &str {
        &self.merchant_code
    }

    pub fn terminal(&self) -> &str {
        &self.terminal
    }

    pub fn password(&self) -> &Secret<String> {
        &self.password
    }

    /// Customer address forwarded as `DS_ORIGINAL_IP`.
    pub fn ip_address(&self) -> &str {
        &self.ip_address
    }

    pub fn jet_id(&self) -> Option<&str> {
        self.jet_id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_is_masked_in_debug_output() {
        let credentials = MerchantCredentials::new(
            "999008881",
            "1",
            Secret::new("hunter2".to_owned()),
            "127.0.0.1",
        );
        let rendered = format!("{credentials:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("999008881"));
    }
}
