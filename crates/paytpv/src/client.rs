use std::{sync::Arc, time::Duration};

use crate::{
    configs::settings::Settings,
    core::errors::BankstoreResult,
    services::{BankstoreRpc, BlockingHttpClient, HttpFetch},
    types::MerchantCredentials,
};

/// Entry point of the library.
///
/// Holds immutable merchant credentials and the two outbound collaborators. Cloning is cheap
/// and the client can be shared between threads.
#[derive(Clone, Debug)]
pub struct BankstoreClient {
    pub(crate) credentials: Arc<MerchantCredentials>,
    pub(crate) redirect_base_url: String,
    pub(crate) rpc: Arc<dyn BankstoreRpc>,
    pub(crate) fetcher: Arc<dyn HttpFetch>,
}

impl BankstoreClient {
    pub fn new(
        credentials: MerchantCredentials,
        redirect_base_url: impl Into<String>,
        rpc: Arc<dyn BankstoreRpc>,
        fetcher: Arc<dyn HttpFetch>,
    ) -> Self {
        Self {
            credentials: Arc::new(credentials),
            redirect_base_url: redirect_base_url.into(),
            rpc,
            fetcher,
        }
    }

    /// Build a client from validated settings, probing hosted pages with the default
    /// blocking HTTP client.
    ///
    /// `connect_rpc` receives the configured RPC endpoint and returns the collaborator bound
    /// to it.
    pub fn from_settings<F>(settings: &Settings, connect_rpc: F) -> BankstoreResult<Self>
    where
        F: FnOnce(&str) -> Arc<dyn BankstoreRpc>,
    {
        let fetcher = BlockingHttpClient::new(Duration::from_secs(
            settings.gateway.probe_timeout_secs,
        ))?;
        Ok(Self::new(
            settings.merchant.clone(),
            settings.gateway.redirect_url.clone(),
            connect_rpc(&settings.gateway.rpc_endpoint),
            Arc::new(fetcher),
        ))
    }

    pub fn credentials(&self) -> &MerchantCredentials {
        &self.credentials
    }

    pub fn redirect_base_url(&self) -> &str {
        &self.redirect_base_url
    }
}
