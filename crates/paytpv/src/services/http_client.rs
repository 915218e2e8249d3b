use std::{fmt, time::Duration};

use error_stack::{report, ResultExt};
use paytpv_env::logger;

use crate::core::errors::{BankstoreError, BankstoreResult};

/// Fetches a page body with a single GET.
pub trait HttpFetch: Send + Sync + fmt::Debug {
    /// Connection, timeout and body read failures are
    /// [`BankstoreError::TransportFailure`]; a non-success status is
    /// [`BankstoreError::UnexpectedResponse`].
    fn fetch(&self, url: &str) -> BankstoreResult<String>;
}

/// Default [`HttpFetch`] on top of a blocking `reqwest` client.
#[derive(Clone, Debug)]
pub struct BlockingHttpClient {
    client: reqwest::blocking::Client,
}

impl BlockingHttpClient {
    pub fn new(timeout: Duration) -> BankstoreResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .use_rustls_tls()
            .build()
            .change_context(BankstoreError::ClientConstructionFailed)
            .attach_printable("Failed to construct blocking HTTP client")?;
        Ok(Self { client })
    }
}

impl HttpFetch for BlockingHttpClient {
    fn fetch(&self, url: &str) -> BankstoreResult<String> {
        let url = url::Url::parse(url)
            .change_context(BankstoreError::InvalidValue {
                field_name: "redirect_url",
            })
            .attach_printable("Composed redirect URL is not a valid URL")?;

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|error| classify(&error))
            .attach_printable("Unable to send request to the gateway")?;

        let status = response.status();
        logger::debug!(%status, "hosted page responded");
        if !status.is_success() {
            return Err(report!(BankstoreError::UnexpectedResponse))
                .attach_printable(format!("Gateway responded with status {status}"));
        }

        response
            .text()
            .change_context(BankstoreError::TransportFailure)
            .attach_printable("Failed to read the hosted page body")
    }
}

fn classify(error: &reqwest::Error) -> BankstoreError {
    if error.is_builder() {
        BankstoreError::UnexpectedResponse
    } else {
        logger::warn!(
            is_timeout = error.is_timeout(),
            is_connect = error.is_connect(),
            "request to the gateway failed"
        );
        BankstoreError::TransportFailure
    }
}
