//! Diagnostic fetch of a composed redirect URL.
//!
//! The hosted page renders `Error: <code>` when it rejects the parameters, so fetching it once
//! surfaces signature or data problems before the cardholder is sent there.

use std::sync::LazyLock;

use error_stack::report;
use paytpv_env::logger;
use regex::Regex;

use crate::{
    consts,
    core::errors::{BankstoreError, BankstoreResult},
    services::HttpFetch,
    utils,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProbeOutcome {
    Clear,
    GatewayError(String),
}

static ERROR_MARKER: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(consts::PROBE_ERROR_PATTERN)
        .map_err(|error| logger::error!(?error, "invalid probe error pattern"))
        .ok()
});

/// Look for the gateway error marker in a hosted page body.
///
/// Only a positive code is a rejection, `Error: 0` is how the gateway reports success.
pub fn inspect_body(body: &str) -> BankstoreResult<ProbeOutcome> {
    let marker = ERROR_MARKER
        .as_ref()
        .ok_or_else(|| report!(BankstoreError::Unexpected))?;

    Ok(marker
        .captures_iter(body)
        .filter_map(|captures| captures.get(1))
        .find_map(|code| utils::positive_error_code(code.as_str()))
        .map_or(ProbeOutcome::Clear, |code| {
            ProbeOutcome::GatewayError(code.to_owned())
        }))
}

pub fn probe(fetcher: &dyn HttpFetch, url: &str) -> BankstoreResult<ProbeOutcome> {
    let body = fetcher.fetch(url)?;
    let outcome = inspect_body(&body)?;
    if let ProbeOutcome::GatewayError(code) = &outcome {
        logger::warn!(error_code = %code, "hosted page rejected the redirect parameters");
    }
    Ok(outcome)
}
