#![allow(dead_code, clippy::unwrap_used)]

use std::{
    collections::{BTreeMap, HashMap},
    sync::{Arc, Mutex},
};

use error_stack::report;
use masking::Secret;
use paytpv::{
    services::{BankstoreRpc, HttpFetch, RpcParams, RpcReply},
    BankstoreClient, BankstoreError, BankstoreResult, MerchantCredentials,
};

pub const MERCHANT_CODE: &str = "999008881";
pub const TERMINAL: &str = "1";
pub const PASSWORD: &str = "secret";
pub const CUSTOMER_IP: &str = "203.0.113.7";
pub const REDIRECT_BASE: &str = "https://gateway.test/bnkgateway";

pub fn credentials() -> MerchantCredentials {
    MerchantCredentials::new(
        MERCHANT_CODE,
        TERMINAL,
        Secret::new(PASSWORD.to_owned()),
        CUSTOMER_IP,
    )
}

#[derive(Clone, Debug)]
pub enum Scripted {
    Reply(RpcReply),
    Transport,
}

#[derive(Clone, Debug)]
pub struct RecordedCall {
    pub operation: String,
    pub params: BTreeMap<String, String>,
}

/// In-memory gateway answering each operation with a scripted reply.
#[derive(Debug, Default)]
pub struct ScriptedRpc {
    replies: Mutex<HashMap<String, Scripted>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedRpc {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn script(&self, operation: &str, reply: Scripted) {
        self.replies
            .lock()
            .unwrap()
            .insert(operation.to_owned(), reply);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> RecordedCall {
        self.calls().pop().unwrap()
    }
}

impl BankstoreRpc for ScriptedRpc {
    fn call(
        &self,
        operation: &str,
        _credentials: &MerchantCredentials,
        params: &RpcParams,
    ) -> BankstoreResult<RpcReply> {
        self.calls.lock().unwrap().push(RecordedCall {
            operation: operation.to_owned(),
            params: params
                .iter()
                .map(|(name, value)| (name.to_owned(), value.to_owned()))
                .collect(),
        });
        match self.replies.lock().unwrap().get(operation).cloned() {
            Some(Scripted::Reply(reply)) => Ok(reply),
            Some(Scripted::Transport) => Err(report!(BankstoreError::TransportFailure)),
            None => Ok(RpcReply::default()),
        }
    }
}

/// Hosted page stand-in returning a fixed outcome and recording requested URLs.
#[derive(Debug)]
pub struct RecordingFetch {
    outcome: Result<String, BankstoreError>,
    urls: Mutex<Vec<String>>,
}

impl RecordingFetch {
    pub fn page(body: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(body.to_owned()),
            urls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(error: BankstoreError) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(error),
            urls: Mutex::new(Vec::new()),
        })
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

impl HttpFetch for RecordingFetch {
    fn fetch(&self, url: &str) -> BankstoreResult<String> {
        self.urls.lock().unwrap().push(url.to_owned());
        self.outcome.clone().map_err(|error| report!(error))
    }
}

pub fn client(rpc: Arc<ScriptedRpc>, fetch: Arc<RecordingFetch>) -> BankstoreClient {
    BankstoreClient::new(credentials(), REDIRECT_BASE, rpc, fetch)
}

/// Query pairs of a composed URL, decoded, in transmission order.
pub fn query_pairs(url: &str) -> Vec<(String, String)> {
    let query = url.split_once('?').map(|(_, query)| query).unwrap_or_default();
    url::form_urlencoded::parse(query.as_bytes())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

/// Raw `k=v` segments of a composed URL, still encoded.
pub fn raw_segments(url: &str) -> Vec<String> {
    url.split_once('?')
        .map(|(_, query)| query.split('&').map(str::to_owned).collect())
        .unwrap_or_default()
}
