//! Seam to the gateway's remote procedure endpoint.
//!
//! The library never speaks the RPC wire format itself. Callers plug in a [`BankstoreRpc`]
//! implementation bound to the endpoint of their choice.

use std::{collections::BTreeMap, fmt};

use crate::{core::errors::BankstoreResult, types::MerchantCredentials, utils};

pub trait BankstoreRpc: Send + Sync + fmt::Debug {
    /// Invoke `operation` (`add_user`, `execute_purchase`, ..) with named parameters.
    ///
    /// Network level failures are reported as
    /// [`BankstoreError::TransportFailure`](crate::BankstoreError::TransportFailure).
    fn call(
        &self,
        operation: &str,
        credentials: &MerchantCredentials,
        params: &RpcParams,
    ) -> BankstoreResult<RpcReply>;
}

/// Named request parameters of one RPC call.
///
/// `Debug` only lists the names, values may hold card data.
#[derive(Clone, Default, Eq, PartialEq)]
pub struct RpcParams {
    params: BTreeMap<&'static str, String>,
}

impl RpcParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &'static str, value: impl Into<String>) -> &mut Self {
        self.params.insert(name, value.into());
        self
    }

    /// Insert `value` only when it is present and non-empty.
    pub fn insert_optional(&mut self, name: &'static str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value.filter(|value| !value.is_empty()) {
            self.params.insert(name, value.to_owned());
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.params.iter().map(|(name, value)| (*name, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl fmt::Debug for RpcParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.params.keys()).finish()
    }
}

/// What the gateway answered.
///
/// `primary` is the call's return value. `out_fields` carries every output parameter, including
/// request parameters the gateway echoes back under their request name.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RpcReply {
    pub primary: String,
    pub out_fields: BTreeMap<String, String>,
    pub error_code: Option<String>,
}

impl RpcReply {
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            ..Default::default()
        }
    }

    pub fn failed(error_code: impl Into<String>) -> Self {
        Self {
            error_code: Some(error_code.into()),
            ..Default::default()
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.out_fields.insert(name.into(), value.into());
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.out_fields.get(name).map(String::as_str)
    }

    /// The gateway error, when the reported identifier is a positive integer.
    pub fn gateway_error(&self) -> Option<&str> {
        self.error_code
            .as_deref()
            .and_then(utils::positive_error_code)
    }
}
