//! Direct (server to server) BankStore operations.
//!
//! Each operation is a catalogue entry naming the RPC operation and how its result keys are
//! filled. The SHA-1 signature field order differs per operation and is spelled out next to the
//! parameters it covers.

use std::collections::BTreeMap;

use common_utils::types::MinorUnit;
use error_stack::report;
use masking::PeekInterface;
use paytpv_env::{instrument, logger};

use crate::{
    client::BankstoreClient,
    consts::ds,
    core::{
        errors::{BankstoreError, BankstoreResult},
        normalizer, signature,
    },
    services::{RpcParams, RpcReply},
    types::{
        requests::{
            CardDetails, CreateSubscriptionRequest, CreateSubscriptionTokenRequest,
            DccConfirmationRequest, DccPurchaseRequest, EditSubscriptionRequest,
            PreauthorizationRequest, PurchaseRequest, ReferenceTokenPurchaseRequest,
            RefundRequest, StoredUser,
        },
        GatewayResult, MerchantCredentials,
    },
    utils::strip_whitespace,
};

/// Where a result key takes its value from.
#[derive(Clone, Copy, Debug)]
enum Source {
    /// The RPC return value.
    Primary,
    /// A request parameter the gateway echoes back; the sent value is used if it does not.
    Echo(&'static str),
    /// An output parameter named like the result key.
    Out,
}

#[derive(Debug)]
struct ResultKey {
    key: &'static str,
    source: Source,
}

const fn primary(key: &'static str) -> ResultKey {
    ResultKey {
        key,
        source: Source::Primary,
    }
}

const fn echo(key: &'static str, param: &'static str) -> ResultKey {
    ResultKey {
        key,
        source: Source::Echo(param),
    }
}

const fn out(key: &'static str) -> ResultKey {
    ResultKey {
        key,
        source: Source::Out,
    }
}

#[derive(Debug)]
pub(crate) struct DirectOperation {
    name: &'static str,
    result_keys: &'static [ResultKey],
}

impl DirectOperation {
    fn collect(&self, reply: &RpcReply, params: &RpcParams) -> BTreeMap<String, String> {
        self.result_keys
            .iter()
            .map(|ResultKey { key, source }| {
                let value = match source {
                    Source::Primary => Some(reply.primary.as_str()),
                    Source::Echo(param) => reply.field(param).or_else(|| params.get(param)),
                    Source::Out => reply.field(key),
                };
                ((*key).to_owned(), value.unwrap_or_default().to_owned())
            })
            .collect()
    }
}

const ADD_USER: DirectOperation = DirectOperation {
    name: "add_user",
    result_keys: &[primary(ds::ID_USER), out(ds::TOKEN_USER)],
};

const INFO_USER: DirectOperation = DirectOperation {
    name: "info_user",
    result_keys: &[
        primary(ds::PAN),
        out(ds::CARD_BRAND),
        out(ds::CARD_TYPE),
        out(ds::CARD_COUNTRY_ISO3),
        out(ds::CARD_EXPIRY_DATE),
    ],
};

const REMOVE_USER: DirectOperation = DirectOperation {
    name: "remove_user",
    result_keys: &[primary(ds::RESPONSE)],
};

const PURCHASE_RESULT: &[ResultKey] = &[
    echo(ds::AMOUNT, ds::AMOUNT),
    echo(ds::ORDER, ds::ORDER),
    echo(ds::CURRENCY, ds::CURRENCY),
    primary(ds::AUTH_CODE),
    out(ds::CARD_COUNTRY),
    out(ds::RESPONSE),
];

const EXECUTE_PURCHASE: DirectOperation = DirectOperation {
    name: "execute_purchase",
    result_keys: PURCHASE_RESULT,
};

const EXECUTE_PURCHASE_DCC: DirectOperation = DirectOperation {
    name: "execute_purchase_dcc",
    result_keys: &[
        echo(ds::AMOUNT, ds::AMOUNT),
        echo(ds::ORDER, ds::ORDER),
        primary(ds::CURRENCY),
        out(ds::DCC_SESSION),
        out(ds::DCC_CURRENCY),
        out(ds::DCC_CURRENCY_ISO3),
        out(ds::DCC_CURRENCY_NAME),
        out(ds::DCC_EXCHANGE),
        out(ds::DCC_AMOUNT),
        out(ds::DCC_MARKUP),
        out(ds::DCC_CARD_COUNTRY),
        out(ds::RESPONSE),
    ],
};

const CONFIRM_PURCHASE_DCC: DirectOperation = DirectOperation {
    name: "confirm_purchase_dcc",
    result_keys: &[
        primary(ds::AMOUNT),
        echo(ds::ORDER, ds::ORDER),
        out(ds::CURRENCY),
        out(ds::AUTH_CODE),
        out(ds::CARD_COUNTRY),
        out(ds::RESPONSE),
    ],
};

const EXECUTE_REFUND: DirectOperation = DirectOperation {
    name: "execute_refund",
    result_keys: &[
        echo(ds::ORDER, ds::ORDER),
        echo(ds::CURRENCY, ds::CURRENCY),
        echo(ds::AUTH_CODE, ds::AUTH_CODE),
        primary(ds::RESPONSE),
    ],
};

const CREATE_SUBSCRIPTION: DirectOperation = DirectOperation {
    name: "create_subscription",
    result_keys: &[
        primary(ds::ID_USER),
        out(ds::TOKEN_USER),
        echo(ds::SUBSCRIPTION_AMOUNT, ds::AMOUNT),
        echo(ds::SUBSCRIPTION_ORDER, ds::ORDER),
        echo(ds::SUBSCRIPTION_CURRENCY, ds::CURRENCY),
        out(ds::AUTH_CODE),
        out(ds::CARD_COUNTRY),
    ],
};

const EDIT_SUBSCRIPTION: DirectOperation = DirectOperation {
    name: "edit_subscription",
    result_keys: &[
        echo(ds::ID_USER, ds::ID_USER),
        echo(ds::TOKEN_USER, ds::TOKEN_USER),
        echo(ds::SUBSCRIPTION_AMOUNT, ds::AMOUNT),
        primary(ds::SUBSCRIPTION_ORDER),
        out(ds::SUBSCRIPTION_CURRENCY),
        out(ds::AUTH_CODE),
        out(ds::CARD_COUNTRY),
    ],
};

const REMOVE_SUBSCRIPTION: DirectOperation = DirectOperation {
    name: "remove_subscription",
    result_keys: &[primary(ds::RESPONSE)],
};

const CREATE_SUBSCRIPTION_TOKEN: DirectOperation = DirectOperation {
    name: "create_subscription_token",
    result_keys: &[
        echo(ds::ID_USER, ds::ID_USER),
        echo(ds::TOKEN_USER, ds::TOKEN_USER),
        echo(ds::SUBSCRIPTION_AMOUNT, ds::AMOUNT),
        echo(ds::SUBSCRIPTION_ORDER, ds::ORDER),
        echo(ds::SUBSCRIPTION_CURRENCY, ds::CURRENCY),
        primary(ds::AUTH_CODE),
        out(ds::CARD_COUNTRY),
    ],
};

const CREATE_PREAUTHORIZATION: DirectOperation = DirectOperation {
    name: "create_preauthorization",
    result_keys: PURCHASE_RESULT,
};

const SETTLEMENT_RESULT: &[ResultKey] = &[
    echo(ds::AMOUNT, ds::AMOUNT),
    echo(ds::ORDER, ds::ORDER),
    primary(ds::CURRENCY),
    out(ds::AUTH_CODE),
    out(ds::CARD_COUNTRY),
    out(ds::RESPONSE),
];

const PREAUTHORIZATION_CONFIRM: DirectOperation = DirectOperation {
    name: "preauthorization_confirm",
    result_keys: SETTLEMENT_RESULT,
};

const PREAUTHORIZATION_CANCEL: DirectOperation = DirectOperation {
    name: "preauthorization_cancel",
    result_keys: SETTLEMENT_RESULT,
};

const DEFERRED_PREAUTHORIZATION_CONFIRM: DirectOperation = DirectOperation {
    name: "deferred_preauthorization_confirm",
    result_keys: SETTLEMENT_RESULT,
};

const DEFERRED_PREAUTHORIZATION_CANCEL: DirectOperation = DirectOperation {
    name: "deferred_preauthorization_cancel",
    result_keys: SETTLEMENT_RESULT,
};

const ADD_USER_TOKEN: DirectOperation = DirectOperation {
    name: "add_user_token",
    result_keys: &[primary(ds::ID_USER), out(ds::TOKEN_USER)],
};

const EXECUTE_PURCHASE_RTOKEN: DirectOperation = DirectOperation {
    name: "execute_purchase_rtoken",
    result_keys: PURCHASE_RESULT,
};

/// Parameters every direct call carries.
fn base_params(credentials: &MerchantCredentials, signature: String, with_ip: bool) -> RpcParams {
    let mut params = RpcParams::new();
    params
        .insert(ds::MERCHANT_CODE, credentials.merchant_code())
        .insert(ds::TERMINAL, credentials.terminal())
        .insert(ds::SIGNATURE, signature);
    if with_ip {
        params.insert(ds::ORIGINAL_IP, credentials.ip_address());
    }
    params
}

/// `merchant_code + id_user + token_user + terminal` followed by `tail`.
fn user_signature(
    credentials: &MerchantCredentials,
    id_user: &str,
    token_user: &str,
    tail: &[&str],
) -> String {
    let mut parts = vec![
        credentials.merchant_code(),
        id_user,
        token_user,
        credentials.terminal(),
    ];
    parts.extend_from_slice(tail);
    signature::direct_signature(&parts, credentials.password())
}

/// Parameters of the operations that only address a stored card.
fn user_params(
    credentials: &MerchantCredentials,
    user: &StoredUser,
    strip: bool,
) -> RpcParams {
    let (id_user, token_user) = user_parts(user, strip);
    let signature = user_signature(credentials, &id_user, &token_user, &[]);
    let mut params = base_params(credentials, signature, true);
    params
        .insert(ds::ID_USER, id_user)
        .insert(ds::TOKEN_USER, token_user);
    params
}

fn user_parts(user: &StoredUser, strip: bool) -> (String, String) {
    if strip {
        (
            strip_whitespace(&user.id_user),
            strip_whitespace(user.token_user.peek()),
        )
    } else {
        (user.id_user.clone(), user.token_user.peek().clone())
    }
}

fn purchase_params(
    credentials: &MerchantCredentials,
    request: &PurchaseRequest,
    strip: bool,
) -> RpcParams {
    let (id_user, token_user) = user_parts(&request.user, strip);
    let amount = request.amount.to_string();
    let signature = user_signature(
        credentials,
        &id_user,
        &token_user,
        &[&amount, &request.order],
    );
    let mut params = base_params(credentials, signature, true);
    params
        .insert(ds::ID_USER, id_user)
        .insert(ds::TOKEN_USER, token_user)
        .insert(ds::AMOUNT, amount)
        .insert(ds::ORDER, request.order.as_str())
        .insert(ds::CURRENCY, request.currency.as_str())
        .insert_optional(ds::PRODUCT_DESCRIPTION, request.product_description.as_deref())
        .insert_optional(ds::OWNER, request.owner.as_deref())
        .insert_optional(ds::SCORING, request.scoring.as_deref());
    params
}

fn settlement_params(
    credentials: &MerchantCredentials,
    request: &PreauthorizationRequest,
) -> RpcParams {
    let (id_user, token_user) = user_parts(&request.user, false);
    let amount = request.amount.to_string();
    let signature = user_signature(
        credentials,
        &id_user,
        &token_user,
        &[&request.order, &amount],
    );
    let mut params = base_params(credentials, signature, true);
    params
        .insert(ds::ID_USER, id_user)
        .insert(ds::TOKEN_USER, token_user)
        .insert(ds::AMOUNT, amount)
        .insert(ds::ORDER, request.order.as_str());
    params
}

fn card_parts(card: &CardDetails) -> (String, String, String) {
    (
        strip_whitespace(card.pan.peek()),
        strip_whitespace(card.expiry_date.peek()),
        strip_whitespace(card.cvv.peek()),
    )
}

fn amount_string(amount: MinorUnit) -> String {
    amount.to_string()
}

impl BankstoreClient {
    fn execute<F>(&self, operation: &'static DirectOperation, build: F) -> GatewayResult
    where
        F: FnOnce(&MerchantCredentials) -> BankstoreResult<RpcParams>,
    {
        let outcome = build(self.credentials.as_ref()).and_then(|params| self.invoke(operation, &params));
        normalizer::normalize(operation.name, outcome)
    }

    #[instrument(skip_all, fields(operation = operation.name))]
    fn invoke(
        &self,
        operation: &'static DirectOperation,
        params: &RpcParams,
    ) -> BankstoreResult<BTreeMap<String, String>> {
        logger::debug!(params = ?params, "calling gateway");
        let reply = self.rpc.call(operation.name, &self.credentials, params)?;
        if let Some(code) = reply.gateway_error() {
            return Err(report!(BankstoreError::GatewayError {
                code: code.to_owned()
            }));
        }
        Ok(operation.collect(&reply, params))
    }

    /// Look up a stored card, failing with the gateway's code when it is unknown.
    pub(crate) fn lookup_user(&self, user: &StoredUser) -> BankstoreResult<BTreeMap<String, String>> {
        let params = user_params(&self.credentials, user, true);
        self.invoke(&INFO_USER, &params)
    }

    /// Store a card. Only available to merchants allowed to handle raw card data.
    pub fn add_user(&self, card: &CardDetails) -> GatewayResult {
        self.execute(&ADD_USER, |credentials| {
            let (pan, expiry_date, cvv) = card_parts(card);
            let signature = signature::direct_signature(
                &[
                    credentials.merchant_code(),
                    &pan,
                    &cvv,
                    credentials.terminal(),
                ],
                credentials.password(),
            );
            let mut params = base_params(credentials, signature, true);
            params
                .insert(ds::PAN, pan)
                .insert(ds::EXPIRY_DATE, expiry_date)
                .insert(ds::CVV2, cvv);
            Ok(params)
        })
    }

    pub fn info_user(&self, user: &StoredUser) -> GatewayResult {
        normalizer::normalize(INFO_USER.name, self.lookup_user(user))
    }

    pub fn remove_user(&self, user: &StoredUser) -> GatewayResult {
        self.execute(&REMOVE_USER, |credentials| {
            Ok(user_params(credentials, user, true))
        })
    }

    pub fn execute_purchase(&self, request: &PurchaseRequest) -> GatewayResult {
        self.execute(&EXECUTE_PURCHASE, |credentials| {
            Ok(purchase_params(credentials, request, true))
        })
    }

    pub fn execute_purchase_dcc(&self, request: &DccPurchaseRequest) -> GatewayResult {
        self.execute(&EXECUTE_PURCHASE_DCC, |credentials| {
            let (id_user, token_user) = user_parts(&request.user, true);
            let amount = amount_string(request.amount);
            let signature = user_signature(
                credentials,
                &id_user,
                &token_user,
                &[&amount, &request.order],
            );
            let mut params = base_params(credentials, signature, true);
            params
                .insert(ds::ID_USER, id_user)
                .insert(ds::TOKEN_USER, token_user)
                .insert(ds::AMOUNT, amount)
                .insert(ds::ORDER, request.order.as_str())
                .insert_optional(ds::PRODUCT_DESCRIPTION, request.product_description.as_deref())
                .insert_optional(ds::OWNER, request.owner.as_deref());
            Ok(params)
        })
    }

    pub fn confirm_purchase_dcc(&self, request: &DccConfirmationRequest) -> GatewayResult {
        self.execute(&CONFIRM_PURCHASE_DCC, |credentials| {
            let signature = signature::direct_signature(
                &[
                    credentials.merchant_code(),
                    credentials.terminal(),
                    &request.order,
                    &request.dcc_currency,
                    &request.dcc_session,
                ],
                credentials.password(),
            );
            let mut params = base_params(credentials, signature, false);
            params
                .insert(ds::ORDER, request.order.as_str())
                .insert(ds::DCC_CURRENCY, request.dcc_currency.as_str())
                .insert(ds::DCC_SESSION, request.dcc_session.as_str());
            Ok(params)
        })
    }

    pub fn execute_refund(&self, request: &RefundRequest) -> GatewayResult {
        self.execute(&EXECUTE_REFUND, |credentials| {
            let (id_user, token_user) = user_parts(&request.user, false);
            let signature = user_signature(
                credentials,
                &id_user,
                &token_user,
                &[&request.auth_code, &request.order],
            );
            let amount = request.amount.map(amount_string);
            let mut params = base_params(credentials, signature, true);
            params
                .insert(ds::ID_USER, id_user)
                .insert(ds::TOKEN_USER, token_user)
                .insert(ds::AUTH_CODE, request.auth_code.as_str())
                .insert(ds::ORDER, request.order.as_str())
                .insert(ds::CURRENCY, request.currency.as_str())
                .insert_optional(ds::AMOUNT, amount.as_deref());
            Ok(params)
        })
    }

    pub fn create_subscription(&self, request: &CreateSubscriptionRequest) -> GatewayResult {
        self.execute(&CREATE_SUBSCRIPTION, |credentials| {
            let (pan, expiry_date, cvv) = card_parts(&request.card);
            let amount = amount_string(request.amount);
            let signature = signature::direct_signature(
                &[
                    credentials.merchant_code(),
                    &pan,
                    &cvv,
                    credentials.terminal(),
                    &amount,
                    &request.currency,
                ],
                credentials.password(),
            );
            let mut params = base_params(credentials, signature, true);
            params
                .insert(ds::PAN, pan)
                .insert(ds::EXPIRY_DATE, expiry_date)
                .insert(ds::CVV2, cvv)
                .insert(ds::SUBSCRIPTION_START_DATE, request.schedule.start_date.as_str())
                .insert(ds::SUBSCRIPTION_END_DATE, request.schedule.end_date.as_str())
                .insert(ds::SUBSCRIPTION_PERIODICITY, request.schedule.periodicity.as_str())
                .insert(ds::ORDER, request.order.as_str())
                .insert(ds::AMOUNT, amount)
                .insert(ds::CURRENCY, request.currency.as_str())
                .insert_optional(ds::SCORING, request.scoring.as_deref());
            Ok(params)
        })
    }

    pub fn edit_subscription(&self, request: &EditSubscriptionRequest) -> GatewayResult {
        self.execute(&EDIT_SUBSCRIPTION, |credentials| {
            let (id_user, token_user) = user_parts(&request.user, false);
            let amount = amount_string(request.amount);
            let signature = user_signature(credentials, &id_user, &token_user, &[&amount]);
            let mut params = base_params(credentials, signature, true);
            params
                .insert(ds::ID_USER, id_user)
                .insert(ds::TOKEN_USER, token_user)
                .insert(ds::SUBSCRIPTION_START_DATE, request.schedule.start_date.as_str())
                .insert(ds::SUBSCRIPTION_END_DATE, request.schedule.end_date.as_str())
                .insert(ds::SUBSCRIPTION_PERIODICITY, request.schedule.periodicity.as_str())
                .insert(ds::AMOUNT, amount)
                .insert(ds::EXECUTE, if request.execute { "1" } else { "0" });
            Ok(params)
        })
    }

    pub fn remove_subscription(&self, user: &StoredUser) -> GatewayResult {
        self.execute(&REMOVE_SUBSCRIPTION, |credentials| {
            Ok(user_params(credentials, user, false))
        })
    }

    pub fn create_subscription_token(
        &self,
        request: &CreateSubscriptionTokenRequest,
    ) -> GatewayResult {
        self.execute(&CREATE_SUBSCRIPTION_TOKEN, |credentials| {
            let (id_user, token_user) = user_parts(&request.user, false);
            let amount = amount_string(request.amount);
            let signature = user_signature(
                credentials,
                &id_user,
                &token_user,
                &[&amount, &request.currency],
            );
            let mut params = base_params(credentials, signature, true);
            params
                .insert(ds::ID_USER, id_user)
                .insert(ds::TOKEN_USER, token_user)
                .insert(ds::SUBSCRIPTION_START_DATE, request.schedule.start_date.as_str())
                .insert(ds::SUBSCRIPTION_END_DATE, request.schedule.end_date.as_str())
                .insert(ds::SUBSCRIPTION_PERIODICITY, request.schedule.periodicity.as_str())
                .insert(ds::ORDER, request.order.as_str())
                .insert(ds::AMOUNT, amount)
                .insert(ds::CURRENCY, request.currency.as_str())
                .insert_optional(ds::SCORING, request.scoring.as_deref());
            Ok(params)
        })
    }

    pub fn create_preauthorization(&self, request: &PurchaseRequest) -> GatewayResult {
        self.execute(&CREATE_PREAUTHORIZATION, |credentials| {
            Ok(purchase_params(credentials, request, false))
        })
    }

    pub fn preauthorization_confirm(&self, request: &PreauthorizationRequest) -> GatewayResult {
        self.execute(&PREAUTHORIZATION_CONFIRM, |credentials| {
            Ok(settlement_params(credentials, request))
        })
    }

    pub fn preauthorization_cancel(&self, request: &PreauthorizationRequest) -> GatewayResult {
        self.execute(&PREAUTHORIZATION_CANCEL, |credentials| {
            Ok(settlement_params(credentials, request))
        })
    }

    pub fn deferred_preauthorization_confirm(
        &self,
        request: &PreauthorizationRequest,
    ) -> GatewayResult {
        self.execute(&DEFERRED_PREAUTHORIZATION_CONFIRM, |credentials| {
            Ok(settlement_params(credentials, request))
        })
    }

    pub fn deferred_preauthorization_cancel(
        &self,
        request: &PreauthorizationRequest,
    ) -> GatewayResult {
        self.execute(&DEFERRED_PREAUTHORIZATION_CANCEL, |credentials| {
            Ok(settlement_params(credentials, request))
        })
    }

    /// Store a card tokenized client side by BankStore JET.
    pub fn add_user_token(&self, jet_token: &str) -> GatewayResult {
        self.execute(&ADD_USER_TOKEN, |credentials| {
            let jet_id = credentials.jet_id().ok_or_else(|| {
                report!(BankstoreError::MissingRequiredField {
                    field_name: "jet_id"
                })
            })?;
            let signature = signature::direct_signature(
                &[
                    credentials.merchant_code(),
                    jet_token,
                    jet_id,
                    credentials.terminal(),
                ],
                credentials.password(),
            );
            let mut params = base_params(credentials, signature, true);
            params
                .insert(ds::JET_TOKEN, jet_token)
                .insert(ds::JET_ID, jet_id);
            Ok(params)
        })
    }

    /// Charge a card reference migrated from a previous processor.
    pub fn execute_purchase_rtoken(&self, request: &ReferenceTokenPurchaseRequest) -> GatewayResult {
        self.execute(&EXECUTE_PURCHASE_RTOKEN, |credentials| {
            let amount = amount_string(request.amount);
            let signature = signature::direct_signature(
                &[
                    credentials.merchant_code(),
                    credentials.terminal(),
                    &amount,
                    &request.order,
                    request.reference_token.peek(),
                ],
                credentials.password(),
            );
            let mut params = base_params(credentials, signature, false);
            params
                .insert(ds::AMOUNT, amount)
                .insert(ds::ORDER, request.order.as_str())
                .insert(ds::REFERENCE_TOKEN, request.reference_token.peek().as_str())
                .insert(ds::CURRENCY, request.currency.as_str())
                .insert_optional(ds::PRODUCT_DESCRIPTION, request.product_description.as_deref());
            Ok(params)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_prefers_gateway_value() {
        let mut params = RpcParams::new();
        params.insert(ds::AMOUNT, "1000").insert(ds::ORDER, "ORDER123");
        let reply = RpcReply::new("AUTH01")
            .with_field(ds::AMOUNT, "999")
            .with_field(ds::CARD_COUNTRY, "ESP");

        let data = EXECUTE_PURCHASE.collect(&reply, &params);
        assert_eq!(data[ds::AMOUNT], "999");
        assert_eq!(data[ds::ORDER], "ORDER123");
        assert_eq!(data[ds::CURRENCY], "");
        assert_eq!(data[ds::AUTH_CODE], "AUTH01");
        assert_eq!(data[ds::CARD_COUNTRY], "ESP");
        assert_eq!(data[ds::RESPONSE], "");
        assert_eq!(data.len(), 6);
    }

    #[test]
    fn test_subscription_echo_is_renamed() {
        let mut params = RpcParams::new();
        params
            .insert(ds::AMOUNT, "500")
            .insert(ds::ORDER, "SUB1")
            .insert(ds::CURRENCY, "EUR");
        let reply = RpcReply::new("42").with_field(ds::TOKEN_USER, "TOKEN");

        let data = CREATE_SUBSCRIPTION.collect(&reply, &params);
        assert_eq!(data[ds::ID_USER], "42");
        assert_eq!(data[ds::TOKEN_USER], "TOKEN");
        assert_eq!(data[ds::SUBSCRIPTION_AMOUNT], "500");
        assert_eq!(data[ds::SUBSCRIPTION_ORDER], "SUB1");
        assert_eq!(data[ds::SUBSCRIPTION_CURRENCY], "EUR");
    }
}
