//! Sorted redirect query, its VHASH seal and the final redirect URL.

use std::collections::BTreeMap;

use error_stack::report;
use masking::Secret;

use crate::{
    consts::query,
    core::{
        errors::{BankstoreError, BankstoreResult},
        signature,
    },
    types::{MerchantCredentials, OperationDescriptor, OperationType},
    utils,
};

/// Redirect parameters of one operation, ordered by key in byte order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CanonicalQuery {
    params: BTreeMap<&'static str, String>,
}

impl CanonicalQuery {
    /// Collect the parameters of `operation` from a signed descriptor.
    ///
    /// Core keys are always present and empty when unset. Description and scoring are left out
    /// entirely unless they carry a value.
    pub fn build(
        descriptor: &OperationDescriptor,
        operation: OperationType,
        credentials: &MerchantCredentials,
    ) -> BankstoreResult<Self> {
        let recipe = operation.recipe();
        let signature = descriptor.signature().ok_or_else(|| {
            report!(BankstoreError::MissingRequiredField {
                field_name: "signature"
            })
        })?;

        let mut params = BTreeMap::from([
            (query::MERCHANT_CODE, credentials.merchant_code().to_owned()),
            (query::TERMINAL, credentials.terminal().to_owned()),
            (query::OPERATION, recipe.code.to_string()),
            (query::LANGUAGE, descriptor.language().to_owned()),
            (query::SIGNATURE, signature.to_owned()),
            (query::URL_OK, descriptor.url_ok.clone().unwrap_or_default()),
            (query::URL_KO, descriptor.url_ko.clone().unwrap_or_default()),
            (query::ORDER, descriptor.reference.clone()),
            (query::SECURE_3D, descriptor.secure_3d_flag().to_owned()),
            (
                query::AMOUNT,
                descriptor
                    .amount
                    .map(|amount| amount.to_string())
                    .unwrap_or_default(),
            ),
        ]);

        if let Some(concept) = descriptor.concept() {
            params.insert(query::PRODUCT_DESCRIPTION, concept.to_owned());
        }

        for field in recipe.query_fields {
            params.insert(field.query_key(), descriptor.field(*field).unwrap_or_default());
        }

        if recipe.accepts_scoring {
            if let Some(scoring) = descriptor.scoring() {
                params.insert(query::SCORING, scoring.to_owned());
            }
        }

        Ok(Self { params })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.params.keys().copied()
    }

    /// `k=v&k=v` with every key and value form-encoded.
    pub fn serialize(&self) -> String {
        utils::serialize_pairs(self.params.iter().map(|(key, value)| (*key, value.as_str())))
    }

    /// Compute VHASH over the current serialization and add it to the parameter set.
    pub fn seal(mut self, password: &Secret<String>) -> SealedQuery {
        let vhash = signature::query_hash(&self.serialize(), password);
        self.params.insert(query::VHASH, vhash);
        SealedQuery { inner: self }
    }
}

/// A [`CanonicalQuery`] carrying its VHASH.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SealedQuery {
    inner: CanonicalQuery,
}

impl SealedQuery {
    pub fn vhash(&self) -> Option<&str> {
        self.inner.get(query::VHASH)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.inner.keys()
    }

    pub fn serialize(&self) -> String {
        self.inner.serialize()
    }

    /// Append the encoded query to `base_url`.
    pub fn compose_url(&self, base_url: &str) -> String {
        compose_url(base_url, &self.serialize())
    }
}

/// Join a base URL and an encoded query string.
///
/// A base ending in `?` or `&` takes the query as is; otherwise `?` is inserted, or `&` when
/// the base already has a query part.
pub fn compose_url(base_url: &str, query_string: &str) -> String {
    let separator = if base_url.ends_with('?') || base_url.ends_with('&') {
        ""
    } else if base_url.contains('?') {
        "&"
    } else {
        "?"
    };
    format!("{base_url}{separator}{query_string}")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use common_utils::types::MinorUnit;
    use proptest::prelude::*;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    use super::*;
    use crate::types::RedirectOptions;

    fn credentials() -> MerchantCredentials {
        MerchantCredentials::new("999008881", "1", Secret::new("secret".to_owned()), "127.0.0.1")
    }

    fn signed(mut descriptor: OperationDescriptor, operation: OperationType) -> OperationDescriptor {
        let signature =
            signature::redirect_signature(&descriptor, operation, &credentials()).unwrap();
        descriptor.set_signature(signature);
        descriptor
    }

    fn purchase() -> OperationDescriptor {
        signed(
            OperationDescriptor::new("ORDER123")
                .with_amount(MinorUnit::new(1000))
                .with_currency("978"),
            OperationType::ExecutePurchase,
        )
    }

    #[test]
    fn test_execute_purchase_keys() {
        let query =
            CanonicalQuery::build(&purchase(), OperationType::ExecutePurchase, &credentials())
                .unwrap();
        let keys: Vec<&str> = query.keys().collect();
        assert_eq!(
            keys,
            vec![
                "3DSECURE",
                "LANGUAGE",
                "MERCHANT_AMOUNT",
                "MERCHANT_CURRENCY",
                "MERCHANT_MERCHANTCODE",
                "MERCHANT_MERCHANTSIGNATURE",
                "MERCHANT_ORDER",
                "MERCHANT_TERMINAL",
                "OPERATION",
                "URLKO",
                "URLOK",
            ]
        );
        assert_eq!(query.get("OPERATION"), Some("1"));
        assert_eq!(query.get("URLOK"), Some(""));
        assert_eq!(query.get("3DSECURE"), Some("0"));
    }

    #[test]
    fn test_unsigned_descriptor_is_rejected() {
        let descriptor = OperationDescriptor::new("ORDER123");
        let error = CanonicalQuery::build(&descriptor, OperationType::AddUser, &credentials())
            .unwrap_err();
        assert_eq!(
            error.current_context(),
            &BankstoreError::MissingRequiredField {
                field_name: "signature"
            }
        );
    }

    #[test]
    fn test_optional_fields_are_omitted_when_empty() {
        let descriptor = purchase().with_options(RedirectOptions {
            description: Some(String::new()),
            scoring: None,
            ..Default::default()
        });
        let query =
            CanonicalQuery::build(&descriptor, OperationType::ExecutePurchase, &credentials())
                .unwrap();
        assert!(query.get("MERCHANT_PRODUCTDESCRIPTION").is_none());
        assert!(query.get("MERCHANT_SCORING").is_none());
        assert!(!query.serialize().contains("MERCHANT_SCORING"));
    }

    #[test]
    fn test_scoring_only_for_types_that_accept_it() {
        let options = RedirectOptions {
            scoring: Some("50".to_owned()),
            ..Default::default()
        };
        let mut descriptor = OperationDescriptor::new("ORDER123")
            .with_amount(MinorUnit::new(1000))
            .with_currency("978")
            .with_user("42", Secret::new("TOKEN".to_owned()))
            .with_options(options);
        descriptor.set_signature("abc".to_owned());

        let purchase =
            CanonicalQuery::build(&descriptor, OperationType::ExecutePurchase, &credentials())
                .unwrap();
        assert_eq!(purchase.get("MERCHANT_SCORING"), Some("50"));

        let confirm = CanonicalQuery::build(
            &descriptor,
            OperationType::PreauthorizationConfirm,
            &credentials(),
        )
        .unwrap();
        assert!(confirm.get("MERCHANT_SCORING").is_none());
        assert_eq!(confirm.get("IDUSER"), Some("42"));
        assert_eq!(confirm.get("TOKEN_USER"), Some("TOKEN"));
    }

    #[test]
    fn test_subscription_token_keys() {
        let mut descriptor = OperationDescriptor::new("ORDER123")
            .with_amount(MinorUnit::new(1000))
            .with_currency("978")
            .with_user("42", Secret::new("TOKEN".to_owned()))
            .with_subscription("2026-01-01", "2027-01-01", "30");
        descriptor.set_signature("abc".to_owned());
        let query = CanonicalQuery::build(
            &descriptor,
            OperationType::CreateSubscriptionToken,
            &credentials(),
        )
        .unwrap();
        assert_eq!(query.get("SUBSCRIPTION_STARTDATE"), Some("2026-01-01"));
        assert_eq!(query.get("SUBSCRIPTION_ENDDATE"), Some("2027-01-01"));
        assert_eq!(query.get("SUBSCRIPTION_PERIODICITY"), Some("30"));
        assert_eq!(query.get("OPERATION"), Some("110"));
    }

    #[test]
    fn test_vhash_covers_everything_but_itself() {
        let query =
            CanonicalQuery::build(&purchase(), OperationType::ExecutePurchase, &credentials())
                .unwrap();
        let serialized = query.serialize();
        let password = Secret::new("secret".to_owned());
        let sealed = query.seal(&password);

        assert_eq!(
            sealed.vhash().unwrap(),
            signature::query_hash(&serialized, &password)
        );
        let resealed_source = sealed
            .keys()
            .filter(|key| *key != "VHASH")
            .map(|key| (key, sealed.get(key).unwrap()))
            .collect::<Vec<_>>();
        assert_eq!(utils::serialize_pairs(resealed_source), serialized);
    }

    #[test]
    fn test_every_operation_transmits_its_hashed_fields() {
        let base = OperationDescriptor::new("ORDER123")
            .with_amount(MinorUnit::new(1000))
            .with_currency("978")
            .with_user("42", Secret::new("TOKEN".to_owned()))
            .with_subscription("2026-01-01", "2027-01-01", "30");
        for operation in OperationType::iter() {
            let descriptor = signed(base.clone(), operation);
            let query = CanonicalQuery::build(&descriptor, operation, &credentials()).unwrap();
            let recipe = operation.recipe();
            for field in recipe.identity_fields.iter().chain(recipe.signed_fields) {
                assert_eq!(
                    query.get(field.query_key()),
                    descriptor.field(*field).as_deref(),
                    "{operation} does not transmit {field:?}"
                );
            }
        }
    }

    #[test_case("https://gw.example/url", "https://gw.example/url?A=1" ; "bare base")]
    #[test_case("https://gw.example/url?", "https://gw.example/url?A=1" ; "trailing question mark")]
    #[test_case("https://gw.example/url?x=1", "https://gw.example/url?x=1&A=1" ; "existing query")]
    #[test_case("https://gw.example/url?x=1&", "https://gw.example/url?x=1&A=1" ; "trailing ampersand")]
    fn test_compose_url(base: &str, expected: &str) {
        assert_eq!(compose_url(base, "A=1"), expected);
    }

    proptest! {
        #[test]
        fn proptest_query_is_deterministic(
            reference in "[A-Za-z0-9 &=]{1,24}",
            amount in 0u64..10_000_000,
            description in proptest::option::of(".{0,16}"),
        ) {
            let descriptor = signed(
                OperationDescriptor::new(reference)
                    .with_amount(MinorUnit::new(amount))
                    .with_currency("978")
                    .with_options(RedirectOptions { description, ..Default::default() }),
                OperationType::ExecutePurchase,
            );
            let password = Secret::new("secret".to_owned());
            let first = CanonicalQuery::build(&descriptor, OperationType::ExecutePurchase, &credentials())
                .unwrap()
                .seal(&password);
            let second = CanonicalQuery::build(&descriptor, OperationType::ExecutePurchase, &credentials())
                .unwrap()
                .seal(&password);
            prop_assert_eq!(first.serialize(), second.serialize());

            let keys: Vec<&str> = first.keys().collect();
            let mut sorted = keys.clone();
            sorted.sort_unstable();
            prop_assert_eq!(keys, sorted);
        }
    }
}
