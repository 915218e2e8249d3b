//! Hosted-page redirect builders.
//!
//! Every builder signs the operation, seals the sorted query with VHASH, appends it to the
//! redirect endpoint and probes the result once before handing the URL to the caller.

use std::collections::BTreeMap;

use common_utils::types::MinorUnit;
use error_stack::report;
use masking::Secret;
use paytpv_env::{instrument, logger};

use crate::{
    client::BankstoreClient,
    consts,
    core::{
        canonical::CanonicalQuery,
        errors::{BankstoreError, BankstoreResult},
        normalizer,
        probe::{self, ProbeOutcome},
        signature,
    },
    types::{
        requests::{StoredUser, SubscriptionSchedule},
        Field, GatewayResult, OperationDescriptor, OperationType, RedirectOptions,
    },
};

impl BankstoreClient {
    /// Build the redirect URL of any operation type from a filled descriptor.
    ///
    /// On success the result holds the URL under `URL_REDIRECT`.
    #[instrument(skip_all, fields(operation = %operation))]
    pub fn redirect_url(
        &self,
        operation: OperationType,
        descriptor: OperationDescriptor,
    ) -> GatewayResult {
        normalizer::normalize(
            &operation.to_string(),
            self.compose_redirect(operation, descriptor),
        )
    }

    pub fn add_user_url(&self, reference: &str, options: RedirectOptions) -> GatewayResult {
        self.redirect_url(
            OperationType::AddUser,
            OperationDescriptor::new(reference).with_options(options),
        )
    }

    pub fn execute_purchase_url(
        &self,
        reference: &str,
        amount: MinorUnit,
        currency: &str,
        options: RedirectOptions,
    ) -> GatewayResult {
        self.redirect_url(
            OperationType::ExecutePurchase,
            charge(reference, amount, currency).with_options(options),
        )
    }

    pub fn create_subscription_url(
        &self,
        reference: &str,
        amount: MinorUnit,
        currency: &str,
        schedule: SubscriptionSchedule,
        options: RedirectOptions,
    ) -> GatewayResult {
        self.redirect_url(
            OperationType::CreateSubscription,
            charge(reference, amount, currency)
                .with_subscription(schedule.start_date, schedule.end_date, schedule.periodicity)
                .with_options(options),
        )
    }

    pub fn execute_purchase_token_url(
        &self,
        reference: &str,
        amount: MinorUnit,
        currency: &str,
        user: StoredUser,
        options: RedirectOptions,
    ) -> GatewayResult {
        self.redirect_url(
            OperationType::ExecutePurchaseToken,
            charge(reference, amount, currency)
                .with_user(user.id_user, user.token_user)
                .with_options(options),
        )
    }

    pub fn create_subscription_token_url(
        &self,
        reference: &str,
        amount: MinorUnit,
        currency: &str,
        user: StoredUser,
        schedule: SubscriptionSchedule,
        options: RedirectOptions,
    ) -> GatewayResult {
        self.redirect_url(
            OperationType::CreateSubscriptionToken,
            charge(reference, amount, currency)
                .with_user(user.id_user, user.token_user)
                .with_subscription(schedule.start_date, schedule.end_date, schedule.periodicity)
                .with_options(options),
        )
    }

    pub fn create_preauthorization_url(
        &self,
        reference: &str,
        amount: MinorUnit,
        currency: &str,
        options: RedirectOptions,
    ) -> GatewayResult {
        self.redirect_url(
            OperationType::CreatePreauthorization,
            charge(reference, amount, currency).with_options(options),
        )
    }

    pub fn preauthorization_confirm_url(
        &self,
        reference: &str,
        amount: MinorUnit,
        currency: &str,
        user: StoredUser,
        options: RedirectOptions,
    ) -> GatewayResult {
        self.user_redirect(
            OperationType::PreauthorizationConfirm,
            charge(reference, amount, currency),
            user,
            options,
        )
    }

    pub fn preauthorization_cancel_url(
        &self,
        reference: &str,
        amount: MinorUnit,
        currency: &str,
        user: StoredUser,
        options: RedirectOptions,
    ) -> GatewayResult {
        self.user_redirect(
            OperationType::PreauthorizationCancel,
            charge(reference, amount, currency),
            user,
            options,
        )
    }

    pub fn create_preauthorization_token_url(
        &self,
        reference: &str,
        amount: MinorUnit,
        currency: &str,
        user: StoredUser,
        options: RedirectOptions,
    ) -> GatewayResult {
        self.user_redirect(
            OperationType::CreatePreauthorizationToken,
            charge(reference, amount, currency),
            user,
            options,
        )
    }

    pub fn deferred_preauthorization_url(
        &self,
        reference: &str,
        amount: MinorUnit,
        currency: &str,
        options: RedirectOptions,
    ) -> GatewayResult {
        self.redirect_url(
            OperationType::DeferredCreatePreauthorization,
            charge(reference, amount, currency).with_options(options),
        )
    }

    pub fn deferred_preauthorization_confirm_url(
        &self,
        reference: &str,
        amount: MinorUnit,
        currency: &str,
        user: StoredUser,
        options: RedirectOptions,
    ) -> GatewayResult {
        self.user_redirect(
            OperationType::DeferredPreauthorizationConfirm,
            charge(reference, amount, currency),
            user,
            options,
        )
    }

    pub fn deferred_preauthorization_cancel_url(
        &self,
        reference: &str,
        amount: MinorUnit,
        currency: &str,
        user: StoredUser,
        options: RedirectOptions,
    ) -> GatewayResult {
        self.user_redirect(
            OperationType::DeferredPreauthorizationCancel,
            charge(reference, amount, currency),
            user,
            options,
        )
    }

    fn user_redirect(
        &self,
        operation: OperationType,
        descriptor: OperationDescriptor,
        user: StoredUser,
        options: RedirectOptions,
    ) -> GatewayResult {
        self.redirect_url(
            operation,
            descriptor
                .with_user(user.id_user, user.token_user)
                .with_options(options),
        )
    }

    fn compose_redirect(
        &self,
        operation: OperationType,
        mut descriptor: OperationDescriptor,
    ) -> BankstoreResult<BTreeMap<String, String>> {
        if operation.recipe().verifies_user {
            let user = StoredUser {
                id_user: descriptor.required_field(Field::IdUser)?,
                token_user: Secret::new(descriptor.required_field(Field::TokenUser)?),
            };
            self.lookup_user(&user)?;
            logger::debug!(id_user = %user.id_user, "stored card verified");
        }

        let signature =
            signature::redirect_signature(&descriptor, operation, &self.credentials)?;
        descriptor.set_signature(signature);

        let url = CanonicalQuery::build(&descriptor, operation, &self.credentials)?
            .seal(self.credentials.password())
            .compose_url(&self.redirect_base_url);

        match probe::probe(self.fetcher.as_ref(), &url)? {
            ProbeOutcome::Clear => Ok(BTreeMap::from([(consts::URL_REDIRECT.to_owned(), url)])),
            ProbeOutcome::GatewayError(code) => Err(report!(BankstoreError::GatewayError { code })),
        }
    }
}

fn charge(reference: &str, amount: MinorUnit, currency: &str) -> OperationDescriptor {
    OperationDescriptor::new(reference)
        .with_amount(amount)
        .with_currency(currency)
}
