use serde::{Deserialize, Serialize};

use crate::consts::query;

/// Hosted-page operations the gateway knows how to render.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationType {
    AddUser,
    ExecutePurchase,
    CreateSubscription,
    CreatePreauthorization,
    PreauthorizationConfirm,
    PreauthorizationCancel,
    DeferredCreatePreauthorization,
    DeferredPreauthorizationConfirm,
    DeferredPreauthorizationCancel,
    ExecutePurchaseToken,
    CreateSubscriptionToken,
    CreatePreauthorizationToken,
}

/// A descriptor field that a recipe signs or transmits.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Field {
    Amount,
    Currency,
    IdUser,
    TokenUser,
    StartDate,
    EndDate,
    Periodicity,
}

impl Field {
    pub fn query_key(self) -> &'static str {
        match self {
            Self::Amount => query::AMOUNT,
            Self::Currency => query::CURRENCY,
            Self::IdUser => query::ID_USER,
            Self::TokenUser => query::TOKEN_USER,
            Self::StartDate => query::SUBSCRIPTION_START_DATE,
            Self::EndDate => query::SUBSCRIPTION_END_DATE,
            Self::Periodicity => query::SUBSCRIPTION_PERIODICITY,
        }
    }

    pub fn field_name(self) -> &'static str {
        match self {
            Self::Amount => "amount",
            Self::Currency => "currency",
            Self::IdUser => "id_user",
            Self::TokenUser => "token_user",
            Self::StartDate => "start_date",
            Self::EndDate => "end_date",
            Self::Periodicity => "periodicity",
        }
    }
}

/// How one operation type is signed and which keys it transmits.
///
/// The signature chain is
/// `merchant_code + identity_fields + terminal + code + reference + signed_fields + md5(password)`.
/// `query_fields` extend the core keys every redirect carries; `MERCHANT_AMOUNT` is a core key
/// and never listed here.
#[derive(Debug)]
pub struct OperationRecipe {
    pub code: u16,
    pub identity_fields: &'static [Field],
    pub signed_fields: &'static [Field],
    pub query_fields: &'static [Field],
    pub accepts_scoring: bool,
    pub verifies_user: bool,
}

const ADD_USER: OperationRecipe = OperationRecipe {
    code: 107,
    identity_fields: &[],
    signed_fields: &[],
    query_fields: &[],
    accepts_scoring: false,
    verifies_user: false,
};

const fn purchase(code: u16) -> OperationRecipe {
    OperationRecipe {
        code,
        identity_fields: &[],
        signed_fields: &[Field::Amount, Field::Currency],
        query_fields: &[Field::Currency],
        accepts_scoring: true,
        verifies_user: false,
    }
}

const fn settlement(code: u16) -> OperationRecipe {
    OperationRecipe {
        code,
        identity_fields: &[Field::IdUser, Field::TokenUser],
        signed_fields: &[Field::Amount],
        query_fields: &[Field::Currency, Field::IdUser, Field::TokenUser],
        accepts_scoring: false,
        verifies_user: true,
    }
}

const fn tokenized_purchase(code: u16, verifies_user: bool) -> OperationRecipe {
    OperationRecipe {
        code,
        identity_fields: &[Field::IdUser, Field::TokenUser],
        signed_fields: &[Field::Amount, Field::Currency],
        query_fields: &[Field::IdUser, Field::TokenUser, Field::Currency],
        accepts_scoring: true,
        verifies_user,
    }
}

const CREATE_SUBSCRIPTION: OperationRecipe = OperationRecipe {
    code: 9,
    identity_fields: &[],
    signed_fields: &[Field::Amount, Field::Currency],
    query_fields: &[
        Field::Currency,
        Field::StartDate,
        Field::EndDate,
        Field::Periodicity,
    ],
    accepts_scoring: true,
    verifies_user: false,
};

const CREATE_SUBSCRIPTION_TOKEN: OperationRecipe = OperationRecipe {
    code: 110,
    identity_fields: &[Field::IdUser, Field::TokenUser],
    signed_fields: &[Field::Amount, Field::Currency],
    query_fields: &[
        Field::IdUser,
        Field::TokenUser,
        Field::Currency,
        Field::StartDate,
        Field::EndDate,
        Field::Periodicity,
    ],
    accepts_scoring: true,
    verifies_user: false,
};

const EXECUTE_PURCHASE: OperationRecipe = purchase(1);
const CREATE_PREAUTHORIZATION: OperationRecipe = purchase(3);
const DEFERRED_CREATE_PREAUTHORIZATION: OperationRecipe = purchase(13);
const PREAUTHORIZATION_CONFIRM: OperationRecipe = settlement(6);
const PREAUTHORIZATION_CANCEL: OperationRecipe = settlement(4);
const DEFERRED_PREAUTHORIZATION_CONFIRM: OperationRecipe = settlement(16);
const DEFERRED_PREAUTHORIZATION_CANCEL: OperationRecipe = settlement(14);
const EXECUTE_PURCHASE_TOKEN: OperationRecipe = tokenized_purchase(109, false);
const CREATE_PREAUTHORIZATION_TOKEN: OperationRecipe = tokenized_purchase(111, true);

impl OperationType {
    pub fn recipe(self) -> &'static OperationRecipe {
        match self {
            Self::AddUser => &ADD_USER,
            Self::ExecutePurchase => &EXECUTE_PURCHASE,
            Self::CreateSubscription => &CREATE_SUBSCRIPTION,
            Self::CreatePreauthorization => &CREATE_PREAUTHORIZATION,
            Self::PreauthorizationConfirm => &PREAUTHORIZATION_CONFIRM,
            Self::PreauthorizationCancel => &PREAUTHORIZATION_CANCEL,
            Self::DeferredCreatePreauthorization => &DEFERRED_CREATE_PREAUTHORIZATION,
            Self::DeferredPreauthorizationConfirm => &DEFERRED_PREAUTHORIZATION_CONFIRM,
            Self::DeferredPreauthorizationCancel => &DEFERRED_PREAUTHORIZATION_CANCEL,
            Self::ExecutePurchaseToken => &EXECUTE_PURCHASE_TOKEN,
            Self::CreateSubscriptionToken => &CREATE_SUBSCRIPTION_TOKEN,
            Self::CreatePreauthorizationToken => &CREATE_PREAUTHORIZATION_TOKEN,
        }
    }

    /// Numeric code sent as `OPERATION`.
    pub fn code(self) -> u16 {
        self.recipe().code
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;
    use test_case::test_case;

    use super::*;

    #[test_case(OperationType::AddUser, 107)]
    #[test_case(OperationType::ExecutePurchase, 1)]
    #[test_case(OperationType::CreateSubscription, 9)]
    #[test_case(OperationType::CreatePreauthorization, 3)]
    #[test_case(OperationType::PreauthorizationConfirm, 6)]
    #[test_case(OperationType::PreauthorizationCancel, 4)]
    #[test_case(OperationType::DeferredCreatePreauthorization, 13)]
    #[test_case(OperationType::DeferredPreauthorizationConfirm, 16)]
    #[test_case(OperationType::DeferredPreauthorizationCancel, 14)]
    #[test_case(OperationType::ExecutePurchaseToken, 109)]
    #[test_case(OperationType::CreateSubscriptionToken, 110)]
    #[test_case(OperationType::CreatePreauthorizationToken, 111)]
    fn test_operation_codes(operation: OperationType, code: u16) {
        assert_eq!(operation.code(), code);
    }

    #[test]
    fn test_codes_are_unique() {
        let codes: HashSet<u16> = OperationType::iter().map(OperationType::code).collect();
        assert_eq!(codes.len(), OperationType::iter().count());
    }

    #[test]
    fn test_every_signed_field_is_transmitted() {
        for operation in OperationType::iter() {
            let recipe = operation.recipe();
            for field in recipe.identity_fields.iter().chain(recipe.signed_fields) {
                assert!(
                    *field == Field::Amount || recipe.query_fields.contains(field),
                    "{operation} signs {field:?} without transmitting it"
                );
            }
        }
    }

    #[test]
    fn test_user_lookup_types() {
        let verifying: Vec<OperationType> = OperationType::iter()
            .filter(|operation| operation.recipe().verifies_user)
            .collect();
        assert_eq!(
            verifying,
            vec![
                OperationType::PreauthorizationConfirm,
                OperationType::PreauthorizationCancel,
                OperationType::DeferredPreauthorizationConfirm,
                OperationType::DeferredPreauthorizationCancel,
                OperationType::CreatePreauthorizationToken,
            ]
        );
    }

    #[test]
    fn test_display_matches_gateway_naming() {
        assert_eq!(
            OperationType::DeferredCreatePreauthorization.to_string(),
            "DEFERRED_CREATE_PREAUTHORIZATION"
        );
        assert_eq!(
            "EXECUTE_PURCHASE_TOKEN".parse::<OperationType>().ok(),
            Some(OperationType::ExecutePurchaseToken)
        );
    }
}
