//! Inputs of the direct (server to server) operations.

use common_utils::types::MinorUnit;
use masking::{CardNumber, Secret};

/// Raw card data. Only accepted where the merchant is PCI-DSS certified.
#[derive(Clone, Debug)]
pub struct CardDetails {
    pub pan: Secret<String, CardNumber>,
    /// `MMYY`
    pub expiry_date: Secret<String>,
    pub cvv: Secret<String>,
}

/// A card already stored in BankStore.
#[derive(Clone, Debug)]
pub struct StoredUser {
    pub id_user: String,
    pub token_user: Secret<String>,
}

impl StoredUser {
    pub fn new(id_user: impl Into<String>, token_user: impl Into<String>) -> Self {
        Self {
            id_user: id_user.into(),
            token_user: Secret::new(token_user.into()),
        }
    }
}

/// Charge, or preauthorize, a stored card.
#[derive(Clone, Debug)]
pub struct PurchaseRequest {
    pub user: StoredUser,
    pub amount: MinorUnit,
    pub order: String,
    pub currency: String,
    pub product_description: Option<String>,
    pub owner: Option<String>,
    pub scoring: Option<String>,
}

/// First step of a purchase with dynamic currency conversion.
#[derive(Clone, Debug)]
pub struct DccPurchaseRequest {
    pub user: StoredUser,
    pub amount: MinorUnit,
    pub order: String,
    pub product_description: Option<String>,
    pub owner: Option<String>,
}

/// Second step of a DCC purchase, in the currency the cardholder chose.
#[derive(Clone, Debug)]
pub struct DccConfirmationRequest {
    pub order: String,
    pub dcc_currency: String,
    pub dcc_session: String,
}

#[derive(Clone, Debug)]
pub struct RefundRequest {
    pub user: StoredUser,
    pub order: String,
    pub currency: String,
    /// Authorization code of the payment being refunded.
    pub auth_code: String,
    /// Partial refund amount, the whole payment when unset.
    pub amount: Option<MinorUnit>,
}

/// Recurring schedule of a subscription. Dates are `yyyy-mm-dd`, periodicity is in days.
#[derive(Clone, Debug)]
pub struct SubscriptionSchedule {
    pub start_date: String,
    pub end_date: String,
    pub periodicity: String,
}

#[derive(Clone, Debug)]
pub struct CreateSubscriptionRequest {
    pub card: CardDetails,
    pub schedule: SubscriptionSchedule,
    pub order: String,
    pub amount: MinorUnit,
    pub currency: String,
    pub scoring: Option<String>,
}

#[derive(Clone, Debug)]
pub struct EditSubscriptionRequest {
    pub user: StoredUser,
    pub schedule: SubscriptionSchedule,
    pub amount: MinorUnit,
    /// Whether the first charge is executed immediately.
    pub execute: bool,
}

#[derive(Clone, Debug)]
pub struct CreateSubscriptionTokenRequest {
    pub user: StoredUser,
    pub schedule: SubscriptionSchedule,
    pub order: String,
    pub amount: MinorUnit,
    pub currency: String,
    pub scoring: Option<String>,
}

/// Confirm or cancel a preauthorization, deferred or not.
#[derive(Clone, Debug)]
pub struct PreauthorizationRequest {
    pub user: StoredUser,
    pub amount: MinorUnit,
    pub order: String,
}

/// Charge a card reference carried over from a previous processor.
#[derive(Clone, Debug)]
pub struct ReferenceTokenPurchaseRequest {
    pub amount: MinorUnit,
    pub order: String,
    pub reference_token: Secret<String>,
    pub currency: String,
    pub product_description: Option<String>,
}
