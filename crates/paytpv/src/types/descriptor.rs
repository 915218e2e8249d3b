use common_utils::types::MinorUnit;
use error_stack::report;
use masking::{PeekInterface, Secret};

use super::operation::Field;
use crate::{
    consts,
    core::errors::{BankstoreError, BankstoreResult},
};

/// Optional inputs shared by every redirect builder.
#[derive(Clone, Debug, Default)]
pub struct RedirectOptions {
    /// Hosted page language, `ES` when unset.
    pub language: Option<String>,
    /// Sent as `MERCHANT_PRODUCTDESCRIPTION` when non-empty.
    pub description: Option<String>,
    pub secure_3d: bool,
    pub scoring: Option<String>,
    pub url_ok: Option<String>,
    pub url_ko: Option<String>,
}

/// Fields of one redirect operation.
///
/// A descriptor lives for a single call. The signature slot is filled by the signing step and
/// read back by the query builder.
#[derive(Clone, Debug, Default)]
pub struct OperationDescriptor {
    pub reference: String,
    pub amount: Option<MinorUnit>,
    pub currency: Option<String>,
    pub language: Option<String>,
    pub concept: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub periodicity: Option<String>,
    pub id_user: Option<String>,
    pub token_user: Option<Secret<String>>,
    pub secure_3d: bool,
    pub scoring: Option<String>,
    pub url_ok: Option<String>,
    pub url_ko: Option<String>,
    signature: Option<String>,
}

impl OperationDescriptor {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            ..Default::default()
        }
    }

    pub fn with_amount(mut self, amount: MinorUnit) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn with_user(mut self, id_user: impl Into<String>, token_user: Secret<String>) -> Self {
        self.id_user = Some(id_user.into());
        self.token_user = Some(token_user);
        self
    }

    pub fn with_subscription(
        mut self,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        periodicity: impl Into<String>,
    ) -> Self {
        self.start_date = Some(start_date.into());
        self.end_date = Some(end_date.into());
        self.periodicity = Some(periodicity.into());
        self
    }

    pub fn with_options(mut self, options: RedirectOptions) -> Self {
        let RedirectOptions {
            language,
            description,
            secure_3d,
            scoring,
            url_ok,
            url_ko,
        } = options;
        self.language = language;
        self.concept = description;
        self.secure_3d = secure_3d;
        self.scoring = scoring;
        self.url_ok = url_ok;
        self.url_ko = url_ko;
        self
    }

    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    pub(crate) fn set_signature(&mut self, signature: String) {
        self.signature = Some(signature);
    }

    pub fn language(&self) -> &str {
        non_empty(self.language.as_deref()).unwrap_or(consts::DEFAULT_LANGUAGE)
    }

    /// `3DSECURE` flag as the gateway expects it.
    pub fn secure_3d_flag(&self) -> &'static str {
        if self.secure_3d {
            "1"
        } else {
            "0"
        }
    }

    pub fn required_reference(&self) -> BankstoreResult<&str> {
        non_empty(Some(self.reference.as_str())).ok_or_else(|| {
            report!(BankstoreError::MissingRequiredField {
                field_name: "reference"
            })
        })
    }

    /// Value of `field`, or `None` when it is unset or empty.
    pub fn field(&self, field: Field) -> Option<String> {
        let value = match field {
            Field::Amount => return self.amount.map(|amount| amount.to_string()),
            Field::Currency => self.currency.as_deref(),
            Field::IdUser => self.id_user.as_deref(),
            Field::TokenUser => self.token_user.as_ref().map(|token| token.peek().as_str()),
            Field::StartDate => self.start_date.as_deref(),
            Field::EndDate => self.end_date.as_deref(),
            Field::Periodicity => self.periodicity.as_deref(),
        };
        non_empty(value).map(str::to_owned)
    }

    pub fn required_field(&self, field: Field) -> BankstoreResult<String> {
        self.field(field).ok_or_else(|| {
            report!(BankstoreError::MissingRequiredField {
                field_name: field.field_name()
            })
        })
    }

    pub fn concept(&self) -> Option<&str> {
        non_empty(self.concept.as_deref())
    }

    pub fn scoring(&self) -> Option<&str> {
        non_empty(self.scoring.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
