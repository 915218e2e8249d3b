pub use common_utils::errors::CustomResult;

use crate::consts;

pub type BankstoreResult<T> = CustomResult<T, BankstoreError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BankstoreError {
    #[error("Failed to reach the gateway")]
    TransportFailure,
    #[error("Gateway rejected the operation with error {code}")]
    GatewayError { code: String },
    #[error("Missing required field: {field_name}")]
    MissingRequiredField { field_name: &'static str },
    #[error("Invalid value provided for field: {field_name}")]
    InvalidValue { field_name: &'static str },
    #[error("Failed to construct the HTTP client")]
    ClientConstructionFailed,
    #[error("Gateway returned an unexpected response")]
    UnexpectedResponse,
    #[error("Something went wrong")]
    Unexpected,
}

impl BankstoreError {
    /// Error identifier reported to the caller for this failure.
    pub fn error_code(&self) -> String {
        match self {
            Self::TransportFailure => consts::TRANSPORT_ERROR_CODE.to_owned(),
            Self::GatewayError { code } => code.clone(),
            Self::MissingRequiredField { .. }
            | Self::InvalidValue { .. }
            | Self::ClientConstructionFailed
            | Self::UnexpectedResponse
            | Self::Unexpected => consts::GENERIC_ERROR_CODE.to_owned(),
        }
    }
}
