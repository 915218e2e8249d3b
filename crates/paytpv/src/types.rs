mod credentials;
mod descriptor;
mod operation;
pub mod requests;
mod response;

pub use common_utils::types::MinorUnit;

pub use self::{
    credentials::MerchantCredentials,
    descriptor::{OperationDescriptor, RedirectOptions},
    operation::{Field, OperationRecipe, OperationType},
    response::GatewayResult,
};
