#![forbid(unsafe_code)]
#![recursion_limit = "256"]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR" ), "/", "README.md"))]

pub mod client;
pub mod configs;
pub mod consts;
pub mod core;
pub mod services;
pub mod types;
pub mod utils;

pub use self::{
    client::BankstoreClient,
    core::errors::{BankstoreError, BankstoreResult},
    types::{GatewayResult, MerchantCredentials, OperationDescriptor, OperationType, RedirectOptions},
};
