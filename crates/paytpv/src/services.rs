pub mod http_client;
pub mod rpc;

pub use self::{
    http_client::{BlockingHttpClient, HttpFetch},
    rpc::{BankstoreRpc, RpcParams, RpcReply},
};
