pub mod canonical;
pub mod direct;
pub mod errors;
pub mod normalizer;
pub mod probe;
pub mod redirect;
pub mod signature;
