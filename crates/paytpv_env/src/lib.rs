#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]

//!
//! Environment of the BankStore library: logger, basic config, its environment awareness.
//!

#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR" ), "/", "README.md"))]

pub mod env;
pub mod logger;

#[doc(inline)]
pub use logger::*;
pub use tracing;
pub use tracing::instrument;

#[doc(inline)]
pub use self::env::*;
