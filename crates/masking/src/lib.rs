#![forbid(unsafe_code)]
#![warn(missing_docs)]

//!
//! Protection for sensitive merchant and cardholder data. A [`Secret`] formats through a masking
//! [`Strategy`] so it cannot leak through `Debug` output or structured logs.
//!

#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR" ), "/", "README.md"))]

mod strategy;

pub use strategy::{CardNumber, Strategy, WithType, WithoutType};
mod abs;
pub use abs::{ExposeInterface, ExposeOptionInterface, PeekInterface};

mod secret;
pub use secret::Secret;

#[cfg(feature = "serde")]
mod serde;

/// This module should be included with asterisk.
///
/// `use masking::prelude::*;`
///
pub mod prelude {
    pub use super::{ExposeInterface, ExposeOptionInterface, PeekInterface};
}
