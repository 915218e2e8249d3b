#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::expect_used,
    clippy::missing_panics_doc,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::panicking_unwrap,
    clippy::unreachable,
    clippy::unwrap_in_result,
    clippy::unwrap_used
)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR" ), "/", "README.md"))]

pub mod crypto;
pub mod errors;
pub mod types;

/// Functional programming utilities
pub mod fp_utils {

    /// Run `f` only when `predicate` holds, returning its result
    pub fn when<W, F>(predicate: bool, f: F) -> Result<(), W>
    where
        F: FnOnce() -> Result<(), W>,
    {
        if predicate {
            f()
        } else {
            Ok(())
        }
    }
}
