//! Errors and error specific types for universal use

/// Custom Result
/// A custom datatype that wraps the error variant <E> into a report, allowing
/// error_stack::Report<E> specific extendability
///
/// Effectively, equivalent to `Result<T, error_stack::Report<E>>`
///
pub type CustomResult<T, E> = error_stack::Result<T, E>;

/// Parsing errors.
#[derive(Debug, thiserror::Error)]
pub enum ParsingError {
    /// The value is not a plain run of ASCII digits.
    #[error("Expected plain decimal digits, found {value:?}")]
    NotDecimalDigits {
        /// The rejected input
        value: String,
    },
    /// The value does not fit the target integer type.
    #[error("Value {value:?} is out of range")]
    OutOfRange {
        /// The rejected input
        value: String,
    },
}
