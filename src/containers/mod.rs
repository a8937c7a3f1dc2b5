//! Containers
//!
//! - `Optional<T>`: zero or one value
//! - `Outcome<T>`: a value or a failure
//! - Erased forms of both, for failures built before the element type is known
//! - `Outcome<Optional<T>>` helpers

pub mod erased;
pub mod optional;
pub mod outcome;
pub mod result_option;

pub use erased::{erased_error, erased_error_msg, none_erased, AnyValue, ErasedOptional, ErasedOutcome};
pub use optional::{none, some, some_if, some_not_default, some_not_null, Optional};
pub use outcome::{result_error, result_error_msg, result_error_with_cause, result_value, Outcome};
pub use result_option::{
    none_result, some_result, some_result_if, some_result_not_default, some_result_not_null,
};
