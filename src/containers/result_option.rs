//! Helpers for `Outcome<Optional<T>>`: a lookup that can fail, and can also
//! legitimately find nothing.

use crate::config::NO_VALUE_PASSED;
use crate::containers::optional::{some_if, some_not_default, some_not_null, Optional};
use crate::containers::outcome::Outcome;
use crate::failure::Failure;

impl<T> Outcome<Optional<T>> {
    /// Collapse a failure into an absent optional
    pub fn map_result_error_to_none(self) -> Optional<T> {
        self.match_with(|optional| optional, |_| Optional::None)
    }

    /// Turn an absent optional into a friendly failure carrying `message`
    pub fn map_none_to_result_error(self, message: &str) -> Outcome<T> {
        match self {
            Outcome::Value(Optional::Some(value)) => Outcome::Value(value),
            Outcome::Value(Optional::None) => Outcome::Failure(Failure::friendly(message)),
            Outcome::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Take the inner value, failing if either layer is empty.
    ///
    /// A failed outcome is wrapped under `result_message`. An absent optional
    /// fails with `option_missing_message`, or `result_message` when that is
    /// missing or blank.
    pub fn expect_option_value(
        self,
        result_message: &str,
        option_missing_message: Option<&str>,
    ) -> Result<T, Failure> {
        match self.expect(result_message)? {
            Optional::Some(value) => Ok(value),
            Optional::None => {
                let message = option_missing_message
                    .filter(|message| !message.trim().is_empty())
                    .unwrap_or(result_message);
                Err(Failure::friendly(message))
            }
        }
    }

    /// Map the inner value when both layers hold one
    pub fn map_option<U, F>(self, op: F) -> Outcome<Optional<U>>
    where
        F: FnOnce(T) -> U,
    {
        self.map_value(|optional| optional.map_value(op))
    }

    /// Continue with `step` when both layers hold a value.
    ///
    /// A failure passes through unchanged; an absent optional becomes a
    /// friendly failure carrying `absent_message`.
    pub fn bind_option_result<U, F>(self, step: F, absent_message: Option<&str>) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Outcome::Value(Optional::Some(value)) => step(value),
            Outcome::Value(Optional::None) => {
                Outcome::Failure(Failure::friendly(absent_message.unwrap_or(NO_VALUE_PASSED)))
            }
            Outcome::Failure(failure) => Outcome::Failure(failure),
        }
    }
}

pub fn some_result<T>(value: T) -> Outcome<Optional<T>> {
    Outcome::Value(Optional::Some(value))
}

pub fn none_result<T>() -> Outcome<Optional<T>> {
    Outcome::Value(Optional::None)
}

pub fn some_result_if<T, P>(value: T, predicate: P) -> Outcome<Optional<T>>
where
    P: FnOnce(&T) -> bool,
{
    Outcome::Value(some_if(value, predicate))
}

pub fn some_result_not_null<T>(value: Option<T>) -> Outcome<Optional<T>> {
    Outcome::Value(some_not_null(value))
}

/// A successful lookup that found something only if `value` is not `T::default()`
pub fn some_result_not_default<T>(value: T) -> Outcome<Optional<T>>
where
    T: Default + PartialEq,
{
    Outcome::Value(some_not_default(value))
}
