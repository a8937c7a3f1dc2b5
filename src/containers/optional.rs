//! # Optional Container
//!
//! `Optional<T>` holds zero or one value and replaces nullable references.
//!
//! ## Features
//! - Conditional construction (`some_if`, `some_not_null`, `some_not_default`)
//! - `map_value` that never calls the mapper on an absent value
//! - `match_with` dispatch to exactly one branch
//! - Explicit exits into `Result<T, Failure>` (`get_value_or_throw`)

use crate::config::{NO_VALUE_IN_OPTION, VALUE_NOT_PRESENT};
use crate::containers::outcome::Outcome;
use crate::failure::{AccessError, Failure};

/// Optional type: Some(T) or None
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Optional<T> {
    Some(T),
    None,
}

impl<T> Optional<T> {
    /// An absent optional of any element type
    pub fn none() -> Self {
        Optional::None
    }

    /// Returns true if a value is present
    pub fn has_value(&self) -> bool {
        matches!(self, Optional::Some(_))
    }

    /// Returns true if no value is present
    pub fn is_none(&self) -> bool {
        matches!(self, Optional::None)
    }

    /// Borrow the value if present
    pub fn value(&self) -> Option<&T> {
        match self {
            Optional::Some(value) => Some(value),
            Optional::None => None,
        }
    }

    /// Converts from &Optional<T> to Optional<&T>
    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Some(value) => Optional::Some(value),
            Optional::None => Optional::None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Optional::Some(value) => Some(value),
            Optional::None => None,
        }
    }

    /// Returns the held value, or `value_if_none`
    pub fn value_or(self, value_if_none: T) -> T {
        match self {
            Optional::Some(value) => value,
            Optional::None => value_if_none,
        }
    }

    /// Returns the held value, or `Err(failure)` if absent
    pub fn get_value_or_throw(self, failure: impl Into<Failure>) -> Result<T, Failure> {
        match self {
            Optional::Some(value) => Ok(value),
            Optional::None => Err(failure.into()),
        }
    }

    /// Returns the held value, or a generic failure carrying `message`.
    ///
    /// The message defaults to `"Value not present"`.
    pub fn get_value_or_throw_msg(self, message: Option<&str>) -> Result<T, Failure> {
        match self {
            Optional::Some(value) => Ok(value),
            Optional::None => Err(Failure::new(AccessError::missing(
                message.unwrap_or(VALUE_NOT_PRESENT),
            ))),
        }
    }

    /// Maps an Optional<T> to Optional<U>; `op` only runs when a value is present
    pub fn map_value<U, F>(self, op: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Some(value) => Optional::Some(op(value)),
            Optional::None => Optional::None,
        }
    }

    /// Run exactly one branch and return its result.
    ///
    /// Closures returning `()` give the side-effect-only form.
    pub fn match_with<R, V, N>(self, on_value: V, on_none: N) -> R
    where
        V: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self {
            Optional::Some(value) => on_value(value),
            Optional::None => on_none(),
        }
    }

    /// Continue with `step` if a value is present.
    ///
    /// An absent optional becomes a friendly failure carrying `absent_message`
    /// (default `"No value present in option"`) and `step` is not called.
    pub fn bind_option<U, F>(self, step: F, absent_message: Option<&str>) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Optional::Some(value) => step(value),
            Optional::None => Outcome::Failure(Failure::friendly(
                absent_message.unwrap_or(NO_VALUE_IN_OPTION),
            )),
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::None
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        some_not_null(value)
    }
}

/// An optional holding `value`
pub fn some<T>(value: T) -> Optional<T> {
    Optional::Some(value)
}

/// An absent optional
pub fn none<T>() -> Optional<T> {
    Optional::None
}

/// Present only if `predicate` accepts the value
pub fn some_if<T, P>(value: T, predicate: P) -> Optional<T>
where
    P: FnOnce(&T) -> bool,
{
    if predicate(&value) {
        Optional::Some(value)
    } else {
        Optional::None
    }
}

/// Present only if the value is not null
pub fn some_not_null<T>(value: Option<T>) -> Optional<T> {
    match value {
        Some(value) => Optional::Some(value),
        None => Optional::None,
    }
}

/// Present only if the value differs from `T::default()`
pub fn some_not_default<T>(value: T) -> Optional<T>
where
    T: Default + PartialEq,
{
    some_if(value, |v| *v != T::default())
}
