//! # Outcome Container
//!
//! `Outcome<T>` holds either a value or a [`Failure`], replacing thrown-error
//! control flow. Failures travel through `map_value`, `bind` and `match_with`
//! as plain data; they only become an `Err` at `unwrap`, `expect` or
//! `into_result`.

use tracing::debug;

use crate::config::NO_VALUE_PASSED;
use crate::containers::erased::ErasedOutcome;
use crate::failure::{AccessError, Failure};

/// Outcome type: Value(T) or Failure
#[derive(Debug, Clone)]
pub enum Outcome<T> {
    Value(T),
    Failure(Failure),
}

impl<T> Outcome<T> {
    /// Returns true if the outcome holds a value
    pub fn has_value(&self) -> bool {
        matches!(self, Outcome::Value(_))
    }

    /// Returns true if the outcome holds a failure
    pub fn has_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Borrow the value if present
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Value(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Borrow the failure if present
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Outcome::Value(_) => None,
            Outcome::Failure(failure) => Some(failure),
        }
    }

    /// Converts from &Outcome<T> to Outcome<&T>
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Outcome::Value(value) => Outcome::Value(value),
            Outcome::Failure(failure) => Outcome::Failure(failure.clone()),
        }
    }

    /// Take the value. Only call after checking [`has_value`](Self::has_value).
    ///
    /// Unlike [`Option::unwrap`] this never panics: reading the value of a
    /// failure-bearing outcome comes back as [`AccessError::ValueAbsent`].
    pub fn unwrap(self) -> Result<T, AccessError> {
        match self {
            Outcome::Value(value) => Ok(value),
            Outcome::Failure(_) => Err(AccessError::ValueAbsent),
        }
    }

    /// Take the failure. Only call after checking [`has_value`](Self::has_value).
    pub fn unwrap_failure(self) -> Result<Failure, AccessError> {
        match self {
            Outcome::Value(_) => Err(AccessError::FailureAbsent),
            Outcome::Failure(failure) => Ok(failure),
        }
    }

    /// The failure as kind `K`, or `None` on a value or a different kind
    pub fn failure_of<K>(&self) -> Option<&K>
    where
        K: std::error::Error + 'static,
    {
        self.failure().and_then(Failure::downcast_ref::<K>)
    }

    /// Like [`failure_of`](Self::failure_of), but a value-bearing outcome is
    /// [`AccessError::FailureAbsent`] rather than `None`
    pub fn unwrap_failure_of<K>(&self) -> Result<Option<&K>, AccessError>
    where
        K: std::error::Error + 'static,
    {
        match self {
            Outcome::Value(_) => Err(AccessError::FailureAbsent),
            Outcome::Failure(failure) => Ok(failure.downcast_ref::<K>()),
        }
    }

    pub fn has_failure_of_kind<K>(&self) -> bool
    where
        K: std::error::Error + 'static,
    {
        self.failure().map_or(false, Failure::is::<K>)
    }

    /// Take the value, or fail with a friendly failure wrapping the original one
    pub fn expect(self, message: &str) -> Result<T, Failure> {
        match self {
            Outcome::Value(value) => Ok(value),
            Outcome::Failure(failure) => Err(Failure::friendly_with_cause(message, failure)),
        }
    }

    /// Maps an Outcome<T> to Outcome<U>; the failure passes through untouched
    pub fn map_value<U, F>(self, op: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Value(value) => Outcome::Value(op(value)),
            Outcome::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Continue with `step` if a value is present.
    ///
    /// A failure short-circuits: `step` is not called and the failure comes
    /// back wrapped in a friendly failure carrying `absent_message`
    /// (default `"No value passed to method"`).
    pub fn bind<U, F>(self, step: F, absent_message: Option<&str>) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Outcome::Value(value) => step(value),
            Outcome::Failure(failure) => short_circuit(failure, absent_message),
        }
    }

    /// Run exactly one branch and return its result
    pub fn match_with<R, V, E>(self, on_value: V, on_failure: E) -> R
    where
        V: FnOnce(T) -> R,
        E: FnOnce(Failure) -> R,
    {
        match self {
            Outcome::Value(value) => on_value(value),
            Outcome::Failure(failure) => on_failure(failure),
        }
    }

    /// Like [`match_with`](Self::match_with), wrapping the branch result in a value-bearing outcome
    pub fn match_to_result<R, V, E>(self, on_value: V, on_failure: E) -> Outcome<R>
    where
        V: FnOnce(T) -> R,
        E: FnOnce(Failure) -> R,
    {
        Outcome::Value(self.match_with(on_value, on_failure))
    }

    /// Re-express the failure as an erased, failure-only outcome
    pub fn to_error_result(self) -> Result<ErasedOutcome, AccessError> {
        match self {
            Outcome::Value(_) => Err(AccessError::FailureAbsent),
            Outcome::Failure(failure) => Ok(Outcome::Failure(failure)),
        }
    }

    pub fn into_result(self) -> Result<T, Failure> {
        match self {
            Outcome::Value(value) => Ok(value),
            Outcome::Failure(failure) => Err(failure),
        }
    }
}

impl<T> From<Failure> for Outcome<T> {
    fn from(failure: Failure) -> Self {
        Outcome::Failure(failure)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<Failure>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Value(value),
            Err(error) => Outcome::Failure(error.into()),
        }
    }
}

pub(crate) fn short_circuit<U>(failure: Failure, absent_message: Option<&str>) -> Outcome<U> {
    let message = absent_message.unwrap_or(NO_VALUE_PASSED);
    debug!(cause = %failure, context = message, "bind short-circuited on failure");
    Outcome::Failure(Failure::friendly_with_cause(message, failure))
}

/// An outcome holding `value`
pub fn result_value<T>(value: T) -> Outcome<T> {
    Outcome::Value(value)
}

/// An outcome holding `failure`
pub fn result_error<T>(failure: impl Into<Failure>) -> Outcome<T> {
    Outcome::Failure(failure.into())
}

/// An outcome holding a friendly failure built from `message`
pub fn result_error_msg<T>(message: impl Into<String>) -> Outcome<T> {
    Outcome::Failure(Failure::friendly(message))
}

/// An outcome holding a friendly failure layered on `cause`
pub fn result_error_with_cause<T>(message: impl Into<String>, cause: impl Into<Failure>) -> Outcome<T> {
    Outcome::Failure(Failure::friendly_with_cause(message, cause))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::FriendlyFailure;

    #[test]
    fn test_outcome_value() {
        let res = result_value(42);
        assert!(res.has_value());
        assert!(!res.has_failure());
    }

    #[test]
    fn test_outcome_failure() {
        let res: Outcome<i32> = result_error_msg("error");
        assert!(!res.has_value());
        assert!(res.has_failure_of_kind::<FriendlyFailure>());
    }

    #[test]
    fn test_match_to_result_always_value() {
        let res: Outcome<i32> = result_error_msg("error");
        let matched = res.match_to_result(|v| v, |_| -1);
        assert_eq!(matched.unwrap(), Ok(-1));
    }

    #[test]
    fn test_to_error_result_on_value() {
        let res = result_value(1);
        assert_eq!(res.to_error_result().unwrap_err(), AccessError::FailureAbsent);
    }

    #[test]
    fn test_from_std_result() {
        let res: Outcome<u8> = "300".parse::<u8>().into();
        assert!(res.has_failure_of_kind::<std::num::ParseIntError>());
    }
}
