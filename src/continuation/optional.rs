//! Continuations over a pending `Optional<T>`

use std::future::Future;

use crate::config::NO_VALUE_IN_OPTION;
use crate::containers::optional::Optional;
use crate::containers::outcome::Outcome;
use crate::failure::{AccessError, Failure};

pub async fn value_or<T, P>(pending: P, value_if_none: T) -> T
where
    P: Future<Output = Optional<T>>,
{
    pending.await.value_or(value_if_none)
}

/// Await the optional and take its value, or fail with `message`
pub async fn expect<T, P>(pending: P, message: &str) -> Result<T, Failure>
where
    P: Future<Output = Optional<T>>,
{
    pending.await.get_value_or_throw(AccessError::missing(message))
}

pub async fn expect_or<T, P>(pending: P, failure: impl Into<Failure>) -> Result<T, Failure>
where
    P: Future<Output = Optional<T>>,
{
    pending.await.get_value_or_throw(failure)
}

pub async fn match_with<T, R, P, V, N>(pending: P, on_value: V, on_none: N) -> R
where
    P: Future<Output = Optional<T>>,
    V: FnOnce(T) -> R,
    N: FnOnce() -> R,
{
    pending.await.match_with(on_value, on_none)
}

pub async fn map_value<T, U, P, F>(pending: P, op: F) -> Optional<U>
where
    P: Future<Output = Optional<T>>,
    F: FnOnce(T) -> U,
{
    pending.await.map_value(op)
}

/// Await the optional, then continue with `step` if a value is present.
///
/// An absent value becomes a friendly failure carrying `absent_message`
/// (default `"No value present in option"`).
pub async fn bind_option<T, U, P, S, Fut>(pending: P, step: S, absent_message: Option<&str>) -> Outcome<U>
where
    P: Future<Output = Optional<T>>,
    S: FnOnce(T) -> Fut,
    Fut: Future<Output = Outcome<U>>,
{
    match pending.await {
        Optional::Some(value) => step(value).await,
        Optional::None => Outcome::Failure(Failure::friendly(
            absent_message.unwrap_or(NO_VALUE_IN_OPTION),
        )),
    }
}
