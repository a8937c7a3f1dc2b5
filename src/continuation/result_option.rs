//! Continuations over a pending `Outcome<Optional<T>>`

use std::future::Future;

use crate::config::NO_VALUE_PASSED;
use crate::containers::optional::Optional;
use crate::containers::outcome::Outcome;
use crate::failure::Failure;
use crate::wire::RemoteOutcome;

pub async fn map_result_error_to_none<T, P>(pending: P) -> Optional<T>
where
    P: Future<Output = Outcome<Optional<T>>>,
{
    pending.await.map_result_error_to_none()
}

pub async fn map_none_to_result_error<T, P>(pending: P, message: &str) -> Outcome<T>
where
    P: Future<Output = Outcome<Optional<T>>>,
{
    pending.await.map_none_to_result_error(message)
}

pub async fn expect_option_value<T, P>(
    pending: P,
    result_message: &str,
    option_missing_message: Option<&str>,
) -> Result<T, Failure>
where
    P: Future<Output = Outcome<Optional<T>>>,
{
    pending
        .await
        .expect_option_value(result_message, option_missing_message)
}

pub async fn map_option<T, U, P, F>(pending: P, op: F) -> Outcome<Optional<U>>
where
    P: Future<Output = Outcome<Optional<T>>>,
    F: FnOnce(T) -> U,
{
    pending.await.map_option(op)
}

/// Await the lookup, then continue with `step` when it found a value.
///
/// A failure passes through unchanged; an empty lookup becomes a friendly
/// failure carrying `absent_message`.
pub async fn bind_option_result<T, U, P, S, Fut>(
    pending: P,
    step: S,
    absent_message: Option<&str>,
) -> Outcome<U>
where
    P: Future<Output = Outcome<Optional<T>>>,
    S: FnOnce(T) -> Fut,
    Fut: Future<Output = Outcome<U>>,
{
    match pending.await {
        Outcome::Value(Optional::Some(value)) => step(value).await,
        Outcome::Value(Optional::None) => {
            Outcome::Failure(Failure::friendly(absent_message.unwrap_or(NO_VALUE_PASSED)))
        }
        Outcome::Failure(failure) => Outcome::Failure(failure),
    }
}

/// [`bind_option_result`] over a pending wire record
pub async fn bind_remote_option_result<T, U, P, S, Fut>(
    pending: P,
    step: S,
    absent_message: Option<&str>,
) -> Outcome<U>
where
    P: Future<Output = RemoteOutcome<Optional<T>>>,
    S: FnOnce(T) -> Fut,
    Fut: Future<Output = Outcome<U>>,
{
    let outcome = pending.await.to_outcome();
    bind_option_result(std::future::ready(outcome), step, absent_message).await
}
