//! Continuations over a pending `Outcome<T>`

use std::future::Future;

use crate::containers::outcome::{short_circuit, Outcome};
use crate::failure::{AccessError, Failure};
use crate::wire::RemoteOutcome;

/// Await `pending`, then continue with `step` if it holds a value.
///
/// On a failure `step` is never called; the failure comes back wrapped under
/// `absent_message` (default `"No value passed to method"`).
pub async fn bind<T, U, P, S, Fut>(pending: P, step: S, absent_message: Option<&str>) -> Outcome<U>
where
    P: Future<Output = Outcome<T>>,
    S: FnOnce(T) -> Fut,
    Fut: Future<Output = Outcome<U>>,
{
    match pending.await {
        Outcome::Value(value) => step(value).await,
        Outcome::Failure(failure) => short_circuit(failure, absent_message),
    }
}

/// [`bind`] over a pending wire record, converted back to an outcome first
pub async fn bind_remote<T, U, P, S, Fut>(pending: P, step: S, absent_message: Option<&str>) -> Outcome<U>
where
    P: Future<Output = RemoteOutcome<T>>,
    S: FnOnce(T) -> Fut,
    Fut: Future<Output = Outcome<U>>,
{
    bind(to_outcome(pending), step, absent_message).await
}

/// Await a pending wire record and convert it back to an outcome
pub async fn to_outcome<T, P>(pending: P) -> Outcome<T>
where
    P: Future<Output = RemoteOutcome<T>>,
{
    pending.await.to_outcome()
}

pub async fn map_value<T, U, P, F>(pending: P, op: F) -> Outcome<U>
where
    P: Future<Output = Outcome<T>>,
    F: FnOnce(T) -> U,
{
    pending.await.map_value(op)
}

/// Map with a step that itself yields a pending outcome.
///
/// Unlike [`bind`], a failure passes through unchanged.
pub async fn map_value_async<T, U, P, F, Fut>(pending: P, op: F) -> Outcome<U>
where
    P: Future<Output = Outcome<T>>,
    F: FnOnce(T) -> Fut,
    Fut: Future<Output = Outcome<U>>,
{
    match pending.await {
        Outcome::Value(value) => op(value).await,
        Outcome::Failure(failure) => Outcome::Failure(failure),
    }
}

pub async fn match_with<T, R, P, V, E>(pending: P, on_value: V, on_failure: E) -> R
where
    P: Future<Output = Outcome<T>>,
    V: FnOnce(T) -> R,
    E: FnOnce(Failure) -> R,
{
    pending.await.match_with(on_value, on_failure)
}

pub async fn match_async<T, R, P, V, VF, E, EF>(pending: P, on_value: V, on_failure: E) -> R
where
    P: Future<Output = Outcome<T>>,
    V: FnOnce(T) -> VF,
    VF: Future<Output = R>,
    E: FnOnce(Failure) -> EF,
    EF: Future<Output = R>,
{
    match pending.await {
        Outcome::Value(value) => on_value(value).await,
        Outcome::Failure(failure) => on_failure(failure).await,
    }
}

pub async fn expect<T, P>(pending: P, message: &str) -> Result<T, Failure>
where
    P: Future<Output = Outcome<T>>,
{
    pending.await.expect(message)
}

pub async fn unwrap<T, P>(pending: P) -> Result<T, AccessError>
where
    P: Future<Output = Outcome<T>>,
{
    pending.await.unwrap()
}
