//! # Wire Flattening
//!
//! [`RemoteOutcome<T>`] is a structurally flat record that can cross a
//! serialization boundary:
//!
//! ```text
//! { "hasValue": bool, "value": T, "errorMessage": string | null }
//! ```
//!
//! Flattening is lossy. Only the outermost failure message survives; the
//! failure kind, its inner causes and everything below them are gone, and
//! [`RemoteOutcome::to_outcome`] rebuilds a fresh
//! [`FriendlyFailure`](crate::failure::FriendlyFailure) from the
//! message alone. The full failure is handed to a logging hook right before
//! it is dropped.

use serde::de::DeserializeOwned;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

use crate::containers::optional::Optional;
use crate::containers::outcome::{result_error_msg, Outcome};
use crate::failure::{concatenated_friendly_message, find_root_cause, Failure};

/// Errors from the JSON codec
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("failed to encode remote outcome: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode remote outcome: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Serialization-safe projection of an [`Outcome<T>`]
///
/// Decoding requires `value` whenever `hasValue` is true; a failure record
/// may leave it out and gets `T::default()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteOutcome<T> {
    has_value: bool,
    value: T,
    error_message: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct RemoteRepr<T> {
    has_value: bool,
    #[serde(default, deserialize_with = "present")]
    value: Option<T>,
    error_message: Option<String>,
}

impl<'de, T> Deserialize<'de> for RemoteOutcome<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = RemoteRepr::<T>::deserialize(deserializer)?;
        match (repr.has_value, repr.value) {
            (true, Some(value)) => Ok(RemoteOutcome::new(true, value, repr.error_message)),
            (true, None) => Err(de::Error::missing_field("value")),
            (false, value) => Ok(RemoteOutcome::new(
                false,
                value.unwrap_or_default(),
                repr.error_message,
            )),
        }
    }
}

impl<T> RemoteOutcome<T> {
    pub fn new(has_value: bool, value: T, error_message: Option<String>) -> Self {
        RemoteOutcome {
            has_value,
            value,
            error_message,
        }
    }

    pub fn has_value(&self) -> bool {
        self.has_value
    }

    /// The value, only when the record says one is present
    pub fn value(&self) -> Option<&T> {
        self.has_value.then_some(&self.value)
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Rebuild an outcome.
    ///
    /// A failure record becomes a new friendly failure carrying only the
    /// flattened message; the original failure cannot be recovered.
    pub fn to_outcome(self) -> Outcome<T> {
        if self.has_value {
            Outcome::Value(self.value)
        } else {
            result_error_msg(self.error_message.unwrap_or_default())
        }
    }
}

impl<T> RemoteOutcome<T>
where
    T: Serialize,
{
    pub fn to_json(&self) -> Result<String, WireError> {
        serde_json::to_string(self).map_err(WireError::Encode)
    }
}

impl<T> RemoteOutcome<T>
where
    T: DeserializeOwned + Default,
{
    pub fn from_json(json: &str) -> Result<Self, WireError> {
        serde_json::from_str(json).map_err(WireError::Decode)
    }
}

impl RemoteOutcome<()> {
    /// Retarget a failure-only record at any value type
    pub fn cast<U>(self) -> RemoteOutcome<U>
    where
        U: Default,
    {
        RemoteOutcome::new(false, U::default(), self.error_message)
    }
}

impl<T> Outcome<T>
where
    T: Default,
{
    /// Flatten for the wire, logging a failure with `tracing` before its
    /// message is projected out
    pub fn to_remote(self) -> RemoteOutcome<T> {
        self.to_remote_with(|failure| {
            warn!(
                error = %failure,
                trail = %concatenated_friendly_message(failure),
                root_cause = ?find_root_cause(failure),
                "flattening failed outcome; causal chain does not cross the wire"
            );
        })
    }

    /// Flatten for the wire, handing a failure to `log_failure` first
    pub fn to_remote_with<H>(self, log_failure: H) -> RemoteOutcome<T>
    where
        H: FnOnce(&Failure),
    {
        match self {
            Outcome::Value(value) => RemoteOutcome::new(true, value, None),
            Outcome::Failure(failure) => {
                log_failure(&failure);
                RemoteOutcome::new(false, T::default(), Some(failure.message()))
            }
        }
    }
}

pub fn remote_value<T>(value: T) -> RemoteOutcome<T> {
    RemoteOutcome::new(true, value, None)
}

/// A failure-only record with no value type; see [`RemoteOutcome::cast`]
pub fn remote_error(message: impl Into<String>) -> RemoteOutcome<()> {
    RemoteOutcome::new(false, (), Some(message.into()))
}

pub fn some_remote_value<T>(value: T) -> RemoteOutcome<Optional<T>> {
    RemoteOutcome::new(true, Optional::Some(value), None)
}

pub fn none_remote_value<T>() -> RemoteOutcome<Optional<T>> {
    RemoteOutcome::new(true, Optional::None, None)
}

// Optional travels as `{ "hasValue": bool, "value"?: T }` so a present value
// that serializes as null is not mistaken for absence.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OptionalRef<'a, T> {
    has_value: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<&'a T>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct OptionalRepr<T> {
    has_value: bool,
    #[serde(default, deserialize_with = "present")]
    value: Option<T>,
}

// A field that is there at all is a value, even when it reads as null.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl<T> Serialize for Optional<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        OptionalRef {
            has_value: self.has_value(),
            value: self.value(),
        }
        .serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Optional<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = OptionalRepr::<T>::deserialize(deserializer)?;
        match (repr.has_value, repr.value) {
            (true, Some(value)) => Ok(Optional::Some(value)),
            (true, None) => Err(de::Error::missing_field("value")),
            (false, _) => Ok(Optional::None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_hidden_on_failure_record() {
        let record = remote_error("nope").cast::<i32>();
        assert!(!record.has_value());
        assert_eq!(record.value(), None);
        assert_eq!(record.error_message(), Some("nope"));
    }

    #[test]
    fn test_hook_sees_full_failure() {
        let inner = Failure::friendly("inner");
        let outcome: Outcome<i32> = Outcome::Failure(Failure::friendly_with_cause("outer", inner));
        let mut seen = String::new();
        let record = outcome.to_remote_with(|failure| seen = concatenated_friendly_message(failure));
        assert_eq!(seen, "'outer' -> 'inner'");
        assert_eq!(record.error_message(), Some("outer"));
    }

    #[test]
    fn test_optional_serializes_with_presence_flag() {
        assert_eq!(
            serde_json::to_string(&Optional::Some(3)).unwrap(),
            r#"{"hasValue":true,"value":3}"#
        );
        assert_eq!(
            serde_json::to_string(&Optional::<i32>::None).unwrap(),
            r#"{"hasValue":false}"#
        );
    }

    #[test]
    fn test_optional_present_without_value_is_rejected() {
        assert!(serde_json::from_str::<Optional<i32>>(r#"{"hasValue":true}"#).is_err());
    }
}
