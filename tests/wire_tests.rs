//! Integration tests for the wire-flattening adapter

use faultline::{
    none_remote_value, remote_error, result_error_with_cause, result_value, some, Failure,
    FriendlyFailure, Optional, Outcome, RemoteOutcome, WireError,
};

#[derive(Debug, thiserror::Error)]
#[error("quota exceeded")]
struct QuotaExceeded;

#[test]
fn test_value_round_trip() {
    let record = result_value(42u32).to_remote();
    assert!(record.has_value());
    assert_eq!(record.error_message(), None);

    let back = record.to_outcome();
    assert_eq!(back.unwrap(), Ok(42));
}

#[test]
fn test_failure_round_trip_is_lossy() {
    let original = Failure::new(QuotaExceeded);
    let outcome: Outcome<u32> = result_error_with_cause("X", original.clone());

    let record = outcome.to_remote();
    assert!(!record.has_value());
    assert_eq!(record.value(), None);
    assert_eq!(record.error_message(), Some("X"));

    let back = record.to_outcome();
    let failure = back.failure().unwrap();
    assert_eq!(failure.message(), "X");
    assert!(failure.is::<FriendlyFailure>());
    assert!(failure.wrapped_cause().is_none());
}

#[test]
fn test_foreign_failure_message_is_flattened() {
    let outcome: Outcome<String> = Failure::new(QuotaExceeded).into();
    let back = outcome.to_remote().to_outcome();
    assert_eq!(back.failure().unwrap().message(), "quota exceeded");
    assert!(!back.has_failure_of_kind::<QuotaExceeded>());
}

#[test]
fn test_custom_logging_hook() {
    let mut logged = Vec::new();
    let outcome: Outcome<u8> = Failure::new(QuotaExceeded).into();
    outcome.to_remote_with(|failure| logged.push(failure.message()));
    assert_eq!(logged, vec!["quota exceeded".to_string()]);
}

#[test]
fn test_untyped_error_record_casts() {
    let record: RemoteOutcome<Vec<String>> = remote_error("not allowed").cast();
    assert!(!record.has_value());
    assert_eq!(record.error_message(), Some("not allowed"));
    assert_eq!(record.to_outcome().failure().unwrap().message(), "not allowed");
}

#[test]
fn test_json_field_names() {
    let json = result_value(7i32).to_remote().to_json().unwrap();
    assert_eq!(json, r#"{"hasValue":true,"value":7,"errorMessage":null}"#);
}

#[test]
fn test_json_decode_failure_record_without_value() {
    let record = RemoteOutcome::<i32>::from_json(r#"{"hasValue":false,"errorMessage":"gone"}"#).unwrap();
    assert_eq!(record.to_outcome().failure().unwrap().message(), "gone");
}

#[test]
fn test_json_optional_value() {
    let json = faultline::some_remote_value(3u8).to_json().unwrap();
    let back = RemoteOutcome::<Optional<u8>>::from_json(&json).unwrap();
    assert_eq!(back.to_outcome().unwrap(), Ok(some(3)));

    let json = none_remote_value::<u8>().to_json().unwrap();
    let back = RemoteOutcome::<Optional<u8>>::from_json(&json).unwrap();
    assert_eq!(back.value(), Some(&Optional::None));
}

#[test]
fn test_json_unit_optional_survives_round_trip() {
    let json = faultline::some_remote_value(()).to_json().unwrap();
    let back = RemoteOutcome::<Optional<()>>::from_json(&json).unwrap();
    assert_eq!(back.to_outcome().unwrap(), Ok(some(())));

    let json = none_remote_value::<()>().to_json().unwrap();
    let back = RemoteOutcome::<Optional<()>>::from_json(&json).unwrap();
    assert_eq!(back.to_outcome().unwrap(), Ok(Optional::None));
}

#[test]
fn test_json_nested_option_survives_round_trip() {
    let json = faultline::some_remote_value(Option::<u8>::None).to_json().unwrap();
    let back = RemoteOutcome::<Optional<Option<u8>>>::from_json(&json).unwrap();
    assert_eq!(back.value(), Some(&some(None)));
}

#[test]
fn test_json_value_record_without_value_is_rejected() {
    let err = RemoteOutcome::<i32>::from_json(r#"{"hasValue":true,"errorMessage":null}"#).unwrap_err();
    assert!(matches!(err, WireError::Decode(_)));
}

#[test]
fn test_json_decode_error() {
    let err = RemoteOutcome::<i32>::from_json("{not json").unwrap_err();
    assert!(matches!(err, WireError::Decode(_)));
}
