//! # faultline - Optional and Outcome Containers
//!
//! An algebraic substitute for null references and thrown errors.
//!
//! ## Layout
//!
//! ```text
//! failure       Failure handle, FriendlyFailure / OpaqueFailure, chain walking
//!     ↓
//! containers    Optional<T>, Outcome<T>, erased forms, Outcome<Optional<T>>
//!     ↓
//! continuation  the same operators over pending (async) containers
//!     ↓
//! wire          RemoteOutcome<T>, the flat record that crosses a boundary
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use faultline::{result_error_msg, result_value, Outcome};
//! use faultline::failure::concatenated_friendly_message;
//!
//! fn parse_port(raw: &str) -> Outcome<u16> {
//!     raw.parse::<u16>().into()
//! }
//!
//! let port = parse_port("80a").bind(|p| result_value(p + 1), Some("could not read port"));
//! if let Some(failure) = port.failure() {
//!     eprintln!("{}", concatenated_friendly_message(failure));
//! }
//! ```

// Core
pub mod failure;
pub mod containers;

// Composition
pub mod continuation;
pub mod collections;

// Boundaries & Presentation
pub mod wire;
pub mod display;

// Configuration
pub mod config;

pub use config::TrailFormat;
pub use containers::{
    erased_error, erased_error_msg, none, none_erased, none_result, result_error, result_error_msg,
    result_error_with_cause, result_value, some, some_if, some_not_default, some_not_null,
    some_result, some_result_if, some_result_not_default, some_result_not_null, AnyValue,
    ErasedOptional, ErasedOutcome, Optional, Outcome,
};
pub use failure::{AccessError, Failure, FriendlyFailure, OpaqueFailure};
pub use collections::{first_or_option, first_or_option_by, OptionalIterExt, UnpackOptionals};
pub use wire::{none_remote_value, remote_error, remote_value, some_remote_value, RemoteOutcome, WireError};
