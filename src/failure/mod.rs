//! Failure objects and the utilities that walk their chains

pub mod chain;
pub mod kinds;

pub use chain::{
    chain_iter, compact_chain, concatenated_friendly_message, concatenated_friendly_message_with,
    find_root_cause, gather_friendly_failures, Chain,
};
pub use kinds::{AccessError, DynError, Failure, FriendlyFailure, OpaqueFailure};
