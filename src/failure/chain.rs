//! # Failure Chains
//!
//! Pure functions over the inner-cause links of a [`Failure`].
//!
//! Wrapper kinds ([`FriendlyFailure`], [`OpaqueFailure`]) link through their
//! `inner` field. Foreign errors link through [`Error::source`], so a friendly
//! failure buried under a foreign error is still found by
//! [`gather_friendly_failures`].

use std::error::Error;

use crate::config::TrailFormat;
use crate::failure::kinds::{Failure, FriendlyFailure, OpaqueFailure};

/// Iterator over every link of a chain, outermost first
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

/// Walk every link of the chain, starting with `failure` itself
pub fn chain_iter(failure: &Failure) -> Chain<'_> {
    Chain {
        next: Some(failure.as_error()),
    }
}

/// Find the first failure in the chain that is not a wrapper kind.
///
/// Returns `failure` itself when it is foreign, and `None` when the chain ends
/// without ever leaving the wrapper kinds.
pub fn find_root_cause(failure: &Failure) -> Option<Failure> {
    let mut current = failure;
    loop {
        if !current.is_wrapper() {
            return Some(current.clone());
        }
        current = current.wrapped_cause()?;
    }
}

/// Collect every friendly failure in the chain, outer to inner
pub fn gather_friendly_failures(failure: &Failure) -> Vec<&FriendlyFailure> {
    chain_iter(failure)
        .filter_map(|link| link.downcast_ref::<FriendlyFailure>())
        .collect()
}

/// Join the friendly messages of the chain as `'A' -> 'B'`.
///
/// Returns an empty string when the chain carries no friendly failure.
pub fn concatenated_friendly_message(failure: &Failure) -> String {
    concatenated_friendly_message_with(failure, &TrailFormat::default())
}

pub fn concatenated_friendly_message_with(failure: &Failure, format: &TrailFormat) -> String {
    format.render(
        gather_friendly_failures(failure)
            .into_iter()
            .map(FriendlyFailure::message),
    )
}

/// Collapse the run of wrappers under a wrapper down to its root cause.
///
/// The outer wrapper keeps its kind and message. Foreign failures and
/// failures without an inner cause come back unchanged.
pub fn compact_chain(failure: &Failure) -> Failure {
    let Some(inner) = failure.wrapped_cause() else {
        return failure.clone();
    };
    let root = find_root_cause(inner);

    if let Some(friendly) = failure.downcast_ref::<FriendlyFailure>() {
        return Failure::new(FriendlyFailure::from_parts(friendly.message(), root));
    }
    if let Some(opaque) = failure.downcast_ref::<OpaqueFailure>() {
        return Failure::new(OpaqueFailure::from_parts(opaque.message(), root));
    }
    failure.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("connection reset")]
    struct ResetError;

    #[test]
    fn test_root_cause_of_foreign_is_itself() {
        let failure = Failure::new(ResetError);
        let root = find_root_cause(&failure).unwrap();
        assert!(Failure::ptr_eq(&root, &failure));
    }

    #[test]
    fn test_chain_iter_counts_links() {
        let failure = Failure::friendly_with_cause("A", Failure::opaque("B", ResetError));
        assert_eq!(chain_iter(&failure).count(), 3);
    }

    #[test]
    fn test_compact_leaves_terminal_alone() {
        let failure = Failure::friendly("alone");
        assert!(Failure::ptr_eq(&compact_chain(&failure), &failure));
    }
}
