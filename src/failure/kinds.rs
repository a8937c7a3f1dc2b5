//! # Failure Kinds
//!
//! The failure object carried by an [`Outcome`](crate::Outcome) and the
//! authored kinds that make up a failure chain.
//!
//! ## Kinds
//! - [`FriendlyFailure`]: a message meant for people, plus an optional inner cause
//! - [`OpaqueFailure`]: a wrapper whose message carries no display guarantee
//! - anything else: a *foreign* error, usually the real root cause
//!
//! [`AccessError`] covers misuse of the containers themselves.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Thread-safe error object stored behind a [`Failure`]
pub type DynError = dyn Error + Send + Sync + 'static;

/// A shared, immutable handle to any error value.
///
/// Cloning is cheap: clones point at the same underlying error, which is how a
/// failure is "passed through unchanged" by the composition operators. The
/// runtime kind is recovered with [`Failure::downcast_ref`].
#[derive(Clone)]
pub struct Failure {
    error: Arc<DynError>,
}

impl Failure {
    /// Wrap any error value
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Failure {
            error: Arc::new(error),
        }
    }

    /// A [`FriendlyFailure`] with no inner cause
    pub fn friendly(message: impl Into<String>) -> Self {
        Failure::new(FriendlyFailure::new(message))
    }

    /// A [`FriendlyFailure`] layered on top of `cause`
    pub fn friendly_with_cause(message: impl Into<String>, cause: impl Into<Failure>) -> Self {
        Failure::new(FriendlyFailure::with_cause(message, cause))
    }

    /// An [`OpaqueFailure`] layered on top of `cause`
    pub fn opaque(message: impl Into<String>, cause: impl Into<Failure>) -> Self {
        Failure::new(OpaqueFailure::with_cause(message, cause))
    }

    /// The outermost message of the chain
    pub fn message(&self) -> String {
        self.error.to_string()
    }

    /// Borrow the underlying error
    pub fn as_error(&self) -> &(dyn Error + 'static) {
        &*self.error
    }

    /// Returns the failure as `K` if that is its runtime kind
    pub fn downcast_ref<K>(&self) -> Option<&K>
    where
        K: Error + 'static,
    {
        self.error.downcast_ref::<K>()
    }

    /// Returns true if the runtime kind is `K`
    pub fn is<K>(&self) -> bool
    where
        K: Error + 'static,
    {
        self.error.is::<K>()
    }

    /// Returns true for the chain-authored wrapper kinds
    pub fn is_wrapper(&self) -> bool {
        self.is::<FriendlyFailure>() || self.is::<OpaqueFailure>()
    }

    /// The inner cause of a wrapper kind.
    ///
    /// Foreign errors always return `None` here; their own links are only
    /// reachable through [`Error::source`].
    pub fn wrapped_cause(&self) -> Option<&Failure> {
        if let Some(friendly) = self.downcast_ref::<FriendlyFailure>() {
            return friendly.inner();
        }
        if let Some(opaque) = self.downcast_ref::<OpaqueFailure>() {
            return opaque.inner();
        }
        None
    }

    /// Returns true if both handles point at the same error object
    pub fn ptr_eq(a: &Failure, b: &Failure) -> bool {
        Arc::ptr_eq(&a.error, &b.error)
    }
}

impl<E> From<E> for Failure
where
    E: Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Failure::new(error)
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.error, f)
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.error, f)
    }
}

/// A failure whose message is written for a human reader.
///
/// Layering friendly failures builds a breadcrumb trail; see
/// [`concatenated_friendly_message`](crate::failure::chain::concatenated_friendly_message).
#[derive(Debug, Clone)]
pub struct FriendlyFailure {
    message: String,
    inner: Option<Failure>,
}

impl FriendlyFailure {
    pub fn new(message: impl Into<String>) -> Self {
        FriendlyFailure::from_parts(message, None)
    }

    pub fn with_cause(message: impl Into<String>, cause: impl Into<Failure>) -> Self {
        FriendlyFailure::from_parts(message, Some(cause.into()))
    }

    pub(crate) fn from_parts(message: impl Into<String>, inner: Option<Failure>) -> Self {
        FriendlyFailure {
            message: message.into(),
            inner,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn inner(&self) -> Option<&Failure> {
        self.inner.as_ref()
    }
}

impl fmt::Display for FriendlyFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for FriendlyFailure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner.as_ref().map(Failure::as_error)
    }
}

/// A wrapper failure with no promise that its message is fit for display
#[derive(Debug, Clone)]
pub struct OpaqueFailure {
    message: String,
    inner: Option<Failure>,
}

impl OpaqueFailure {
    pub fn new(message: impl Into<String>) -> Self {
        OpaqueFailure::from_parts(message, None)
    }

    pub fn with_cause(message: impl Into<String>, cause: impl Into<Failure>) -> Self {
        OpaqueFailure::from_parts(message, Some(cause.into()))
    }

    pub(crate) fn from_parts(message: impl Into<String>, inner: Option<Failure>) -> Self {
        OpaqueFailure {
            message: message.into(),
            inner,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn inner(&self) -> Option<&Failure> {
        self.inner.as_ref()
    }
}

impl fmt::Display for OpaqueFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for OpaqueFailure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner.as_ref().map(Failure::as_error)
    }
}

/// Misuse of a container, or a missing value with no better failure to report
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    /// `unwrap` on a failure-bearing outcome
    #[error("unwrap failed because no value was present; check has_value before unwrapping")]
    ValueAbsent,

    /// `unwrap_failure` on a value-bearing outcome
    #[error("unwrap_failure failed because a value was present; check has_value before unwrapping the failure")]
    FailureAbsent,

    /// Generic failure raised for an absent optional
    #[error("{message}")]
    Missing { message: String },
}

impl AccessError {
    pub fn missing(message: impl Into<String>) -> Self {
        AccessError::Missing {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("disk on fire")]
    struct DiskError;

    #[test]
    fn test_failure_downcast() {
        let failure = Failure::new(DiskError);
        assert!(failure.is::<DiskError>());
        assert!(!failure.is_wrapper());
        assert!(failure.downcast_ref::<FriendlyFailure>().is_none());
        assert_eq!(failure.message(), "disk on fire");
    }

    #[test]
    fn test_friendly_source_exposes_inner_kind() {
        let friendly = FriendlyFailure::with_cause("could not save", DiskError);
        let source = friendly.source().expect("inner cause");
        assert!(source.is::<DiskError>());
    }

    #[test]
    fn test_wrapped_cause_only_for_wrappers() {
        let opaque = Failure::opaque("io", DiskError);
        assert!(opaque.is_wrapper());
        assert!(opaque.wrapped_cause().unwrap().is::<DiskError>());
        assert!(Failure::new(DiskError).wrapped_cause().is_none());
    }

    #[test]
    fn test_clone_shares_error() {
        let failure = Failure::friendly("x");
        let copy = failure.clone();
        assert!(Failure::ptr_eq(&failure, &copy));
    }

    #[test]
    fn test_access_error_messages() {
        assert_eq!(AccessError::missing("gone").to_string(), "gone");
        assert!(AccessError::ValueAbsent.to_string().starts_with("unwrap failed"));
    }
}
