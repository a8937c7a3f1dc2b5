//! # Type Erasure
//!
//! A failure does not need to know the success type of the container that
//! will eventually carry it. These conversions let an erased container be
//! built once and retargeted at any element type.
//!
//! All conversions are explicit method calls:
//! - `erase()`: typed to erased, never loses anything
//! - `try_unerase::<T>()`: erased to typed, hands the box back on a type mismatch
//! - `unerase::<T>()`: erased to typed, a mismatched value is replaced by `T::default()`
//! - `retarget_failure::<T>()` / `retarget_none::<T>()`: no bounds on `T`;
//!   only a failure-bearing or absent container converts, a value is handed back
//!
//! Failure-bearing and absent containers never touch the value slot, so every
//! conversion of those is lossless.

use std::any::Any;

use tracing::debug;

use crate::containers::optional::Optional;
use crate::containers::outcome::Outcome;
use crate::failure::Failure;

/// Element type of an erased container
pub type AnyValue = Box<dyn Any + Send>;

pub type ErasedOutcome = Outcome<AnyValue>;

pub type ErasedOptional = Optional<AnyValue>;

impl<T> Outcome<T>
where
    T: Any + Send,
{
    pub fn erase(self) -> ErasedOutcome {
        self.map_value(|value| Box::new(value) as AnyValue)
    }
}

impl Outcome<AnyValue> {
    /// Retarget at `T`, keeping the value only if it is a `T`
    pub fn try_unerase<T>(self) -> Result<Outcome<T>, AnyValue>
    where
        T: Any,
    {
        match self {
            Outcome::Value(boxed) => boxed.downcast::<T>().map(|value| Outcome::Value(*value)),
            Outcome::Failure(failure) => Ok(Outcome::Failure(failure)),
        }
    }

    /// Retarget a failure at any `T`; a value-bearing outcome hands its box back
    pub fn retarget_failure<T>(self) -> Result<Outcome<T>, AnyValue> {
        match self {
            Outcome::Value(boxed) => Err(boxed),
            Outcome::Failure(failure) => Ok(Outcome::Failure(failure)),
        }
    }

    /// Retarget at `T`; a value of another type is discarded for `T::default()`
    pub fn unerase<T>(self) -> Outcome<T>
    where
        T: Any + Default,
    {
        match self.try_unerase::<T>() {
            Ok(outcome) => outcome,
            Err(_) => {
                debug!(target_type = std::any::type_name::<T>(), "erased value discarded");
                Outcome::Value(T::default())
            }
        }
    }
}

impl<T> Optional<T>
where
    T: Any + Send,
{
    pub fn erase(self) -> ErasedOptional {
        self.map_value(|value| Box::new(value) as AnyValue)
    }
}

impl Optional<AnyValue> {
    /// Retarget at `T`, keeping the value only if it is a `T`
    pub fn try_unerase<T>(self) -> Result<Optional<T>, AnyValue>
    where
        T: Any,
    {
        match self {
            Optional::Some(boxed) => boxed.downcast::<T>().map(|value| Optional::Some(*value)),
            Optional::None => Ok(Optional::None),
        }
    }

    /// Retarget an absent optional at any `T`; a present one hands its box back
    pub fn retarget_none<T>(self) -> Result<Optional<T>, AnyValue> {
        match self {
            Optional::Some(boxed) => Err(boxed),
            Optional::None => Ok(Optional::None),
        }
    }

    /// Retarget at `T`; a value of another type is discarded for `T::default()`
    pub fn unerase<T>(self) -> Optional<T>
    where
        T: Any + Default,
    {
        match self.try_unerase::<T>() {
            Ok(optional) => optional,
            Err(_) => {
                debug!(target_type = std::any::type_name::<T>(), "erased value discarded");
                Optional::Some(T::default())
            }
        }
    }
}

/// An absent optional that can be retargeted at any element type
pub fn none_erased() -> ErasedOptional {
    Optional::None
}

/// A failure-only outcome that can be retargeted at any element type
pub fn erased_error(failure: impl Into<Failure>) -> ErasedOutcome {
    Outcome::Failure(failure.into())
}

/// Like [`erased_error`], with a friendly failure built from `message`
pub fn erased_error_msg(message: impl Into<String>) -> ErasedOutcome {
    Outcome::Failure(Failure::friendly(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_erase_then_unerase_keeps_value() {
        let typed = Outcome::Value(String::from("kept"));
        let back: Outcome<String> = typed.erase().unerase();
        assert_eq!(back.unwrap().unwrap(), "kept");
    }

    #[test]
    fn test_unerase_mismatch_defaults() {
        let erased = Outcome::Value(7u32).erase();
        let back: Outcome<String> = erased.unerase();
        assert_eq!(back.unwrap().unwrap(), "");
    }

    #[test]
    fn test_try_unerase_mismatch_returns_box() {
        let erased = Optional::Some(7u32).erase();
        let boxed = erased.try_unerase::<i64>().unwrap_err();
        assert_eq!(boxed.downcast_ref::<u32>(), Some(&7));
    }

    #[test]
    fn test_retarget_failure_without_default() {
        type Callback = Box<dyn Fn() -> u8>;

        let failure = Failure::friendly("no handler");
        let typed: Outcome<Callback> = erased_error(failure.clone()).retarget_failure().unwrap();
        assert!(Failure::ptr_eq(typed.failure().unwrap(), &failure));

        let absent: Optional<Callback> = none_erased().retarget_none().unwrap();
        assert!(absent.is_none());
    }

    #[test]
    fn test_retarget_failure_refuses_value() {
        let boxed = Outcome::Value(3u8).erase().retarget_failure::<String>().unwrap_err();
        assert_eq!(boxed.downcast_ref::<u8>(), Some(&3));

        let boxed = Optional::Some(4u8).erase().retarget_none::<String>().unwrap_err();
        assert_eq!(boxed.downcast_ref::<u8>(), Some(&4));
    }
}
