//! Iterator and tuple helpers for optionals

use crate::config::VALUE_NOT_PRESENT_IN_OPTION;
use crate::containers::optional::Optional;
use crate::failure::Failure;

/// Iterator adapters over a sequence of optionals
pub trait OptionalIterExt<T>: Iterator<Item = Optional<T>> + Sized {
    /// Keep only the present values
    fn present_values(self) -> std::iter::FilterMap<Self, fn(Optional<T>) -> Option<T>> {
        self.filter_map(Optional::into_option as fn(Optional<T>) -> Option<T>)
    }
}

impl<T, I> OptionalIterExt<T> for I where I: Iterator<Item = Optional<T>> {}

/// First item of `source`, or an absent optional if it is empty
pub fn first_or_option<I>(source: I) -> Optional<I::Item>
where
    I: IntoIterator,
{
    source.into_iter().next().into()
}

/// First item of `source` accepted by `predicate`
pub fn first_or_option_by<I, P>(source: I, predicate: P) -> Optional<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    source.into_iter().find(predicate).into()
}

/// Unpack a tuple of optionals in one step
pub trait UnpackOptionals {
    type Values;

    /// All values, or the failure for the first absent one.
    ///
    /// `message` defaults to `"Value not present in Option"`.
    fn get_values_or_throw(self, message: Option<&str>) -> Result<Self::Values, Failure>;
}

macro_rules! impl_unpack_optionals {
    ($($name:ident: $ty:ident),+) => {
        impl<$($ty),+> UnpackOptionals for ($(Optional<$ty>,)+) {
            type Values = ($($ty,)+);

            fn get_values_or_throw(self, message: Option<&str>) -> Result<Self::Values, Failure> {
                let message = Some(message.unwrap_or(VALUE_NOT_PRESENT_IN_OPTION));
                let ($($name,)+) = self;
                Ok(($($name.get_value_or_throw_msg(message)?,)+))
            }
        }
    };
}

impl_unpack_optionals!(a: A, b: B);
impl_unpack_optionals!(a: A, b: B, c: C);
impl_unpack_optionals!(a: A, b: B, c: C, d: D);
impl_unpack_optionals!(a: A, b: B, c: C, d: D, e: E);
impl_unpack_optionals!(a: A, b: B, c: C, d: D, e: E, f: F);
impl_unpack_optionals!(a: A, b: B, c: C, d: D, e: E, f: F, g: G);
impl_unpack_optionals!(a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H);
impl_unpack_optionals!(a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H, i: I);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::{none, some};

    #[test]
    fn test_present_values() {
        let values: Vec<i32> = vec![some(1), none(), some(3)].into_iter().present_values().collect();
        assert_eq!(values, vec![1, 3]);
    }

    #[test]
    fn test_first_or_option_by() {
        assert_eq!(first_or_option_by(vec![1, 4, 6], |v| v % 2 == 0), some(4));
        assert_eq!(first_or_option(Vec::<i32>::new()), none());
    }

    #[test]
    fn test_unpack_pair() {
        assert_eq!((some(1), some("a")).get_values_or_throw(None).unwrap(), (1, "a"));
    }

    #[test]
    fn test_unpack_reports_default_message() {
        let err = (some(1), none::<u8>(), some(2)).get_values_or_throw(None).unwrap_err();
        assert_eq!(err.message(), VALUE_NOT_PRESENT_IN_OPTION);
    }
}
