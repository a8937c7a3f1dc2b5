//! Human-readable formatting for the containers
//!
//! ```text
//! Some('42')   None   Error('disk full')
//! ```

use std::fmt;

use crate::containers::optional::Optional;
use crate::containers::outcome::Outcome;

impl<T> fmt::Display for Optional<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(value) => write!(f, "Some('{}')", value),
            None => write!(f, "None"),
        }
    }
}

impl<T> fmt::Display for Outcome<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Value(value) => write!(f, "Some('{}')", value),
            Outcome::Failure(failure) => write!(f, "Error('{}')", failure),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::containers::{none, result_error_msg, result_value, some, Outcome};

    #[test]
    fn test_display_optional() {
        assert_eq!(some(42).to_string(), "Some('42')");
        assert_eq!(none::<i32>().to_string(), "None");
    }

    #[test]
    fn test_display_outcome() {
        assert_eq!(result_value("ok").to_string(), "Some('ok')");
        let failed: Outcome<i32> = result_error_msg("disk full");
        assert_eq!(failed.to_string(), "Error('disk full')");
    }
}
