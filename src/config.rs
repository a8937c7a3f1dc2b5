//! Default messages and friendly-trail formatting

/// Default message for `get_value_or_throw_msg` on an absent optional
pub const VALUE_NOT_PRESENT: &str = "Value not present";

/// Default message when unpacking several optionals at once
pub const VALUE_NOT_PRESENT_IN_OPTION: &str = "Value not present in Option";

/// Default context attached when `bind` short-circuits on a failure
pub const NO_VALUE_PASSED: &str = "No value passed to method";

/// Default context attached when `bind_option` short-circuits on an absent value
pub const NO_VALUE_IN_OPTION: &str = "No value present in option";

/// How a chain of friendly messages is rendered into one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailFormat {
    /// Placed before and after every message
    pub quote: String,
    /// Placed between consecutive messages
    pub separator: String,
}

impl TrailFormat {
    /// Create the default format: `'outer' -> 'inner'`
    pub fn new() -> Self {
        TrailFormat {
            quote: "'".to_string(),
            separator: " -> ".to_string(),
        }
    }

    /// Set the quote string
    pub fn with_quote(mut self, quote: impl Into<String>) -> Self {
        self.quote = quote.into();
        self
    }

    /// Set the separator string
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Join messages in the order given
    pub fn render<'a, I>(&self, messages: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        messages
            .into_iter()
            .map(|message| format!("{}{}{}", self.quote, message, self.quote))
            .collect::<Vec<_>>()
            .join(&self.separator)
    }
}

impl Default for TrailFormat {
    fn default() -> Self {
        Self::new()
    }
}
