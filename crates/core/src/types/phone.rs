//! WhatsApp contact number handling.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A WhatsApp contact number as entered by the admin.
///
/// The raw value is stored verbatim (admins type numbers like
/// `+91 98765-43210`); [`WhatsAppNumber::digits`] strips everything that is
/// not a digit, which is the form the `wa.me` deep link requires.
///
/// ## Examples
///
/// ```
/// use rekhali_core::WhatsAppNumber;
///
/// let number = WhatsAppNumber::new("+91 98765-43210");
/// assert_eq!(number.digits(), "919876543210");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct WhatsAppNumber(String);

impl WhatsAppNumber {
    /// Wrap a raw phone number string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the raw value as entered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns only the digit characters, suitable for a `wa.me` link.
    #[must_use]
    pub fn digits(&self) -> String {
        self.0.chars().filter(char::is_ascii_digit).collect()
    }
}

impl fmt::Display for WhatsAppNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for WhatsAppNumber {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for WhatsAppNumber {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_strips_formatting() {
        let number = WhatsAppNumber::new("+91 98765-43210");
        assert_eq!(number.digits(), "919876543210");
    }

    #[test]
    fn test_digits_passthrough_for_clean_input() {
        let number = WhatsAppNumber::new("919876543210");
        assert_eq!(number.digits(), "919876543210");
    }

    #[test]
    fn test_digits_drops_parentheses_and_spaces() {
        let number = WhatsAppNumber::new("(+91) 98765 43210");
        assert_eq!(number.digits(), "919876543210");
    }

    #[test]
    fn test_raw_value_preserved() {
        let number = WhatsAppNumber::new("+91 98765-43210");
        assert_eq!(number.as_str(), "+91 98765-43210");
    }
}
