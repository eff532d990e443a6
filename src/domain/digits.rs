//! PhoneDigits value object.

use crate::mask;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for the digits-only form of a phone field value.
///
/// Construction strips formatting, so the wrapper always holds ASCII
/// digits and nothing else. Any raw input is accepted; there is no
/// invalid phone here, only shorter or longer digit strings.
///
/// # Example
///
/// ```
/// use phone_mask::domain::PhoneDigits;
///
/// let digits = PhoneDigits::from_raw("(11) 98765-4321");
/// assert_eq!(digits.as_str(), "11987654321");
/// assert_eq!(digits.masked(), "(11) 98765-4321");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PhoneDigits(String);

impl PhoneDigits {
    /// Create a PhoneDigits by stripping every non-digit from `raw`.
    pub fn from_raw(raw: impl AsRef<str>) -> Self {
        Self(mask::strip_non_digits(raw.as_ref()))
    }

    /// Get the digit string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Number of digits held.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no digits are held.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when the digit count fits the `(00) 00000-0000` mask.
    pub fn fits_mask(&self) -> bool {
        self.0.len() <= mask::MAX_DIGITS
    }

    /// Render the digits through the display mask.
    pub fn masked(&self) -> String {
        mask::format(&self.0)
    }
}

// Serde support - serialize as the bare digit string
impl Serialize for PhoneDigits {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from any string, stripping formatting
impl<'de> Deserialize<'de> for PhoneDigits {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(PhoneDigits::from_raw(s))
    }
}

// Display support - shows the masked rendering
impl fmt::Display for PhoneDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}
