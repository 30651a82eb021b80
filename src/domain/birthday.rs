//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The textual birthday pattern, e.g. `15.06.1990`.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A type-safe wrapper for birthdays.
///
/// The raw input must be a real calendar date in the `DD.MM.YYYY` pattern
/// (e.g. `31.02.2020` is rejected). The value is stored as a date, not a
/// string, so it can be projected onto other years for the upcoming-birthday
/// query.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("15.06.1990").unwrap();
/// assert_eq!(birthday.to_string(), "15.06.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a Birthday from its `DD.MM.YYYY` textual form.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the input does not match
    /// the pattern or does not name a real calendar date.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        NaiveDate::parse_from_str(&raw, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate(raw))
    }

    /// Get the underlying date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Project this birthday's month/day onto the given year.
    ///
    /// A Feb 29 birthday has no exact equivalent in a non-leap year; it
    /// projects to Mar 1 so the contact still gets one occurrence per year.
    pub fn in_year(&self, year: i32) -> NaiveDate {
        use chrono::Datelike;
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day()).unwrap_or_else(|| {
            // Only Feb 29 can fail here.
            NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 exists in every year")
        })
    }
}

// Serde support - serialize in the DD.MM.YYYY textual form
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from the textual form with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
