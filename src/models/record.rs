//! Record model representing one contact in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: immutable name, ordered phone list, optional birthday.
///
/// The name is fixed at construction (it doubles as the address book key);
/// phones and birthday are mutated through the validated operations below.
/// Raw strings never reach the stored fields without passing the domain
/// validators first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    name: ContactName,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with the given name, no phones, and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// The phones in insertion order. Duplicates are allowed.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    ///
    /// On failure the phone list is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `raw` is not exactly
    /// 10 digits.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `value`. Absent value is a no-op.
    pub fn remove_phone(&mut self, value: &str) {
        if let Some(pos) = self.phones.iter().position(|p| p.as_str() == value) {
            self.phones.remove(pos);
        }
    }

    /// Replace the first phone equal to `old` with a validated `new` phone.
    ///
    /// The replacement is validated before the old phone is touched, so an
    /// invalid `new` leaves the list exactly as it was. If `old` is not
    /// present this is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `new` is not exactly
    /// 10 digits.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ValidationError> {
        let Some(pos) = self.phones.iter().position(|p| p.as_str() == old) else {
            return Ok(());
        };
        let replacement = PhoneNumber::new(new)?;
        self.phones.remove(pos);
        self.phones.push(replacement);
        Ok(())
    }

    /// Find the first phone equal to `value`.
    pub fn find_phone(&self, value: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Validate and set the birthday, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if `raw` is not a real
    /// calendar date in `DD.MM.YYYY`.
    pub fn add_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.set_birthday(Birthday::new(raw)?);
        Ok(())
    }

    /// Set an already-validated birthday, overwriting any previous value.
    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        let birthday = match &self.birthday {
            Some(b) => b.to_string(),
            None => "N/A".to_string(),
        };
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name, phones, birthday
        )
    }
}
