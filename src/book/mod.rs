//! The address book: a name-keyed collection owning all records.

use crate::domain::ContactName;
use crate::models::Record;
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name-keyed collection of [`Record`]s.
///
/// Owns every record exclusively; records have no identity outside the
/// book except transiently during construction. Keys are unique, and a
/// `BTreeMap` keeps iteration (and therefore listing and query output) in
/// deterministic name order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressBook {
    records: BTreeMap<ContactName, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name. Last write wins: an existing entry
    /// under the same name is replaced, never duplicated.
    pub fn add_record(&mut self, record: Record) {
        self.records.insert(record.name().clone(), record);
    }

    /// Find a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Find a record by name for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove and return the record under `name`. Absent name is a no-op.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.records.remove(name)
    }

    /// Iterate records in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose birthday, projected onto `reference`'s year, falls in
    /// the closed interval `[reference, reference + window_days]`.
    ///
    /// The projection stays in the reference year: a birthday already past
    /// in that year is never rolled forward into the next one, so it simply
    /// does not appear. A Feb 29 birthday projects to Mar 1 in non-leap
    /// years (see [`crate::domain::Birthday::in_year`]). Results come back
    /// in name order.
    ///
    /// A window too large for the calendar clamps to the last representable
    /// date, so every projection from `reference` onward qualifies.
    pub fn upcoming_birthdays(&self, window_days: u64, reference: NaiveDate) -> Vec<&Record> {
        let window_end = reference
            .checked_add_days(Days::new(window_days))
            .unwrap_or(NaiveDate::MAX);
        self.records
            .values()
            .filter(|record| {
                record
                    .birthday()
                    .map(|b| {
                        let projected = b.in_year(reference.year());
                        reference <= projected && projected <= window_end
                    })
                    .unwrap_or(false)
            })
            .collect()
    }
}
