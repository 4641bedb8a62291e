//! Form state updates.
//!
//! The form holds exactly one [`EntryRecord`]. Every user edit goes through
//! [`EntryRecord::apply`], which returns a new record and leaves the current
//! one alone, so a rejected edit never leaves a half-updated form behind.

use crate::date_rule::{format_entry_date, normalize_date, normalize_date_input, parse_entry_date};
use crate::error::EntryResult;
use crate::record::{EntryRecord, Field};

/// A single field edit coming from an input widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Date(String),
    UnknownYear(bool),
    Title(String),
    Name(String),
    Occasion(String),
    Relationship(String),
    Group(String),
    Remarks(String),
}

impl FieldEdit {
    pub fn field(&self) -> Field {
        match self {
            FieldEdit::Date(_) => Field::Date,
            FieldEdit::UnknownYear(_) => Field::UnknownYear,
            FieldEdit::Title(_) => Field::Title,
            FieldEdit::Name(_) => Field::Name,
            FieldEdit::Occasion(_) => Field::Occasion,
            FieldEdit::Relationship(_) => Field::Relationship,
            FieldEdit::Group(_) => Field::Group,
            FieldEdit::Remarks(_) => Field::Remarks,
        }
    }
}

impl EntryRecord {
    /// Return a copy of the record with `edit` applied.
    ///
    /// Date and unknown-year edits run the date rule; the other fields are
    /// stored as typed, without validation.
    pub fn apply(&self, edit: FieldEdit) -> EntryResult<EntryRecord> {
        let mut next = self.clone();
        match edit {
            FieldEdit::Date(raw) => {
                next.date = normalize_date_input(&raw, self.unknown_year)?;
            }
            FieldEdit::UnknownYear(checked) => {
                // Both values change together; the year stays lost once overwritten.
                if let Some(date) = parse_entry_date(&self.date)? {
                    next.date = format_entry_date(normalize_date(date, checked));
                }
                next.unknown_year = checked;
            }
            FieldEdit::Title(value) => next.title = value,
            FieldEdit::Name(value) => next.name = value,
            FieldEdit::Occasion(value) => next.occasion = value,
            FieldEdit::Relationship(value) => next.relationship = value,
            FieldEdit::Group(value) => next.group = value,
            FieldEdit::Remarks(value) => next.remarks = value,
        }
        Ok(next)
    }
}
