use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::error::{EntryError, EntryResult};
use crate::reference::{ReferenceKind, ReferenceLists};

/// One calendar-event entry as it is edited and submitted.
///
/// Field order matches the JSON body the endpoint expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EntryRecord {
    /// `YYYY-MM-DD`, or empty before the user picks a date
    #[validate(length(min = 1))]
    pub date: String,
    pub unknown_year: bool,
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub occasion: String,
    #[validate(length(min = 1))]
    pub relationship: String,
    pub remarks: String,
    #[validate(length(min = 1))]
    pub group: String,
}

/// Fields of an [`EntryRecord`], in the order the form shows them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Date,
    UnknownYear,
    Title,
    Name,
    Occasion,
    Group,
    Relationship,
    Remarks,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Date,
        Field::UnknownYear,
        Field::Title,
        Field::Name,
        Field::Occasion,
        Field::Group,
        Field::Relationship,
        Field::Remarks,
    ];

    /// JSON key of the field in the submitted body
    pub fn key(&self) -> &'static str {
        match self {
            Field::Date => "date",
            Field::UnknownYear => "unknownYear",
            Field::Title => "title",
            Field::Name => "name",
            Field::Occasion => "occasion",
            Field::Group => "group",
            Field::Relationship => "relationship",
            Field::Remarks => "remarks",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Date => "Date",
            Field::UnknownYear => "Unknown year",
            Field::Title => "Title",
            Field::Name => "Name",
            Field::Occasion => "Occasion",
            Field::Group => "Group",
            Field::Relationship => "Relationship",
            Field::Remarks => "Remarks",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Field::UnknownYear | Field::Remarks)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl EntryRecord {
    /// Required fields that are still empty, in form order.
    pub fn missing_required_fields(&self) -> Vec<Field> {
        let errors = match self.validate() {
            Ok(()) => return Vec::new(),
            Err(errors) => errors,
        };

        let failed = errors.field_errors();
        Field::ALL
            .into_iter()
            .filter(|field| failed.contains_key(field.key()))
            .collect()
    }

    /// Presence check run before every submission.
    pub fn ensure_complete(&self) -> EntryResult<()> {
        let missing = self.missing_required_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(EntryError::MissingFields(missing))
        }
    }

    /// Check the selector values against the loaded reference lists.
    ///
    /// Empty values are skipped; presence is [`EntryRecord::ensure_complete`]'s job.
    pub fn check_against(&self, lists: &ReferenceLists) -> EntryResult<()> {
        for kind in ReferenceKind::ALL {
            let value = self.selection(kind);
            if value.is_empty() {
                continue;
            }
            if !lists.options(kind).iter().any(|option| option == value) {
                return Err(EntryError::NotInReferenceList {
                    field: kind.field(),
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Current value of the selector backed by `kind`
    pub fn selection(&self, kind: ReferenceKind) -> &str {
        match kind {
            ReferenceKind::Occasion => &self.occasion,
            ReferenceKind::Relationship => &self.relationship,
            ReferenceKind::Group => &self.group,
        }
    }

    /// Serialize the record as the JSON body of a write request
    pub fn to_json(&self) -> EntryResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_record() -> EntryRecord {
        EntryRecord {
            date: "2023-05-10".to_string(),
            unknown_year: false,
            title: "Gift".to_string(),
            name: "Alice".to_string(),
            occasion: "Birthday".to_string(),
            relationship: "Friend".to_string(),
            remarks: String::new(),
            group: "Close".to_string(),
        }
    }

    fn lists() -> ReferenceLists {
        ReferenceLists {
            occasions: vec!["Birthday".to_string(), "Anniversary".to_string()],
            relationships: vec!["Friend".to_string()],
            groups: vec!["Close".to_string()],
        }
    }

    #[test]
    fn test_default_is_empty() {
        let record = EntryRecord::default();
        assert_eq!(record.date, "");
        assert!(!record.unknown_year);
        assert_eq!(record.title, "");
        assert_eq!(record.remarks, "");
        assert_eq!(record.group, "");
    }

    #[test]
    fn test_serializes_with_wire_names() {
        let json = serde_json::to_value(complete_record()).unwrap();
        let object = json.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "date",
                "group",
                "name",
                "occasion",
                "relationship",
                "remarks",
                "title",
                "unknownYear"
            ]
        );
        assert_eq!(json["unknownYear"], serde_json::json!(false));
        assert_eq!(json["date"], serde_json::json!("2023-05-10"));
    }

    #[test]
    fn test_to_json_keeps_field_order() {
        let json = complete_record().to_json().unwrap();
        assert!(json.starts_with(r#"{"date":"2023-05-10","unknownYear":false,"title":"Gift""#));
        assert!(json.ends_with(r#""remarks":"","group":"Close"}"#));
    }

    #[test]
    fn test_empty_record_misses_every_required_field() {
        let missing = EntryRecord::default().missing_required_fields();
        assert_eq!(
            missing,
            vec![
                Field::Date,
                Field::Title,
                Field::Name,
                Field::Occasion,
                Field::Group,
                Field::Relationship,
            ]
        );
    }

    #[test]
    fn test_remarks_are_optional() {
        let record = complete_record();
        assert!(record.missing_required_fields().is_empty());
        assert!(record.ensure_complete().is_ok());
    }

    #[test]
    fn test_ensure_complete_reports_missing_fields() {
        let record = EntryRecord {
            name: String::new(),
            ..complete_record()
        };
        assert_eq!(
            record.ensure_complete(),
            Err(EntryError::MissingFields(vec![Field::Name]))
        );
    }

    #[test]
    fn test_check_against_accepts_known_values() {
        assert!(complete_record().check_against(&lists()).is_ok());
    }

    #[test]
    fn test_check_against_rejects_unknown_value() {
        let record = EntryRecord {
            relationship: "Colleague".to_string(),
            ..complete_record()
        };
        assert_eq!(
            record.check_against(&lists()),
            Err(EntryError::NotInReferenceList {
                field: Field::Relationship,
                value: "Colleague".to_string(),
            })
        );
    }

    #[test]
    fn test_check_against_skips_empty_values() {
        let record = EntryRecord {
            occasion: String::new(),
            ..complete_record()
        };
        assert!(record.check_against(&lists()).is_ok());
    }

    #[test]
    fn test_field_keys_match_serialized_names() {
        let json = serde_json::to_value(complete_record()).unwrap();
        for field in Field::ALL {
            assert!(json.get(field.key()).is_some(), "missing {}", field.key());
        }
    }

    #[test]
    fn test_required_fields() {
        let required: Vec<Field> = Field::ALL.into_iter().filter(Field::is_required).collect();
        assert_eq!(required.len(), 6);
        assert!(!Field::Remarks.is_required());
        assert!(!Field::UnknownYear.is_required());
    }
}
